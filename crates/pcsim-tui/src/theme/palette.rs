//! Color palette for the workshop theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(12, 14, 18);
pub const CARD_BG: Color = Color::Rgb(24, 28, 36);
pub const POPUP_BG: Color = Color::Rgb(30, 34, 44);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(52, 58, 70);
pub const BORDER_ACTIVE: Color = Color::Rgb(88, 166, 255);

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(88, 166, 255);
pub const ACCENT_DIM: Color = Color::Rgb(40, 80, 130);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 224, 232);
pub const TEXT_SECONDARY: Color = Color::Rgb(150, 158, 172);
pub const TEXT_MUTED: Color = Color::Rgb(90, 98, 112);

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(80, 200, 120);
pub const STATUS_RED: Color = Color::Rgb(235, 90, 90);
pub const STATUS_YELLOW: Color = Color::Rgb(240, 190, 80);
