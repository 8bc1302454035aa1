//! Centralized theme for the simulator TUI.
//!
//! Widgets take colors and styles from here instead of naming
//! `Color::*` directly.

pub mod palette;
pub mod styles;
