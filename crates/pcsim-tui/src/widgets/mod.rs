//! Widget components for the simulator TUI

mod board;
mod boot;
mod button;
mod dialog;
mod header;
mod selection;
mod shelf;
mod start;

pub use board::BoardView;
pub use boot::{outcome_text, report_lines, BootView};
pub use button::ButtonView;
pub use dialog::DialogView;
pub use header::Header;
pub use selection::SelectionView;
pub use shelf::ShelfView;
pub use start::StartView;

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Clip a board-space rectangle to `bounds`.
///
/// Returns `None` when nothing of `rect` is visible.
pub fn clip(rect: pcsim_core::Rect, bounds: Rect) -> Option<Rect> {
    let left = rect.x.max(i32::from(bounds.x));
    let top = rect.y.max(i32::from(bounds.y));
    let right = rect.right().min(i32::from(bounds.right()));
    let bottom = rect.bottom().min(i32::from(bounds.bottom()));
    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

/// Shorten `text` to `max_width` display columns, ending in an ellipsis.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}
