//! Abstract pointer events, independent of terminal library.
//!
//! Only the primary button is reported. Buttons activate on press, drags run
//! from press through release.

use pcsim_core::Point;

/// A primary-button pointer event in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Button pressed
    Down(Point),
    /// Pointer moved (with or without the button held)
    Move(Point),
    /// Button released
    Up(Point),
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Down(p) | PointerEvent::Move(p) | PointerEvent::Up(p) => *p,
        }
    }
}
