//! Terminal event polling

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use pcsim_app::input_key::InputKey;
use pcsim_app::pointer::PointerEvent;
use pcsim_app::Message;
use pcsim_core::prelude::*;
use pcsim_core::Point;
use std::time::Duration;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        _ => None, // Unsupported keys ignored
    }
}

/// Convert a crossterm mouse event to a primary-button pointer event.
///
/// Plain motion is reported as a move so buttons can show hover.
pub fn mouse_event_to_pointer(mouse: MouseEvent) -> Option<PointerEvent> {
    let point = Point::new(i32::from(mouse.column), i32::from(mouse.row));
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Down(point)),
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            Some(PointerEvent::Move(point))
        }
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Up(point)),
        _ => None,
    }
}

/// Translate one terminal event into a message.
pub fn event_to_message(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Mouse(mouse) => mouse_event_to_pointer(mouse).map(Message::Pointer),
        Event::Resize(width, height) => Some(Message::Resize { width, height }),
        _ => None,
    }
}

/// Wait up to `timeout` for a terminal event.
///
/// Returns `None` on timeout or for events the simulator ignores; ticks are
/// generated by the runner on a fixed cadence.
pub fn poll(timeout: Duration) -> Result<Option<Message>> {
    if event::poll(timeout)? {
        Ok(event_to_message(event::read()?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('a')));
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_shift_tab_is_back_tab() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
        let key = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
    }

    #[test]
    fn test_unsupported_keys_ignored() {
        let key = KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
        let key = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }

    #[test]
    fn test_left_button_maps_to_pointer_lifecycle() {
        let down = mouse(MouseEventKind::Down(MouseButton::Left), 4, 7);
        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 5, 8);
        let up = mouse(MouseEventKind::Up(MouseButton::Left), 6, 9);
        assert_eq!(
            mouse_event_to_pointer(down),
            Some(PointerEvent::Down(Point::new(4, 7)))
        );
        assert_eq!(
            mouse_event_to_pointer(drag),
            Some(PointerEvent::Move(Point::new(5, 8)))
        );
        assert_eq!(
            mouse_event_to_pointer(up),
            Some(PointerEvent::Up(Point::new(6, 9)))
        );
    }

    #[test]
    fn test_motion_without_button_is_move() {
        let moved = mouse(MouseEventKind::Moved, 1, 2);
        assert_eq!(
            mouse_event_to_pointer(moved),
            Some(PointerEvent::Move(Point::new(1, 2)))
        );
    }

    #[test]
    fn test_other_buttons_and_scroll_ignored() {
        assert_eq!(
            mouse_event_to_pointer(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0)),
            None
        );
        assert_eq!(
            mouse_event_to_pointer(mouse(MouseEventKind::ScrollDown, 0, 0)),
            None
        );
    }

    #[test]
    fn test_resize_event_becomes_message() {
        assert_eq!(
            event_to_message(Event::Resize(120, 40)),
            Some(Message::Resize {
                width: 120,
                height: 40
            })
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(event_to_message(Event::Key(release)), None);
        let press = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            event_to_message(Event::Key(press)),
            Some(Message::Key(InputKey::Enter))
        );
    }

    #[test]
    fn test_focus_events_ignored() {
        assert_eq!(event_to_message(Event::FocusGained), None);
    }
}
