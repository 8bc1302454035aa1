//! Mouse clicks and drag-and-drop

use tracing::{debug, warn};

use crate::layout::{self, ButtonId};
use crate::message::Message;
use crate::pointer::PointerEvent;
use crate::state::{AppState, ScreenState};

use super::UpdateResult;

/// The message a button sends when clicked
pub fn button_message(id: ButtonId) -> Message {
    match id {
        ButtonId::Start => Message::StartPressed,
        ButtonId::Quit => Message::Quit,
        ButtonId::ChooseType(computer_type) => Message::ChooseType(computer_type),
        ButtonId::Back => Message::Back,
        ButtonId::Continue => Message::Continue,
        ButtonId::SwitchPane => Message::SwitchPane,
        ButtonId::PowerOn => Message::PowerOn,
        ButtonId::Finish => Message::Finish,
        ButtonId::DialogOk => Message::DialogOk,
        ButtonId::DialogDiscard => Message::DialogDiscard,
        ButtonId::DialogContinue => Message::DialogContinue,
    }
}

pub fn handle_pointer(state: &mut AppState, event: PointerEvent) -> UpdateResult {
    state.pointer = Some(event.position());

    // Buttons win over anything under them; an open dialog only offers its own.
    if let PointerEvent::Down(point) = event {
        if let Some(id) = layout::button_at(&state.active_buttons(), point) {
            return UpdateResult::message(button_message(id));
        }
    }
    if state.dialog.is_some() {
        return UpdateResult::none();
    }

    let viewport = state.viewport;
    match (&mut state.screen, event) {
        (ScreenState::Shelf(shelf), PointerEvent::Down(point)) => {
            let cards = shelf.visible_cards();
            let hit = layout::shelf_card_rects(viewport, cards.len())
                .iter()
                .position(|rect| rect.contains(point));
            if let Some(index) = hit {
                return UpdateResult::message(Message::ToggleCard(cards[index].component_id));
            }
        }

        (ScreenState::Board(board), PointerEvent::Down(point)) => {
            if let Some(component_id) = board.token_at(point).map(|t| t.component_id) {
                if let Err(e) = board.begin_drag(component_id, point) {
                    warn!("Ignoring drag start: {}", e);
                }
            }
        }

        (ScreenState::Board(board), PointerEvent::Move(point)) if board.is_dragging() => {
            if let Err(e) = board.update_drag(point) {
                warn!("Ignoring drag move: {}", e);
            }
        }

        (ScreenState::Board(board), PointerEvent::Up(point)) if board.is_dragging() => {
            match board.end_drag(point) {
                Ok(outcome) => debug!("Drop outcome: {:?}", outcome),
                Err(e) => warn!("Ignoring drop: {}", e),
            }
        }

        _ => {}
    }
    UpdateResult::none()
}
