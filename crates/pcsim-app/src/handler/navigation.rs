//! Back and Continue for each screen

use pcsim_core::prelude::*;

use crate::dialog::Dialog;
use crate::flow::{FlowEvent, Screen};
use crate::state::AppState;

use super::{UpdateResult, INCOMPLETE_BOARD_MESSAGE};

pub fn handle_back(state: &mut AppState) -> UpdateResult {
    if state.current_screen() == Screen::Shelf {
        let has_selections = state.shelf().is_some_and(|s| s.has_selections());
        if has_selections && state.settings.ui.confirm_discard {
            state.dialog = Some(Dialog::confirm_leave_shelf());
            return UpdateResult::none();
        }
    }

    state.apply(FlowEvent::Back);
    UpdateResult::none()
}

pub fn handle_continue(state: &mut AppState) -> UpdateResult {
    match state.current_screen() {
        Screen::Shelf => {
            let Some(shelf) = state.shelf() else {
                return UpdateResult::none();
            };
            let result = shelf.validate();
            if let Some(message) = result.alert_message(shelf.pane()) {
                debug!("Shelf blocked: {:?}", result);
                state.dialog = Some(Dialog::alert(message));
                return UpdateResult::none();
            }
            let selections = shelf.selections();
            state.apply(FlowEvent::Proceed { selections });
        }

        Screen::Worktable | Screen::ExternalConnection => {
            let Some(board) = state.board() else {
                return UpdateResult::none();
            };
            if !board.is_complete() {
                state.dialog = Some(Dialog::alert(INCOMPLETE_BOARD_MESSAGE));
                return UpdateResult::none();
            }
            let event = if state.current_screen() == Screen::Worktable {
                FlowEvent::AssemblyComplete {
                    installed: board.placed_names().into_iter().map(String::from).collect(),
                }
            } else {
                FlowEvent::ExternalComplete
            };
            state.apply(event);
        }

        screen => debug!("Continue has no meaning on the {} screen", screen),
    }
    UpdateResult::none()
}
