//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use crate::dialog::{Dialog, PendingAction};
use crate::flow::FlowEvent;
use crate::message::Message;
use crate::state::AppState;
use tracing::{debug, info};

use super::{keys::handle_key, navigation, pointer::handle_pointer, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    if state.dialog.is_some() && message.is_screen_intent() {
        debug!("Dialog open, ignoring {:?}", message);
        return UpdateResult::none();
    }

    match message {
        Message::Quit => {
            state.apply(FlowEvent::WindowClosed);
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Pointer(event) => handle_pointer(state, event),

        Message::Resize { width, height } => {
            state.set_viewport(width, height);
            UpdateResult::none()
        }

        Message::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            if let Some(boot) = state.boot_mut() {
                if let Some(report) = boot.poll(Instant::now()) {
                    info!(
                        "Boot resolved: {:?} (missing: {:?})",
                        report.outcome, report.missing
                    );
                }
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Screen Messages
        // ─────────────────────────────────────────────────────────
        Message::StartPressed => {
            state.apply(FlowEvent::Confirm);
            UpdateResult::none()
        }

        Message::ChooseType(computer_type) => {
            state.apply(FlowEvent::TypeChosen(computer_type));
            UpdateResult::none()
        }

        Message::Back => navigation::handle_back(state),

        Message::Continue => navigation::handle_continue(state),

        Message::SwitchPane => {
            if let Some(shelf) = state.shelf_mut() {
                shelf.switch_pane();
            }
            UpdateResult::none()
        }

        Message::ToggleCard(component_id) => {
            if let Some(shelf) = state.shelf_mut() {
                if !shelf.toggle(component_id) {
                    debug!("Card {} cannot be toggled", component_id);
                }
            }
            UpdateResult::none()
        }

        Message::PowerOn => {
            if let Some(boot) = state.boot_mut() {
                if boot.power_on(Instant::now()) {
                    info!("Power on");
                }
            }
            UpdateResult::none()
        }

        Message::Finish => {
            state.apply(FlowEvent::Finish);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Dialog Messages
        // ─────────────────────────────────────────────────────────
        Message::DialogOk | Message::DialogContinue => {
            state.dialog = None;
            UpdateResult::none()
        }

        Message::DialogDiscard => {
            if let Some(Dialog::Confirm { action, .. }) = state.dialog.take() {
                match action {
                    PendingAction::LeaveShelf => {
                        if let Some(shelf) = state.shelf_mut() {
                            shelf.clear();
                        }
                        state.apply(FlowEvent::Back);
                    }
                }
            }
            UpdateResult::none()
        }
    }
}
