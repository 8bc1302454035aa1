//! Message processing
//!
//! Runs a message through the TEA update function and keeps feeding the
//! follow-up messages it produces until none is left.

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update loop
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = handler::update(state, m).message;
    }
}
