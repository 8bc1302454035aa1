//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per screen
//! - `pointer`: Mouse clicks and drag-and-drop
//! - `navigation`: Back/Continue handling for each screen

pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod pointer;
pub(crate) mod update;


use crate::message::Message;

// Re-export main entry point
pub use update::update;

pub use keys::handle_key;

/// Alert shown when Continue is pressed on an unfinished board
pub const INCOMPLETE_BOARD_MESSAGE: &str = "Drag every card onto its slot to continue";

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self { message: Some(msg) }
    }
}
