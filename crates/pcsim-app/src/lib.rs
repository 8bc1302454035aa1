//! pcsim-app - Application state and orchestration for the PC assembly simulator
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management:
//! the placement board, shelf, selection validator, screen flow controller, boot timer,
//! configuration loading and signal handling. It has no terminal dependencies; the
//! TUI crate converts its events into [`Message`]s and renders [`AppState`].

pub mod board;
pub mod boot_sequence;
pub mod config;
pub mod dialog;
pub mod flow;
pub mod handler;
pub mod input_key;
pub mod layout;
pub mod message;
pub mod pointer;
pub mod process;
pub mod shelf;
pub mod signals;
pub mod state;
pub mod validator;

// Re-export primary types
pub use board::{BoardError, DropOutcome, PlacementBoard, PlacementToken, Slot, TokenState};
pub use flow::{transition, FlowError, FlowEvent, FlowState, Screen};
pub use handler::UpdateResult;
pub use message::Message;
pub use process::process_message;
pub use state::AppState;
