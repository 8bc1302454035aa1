//! pcsim-tui - Terminal UI for the PC assembly simulator
//!
//! This crate provides the ratatui-based terminal interface. It owns the
//! terminal, converts crossterm key, mouse and resize events into
//! [`pcsim_app::Message`]s and draws [`pcsim_app::AppState`] every frame.

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
