//! Configuration file parsing for the simulator
//!
//! Supports:
//! - `--config <PATH>` - Explicit settings file
//! - `.pcsim/config.toml` - Settings next to where the simulator is launched
//! - `<config dir>/pc-assembly-sim/config.toml` - Per-user settings

pub mod settings;
pub mod types;

pub use settings::{find_settings_file, load_settings, load_settings_from, parse_settings};
pub use types::*;
