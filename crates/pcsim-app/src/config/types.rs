//! Configuration types for the simulator
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Related sub-sections

use pcsim_core::ComputerType;
use serde::{Deserialize, Serialize};

/// Global application settings (from config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub boot: BootSettings,

    #[serde(default)]
    pub start: StartSettings,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Target frames per second for the event loop
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,

    /// Ask before discarding shelf selections when going back
    #[serde(default = "default_true")]
    pub confirm_discard: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            confirm_discard: true,
        }
    }
}

impl UiSettings {
    /// Poll timeout for one frame, clamped to 1..=240 fps.
    pub fn frame_interval(&self) -> std::time::Duration {
        let fps = self.frame_rate.clamp(1, 240);
        std::time::Duration::from_micros(1_000_000 / u64::from(fps))
    }
}

/// Power-on simulation settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BootSettings {
    /// Delay between pressing "Power on" and revealing the outcome
    #[serde(default = "default_boot_delay_ms")]
    pub delay_ms: u64,
}

impl Default for BootSettings {
    fn default() -> Self {
        Self {
            delay_ms: default_boot_delay_ms(),
        }
    }
}

impl BootSettings {
    pub fn delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.delay_ms)
    }
}

/// Startup behavior
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StartSettings {
    /// Skip the start and selection screens and open the shelf for this type
    #[serde(default)]
    pub computer_type: Option<ComputerType>,
}

fn default_true() -> bool {
    true
}

fn default_frame_rate() -> u32 {
    60
}

fn default_boot_delay_ms() -> u64 {
    2000
}
