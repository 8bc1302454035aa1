//! Core domain type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of machine being assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComputerType {
    Laptop,
    Desktop,
}

impl ComputerType {
    pub const ALL: [ComputerType; 2] = [ComputerType::Laptop, ComputerType::Desktop];

    /// Capitalized name used in titles ("Laptop", "Desktop").
    pub fn label(&self) -> &'static str {
        match self {
            ComputerType::Laptop => "Laptop",
            ComputerType::Desktop => "Desktop",
        }
    }

    /// Whether a component of `category` can be selected for this machine.
    pub fn accepts(&self, category: ComponentCategory) -> bool {
        match (self, category) {
            (ComputerType::Laptop, ComponentCategory::DesktopOnly) => false,
            _ => true,
        }
    }
}

impl fmt::Display for ComputerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComputerType::Laptop => write!(f, "laptop"),
            ComputerType::Desktop => write!(f, "desktop"),
        }
    }
}

impl FromStr for ComputerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "laptop" => Ok(ComputerType::Laptop),
            "desktop" => Ok(ComputerType::Desktop),
            other => Err(format!(
                "unknown computer type '{other}' (expected 'laptop' or 'desktop')"
            )),
        }
    }
}

/// Catalog category of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentCategory {
    /// Internal part that fits both laptops and desktops
    Common,
    /// Internal part only a desktop tower can take
    DesktopOnly,
    /// Peripheral connected from the outside
    External,
}

impl ComponentCategory {
    pub fn group(&self) -> ComponentGroup {
        match self {
            ComponentCategory::Common | ComponentCategory::DesktopOnly => ComponentGroup::Internal,
            ComponentCategory::External => ComponentGroup::External,
        }
    }
}

/// Which placement board a component belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComponentGroup {
    /// Parts installed inside the chassis (worktable screen)
    #[default]
    Internal,
    /// Peripherals plugged into the machine (external connection screen)
    External,
}

impl ComponentGroup {
    pub fn label(&self) -> &'static str {
        match self {
            ComponentGroup::Internal => "internal",
            ComponentGroup::External => "external",
        }
    }
}

/// Result of the simulated power-on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootOutcome {
    /// Every required component is installed
    On,
    /// At least one required component is missing
    Off,
}

impl BootOutcome {
    pub fn is_on(&self) -> bool {
        matches!(self, BootOutcome::On)
    }
}
