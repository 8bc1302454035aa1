//! Boot outcome resolver
//!
//! Decides whether an assembled machine powers on by checking that every
//! required component for its type was installed. Pure and total: any input,
//! including an empty one, yields an outcome.

use std::collections::HashSet;

use crate::normalize::normalize_name;
use crate::types::{BootOutcome, ComputerType};

const LAPTOP_REQUIRED: &[&str] = &["Ryzen 7 5700X", "RAM DDR4 8GB", "Kingston SSD 1TB"];

const DESKTOP_REQUIRED: &[&str] = &[
    "RAM DDR4 8GB",
    "Ryzen 7 5700X",
    "Kingston SSD 1TB",
    "Cooler Master H212",
    "Ventilador ARGB",
    "PSU 600W",
];

/// Outcome of a power-on together with what was missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootReport {
    pub computer_type: ComputerType,
    pub outcome: BootOutcome,
    /// Required components that were not installed (empty when `On`)
    pub missing: Vec<&'static str>,
}

impl BootReport {
    /// Resolve `placed` against the required table for `computer_type`.
    pub fn new<S: AsRef<str>>(computer_type: ComputerType, placed: &[S]) -> Self {
        let missing = missing(computer_type, placed);
        let outcome = if missing.is_empty() {
            BootOutcome::On
        } else {
            BootOutcome::Off
        };
        Self {
            computer_type,
            outcome,
            missing,
        }
    }
}

/// Display names that must be installed for `computer_type` to boot.
pub fn required_components(computer_type: ComputerType) -> &'static [&'static str] {
    match computer_type {
        ComputerType::Laptop => LAPTOP_REQUIRED,
        ComputerType::Desktop => DESKTOP_REQUIRED,
    }
}

/// Resolve the power-on outcome for the installed components.
pub fn resolve<S: AsRef<str>>(computer_type: ComputerType, placed: &[S]) -> BootOutcome {
    if missing(computer_type, placed).is_empty() {
        BootOutcome::On
    } else {
        BootOutcome::Off
    }
}

/// Required components absent from `placed`, in table order.
pub fn missing<S: AsRef<str>>(computer_type: ComputerType, placed: &[S]) -> Vec<&'static str> {
    let present: HashSet<String> = placed.iter().map(|n| normalize_name(n.as_ref())).collect();

    required_components(computer_type)
        .iter()
        .copied()
        .filter(|required| !present.contains(&normalize_name(required)))
        .collect()
}
