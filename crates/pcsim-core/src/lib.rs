//! # pcsim-core - Core Domain Types
//!
//! Foundation crate for the PC assembly simulator. Provides the component
//! catalog, board geometry, name normalization, the boot outcome resolver,
//! error handling and logging setup.
//!
//! This crate has **zero internal dependencies** and knows nothing about the
//! terminal. Everything here is pure data and pure functions.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ComputerType`] - Laptop or desktop
//! - [`ComponentCategory`] - Common, desktop-only or external
//! - [`ComponentGroup`] - Which board a component lands on (internal/external)
//! - [`BootOutcome`] - Result of the simulated power-on
//!
//! ### Catalog (`catalog`)
//! - [`Catalog`] - Static registry of components and the slots they fit
//! - [`ComponentDefinition`], [`SlotDefinition`]
//!
//! ### Geometry (`geometry`)
//! - [`Point`], [`Rect`] - Cell-space coordinates used for hit testing
//!
//! ### Boot (`boot`, `normalize`)
//! - [`resolve()`] - Decide whether an assembled machine powers on
//! - [`BootReport`] - Outcome plus the required parts that were missing
//! - [`normalize_name()`] - Case/diacritic/quote-insensitive name key
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`]

pub mod boot;
pub mod catalog;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod normalize;
pub mod types;

/// Prelude for common imports used throughout all simulator crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use boot::{missing, required_components, resolve, BootReport};
pub use catalog::{Catalog, ComponentDefinition, SlotDefinition};
pub use error::{Error, Result};
pub use geometry::{Point, Rect};
pub use normalize::normalize_name;
pub use types::{BootOutcome, ComponentCategory, ComponentGroup, ComputerType};
