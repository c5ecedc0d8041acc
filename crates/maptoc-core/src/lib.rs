//! # maptoc-core - Core Domain Types
//!
//! Foundation crate for maptoc. Provides the domain types shared by the
//! settings panel core, capability metadata parsing, error handling, and
//! logging initialization.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`NodeId`], [`NodeKind`] - Identity of a layer or group in the map content tree
//! - [`TargetDescriptor`] - Which node the settings panel currently targets
//! - [`Entity`] - A layer or group with its persisted configuration
//! - [`Resolved`] - Tagged resolution result (`None` | `Layer` | `Group`)
//! - [`SettingsValue`], [`SettingsPatch`] - Opaque configuration mappings
//! - [`DockLayoutMetrics`] - Read-only dock layout measurement
//!
//! ### Capabilities (`capabilities`)
//! - [`LayerCapabilities`] - Capability metadata fetched for a layer, convertible
//!   into a settings patch
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use maptoc_core::prelude::*;
//! ```

pub mod capabilities;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all maptoc crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use capabilities::{CapabilityDimension, CapabilityStyle, LayerCapabilities};
pub use error::{Error, Result, ResultExt};
pub use types::{
    DockLayoutMetrics, Entity, NodeId, NodeKind, Resolved, SettingsPatch, SettingsValue,
    TargetDescriptor,
};
