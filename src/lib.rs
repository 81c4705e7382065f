//! Package Sorter - Dispatch Stack Classifier
//!
//! Routes packages to robotic handling stacks from their physical
//! dimensions and mass. The whole system is one stateless decision
//! function: validate four measurements, derive volume / bulkiness /
//! heaviness, dispatch to a stack.
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌───────────┐
//! │ width height │   │  validation  │   │   derived    │   │ STANDARD  │
//! │ length mass  ├──▶│ (type/range) ├──▶│ volume bulky ├──▶│ SPECIAL   │
//! │              │   │              │   │    heavy     │   │ REJECTED  │
//! └──────────────┘   └──────────────┘   └──────────────┘   └───────────┘
//! ```
//!
//! Every call is independent: no shared state, no locks, no I/O. Identical
//! inputs always yield identical outputs, so the classifier is safe to call
//! from any number of callers without coordination.
//!
//! # Modules
//!
//! - [`classifier`]: dispatch thresholds, derived metrics, classification
//! - [`package`]: validated measurements and the untyped-input boundary
//! - [`stack`]: the three handling stacks
//! - [`error`]: error types and handling

pub mod classifier;
pub mod error;
pub mod package;
pub mod stack;

// Re-export commonly used types
pub use classifier::{
    classify, classify_json, dispatch, is_bulky, is_heavy, BULKY_DIMENSION_THRESHOLD,
    BULKY_VOLUME_THRESHOLD, HEAVY_MASS_THRESHOLD,
};

pub use error::{Error, Result};

pub use package::Package;

pub use stack::Stack;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
