//! Error types for the package sorter
//!
//! Validation can fail in exactly two ways: an argument that is not a
//! real number, or an argument that is numeric but negative. Both carry
//! the name of the offending parameter so callers can tell a caller-side
//! bug apart from bad measurement data.

use thiserror::Error;

/// Unified error type for measurement validation
#[derive(Error, Debug)]
pub enum Error {
    /// An argument that is not a real number. At the untyped boundary this
    /// covers text, null/absent, and structured values; through the typed
    /// API the only non-number an `f64` can carry is NaN.
    #[error("{parameter} must be a number, got {actual}")]
    TypeMismatch {
        parameter: &'static str,
        actual: String,
    },

    /// An argument that is numeric but negative.
    #[error("{parameter} cannot be negative, got {value}")]
    NegativeMeasurement {
        parameter: &'static str,
        value: f64,
    },
}

impl Error {
    /// Name of the parameter that failed validation
    pub fn parameter(&self) -> &'static str {
        match self {
            Error::TypeMismatch { parameter, .. } => parameter,
            Error::NegativeMeasurement { parameter, .. } => parameter,
        }
    }

    /// Check if this is a type mismatch rather than a range violation
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }
}

/// Result type alias for the package sorter
pub type Result<T> = std::result::Result<T, Error>;
