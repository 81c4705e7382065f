//! Package Measurements
//!
//! The validated physical measurements of a single package, plus the
//! untyped-input boundary for callers holding raw JSON instead of typed
//! scalars.
//!
//! Construction always validates, so an existing [`Package`] is known to
//! hold four non-negative real numbers and every operation over it is
//! total. Parameters are checked in order width, height, length, mass
//! and the first violation fails construction.

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::Value;

// =============================================================================
// Package
// =============================================================================

/// Physical measurements of a single package
///
/// Deserialization from untyped input goes through [`Package::from_json`]
/// so that the validation invariant holds for every constructed value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Package {
    /// Width in centimeters
    pub width: f64,
    /// Height in centimeters
    pub height: f64,
    /// Length in centimeters
    pub length: f64,
    /// Mass in kilograms
    pub mass: f64,
}

impl Package {
    /// Validate and construct a package from its four measurements
    pub fn new(width: f64, height: f64, length: f64, mass: f64) -> Result<Self> {
        check_measurement("width", width)?;
        check_measurement("height", height)?;
        check_measurement("length", length)?;
        check_measurement("mass", mass)?;

        Ok(Self {
            width,
            height,
            length,
            mass,
        })
    }

    /// Volume in cubic centimeters
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.length
    }

    /// Construct a package from an untyped JSON object.
    ///
    /// The object must carry numeric `width`, `height`, `length`, and
    /// `mass` fields. A missing, null, or non-numeric field fails with a
    /// type mismatch naming the field and the actual JSON type; numeric
    /// fields then go through the same range validation as [`Package::new`].
    pub fn from_json(value: &Value) -> Result<Self> {
        let width = json_measurement(value, "width")?;
        let height = json_measurement(value, "height")?;
        let length = json_measurement(value, "length")?;
        let mass = json_measurement(value, "mass")?;

        Ok(Self {
            width,
            height,
            length,
            mass,
        })
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Reject NaN (the one non-number an `f64` can carry) and negative values
fn check_measurement(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_nan() {
        return Err(Error::TypeMismatch {
            parameter,
            actual: "NaN".to_string(),
        });
    }
    if value < 0.0 {
        return Err(Error::NegativeMeasurement { parameter, value });
    }
    Ok(())
}

fn json_measurement(object: &Value, parameter: &'static str) -> Result<f64> {
    let field = match object.get(parameter) {
        Some(field) => field,
        None => {
            return Err(Error::TypeMismatch {
                parameter,
                actual: "missing".to_string(),
            })
        }
    };

    match field.as_f64() {
        Some(value) => {
            check_measurement(parameter, value)?;
            Ok(value)
        }
        None => Err(Error::TypeMismatch {
            parameter,
            actual: json_type_name(field).to_string(),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
