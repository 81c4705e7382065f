//! Package Classifier
//!
//! Routes a package to its handling stack based on volume, single-dimension
//! size, and mass. The dispatch rule, in precedence order: bulky and heavy
//! packages are rejected, packages that are only one of the two need special
//! handling, everything else goes to the standard stack.

use crate::error::Result;
use crate::package::Package;
use crate::stack::Stack;
use serde_json::Value;
use tracing::debug;

// =============================================================================
// Dispatch Thresholds
// =============================================================================

/// A package at or above this volume is bulky: 1,000,000 cm³
pub const BULKY_VOLUME_THRESHOLD: f64 = 1_000_000.0;

/// A package with any single dimension at or above this is bulky: 150 cm
pub const BULKY_DIMENSION_THRESHOLD: f64 = 150.0;

/// A package at or above this mass is heavy: 20 kg
pub const HEAVY_MASS_THRESHOLD: f64 = 20.0;

// =============================================================================
// Derived Metrics
// =============================================================================

/// Check whether a package is bulky, either by volume or by any single
/// dimension. Both comparisons are inclusive: a volume of exactly
/// 1,000,000 cm³ or a dimension of exactly 150 cm counts.
pub fn is_bulky(package: &Package) -> bool {
    package.volume() >= BULKY_VOLUME_THRESHOLD
        || package.width >= BULKY_DIMENSION_THRESHOLD
        || package.height >= BULKY_DIMENSION_THRESHOLD
        || package.length >= BULKY_DIMENSION_THRESHOLD
}

/// Check whether a package is heavy. Inclusive at exactly 20 kg.
pub fn is_heavy(package: &Package) -> bool {
    package.mass >= HEAVY_MASS_THRESHOLD
}

// =============================================================================
// Dispatch
// =============================================================================

/// Route a validated package to its stack.
///
/// Total over validated packages: every package maps to exactly one stack.
pub fn dispatch(package: &Package) -> Stack {
    let bulky = is_bulky(package);
    let heavy = is_heavy(package);

    let stack = if bulky && heavy {
        Stack::Rejected
    } else if bulky || heavy {
        Stack::Special
    } else {
        Stack::Standard
    };

    debug!(
        "dispatched package: volume={} bulky={} heavy={} stack={}",
        package.volume(),
        bulky,
        heavy,
        stack
    );

    stack
}

/// Classify a package from its four raw measurements.
///
/// Validates width, height, length, and mass in that order, failing on the
/// first negative or non-number argument, then routes the package to its
/// stack. Identical inputs always yield identical outputs.
pub fn classify(width: f64, height: f64, length: f64, mass: f64) -> Result<Stack> {
    let package = Package::new(width, height, length, mass)?;
    Ok(dispatch(&package))
}

/// Classify a package from an untyped JSON object.
///
/// This is where genuinely non-numeric inputs (text, null, structured
/// values) surface as type mismatches; see [`Package::from_json`].
pub fn classify_json(value: &Value) -> Result<Stack> {
    let package = Package::from_json(value)?;
    Ok(dispatch(&package))
}
