//! CLI argument validators.
//!
//! Shared validation functions for CLI argument parsing.

use crate::constants::{threshold, tolerance};
use crate::error::{Error, Result};

/// Convert a tolerance percentage (0-100) into a loudness threshold fraction.
pub fn tolerance_to_threshold(percent: f64) -> Result<f32> {
    if !(tolerance::MIN..=tolerance::MAX).contains(&percent) {
        return Err(Error::InvalidTolerance { value: percent });
    }

    #[allow(clippy::cast_possible_truncation)]
    let fraction = (percent / 100.0) as f32;
    Ok(fraction)
}

/// Parse a tolerance percentage and return it as a threshold fraction.
pub fn parse_tolerance(s: &str) -> std::result::Result<f32, String> {
    let value = parse_bounded_float(s, tolerance::MIN, tolerance::MAX, "tolerance")?;
    tolerance_to_threshold(value).map_err(|e| e.to_string())
}

/// Parse and validate a loudness threshold fraction (0.0-1.0).
pub fn parse_threshold(s: &str) -> std::result::Result<f32, String> {
    let value = parse_bounded_float(
        s,
        f64::from(threshold::MIN),
        f64::from(threshold::MAX),
        "threshold",
    )?;

    #[allow(clippy::cast_possible_truncation)]
    Ok(value as f32)
}

/// Parse and validate a bounded float value.
///
/// # Arguments
///
/// * `s` - The string to parse
/// * `min` - Minimum allowed value (inclusive)
/// * `max` - Maximum allowed value (inclusive)
/// * `name` - Name of the parameter for error messages
pub fn parse_bounded_float(
    s: &str,
    min: f64,
    max: f64,
    name: &str,
) -> std::result::Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(min..=max).contains(&value) {
        return Err(format!(
            "{name} must be between {min} and {max}, got {value}"
        ));
    }

    Ok(value)
}
