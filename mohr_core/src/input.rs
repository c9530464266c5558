//! # Scalar Inputs
//!
//! The calculator takes four numbers, always asked for in the same order.
//! [`ScalarField`] names them and carries their prompt text; [`parse_scalar`]
//! turns user text into a finite `f64` or a structured error.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// One of the four scalar inputs, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarField {
    SigmaX,
    SigmaY,
    TauXy,
    AngleDeg,
}

impl ScalarField {
    /// All fields in the order they are requested
    pub const ALL: [ScalarField; 4] = [
        ScalarField::SigmaX,
        ScalarField::SigmaY,
        ScalarField::TauXy,
        ScalarField::AngleDeg,
    ];

    /// Field name used in errors and JSON
    pub fn name(&self) -> &'static str {
        match self {
            ScalarField::SigmaX => "sigma_x",
            ScalarField::SigmaY => "sigma_y",
            ScalarField::TauXy => "tau_xy",
            ScalarField::AngleDeg => "angle_deg",
        }
    }

    /// Prompt shown when reading the value interactively
    pub fn prompt(&self) -> &'static str {
        match self {
            ScalarField::SigmaX => "Enter the normal stress along x direction",
            ScalarField::SigmaY => "Enter the normal stress along y direction",
            ScalarField::TauXy => "Enter the shear stress along x direction",
            ScalarField::AngleDeg => {
                "Enter the angle in degrees: +ve for anticlockwise rotation, -ve for clockwise rotation"
            }
        }
    }

    /// Short label for forms
    pub fn display_name(&self) -> &'static str {
        match self {
            ScalarField::SigmaX => "σx",
            ScalarField::SigmaY => "σy",
            ScalarField::TauXy => "τxy",
            ScalarField::AngleDeg => "θ (deg)",
        }
    }

    /// Parse `text` as the value of this field
    pub fn parse(&self, text: &str) -> CalcResult<f64> {
        parse_scalar(self.name(), text)
    }
}

/// Parse a scalar typed by the user.
///
/// Surrounding whitespace is ignored. Empty text, anything `f64` cannot
/// parse, and NaN or infinite values are rejected.
///
/// ```rust
/// use mohr_core::input::parse_scalar;
///
/// assert_eq!(parse_scalar("sigma_x", " -12.5\n").unwrap(), -12.5);
/// assert!(parse_scalar("sigma_x", "twelve").is_err());
/// ```
pub fn parse_scalar(field: &str, text: &str) -> CalcResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CalcError::invalid_input(field, "", "A value is required"));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| CalcError::invalid_input(field, trimmed, "Expected a number"))?;

    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, trimmed, "Value must be finite"));
    }
    Ok(value)
}
