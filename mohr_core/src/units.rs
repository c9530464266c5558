//! # Unit Types
//!
//! Lightweight wrappers for the quantities the calculator works with.
//!
//! ## Angles
//!
//! Angles are entered in degrees and converted to radians for the
//! trigonometry. Keeping the two as distinct newtypes makes it impossible to
//! feed degrees to a rotation that expects radians.
//!
//! ## Stresses
//!
//! Stress values are plain `f64` in whatever unit the user works in. The
//! [`StressUnit`] enum only labels output; no conversion happens.
//!
//! ## Example
//!
//! ```rust
//! use mohr_core::units::{Degrees, Radians};
//!
//! let angle = Degrees(90.0);
//! let rad: Radians = angle.into();
//! assert!((rad.0 - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//!
//! // A physical rotation of θ is a rotation of 2θ on Mohr's circle
//! assert_eq!(angle.doubled(), Degrees(180.0));
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in degrees (positive = anticlockwise)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians (positive = anticlockwise)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

impl Degrees {
    /// The matching rotation on Mohr's circle (2θ)
    pub fn doubled(self) -> Self {
        Degrees(self.0 * 2.0)
    }

    /// Convert to radians
    pub fn to_radians(self) -> Radians {
        self.into()
    }
}

impl Radians {
    /// Cosine and sine of the angle, in that order
    pub fn cos_sin(self) -> (f64, f64) {
        let (sin, cos) = self.0.sin_cos();
        (cos, sin)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Unit label for stress values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressUnit {
    /// No unit label
    #[default]
    Unspecified,
    /// Pascal
    Pa,
    /// Kilopascal
    KPa,
    /// Megapascal
    MPa,
    /// Pounds per square inch
    Psi,
    /// Kips per square inch
    Ksi,
}

impl StressUnit {
    /// All stress units for UI selection
    pub const ALL: [StressUnit; 6] = [
        StressUnit::Unspecified,
        StressUnit::Pa,
        StressUnit::KPa,
        StressUnit::MPa,
        StressUnit::Psi,
        StressUnit::Ksi,
    ];

    /// Short symbol appended to values ("" when unspecified)
    pub fn symbol(&self) -> &'static str {
        match self {
            StressUnit::Unspecified => "",
            StressUnit::Pa => "Pa",
            StressUnit::KPa => "kPa",
            StressUnit::MPa => "MPa",
            StressUnit::Psi => "psi",
            StressUnit::Ksi => "ksi",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            StressUnit::Unspecified => "(none)",
            StressUnit::Pa => "Pa",
            StressUnit::KPa => "kPa",
            StressUnit::MPa => "MPa",
            StressUnit::Psi => "psi",
            StressUnit::Ksi => "ksi",
        }
    }

    /// Format a stress value with this unit's symbol
    pub fn format(&self, value: f64, decimals: usize) -> String {
        match self {
            StressUnit::Unspecified => format!("{:.*}", decimals, value),
            _ => format!("{:.*} {}", decimals, value, self.symbol()),
        }
    }
}

impl std::fmt::Display for StressUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_degrees_to_radians() {
        let rad: Radians = Degrees(180.0).into();
        assert!((rad.0 - PI).abs() < 1e-12);
    }

    #[test]
    fn test_radians_to_degrees() {
        let deg: Degrees = Radians(PI / 4.0).into();
        assert!((deg.0 - 45.0).abs() < 1e-12);
    }

    #[test]
    fn test_doubled_angle() {
        assert_eq!(Degrees(-15.0).doubled(), Degrees(-30.0));
    }

    #[test]
    fn test_cos_sin() {
        let (c, s) = Degrees(90.0).to_radians().cos_sin();
        assert!(c.abs() < 1e-12);
        assert!((s - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_stress_unit_format() {
        assert_eq!(StressUnit::MPa.format(12.345, 2), "12.35 MPa");
        assert_eq!(StressUnit::Unspecified.format(-3.0, 1), "-3.0");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Degrees(30.0)).unwrap();
        assert_eq!(json, "30.0");

        let unit: StressUnit = serde_json::from_str("\"ksi\"").unwrap();
        assert_eq!(unit, StressUnit::Ksi);
    }
}
