//! # Settings
//!
//! Drawing and output options, loaded from an optional TOML file. Every key
//! is optional; missing keys take their defaults.
//!
//! ## File Format
//!
//! ```toml
//! scaling_factor = 1.0
//! decimals = 2
//! stress_unit = "mpa"
//!
//! square_vertices = [
//!     { x = 2.0, y = 2.0 },
//!     { x = 2.0, y = 8.0 },
//!     { x = 8.0, y = 8.0 },
//!     { x = 8.0, y = 2.0 },
//! ]
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::calculations::square_rotation::DEFAULT_SQUARE;
use crate::errors::{CalcError, CalcResult};
use crate::geometry::Point;
use crate::units::StressUnit;

/// Largest number of decimals accepted for output formatting
pub const MAX_DECIMALS: usize = 10;

/// Output and drawing options shared by the CLI and GUI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Multiplier on the drawn Mohr's circle radius
    pub scaling_factor: f64,

    /// Decimals used when printing stresses and coordinates
    pub decimals: usize,

    /// Unit label appended to stress values
    pub stress_unit: StressUnit,

    /// Outline of the element drawn in the rotation view
    pub square_vertices: Vec<Point>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            scaling_factor: 1.0,
            decimals: 2,
            stress_unit: StressUnit::Unspecified,
            square_vertices: DEFAULT_SQUARE.to_vec(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text. `source_name` is used in errors.
    pub fn from_toml_str(text: &str, source_name: &str) -> CalcResult<Self> {
        let settings: Settings =
            toml::from_str(text).map_err(|e| CalcError::config_error(source_name, e.message()))?;
        settings.validate(source_name)?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        let settings = Self::from_toml_str(&text, &path.display().to_string())?;
        debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> CalcResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> CalcResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalcError::serialization(e.to_string()))
    }

    /// Check value ranges.
    pub fn validate(&self, source_name: &str) -> CalcResult<()> {
        if !self.scaling_factor.is_finite() || self.scaling_factor <= 0.0 {
            return Err(CalcError::config_error(
                source_name,
                format!("scaling_factor must be positive, got {}", self.scaling_factor),
            ));
        }
        if self.decimals > MAX_DECIMALS {
            return Err(CalcError::config_error(
                source_name,
                format!("decimals must be at most {}, got {}", MAX_DECIMALS, self.decimals),
            ));
        }
        if self.square_vertices.is_empty() {
            return Err(CalcError::config_error(source_name, "square_vertices must not be empty"));
        }
        if self.square_vertices.iter().any(|v| !v.is_finite()) {
            return Err(CalcError::config_error(source_name, "square_vertices must be finite"));
        }
        Ok(())
    }

    /// Format a stress value with the configured decimals and unit
    pub fn format_stress(&self, value: f64) -> String {
        self.stress_unit.format(value, self.decimals)
    }

    /// Format a point with the configured decimals
    pub fn format_point(&self, point: &Point) -> String {
        format!("{:.*}", self.decimals, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = Settings::from_toml_str("", "empty.toml").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file() {
        let text = r#"
            decimals = 3
            stress_unit = "psi"
        "#;
        let settings = Settings::from_toml_str(text, "mohr.toml").unwrap();
        assert_eq!(settings.decimals, 3);
        assert_eq!(settings.stress_unit, StressUnit::Psi);
        assert_eq!(settings.scaling_factor, 1.0);
        assert_eq!(settings.format_stress(1.5), "1.500 psi");
    }

    #[test]
    fn test_custom_vertices() {
        let text = r#"
            square_vertices = [{ x = 0.0, y = 0.0 }, { x = 1.0, y = 0.0 }, { x = 0.0, y = 1.0 }]
        "#;
        let settings = Settings::from_toml_str(text, "mohr.toml").unwrap();
        assert_eq!(settings.square_vertices.len(), 3);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Settings::from_toml_str("scaling_factor = -1.0", "mohr.toml").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");

        assert!(Settings::from_toml_str("decimals = 42", "mohr.toml").is_err());
        assert!(Settings::from_toml_str("square_vertices = []", "mohr.toml").is_err());
        assert!(Settings::from_toml_str("colour = \"red\"", "mohr.toml").is_err());
        assert!(Settings::from_toml_str("decimals = \"two\"", "mohr.toml").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load(Path::new("/nonexistent/mohr.toml")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
        assert_eq!(Settings::load_or_default(None).unwrap(), Settings::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let settings = Settings {
            decimals: 4,
            stress_unit: StressUnit::MPa,
            ..Settings::default()
        };
        let text = settings.to_toml_string().unwrap();
        let parsed = Settings::from_toml_str(&text, "roundtrip").unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_format_point() {
        let settings = Settings {
            decimals: 1,
            ..Settings::default()
        };
        assert_eq!(settings.format_point(&Point::new(60.0, -2.26)), "(60.0, -2.3)");
    }
}
