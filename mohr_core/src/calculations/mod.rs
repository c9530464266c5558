//! # Stress Transformation Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`mohr_circle`] - Mohr's circle for a plane stress state
//! - [`square_rotation`] - Rigid rotation of the plane element
//!
//! [`analyze`] runs both for one element rotation angle, which is what the
//! CLI and GUI display.

pub mod mohr_circle;
pub mod square_rotation;

use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::geometry::Point;
use crate::settings::Settings;

// Re-export commonly used types
pub use mohr_circle::{MohrCircleInput, MohrCircleResult, StressState};
pub use square_rotation::{SquareRotationInput, SquareRotationResult};

/// One element analysis: a stress state and the element rotation angle.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Element A",
///   "stress": { "sigma_x": 100.0, "sigma_y": 20.0, "tau_xy": 30.0 },
///   "angle_deg": 30.0,
///   "scaling_factor": 1.0,
///   "square_vertices": [{"x": 2.0, "y": 2.0}, {"x": 2.0, "y": 8.0},
///                       {"x": 8.0, "y": 8.0}, {"x": 8.0, "y": 2.0}]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    #[serde(default)]
    pub label: String,

    pub stress: StressState,

    /// Element rotation in degrees, shared by both calculations
    pub angle_deg: f64,

    #[serde(default = "default_scaling_factor")]
    pub scaling_factor: f64,

    #[serde(default = "default_square")]
    pub square_vertices: Vec<Point>,
}

fn default_scaling_factor() -> f64 {
    1.0
}

fn default_square() -> Vec<Point> {
    square_rotation::DEFAULT_SQUARE.to_vec()
}

impl AnalysisInput {
    /// Analysis with the default scale and square
    pub fn new(stress: StressState, angle_deg: f64) -> Self {
        AnalysisInput {
            label: String::new(),
            stress,
            angle_deg,
            scaling_factor: default_scaling_factor(),
            square_vertices: default_square(),
        }
    }

    /// Analysis using the drawing options from `settings`
    pub fn with_settings(stress: StressState, angle_deg: f64, settings: &Settings) -> Self {
        AnalysisInput {
            label: String::new(),
            stress,
            angle_deg,
            scaling_factor: settings.scaling_factor,
            square_vertices: settings.square_vertices.clone(),
        }
    }

    pub fn mohr_circle_input(&self) -> MohrCircleInput {
        MohrCircleInput {
            label: self.label.clone(),
            stress: self.stress,
            angle_deg: self.angle_deg,
            scaling_factor: self.scaling_factor,
        }
    }

    pub fn square_rotation_input(&self) -> SquareRotationInput {
        SquareRotationInput {
            label: self.label.clone(),
            vertices: self.square_vertices.clone(),
            angle_deg: self.angle_deg,
            center: None,
        }
    }
}

/// Both results for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub input: AnalysisInput,
    pub mohr_circle: MohrCircleResult,
    pub square_rotation: SquareRotationResult,
}

impl AnalysisReport {
    /// Serialize the report as pretty-printed JSON
    pub fn to_json_pretty(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Run the Mohr's circle and element rotation calculations for `input`.
pub fn analyze(input: &AnalysisInput) -> CalcResult<AnalysisReport> {
    let mohr_circle = mohr_circle::calculate(&input.mohr_circle_input())?;
    let square_rotation = square_rotation::calculate(&input.square_rotation_input())?;

    info!(
        "analysis complete: σx={} σy={} τxy={} θ={}° radius={:.4}",
        input.stress.sigma_x,
        input.stress.sigma_y,
        input.stress.tau_xy,
        input.angle_deg,
        mohr_circle.circle.radius
    );

    Ok(AnalysisReport {
        input: input.clone(),
        mohr_circle,
        square_rotation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_shares_angle() {
        let report = analyze(&AnalysisInput::new(StressState::new(100.0, 20.0, 30.0), 30.0)).unwrap();
        assert_eq!(report.mohr_circle.angle_deg, 30.0);
        assert_eq!(report.square_rotation.angle_deg, 30.0);
        assert_eq!(report.mohr_circle.circle_rotation_deg(), 60.0);
    }

    #[test]
    fn test_analysis_uses_settings() {
        let settings = Settings {
            scaling_factor: 0.5,
            square_vertices: vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0)],
            ..Settings::default()
        };
        let input = AnalysisInput::with_settings(StressState::new(100.0, 20.0, 30.0), 0.0, &settings);
        let report = analyze(&input).unwrap();
        assert!((report.mohr_circle.circle.radius - 25.0).abs() < 1e-9);
        assert_eq!(report.square_rotation.center, Point::new(2.0, 0.0));
    }

    #[test]
    fn test_analysis_propagates_errors() {
        let input = AnalysisInput::new(StressState::new(f64::NAN, 0.0, 0.0), 0.0);
        assert!(analyze(&input).is_err());

        let mut input = AnalysisInput::new(StressState::new(1.0, 0.0, 0.0), 0.0);
        input.square_vertices.clear();
        assert!(analyze(&input).is_err());
    }

    #[test]
    fn test_report_json() {
        let report = analyze(&AnalysisInput::new(StressState::new(100.0, 20.0, 30.0), 0.0)).unwrap();
        let json = report.to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["mohr_circle"]["circle"]["radius"], 50.0);
        assert_eq!(value["square_rotation"]["center"]["x"], 5.0);

        let roundtrip: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.input, report.input);
        assert_eq!(roundtrip.square_rotation.rotated.len(), 4);
    }

    #[test]
    fn test_input_json_defaults() {
        let json = r#"{ "stress": { "sigma_x": 1.0, "sigma_y": 2.0, "tau_xy": 3.0 }, "angle_deg": 5.0 }"#;
        let input: AnalysisInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.square_vertices.len(), 4);
        assert_eq!(input.scaling_factor, 1.0);
    }
}
