//! # Plane Element Rotation
//!
//! Rotates the outline of a plane element (by default a square) about a
//! center, to show the physical rotation that matches a Mohr's circle
//! rotation of twice the angle.
//!
//! ## Example
//!
//! ```rust
//! use mohr_core::calculations::square_rotation::{calculate, SquareRotationInput};
//! use mohr_core::geometry::Point;
//!
//! let result = calculate(&SquareRotationInput::unit_square(90.0)).unwrap();
//!
//! assert_eq!(result.center, Point::new(5.0, 5.0));
//! assert!(result.rotated[0].approx_eq(&Point::new(8.0, 2.0), 1e-9));
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::geometry::{centroid, rotate_point, Point};
use crate::units::Degrees;

/// Vertices of the default element, drawn corner to corner.
pub const DEFAULT_SQUARE: [Point; 4] = [
    Point::new(2.0, 2.0),
    Point::new(2.0, 8.0),
    Point::new(8.0, 8.0),
    Point::new(8.0, 2.0),
];

/// Input parameters for an element rotation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Element",
///   "vertices": [{"x": 2.0, "y": 2.0}, {"x": 2.0, "y": 8.0},
///                {"x": 8.0, "y": 8.0}, {"x": 8.0, "y": 2.0}],
///   "angle_deg": -30.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquareRotationInput {
    #[serde(default)]
    pub label: String,

    /// Outline vertices in drawing order (not closed)
    pub vertices: Vec<Point>,

    /// Rotation in degrees (positive = anticlockwise)
    pub angle_deg: f64,

    /// Rotation center; the centroid of the vertices when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<Point>,
}

impl SquareRotationInput {
    /// The default 6×6 square with corners at (2, 2) and (8, 8)
    pub fn unit_square(angle_deg: f64) -> Self {
        SquareRotationInput {
            label: String::new(),
            vertices: DEFAULT_SQUARE.to_vec(),
            angle_deg,
            center: None,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.vertices.is_empty() {
            return Err(CalcError::invalid_input(
                "vertices",
                "[]",
                "At least one vertex is required",
            ));
        }
        if let Some((i, v)) = self.vertices.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(CalcError::invalid_input(
                format!("vertices[{}]", i),
                v.to_string(),
                "Vertex coordinates must be finite",
            ));
        }
        if !self.angle_deg.is_finite() {
            return Err(CalcError::invalid_input(
                "angle_deg",
                self.angle_deg.to_string(),
                "Angle must be a finite number",
            ));
        }
        if let Some(c) = self.center.filter(|c| !c.is_finite()) {
            return Err(CalcError::invalid_input(
                "center",
                c.to_string(),
                "Center coordinates must be finite",
            ));
        }
        Ok(())
    }
}

/// Results from an element rotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquareRotationResult {
    pub angle_deg: f64,
    pub center: Point,
    pub original: Vec<Point>,
    pub rotated: Vec<Point>,
}

impl SquareRotationResult {
    /// Caption shown under the drawing. Whole angles keep their decimal
    /// point ("-30.0").
    pub fn caption(&self) -> String {
        format!("Rotation Angle: {:?} degrees", self.angle_deg)
    }
}

/// The outline with its first vertex repeated at the end, for drawing a
/// closed polygon.
pub fn closed_outline(vertices: &[Point]) -> Vec<Point> {
    let mut outline = vertices.to_vec();
    if let Some(first) = vertices.first() {
        outline.push(*first);
    }
    outline
}

/// Rotate every vertex of the element about its center.
pub fn calculate(input: &SquareRotationInput) -> CalcResult<SquareRotationResult> {
    input.validate()?;

    let center = match input.center.or_else(|| centroid(&input.vertices)) {
        Some(c) => c,
        None => return Err(CalcError::Internal { message: "centroid of empty outline".to_string() }),
    };

    let angle = Degrees(input.angle_deg);
    let rotated: Vec<Point> = input
        .vertices
        .iter()
        .map(|v| rotate_point(*v, angle, center))
        .collect();

    debug!(
        "element rotation '{}': {} vertices about {} by {}°",
        input.label,
        rotated.len(),
        center,
        input.angle_deg
    );

    Ok(SquareRotationResult {
        angle_deg: input.angle_deg,
        center,
        original: input.vertices.clone(),
        rotated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn assert_vertices_eq(actual: &[Point], expected: &[Point]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!(a.approx_eq(e, TOL), "{a} != {e}");
        }
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        let result = calculate(&SquareRotationInput::unit_square(0.0)).unwrap();
        assert_eq!(result.center, Point::new(5.0, 5.0));
        assert_vertices_eq(&result.rotated, &DEFAULT_SQUARE);
    }

    #[test]
    fn test_full_turn_is_identity() {
        let result = calculate(&SquareRotationInput::unit_square(360.0)).unwrap();
        assert_vertices_eq(&result.rotated, &DEFAULT_SQUARE);
    }

    #[test]
    fn test_quarter_turn_maps_square_onto_itself() {
        let result = calculate(&SquareRotationInput::unit_square(90.0)).unwrap();
        // Each corner moves one place anticlockwise
        assert_vertices_eq(
            &result.rotated,
            &[
                Point::new(8.0, 2.0),
                Point::new(2.0, 2.0),
                Point::new(2.0, 8.0),
                Point::new(8.0, 8.0),
            ],
        );
    }

    #[test]
    fn test_rotation_preserves_distance_to_center() {
        let result = calculate(&SquareRotationInput::unit_square(-30.0)).unwrap();
        for (orig, rot) in result.original.iter().zip(&result.rotated) {
            let d0 = orig.distance_to(&result.center);
            let d1 = rot.distance_to(&result.center);
            assert!((d0 - d1).abs() < TOL);
        }
    }

    #[test]
    fn test_explicit_center() {
        let mut input = SquareRotationInput::unit_square(180.0);
        input.center = Some(Point::new(0.0, 0.0));
        let result = calculate(&input).unwrap();
        assert!(result.rotated[0].approx_eq(&Point::new(-2.0, -2.0), TOL));
    }

    #[test]
    fn test_closed_outline() {
        let outline = closed_outline(&DEFAULT_SQUARE);
        assert_eq!(outline.len(), 5);
        assert_eq!(outline[0], outline[4]);
        assert!(closed_outline(&[]).is_empty());
    }

    #[test]
    fn test_caption() {
        let result = calculate(&SquareRotationInput::unit_square(-30.0)).unwrap();
        assert_eq!(result.caption(), "Rotation Angle: -30.0 degrees");

        let result = calculate(&SquareRotationInput::unit_square(12.5)).unwrap();
        assert_eq!(result.caption(), "Rotation Angle: 12.5 degrees");
    }

    #[test]
    fn test_invalid_inputs() {
        let mut input = SquareRotationInput::unit_square(0.0);
        input.vertices.clear();
        assert!(calculate(&input).is_err());

        let mut input = SquareRotationInput::unit_square(0.0);
        input.vertices[2].y = f64::NAN;
        match calculate(&input) {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "vertices[2]"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }

        assert!(calculate(&SquareRotationInput::unit_square(f64::NAN)).is_err());
    }
}
