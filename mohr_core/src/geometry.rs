//! # Plane Geometry
//!
//! Points and the two rotation helpers the calculator is built on:
//!
//! - [`rotate_segment`] turns a segment about its own midpoint (used on
//!   Mohr's circle with 2θ)
//! - [`rotate_point`] turns a single point about any center (used for the
//!   physical element with θ)
//!
//! Both apply the same matrix `[cos φ, -sin φ; sin φ, cos φ]`.
//!
//! ## Example
//!
//! ```rust
//! use mohr_core::geometry::{rotate_segment, Point};
//! use mohr_core::units::Radians;
//!
//! let a = Point::new(100.0, 30.0);
//! let b = Point::new(20.0, -30.0);
//! let (a2, b2) = rotate_segment(a, b, Radians(std::f64::consts::PI));
//!
//! assert!(a2.approx_eq(&b, 1e-9));
//! assert!(b2.approx_eq(&a, 1e-9));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::units::{Degrees, Radians};

/// A point in the plane.
///
/// On Mohr's circle `x` is the normal stress and `y` the shear stress.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Midpoint between this point and `other`
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new(self.x / 2.0 + other.x / 2.0, self.y / 2.0 + other.y / 2.0)
    }

    /// Euclidean distance to `other`
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Rotate about `center` by `angle` (anticlockwise positive)
    pub fn rotate_about(&self, center: &Point, angle: Radians) -> Point {
        let (cos, sin) = angle.cos_sin();
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        Point::new(
            center.x + cos * dx - sin * dy,
            center.y + sin * dx + cos * dy,
        )
    }

    /// True when both coordinates are within `tolerance` of `other`
    pub fn approx_eq(&self, other: &Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Formats as `(x, y)`. Precision defaults to two decimals, so
/// `format!("{}", p)` matches the plot annotations and `{:.4}` is honored.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(f, "({:.*}, {:.*})", precision, self.x, precision, self.y)
    }
}

/// Rotate the segment `a`–`b` about its midpoint by `angle`.
///
/// Returns the rotated endpoints in the same order. Length and midpoint are
/// preserved; `angle = π` swaps the endpoints.
pub fn rotate_segment(a: Point, b: Point, angle: Radians) -> (Point, Point) {
    let mid = a.midpoint(&b);
    (a.rotate_about(&mid, angle), b.rotate_about(&mid, angle))
}

/// Rotate `point` by `angle` degrees about `center`.
pub fn rotate_point(point: Point, angle: Degrees, center: Point) -> Point {
    point.rotate_about(&center, angle.to_radians())
}

/// Mean of the given points, or `None` when there are none.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point::new(sx / n, sy / n))
}
