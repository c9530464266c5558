//! # Mohr's Circle Calculation
//!
//! Transforms a plane stress state `(σx, σy, τxy)` through a rotation of the
//! element and locates every point drawn on Mohr's circle.
//!
//! ## Conventions
//!
//! - Points are plotted as `(normal stress, shear stress)`
//! - The given stress points are `(σx, τxy)` and `(σy, -τxy)`
//! - A rotation of the element by θ is a rotation of the given diameter by
//!   2θ about its midpoint (the circle center), anticlockwise positive
//!
//! ## Example
//!
//! ```rust
//! use mohr_core::calculations::mohr_circle::{calculate, MohrCircleInput, StressState};
//!
//! let input = MohrCircleInput::new(StressState::new(100.0, 20.0, 30.0), 0.0);
//! let result = calculate(&input).unwrap();
//!
//! assert!((result.circle.center.x - 60.0).abs() < 1e-9);
//! assert!((result.circle.radius - 50.0).abs() < 1e-9);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::geometry::{rotate_segment, Point};
use crate::units::{Degrees, Radians};

/// Plane stress components.
///
/// ## JSON Example
///
/// ```json
/// { "sigma_x": 100.0, "sigma_y": 20.0, "tau_xy": 30.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StressState {
    /// Normal stress along x
    pub sigma_x: f64,

    /// Normal stress along y
    pub sigma_y: f64,

    /// Shear stress on the x face
    pub tau_xy: f64,
}

impl StressState {
    pub fn new(sigma_x: f64, sigma_y: f64, tau_xy: f64) -> Self {
        StressState {
            sigma_x,
            sigma_y,
            tau_xy,
        }
    }

    /// Validate that every component is a finite number.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("sigma_x", self.sigma_x),
            ("sigma_y", self.sigma_y),
            ("tau_xy", self.tau_xy),
        ] {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Stress must be a finite number",
                ));
            }
        }
        Ok(())
    }

    /// The two stress points on the circle: `(σx, τxy)` and `(σy, -τxy)`
    pub fn given_points(&self) -> [Point; 2] {
        [
            Point::new(self.sigma_x, self.tau_xy),
            Point::new(self.sigma_y, -self.tau_xy),
        ]
    }

    /// The same state viewed from the y face: `(σy, σx, -τxy)`
    pub fn swapped(&self) -> Self {
        StressState::new(self.sigma_y, self.sigma_x, -self.tau_xy)
    }

    /// Average normal stress (σx + σy) / 2
    pub fn mean_normal(&self) -> f64 {
        self.sigma_x / 2.0 + self.sigma_y / 2.0
    }

    /// Half the normal stress difference (σx - σy) / 2
    pub fn half_difference(&self) -> f64 {
        self.sigma_x / 2.0 - self.sigma_y / 2.0
    }
}

/// Mohr's circle: center on the normal-stress axis and a radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    /// Always >= 0
    pub radius: f64,
}

impl Circle {
    /// Circle for `stress`: center `((σx+σy)/2, 0)`,
    /// radius `sqrt(((σx-σy)/2)² + τxy²)`.
    pub fn from_stress(stress: &StressState) -> Self {
        Self::from_stress_scaled(stress, 1.0)
    }

    /// Same as [`Circle::from_stress`] with the radius multiplied by
    /// `scaling_factor`. Only the drawn circle is scaled; stress points are not.
    pub fn from_stress_scaled(stress: &StressState, scaling_factor: f64) -> Self {
        Circle {
            center: Point::new(stress.mean_normal(), 0.0),
            radius: scaling_factor * stress.half_difference().hypot(stress.tau_xy),
        }
    }

    /// Where the circle crosses the normal-stress axis, left then right.
    pub fn diameter_endpoints(&self) -> [Point; 2] {
        [
            Point::new(self.center.x - self.radius, 0.0),
            Point::new(self.center.x + self.radius, 0.0),
        ]
    }

    /// True when `point` lies on the circle within `tolerance`
    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        (self.center.distance_to(point) - self.radius).abs() <= tolerance
    }
}

/// Principal values read off the circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrincipalStresses {
    /// Major principal stress σ1 = center + radius
    pub sigma_1: f64,

    /// Minor principal stress σ2 = center - radius
    pub sigma_2: f64,

    /// Maximum in-plane shear stress (the radius)
    pub max_shear: f64,

    /// Principal angle θp = ½·atan2(2τxy, σx - σy), in degrees.
    ///
    /// Rotating the element by `-principal_angle_deg` brings Given Point 1
    /// onto the normal-stress axis at σ1.
    pub principal_angle_deg: f64,
}

impl PrincipalStresses {
    fn from_stress(stress: &StressState) -> Self {
        let circle = Circle::from_stress(stress);
        let two_theta = stress.tau_xy.atan2(stress.half_difference());
        PrincipalStresses {
            sigma_1: circle.center.x + circle.radius,
            sigma_2: circle.center.x - circle.radius,
            max_shear: circle.radius,
            principal_angle_deg: Degrees::from(Radians(two_theta)).0 / 2.0,
        }
    }
}

/// Input parameters for a Mohr's circle.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Element A",
///   "stress": { "sigma_x": 100.0, "sigma_y": 20.0, "tau_xy": 30.0 },
///   "angle_deg": 15.0,
///   "scaling_factor": 1.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MohrCircleInput {
    /// User label for this element
    #[serde(default)]
    pub label: String,

    pub stress: StressState,

    /// Element rotation in degrees (positive = anticlockwise)
    pub angle_deg: f64,

    /// Multiplier on the drawn radius (1.0 = true scale)
    #[serde(default = "default_scaling_factor")]
    pub scaling_factor: f64,
}

fn default_scaling_factor() -> f64 {
    1.0
}

impl MohrCircleInput {
    pub fn new(stress: StressState, angle_deg: f64) -> Self {
        MohrCircleInput {
            label: String::new(),
            stress,
            angle_deg,
            scaling_factor: default_scaling_factor(),
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        self.stress.validate()?;
        if !self.angle_deg.is_finite() {
            return Err(CalcError::invalid_input(
                "angle_deg",
                self.angle_deg.to_string(),
                "Angle must be a finite number",
            ));
        }
        if !self.scaling_factor.is_finite() || self.scaling_factor <= 0.0 {
            return Err(CalcError::invalid_input(
                "scaling_factor",
                self.scaling_factor.to_string(),
                "Scaling factor must be positive",
            ));
        }
        Ok(())
    }
}

/// A labelled point for plot annotations and text output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annotation {
    pub label: &'static str,
    pub point: Point,
}

/// Results from a Mohr's circle calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MohrCircleResult {
    pub stress: StressState,

    /// Element rotation in degrees (the circle rotation is twice this)
    pub angle_deg: f64,

    pub circle: Circle,

    /// `(σx, τxy)` and `(σy, -τxy)`
    pub given_points: [Point; 2],

    /// The given points after a 2θ rotation about the center
    pub rotated_points: [Point; 2],

    /// Circle intersections with the normal-stress axis, left then right
    pub diameter_endpoints: [Point; 2],

    pub principal: PrincipalStresses,
}

impl MohrCircleResult {
    /// Every plotted point with its legend label, in drawing order.
    pub fn annotations(&self) -> [Annotation; 7] {
        [
            Annotation { label: "Center", point: self.circle.center },
            Annotation { label: "Given Point 1", point: self.given_points[0] },
            Annotation { label: "Given Point 2", point: self.given_points[1] },
            Annotation { label: "Rotated Point 1", point: self.rotated_points[0] },
            Annotation { label: "Rotated Point 2", point: self.rotated_points[1] },
            Annotation { label: "Diameter Endpoint 1", point: self.diameter_endpoints[0] },
            Annotation { label: "Diameter Endpoint 2", point: self.diameter_endpoints[1] },
        ]
    }

    /// Circle rotation in degrees (2θ)
    pub fn circle_rotation_deg(&self) -> f64 {
        Degrees(self.angle_deg).doubled().0
    }

    /// True when every point and principal value is a finite number
    pub fn is_finite(&self) -> bool {
        let p = &self.principal;
        self.annotations().iter().all(|a| a.point.is_finite())
            && self.circle.radius.is_finite()
            && [p.sigma_1, p.sigma_2, p.max_shear, p.principal_angle_deg]
                .iter()
                .all(|v| v.is_finite())
    }
}

/// Calculate Mohr's circle and the rotated stress points.
///
/// # Returns
///
/// * `Ok(MohrCircleResult)` - Circle geometry and all plotted points
/// * `Err(CalcError)` - If any input is not finite, the scaling factor is not
///   positive, or the circle reaches beyond the `f64` range
pub fn calculate(input: &MohrCircleInput) -> CalcResult<MohrCircleResult> {
    input.validate()?;

    let stress = input.stress;
    let circle = Circle::from_stress_scaled(&stress, input.scaling_factor);
    let given_points = stress.given_points();

    let circle_angle = Degrees(input.angle_deg).doubled().to_radians();
    let (rotated_1, rotated_2) = rotate_segment(given_points[0], given_points[1], circle_angle);

    debug!(
        "mohr circle '{}': center={} radius={:.4} 2θ={:.4} rad",
        input.label, circle.center, circle.radius, circle_angle.0
    );

    let result = MohrCircleResult {
        stress,
        angle_deg: input.angle_deg,
        circle,
        given_points,
        rotated_points: [rotated_1, rotated_2],
        diameter_endpoints: circle.diameter_endpoints(),
        principal: PrincipalStresses::from_stress(&stress),
    };

    if !result.is_finite() {
        return Err(CalcError::invalid_input(
            "stress",
            format!("({}, {}, {})", stress.sigma_x, stress.sigma_y, stress.tau_xy),
            "Stress state is too large to represent its circle",
        ));
    }

    Ok(result)
}
