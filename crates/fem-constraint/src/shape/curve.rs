//! Edge curves
//!
//! Curves are parameterised by arc length, so the parametric span of an edge
//! equals its physical length.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::{ShapeError, ShapeResult, plane_basis};

/// A circular arc in 3D
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircularArc {
    /// Center of the circle
    pub center: DVec3,
    /// Unit normal of the circle plane
    pub axis: DVec3,
    /// Unit direction from the center to the arc start
    pub x_dir: DVec3,
    /// Circle radius
    pub radius: f64,
    /// Swept angle in radians (counter-clockwise about `axis`)
    pub sweep: f64,
}

impl CircularArc {
    /// Create an arc starting in an arbitrary direction perpendicular to `axis`
    pub fn new(center: DVec3, axis: DVec3, radius: f64, sweep: f64) -> Self {
        let axis = axis.normalize_or_zero();
        let (x_dir, _) = plane_basis(axis);
        Self {
            center,
            axis,
            x_dir,
            radius,
            sweep,
        }
    }

    /// Full circle
    pub fn circle(center: DVec3, axis: DVec3, radius: f64) -> Self {
        Self::new(center, axis, radius, std::f64::consts::TAU)
    }

    /// Set the start direction (projected into the circle plane)
    pub fn with_start_direction(mut self, direction: DVec3) -> Self {
        let projected = direction - self.axis * direction.dot(self.axis);
        if let Some(x_dir) = projected.try_normalize() {
            self.x_dir = x_dir;
        }
        self
    }

    fn point_at_angle(&self, angle: f64) -> DVec3 {
        let y_dir = self.axis.cross(self.x_dir);
        self.center + (self.x_dir * angle.cos() + y_dir * angle.sin()) * self.radius
    }
}

/// Geometry of an edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Curve {
    /// Straight segment
    Line {
        /// Start point
        start: DVec3,
        /// End point
        end: DVec3,
    },
    /// Circular arc
    Arc(CircularArc),
}

impl Curve {
    /// Create a line segment
    pub fn line(start: DVec3, end: DVec3) -> Self {
        Self::Line { start, end }
    }

    /// Physical length of the curve
    pub fn length(&self) -> f64 {
        match self {
            Self::Line { start, end } => start.distance(*end),
            Self::Arc(arc) => arc.radius.abs() * arc.sweep.abs(),
        }
    }

    /// First and last parameter
    pub fn parameter_range(&self) -> (f64, f64) {
        (0.0, self.length())
    }

    /// Evaluate the curve at parameter `t`
    pub fn value(&self, t: f64) -> DVec3 {
        match self {
            Self::Line { start, end } => {
                let length = start.distance(*end);
                if length <= 0.0 {
                    *start
                } else {
                    start.lerp(*end, t / length)
                }
            }
            Self::Arc(arc) => {
                let angle = if arc.radius.abs() > 0.0 {
                    t / arc.radius.abs() * arc.sweep.signum()
                } else {
                    0.0
                };
                arc.point_at_angle(angle)
            }
        }
    }

    /// Start point
    pub fn start(&self) -> DVec3 {
        self.value(0.0)
    }

    /// End point
    pub fn end(&self) -> DVec3 {
        self.value(self.length())
    }

    /// Unit direction of a straight edge
    pub fn line_direction(&self) -> ShapeResult<DVec3> {
        match self {
            Self::Line { start, end } => (*end - *start).try_normalize().ok_or_else(|| {
                ShapeError::DegenerateGeometry("zero-length line has no direction".into())
            }),
            Self::Arc(_) => Err(ShapeError::NotPlanarOrLinear("circular edge".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_line_is_arc_length_parameterised() {
        let line = Curve::line(DVec3::ZERO, DVec3::new(3.0, 4.0, 0.0));
        assert_relative_eq!(line.length(), 5.0);
        assert_eq!(line.parameter_range(), (0.0, 5.0));
        assert!(line.value(2.5).abs_diff_eq(DVec3::new(1.5, 2.0, 0.0), 1e-12));
        assert!(line.end().abs_diff_eq(DVec3::new(3.0, 4.0, 0.0), 1e-12));
    }

    #[test]
    fn test_quarter_arc() {
        let arc = Curve::Arc(
            CircularArc::new(DVec3::ZERO, DVec3::Z, 2.0, std::f64::consts::FRAC_PI_2)
                .with_start_direction(DVec3::X),
        );
        assert_relative_eq!(arc.length(), std::f64::consts::PI);
        assert!(arc.start().abs_diff_eq(DVec3::new(2.0, 0.0, 0.0), 1e-12));
        assert!(arc.end().abs_diff_eq(DVec3::new(0.0, 2.0, 0.0), 1e-12));
    }

    #[test]
    fn test_line_direction() {
        let line = Curve::line(DVec3::ONE, DVec3::new(1.0, 1.0, 4.0));
        assert!(line.line_direction().unwrap().abs_diff_eq(DVec3::Z, 1e-12));

        let arc = Curve::Arc(CircularArc::circle(DVec3::ZERO, DVec3::Z, 1.0));
        assert!(matches!(
            arc.line_direction(),
            Err(ShapeError::NotPlanarOrLinear(_))
        ));
    }
}
