//! Face geometry
//!
//! Planar and cylindrical faces with a (u, v) parameterisation, a point and
//! normal evaluator, and an inside/outside classifier for trimmed faces.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use super::{ShapeError, ShapeResult, plane_basis};

/// Parameter domain of a face
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterBounds {
    /// First u parameter
    pub u_min: f64,
    /// Last u parameter
    pub u_max: f64,
    /// First v parameter
    pub v_min: f64,
    /// Last v parameter
    pub v_max: f64,
}

impl ParameterBounds {
    /// Extent in u
    pub fn u_span(&self) -> f64 {
        self.u_max - self.u_min
    }

    /// Extent in v
    pub fn v_span(&self) -> f64 {
        self.v_max - self.v_min
    }
}

/// A face that can be evaluated over its parameter domain
pub trait ParametricFace {
    /// Point on the surface at (u, v)
    fn value(&self, u: f64, v: f64) -> DVec3;

    /// First derivatives (∂/∂u, ∂/∂v) at (u, v)
    fn derivatives(&self, u: f64, v: f64) -> (DVec3, DVec3);

    /// Parameter domain
    fn bounds(&self) -> ParameterBounds;

    /// Physical length of the u and v iso-curves bounding the face
    fn iso_lengths(&self) -> (f64, f64);

    /// Whether (u, v) lies on the face (boundary included)
    fn contains(&self, _u: f64, _v: f64, _tolerance: f64) -> bool {
        true
    }

    /// Unit surface normal at (u, v)
    fn normal(&self, u: f64, v: f64) -> ShapeResult<DVec3> {
        let (du, dv) = self.derivatives(u, v);
        du.cross(dv).try_normalize().ok_or_else(|| {
            ShapeError::DegenerateGeometry(format!("normal undefined at ({u}, {v})"))
        })
    }
}

/// A planar face bounded by a polygon given in parameter coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanarFace {
    /// Origin of the parameter frame
    pub origin: DVec3,
    /// Unit u direction
    pub x_dir: DVec3,
    /// Unit v direction, perpendicular to `x_dir`
    pub y_dir: DVec3,
    /// Boundary polygon in (u, v)
    pub outline: Vec<DVec2>,
}

impl PlanarFace {
    /// Create a face on the plane through `origin` with the given normal
    pub fn new(origin: DVec3, normal: DVec3, outline: Vec<DVec2>) -> Self {
        let (x_dir, y_dir) = plane_basis(normal.normalize_or_zero());
        Self {
            origin,
            x_dir,
            y_dir,
            outline,
        }
    }

    /// Create a face from an explicit frame. `y_dir` is orthogonalised against `x_dir`.
    pub fn from_frame(origin: DVec3, x_dir: DVec3, y_dir: DVec3, outline: Vec<DVec2>) -> Self {
        let x_dir = x_dir.normalize_or_zero();
        let y_dir = (y_dir - x_dir * y_dir.dot(x_dir)).normalize_or_zero();
        Self {
            origin,
            x_dir,
            y_dir,
            outline,
        }
    }

    /// Rectangle spanning `width` along `x_dir` and `height` along `y_dir` from `origin`
    pub fn rectangle(origin: DVec3, x_dir: DVec3, y_dir: DVec3, width: f64, height: f64) -> Self {
        Self::from_frame(
            origin,
            x_dir,
            y_dir,
            vec![
                DVec2::ZERO,
                DVec2::new(width, 0.0),
                DVec2::new(width, height),
                DVec2::new(0.0, height),
            ],
        )
    }

    /// Polygonal disc approximating a circle
    pub fn disc(center: DVec3, normal: DVec3, radius: f64, segments: u32) -> Self {
        let outline = (0..segments)
            .map(|i| {
                let angle = (i as f64 / segments as f64) * std::f64::consts::TAU;
                DVec2::new(angle.cos() * radius, angle.sin() * radius)
            })
            .collect();
        Self::new(center, normal, outline)
    }

    /// Plane normal (`x_dir × y_dir`)
    pub fn plane_normal(&self) -> DVec3 {
        self.x_dir.cross(self.y_dir)
    }

    /// Enclosed area of the outline
    pub fn area(&self) -> f64 {
        let n = self.outline.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|i| self.outline[i].perp_dot(self.outline[(i + 1) % n]))
            .sum();
        twice.abs() * 0.5
    }
}

impl ParametricFace for PlanarFace {
    fn value(&self, u: f64, v: f64) -> DVec3 {
        self.origin + self.x_dir * u + self.y_dir * v
    }

    fn derivatives(&self, _u: f64, _v: f64) -> (DVec3, DVec3) {
        (self.x_dir, self.y_dir)
    }

    fn bounds(&self) -> ParameterBounds {
        let mut min = DVec2::splat(f64::INFINITY);
        let mut max = DVec2::splat(f64::NEG_INFINITY);
        for p in &self.outline {
            min = min.min(*p);
            max = max.max(*p);
        }
        if self.outline.is_empty() {
            min = DVec2::ZERO;
            max = DVec2::ZERO;
        }
        ParameterBounds {
            u_min: min.x,
            u_max: max.x,
            v_min: min.y,
            v_max: max.y,
        }
    }

    fn iso_lengths(&self) -> (f64, f64) {
        let bounds = self.bounds();
        (bounds.u_span(), bounds.v_span())
    }

    fn contains(&self, u: f64, v: f64, tolerance: f64) -> bool {
        let n = self.outline.len();
        if n < 3 {
            return false;
        }
        let p = DVec2::new(u, v);

        // Points on the boundary count as inside
        for i in 0..n {
            let a = self.outline[i];
            let b = self.outline[(i + 1) % n];
            if distance_to_segment(p, a, b) <= tolerance {
                return true;
            }
        }

        // Even-odd ray cast along +u
        let mut inside = false;
        for i in 0..n {
            let a = self.outline[i];
            let b = self.outline[(i + 1) % n];
            if (a.y > p.y) != (b.y > p.y) {
                let x = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if p.x < x {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

fn distance_to_segment(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// A face lying on a cylindrical surface
///
/// u is the angle around the axis in radians, v the distance along the axis
/// from `location`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CylindricalFace {
    /// Point on the cylinder axis
    pub location: DVec3,
    /// Unit axis direction
    pub axis: DVec3,
    /// Unit direction perpendicular to the axis where u = 0
    pub x_dir: DVec3,
    /// Cylinder radius
    pub radius: f64,
    /// Angular range (first, last)
    pub u_range: (f64, f64),
    /// Axial range (first, last)
    pub v_range: (f64, f64),
}

impl CylindricalFace {
    /// Full cylinder of the given height starting at `location`
    pub fn new(location: DVec3, axis: DVec3, radius: f64, height: f64) -> Self {
        let axis = axis.normalize_or_zero();
        let (x_dir, _) = plane_basis(axis);
        Self {
            location,
            axis,
            x_dir,
            radius,
            u_range: (0.0, std::f64::consts::TAU),
            v_range: (0.0, height),
        }
    }

    /// Restrict the face to an angular range
    pub fn with_angle_range(mut self, first: f64, last: f64) -> Self {
        self.u_range = (first, last);
        self
    }

    /// Set the reference direction where u = 0 (projected perpendicular to the axis)
    pub fn with_start_direction(mut self, direction: DVec3) -> Self {
        let projected = direction - self.axis * direction.dot(self.axis);
        if let Some(x_dir) = projected.try_normalize() {
            self.x_dir = x_dir;
        }
        self
    }

    fn y_dir(&self) -> DVec3 {
        self.axis.cross(self.x_dir)
    }
}

impl ParametricFace for CylindricalFace {
    fn value(&self, u: f64, v: f64) -> DVec3 {
        let radial = self.x_dir * u.cos() + self.y_dir() * u.sin();
        self.location + radial * self.radius + self.axis * v
    }

    fn derivatives(&self, u: f64, _v: f64) -> (DVec3, DVec3) {
        let tangent = self.y_dir() * u.cos() - self.x_dir * u.sin();
        (tangent * self.radius, self.axis)
    }

    fn bounds(&self) -> ParameterBounds {
        ParameterBounds {
            u_min: self.u_range.0,
            u_max: self.u_range.1,
            v_min: self.v_range.0,
            v_max: self.v_range.1,
        }
    }

    fn iso_lengths(&self) -> (f64, f64) {
        let bounds = self.bounds();
        (
            self.radius.abs() * bounds.u_span().abs(),
            bounds.v_span().abs(),
        )
    }
}
