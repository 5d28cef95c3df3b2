//! Cylindrical face analysis

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::shape::{CylindricalFace, ParametricFace, SubShape};

/// Radius, height and axis of a cylindrical face
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderDescriptor {
    /// Cylinder radius
    pub radius: f64,
    /// Axial extent of the face
    pub height: f64,
    /// Axis point at the lower end of the face
    pub base: DVec3,
    /// Unit axis direction
    pub axis: DVec3,
}

impl CylinderDescriptor {
    /// Describe a cylindrical face
    pub fn from_face(face: &CylindricalFace) -> Self {
        let bounds = face.bounds();
        let lower = bounds.v_min.min(bounds.v_max);
        let axis = face.axis.normalize_or_zero();
        Self {
            radius: face.radius.abs(),
            height: bounds.v_span().abs(),
            base: face.location + axis * lower,
            axis,
        }
    }

    /// Axis point at the upper end of the face
    pub fn top(&self) -> DVec3 {
        self.base + self.axis * self.height
    }
}

/// Extract the cylinder of a face. Any other subelement yields `None`.
pub fn analyze(sub_shape: &SubShape) -> Option<CylinderDescriptor> {
    match sub_shape {
        SubShape::CylindricalFace(face) => Some(CylinderDescriptor::from_face(face)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Curve, PlanarFace};
    use approx::assert_relative_eq;

    #[test]
    fn test_analyze_cylinder() {
        let face = CylindricalFace::new(DVec3::new(1.0, 0.0, 0.0), DVec3::Z, 2.5, 8.0);
        let descriptor = analyze(&SubShape::CylindricalFace(face)).unwrap();
        assert_relative_eq!(descriptor.radius, 2.5);
        assert_relative_eq!(descriptor.height, 8.0);
        assert!(descriptor.base.abs_diff_eq(DVec3::new(1.0, 0.0, 0.0), 1e-12));
        assert!(descriptor.axis.abs_diff_eq(DVec3::Z, 1e-12));
        assert!(descriptor.top().abs_diff_eq(DVec3::new(1.0, 0.0, 8.0), 1e-12));
    }

    #[test]
    fn test_base_is_at_lower_bound() {
        let mut face = CylindricalFace::new(DVec3::ZERO, DVec3::Y, 1.0, 0.0);
        face.v_range = (2.0, 5.0);
        let descriptor = CylinderDescriptor::from_face(&face);
        assert!(descriptor.base.abs_diff_eq(DVec3::new(0.0, 2.0, 0.0), 1e-12));
        assert_relative_eq!(descriptor.height, 3.0);
    }

    #[test]
    fn test_axis_is_normalised() {
        let mut face = CylindricalFace::new(DVec3::ZERO, DVec3::Z, 1.0, 4.0);
        face.axis = DVec3::new(0.0, 0.0, 3.0);
        face.v_range = (1.0, 4.0);
        let descriptor = CylinderDescriptor::from_face(&face);
        assert!(descriptor.axis.abs_diff_eq(DVec3::Z, 1e-12));
        assert!(descriptor.base.abs_diff_eq(DVec3::new(0.0, 0.0, 1.0), 1e-12));
        assert!(descriptor.top().abs_diff_eq(DVec3::new(0.0, 0.0, 4.0), 1e-12));
    }

    #[test]
    fn test_non_cylindrical_is_none() {
        assert!(analyze(&SubShape::Vertex(DVec3::ZERO)).is_none());
        assert!(analyze(&SubShape::Edge(Curve::line(DVec3::ZERO, DVec3::X))).is_none());
        let plane = PlanarFace::rectangle(DVec3::ZERO, DVec3::X, DVec3::Y, 1.0, 1.0);
        assert!(analyze(&SubShape::Face(plane)).is_none());
    }
}
