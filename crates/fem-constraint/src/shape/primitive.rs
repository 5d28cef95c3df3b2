//! Primitive shape builders
//!
//! Subelement numbering follows the usual B-Rep kernel order, so `Face1` of
//! a cylinder is its lateral face and `Face6` of a box is its top.

use glam::DVec3;

use super::{CircularArc, Curve, CylindricalFace, PlanarFace, Shape};
use crate::constants::CIRCLE_SEGMENTS;

impl Shape {
    /// Axis-aligned box
    ///
    /// Faces are ordered -X, +X, -Y, +Y, -Z, +Z, each with an outward normal.
    pub fn cuboid(center: DVec3, size: DVec3) -> Self {
        let min = center - size * 0.5;
        let max = center + size * 0.5;
        let corner = |x: bool, y: bool, z: bool| {
            DVec3::new(
                if x { max.x } else { min.x },
                if y { max.y } else { min.y },
                if z { max.z } else { min.z },
            )
        };

        let mut shape = Shape::new();
        for (x, y, z) in [
            (false, false, false),
            (true, false, false),
            (true, true, false),
            (false, true, false),
            (false, false, true),
            (true, false, true),
            (true, true, true),
            (false, true, true),
        ] {
            shape.add_vertex(corner(x, y, z));
        }

        // Bottom ring, top ring, then verticals
        let ring = [0usize, 1, 2, 3];
        for offset in [0usize, 4] {
            for i in ring {
                let a = shape.vertices[offset + i];
                let b = shape.vertices[offset + (i + 1) % 4];
                shape.add_edge(Curve::line(a, b));
            }
        }
        for i in ring {
            let a = shape.vertices[i];
            let b = shape.vertices[i + 4];
            shape.add_edge(Curve::line(a, b));
        }

        shape.add_face(PlanarFace::rectangle(min, DVec3::Z, DVec3::Y, size.z, size.y));
        shape.add_face(PlanarFace::rectangle(
            DVec3::new(max.x, min.y, min.z),
            DVec3::Y,
            DVec3::Z,
            size.y,
            size.z,
        ));
        shape.add_face(PlanarFace::rectangle(min, DVec3::X, DVec3::Z, size.x, size.z));
        shape.add_face(PlanarFace::rectangle(
            DVec3::new(min.x, max.y, min.z),
            DVec3::Z,
            DVec3::X,
            size.z,
            size.x,
        ));
        shape.add_face(PlanarFace::rectangle(min, DVec3::Y, DVec3::X, size.y, size.x));
        shape.add_face(PlanarFace::rectangle(
            DVec3::new(min.x, min.y, max.z),
            DVec3::X,
            DVec3::Y,
            size.x,
            size.y,
        ));

        shape
    }

    /// Closed cylinder standing on `base_center` along `axis`
    ///
    /// `Face1` is the lateral face, `Face2` the top cap and `Face3` the bottom
    /// cap. `Edge1` and `Edge3` are the top and bottom circles, `Edge2` the seam.
    pub fn cylinder(base_center: DVec3, axis: DVec3, radius: f64, height: f64) -> Self {
        let lateral = CylindricalFace::new(base_center, axis, radius, height);
        let axis = lateral.axis;
        let top_center = base_center + axis * height;
        let seam = lateral.x_dir * radius;

        let mut shape = Shape::new();
        shape.add_vertex(top_center + seam);
        shape.add_vertex(base_center + seam);

        shape.add_edge(Curve::Arc(
            CircularArc::circle(top_center, axis, radius).with_start_direction(lateral.x_dir),
        ));
        shape.add_edge(Curve::line(base_center + seam, top_center + seam));
        shape.add_edge(Curve::Arc(
            CircularArc::circle(base_center, axis, radius).with_start_direction(lateral.x_dir),
        ));

        shape.add_face(lateral);
        shape.add_face(PlanarFace::disc(top_center, axis, radius, CIRCLE_SEGMENTS));
        shape.add_face(PlanarFace::disc(
            base_center,
            -axis,
            radius,
            CIRCLE_SEGMENTS,
        ));

        shape
    }
}
