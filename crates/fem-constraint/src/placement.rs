//! Widget placement for cylinder-based constraints
//!
//! Bearing, gear and pulley style constraints sit on a cylindrical face and
//! are positioned along its axis by a second reference (a plane or a line),
//! and oriented by a third one.

use glam::DVec3;

use crate::constants::CONFUSION;
use crate::shape::{ShapeError, ShapeReference, ShapeResolver, ShapeResult, SubShape};

#[derive(Debug, Clone, Copy)]
struct Plane {
    origin: DVec3,
    normal: DVec3,
}

impl Plane {
    fn project(&self, point: DVec3) -> DVec3 {
        point - self.normal * self.normal.dot(point - self.origin)
    }

    fn intersect_line(&self, point: DVec3, direction: DVec3) -> Option<DVec3> {
        let denom = self.normal.dot(direction);
        if denom.abs() < CONFUSION {
            return None;
        }
        let t = self.normal.dot(self.origin - point) / denom;
        Some(point + direction * t)
    }
}

/// Unit direction given by a planar face (its normal) or a straight edge
pub fn direction(resolver: &dyn ShapeResolver, reference: &ShapeReference) -> ShapeResult<DVec3> {
    match resolver.resolve(reference)? {
        SubShape::Face(face) => face.plane_normal().try_normalize().ok_or_else(|| {
            ShapeError::DegenerateGeometry(format!("{reference} has no normal"))
        }),
        SubShape::Edge(curve) => curve.line_direction(),
        other => Err(ShapeError::NotPlanarOrLinear(format!(
            "{reference} is a {}",
            other.kind_name()
        ))),
    }
}

/// Point on a cylinder axis located by a plane or line reference
///
/// The plane comes from `location`: a planar face directly, or a straight
/// edge together with the axis. It is shifted by `distance` towards `base`
/// and intersected with the axis through `base`.
pub fn base_point(
    resolver: &dyn ShapeResolver,
    base: DVec3,
    axis: DVec3,
    location: &ShapeReference,
    distance: f64,
) -> ShapeResult<DVec3> {
    let axis = axis
        .try_normalize()
        .ok_or_else(|| ShapeError::DegenerateGeometry("cylinder axis has zero length".into()))?;

    let mut plane = match resolver.resolve(location)? {
        SubShape::Face(face) => Plane {
            origin: face.origin,
            normal: face.plane_normal(),
        },
        SubShape::Edge(curve) => {
            let line = curve.line_direction()?;
            let tangent = line.cross(axis).try_normalize().ok_or_else(|| {
                ShapeError::DegenerateGeometry(format!("{location} is parallel to the axis"))
            })?;
            Plane {
                origin: curve.start(),
                normal: line.cross(tangent),
            }
        }
        other => {
            return Err(ShapeError::NotPlanarOrLinear(format!(
                "{location} is a {}",
                other.kind_name()
            )));
        }
    };

    let projected = plane.project(base);
    if distance.abs() > CONFUSION
        && let Some(towards_base) = (base - projected).try_normalize()
    {
        plane.origin += towards_base * distance;
    }

    plane.intersect_line(base, axis).ok_or_else(|| {
        ShapeError::DegenerateGeometry(format!("axis does not cross the plane of {location}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{CircularArc, Curve, Shape, ShapeStore};
    use uuid::Uuid;

    fn store_with_cube() -> (ShapeStore, Uuid) {
        let store = ShapeStore::new();
        let id = store.insert(Shape::cuboid(DVec3::ZERO, DVec3::splat(10.0)));
        (store, id)
    }

    #[test]
    fn test_direction_from_face() {
        let (store, id) = store_with_cube();
        let dir = direction(&store, &ShapeReference::new(id, "Face6")).unwrap();
        assert!(dir.abs_diff_eq(DVec3::Z, 1e-12));
        let dir = direction(&store, &ShapeReference::new(id, "Face1")).unwrap();
        assert!(dir.abs_diff_eq(-DVec3::X, 1e-12));
    }

    #[test]
    fn test_direction_from_edge() {
        let (store, id) = store_with_cube();
        // Edge1 runs from the min corner along +X
        let dir = direction(&store, &ShapeReference::new(id, "Edge1")).unwrap();
        assert!(dir.abs_diff_eq(DVec3::X, 1e-12));
    }

    #[test]
    fn test_direction_rejects_other_geometry() {
        let (store, id) = store_with_cube();
        assert!(matches!(
            direction(&store, &ShapeReference::new(id, "Vertex1")),
            Err(ShapeError::NotPlanarOrLinear(_))
        ));

        let cylinder = store.insert(Shape::cylinder(DVec3::ZERO, DVec3::Z, 1.0, 2.0));
        assert!(matches!(
            direction(&store, &ShapeReference::new(cylinder, "Face1")),
            Err(ShapeError::NotPlanarOrLinear(_))
        ));
        assert!(matches!(
            direction(&store, &ShapeReference::new(cylinder, "Edge1")),
            Err(ShapeError::NotPlanarOrLinear(_))
        ));
    }

    #[test]
    fn test_base_point_on_face_plane() {
        let (store, id) = store_with_cube();
        let top = ShapeReference::new(id, "Face6");
        let point = base_point(&store, DVec3::new(1.0, 2.0, -20.0), DVec3::Z, &top, 0.0).unwrap();
        assert!(point.abs_diff_eq(DVec3::new(1.0, 2.0, 5.0), 1e-9));
    }

    #[test]
    fn test_base_point_shifts_towards_base() {
        let (store, id) = store_with_cube();
        let top = ShapeReference::new(id, "Face6");
        let point = base_point(&store, DVec3::new(0.0, 0.0, -20.0), DVec3::Z, &top, 2.0).unwrap();
        assert!(point.abs_diff_eq(DVec3::new(0.0, 0.0, 3.0), 1e-9));

        let point =
            base_point(&store, DVec3::new(0.0, 0.0, -20.0), DVec3::Z, &top, -2.0).unwrap();
        assert!(point.abs_diff_eq(DVec3::new(0.0, 0.0, 7.0), 1e-9));
    }

    #[test]
    fn test_base_point_from_edge() {
        let store = ShapeStore::new();
        let mut shape = Shape::new();
        shape.add_edge(Curve::line(
            DVec3::new(-5.0, 3.0, 4.0),
            DVec3::new(5.0, 3.0, 4.0),
        ));
        shape.add_edge(Curve::Arc(CircularArc::circle(DVec3::ZERO, DVec3::Z, 1.0)));
        let id = store.insert(shape);

        let point = base_point(
            &store,
            DVec3::ZERO,
            DVec3::Z,
            &ShapeReference::new(id, "Edge1"),
            0.0,
        )
        .unwrap();
        assert!(point.abs_diff_eq(DVec3::new(0.0, 0.0, 4.0), 1e-9));

        assert!(matches!(
            base_point(
                &store,
                DVec3::ZERO,
                DVec3::Z,
                &ShapeReference::new(id, "Edge2"),
                0.0
            ),
            Err(ShapeError::NotPlanarOrLinear(_))
        ));
    }

    #[test]
    fn test_base_point_parallel_plane_fails() {
        let (store, id) = store_with_cube();
        // Side face normal is -X, axis along Z never crosses it
        let side = ShapeReference::new(id, "Face1");
        assert!(matches!(
            base_point(&store, DVec3::ZERO, DVec3::Z, &side, 0.0),
            Err(ShapeError::DegenerateGeometry(_))
        ));
        assert!(matches!(
            base_point(&store, DVec3::ZERO, DVec3::ZERO, &side, 0.0),
            Err(ShapeError::DegenerateGeometry(_))
        ));
    }
}
