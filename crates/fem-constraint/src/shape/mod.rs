//! Shape model and resolution
//!
//! A [`Shape`] is the geometry owned by one document object: ordered lists
//! of vertices, edges and faces addressed by `Vertex<n>`, `Edge<n>` and
//! `Face<n>`. A [`ShapeResolver`] turns a [`ShapeReference`] into a
//! [`SubShape`].

mod curve;
mod face;
mod primitive;
mod store;
mod traits;

use glam::DVec3;
use serde::{Deserialize, Serialize};

pub use curve::{CircularArc, Curve};
pub use face::{CylindricalFace, ParameterBounds, ParametricFace, PlanarFace};
pub use store::ShapeStore;
pub use traits::{
    ShapeError, ShapeReference, ShapeResolver, ShapeResult, SubElement, SubElementKind, SubShape,
};

/// Geometry of a face stored in a [`Shape`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Face {
    /// Planar face
    Planar(PlanarFace),
    /// Face on a cylindrical surface
    Cylindrical(CylindricalFace),
}

impl From<PlanarFace> for Face {
    fn from(face: PlanarFace) -> Self {
        Self::Planar(face)
    }
}

impl From<CylindricalFace> for Face {
    fn from(face: CylindricalFace) -> Self {
        Self::Cylindrical(face)
    }
}

/// Topology of a document object's shape
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Vertex locations
    pub vertices: Vec<DVec3>,
    /// Edge curves
    pub edges: Vec<Curve>,
    /// Faces
    pub faces: Vec<Face>,
}

impl Shape {
    /// Create an empty shape
    pub fn new() -> Self {
        Self::default()
    }

    /// A shape without any subelements
    pub fn is_null(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty() && self.faces.is_empty()
    }

    /// Append a vertex, returning its name
    pub fn add_vertex(&mut self, point: DVec3) -> String {
        self.vertices.push(point);
        format!("Vertex{}", self.vertices.len())
    }

    /// Append an edge, returning its name
    pub fn add_edge(&mut self, curve: Curve) -> String {
        self.edges.push(curve);
        format!("Edge{}", self.edges.len())
    }

    /// Append a face, returning its name
    pub fn add_face(&mut self, face: impl Into<Face>) -> String {
        self.faces.push(face.into());
        format!("Face{}", self.faces.len())
    }

    /// Look up a subelement by name
    pub fn sub_shape(&self, name: &str) -> ShapeResult<SubShape> {
        let element: SubElement = name.parse()?;
        let position = element.position()?;
        let missing = || ShapeError::SubelementNotFound(name.to_string());

        match element.kind {
            SubElementKind::Vertex => self
                .vertices
                .get(position)
                .map(|p| SubShape::Vertex(*p))
                .ok_or_else(missing),
            SubElementKind::Edge => self
                .edges
                .get(position)
                .map(|c| SubShape::Edge(c.clone()))
                .ok_or_else(missing),
            SubElementKind::Face => match self.faces.get(position) {
                Some(Face::Planar(face)) => Ok(SubShape::Face(face.clone())),
                Some(Face::Cylindrical(face)) => Ok(SubShape::CylindricalFace(face.clone())),
                None => Err(missing()),
            },
        }
    }
}

/// Orthonormal in-plane basis (u, v) for a unit normal, with `u × v = normal`
pub fn plane_basis(normal: DVec3) -> (DVec3, DVec3) {
    let up = if normal.z.abs() < 0.9 { DVec3::Z } else { DVec3::X };
    let u = normal.cross(up).normalize_or_zero();
    let v = normal.cross(u);
    (u, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_basis_is_right_handed() {
        for normal in [DVec3::X, DVec3::Y, DVec3::Z, DVec3::new(1.0, 2.0, 3.0).normalize()] {
            let (u, v) = plane_basis(normal);
            assert!(u.dot(normal).abs() < 1e-12);
            assert!(v.dot(normal).abs() < 1e-12);
            assert!(u.cross(v).abs_diff_eq(normal, 1e-12));
        }
    }

    #[test]
    fn test_sub_shape_lookup() {
        let mut shape = Shape::new();
        assert!(shape.is_null());
        let v = shape.add_vertex(DVec3::ONE);
        let e = shape.add_edge(Curve::line(DVec3::ZERO, DVec3::X));
        assert_eq!(v, "Vertex1");
        assert_eq!(e, "Edge1");

        assert_eq!(shape.sub_shape("Vertex1").unwrap(), SubShape::Vertex(DVec3::ONE));
        assert!(matches!(shape.sub_shape("Edge1"), Ok(SubShape::Edge(_))));
        assert!(matches!(
            shape.sub_shape("Face1"),
            Err(ShapeError::SubelementNotFound(_))
        ));
        assert!(matches!(
            shape.sub_shape("Shell1"),
            Err(ShapeError::UnsupportedSubelement(_))
        ));
    }
}
