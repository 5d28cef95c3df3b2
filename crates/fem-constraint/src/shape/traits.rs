//! Shape resolution trait definitions
//!
//! These types define the boundary between the constraint widget code and
//! whatever owns the document geometry.

use std::fmt;
use std::str::FromStr;

use glam::DVec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::{Curve, CylindricalFace, PlanarFace};

/// Error type for shape resolution and geometric queries
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// The name does not address a vertex, edge or face
    #[error("Unsupported subelement: {0}")]
    UnsupportedSubelement(String),

    /// The shape has no subelement with that index
    #[error("Subelement not found: {0}")]
    SubelementNotFound(String),

    /// No shape is known for the document object
    #[error("Object not found: {0}")]
    ObjectNotFound(Uuid),

    /// The document object has an empty shape
    #[error("Shape of object {0} is null")]
    NullShape(Uuid),

    /// Zero-length edge, zero-area face or failed evaluation
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// A direction was requested from a curved or point-like subelement
    #[error("Direction must be a planar face or linear edge: {0}")]
    NotPlanarOrLinear(String),
}

impl ShapeError {
    /// Whether the error comes from the reference itself rather than its geometry
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedSubelement(_)
                | Self::SubelementNotFound(_)
                | Self::ObjectNotFound(_)
                | Self::NullShape(_)
        )
    }
}

/// Result type for shape operations
pub type ShapeResult<T> = Result<T, ShapeError>;

/// A document object plus the name of one of its subelements
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeReference {
    /// ID of the document object owning the shape
    pub object: Uuid,
    /// Subelement name such as `Face3`, `Edge1` or `Vertex2`
    pub sub_element: String,
}

impl ShapeReference {
    /// Create a new reference
    pub fn new(object: Uuid, sub_element: impl Into<String>) -> Self {
        Self {
            object,
            sub_element: sub_element.into(),
        }
    }
}

impl fmt::Display for ShapeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.object, self.sub_element)
    }
}

/// Kind of subelement addressed by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubElementKind {
    /// `Vertex<n>`
    Vertex,
    /// `Edge<n>`
    Edge,
    /// `Face<n>`
    Face,
}

/// A parsed subelement name. Indices are 1-based, as in the names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubElement {
    /// Kind of the subelement
    pub kind: SubElementKind,
    /// 1-based index
    pub index: usize,
}

impl SubElement {
    /// Zero-based index into the owning shape's list
    pub fn position(&self) -> ShapeResult<usize> {
        self.index
            .checked_sub(1)
            .ok_or_else(|| ShapeError::SubelementNotFound(self.to_string()))
    }
}

impl FromStr for SubElement {
    type Err = ShapeError;

    fn from_str(name: &str) -> ShapeResult<Self> {
        let split = name
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| ShapeError::UnsupportedSubelement(name.to_string()))?;
        let (prefix, digits) = name.split_at(split);

        let kind = match prefix {
            "Vertex" => SubElementKind::Vertex,
            "Edge" => SubElementKind::Edge,
            "Face" => SubElementKind::Face,
            _ => return Err(ShapeError::UnsupportedSubelement(name.to_string())),
        };
        let index = digits
            .parse::<usize>()
            .map_err(|_| ShapeError::UnsupportedSubelement(name.to_string()))?;

        Ok(Self { kind, index })
    }
}

impl fmt::Display for SubElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            SubElementKind::Vertex => "Vertex",
            SubElementKind::Edge => "Edge",
            SubElementKind::Face => "Face",
        };
        write!(f, "{}{}", prefix, self.index)
    }
}

/// A resolved subelement.
///
/// Resolution classifies the geometry once; downstream code matches on the
/// variant instead of re-querying the surface type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SubShape {
    /// A vertex location
    Vertex(DVec3),
    /// An edge curve
    Edge(Curve),
    /// A planar face
    Face(PlanarFace),
    /// A face lying on a cylindrical surface
    CylindricalFace(CylindricalFace),
}

impl SubShape {
    /// Short name of the variant, used in log and error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Vertex(_) => "vertex",
            Self::Edge(_) => "edge",
            Self::Face(_) => "planar face",
            Self::CylindricalFace(_) => "cylindrical face",
        }
    }
}

/// Shape resolution service
///
/// Implementations turn a document reference into a typed geometric handle.
pub trait ShapeResolver: Send + Sync {
    /// Resolve a reference to its subelement geometry
    fn resolve(&self, reference: &ShapeReference) -> ShapeResult<SubShape>;
}

impl<R: ShapeResolver + ?Sized> ShapeResolver for &R {
    fn resolve(&self, reference: &ShapeReference) -> ShapeResult<SubShape> {
        (**self).resolve(reference)
    }
}
