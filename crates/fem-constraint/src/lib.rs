//! FEM Constraint Widget Geometry
//!
//! This crate provides:
//! - A shape model (vertices, edges, planar and cylindrical faces) behind a
//!   resolver trait addressed by `Vertex<n>` / `Edge<n>` / `Face<n>` names
//! - Sampling of referenced subelements into widget points, normals and a
//!   draw scale
//! - Cylinder analysis and axis placement helpers for cylinder-based
//!   constraints
//! - A constraint object caching the derived widget geometry

pub mod constants;
pub mod constraint;
pub mod placement;
pub mod sampling;
pub mod shape;

// Re-exports for convenience
pub use constraint::Constraint;
pub use sampling::{
    CylinderDescriptor, SampleFailure, SamplingOptions, ShapeSampler, WidgetSamples, sample,
};
pub use shape::{
    CircularArc, Curve, CylindricalFace, Face, ParameterBounds, ParametricFace, PlanarFace, Shape,
    ShapeError, ShapeReference, ShapeResolver, ShapeResult, ShapeStore, SubElement,
    SubElementKind, SubShape,
};
