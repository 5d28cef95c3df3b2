//! Widget sampling
//!
//! Turns a list of referenced subelements into the anchor points, normals and
//! draw scale used to render constraint widgets.
//!
//! - Vertices give one point with the default normal.
//! - Edges give their endpoints plus evenly spaced intermediate points on
//!   long edges, all with the default normal.
//! - Planar faces give a grid over the parameter domain, trimmed to the face
//!   outline, with the surface normal at each point.
//! - Cylindrical faces give points on the axis from the base to the top,
//!   facing along the axis.
//!
//! A failing reference clears [`WidgetSamples::ok`] for the whole call, but
//! the loop carries on and points from other references are kept.

pub mod cylinder;
mod options;
pub mod scale;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::shape::{
    Curve, CylindricalFace, ParametricFace, PlanarFace, ShapeError, ShapeReference,
    ShapeResolver, ShapeResult, SubShape,
};

pub use cylinder::{CylinderDescriptor, analyze};
pub use options::SamplingOptions;
pub use scale::{default_scale, edge_scale, face_scale};

/// A reference that could not be sampled
#[derive(Debug, Clone, PartialEq)]
pub struct SampleFailure {
    /// Position of the reference in the input list
    pub index: usize,
    /// The failing reference
    pub reference: ShapeReference,
    /// What went wrong
    pub error: ShapeError,
}

/// Output of a sampling pass
///
/// `points[i]` pairs with `normals[i]`; both always have the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetSamples {
    /// Widget anchor points
    pub points: Vec<DVec3>,
    /// Widget directions, one per point
    pub normals: Vec<DVec3>,
    /// Draw scale of the last successfully sampled reference
    pub scale: u32,
    /// False if any reference failed
    pub ok: bool,
    /// Failed references, in input order
    #[serde(skip)]
    pub failures: Vec<SampleFailure>,
}

impl Default for WidgetSamples {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            normals: Vec::new(),
            scale: default_scale(),
            ok: true,
            failures: Vec::new(),
        }
    }
}

impl WidgetSamples {
    /// Number of sampled points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if no point was sampled
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over (point, normal) pairs
    pub fn iter(&self) -> impl Iterator<Item = (DVec3, DVec3)> + '_ {
        self.points.iter().copied().zip(self.normals.iter().copied())
    }
}

/// Points, normals and scale contributed by one subelement
#[derive(Debug, Clone, Default)]
struct Contribution {
    points: Vec<DVec3>,
    normals: Vec<DVec3>,
    scale: u32,
}

impl Contribution {
    fn push(&mut self, point: DVec3, normal: DVec3) {
        self.points.push(point);
        self.normals.push(normal);
    }
}

/// Samples referenced subelements for widget rendering
#[derive(Debug, Clone, Default)]
pub struct ShapeSampler {
    options: SamplingOptions,
}

impl ShapeSampler {
    /// Create a sampler with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sampler with the given options
    pub fn with_options(options: SamplingOptions) -> Self {
        Self { options }
    }

    /// The sampling options in use
    pub fn options(&self) -> &SamplingOptions {
        &self.options
    }

    /// Sample every reference in order
    ///
    /// Vertices and edges get `default_normal`. Each reference that samples
    /// successfully overwrites the scale; a failing one contributes no points
    /// and clears `ok`, which stays cleared for the rest of the call.
    pub fn sample(
        &self,
        resolver: &dyn ShapeResolver,
        references: &[ShapeReference],
        default_normal: DVec3,
    ) -> WidgetSamples {
        let mut samples = WidgetSamples::default();

        for (index, reference) in references.iter().enumerate() {
            let result = resolver
                .resolve(reference)
                .and_then(|sub_shape| self.sample_sub_shape(&sub_shape, default_normal));

            match result {
                Ok(contribution) => {
                    tracing::debug!(
                        "Sampled {} into {} points (scale {})",
                        reference,
                        contribution.points.len(),
                        contribution.scale
                    );
                    samples.points.extend(contribution.points);
                    samples.normals.extend(contribution.normals);
                    samples.scale = contribution.scale;
                }
                Err(error) => {
                    tracing::warn!("Reference {} failed: {}", reference, error);
                    samples.ok = false;
                    samples.failures.push(SampleFailure {
                        index,
                        reference: reference.clone(),
                        error,
                    });
                }
            }
        }

        samples
    }

    fn sample_sub_shape(
        &self,
        sub_shape: &SubShape,
        default_normal: DVec3,
    ) -> ShapeResult<Contribution> {
        match sub_shape {
            SubShape::Vertex(point) => self.sample_vertex(*point, default_normal),
            SubShape::Edge(curve) => self.sample_edge(curve, default_normal),
            SubShape::Face(face) => self.sample_planar_face(face),
            SubShape::CylindricalFace(face) => self.sample_cylindrical_face(face),
        }
    }

    fn sample_vertex(&self, point: DVec3, default_normal: DVec3) -> ShapeResult<Contribution> {
        if !point.is_finite() {
            return Err(ShapeError::DegenerateGeometry(format!(
                "vertex at {point} is not finite"
            )));
        }
        let mut contribution = Contribution {
            scale: default_scale(),
            ..Default::default()
        };
        contribution.push(point, default_normal);
        Ok(contribution)
    }

    fn sample_edge(&self, curve: &Curve, default_normal: DVec3) -> ShapeResult<Contribution> {
        let (first, last) = curve.parameter_range();
        let span = last - first;
        if !span.is_finite() || span <= self.options.tolerance {
            return Err(ShapeError::DegenerateGeometry(format!(
                "edge of length {span}"
            )));
        }

        // Always both endpoints, more points on long edges
        let steps = self.options.edge_steps(span);
        let step = span / steps as f64;
        let mut contribution = Contribution {
            scale: edge_scale(span),
            ..Default::default()
        };
        for i in 0..=steps {
            contribution.push(curve.value(first + i as f64 * step), default_normal);
        }
        Ok(contribution)
    }

    fn sample_planar_face(&self, face: &PlanarFace) -> ShapeResult<Contribution> {
        let area = face.area();
        if !area.is_finite() || area <= self.options.tolerance * self.options.tolerance {
            return Err(ShapeError::DegenerateGeometry(format!(
                "planar face of area {area}"
            )));
        }
        self.sample_grid(face)
    }

    fn sample_grid<F: ParametricFace>(&self, face: &F) -> ShapeResult<Contribution> {
        let bounds = face.bounds();
        let (u_length, v_length) = face.iso_lengths();

        let steps_u = self.options.face_steps(u_length);
        let steps_v = self.options.face_steps(v_length);
        let step_u = bounds.u_span() / steps_u as f64;
        let step_v = bounds.v_span() / steps_v as f64;

        let mut contribution = Contribution {
            scale: face_scale(u_length, v_length),
            ..Default::default()
        };
        for i in 0..=steps_v {
            let v = bounds.v_min + i as f64 * step_v;
            for j in 0..=steps_u {
                let u = bounds.u_min + j as f64 * step_u;
                if face.contains(u, v, self.options.tolerance) {
                    let normal = face.normal(u, v)?;
                    contribution.push(face.value(u, v), normal);
                }
            }
        }
        Ok(contribution)
    }

    fn sample_cylindrical_face(&self, face: &CylindricalFace) -> ShapeResult<Contribution> {
        let cylinder = CylinderDescriptor::from_face(face);
        let tolerance = self.options.tolerance;
        if !(cylinder.radius.is_finite() && cylinder.height.is_finite() && cylinder.base.is_finite()) {
            return Err(ShapeError::DegenerateGeometry(format!(
                "cylinder at {} with radius {} and height {} is not finite",
                cylinder.base, cylinder.radius, cylinder.height
            )));
        }
        if !(cylinder.radius > tolerance && cylinder.height > tolerance) {
            return Err(ShapeError::DegenerateGeometry(format!(
                "cylinder of radius {} and height {}",
                cylinder.radius, cylinder.height
            )));
        }
        if !cylinder.axis.is_finite() || cylinder.axis.length_squared() <= 0.0 {
            return Err(ShapeError::DegenerateGeometry(
                "cylinder without axis direction".into(),
            ));
        }

        let (u_length, v_length) = face.iso_lengths();
        let steps = self.options.edge_steps(cylinder.height);
        let step = cylinder.height / steps as f64;
        let mut contribution = Contribution {
            scale: face_scale(u_length, v_length),
            ..Default::default()
        };
        for i in 0..=steps {
            contribution.push(cylinder.base + cylinder.axis * (i as f64 * step), cylinder.axis);
        }
        Ok(contribution)
    }
}

/// Sample references with default options
pub fn sample(
    resolver: &dyn ShapeResolver,
    references: &[ShapeReference],
    default_normal: DVec3,
) -> WidgetSamples {
    ShapeSampler::new().sample(resolver, references, default_normal)
}
