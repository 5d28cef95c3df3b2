//! Constraint widget state
//!
//! A constraint references subelements of document objects. Whenever the
//! references change, the widget anchor points, their normals and the draw
//! scale are recomputed and cached for the renderer.

use glam::DVec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sampling::{self, CylinderDescriptor, SamplingOptions, ShapeSampler, WidgetSamples};
use crate::shape::{ShapeReference, ShapeResolver, ShapeResult, SubShape};

/// A constraint and the widget geometry derived from its references
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Constraint {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Subelements the constraint applies to
    references: Vec<ShapeReference>,
    /// Effective direction of the constraint
    normal_direction: DVec3,
    /// Cached widget geometry
    samples: WidgetSamples,
    /// Sampling density
    #[serde(default)]
    options: SamplingOptions,
}

impl Constraint {
    /// Create a constraint without references, pointing along +Z
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            references: Vec::new(),
            normal_direction: DVec3::Z,
            samples: WidgetSamples::default(),
            options: SamplingOptions::default(),
        }
    }

    /// Use custom sampling options
    pub fn with_options(mut self, options: SamplingOptions) -> Self {
        self.options = options;
        self
    }

    /// Referenced subelements
    pub fn references(&self) -> &[ShapeReference] {
        &self.references
    }

    /// Direction of the constraint
    ///
    /// The normal of the first planar face among the references. Without one
    /// the previous value is kept (+Z initially).
    pub fn normal_direction(&self) -> DVec3 {
        self.normal_direction
    }

    /// Widget anchor points
    pub fn points(&self) -> &[DVec3] {
        &self.samples.points
    }

    /// Widget directions, one per point
    pub fn normals(&self) -> &[DVec3] {
        &self.samples.normals
    }

    /// Widget draw scale
    pub fn scale(&self) -> u32 {
        self.samples.scale
    }

    /// Whether the last recompute sampled every reference
    pub fn is_valid(&self) -> bool {
        self.samples.ok
    }

    /// The full result of the last recompute
    pub fn samples(&self) -> &WidgetSamples {
        &self.samples
    }

    /// Replace the references and recompute the widget geometry
    pub fn set_references(
        &mut self,
        references: Vec<ShapeReference>,
        resolver: &dyn ShapeResolver,
    ) -> bool {
        self.references = references;
        self.recompute(resolver)
    }

    /// Recompute the normal direction, points, normals and scale
    ///
    /// Returns `false` if any reference failed. Points from the other
    /// references are stored regardless.
    pub fn recompute(&mut self, resolver: &dyn ShapeResolver) -> bool {
        let face_normal = self.references.iter().find_map(|reference| {
            match resolver.resolve(reference) {
                Ok(SubShape::Face(face)) => face.plane_normal().try_normalize(),
                _ => None,
            }
        });
        if let Some(normal) = face_normal {
            self.normal_direction = normal;
        }

        let sampler = ShapeSampler::with_options(self.options.clone());
        self.samples = sampler.sample(resolver, &self.references, self.normal_direction);

        if !self.samples.ok {
            tracing::warn!(
                "Constraint {} sampled with {} failed reference(s)",
                self.name,
                self.samples.failures.len()
            );
        }
        self.samples.ok
    }

    /// Cylinder of the first reference, if it is a cylindrical face
    pub fn cylinder(&self, resolver: &dyn ShapeResolver) -> ShapeResult<Option<CylinderDescriptor>> {
        match self.references.first() {
            Some(first) => Ok(sampling::analyze(&resolver.resolve(first)?)),
            None => Ok(None),
        }
    }
}
