//! In-memory shape store
//!
//! Holds the shapes of document objects keyed by object ID and resolves
//! references against them.

use std::collections::HashMap;

use parking_lot::RwLock;
use uuid::Uuid;

use super::{Shape, ShapeError, ShapeReference, ShapeResolver, ShapeResult, SubShape};

/// Shape resolver backed by a map of object shapes
#[derive(Debug, Default)]
pub struct ShapeStore {
    /// Storage for shape data (keyed by object ID)
    shapes: RwLock<HashMap<Uuid, Shape>>,
}

impl ShapeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a shape under a fresh object ID
    pub fn insert(&self, shape: Shape) -> Uuid {
        let id = Uuid::new_v4();
        self.shapes.write().insert(id, shape);
        id
    }

    /// Store or replace the shape of an existing object
    pub fn set(&self, id: Uuid, shape: Shape) {
        self.shapes.write().insert(id, shape);
    }

    /// Remove an object's shape
    pub fn remove(&self, id: Uuid) -> Option<Shape> {
        self.shapes.write().remove(&id)
    }

    /// Get a copy of an object's shape
    pub fn get(&self, id: Uuid) -> Option<Shape> {
        self.shapes.read().get(&id).cloned()
    }

    /// Number of stored objects
    pub fn len(&self) -> usize {
        self.shapes.read().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.shapes.read().is_empty()
    }
}

impl ShapeResolver for ShapeStore {
    fn resolve(&self, reference: &ShapeReference) -> ShapeResult<SubShape> {
        let shapes = self.shapes.read();
        let shape = shapes
            .get(&reference.object)
            .ok_or(ShapeError::ObjectNotFound(reference.object))?;
        if shape.is_null() {
            return Err(ShapeError::NullShape(reference.object));
        }
        shape.sub_shape(&reference.sub_element)
    }
}
