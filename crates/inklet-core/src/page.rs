//! Page: the owned collection of shapes and their bindings.

use crate::shapes::{Shape, ShapeId, ShapeUpdate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for bindings.
pub type BindingId = Uuid;

/// Errors from page mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("shape not found: {id}")]
    ShapeNotFound { id: ShapeId },
}

/// An inter-shape binding. Bindings are pass-through data for the renderer;
/// the core never interprets them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Binding {
    pub id: BindingId,
    pub from_id: ShapeId,
    pub to_id: ShapeId,
}

/// A page owning a collection of shapes, keyed by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page identifier.
    pub id: String,
    /// All shapes on the page. Insertion order is irrelevant; draw order
    /// comes from each shape's `child_index`.
    pub shapes: HashMap<ShapeId, Shape>,
    /// Inter-shape bindings.
    pub bindings: HashMap<BindingId, Binding>,
}

impl Page {
    /// Create an empty page.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            shapes: HashMap::new(),
            bindings: HashMap::new(),
        }
    }

    /// Add a shape to the page.
    pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id();
        self.shapes.insert(id, shape);
        id
    }

    /// Get a shape by id.
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Get a mutable reference to a shape by id.
    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(&id)
    }

    /// Number of shapes on the page.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the page has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes in draw order (back to front, by `child_index`).
    pub fn shapes_ordered(&self) -> Vec<&Shape> {
        let mut shapes: Vec<&Shape> = self.shapes.values().collect();
        shapes.sort_by_key(|s| s.child_index());
        shapes
    }

    /// Apply a typed update to the shape with the given id.
    ///
    /// Updates referencing an unknown id are rejected with
    /// [`PageError::ShapeNotFound`]; the page is left unchanged.
    pub fn apply_update(&mut self, id: ShapeId, update: ShapeUpdate) -> Result<(), PageError> {
        let shape = self
            .shapes
            .get_mut(&id)
            .ok_or(PageError::ShapeNotFound { id })?;
        shape.apply_update(update);
        Ok(())
    }

    /// Serialize the page to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a page from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
