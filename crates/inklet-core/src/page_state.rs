//! Transient viewport, selection and hover state for a page.

use crate::camera::Camera;
use crate::shapes::ShapeId;
use serde::{Deserialize, Serialize};

/// Selection, hover and camera state, distinct from page content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageState {
    /// Currently selected shape ids. Empty or a single id in this design;
    /// multi-select is never produced by the interaction logic.
    pub selected_ids: Vec<ShapeId>,
    /// Shape currently under the pointer, if any.
    pub hovered_id: Option<ShapeId>,
    /// Viewport camera.
    pub camera: Camera,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if nothing is selected.
    pub fn selection_is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }

    /// Replace the selection with a single shape.
    pub fn select(&mut self, id: ShapeId) {
        self.selected_ids.clear();
        self.selected_ids.push(id);
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selected_ids.clear();
    }
}
