//! Normalized events delivered by the renderer collaborator.

use crate::shapes::{ShapeId, ShapeUpdate};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// An inbound event from the renderer's input layer.
///
/// Coordinates and deltas are normalized by the collaborator: pan and pinch
/// deltas are in screen space, pointer-move deltas are already in page
/// units, and shape targets come from the collaborator's hit testing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Two-finger or wheel pan by a screen-space delta.
    Pan { delta: Vec2 },
    /// Pinch gesture: pan component plus a zoom component, anchored at a
    /// screen point.
    Pinch {
        point: Point,
        delta: Vec2,
        zoom_delta: f64,
    },
    /// Pointer went down on a shape.
    PointShape { target: ShapeId },
    /// Pointer went down on empty canvas, at a screen point.
    PointCanvas { point: Point },
    /// Pointer moved by a page-space delta.
    PointerMove { delta: Vec2 },
    /// Pointer was released.
    PointerUp,
    /// Pointer entered a shape.
    HoverShape { target: ShapeId },
    /// Pointer left the hovered shape.
    UnhoverShape,
    /// A shape reported an external change.
    ShapeChange { id: ShapeId, update: ShapeUpdate },
}
