//! Shape definitions for the demo page.

mod rectangle;

pub use rectangle::{DEFAULT_SIZE, Rectangle};

use kurbo::{Point, Size, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// A typed update command for a shape.
///
/// External shape-change notifications arrive as one of these variants
/// rather than an untyped field merge, so the page can reject updates that
/// reference an unknown id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeUpdate {
    /// Move the shape to a new page point.
    Move { point: Point },
    /// Resize the shape.
    Resize { size: Size },
    /// Replace the shape's text label.
    Rename { text: String },
    /// Set the rotation angle in radians.
    Rotate { rotation: f64 },
}

/// Enum wrapper for all shape types.
///
/// Only rectangles are exercised by this demo, but the enum keeps the wire
/// shape of the model open for more variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(Rectangle),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Rectangle(s) => s.id,
        }
    }

    /// Page id of the page that owns this shape.
    pub fn parent_id(&self) -> &str {
        match self {
            Shape::Rectangle(s) => &s.parent_id,
        }
    }

    /// Top-left position in page coordinates.
    pub fn point(&self) -> Point {
        match self {
            Shape::Rectangle(s) => s.point,
        }
    }

    /// Stable draw-order key.
    pub fn child_index(&self) -> usize {
        match self {
            Shape::Rectangle(s) => s.child_index,
        }
    }

    /// Translate the shape by a page-space delta.
    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Rectangle(s) => s.point += delta,
        }
    }

    /// Apply a typed update to this shape.
    pub fn apply_update(&mut self, update: ShapeUpdate) {
        match self {
            Shape::Rectangle(s) => match update {
                ShapeUpdate::Move { point } => s.point = point,
                ShapeUpdate::Resize { size } => s.size = size,
                ShapeUpdate::Rename { text } => s.text = text,
                ShapeUpdate::Rotate { rotation } => s.rotation = rotation,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate() {
        let mut shape = Shape::Rectangle(Rectangle::new("page1", Point::new(10.0, 10.0), 0));
        shape.translate(Vec2::new(5.0, -3.0));
        assert!((shape.point().x - 15.0).abs() < f64::EPSILON);
        assert!((shape.point().y - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_apply_update_variants() {
        let mut shape = Shape::Rectangle(Rectangle::new("page1", Point::ZERO, 0));

        shape.apply_update(ShapeUpdate::Move {
            point: Point::new(40.0, 50.0),
        });
        assert_eq!(shape.point(), Point::new(40.0, 50.0));

        shape.apply_update(ShapeUpdate::Resize {
            size: Size::new(20.0, 30.0),
        });
        shape.apply_update(ShapeUpdate::Rename {
            text: "renamed".to_string(),
        });
        shape.apply_update(ShapeUpdate::Rotate { rotation: 1.5 });

        let Shape::Rectangle(rect) = shape;
        assert_eq!(rect.size, Size::new(20.0, 30.0));
        assert_eq!(rect.text, "renamed");
        assert!((rect.rotation - 1.5).abs() < f64::EPSILON);
    }
}
