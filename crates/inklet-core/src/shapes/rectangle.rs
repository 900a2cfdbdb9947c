//! Rectangle shape.

use super::ShapeId;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default size for rectangles created by a canvas click.
pub const DEFAULT_SIZE: Size = Size::new(100.0, 100.0);

/// A rectangle on the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rectangle {
    pub id: ShapeId,
    /// Id of the owning page.
    pub parent_id: String,
    /// Top-left corner in page coordinates.
    pub point: Point,
    /// Rotation angle in radians (around center).
    #[serde(default)]
    pub rotation: f64,
    /// Width and height.
    pub size: Size,
    /// Text label.
    pub text: String,
    /// Stable draw-order key.
    pub child_index: usize,
}

impl Rectangle {
    /// Create a rectangle of the default size at the given page point.
    pub fn new(parent_id: impl Into<String>, point: Point, child_index: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            parent_id: parent_id.into(),
            point,
            rotation: 0.0,
            size: DEFAULT_SIZE,
            text: String::new(),
            child_index,
        }
    }

    /// Bounding box in page coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.point, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_creation() {
        let rect = Rectangle::new("page1", Point::new(10.0, 20.0), 3);
        assert_eq!(rect.parent_id, "page1");
        assert_eq!(rect.size, DEFAULT_SIZE);
        assert_eq!(rect.child_index, 3);
        assert!((rect.rotation).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds() {
        let rect = Rectangle::new("page1", Point::new(10.0, 20.0), 0);
        let bounds = rect.bounds();
        assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 110.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 120.0).abs() < f64::EPSILON);
    }
}
