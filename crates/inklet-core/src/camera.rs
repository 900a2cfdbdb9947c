//! Camera module for the screen-to-page viewport transform.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Minimum allowed zoom level (15%).
pub const MIN_ZOOM: f64 = 0.15;
/// Maximum allowed zoom level (500%).
pub const MAX_ZOOM: f64 = 5.0;

/// Camera describes the page-space pan offset and zoom scalar that map
/// screen coordinates onto the page.
///
/// The camera is an immutable value: `pan` and `pinch` return a new camera
/// with both fields derived together, so a reader never observes a torn
/// intermediate state where only one field has been updated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Page-space pan offset.
    pub point: Vec2,
    /// Zoom level, kept within [`MIN_ZOOM`, `MAX_ZOOM`].
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            point: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

/// Convert a screen point to a page point for an arbitrary camera offset
/// and zoom.
fn screen_to_page(point: Point, camera_point: Vec2, zoom: f64) -> Point {
    Point::new(point.x / zoom - camera_point.x, point.y / zoom - camera_point.y)
}

impl Camera {
    /// Create a camera at the origin with 100% zoom.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a screen point to a page point under this camera.
    pub fn screen_to_page(&self, point: Point) -> Point {
        screen_to_page(point, self.point, self.zoom)
    }

    /// Pan the camera by a screen-space gesture delta.
    ///
    /// The new offset is the current offset minus the delta divided by the
    /// current zoom. Pan is never clamped.
    pub fn pan(&self, delta: Vec2) -> Camera {
        Camera {
            point: self.point - delta / self.zoom,
            zoom: self.zoom,
        }
    }

    /// Apply a pinch gesture anchored at `screen_point`.
    ///
    /// `delta` is the pan component of the gesture and `zoom_delta` the zoom
    /// component. The new zoom is clamped to [`MIN_ZOOM`, `MAX_ZOOM`]; the
    /// new offset is chosen so the pinch focal point stays visually
    /// stationary while the zoom changes.
    pub fn pinch(&self, screen_point: Point, delta: Vec2, zoom_delta: f64) -> Camera {
        let next_zoom = (self.zoom - zoom_delta / 2.0 * self.zoom).clamp(MIN_ZOOM, MAX_ZOOM);

        // Pan first, then correct for the focal point's page position
        // shifting between the old and new zoom.
        let panned = self.point - delta / self.zoom;
        let correction = screen_to_page(screen_point, self.point, next_zoom)
            - screen_to_page(screen_point, self.point, self.zoom);

        Camera {
            point: panned + correction,
            zoom: next_zoom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera() {
        let camera = Camera::new();
        assert_eq!(camera.point, Vec2::ZERO);
        assert!((camera.zoom - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pan_offsets_by_delta_over_zoom() {
        let camera = Camera {
            point: Vec2::new(10.0, 20.0),
            zoom: 2.0,
        };
        let panned = camera.pan(Vec2::new(30.0, -10.0));
        assert!((panned.point.x - (10.0 - 15.0)).abs() < f64::EPSILON);
        assert!((panned.point.y - (20.0 + 5.0)).abs() < f64::EPSILON);
        assert!((panned.zoom - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pan_leaves_zoom_unchanged() {
        let camera = Camera::new();
        let panned = camera.pan(Vec2::new(100.0, 100.0));
        assert!((panned.zoom - camera.zoom).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screen_to_page() {
        let camera = Camera {
            point: Vec2::new(50.0, 100.0),
            zoom: 2.0,
        };
        let page = camera.screen_to_page(Point::new(200.0, 400.0));
        assert!((page.x - 50.0).abs() < f64::EPSILON);
        assert!((page.y - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pinch_zoom_clamp() {
        let camera = Camera::new();
        let zoomed_out = camera.pinch(Point::ZERO, Vec2::ZERO, 100.0);
        assert!((zoomed_out.zoom - MIN_ZOOM).abs() < f64::EPSILON);

        let zoomed_in = camera.pinch(Point::ZERO, Vec2::ZERO, -100.0);
        assert!((zoomed_in.zoom - MAX_ZOOM).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pinch_zero_delta_is_noop() {
        let camera = Camera {
            point: Vec2::new(13.0, -7.0),
            zoom: 1.5,
        };
        let pinched = camera.pinch(Point::new(400.0, 300.0), Vec2::ZERO, 0.0);
        assert_eq!(pinched, camera);
    }

    #[test]
    fn test_pinch_zoom_formula() {
        // zoom' = clamp(1 - 0.2/2 * 1) = 0.9
        let camera = Camera::new();
        let pinched = camera.pinch(Point::ZERO, Vec2::ZERO, 0.2);
        assert!((pinched.zoom - 0.9).abs() < f64::EPSILON);
        // Focal point at the origin: both screen_to_page terms are zero,
        // so the offset does not move.
        assert_eq!(pinched.point, Vec2::ZERO);
    }

    #[test]
    fn test_pinch_keeps_focal_point_stationary() {
        let camera = Camera {
            point: Vec2::new(25.0, 40.0),
            zoom: 1.0,
        };
        let focal = Point::new(320.0, 240.0);
        let before = camera.screen_to_page(focal);
        let pinched = camera.pinch(focal, Vec2::ZERO, 0.4);
        let after = pinched.screen_to_page(focal);

        assert!((before.x - after.x).abs() < 1e-9);
        assert!((before.y - after.y).abs() < 1e-9);
    }
}
