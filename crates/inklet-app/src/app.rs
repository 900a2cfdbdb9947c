//! Application shell tying the editor to a renderer.

use inklet_core::{Editor, Event};
use inklet_render::{RenderContext, Renderer, RendererError};

/// The application: one editor plus the renderer that draws it.
///
/// Events arrive one at a time from the renderer's input layer and are
/// handled to completion before the next one; after each event the renderer
/// re-reads the state snapshot.
pub struct App {
    pub editor: Editor,
    renderer: Box<dyn Renderer>,
}

impl App {
    /// Create an app around the given renderer.
    pub fn new(renderer: Box<dyn Renderer>) -> Self {
        Self {
            editor: Editor::new(),
            renderer,
        }
    }

    /// Handle one inbound event and redraw.
    ///
    /// Page errors (an update referencing an unknown shape) are reported
    /// and otherwise absorbed: every event is a complete transformation
    /// over in-memory state, never a crash.
    pub fn handle_event(&mut self, event: Event) -> Result<(), RendererError> {
        log::debug!("event: {:?}", event);
        if let Err(e) = self.editor.dispatch(event) {
            log::warn!("event dropped: {}", e);
        }
        self.render()
    }

    /// Toggle dark mode and redraw.
    pub fn toggle_dark_mode(&mut self) -> Result<(), RendererError> {
        self.editor.toggle_dark_mode();
        self.render()
    }

    /// Draw one frame from the current state.
    pub fn render(&mut self) -> Result<(), RendererError> {
        let ctx = RenderContext::new(
            &self.editor.page,
            &self.editor.page_state,
            self.editor.meta,
        );
        self.renderer.render(&ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogRenderer;
    use inklet_core::{PointerStatus, ShapeUpdate};
    use kurbo::{Point, Vec2};
    use uuid::Uuid;

    fn app() -> App {
        App::new(Box::new(LogRenderer::new()))
    }

    #[test]
    fn test_full_click_drag_session() {
        let mut app = app();
        let id = app.editor.page.shapes_ordered()[0].id();

        app.handle_event(Event::PointShape { target: id }).unwrap();
        app.handle_event(Event::PointerMove {
            delta: Vec2::new(12.0, -4.0),
        })
        .unwrap();
        app.handle_event(Event::PointerUp).unwrap();

        assert_eq!(app.editor.status, PointerStatus::Idle);
        assert_eq!(
            app.editor.page.shape(id).unwrap().point(),
            Point::new(12.0, -4.0)
        );
    }

    #[test]
    fn test_unknown_update_is_absorbed() {
        let mut app = app();
        // The shell reports the page error but still renders.
        app.handle_event(Event::ShapeChange {
            id: Uuid::new_v4(),
            update: ShapeUpdate::Rotate { rotation: 1.0 },
        })
        .unwrap();
        assert_eq!(app.editor.page.len(), 1);
    }

    #[test]
    fn test_toggle_dark_mode() {
        let mut app = app();
        assert!(!app.editor.meta.is_dark_mode);
        app.toggle_dark_mode().unwrap();
        assert!(app.editor.meta.is_dark_mode);
    }
}
