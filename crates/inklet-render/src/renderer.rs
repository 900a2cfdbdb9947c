//! Renderer trait abstraction.

use inklet_core::page::Page;
use inklet_core::page_state::PageState;
use inklet_core::theme::{Meta, Theme};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
}

/// The read-only state snapshot a renderer consumes for one frame.
///
/// The snapshot is borrowed from the editor after a dispatch completes, so
/// a renderer never observes a partially updated state.
pub struct RenderContext<'a> {
    /// The page of shapes and bindings to draw.
    pub page: &'a Page,
    /// Selection, hover and camera state.
    pub page_state: &'a PageState,
    /// Styling derived from the metadata.
    pub theme: Theme,
    /// Free-form metadata (dark mode flag).
    pub meta: Meta,
}

impl<'a> RenderContext<'a> {
    /// Build a snapshot over the given state.
    pub fn new(page: &'a Page, page_state: &'a PageState, meta: Meta) -> Self {
        Self {
            page,
            page_state,
            theme: meta.theme(),
            meta,
        }
    }
}

/// Trait for rendering backends.
///
/// Implementations own the actual drawing pipeline, hit testing and event
/// delivery; the core only hands them a snapshot per frame.
pub trait Renderer {
    /// Draw one frame from the snapshot.
    fn render(&mut self, ctx: &RenderContext) -> Result<(), RendererError>;

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.theme.background
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inklet_core::Editor;

    struct CountingRenderer {
        frames: usize,
    }

    impl Renderer for CountingRenderer {
        fn render(&mut self, ctx: &RenderContext) -> Result<(), RendererError> {
            assert_eq!(ctx.page.len(), 1);
            self.frames += 1;
            Ok(())
        }
    }

    #[test]
    fn test_snapshot_carries_derived_theme() {
        let mut editor = Editor::new();
        editor.toggle_dark_mode();

        let ctx = RenderContext::new(&editor.page, &editor.page_state, editor.meta);
        assert!(ctx.meta.is_dark_mode);
        assert_eq!(
            ctx.theme.background.to_rgba8(),
            inklet_core::theme::DARK_BACKGROUND.to_rgba8()
        );
    }

    #[test]
    fn test_renderer_consumes_snapshot() {
        let editor = Editor::new();
        let mut renderer = CountingRenderer { frames: 0 };
        let ctx = RenderContext::new(&editor.page, &editor.page_state, editor.meta);
        renderer.render(&ctx).unwrap();
        assert_eq!(renderer.frames, 1);
    }
}
