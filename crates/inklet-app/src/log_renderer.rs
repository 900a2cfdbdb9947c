//! A headless renderer that logs each frame.

use inklet_render::{RenderContext, Renderer, RendererError};

/// Renderer backend that prints a one-line frame summary through `log`.
///
/// Stands in for a real drawing backend in the demo binary and in tests.
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, ctx: &RenderContext) -> Result<(), RendererError> {
        self.frames += 1;
        let camera = &ctx.page_state.camera;
        let clear = self.background_color(ctx).to_rgba8();
        log::info!(
            "frame {}: {} shapes, selected {:?}, hovered {:?}, camera ({:.1}, {:.1}) @ {:.0}%, clear #{:02x}{:02x}{:02x}",
            self.frames,
            ctx.page.len(),
            ctx.page_state.selected_ids,
            ctx.page_state.hovered_id,
            camera.point.x,
            camera.point.y,
            camera.zoom * 100.0,
            clear.r,
            clear.g,
            clear.b,
        );
        if ctx.page.is_empty() {
            return Ok(());
        }
        for shape in ctx.page.shapes_ordered() {
            log::debug!(
                "  shape {} index {} at ({:.1}, {:.1})",
                shape.id(),
                shape.child_index(),
                shape.point().x,
                shape.point().y,
            );
        }
        Ok(())
    }
}
