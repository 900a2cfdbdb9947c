//! Renderer abstraction for Inklet.
//!
//! The core never draws anything itself; a consumer supplies a [`Renderer`]
//! implementation and re-reads the [`RenderContext`] snapshot after every
//! dispatched event.

mod renderer;

pub use renderer::{RenderContext, Renderer, RendererError};
