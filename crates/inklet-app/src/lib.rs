//! Inklet Application
//!
//! The application shell: owns the editor state, routes normalized events
//! from the renderer collaborator into it, and drives a renderer with a
//! fresh snapshot after every event.

mod app;
mod log_renderer;

pub use app::App;
pub use log_renderer::LogRenderer;
