//! Inklet Core Library
//!
//! Platform-agnostic state and interaction logic for the Inklet canvas demo.
//! Rendering, hit-testing and event delivery are supplied by an external
//! renderer; this crate only owns the camera, the page of shapes and the
//! pointer state machine that ties them together.

pub mod camera;
pub mod editor;
pub mod events;
pub mod interaction;
pub mod page;
pub mod page_state;
pub mod shapes;
pub mod theme;

pub use camera::Camera;
pub use editor::Editor;
pub use events::Event;
pub use interaction::PointerStatus;
pub use page::{Binding, Page, PageError};
pub use page_state::PageState;
pub use shapes::{Rectangle, Shape, ShapeId, ShapeUpdate};
pub use theme::{Meta, Theme};
