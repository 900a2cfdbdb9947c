//! Editor state and event dispatch.

use crate::events::Event;
use crate::interaction::PointerStatus;
use crate::page::{Page, PageError};
use crate::page_state::PageState;
use crate::shapes::{DEFAULT_SIZE, Rectangle, Shape, ShapeId, ShapeUpdate};
use crate::theme::{Meta, Theme};
use kurbo::{Point, Vec2};
use std::collections::VecDeque;

/// Id of the single demo page.
const PAGE_ID: &str = "page1";

/// Actions applied after the current dispatch completes but before the next
/// event is processed.
#[derive(Debug, Clone, Copy)]
enum Deferred {
    SetHovered(ShapeId),
}

/// The complete editor state: one page of shapes, its viewport state, the
/// pointer status and the theme metadata.
///
/// All mutation happens synchronously inside [`Editor::dispatch`]; events
/// are processed one at a time in delivery order and a handler always runs
/// to completion.
#[derive(Debug)]
pub struct Editor {
    /// The page of shapes.
    pub page: Page,
    /// Selection, hover and camera state.
    pub page_state: PageState,
    /// Current pointer phase.
    pub status: PointerStatus,
    /// Renderer metadata (dark mode flag).
    pub meta: Meta,
    /// Queue of actions deferred to the end of the current dispatch.
    deferred: VecDeque<Deferred>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Create an editor seeded with a single rectangle at the page origin.
    pub fn new() -> Self {
        let mut page = Page::new(PAGE_ID);
        let mut seed = Rectangle::new(PAGE_ID, Point::ZERO, 1);
        seed.text = "Hello".to_string();
        page.add_shape(Shape::Rectangle(seed));

        Self {
            page,
            page_state: PageState::new(),
            status: PointerStatus::Idle,
            meta: Meta::default(),
            deferred: VecDeque::new(),
        }
    }

    /// Derive the theme for the current metadata.
    pub fn theme(&self) -> Theme {
        self.meta.theme()
    }

    /// Toggle dark mode.
    pub fn toggle_dark_mode(&mut self) {
        self.meta.is_dark_mode = !self.meta.is_dark_mode;
    }

    /// Route one event to its handler, then flush deferred actions.
    ///
    /// Deferred actions run after the handler's synchronous work but before
    /// the next event, so a hover-set cannot be overwritten by work in the
    /// same dispatch cycle.
    pub fn dispatch(&mut self, event: Event) -> Result<(), PageError> {
        let result = match event {
            Event::Pan { delta } => {
                self.on_pan(delta);
                Ok(())
            }
            Event::Pinch {
                point,
                delta,
                zoom_delta,
            } => {
                self.on_pinch(point, delta, zoom_delta);
                Ok(())
            }
            Event::PointShape { target } => {
                self.on_point_shape(target);
                Ok(())
            }
            Event::PointCanvas { point } => {
                self.on_point_canvas(point);
                Ok(())
            }
            Event::PointerMove { delta } => {
                self.on_pointer_move(delta);
                Ok(())
            }
            Event::PointerUp => {
                self.on_pointer_up();
                Ok(())
            }
            Event::HoverShape { target } => {
                self.on_hover_shape(target);
                Ok(())
            }
            Event::UnhoverShape => {
                self.on_unhover_shape();
                Ok(())
            }
            Event::ShapeChange { id, update } => self.on_shape_change(id, update),
        };
        self.flush_deferred();
        result
    }

    fn flush_deferred(&mut self) {
        while let Some(action) = self.deferred.pop_front() {
            match action {
                Deferred::SetHovered(id) => self.page_state.hovered_id = Some(id),
            }
        }
    }

    /// Pan the camera by a screen-space gesture delta.
    pub fn on_pan(&mut self, delta: Vec2) {
        self.page_state.camera = self.page_state.camera.pan(delta);
    }

    /// Apply a pinch gesture to the camera.
    pub fn on_pinch(&mut self, point: Point, delta: Vec2, zoom_delta: f64) {
        self.page_state.camera = self.page_state.camera.pinch(point, delta, zoom_delta);
    }

    /// Pointer went down on a shape: start pointing and select it.
    pub fn on_point_shape(&mut self, target: ShapeId) {
        self.status = PointerStatus::Pointing;
        self.page_state.select(target);
    }

    /// Pointer went down on empty canvas.
    ///
    /// With an empty selection this creates a new rectangle centered on the
    /// click; otherwise it only deselects.
    pub fn on_point_canvas(&mut self, point: Point) {
        if self.page_state.selection_is_empty() {
            let page_point = self.page_state.camera.screen_to_page(point);
            let center_offset = Vec2::new(DEFAULT_SIZE.width / 2.0, DEFAULT_SIZE.height / 2.0);
            let child_index = self.page.len();
            let rect = Rectangle::new(PAGE_ID, page_point - center_offset, child_index);
            let id = self.page.add_shape(Shape::Rectangle(rect));
            log::debug!("created shape {} at index {}", id, child_index);
        } else {
            self.status = PointerStatus::Idle;
            self.page_state.clear_selection();
        }
    }

    /// Pointer moved by a page-space delta.
    ///
    /// The first move after a down-on-shape promotes pointing to dragging;
    /// while dragging, every selected shape follows the delta. A selected id
    /// that is no longer on the page is skipped with a warning.
    pub fn on_pointer_move(&mut self, delta: Vec2) {
        if self.status == PointerStatus::Pointing {
            self.status = PointerStatus::Dragging;
        }

        if self.status == PointerStatus::Dragging {
            for &id in &self.page_state.selected_ids {
                match self.page.shape_mut(id) {
                    Some(shape) => shape.translate(delta),
                    None => log::warn!("dragging unknown shape {}, skipped", id),
                }
            }
        }
    }

    /// Pointer released: unconditionally back to idle.
    ///
    /// The selection is left intact; it is cleared only by an explicit
    /// canvas click.
    pub fn on_pointer_up(&mut self) {
        self.status = PointerStatus::Idle;
    }

    /// Pointer entered a shape. The hover id is set after the current
    /// dispatch completes, not immediately.
    pub fn on_hover_shape(&mut self, target: ShapeId) {
        self.deferred.push_back(Deferred::SetHovered(target));
    }

    /// Pointer left the hovered shape.
    pub fn on_unhover_shape(&mut self) {
        self.page_state.hovered_id = None;
    }

    /// A shape reported an external change.
    pub fn on_shape_change(&mut self, id: ShapeId, update: ShapeUpdate) -> Result<(), PageError> {
        self.page.apply_update(id, update)
    }
}
