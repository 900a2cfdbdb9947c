//! Demo entry point: runs a scripted event session against the log renderer.

use inklet_app::{App, LogRenderer};
use inklet_core::{Event, Page};
use kurbo::{Point, Vec2};

fn main() {
    env_logger::init();
    log::info!("Starting Inklet demo session");

    let mut app = App::new(Box::new(LogRenderer::new()));

    // Optionally restore a page snapshot dumped by a previous session.
    if let Some(path) = std::env::args().nth(1) {
        match load_page(&path) {
            Ok(page) => {
                log::info!("restored {} shapes from {}", page.len(), path);
                app.editor.page = page;
            }
            Err(e) => log::warn!("could not restore {}: {}", path, e),
        }
    }

    let Some(seed) = app.editor.page.shapes_ordered().first().map(|s| s.id()) else {
        log::error!("page has no shapes to drive the session with");
        return;
    };

    let script = [
        // Click empty canvas: creates a second rectangle centered there.
        Event::PointCanvas {
            point: Point::new(200.0, 200.0),
        },
        // Select the seed shape and drag it.
        Event::PointShape { target: seed },
        Event::PointerMove {
            delta: Vec2::new(30.0, 10.0),
        },
        Event::PointerMove {
            delta: Vec2::new(15.0, 5.0),
        },
        Event::PointerUp,
        // Hover briefly, then leave.
        Event::HoverShape { target: seed },
        Event::UnhoverShape,
        // Pan, then pinch-zoom around the viewport center.
        Event::Pan {
            delta: Vec2::new(-40.0, 0.0),
        },
        Event::Pinch {
            point: Point::new(400.0, 300.0),
            delta: Vec2::ZERO,
            zoom_delta: 0.2,
        },
        // Click canvas with a live selection: deselects only.
        Event::PointCanvas {
            point: Point::new(500.0, 100.0),
        },
    ];

    for event in script {
        if let Err(e) = app.handle_event(event) {
            log::error!("render failed: {}", e);
            return;
        }
    }

    app.toggle_dark_mode().ok();
    log::info!("Session complete: {} shapes on page", app.editor.page.len());

    match app.editor.page.to_json() {
        Ok(json) => log::debug!("final page snapshot:\n{}", json),
        Err(e) => log::warn!("page snapshot failed: {}", e),
    }
}

fn load_page(path: &str) -> Result<Page, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(Page::from_json(&json)?)
}
