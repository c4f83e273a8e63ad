//! Browser-side state shared by the event handlers.
//!
//! Everything the handlers mutate sits behind one `RefCell`, so each handler
//! borrows once, updates guess, score and screen together, then repaints.

use crate::core::{LayoutTracker, MapMode, RoundOrchestrator};
use crate::input::MapElements;
use web_sys as web;

pub struct AppState {
    pub game: RoundOrchestrator,
    pub layout: LayoutTracker,
    pub mode: MapMode,
}

impl AppState {
    pub fn new(game: RoundOrchestrator) -> Self {
        Self {
            game,
            layout: LayoutTracker::new(),
            mode: MapMode::default(),
        }
    }
}

/// DOM handles for the map panel.
#[derive(Clone)]
pub struct MapView {
    pub document: web::Document,
    pub container: web::HtmlElement,
    pub image: web::HtmlImageElement,
    pub overlay: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub scene_frame: web::HtmlElement,
    pub scene_image: web::HtmlImageElement,
}

impl MapView {
    pub fn elements(&self) -> MapElements<'_> {
        MapElements {
            container: &self.container,
            image: &self.image,
        }
    }
}
