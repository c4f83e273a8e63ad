//! Paris Underground Guesser: place each underground scene on a map of
//! physical depth against metaphorical freedom and progress.
//!
//! `core` is platform independent and host-testable; everything else is the
//! browser frontend and only builds for `wasm32`.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod input;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(target_arch = "wasm32")]
mod state;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::constants::*;
    use crate::core::{HoverZoom, MapMode, RoundOrchestrator, SceneCatalog};
    use crate::state::{AppState, MapView};
    use crate::{dom, events, frame};
    use instant::Instant;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("underground-guesser starting");

        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
        Ok(())
    }

    fn lookup_view(document: &web::Document) -> anyhow::Result<MapView> {
        Ok(MapView {
            document: document.clone(),
            container: dom::element_by_id(document, MAP_CONTAINER_ID)?,
            image: dom::element_by_id(document, MAP_IMAGE_ID)?,
            overlay: dom::element_by_id(document, MAP_OVERLAY_ID)?,
            canvas: dom::element_by_id(document, MAP_CANVAS_ID)?,
            scene_frame: dom::element_by_id(document, SCENE_FRAME_ID)?,
            scene_image: dom::element_by_id(document, SCENE_IMAGE_ID)?,
        })
    }

    fn wire_buttons(w: &events::Wiring) {
        let document = &w.view.document;

        let w_start = w.clone();
        dom::add_click_listener(document, START_BUTTON_ID, move || events::start_game(&w_start));

        let w_confirm = w.clone();
        dom::add_click_listener(document, CONFIRM_BUTTON_ID, move || {
            events::confirm_guess(&w_confirm)
        });

        let w_continue = w.clone();
        dom::add_click_listener(document, CONTINUE_BUTTON_ID, move || {
            events::continue_round(&w_continue)
        });

        let w_restart = w.clone();
        dom::add_click_listener(document, RESTART_BUTTON_ID, move || {
            events::restart_game(&w_restart)
        });

        let w_physical = w.clone();
        dom::add_click_listener(document, PHYSICAL_BUTTON_ID, move || {
            events::set_map_mode(&w_physical, MapMode::Physical)
        });

        let w_metaphorical = w.clone();
        dom::add_click_listener(document, METAPHORICAL_BUTTON_ID, move || {
            events::set_map_mode(&w_metaphorical, MapMode::Metaphorical)
        });
    }

    fn init() -> anyhow::Result<()> {
        let document = dom::page_document()?;

        let view = lookup_view(&document)?;
        let catalog = SceneCatalog::builtin()?;
        log::info!("[init] {} scenes", catalog.len());

        let wiring = events::Wiring {
            view: view.clone(),
            state: Rc::new(RefCell::new(AppState::new(RoundOrchestrator::new(catalog)))),
            hover: Rc::new(RefCell::new(HoverZoom::new())),
        };

        wire_buttons(&wiring);
        events::wire_map_click(&wiring);
        events::wire_layout_observers(&wiring);
        events::wire_scene_hover(&wiring);
        events::wire_global_keydown(&wiring);
        events::wire_hashchange(&wiring);

        // honour a deep link such as #/scene/2 and paint the first screen
        events::apply_current_route(&wiring);

        frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
            hover: wiring.hover.clone(),
            scene_image: view.scene_image.clone(),
            last_instant: Instant::now(),
            last_css: String::new(),
        })));

        Ok(())
    }
}
