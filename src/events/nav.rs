use super::Wiring;
use crate::core::{Route, Screen};
use crate::overlay;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn route_for(screen: Screen) -> Route {
    match screen {
        Screen::Home => Route::Home,
        Screen::Round(i) => Route::Round(i),
        Screen::Finished => Route::Ending,
    }
}

pub fn navigate(route: Route) {
    if let Some(window) = web::window() {
        let target = route.to_string();
        let current = window.location().hash().unwrap_or_default();
        if current != target {
            _ = window.location().set_hash(&target);
        }
    }
}

/// Bring the game in line with the location hash. Unknown or out-of-range
/// routes are replaced by the route of the current screen.
pub fn apply_current_route(w: &Wiring) {
    let hash = web::window()
        .and_then(|win| win.location().hash().ok())
        .unwrap_or_default();
    let mut st = w.state.borrow_mut();
    let current = route_for(st.game.screen());
    let len = st.game.catalog().len();

    match Route::parse(&hash).and_then(|r| r.checked(len)) {
        Ok(route) if route == current => {}
        Ok(Route::Home) => {
            st.game.restart();
        }
        Ok(Route::Round(index)) => {
            if let Err(e) = st.game.start_round(index) {
                log::warn!("[nav] {}", e);
            }
        }
        Ok(Route::Ending) => {
            // only reachable by finishing the last round
            navigate(current);
        }
        Err(e) => {
            log::warn!("[nav] {}; staying on {}", e, current);
            navigate(current);
        }
    }
    overlay::sync_view(&w.view, &mut st);
}

pub fn wire_hashchange(w: &Wiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        apply_current_route(&w);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
