use super::Wiring;
use crate::core::controls::{action_for_key, KeyAction};
use crate::core::Screen;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &Wiring) {
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    let (in_round, can_confirm, confirmed, mode) = {
        let st = w.state.borrow();
        let session = st.game.session();
        (
            matches!(st.game.screen(), Screen::Round(_)),
            session.map(|s| s.can_confirm()).unwrap_or(false),
            session.map(|s| s.is_confirmed()).unwrap_or(false),
            st.mode,
        )
    };
    if !in_round {
        return;
    }
    match action {
        KeyAction::ConfirmOrContinue if can_confirm => super::confirm_guess(w),
        KeyAction::ConfirmOrContinue if confirmed => super::continue_round(w),
        KeyAction::ConfirmOrContinue => {}
        KeyAction::ToggleMapMode => super::set_map_mode(w, mode.toggled()),
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(w: &Wiring) {
    if let Some(window) = web::window() {
        let w = w.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &w);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
