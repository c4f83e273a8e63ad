pub mod keyboard;
pub mod nav;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use nav::{apply_current_route, wire_hashchange};
pub use pointer::{wire_layout_observers, wire_map_click, wire_scene_hover};

use crate::core::{GameEvent, HoverZoom, MapMode};
use crate::overlay;
use crate::state::{AppState, MapView};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone)]
pub struct Wiring {
    pub view: MapView,
    pub state: Rc<RefCell<AppState>>,
    pub hover: Rc<RefCell<HoverZoom>>,
}

// ---------------- Player actions shared by buttons and keys ----------------

pub fn start_game(w: &Wiring) {
    let mut st = w.state.borrow_mut();
    let ev = st.game.start();
    after_event(w, &mut st, Some(ev));
}

pub fn confirm_guess(w: &Wiring) {
    let mut st = w.state.borrow_mut();
    let ev = st.game.confirm();
    after_event(w, &mut st, ev);
}

pub fn continue_round(w: &Wiring) {
    let mut st = w.state.borrow_mut();
    let ev = st.game.advance();
    after_event(w, &mut st, ev);
}

pub fn restart_game(w: &Wiring) {
    let mut st = w.state.borrow_mut();
    let ev = st.game.restart();
    after_event(w, &mut st, Some(ev));
}

pub fn set_map_mode(w: &Wiring, mode: MapMode) {
    let mut st = w.state.borrow_mut();
    st.mode = mode;
    overlay::sync_view(&w.view, &mut st);
}

fn after_event(w: &Wiring, st: &mut AppState, ev: Option<GameEvent>) {
    let Some(ev) = ev else {
        return;
    };
    match ev {
        GameEvent::RoundStarted(_) | GameEvent::SequenceExhausted { .. } | GameEvent::Restarted => {
            // the hashchange this causes finds the route already matching
            nav::navigate(nav::route_for(st.game.screen()));
        }
        GameEvent::RoundComplete { .. } => {}
    }
    overlay::sync_view(&w.view, st);
}
