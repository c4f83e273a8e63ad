use super::Wiring;
use crate::core::ClickOutcome;
use crate::input;
use crate::overlay;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_map_click(w: &Wiring) {
    let w = w.clone();
    let container = w.view.container.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = input::pointer_element_px(&ev, &w.view.container);
        let mut st = w.state.borrow_mut();
        let metrics = st.layout.metrics();
        let Some(outcome) = st.game.click(pos, metrics.as_ref()) else {
            return;
        };
        match outcome {
            ClickOutcome::Placed(_) => overlay::sync_view(&w.view, &mut st),
            ClickOutcome::NoMetrics => log::debug!("[click] ignored: map not measured yet"),
            ClickOutcome::OutOfBounds | ClickOutcome::Frozen => {}
        }
    }) as Box<dyn FnMut(_)>);

    _ = container.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Re-measure the map on window resize and whenever the base image loads.
pub fn wire_layout_observers(w: &Wiring) {
    let w_resize = w.clone();
    let resize_closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let mut st = w_resize.state.borrow_mut();
        overlay::sync_view(&w_resize.view, &mut st);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();

    let w_load = w.clone();
    let load_closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        log::debug!("[layout] map image loaded");
        let mut st = w_load.state.borrow_mut();
        overlay::sync_view(&w_load.view, &mut st);
    }) as Box<dyn FnMut()>);
    _ = w
        .view
        .image
        .add_event_listener_with_callback("load", load_closure.as_ref().unchecked_ref());
    load_closure.forget();
}

pub fn wire_scene_hover(w: &Wiring) {
    let frame = w.view.scene_frame.clone();

    let w_move = w.clone();
    let move_closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let frame = &w_move.view.scene_frame;
        let pos = input::pointer_element_px(&ev, frame);
        w_move
            .hover
            .borrow_mut()
            .pointer_moved(pos, input::element_size(frame));
    }) as Box<dyn FnMut(_)>);
    _ = frame.add_event_listener_with_callback("pointermove", move_closure.as_ref().unchecked_ref());
    move_closure.forget();

    let w_leave = w.clone();
    let leave_closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w_leave.hover.borrow_mut().pointer_left();
    }) as Box<dyn FnMut(_)>);
    _ = frame
        .add_event_listener_with_callback("pointerleave", leave_closure.as_ref().unchecked_ref());
    leave_closure.forget();
}
