use crate::core::HoverZoom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame easing of the scene image hover zoom.
pub struct FrameContext {
    pub hover: Rc<RefCell<HoverZoom>>,
    pub scene_image: web::HtmlImageElement,
    pub last_instant: Instant,
    pub last_css: String,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f64();
        self.last_instant = now;

        let t = self.hover.borrow_mut().step(dt_sec);
        let css = format!(
            "translate({:.2}px, {:.2}px) scale({:.4})",
            t.translate.x, t.translate.y, t.scale
        );
        // skip style writes once the tween has settled
        if css != self.last_css {
            _ = self.scene_image.style().set_property("transform", &css);
            self.last_css = css;
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
