use crate::core::constants::{
    ANSWER_MARKER_COLOR, GUESS_MARKER_COLOR, MARKER_BORDER_COLOR, MARKER_BORDER_PX,
    MARKER_RADIUS_PX, REVEAL_LINE_COLOR, REVEAL_LINE_WIDTH_PX,
};
use crate::core::{draw_map, MapSurface, MarkerKind};
use crate::dom;
use crate::state::{AppState, MapView};
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Map overlay drawn on a 2D canvas stretched over the map container.
///
/// Coordinates passed in are CSS pixels relative to the container; the
/// context transform maps them onto the device-pixel backing store.
pub struct CanvasSurface<'a> {
    ctx: web::CanvasRenderingContext2d,
    canvas: &'a web::HtmlCanvasElement,
    overlay: &'a web::HtmlElement,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(
        canvas: &'a web::HtmlCanvasElement,
        overlay: &'a web::HtmlElement,
    ) -> anyhow::Result<Self> {
        let dpr = dom::sync_canvas_backing_size(canvas);
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            ctx,
            canvas,
            overlay,
        })
    }
}

impl MapSurface for CanvasSurface<'_> {
    fn clear(&mut self) {
        // clear in backing-store pixels regardless of the current transform
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }

    fn set_overlay_opacity(&mut self, opacity: f64) {
        _ = self
            .overlay
            .style()
            .set_property("opacity", &format!("{}", opacity));
    }

    fn draw_marker(&mut self, at: DVec2, kind: MarkerKind) {
        let fill = match kind {
            MarkerKind::Guess => GUESS_MARKER_COLOR,
            MarkerKind::Answer => ANSWER_MARKER_COLOR,
        };
        self.ctx.begin_path();
        _ = self.ctx.arc(at.x, at.y, MARKER_RADIUS_PX, 0.0, TAU);
        self.ctx.set_fill_style_str(fill);
        self.ctx.fill();
        self.ctx.set_line_width(MARKER_BORDER_PX);
        self.ctx.set_stroke_style_str(MARKER_BORDER_COLOR);
        self.ctx.stroke();
    }

    fn draw_line(&mut self, from: DVec2, to: DVec2) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.set_stroke_style_str(REVEAL_LINE_COLOR);
        self.ctx.set_line_width(REVEAL_LINE_WIDTH_PX);
        self.ctx.stroke();
    }
}

/// Repaint the map overlay from the current state.
pub fn paint_map(view: &MapView, state: &AppState) {
    match CanvasSurface::new(&view.canvas, &view.overlay) {
        Ok(mut surface) => draw_map(
            &mut surface,
            state.game.session(),
            state.layout.metrics().as_ref(),
            state.mode,
        ),
        Err(e) => log::error!("[render] {:?}", e),
    }
}
