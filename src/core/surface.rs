//! Drawing-surface abstraction for the map overlay.
//!
//! The web frontend implements [`MapSurface`] on a 2D canvas; tests use a
//! recording fake. All positions are container-relative pixels produced by
//! [`to_pixel`], so markers and the reveal line share the click transform.

use super::constants::{OVERLAY_OPACITY_METAPHORICAL, OVERLAY_OPACITY_PHYSICAL};
use super::geometry::to_pixel;
use super::layout::LayoutMetrics;
use super::session::GuessSession;
use glam::DVec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MapMode {
    #[default]
    Physical,
    Metaphorical,
}

impl MapMode {
    pub fn toggled(self) -> Self {
        match self {
            MapMode::Physical => MapMode::Metaphorical,
            MapMode::Metaphorical => MapMode::Physical,
        }
    }

    /// Opacity of the physical overlay image above the axes image.
    pub fn overlay_opacity(self) -> f64 {
        match self {
            MapMode::Physical => OVERLAY_OPACITY_PHYSICAL,
            MapMode::Metaphorical => OVERLAY_OPACITY_METAPHORICAL,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerKind {
    Guess,
    Answer,
}

pub trait MapSurface {
    fn clear(&mut self);
    fn set_overlay_opacity(&mut self, opacity: f64);
    fn draw_marker(&mut self, at: DVec2, kind: MarkerKind);
    fn draw_line(&mut self, from: DVec2, to: DVec2);
}

/// Repaint the overlay for the current session.
///
/// The guess marker appears once a guess exists; the answer marker and the
/// connecting line only after confirmation. With no metrics only the clear
/// and overlay opacity are applied.
pub fn draw_map<S: MapSurface + ?Sized>(
    surface: &mut S,
    session: Option<&GuessSession>,
    metrics: Option<&LayoutMetrics>,
    mode: MapMode,
) {
    surface.clear();
    surface.set_overlay_opacity(mode.overlay_opacity());
    let (Some(session), Some(m)) = (session, metrics) else {
        return;
    };
    let Some(guess) = session.guess() else {
        return;
    };
    let guess_px = to_pixel(guess, m);
    if session.is_confirmed() {
        let answer_px = to_pixel(session.answer(), m);
        surface.draw_line(guess_px, answer_px);
        surface.draw_marker(answer_px, MarkerKind::Answer);
    }
    surface.draw_marker(guess_px, MarkerKind::Guess);
}
