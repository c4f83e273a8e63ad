//! Conversions between normalized map space and container pixel space.
//!
//! Normalized coordinates run 0..=100 on both axes with the origin at the
//! bottom-left of the map image (y grows upward). Pixel coordinates are
//! relative to the top-left of the container element (y grows downward) and
//! include the letterbox offset computed by [`crate::core::layout`].
//!
//! Both directions live here so they always share the same inverse relation.

use super::constants::{EDGE_EPSILON_PX, NORMALIZED_MAX, NORMALIZED_MIN};
use super::layout::LayoutMetrics;
use glam::DVec2;

/// A location on the game map in percent along each axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamp both axes into the valid normalized range.
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(NORMALIZED_MIN, NORMALIZED_MAX),
            y: self.y.clamp(NORMALIZED_MIN, NORMALIZED_MAX),
        }
    }

    /// Euclidean distance in normalized units.
    pub fn distance(self, other: NormalizedPoint) -> f64 {
        DVec2::new(self.x, self.y).distance(DVec2::new(other.x, other.y))
    }
}

/// Map a normalized point to container-relative pixels.
#[inline]
pub fn to_pixel(p: NormalizedPoint, m: &LayoutMetrics) -> DVec2 {
    let x = (p.x / NORMALIZED_MAX) * m.rendered_width + m.offset_x;
    let y = ((NORMALIZED_MAX - p.y) / NORMALIZED_MAX) * m.rendered_height + m.offset_y;
    DVec2::new(x, y)
}

/// Map a container-relative click to a normalized point.
///
/// Returns `None` when the click lands in the letterbox margin, outside the
/// painted image.
#[inline]
pub fn to_normalized(click: DVec2, m: &LayoutMetrics) -> Option<NormalizedPoint> {
    let img_x = click.x - m.offset_x;
    let img_y = click.y - m.offset_y;
    let eps = EDGE_EPSILON_PX;
    let inside = (-eps..=m.rendered_width + eps).contains(&img_x)
        && (-eps..=m.rendered_height + eps).contains(&img_y);
    if !inside {
        return None;
    }
    let x = (img_x / m.rendered_width) * NORMALIZED_MAX;
    let y = NORMALIZED_MAX - (img_y / m.rendered_height) * NORMALIZED_MAX;
    Some(NormalizedPoint::new(x, y).clamped())
}
