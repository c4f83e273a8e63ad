//! Hover zoom for the scene image: the picture scales up and drifts against
//! the pointer while hovered, eased toward its target every frame.

use super::constants::{HOVER_MAX_DISPLACEMENT_PX, HOVER_TWEEN_TAU_SEC, HOVER_ZOOM_SCALE};
use super::layout::ElementSize;
use glam::DVec2;

/// Target displacement for a pointer at `pos` inside a box of `size`.
#[inline]
pub fn hover_displacement(pos: DVec2, size: ElementSize) -> DVec2 {
    if size.width <= 0.0 || size.height <= 0.0 {
        return DVec2::ZERO;
    }
    let max = HOVER_MAX_DISPLACEMENT_PX;
    DVec2::new(
        (pos.x / size.width) * (2.0 * max) - max,
        (pos.y / size.height) * (2.0 * max) - max,
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverTransform {
    pub translate: DVec2,
    pub scale: f64,
}

impl Default for HoverTransform {
    fn default() -> Self {
        Self {
            translate: DVec2::ZERO,
            scale: 1.0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct HoverZoom {
    pointer: Option<(DVec2, ElementSize)>,
    current: HoverTransform,
}

impl HoverZoom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_moved(&mut self, pos: DVec2, size: ElementSize) {
        self.pointer = Some((pos, size));
    }

    pub fn pointer_left(&mut self) {
        self.pointer = None;
    }

    pub fn is_hovering(&self) -> bool {
        self.pointer.is_some()
    }

    pub fn target(&self) -> HoverTransform {
        match self.pointer {
            Some((pos, size)) => HoverTransform {
                translate: hover_displacement(pos, size),
                scale: HOVER_ZOOM_SCALE,
            },
            None => HoverTransform::default(),
        }
    }

    pub fn current(&self) -> HoverTransform {
        self.current
    }

    /// Ease toward the target; returns the new transform.
    pub fn step(&mut self, dt_sec: f64) -> HoverTransform {
        let target = self.target();
        let alpha = 1.0 - (-dt_sec.max(0.0) / HOVER_TWEEN_TAU_SEC).exp();
        self.current.translate += (target.translate - self.current.translate) * alpha;
        self.current.scale += (target.scale - self.current.scale) * alpha;
        self.current
    }
}
