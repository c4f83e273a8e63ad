//! Letterbox layout of the map image inside its container.
//!
//! The tracker holds the last observed container and natural image sizes and
//! derives [`LayoutMetrics`] from them. It has no notion of the DOM: the web
//! layer feeds it through [`SizeSource`] whenever a resize, image load or
//! round change happens.

/// Width/height pair in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementSize {
    pub width: f64,
    pub height: f64,
}

impl ElementSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn is_measurable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Where the image is painted inside the container after aspect-preserving fit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutMetrics {
    pub rendered_width: f64,
    pub rendered_height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Fit `natural` inside `container` preserving aspect ratio, centered on the
/// axis with slack. `None` when either size is zero or not yet known.
pub fn compute_metrics(container: ElementSize, natural: ElementSize) -> Option<LayoutMetrics> {
    if !container.is_measurable() || !natural.is_measurable() {
        return None;
    }
    let scale = (container.width / natural.width).min(container.height / natural.height);
    let rendered_width = natural.width * scale;
    let rendered_height = natural.height * scale;
    Some(LayoutMetrics {
        rendered_width,
        rendered_height,
        offset_x: (container.width - rendered_width) / 2.0,
        offset_y: (container.height - rendered_height) / 2.0,
    })
}

/// Platform capability that reports current element sizes.
pub trait SizeSource {
    fn container_size(&self) -> ElementSize;
    /// `None` until the image has finished loading.
    fn natural_size(&self) -> Option<ElementSize>;
}

#[derive(Clone, Debug, Default)]
pub struct LayoutTracker {
    metrics: Option<LayoutMetrics>,
}

impl LayoutTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current metrics, or `None` while the image is unmeasured.
    pub fn metrics(&self) -> Option<LayoutMetrics> {
        self.metrics
    }

    /// Re-measure from scratch. Idempotent: the result depends only on the
    /// sizes reported by `source`.
    pub fn remeasure(&mut self, source: &impl SizeSource) -> Option<LayoutMetrics> {
        let container = source.container_size();
        self.metrics = source
            .natural_size()
            .and_then(|natural| compute_metrics(container, natural));
        match &self.metrics {
            Some(m) => log::debug!(
                "[layout] rendered={:.1}x{:.1} offset=({:.1},{:.1})",
                m.rendered_width,
                m.rendered_height,
                m.offset_x,
                m.offset_y
            ),
            None => log::debug!("[layout] metrics unavailable"),
        }
        self.metrics
    }

    pub fn invalidate(&mut self) {
        self.metrics = None;
    }
}
