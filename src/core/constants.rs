// Game tuning constants shared by the pure core and the web frontend.

// Normalized map space
pub const NORMALIZED_MIN: f64 = 0.0;
pub const NORMALIZED_MAX: f64 = 100.0;

// Slack on the image-bounds test so clicks on the exact edge survive float error
pub const EDGE_EPSILON_PX: f64 = 1e-6;

// Scoring curve: min(SCORE_CAP, SCORE_NUMERATOR / max(SCORE_DISTANCE_FLOOR, d))
pub const SCORE_NUMERATOR: f64 = 150.0;
pub const SCORE_CAP: f64 = 100.0;
pub const SCORE_DISTANCE_FLOOR: f64 = 1.0;

// Markers and reveal line (CSS pixels)
pub const MARKER_RADIUS_PX: f64 = 8.0;
pub const MARKER_BORDER_PX: f64 = 2.0;
pub const GUESS_MARKER_COLOR: &str = "#ef4444"; // red-500
pub const ANSWER_MARKER_COLOR: &str = "#22c55e"; // green-500
pub const MARKER_BORDER_COLOR: &str = "#ffffff";
pub const REVEAL_LINE_COLOR: &str = "#30b0ff";
pub const REVEAL_LINE_WIDTH_PX: f64 = 2.0;

// Hover zoom on the scene image
pub const HOVER_ZOOM_SCALE: f64 = 1.2;
pub const HOVER_MAX_DISPLACEMENT_PX: f64 = -100.0; // negative: image moves against the pointer
pub const HOVER_TWEEN_TAU_SEC: f64 = 0.1;

// Map overlay opacity per mode
pub const OVERLAY_OPACITY_PHYSICAL: f64 = 1.0;
pub const OVERLAY_OPACITY_METAPHORICAL: f64 = 0.0;

// Significant digits on the final score screen
pub const FINAL_SCORE_PRECISION: usize = 4;
