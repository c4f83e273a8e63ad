// DOM element ids used by the web frontend. They must match `index.html`.

// Screens
pub const HOME_SCREEN_ID: &str = "home-screen";
pub const ROUND_SCREEN_ID: &str = "round-screen";
pub const ENDING_SCREEN_ID: &str = "ending-screen";

// Round screen: header and scene panel
pub const SCORE_LABEL_ID: &str = "score-label";
pub const ROUND_LABEL_ID: &str = "round-label";
pub const SCENE_FRAME_ID: &str = "scene-frame";
pub const SCENE_IMAGE_ID: &str = "scene-image";
pub const SCENE_NAME_ID: &str = "scene-name";
pub const SCENE_NARRATIVE_ID: &str = "scene-narrative";
pub const ROUND_SCORE_ID: &str = "round-score";

// Round screen: map panel
pub const MAP_CONTAINER_ID: &str = "map-container";
pub const MAP_IMAGE_ID: &str = "map-image";
pub const MAP_OVERLAY_ID: &str = "map-overlay";
pub const MAP_CANVAS_ID: &str = "map-canvas";

// Buttons
pub const START_BUTTON_ID: &str = "start-button";
pub const CONFIRM_BUTTON_ID: &str = "confirm-button";
pub const CONTINUE_BUTTON_ID: &str = "continue-button";
pub const PHYSICAL_BUTTON_ID: &str = "mode-physical";
pub const METAPHORICAL_BUTTON_ID: &str = "mode-metaphorical";
pub const RESTART_BUTTON_ID: &str = "restart-button";

// Ending screen
pub const FINAL_SCORE_ID: &str = "final-score";
pub const HISTORY_LIST_ID: &str = "round-history";

// Directory holding scene images, relative to the page
pub const SCENE_IMAGE_DIR: &str = "scenes/";
