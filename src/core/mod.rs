pub mod constants;
pub mod controls;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod layout;
pub mod rounds;
pub mod route;
pub mod scenes;
pub mod scoring;
pub mod session;
pub mod surface;

pub use error::{CatalogError, RouteError};
pub use geometry::{to_normalized, to_pixel, NormalizedPoint};
pub use hover::{HoverTransform, HoverZoom};
pub use layout::{compute_metrics, ElementSize, LayoutMetrics, LayoutTracker, SizeSource};
pub use rounds::{GameEvent, GameProgress, RoundOrchestrator, RoundResult, Screen};
pub use route::Route;
pub use scenes::{Scene, SceneCatalog, SCENES};
pub use scoring::{format_significant, score, score_guess};
pub use session::{ClickOutcome, GuessPhase, GuessSession};
pub use surface::{draw_map, MapMode, MapSurface, MarkerKind};
