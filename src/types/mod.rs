pub mod config;
pub mod coverage;
pub mod grid_space;
pub mod item_kind;
pub mod metrics;
pub mod placed_item;
pub mod snapshot;
pub mod tool;
pub mod view;

pub use config::PlannerConfig;
pub use coverage::{Coverage, CoverageMap};
pub use grid_space::{CellRect, GridSpace};
pub use item_kind::{footprint_of_name, Footprint, ItemKind, TerritoryRings};
pub use metrics::PlannerMetrics;
pub use placed_item::{ItemId, PlacedItem, TownCenterTag};
pub use snapshot::{HistorySnapshot, Legality, PlannerSnapshot, RenderItem};
pub use tool::Tool;
pub use view::{GridCell, ScreenPoint, ViewTransform};
