// Shared planner constants

// Grid dimensions
pub const DEFAULT_GRID_WIDTH: u32 = 80;
pub const DEFAULT_GRID_HEIGHT: u32 = 80;
pub const MIN_GRID_DIMENSION: u32 = 10;
pub const MAX_GRID_WIDTH: u32 = 500;
pub const MAX_GRID_HEIGHT: u32 = 500;

// View
pub const DEFAULT_CELL_SIZE: f64 = 20.0; // Pixels per cell at scale 1.0
pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 3.0;
pub const PINCH_SENSITIVITY: f64 = 0.01; // Scale change per pixel of pinch distance

// History
pub const MAX_HISTORY_SIZE: usize = 50;
/// Upper bound accepted for a configured history limit
pub const HISTORY_LIMIT_CAP: usize = 1000;

// Territory rings, in cells beyond the source footprint
pub const BANNER_CONTROL_RADIUS: i32 = 3;
pub const BANNER_BUILDABLE_RADIUS: i32 = 7;
pub const ALLIANCE_HQ_CONTROL_RADIUS: i32 = 6;
pub const ALLIANCE_HQ_BUILDABLE_RADIUS: i32 = 10;

// Padding around buildings when cropping an image export
pub const BOUNDS_PADDING: i32 = 2;

pub const TOWN_CENTER_PALETTE: [&str; 6] = [
    "#ff6b6b", "#4ecdc4", "#ffd93d", "#a8e6cf", "#ff8b94", "#b4a7d6",
];

// Serialization
pub const LAYOUT_FORMAT_VERSION: &str = "1.0";
pub const EXPORT_FILE_PREFIX: &str = "kingshot-territory";
pub const SHARE_QUERY_KEY: &str = "layout";
