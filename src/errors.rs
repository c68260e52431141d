//! Errors surfaced by the planner core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    /// A resize or imported layout asked for a grid outside the configured bounds.
    #[error(
        "Grid size must be between {min}-{max_width} for width and {min}-{max_height} for height (got {width}x{height})"
    )]
    InvalidDimensions {
        width: u32,
        height: u32,
        min: u32,
        max_width: u32,
        max_height: u32,
    },

    /// The text was neither layout JSON, base64 layout JSON, nor a compressed share code.
    #[error("Invalid layout code. Please check the format and try again.")]
    MalformedLayout,

    /// An item named a building type that does not exist.
    #[error("unknown building type {0:?}")]
    UnknownTypeCode(String),

    /// The page selected a tool that does not exist.
    #[error("unknown tool {0:?}")]
    UnknownTool(String),

    #[error("layout json error: {0}")]
    Json(#[from] serde_json::Error),
}
