//! Territory layout planner compiled to WebAssembly.
//!
//! The page owns the canvas and DOM events; this crate owns the grid, the placement
//! rules, territory coverage, undo history and the layout codes.

pub mod codec;
pub mod constants;
pub mod data;
pub mod dependency;
pub mod errors;
pub mod logic;
pub mod service;
pub mod types;

pub use codec::{Layout, LayoutItem};
pub use errors::PlannerError;
pub use service::TerritoryPlanner;
pub use types::{Coverage, ItemKind, PlannerConfig, PlannerSnapshot};
