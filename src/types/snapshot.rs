use serde::Serialize;

use super::grid_space::{CellRect, GridSpace};
use super::item_kind::ItemKind;
use super::placed_item::{ItemId, PlacedItem};
use super::view::ViewTransform;

/// Undo/redo unit: a deep copy of the items, the town center counter and the grid size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySnapshot {
    pub items: Vec<PlacedItem>,
    pub town_center_count: u32,
    pub grid: GridSpace,
}

/// Legality marker shown on validated buildings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Legality {
    Valid,
    Invalid,
    NotApplicable,
}

/// What the page needs to draw one item
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderItem {
    pub id: ItemId,
    pub kind: ItemKind,
    pub rect: CellRect,
    pub fill: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    pub legality: Legality,
    pub selected: bool,
    pub conflicting: bool,
}

/// Full redraw payload handed to the page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerSnapshot {
    pub grid_width: i32,
    pub grid_height: i32,
    pub view: ViewTransform,
    pub items: Vec<RenderItem>,
    pub can_undo: bool,
    pub can_redo: bool,
}
