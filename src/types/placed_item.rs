use serde::Serialize;

use super::grid_space::CellRect;
use super::item_kind::{Footprint, ItemKind};
use crate::constants::TOWN_CENTER_PALETTE;

/// Session-unique identifier of a placed item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

/// Sequence label carried by town centers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TownCenterTag {
    pub number: u32,
    pub color: &'static str,
}

impl TownCenterTag {
    /// Label for the `number`-th town center (1-based)
    pub fn for_number(number: u32) -> Self {
        let slot = (number.max(1) - 1) as usize % TOWN_CENTER_PALETTE.len();
        Self {
            number,
            color: TOWN_CENTER_PALETTE[slot],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedItem {
    pub id: ItemId,
    pub kind: ItemKind,
    pub x: i32,
    pub y: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub town_center: Option<TownCenterTag>,
}

impl PlacedItem {
    pub fn new(id: ItemId, kind: ItemKind, x: i32, y: i32) -> Self {
        Self {
            id,
            kind,
            x,
            y,
            town_center: None,
        }
    }

    pub fn footprint(&self) -> Footprint {
        self.kind.footprint()
    }

    pub fn rect(&self) -> CellRect {
        CellRect::at(self.x, self.y, self.footprint())
    }

    /// Same item moved to (`x`, `y`)
    pub fn moved_to(&self, x: i32, y: i32) -> CellRect {
        CellRect::at(x, y, self.footprint())
    }

    pub fn overlaps(&self, other: &PlacedItem) -> bool {
        self.rect().intersects(&other.rect())
    }

    pub fn number(&self) -> Option<u32> {
        self.town_center.map(|tag| tag.number)
    }

    pub fn fill(&self) -> &'static str {
        match self.town_center {
            Some(tag) => tag.color,
            None => self.kind.fill(),
        }
    }

    /// Text drawn on the item, if any
    pub fn label(&self) -> Option<String> {
        match self.kind {
            ItemKind::Pitfall => Some("Pitfall".to_string()),
            ItemKind::TownCenter => Some(format!("TC#{}", self.number().unwrap_or(0))),
            ItemKind::Banner => Some("B".to_string()),
            ItemKind::Mill => Some("AM".to_string()),
            ItemKind::AllianceHq => Some("HQ".to_string()),
            ItemKind::BlockedPath1 | ItemKind::BlockedPath2 => None,
        }
    }
}
