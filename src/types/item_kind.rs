use serde::{Deserialize, Serialize};

use crate::constants::{
    ALLIANCE_HQ_BUILDABLE_RADIUS, ALLIANCE_HQ_CONTROL_RADIUS, BANNER_BUILDABLE_RADIUS,
    BANNER_CONTROL_RADIUS,
};

/// Building kinds that can be placed on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    #[serde(rename = "pitfall")]
    Pitfall,
    #[serde(rename = "townCenter")]
    TownCenter,
    #[serde(rename = "banner")]
    Banner,
    #[serde(rename = "mill")]
    Mill,
    #[serde(rename = "allianceHQ")]
    AllianceHq,
    #[serde(rename = "blockedPath1")]
    BlockedPath1,
    #[serde(rename = "blockedPath2")]
    BlockedPath2,
}

/// Width and height of an item in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Footprint {
    pub width: i32,
    pub height: i32,
}

impl Footprint {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Inner (controlled) and outer (buildable) ring extents of a territory source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerritoryRings {
    pub control: i32,
    pub buildable: i32,
}

impl ItemKind {
    pub const ALL: [ItemKind; 7] = [
        ItemKind::Pitfall,
        ItemKind::TownCenter,
        ItemKind::Banner,
        ItemKind::Mill,
        ItemKind::AllianceHq,
        ItemKind::BlockedPath1,
        ItemKind::BlockedPath2,
    ];

    pub fn footprint(self) -> Footprint {
        match self {
            ItemKind::Pitfall => Footprint::new(3, 3),
            ItemKind::TownCenter => Footprint::new(2, 2),
            ItemKind::Banner => Footprint::new(1, 1),
            ItemKind::Mill => Footprint::new(2, 2),
            ItemKind::AllianceHq => Footprint::new(3, 3),
            ItemKind::BlockedPath1 => Footprint::new(1, 1),
            ItemKind::BlockedPath2 => Footprint::new(2, 2),
        }
    }

    /// Name used by the page and the verbose layout format
    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Pitfall => "pitfall",
            ItemKind::TownCenter => "townCenter",
            ItemKind::Banner => "banner",
            ItemKind::Mill => "mill",
            ItemKind::AllianceHq => "allianceHQ",
            ItemKind::BlockedPath1 => "blockedPath1",
            ItemKind::BlockedPath2 => "blockedPath2",
        }
    }

    pub fn from_name(name: &str) -> Option<ItemKind> {
        ItemKind::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Single letter used by the compact layout format
    pub fn code(self) -> char {
        match self {
            ItemKind::Pitfall => 'P',
            ItemKind::TownCenter => 'T',
            ItemKind::Banner => 'B',
            ItemKind::Mill => 'M',
            ItemKind::AllianceHq => 'H',
            ItemKind::BlockedPath1 => 'X',
            ItemKind::BlockedPath2 => 'Y',
        }
    }

    pub fn from_code(code: &str) -> Option<ItemKind> {
        let mut chars = code.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => ItemKind::ALL.iter().copied().find(|kind| kind.code() == c),
            _ => None,
        }
    }

    /// Whether the item shows a legality marker. Banners and blocked paths never do.
    pub fn is_validated(self) -> bool {
        matches!(
            self,
            ItemKind::Pitfall | ItemKind::TownCenter | ItemKind::Mill | ItemKind::AllianceHq
        )
    }

    /// Ring extents for kinds that project territory
    pub fn territory(self) -> Option<TerritoryRings> {
        match self {
            ItemKind::Banner => Some(TerritoryRings {
                control: BANNER_CONTROL_RADIUS,
                buildable: BANNER_BUILDABLE_RADIUS,
            }),
            ItemKind::AllianceHq => Some(TerritoryRings {
                control: ALLIANCE_HQ_CONTROL_RADIUS,
                buildable: ALLIANCE_HQ_BUILDABLE_RADIUS,
            }),
            _ => None,
        }
    }

    /// Fill colour for kinds with a fixed colour. Town centers take theirs from the palette.
    pub fn fill(self) -> &'static str {
        match self {
            ItemKind::Pitfall => "#8b4513",
            ItemKind::TownCenter => "#ff6b6b",
            ItemKind::Banner => "#ffd93d",
            ItemKind::Mill => "#4ecdc4",
            ItemKind::AllianceHq => "#9b59b6",
            ItemKind::BlockedPath1 => "#95a5a6",
            ItemKind::BlockedPath2 => "#6c757d",
        }
    }
}

/// Footprint lookup by page name. Unknown names get a single cell.
pub fn footprint_of_name(name: &str) -> Footprint {
    ItemKind::from_name(name)
        .map(ItemKind::footprint)
        .unwrap_or(Footprint::new(1, 1))
}
