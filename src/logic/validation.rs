use super::territory::source_rings;
use crate::types::{CellRect, Legality, PlacedItem};

/// Inner ring rectangles of every source, unclipped
pub fn control_zones(items: &[PlacedItem]) -> Vec<CellRect> {
    items
        .iter()
        .filter_map(source_rings)
        .map(|(control, _)| control)
        .collect()
}

/// Every footprint cell lies inside at least one source's inner ring.
///
/// Tested against the source rectangles directly, not the cached coverage map.
pub fn is_fully_controlled(item: &PlacedItem, items: &[PlacedItem]) -> bool {
    covered_by(item, &control_zones(items))
}

fn covered_by(item: &PlacedItem, zones: &[CellRect]) -> bool {
    item.rect()
        .cells()
        .all(|(x, y)| zones.iter().any(|zone| zone.contains(x, y)))
}

pub fn legality(item: &PlacedItem, items: &[PlacedItem]) -> Legality {
    legality_in(item, &control_zones(items))
}

/// Same as [`legality`] with the zones computed once by the caller
pub fn legality_in(item: &PlacedItem, zones: &[CellRect]) -> Legality {
    if !item.kind.is_validated() {
        Legality::NotApplicable
    } else if covered_by(item, zones) {
        Legality::Valid
    } else {
        Legality::Invalid
    }
}
