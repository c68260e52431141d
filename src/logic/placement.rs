use crate::dependency::ItemStore;
use crate::types::{CellRect, GridSpace, ItemId, ItemKind, PlacedItem, TownCenterTag};

/// Result of settling a dragged item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Already in bounds and clear of other items
    InPlace,
    /// Pulled back inside the grid, no conflict afterwards
    Clamped,
    /// Moved to the nearest free ring position
    Relocated { x: i32, y: i32 },
    /// No free position found; left overlapping at the clamped spot
    Unresolved,
}

pub fn overlaps_any(items: &[PlacedItem], rect: &CellRect, ignore: Option<ItemId>) -> bool {
    items
        .iter()
        .filter(|other| Some(other.id) != ignore)
        .any(|other| other.rect().intersects(rect))
}

/// In bounds and not overlapping any existing item
pub fn can_place(grid: &GridSpace, items: &[PlacedItem], kind: ItemKind, x: i32, y: i32) -> bool {
    if !grid.contains_cell(x, y) {
        return false;
    }
    let rect = CellRect::at(x, y, kind.footprint());
    grid.contains_rect(&rect) && !overlaps_any(items, &rect, None)
}

/// Nearest position that keeps the item's footprint inside the grid
pub fn clamp_position(grid: &GridSpace, kind: ItemKind, x: i32, y: i32) -> (i32, i32) {
    let footprint = kind.footprint();
    let max_x = (grid.width - footprint.width).max(0);
    let max_y = (grid.height - footprint.height).max(0);
    (x.min(max_x).max(0), y.min(max_y).max(0))
}

/// Search square rings of growing radius around the item for a free spot.
///
/// Within a ring `dx` runs outer and `dy` inner, both from `-r` to `r`; the first
/// in-bounds, overlap-free candidate wins.
pub fn find_valid_position(
    grid: &GridSpace,
    items: &[PlacedItem],
    item: &PlacedItem,
) -> Option<(i32, i32)> {
    let max_radius = grid.width.max(grid.height);
    for radius in 1..=max_radius {
        for dx in -radius..=radius {
            for dy in -radius..=radius {
                if dx.abs() != radius && dy.abs() != radius {
                    continue;
                }
                let candidate = item.moved_to(item.x + dx, item.y + dy);
                if grid.contains_rect(&candidate) && !overlaps_any(items, &candidate, Some(item.id))
                {
                    return Some((candidate.x, candidate.y));
                }
            }
        }
    }
    None
}

/// Clamp a dropped item into the grid and move it off any item it overlaps
pub fn resolve_drop(grid: &GridSpace, items: &mut ItemStore, id: ItemId) -> Option<DropOutcome> {
    let item = items.get(id)?.clone();
    let (x, y) = clamp_position(grid, item.kind, item.x, item.y);
    let clamped = PlacedItem { x, y, ..item.clone() };

    let outcome = if !overlaps_any(items.as_slice(), &clamped.rect(), Some(id)) {
        if (x, y) == (item.x, item.y) {
            DropOutcome::InPlace
        } else {
            DropOutcome::Clamped
        }
    } else {
        match find_valid_position(grid, items.as_slice(), &clamped) {
            Some((nx, ny)) => DropOutcome::Relocated { x: nx, y: ny },
            None => DropOutcome::Unresolved,
        }
    };

    let (final_x, final_y) = match outcome {
        DropOutcome::Relocated { x: nx, y: ny } => (nx, ny),
        _ => (x, y),
    };
    if let Some(live) = items.get_mut(id) {
        live.x = final_x;
        live.y = final_y;
    }
    Some(outcome)
}

/// Number town centers 1..N in placement order; returns N
pub fn renumber_town_centers(items: &mut ItemStore) -> u32 {
    let mut count = 0;
    for town_center in items.iter_kind_mut(ItemKind::TownCenter) {
        count += 1;
        town_center.town_center = Some(TownCenterTag::for_number(count));
    }
    count
}

/// Remove items that no longer fit; returns how many were dropped
pub fn evict_out_of_bounds(items: &mut ItemStore, grid: &GridSpace) -> usize {
    let before = items.len();
    items.retain(|item| grid.contains_rect(&item.rect()));
    before - items.len()
}
