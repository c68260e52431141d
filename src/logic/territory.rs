use crate::types::{CellRect, Coverage, CoverageMap, GridSpace, PlacedItem, TerritoryRings};

/// Inner and outer ring rectangles of a territory source, unclipped
pub fn source_rings(item: &PlacedItem) -> Option<(CellRect, CellRect)> {
    let TerritoryRings { control, buildable } = item.kind.territory()?;
    let footprint = item.rect();
    Some((footprint.expand(control), footprint.expand(buildable)))
}

/// Classify every cell from scratch.
///
/// Each source first marks its outer ring buildable (never downgrading a controlled
/// cell) and then its inner ring controlled, so controlled wins wherever rings meet.
pub fn compute_coverage(grid: GridSpace, items: &[PlacedItem]) -> CoverageMap {
    let mut map = CoverageMap::new(grid);
    let bounds = grid.as_rect();

    for (control, buildable) in items.iter().filter_map(source_rings) {
        if let Some(outer) = buildable.intersection(&bounds) {
            for (x, y) in outer.cells() {
                map.mark_buildable(x, y);
            }
        }
        if let Some(inner) = control.intersection(&bounds) {
            for (x, y) in inner.cells() {
                map.set(x, y, Coverage::Controlled);
            }
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ItemId, ItemKind};

    fn banner(id: u64, x: i32, y: i32) -> PlacedItem {
        PlacedItem::new(ItemId(id), ItemKind::Banner, x, y)
    }

    #[test]
    fn single_banner_rings() {
        let grid = GridSpace::new(80, 80);
        let map = compute_coverage(grid, &[banner(1, 10, 10)]);

        // 7x7 controlled block centred on the banner, 15x15 buildable block around it.
        for y in 3..=17 {
            for x in 3..=17 {
                let expected = if (7..=13).contains(&x) && (7..=13).contains(&y) {
                    Coverage::Controlled
                } else {
                    Coverage::Buildable
                };
                assert_eq!(map.get(x, y), expected, "cell ({x},{y})");
            }
        }
        assert_eq!(map.get(2, 2), Coverage::Uncovered);
        assert_eq!(map.get(18, 10), Coverage::Uncovered);
        assert_eq!(map.count(Coverage::Controlled), 49);
        assert_eq!(map.count(Coverage::Buildable), 15 * 15 - 49);
    }

    #[test]
    fn controlled_wins_over_later_buildable() {
        let grid = GridSpace::new(80, 80);
        // The second banner's outer ring covers the first banner's inner ring.
        let map = compute_coverage(grid, &[banner(1, 10, 10), banner(2, 16, 10)]);
        assert_eq!(map.get(12, 10), Coverage::Controlled);
        assert_eq!(map.get(13, 10), Coverage::Controlled);
        assert_eq!(map.get(19, 10), Coverage::Controlled);
        assert_eq!(map.get(22, 10), Coverage::Buildable);
    }

    #[test]
    fn alliance_hq_rings_measure_from_footprint() {
        let grid = GridSpace::new(80, 80);
        let hq = PlacedItem::new(ItemId(1), ItemKind::AllianceHq, 20, 20);
        let map = compute_coverage(grid, &[hq]);
        // Footprint 20..=22, inner ring 14..=28, outer ring 10..=32.
        assert_eq!(map.get(14, 28), Coverage::Controlled);
        assert_eq!(map.get(13, 20), Coverage::Buildable);
        assert_eq!(map.get(32, 32), Coverage::Buildable);
        assert_eq!(map.get(33, 20), Coverage::Uncovered);
    }

    #[test]
    fn rings_clip_at_grid_edge() {
        let grid = GridSpace::new(10, 10);
        let map = compute_coverage(grid, &[banner(1, 0, 0)]);
        assert_eq!(map.get(0, 0), Coverage::Controlled);
        assert_eq!(map.get(3, 3), Coverage::Controlled);
        assert_eq!(map.get(7, 7), Coverage::Buildable);
        assert_eq!(map.count(Coverage::Controlled), 16);
        assert_eq!(map.count(Coverage::Buildable), 64 - 16);
    }

    #[test]
    fn non_sources_project_nothing() {
        let grid = GridSpace::new(20, 20);
        let items = [
            PlacedItem::new(ItemId(1), ItemKind::Pitfall, 5, 5),
            PlacedItem::new(ItemId(2), ItemKind::Mill, 10, 10),
        ];
        let map = compute_coverage(grid, &items);
        assert_eq!(map.count(Coverage::Uncovered), 400);
    }
}
