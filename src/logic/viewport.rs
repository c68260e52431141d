use crate::constants::BOUNDS_PADDING;
use crate::types::{CellRect, GridSpace, ItemKind, PlacedItem, ScreenPoint, ViewTransform};

pub fn pan_by(view: &mut ViewTransform, dx: f64, dy: f64) {
    view.origin_x += dx;
    view.origin_y += dy;
}

/// Rescale keeping the world point under `focal` fixed on screen
pub fn zoom_at(view: &mut ViewTransform, focal: ScreenPoint, scale: f64, min: f64, max: f64) {
    let next = scale.clamp(min, max);
    let ratio = next / view.scale;
    view.origin_x = focal.x - (focal.x - view.origin_x) * ratio;
    view.origin_y = focal.y - (focal.y - view.origin_y) * ratio;
    view.scale = next;
}

/// Pinch step: the scale follows the change in finger distance, anchored at the origin
pub fn apply_pinch(
    view: &mut ViewTransform,
    last_distance: f64,
    distance: f64,
    sensitivity: f64,
    min: f64,
    max: f64,
) {
    let delta = distance - last_distance;
    view.scale = (view.scale + delta * sensitivity).clamp(min, max);
}

/// Scroll so the first alliance HQ, or else the grid centre, sits mid-viewport.
/// Scrolling never goes past the top-left edge of the grid.
pub fn center_view(
    view: &mut ViewTransform,
    viewport: (f64, f64),
    grid: GridSpace,
    items: &[PlacedItem],
) {
    let (cx, cy) = items
        .iter()
        .find(|item| item.kind == ItemKind::AllianceHq)
        .map(|hq| {
            let rect = hq.rect();
            (
                rect.x as f64 + rect.width as f64 / 2.0,
                rect.y as f64 + rect.height as f64 / 2.0,
            )
        })
        .unwrap_or((grid.width as f64 / 2.0, grid.height as f64 / 2.0));

    let span = view.cell_pixels();
    let scroll_x = (cx * span - viewport.0 / 2.0).max(0.0);
    let scroll_y = (cy * span - viewport.1 / 2.0).max(0.0);
    view.origin_x = -scroll_x;
    view.origin_y = -scroll_y;
}

/// Bounding box of all items padded on every side and clipped to the grid
pub fn building_bounds(grid: GridSpace, items: &[PlacedItem]) -> Option<CellRect> {
    let first = items.first()?.rect();
    let (mut left, mut top, mut right, mut bottom) =
        (first.x, first.y, first.right(), first.bottom());
    for rect in items.iter().skip(1).map(PlacedItem::rect) {
        left = left.min(rect.x);
        top = top.min(rect.y);
        right = right.max(rect.right());
        bottom = bottom.max(rect.bottom());
    }
    CellRect::new(left, top, right - left, bottom - top)
        .expand(BOUNDS_PADDING)
        .intersection(&grid.as_rect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GridCell, ItemId};

    #[test]
    fn zoom_keeps_focal_cell_fixed() {
        let mut view = ViewTransform::new(20.0);
        let focal = ScreenPoint::new(210.0, 130.0);
        let before = view.screen_to_grid(focal);
        zoom_at(&mut view, focal, 2.0, 0.5, 3.0);
        assert_eq!(view.scale, 2.0);
        assert_eq!(view.screen_to_grid(focal), before);
        assert_eq!(view.origin_x, -210.0);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut view = ViewTransform::new(20.0);
        zoom_at(&mut view, ScreenPoint::new(0.0, 0.0), 10.0, 0.5, 3.0);
        assert_eq!(view.scale, 3.0);
        zoom_at(&mut view, ScreenPoint::new(0.0, 0.0), 0.1, 0.5, 3.0);
        assert_eq!(view.scale, 0.5);
    }

    #[test]
    fn pinch_follows_distance_change() {
        let mut view = ViewTransform::new(20.0);
        apply_pinch(&mut view, 100.0, 150.0, 0.01, 0.5, 3.0);
        assert!((view.scale - 1.5).abs() < 1e-9);
        apply_pinch(&mut view, 150.0, 0.0, 0.01, 0.5, 3.0);
        assert_eq!(view.scale, 0.5);
    }

    #[test]
    fn pan_shifts_mapping() {
        let mut view = ViewTransform::new(20.0);
        pan_by(&mut view, -40.0, 20.0);
        assert_eq!(
            view.screen_to_grid(ScreenPoint::new(0.0, 20.0)),
            GridCell::new(2, 0)
        );
    }

    #[test]
    fn centers_on_alliance_hq() {
        let mut view = ViewTransform::new(20.0);
        let hq = PlacedItem::new(ItemId(1), ItemKind::AllianceHq, 40, 30);
        center_view(&mut view, (400.0, 300.0), GridSpace::new(80, 80), &[hq]);
        // HQ centre is cell (41.5, 31.5) -> pixel (830, 630).
        assert_eq!(view.origin_x, -630.0);
        assert_eq!(view.origin_y, -480.0);
    }

    #[test]
    fn centers_on_grid_and_never_scrolls_negative() {
        let mut view = ViewTransform::new(20.0);
        center_view(&mut view, (400.0, 2000.0), GridSpace::new(80, 80), &[]);
        assert_eq!(view.origin_x, -600.0);
        assert_eq!(view.origin_y, 0.0);
    }

    #[test]
    fn bounds_are_padded_and_clipped() {
        let grid = GridSpace::new(80, 80);
        assert_eq!(building_bounds(grid, &[]), None);
        let items = [
            PlacedItem::new(ItemId(1), ItemKind::Banner, 1, 10),
            PlacedItem::new(ItemId(2), ItemKind::Pitfall, 20, 30),
        ];
        assert_eq!(
            building_bounds(grid, &items),
            Some(CellRect::new(0, 8, 25, 27))
        );
    }
}
