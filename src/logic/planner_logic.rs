use super::placement::{
    can_place, evict_out_of_bounds, overlaps_any, renumber_town_centers, resolve_drop,
    DropOutcome,
};
use super::territory::compute_coverage;
use super::validation::{control_zones, legality_in};
use super::viewport;
use crate::codec::{self, compact, verbose, Layout};
use crate::data::{DragState, PlannerData};
use crate::dependency::{console, now_iso8601, performance_now, ItemStore};
use crate::errors::PlannerError;
use crate::types::{
    GridCell, GridSpace, ItemId, ItemKind, PlacedItem, PlannerSnapshot, RenderItem, ScreenPoint,
    TownCenterTag,
};

/// What an import did with the payload's items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
}

/// Editing operations over a [`PlannerData`].
///
/// Every committed mutation pushes a history snapshot and recomputes coverage before
/// returning, so the caller can redraw straight away.
pub struct PlannerLogic;

impl Default for PlannerLogic {
    fn default() -> Self {
        Self
    }
}

impl PlannerLogic {
    /// Seed history with the starting state
    pub fn start_session(&mut self, data: &mut PlannerData) {
        data.history.clear();
        self.commit(data);
        self.refresh(data);
    }

    pub fn refresh(&mut self, data: &mut PlannerData) {
        let start = performance_now();
        data.coverage = compute_coverage(data.grid, data.items.as_slice());
        let end = performance_now();
        data.metrics.update_recompute(end - start);
    }

    fn commit(&mut self, data: &mut PlannerData) {
        let snapshot = data.capture();
        data.history.commit(snapshot);
    }

    fn mutated(&mut self, data: &mut PlannerData) {
        self.commit(data);
        self.refresh(data);
    }

    /// Place a building; `None` when it would leave the grid or overlap
    pub fn place(
        &mut self,
        data: &mut PlannerData,
        kind: ItemKind,
        x: i32,
        y: i32,
    ) -> Option<ItemId> {
        if !can_place(&data.grid, data.items.as_slice(), kind, x, y) {
            return None;
        }
        let id = data.allocate_id();
        let mut item = PlacedItem::new(id, kind, x, y);
        if kind == ItemKind::TownCenter {
            data.town_center_count += 1;
            item.town_center = Some(TownCenterTag::for_number(data.town_center_count));
        }
        data.items.push(item);
        self.mutated(data);
        Some(id)
    }

    pub fn delete(&mut self, data: &mut PlannerData, id: ItemId) -> bool {
        let Some(removed) = data.items.remove(id) else {
            return false;
        };
        if removed.kind == ItemKind::TownCenter {
            data.town_center_count = renumber_town_centers(&mut data.items);
        }
        if data.selected == Some(id) {
            data.selected = None;
        }
        if data.drag.map(|drag| drag.item) == Some(id) {
            data.drag = None;
        }
        self.mutated(data);
        true
    }

    pub fn delete_at(&mut self, data: &mut PlannerData, cell: GridCell) -> bool {
        match data.items.item_at(cell.x, cell.y).map(|item| item.id) {
            Some(id) => self.delete(data, id),
            None => false,
        }
    }

    fn check_dimensions(data: &PlannerData, width: u32, height: u32) -> Result<(), PlannerError> {
        let config = &data.config;
        if config.width_in_range(width) && config.height_in_range(height) {
            Ok(())
        } else {
            Err(PlannerError::InvalidDimensions {
                width,
                height,
                min: config.min_dimension,
                max_width: config.max_width,
                max_height: config.max_height,
            })
        }
    }

    /// Change the grid size, dropping items that no longer fit. Returns how many were dropped.
    pub fn resize(
        &mut self,
        data: &mut PlannerData,
        width: u32,
        height: u32,
    ) -> Result<usize, PlannerError> {
        if let Err(err) = Self::check_dimensions(data, width, height) {
            console::warn(format!("resize rejected: {}", err));
            return Err(err);
        }
        let grid = GridSpace::new(width, height);
        if grid == data.grid {
            return Ok(0);
        }

        data.grid = grid;
        let evicted = evict_out_of_bounds(&mut data.items, &grid);
        data.town_center_count = renumber_town_centers(&mut data.items);
        data.clear_interaction();
        self.mutated(data);
        if evicted > 0 {
            console::info(format!(
                "resized to {}x{}, removed {} item(s) outside the grid",
                width, height, evicted
            ));
        }
        Ok(evicted)
    }

    pub fn clear(&mut self, data: &mut PlannerData) {
        data.items.clear();
        data.town_center_count = 0;
        data.clear_interaction();
        self.mutated(data);
    }

    pub fn undo(&mut self, data: &mut PlannerData) -> bool {
        let Some(snapshot) = data.history.undo().cloned() else {
            return false;
        };
        data.restore(&snapshot);
        self.refresh(data);
        true
    }

    pub fn redo(&mut self, data: &mut PlannerData) -> bool {
        let Some(snapshot) = data.history.redo().cloned() else {
            return false;
        };
        data.restore(&snapshot);
        self.refresh(data);
        true
    }

    /// Pick up the topmost item under `cell`, selecting it
    pub fn begin_drag(&mut self, data: &mut PlannerData, cell: GridCell) -> Option<ItemId> {
        let Some(item) = data.items.item_at(cell.x, cell.y) else {
            data.selected = None;
            return None;
        };
        let id = item.id;
        data.drag = Some(DragState {
            item: id,
            offset_x: cell.x - item.x,
            offset_y: cell.y - item.y,
            start_x: item.x,
            start_y: item.y,
        });
        data.selected = Some(id);
        Some(id)
    }

    /// Follow the pointer without any bounds or overlap checks
    pub fn drag_to(&mut self, data: &mut PlannerData, cell: GridCell) {
        let Some(drag) = data.drag else {
            return;
        };
        if let Some(item) = data.items.get_mut(drag.item) {
            item.x = cell.x.saturating_sub(drag.offset_x);
            item.y = cell.y.saturating_sub(drag.offset_y);
        }
    }

    /// Settle the dragged item. History only records the drag if the item ended up somewhere new.
    pub fn end_drag(&mut self, data: &mut PlannerData) -> Option<DropOutcome> {
        let drag = data.drag.take()?;
        let outcome = resolve_drop(&data.grid, &mut data.items, drag.item)?;
        if outcome == DropOutcome::Unresolved {
            console::warn(format!(
                "no free position for item {} on this grid, left overlapping",
                drag.item.0
            ));
        }

        let moved = data
            .items
            .get(drag.item)
            .map(|item| (item.x, item.y) != (drag.start_x, drag.start_y))
            .unwrap_or(false);
        if moved {
            self.mutated(data);
        } else {
            self.refresh(data);
        }
        Some(outcome)
    }

    pub fn layout(&self, data: &PlannerData) -> Layout {
        Layout::from_items(data.grid, data.items.as_slice())
    }

    pub fn export_verbose(&self, data: &PlannerData) -> Result<String, PlannerError> {
        verbose::encode(&self.layout(data), &now_iso8601())
    }

    pub fn export_compact(&self, data: &PlannerData) -> Result<String, PlannerError> {
        compact::encode_text(&self.layout(data))
    }

    pub fn share_code(&self, data: &PlannerData) -> Result<String, PlannerError> {
        compact::encode_share(&self.layout(data))
    }

    /// Replace the grid with a decoded layout.
    ///
    /// Nothing changes unless the text decodes and its grid size is allowed. Items that
    /// fall outside the grid or overlap an earlier item are skipped, so a layout exported
    /// while an item was left overlapping after an unresolved drop comes back without it.
    pub fn import_layout(
        &mut self,
        data: &mut PlannerData,
        text: &str,
    ) -> Result<ImportReport, PlannerError> {
        let layout = codec::decode(text).map_err(|err| {
            console::error(format!("layout import failed: {}", err));
            err
        })?;
        let grid = match layout.dimensions {
            Some((width, height)) => {
                Self::check_dimensions(data, width, height).map_err(|err| {
                    console::error(format!("layout import failed: {}", err));
                    err
                })?;
                GridSpace::new(width, height)
            }
            None => data.grid,
        };

        let mut accepted = ItemStore::new();
        let mut skipped = 0;
        for entry in &layout.items {
            if !can_place(&grid, accepted.as_slice(), entry.kind, entry.x, entry.y) {
                console::warn(format!(
                    "skipping {} at ({}, {}): outside the grid or overlapping",
                    entry.kind.name(),
                    entry.x,
                    entry.y
                ));
                skipped += 1;
                continue;
            }
            let mut item = PlacedItem::new(data.allocate_id(), entry.kind, entry.x, entry.y);
            if entry.kind == ItemKind::TownCenter {
                item.town_center = entry.number.map(TownCenterTag::for_number);
            }
            accepted.push(item);
        }

        let town_center_count = if has_sequential_numbers(&accepted) {
            accepted.iter_kind(ItemKind::TownCenter).count() as u32
        } else {
            renumber_town_centers(&mut accepted)
        };

        let report = ImportReport {
            imported: accepted.len(),
            skipped,
        };
        data.grid = grid;
        data.items = accepted;
        data.town_center_count = town_center_count;
        data.clear_interaction();
        self.mutated(data);
        viewport::center_view(&mut data.view, data.viewport, data.grid, data.items.as_slice());

        console::info(format!(
            "imported {} item(s) on a {}x{} grid",
            report.imported, grid.width, grid.height
        ));
        Ok(report)
    }

    pub fn pan_by(&mut self, data: &mut PlannerData, dx: f64, dy: f64) {
        viewport::pan_by(&mut data.view, dx, dy);
    }

    pub fn zoom_at(&mut self, data: &mut PlannerData, focal: ScreenPoint, scale: f64) {
        let (min, max) = (data.config.min_scale, data.config.max_scale);
        viewport::zoom_at(&mut data.view, focal, scale, min, max);
    }

    pub fn center_view(&mut self, data: &mut PlannerData, width: f64, height: f64) {
        data.viewport = (width, height);
        viewport::center_view(&mut data.view, data.viewport, data.grid, data.items.as_slice());
    }

    pub fn build_snapshot(&mut self, data: &mut PlannerData) -> PlannerSnapshot {
        let start = performance_now();
        let items = data.items.as_slice();
        let zones = control_zones(items);
        let render_items = items
            .iter()
            .map(|item| RenderItem {
                id: item.id,
                kind: item.kind,
                rect: item.rect(),
                fill: item.fill(),
                label: item.label(),
                number: item.number(),
                legality: legality_in(item, &zones),
                selected: data.selected == Some(item.id),
                conflicting: overlaps_any(items, &item.rect(), Some(item.id)),
            })
            .collect();

        let snapshot = PlannerSnapshot {
            grid_width: data.grid.width,
            grid_height: data.grid.height,
            view: data.view,
            items: render_items,
            can_undo: data.history.can_undo(),
            can_redo: data.history.can_redo(),
        };
        let end = performance_now();
        data.metrics.update_snapshot(end - start);
        snapshot
    }
}

/// Town center numbers read 1..N in some order, with none missing
fn has_sequential_numbers(items: &ItemStore) -> bool {
    let mut numbers: Vec<u32> = Vec::new();
    for town_center in items.iter_kind(ItemKind::TownCenter) {
        match town_center.number() {
            Some(number) => numbers.push(number),
            None => return false,
        }
    }
    numbers.sort_unstable();
    numbers.iter().copied().eq(1..=numbers.len() as u32)
}
