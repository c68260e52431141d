use crate::dependency::{HistoryStack, ItemStore};
use crate::types::{
    CoverageMap, GridSpace, HistorySnapshot, ItemId, PlacedItem, PlannerConfig, PlannerMetrics,
    ScreenPoint, Tool, ViewTransform,
};

/// An item being moved with the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub item: ItemId,
    /// Pointer cell minus the item's top-left cell when the drag began
    pub offset_x: i32,
    pub offset_y: i32,
    pub start_x: i32,
    pub start_y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanState {
    pub start: ScreenPoint,
    pub origin_x: f64,
    pub origin_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchState {
    pub last_distance: f64,
}

/// All mutable state of one editor session
pub struct PlannerData {
    pub(crate) config: PlannerConfig,
    pub(crate) grid: GridSpace,
    pub(crate) items: ItemStore,
    pub(crate) town_center_count: u32,
    next_item_id: u64,
    pub(crate) tool: Tool,
    pub(crate) selected: Option<ItemId>,
    pub(crate) drag: Option<DragState>,
    pub(crate) pan: Option<PanState>,
    pub(crate) pinch: Option<PinchState>,
    pub(crate) view: ViewTransform,
    pub(crate) viewport: (f64, f64),
    pub(crate) history: HistoryStack,
    pub(crate) coverage: CoverageMap,
    pub(crate) metrics: PlannerMetrics,
}

impl PlannerData {
    pub fn new(config: PlannerConfig) -> Self {
        let config = config.normalized();
        let grid = GridSpace::new(config.grid_width, config.grid_height);
        Self {
            grid,
            items: ItemStore::new(),
            town_center_count: 0,
            next_item_id: 1,
            tool: Tool::default(),
            selected: None,
            drag: None,
            pan: None,
            pinch: None,
            view: ViewTransform::new(config.cell_size),
            viewport: (0.0, 0.0),
            history: HistoryStack::new(config.history_limit),
            coverage: CoverageMap::new(grid),
            metrics: PlannerMetrics::default(),
            config,
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn grid(&self) -> GridSpace {
        self.grid
    }

    pub fn items(&self) -> &[PlacedItem] {
        self.items.as_slice()
    }

    pub fn item(&self, id: ItemId) -> Option<&PlacedItem> {
        self.items.get(id)
    }

    pub fn town_center_count(&self) -> u32 {
        self.town_center_count
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_panning(&self) -> bool {
        self.pan.is_some()
    }

    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn coverage(&self) -> &CoverageMap {
        &self.coverage
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn metrics(&self) -> &PlannerMetrics {
        &self.metrics
    }

    /// Fresh id. The counter only moves forward, so ids are never handed out twice.
    pub(crate) fn allocate_id(&mut self) -> ItemId {
        let id = ItemId(self.next_item_id);
        self.next_item_id = self.next_item_id.wrapping_add(1);
        id
    }

    pub(crate) fn capture(&self) -> HistorySnapshot {
        HistorySnapshot {
            items: self.items.as_slice().to_vec(),
            town_center_count: self.town_center_count,
            grid: self.grid,
        }
    }

    pub(crate) fn restore(&mut self, snapshot: &HistorySnapshot) {
        self.items.restore(&snapshot.items);
        self.town_center_count = snapshot.town_center_count;
        self.grid = snapshot.grid;
        self.clear_interaction();
    }

    /// Drop selection and any gesture in progress
    pub(crate) fn clear_interaction(&mut self) {
        self.selected = None;
        self.drag = None;
    }
}
