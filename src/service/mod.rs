use serde_wasm_bindgen;
use wasm_bindgen::prelude::*;

use crate::codec;
use crate::data::PlannerData;
use crate::dependency::{console, now_iso8601};
use crate::errors::PlannerError;
use crate::logic::{KeyInput, PlannerLogic};
use crate::types::{
    footprint_of_name, CellRect, GridCell, ItemKind, PlannerConfig, PlannerSnapshot, ScreenPoint,
    Tool,
};

/// One planner session as seen from the page.
///
/// Calls that can fail return `false` (or `None`) and leave a message for
/// [`TerritoryPlanner::last_error`].
#[wasm_bindgen]
pub struct TerritoryPlanner {
    data: PlannerData,
    logic: PlannerLogic,
    last_error: Option<String>,
}

#[wasm_bindgen]
impl TerritoryPlanner {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::from_config(PlannerConfig::default())
    }

    /// Build from a plain JS settings object; unreadable settings fall back to defaults
    #[wasm_bindgen]
    pub fn with_config(config: JsValue) -> Self {
        let config = match serde_wasm_bindgen::from_value::<PlannerConfig>(config) {
            Ok(config) => config,
            Err(err) => {
                console::warn(format!("ignoring planner config: {}", err));
                PlannerConfig::default()
            }
        };
        Self::from_config(config)
    }

    #[wasm_bindgen]
    pub fn set_tool(&mut self, name: &str) -> bool {
        match Tool::from_name(name) {
            Some(tool) => {
                self.logic.set_tool(&mut self.data, tool);
                true
            }
            None => self.fail(PlannerError::UnknownTool(name.to_string())),
        }
    }

    #[wasm_bindgen]
    pub fn get_tool(&self) -> String {
        self.data.tool().name().to_string()
    }

    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.logic.pointer_down(&mut self.data, ScreenPoint::new(x, y));
    }

    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.logic.pointer_move(&mut self.data, ScreenPoint::new(x, y));
    }

    #[wasm_bindgen]
    pub fn pointer_up(&mut self) {
        self.logic.pointer_up(&mut self.data);
    }

    #[wasm_bindgen]
    pub fn pinch_start(&mut self, distance: f64) {
        self.logic.pinch_start(&mut self.data, distance);
    }

    #[wasm_bindgen]
    pub fn pinch_move(&mut self, distance: f64) {
        self.logic.pinch_move(&mut self.data, distance);
    }

    #[wasm_bindgen]
    pub fn pinch_end(&mut self) {
        self.logic.pinch_end(&mut self.data);
    }

    /// Returns `true` when the page should suppress the browser's default action
    #[wasm_bindgen]
    pub fn handle_key(&mut self, key: &str, ctrl: bool, meta: bool, shift: bool) -> bool {
        let input = KeyInput {
            key: key.to_string(),
            ctrl,
            meta,
            shift,
        };
        self.logic.handle_key(&mut self.data, &input)
    }

    #[wasm_bindgen]
    pub fn can_place(&self, kind: &str, x: i32, y: i32) -> bool {
        ItemKind::from_name(kind)
            .map(|kind| crate::logic::can_place(&self.data.grid(), self.data.items(), kind, x, y))
            .unwrap_or(false)
    }

    /// Place at a cell. `false` for an unknown kind or a blocked spot.
    #[wasm_bindgen]
    pub fn place(&mut self, kind: &str, x: i32, y: i32) -> bool {
        match ItemKind::from_name(kind) {
            Some(kind) => self.logic.place(&mut self.data, kind, x, y).is_some(),
            None => self.fail(PlannerError::UnknownTypeCode(kind.to_string())),
        }
    }

    #[wasm_bindgen]
    pub fn delete_at(&mut self, x: i32, y: i32) -> bool {
        self.logic.delete_at(&mut self.data, GridCell::new(x, y))
    }

    #[wasm_bindgen]
    pub fn delete_selected(&mut self) -> bool {
        match self.data.selected() {
            Some(id) => self.logic.delete(&mut self.data, id),
            None => false,
        }
    }

    #[wasm_bindgen]
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let result = self.logic.resize(&mut self.data, width, height);
        self.settle(result).is_some()
    }

    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.logic.clear(&mut self.data);
    }

    #[wasm_bindgen]
    pub fn undo(&mut self) -> bool {
        self.logic.undo(&mut self.data)
    }

    #[wasm_bindgen]
    pub fn redo(&mut self) -> bool {
        self.logic.redo(&mut self.data)
    }

    #[wasm_bindgen]
    pub fn can_undo(&self) -> bool {
        self.data.history().can_undo()
    }

    #[wasm_bindgen]
    pub fn can_redo(&self) -> bool {
        self.data.history().can_redo()
    }

    #[wasm_bindgen]
    pub fn export_verbose(&mut self) -> Option<String> {
        let result = self.logic.export_verbose(&self.data);
        self.settle(result)
    }

    #[wasm_bindgen]
    pub fn export_compact(&mut self) -> Option<String> {
        let result = self.logic.export_compact(&self.data);
        self.settle(result)
    }

    /// Share URL for the current layout, built on the page address `base`
    #[wasm_bindgen]
    pub fn share_link(&mut self, base: &str) -> Option<String> {
        let result = self.logic.share_code(&self.data);
        self.settle(result).map(|code| codec::share_link(base, &code))
    }

    #[wasm_bindgen]
    pub fn export_file_name(&self) -> String {
        codec::export_file_name(&now_iso8601())
    }

    /// Load a pasted code or file. On failure the grid is left as it was.
    #[wasm_bindgen]
    pub fn import_layout(&mut self, text: &str) -> bool {
        let result = self.logic.import_layout(&mut self.data, text);
        self.settle(result).is_some()
    }

    /// Load the layout named by the page's query string, if there is one
    #[wasm_bindgen]
    pub fn load_shared_layout(&mut self, query: &str) -> bool {
        match codec::share_code_from_query(query) {
            Some(code) => self.import_layout(code),
            None => false,
        }
    }

    #[wasm_bindgen]
    pub fn get_snapshot(&mut self) -> JsValue {
        let snapshot = self.snapshot();
        serde_wasm_bindgen::to_value(&snapshot).unwrap_or(JsValue::NULL)
    }

    /// One byte per cell, row-major: 0 uncovered, 1 buildable, 2 controlled
    #[cfg(target_arch = "wasm32")]
    #[wasm_bindgen]
    pub fn get_coverage(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.data.coverage().to_bytes().as_slice())
    }

    #[wasm_bindgen]
    pub fn get_coverage_bytes(&self) -> Vec<u8> {
        self.data.coverage().to_bytes()
    }

    /// Padded crop rectangle around the buildings, `null` for an empty grid
    #[wasm_bindgen]
    pub fn get_building_bounds(&self) -> JsValue {
        match self.building_bounds() {
            Some(bounds) => serde_wasm_bindgen::to_value(&bounds).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }

    #[wasm_bindgen]
    pub fn center_view(&mut self, viewport_width: f64, viewport_height: f64) {
        self.logic.center_view(&mut self.data, viewport_width, viewport_height);
    }

    #[wasm_bindgen]
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.logic.pan_by(&mut self.data, dx, dy);
    }

    /// Zoom to `scale` keeping the point under (`x`, `y`) in place
    #[wasm_bindgen]
    pub fn zoom_at(&mut self, x: f64, y: f64, scale: f64) {
        self.logic.zoom_at(&mut self.data, ScreenPoint::new(x, y), scale);
    }

    #[wasm_bindgen]
    pub fn get_scale(&self) -> f64 {
        self.data.view().scale
    }

    #[wasm_bindgen]
    pub fn get_grid_width(&self) -> u32 {
        self.data.grid().width as u32
    }

    #[wasm_bindgen]
    pub fn get_grid_height(&self) -> u32 {
        self.data.grid().height as u32
    }

    #[wasm_bindgen]
    pub fn get_item_count(&self) -> usize {
        self.data.items().len()
    }

    #[wasm_bindgen]
    pub fn get_town_center_count(&self) -> u32 {
        self.data.town_center_count()
    }

    /// `[width, height]` in cells; unknown kinds are a single cell
    #[wasm_bindgen]
    pub fn item_footprint(kind: &str) -> Vec<i32> {
        let footprint = footprint_of_name(kind);
        vec![footprint.width, footprint.height]
    }

    #[wasm_bindgen]
    pub fn last_error(&self) -> Option<String> {
        self.last_error.clone()
    }

    #[wasm_bindgen]
    pub fn get_last_recompute_duration(&self) -> f64 {
        self.data.metrics().last_recompute_duration_ms
    }

    #[wasm_bindgen]
    pub fn get_last_snapshot_duration(&self) -> f64 {
        self.data.metrics().last_snapshot_duration_ms
    }
}

impl Default for TerritoryPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl TerritoryPlanner {
    pub fn from_config(config: PlannerConfig) -> Self {
        let mut planner = Self {
            data: PlannerData::new(config),
            logic: PlannerLogic::default(),
            last_error: None,
        };
        planner.logic.start_session(&mut planner.data);
        planner
    }

    pub fn data(&self) -> &PlannerData {
        &self.data
    }

    pub fn snapshot(&mut self) -> PlannerSnapshot {
        self.logic.build_snapshot(&mut self.data)
    }

    pub fn building_bounds(&self) -> Option<CellRect> {
        crate::logic::viewport::building_bounds(self.data.grid(), self.data.items())
    }

    /// Keep the error message for the page and turn the result into an `Option`
    fn settle<T>(&mut self, result: Result<T, PlannerError>) -> Option<T> {
        match result {
            Ok(value) => {
                self.last_error = None;
                Some(value)
            }
            Err(err) => {
                self.fail(err);
                None
            }
        }
    }

    fn fail(&mut self, err: PlannerError) -> bool {
        self.last_error = Some(err.to_string());
        false
    }
}
