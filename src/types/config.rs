use serde::Deserialize;

use crate::constants::{
    DEFAULT_CELL_SIZE, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, HISTORY_LIMIT_CAP,
    MAX_GRID_HEIGHT, MAX_GRID_WIDTH, MAX_HISTORY_SIZE, MAX_SCALE, MIN_GRID_DIMENSION, MIN_SCALE,
    PINCH_SENSITIVITY,
};

/// Session settings. Every field is optional on the page side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlannerConfig {
    pub grid_width: u32,
    pub grid_height: u32,
    pub min_dimension: u32,
    pub max_width: u32,
    pub max_height: u32,
    pub cell_size: f64,
    pub history_limit: usize,
    pub min_scale: f64,
    pub max_scale: f64,
    pub pinch_sensitivity: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            min_dimension: MIN_GRID_DIMENSION,
            max_width: MAX_GRID_WIDTH,
            max_height: MAX_GRID_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            history_limit: MAX_HISTORY_SIZE,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            pinch_sensitivity: PINCH_SENSITIVITY,
        }
    }
}

impl PlannerConfig {
    /// Repair inverted or degenerate settings so the session can always start
    pub fn normalized(mut self) -> Self {
        let defaults = PlannerConfig::default();
        self.min_dimension = self.min_dimension.max(1);
        self.max_width = self.max_width.max(self.min_dimension);
        self.max_height = self.max_height.max(self.min_dimension);
        self.grid_width = self.grid_width.clamp(self.min_dimension, self.max_width);
        self.grid_height = self.grid_height.clamp(self.min_dimension, self.max_height);
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            self.cell_size = defaults.cell_size;
        }
        self.history_limit = self.history_limit.clamp(1, HISTORY_LIMIT_CAP);
        if !(self.min_scale.is_finite() && self.min_scale > 0.0) {
            self.min_scale = defaults.min_scale;
        }
        if !(self.max_scale.is_finite() && self.max_scale >= self.min_scale) {
            self.max_scale = self.min_scale.max(defaults.max_scale);
        }
        if !self.pinch_sensitivity.is_finite() {
            self.pinch_sensitivity = defaults.pinch_sensitivity;
        }
        self
    }

    pub fn width_in_range(&self, width: u32) -> bool {
        width >= self.min_dimension && width <= self.max_width
    }

    pub fn height_in_range(&self, height: u32) -> bool {
        height >= self.min_dimension && height <= self.max_height
    }
}
