use serde::{Deserialize, Serialize};

use super::grid_space::GridSpace;

/// Territory classification of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "u8", from = "u8")]
pub enum Coverage {
    #[default]
    Uncovered = 0,
    Buildable = 1,
    Controlled = 2,
}

impl From<Coverage> for u8 {
    fn from(coverage: Coverage) -> u8 {
        coverage as u8
    }
}

impl From<u8> for Coverage {
    fn from(value: u8) -> Coverage {
        match value {
            1 => Coverage::Buildable,
            2 => Coverage::Controlled,
            _ => Coverage::Uncovered,
        }
    }
}

/// Flattened row-major coverage for the whole grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageMap {
    grid: GridSpace,
    cells: Vec<Coverage>,
}

impl CoverageMap {
    pub fn new(grid: GridSpace) -> Self {
        Self {
            grid,
            cells: vec![Coverage::Uncovered; grid.cell_count()],
        }
    }

    pub fn grid(&self) -> GridSpace {
        self.grid
    }

    /// Classification of a cell; off-grid cells are uncovered
    pub fn get(&self, x: i32, y: i32) -> Coverage {
        self.grid
            .index_of(x, y)
            .and_then(|i| self.cells.get(i).copied())
            .unwrap_or_default()
    }

    pub(crate) fn set(&mut self, x: i32, y: i32, coverage: Coverage) {
        if let Some(i) = self.grid.index_of(x, y) {
            self.cells[i] = coverage;
        }
    }

    /// Mark a cell buildable unless it is already controlled
    pub(crate) fn mark_buildable(&mut self, x: i32, y: i32) {
        if let Some(i) = self.grid.index_of(x, y) {
            if self.cells[i] != Coverage::Controlled {
                self.cells[i] = Coverage::Buildable;
            }
        }
    }

    pub fn count(&self, coverage: Coverage) -> usize {
        self.cells.iter().filter(|&&c| c == coverage).count()
    }

    /// One byte per cell, for handing to the page
    pub fn to_bytes(&self) -> Vec<u8> {
        self.cells.iter().map(|&c| u8::from(c)).collect()
    }
}
