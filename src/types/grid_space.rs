use serde::Serialize;

use super::item_kind::Footprint;

/// Dimensions of the planning grid in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridSpace {
    pub width: i32,
    pub height: i32,
}

impl GridSpace {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as i32,
            height: height as i32,
        }
    }

    pub fn cell_count(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    pub fn contains_cell(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// Whether the whole rectangle lies on the grid
    pub fn contains_rect(&self, rect: &CellRect) -> bool {
        rect.x >= 0
            && rect.y >= 0
            && rect.right() <= self.width
            && rect.bottom() <= self.height
    }

    /// Row-major index of a cell, `None` when off the grid
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if self.contains_cell(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    pub fn as_rect(&self) -> CellRect {
        CellRect::new(0, 0, self.width, self.height)
    }
}

/// Axis-aligned cell rectangle, half-open on the right and bottom edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl CellRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn at(x: i32, y: i32, footprint: Footprint) -> Self {
        Self::new(x, y, footprint.width, footprint.height)
    }

    /// Exclusive right edge, saturating at `i32::MAX`
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn intersects(&self, other: &CellRect) -> bool {
        !(self.right() <= other.x
            || other.right() <= self.x
            || self.bottom() <= other.y
            || other.bottom() <= self.y)
    }

    /// Grow by `amount` cells on every side
    pub fn expand(&self, amount: i32) -> CellRect {
        let grow = amount.saturating_mul(2);
        CellRect::new(
            self.x.saturating_sub(amount),
            self.y.saturating_sub(amount),
            self.width.saturating_add(grow),
            self.height.saturating_add(grow),
        )
    }

    /// Overlap with `other`, `None` when empty
    pub fn intersection(&self, other: &CellRect) -> Option<CellRect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right > x && bottom > y {
            Some(CellRect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let (x0, right) = (self.x, self.right());
        (self.y..self.bottom()).flat_map(move |y| (x0..right).map(move |x| (x, y)))
    }
}
