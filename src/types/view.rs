use serde::Serialize;

/// A point in canvas-container pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A cell coordinate, possibly off the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

impl GridCell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Maps grid cells to screen pixels: `screen = origin + cell * cell_size * scale`.
/// The origin carries pan/scroll; it is negative once the view has scrolled right or down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewTransform {
    pub cell_size: f64,
    pub scale: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

impl ViewTransform {
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell_size,
            scale: 1.0,
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }

    /// Pixels covered by one cell at the current scale
    pub fn cell_pixels(&self) -> f64 {
        self.cell_size * self.scale
    }

    pub fn screen_to_grid(&self, point: ScreenPoint) -> GridCell {
        let span = self.cell_pixels();
        GridCell {
            x: ((point.x - self.origin_x) / span).floor() as i32,
            y: ((point.y - self.origin_y) / span).floor() as i32,
        }
    }

    /// Top-left corner of the cell on screen
    pub fn grid_to_screen(&self, cell: GridCell) -> ScreenPoint {
        let span = self.cell_pixels();
        ScreenPoint {
            x: self.origin_x + cell.x as f64 * span,
            y: self.origin_y + cell.y as f64 * span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_view_floors_pixels() {
        let view = ViewTransform::new(20.0);
        assert_eq!(view.screen_to_grid(ScreenPoint::new(0.0, 0.0)), GridCell::new(0, 0));
        assert_eq!(view.screen_to_grid(ScreenPoint::new(19.9, 39.9)), GridCell::new(0, 1));
        assert_eq!(view.screen_to_grid(ScreenPoint::new(-0.1, 20.0)), GridCell::new(-1, 1));
    }

    #[test]
    fn scaled_and_panned_round_trip() {
        let view = ViewTransform {
            cell_size: 20.0,
            scale: 2.0,
            origin_x: -100.0,
            origin_y: 30.0,
        };
        let cell = GridCell::new(7, 3);
        let corner = view.grid_to_screen(cell);
        assert_eq!(corner, ScreenPoint::new(180.0, 150.0));
        assert_eq!(view.screen_to_grid(corner), cell);
        assert_eq!(
            view.screen_to_grid(ScreenPoint::new(corner.x + 39.0, corner.y + 39.0)),
            cell
        );
    }
}
