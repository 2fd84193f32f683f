//! Mapping between terminal coordinates and logical board cells.
//!
//! The board occupies a rectangle of the terminal split into a 3x3 grid of
//! equal cells. A pointer position maps to a cell with a fixed linear
//! transform: `floor((pointer - origin) / cell_size)`, independently on each
//! axis. Positions left of or above the board map to negative indices and
//! positions past its far edge to indices of 3 or more; the engine rejects
//! both as out of bounds.

use ratatui::layout::Rect;
use tictactoe_core::{BOARD_DIM, Coord};
use tracing::instrument;

/// Preferred board width in terminal columns (three 13-column cells).
pub const BOARD_WIDTH: u16 = 39;

/// Preferred board height in terminal rows (three 6-row cells).
pub const BOARD_HEIGHT: u16 = 18;

const DIM: f64 = BOARD_DIM as f64;

/// Screen placement of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardGeometry {
    area: Rect,
}

impl BoardGeometry {
    /// Creates a geometry for a board drawn in `area`.
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    /// The full board rectangle.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Width of one cell in columns.
    pub fn cell_width(&self) -> f64 {
        f64::from(self.area.width) / DIM
    }

    /// Height of one cell in rows.
    pub fn cell_height(&self) -> f64 {
        f64::from(self.area.height) / DIM
    }

    /// Maps a terminal position to logical `(row, col)`.
    ///
    /// The result is not range-checked. A board with no area maps every
    /// position to `(-1, -1)`.
    #[instrument(level = "trace")]
    pub fn to_logical(&self, column: u16, row: u16) -> (i32, i32) {
        if self.area.is_empty() {
            return (-1, -1);
        }
        let col = axis_index(column, self.area.x, self.area.width);
        let row = axis_index(row, self.area.y, self.area.height);
        (row, col)
    }

    /// Centre of a cell in terminal coordinates, as `(x, y)`.
    pub fn cell_center(&self, coord: Coord) -> (f64, f64) {
        let (w, h) = (self.cell_width(), self.cell_height());
        (
            f64::from(self.area.x) + w * coord.col as f64 + w / 2.0,
            f64::from(self.area.y) + h * coord.row as f64 + h / 2.0,
        )
    }

    /// The rectangle covered by one cell.
    ///
    /// Cell edges are rounded up so that every position inside the
    /// rectangle maps back to `coord` through [`to_logical`](Self::to_logical).
    pub fn cell_rect(&self, coord: Coord) -> Rect {
        let (x0, x1) = edges(coord.col, self.area.width);
        let (y0, y1) = edges(coord.row, self.area.height);
        Rect::new(
            self.area.x.saturating_add(x0),
            self.area.y.saturating_add(y0),
            x1 - x0,
            y1 - y0,
        )
    }
}

// offset / (extent / 3), rearranged so exact multiples stay exact.
fn axis_index(position: u16, origin: u16, extent: u16) -> i32 {
    let offset = f64::from(position) - f64::from(origin);
    (offset * DIM / f64::from(extent)).floor() as i32
}

fn edges(index: usize, extent: u16) -> (u16, u16) {
    let edge = |i: usize| (f64::from(extent) * i as f64 / DIM).ceil() as u16;
    (edge(index), edge(index + 1))
}
