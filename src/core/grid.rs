//! Grid module - manages the bubble grid
//!
//! The grid is a 10x10 field where each cell can be empty or hold a colored
//! bubble. Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row 0 is the ceiling and row 9 the floor.
//!
//! Alternating rows are horizontally offset to simulate packed circles, so
//! adjacency is hexagonal: every cell has up to 6 neighbors, and which
//! diagonals count depends on row parity.

use arrayvec::ArrayVec;

use crate::core::rng::SimpleRng;
use crate::types::{Cell, Pos, GRID_COLS, GRID_ROWS, SEED_ROWS};

/// Total number of cells on the grid
pub const GRID_SIZE: usize = (GRID_ROWS as usize) * (GRID_COLS as usize);

/// Hex neighbor offsets for a cell in `row`.
///
/// Even rows shift their diagonals left, odd rows right, matching the
/// offset-hex layout.
pub fn hex_deltas(row: i8) -> [(i8, i8); 6] {
    let side = if row % 2 == 0 { -1 } else { 1 };
    [(-1, 0), (-1, side), (0, -1), (0, 1), (1, side), (1, 0)]
}

/// The bubble grid - 10 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= GRID_ROWS as i8 || col < 0 || col >= GRID_COLS as i8 {
            return None;
        }
        Some((row as usize) * (GRID_COLS as usize) + (col as usize))
    }

    pub fn rows(&self) -> u8 {
        GRID_ROWS
    }

    pub fn cols(&self) -> u8 {
        GRID_COLS
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and holds a bubble
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_cell(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, row: i8, col: i8) -> bool {
        row < 0 || row >= GRID_ROWS as i8 || col < 0 || col >= GRID_COLS as i8
    }

    /// In-bounds hex neighbors of a position
    pub fn neighbors(&self, pos: Pos) -> ArrayVec<Pos, 6> {
        let mut out = ArrayVec::new();
        for (dr, dc) in hex_deltas(pos.row) {
            let row = pos.row + dr;
            let col = pos.col + dc;
            if !self.is_out_of_bounds(row, col) {
                out.push(Pos::new(row, col));
            }
        }
        out
    }

    /// Check if any cell in a row holds a bubble
    pub fn row_has_bubbles(&self, row: u8) -> bool {
        if row >= GRID_ROWS {
            return false;
        }
        let start = (row as usize) * (GRID_COLS as usize);
        let end = start + GRID_COLS as usize;
        self.cells[start..end].iter().any(|cell| cell.is_some())
    }

    /// Number of bubbles on the grid
    pub fn bubble_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Fill the top rows with random colors (fresh game / restart)
    pub fn seed_top_rows(&mut self, rng: &mut SimpleRng) {
        self.clear();
        for row in 0..SEED_ROWS as i8 {
            for col in 0..GRID_COLS as i8 {
                self.set(row, col, Some(rng.next_color()));
            }
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Write the grid as a u8 matrix (0 = empty, 1..=5 = palette index + 1)
    pub fn write_u8_grid(&self, out: &mut [[u8; GRID_COLS as usize]; GRID_ROWS as usize]) {
        for row in 0..GRID_ROWS as usize {
            for col in 0..GRID_COLS as usize {
                out[row][col] = match self.cells[row * GRID_COLS as usize + col] {
                    Some(color) => color.index() as u8 + 1,
                    None => 0,
                };
            }
        }
    }

}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
