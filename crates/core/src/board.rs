//! Board module - manages the game grid
//!
//! The board is a 20x12 grid where each cell is either empty or filled.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (row, col) where row ranges 0..19 (top to bottom) and col
//! ranges 0..11 (left to right). Every access goes through a bounds check.

use crate::types::{Cell, BOARD_COLS, BOARD_ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_ROWS as usize) * (BOARD_COLS as usize);

const COLS: usize = BOARD_COLS as usize;
const ROWS: usize = BOARD_ROWS as usize;

/// The game board - 20 rows x 12 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_ROWS as i8 || col < 0 || col >= BOARD_COLS as i8 {
            return None;
        }
        Some((row as usize) * COLS + (col as usize))
    }

    pub fn rows(&self) -> u8 {
        BOARD_ROWS
    }

    pub fn cols(&self) -> u8 {
        BOARD_COLS
    }

    /// Get cell at (row, col).
    /// Returns None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col).
    /// Returns false (and writes nothing) if out of bounds
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_filled(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Cell::Filled))
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_at(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    pub fn is_out_of_bounds(&self, row: i8, col: i8) -> bool {
        Self::index(row, col).is_none()
    }

    /// One row of cells, left to right. Out-of-range rows yield None.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= ROWS {
            return None;
        }
        let start = row * COLS;
        Some(&self.cells[start..start + COLS])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .map(|cells| cells.iter().all(Cell::is_filled))
            .unwrap_or(false)
    }

    /// Fill every cell of a row. Handy for building positions.
    pub fn fill_row(&mut self, row: usize) {
        if row >= ROWS {
            return;
        }
        let start = row * COLS;
        self.cells[start..start + COLS].fill(Cell::Filled);
    }

    /// Clear a row and shift every row above it down by one.
    ///
    /// Row `r - 1` moves to `r`, repeated up to row 0, which ends up empty.
    pub fn clear_row(&mut self, row: usize) {
        if row >= ROWS {
            return;
        }

        self.cells[row * COLS..(row + 1) * COLS].fill(Cell::Empty);

        // copy_within handles the overlapping ranges
        for r in (1..=row).rev() {
            let src = (r - 1) * COLS;
            self.cells.copy_within(src..src + COLS, r * COLS);
        }

        self.cells[..COLS].fill(Cell::Empty);
    }

    /// Clear all full rows, compacting the stack downward.
    ///
    /// Scans bottom-up. After a clear the same row index is examined again,
    /// since the row above has just shifted into it. Returns the number of
    /// rows cleared.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut row = ROWS;

        while row > 0 {
            if self.is_row_full(row - 1) {
                self.clear_row(row - 1);
                cleared += 1;
            } else {
                row -= 1;
            }
        }

        cleared
    }

    /// Copy the board into a 2D grid (used by snapshots)
    pub fn write_grid(&self, out: &mut [[Cell; COLS]; ROWS]) {
        for (r, out_row) in out.iter_mut().enumerate() {
            out_row.copy_from_slice(&self.cells[r * COLS..(r + 1) * COLS]);
        }
    }

    /// Count of filled cells on the whole board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
