//! Board module - manages the game grid
//!
//! The board is a 20x10 grid of integer cell codes, `0` meaning empty.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..19 (top to bottom), col ranges 0..9
//! (left to right). Rows above the board (negative) are valid piece coordinates but never
//! board cells.

use arrayvec::ArrayVec;

use crate::snapshot::Grid;
use crate::types::{BOARD_COLS, BOARD_ROWS, EMPTY};

/// Total number of cells on the board
const BOARD_SIZE: usize = BOARD_ROWS * BOARD_COLS;

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cell codes, row-major order (row * COLS + col)
    cells: [u8; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if Self::is_out_of_bounds(row, col) {
            return None;
        }
        Some((row as usize) * BOARD_COLS + (col as usize))
    }

    /// Check if position is outside the grid
    #[inline(always)]
    pub fn is_out_of_bounds(row: i8, col: i8) -> bool {
        row < 0 || row >= BOARD_ROWS as i8 || col < 0 || col >= BOARD_COLS as i8
    }

    /// Get cell at position (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<u8> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at position (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, code: u8) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = code;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(EMPTY))
    }

    /// Check if position is within bounds and filled
    pub fn is_filled(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(code) if code != EMPTY)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_ROWS {
            return false;
        }
        let start = row * BOARD_COLS;
        self.cells[start..start + BOARD_COLS]
            .iter()
            .all(|&cell| cell != EMPTY)
    }

    /// Check if any cell of a row is filled
    pub fn is_row_touched(&self, row: usize) -> bool {
        if row >= BOARD_ROWS {
            return false;
        }
        let start = row * BOARD_COLS;
        self.cells[start..start + BOARD_COLS]
            .iter()
            .any(|&cell| cell != EMPTY)
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    /// Uses a two-pointer algorithm with zero-allocation
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, BOARD_ROWS> {
        let mut cleared_rows = ArrayVec::new();
        let mut write_row = BOARD_ROWS;

        // Scan from bottom to top
        for read_row in (0..BOARD_ROWS).rev() {
            if self.is_row_full(read_row) {
                cleared_rows.push(read_row);
            } else {
                // Not full: move it down to the write position
                write_row -= 1;
                if write_row != read_row {
                    let src_start = read_row * BOARD_COLS;
                    let dst_start = write_row * BOARD_COLS;
                    self.cells
                        .copy_within(src_start..src_start + BOARD_COLS, dst_start);
                }
            }
        }

        // Vacated rows at the top
        for cell in &mut self.cells[..write_row * BOARD_COLS] {
            *cell = EMPTY;
        }

        cleared_rows
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != EMPTY).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [EMPTY; BOARD_SIZE];
    }

    /// Copy the board into a 2D grid
    pub fn write_grid(&self, out: &mut Grid) {
        for (row, chunk) in out.iter_mut().zip(self.cells.chunks_exact(BOARD_COLS)) {
            row.copy_from_slice(chunk);
        }
    }

    /// Build a board from a 2D grid
    pub fn from_grid(grid: &Grid) -> Self {
        let mut board = Self::new();
        for (chunk, row) in board.cells.chunks_exact_mut(BOARD_COLS).zip(grid.iter()) {
            chunk.copy_from_slice(row);
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 9), Some(9));
        assert_eq!(Board::index(1, 0), Some(10));
        assert_eq!(Board::index(19, 9), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(0, 10), None);
        assert_eq!(Board::index(20, 0), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, 3);
        board.set(10, 5, 7);

        assert_eq!(board.get(0, 0), Some(3));
        assert_eq!(board.get(10, 5), Some(7));

        assert_eq!(board.cells[0], 3);
        assert_eq!(board.cells[10 * 10 + 5], 7);
    }

    #[test]
    fn test_clear_full_rows_shifts_rows_above() {
        let mut board = Board::new();
        for col in 0..BOARD_COLS as i8 {
            board.set(19, col, 1);
            board.set(17, col, 2);
        }
        board.set(18, 4, 5);
        board.set(16, 0, 6);

        let cleared = board.clear_full_rows();

        assert_eq!(cleared.as_slice(), &[19, 17]);
        assert_eq!(board.get(19, 4), Some(5));
        assert_eq!(board.get(18, 0), Some(6));
        assert_eq!(board.filled_count(), 2);
        assert!(!board.is_row_touched(0));
    }

    #[test]
    fn test_grid_roundtrip() {
        let mut grid: Grid = [[EMPTY; BOARD_COLS]; BOARD_ROWS];
        grid[5][3] = 4;
        grid[19][9] = 1;

        let board = Board::from_grid(&grid);
        let mut back: Grid = [[EMPTY; BOARD_COLS]; BOARD_ROWS];
        board.write_grid(&mut back);

        assert_eq!(grid, back);
    }
}
