//! Collision engine - pure predicates over a board and a piece
//!
//! None of these functions mutate anything; movement code builds a candidate piece and
//! asks whether it may take its place.

use brick_game_core::types::{BOARD_COLS, BOARD_ROWS};
use brick_game_core::Board;

use crate::pieces::{Cell, PieceCells};

const LAST_ROW: i8 = BOARD_ROWS as i8 - 1;

/// Whether a piece cell may sit at (`row`, `col`): inside the columns, not below the floor,
/// and not on a landed cell. Rows above the board are open.
pub fn is_open(board: &Board, (row, col): Cell) -> bool {
    if col < 0 || col >= BOARD_COLS as i8 || row > LAST_ROW {
        return false;
    }
    row < 0 || board.is_free(row, col)
}

/// Whether every cell is on the board and empty. Rotation uses this stricter test.
pub fn fits(board: &Board, cells: &PieceCells) -> bool {
    cells.iter().all(|&(row, col)| board.is_free(row, col))
}

/// Whether the piece cannot fall any further: a cell sits on the last row, or the lowest
/// cell of some column rests on a landed cell.
pub fn collides_below(board: &Board, cells: &PieceCells) -> bool {
    cells.iter().any(|&(row, col)| {
        if row >= LAST_ROW {
            return true;
        }
        let lowest_in_column = cells.iter().all(|&(r, c)| c != col || r <= row);
        lowest_in_column && board.is_filled(row + 1, col)
    })
}

/// Whether a laterally moved piece leaves the columns, or the outermost cell of one of its
/// rows lands on a landed cell
pub fn collides_sideways(board: &Board, cells: &PieceCells) -> bool {
    cells.iter().any(|&(row, col)| {
        if col < 0 || col >= BOARD_COLS as i8 {
            return true;
        }
        if row < 0 {
            return false;
        }
        let leftmost = cells.iter().all(|&(r, c)| r != row || c >= col);
        let rightmost = cells.iter().all(|&(r, c)| r != row || c <= col);
        (leftmost || rightmost) && board.is_filled(row, col)
    })
}
