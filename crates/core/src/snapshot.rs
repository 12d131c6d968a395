use serde::{Deserialize, Serialize};

use crate::types::{BOARD_COLS, BOARD_ROWS, EMPTY, NEXT_SIZE};

/// Full-size board copy, row-major
pub type Grid = [[u8; BOARD_COLS]; BOARD_ROWS];

/// Next-piece preview mask
pub type Mask = [[u8; NEXT_SIZE]; NEXT_SIZE];

pub const EMPTY_GRID: Grid = [[EMPTY; BOARD_COLS]; BOARD_ROWS];
pub const EMPTY_MASK: Mask = [[EMPTY; NEXT_SIZE]; NEXT_SIZE];

/// Render-ready copy of a game.
///
/// Built under the state lock and returned by value; once produced it shares nothing with
/// the live game and needs no further synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameInfoSnapshot {
    pub board: Grid,
    pub next: Option<Mask>,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub speed: u32,
    pub pause: bool,
}

impl GameInfoSnapshot {
    pub fn cell(&self, row: usize, col: usize) -> u8 {
        self.board[row][col]
    }

    /// Number of non-empty cells on the board
    pub fn filled_cells(&self) -> usize {
        self.board
            .iter()
            .flatten()
            .filter(|&&cell| cell != EMPTY)
            .count()
    }

    /// Whether a next-piece preview is present and shows at least one cell
    pub fn has_next(&self) -> bool {
        self.next
            .map(|mask| mask.iter().flatten().any(|&cell| cell != EMPTY))
            .unwrap_or(false)
    }
}

impl Default for GameInfoSnapshot {
    fn default() -> Self {
        Self {
            board: EMPTY_GRID,
            next: None,
            score: 0,
            high_score: 0,
            level: 1,
            speed: 1,
            pause: false,
        }
    }
}
