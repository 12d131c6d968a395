//! Pieces module - tetromino shapes and pivot rotation
//!
//! Each shape is a 4x4 mask with the piece resting on the bottom rows. A placed piece is
//! the four filled mask cells, enumerated row-major, translated to board coordinates. The
//! order matters: rotation turns every cell 90 degrees clockwise around one of the four,
//! the shape's pivot.
//!
//! | Shape | Colour | Pivot |
//! |-------|--------|-------|
//! | I | 1 | none, never rotates |
//! | J | 2 | cell 2 |
//! | L | 3 | cell 2 |
//! | O | 4 | cell 2 |
//! | S | 5 | cell 3 |
//! | T | 6 | cell 2 |
//! | Z | 7 | cell 2 |

use brick_game_core::Mask;

/// Board coordinate of one piece cell: (row, col). Rows may be negative while the piece
/// enters the board.
pub type Cell = (i8, i8);

/// The four cells of a placed piece
pub type PieceCells = [Cell; 4];

/// Column the left edge of a shape mask lands on when spawning
pub const SPAWN_COL: i8 = 3;

/// Mask row offset for the first piece of a game (mask rows -3..0)
pub const FIRST_SPAWN_ROW: i8 = -3;

/// Mask row offset for every later piece (mask rows -2..1)
pub const SPAWN_ROW: i8 = -2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

const SHAPE_MASKS: [Mask; 7] = [
    // I
    [[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [1, 1, 1, 1]],
    // J
    [[0, 0, 0, 0], [0, 0, 0, 0], [1, 0, 0, 0], [1, 1, 1, 0]],
    // L
    [[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 1, 0], [1, 1, 1, 0]],
    // O
    [[0, 0, 0, 0], [0, 0, 0, 0], [0, 1, 1, 0], [0, 1, 1, 0]],
    // S
    [[0, 0, 0, 0], [0, 0, 0, 0], [0, 1, 1, 0], [1, 1, 0, 0]],
    // T
    [[0, 0, 0, 0], [0, 0, 0, 0], [0, 1, 0, 0], [1, 1, 1, 0]],
    // Z
    [[0, 0, 0, 0], [0, 0, 0, 0], [1, 1, 0, 0], [0, 1, 1, 0]],
];

impl Shape {
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::J,
        Shape::L,
        Shape::O,
        Shape::S,
        Shape::T,
        Shape::Z,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Board code written for landed cells of this shape (1..=7)
    pub fn color(self) -> u8 {
        self.index() as u8 + 1
    }

    /// 4x4 mask, `1` for filled cells
    pub fn mask(self) -> Mask {
        SHAPE_MASKS[self.index()]
    }

    /// Index of the rotation pivot within the piece cells
    pub fn pivot(self) -> Option<usize> {
        match self {
            Shape::I => None,
            Shape::S => Some(3),
            _ => Some(2),
        }
    }
}

/// Filled cells of `mask`, row-major, offset by (`row`, `col`)
pub fn mask_cells(mask: &Mask, row: i8, col: i8) -> PieceCells {
    let mut cells = [(row, col); 4];
    let filled = (0..mask.len())
        .flat_map(|r| (0..mask[r].len()).map(move |c| (r, c)))
        .filter(|&(r, c)| mask[r][c] != 0);
    for (slot, (r, c)) in cells.iter_mut().zip(filled) {
        *slot = (row + r as i8, col + c as i8);
    }
    cells
}

/// An active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub shape: Shape,
    pub cells: PieceCells,
}

impl Piece {
    /// Place `shape` with its mask's top-left at (`row`, [`SPAWN_COL`])
    pub fn spawn(shape: Shape, row: i8) -> Self {
        Self {
            shape,
            cells: mask_cells(&shape.mask(), row, SPAWN_COL),
        }
    }

    pub fn color(&self) -> u8 {
        self.shape.color()
    }

    /// Copy moved by (`drow`, `dcol`)
    pub fn shifted(&self, drow: i8, dcol: i8) -> Self {
        let mut out = *self;
        for cell in &mut out.cells {
            cell.0 += drow;
            cell.1 += dcol;
        }
        out
    }

    /// Copy turned 90 degrees clockwise around the pivot, `None` for shapes that never
    /// rotate. The result is not checked against the board.
    pub fn rotated(&self) -> Option<Self> {
        let (pivot_row, pivot_col) = self.cells[self.shape.pivot()?];
        let mut out = *self;
        for cell in &mut out.cells {
            let (row, col) = *cell;
            *cell = (col + pivot_row - pivot_col, pivot_col + pivot_row - row);
        }
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mask_has_four_cells() {
        for shape in Shape::ALL {
            let filled = shape.mask().iter().flatten().filter(|&&c| c != 0).count();
            assert_eq!(filled, 4, "{shape:?}");
        }
    }

    #[test]
    fn test_mask_cells_row_major() {
        let cells = mask_cells(&Shape::S.mask(), 0, 0);
        assert_eq!(cells, [(2, 1), (2, 2), (3, 0), (3, 1)]);
    }

    #[test]
    fn test_spawn_positions() {
        let first = Piece::spawn(Shape::I, FIRST_SPAWN_ROW);
        assert_eq!(first.cells, [(0, 3), (0, 4), (0, 5), (0, 6)]);

        let later = Piece::spawn(Shape::T, SPAWN_ROW);
        assert_eq!(later.cells, [(0, 4), (1, 3), (1, 4), (1, 5)]);
    }

    #[test]
    fn test_colors() {
        assert_eq!(Shape::I.color(), 1);
        assert_eq!(Shape::Z.color(), 7);
        assert_eq!(Shape::from_index(3), Some(Shape::O));
        assert_eq!(Shape::from_index(7), None);
    }

    #[test]
    fn test_i_never_rotates() {
        assert!(Piece::spawn(Shape::I, 5).rotated().is_none());
    }

    #[test]
    fn test_t_rotation_about_pivot() {
        // T pointing up: (4,4) above (5,3) (5,4) (5,5); pivot is (5,4)
        let t = Piece::spawn(Shape::T, 2);
        assert_eq!(t.cells, [(4, 4), (5, 3), (5, 4), (5, 5)]);

        let r = t.rotated().unwrap();
        // Now pointing right
        assert_eq!(r.cells, [(5, 5), (4, 4), (5, 4), (6, 4)]);
        assert_eq!(r.cells[2], t.cells[2]);
    }

    #[test]
    fn test_four_rotations_return_home() {
        for shape in [Shape::J, Shape::L, Shape::S, Shape::T, Shape::Z, Shape::O] {
            let start = Piece::spawn(shape, 5);
            let mut piece = start;
            for _ in 0..4 {
                piece = piece.rotated().unwrap();
            }
            assert_eq!(piece, start, "{shape:?}");
        }
    }

    #[test]
    fn test_shifted() {
        let p = Piece::spawn(Shape::O, 0).shifted(2, -1);
        assert_eq!(p.cells, [(4, 3), (4, 4), (5, 3), (5, 4)]);
    }
}
