//! Tetris game state
//!
//! [`TetrisGame`] owns the landed-cell board, the falling piece, the upcoming shape and the
//! scores. Movement is all-or-nothing: a candidate piece is built, checked by the collision
//! engine, and either replaces the active piece or is dropped.
//!
//! Landing gives the player one grace period. The first shift that leaves the piece resting
//! sets the landing latch and hands control back for one more round of input; the next
//! shift commits it. A hard drop commits immediately.

use brick_game_core::types::{GameKind, GameStatus, UserAction};
use brick_game_core::{
    line_clear_points, Attach, Board, GameInfoSnapshot, HighScoreStore, Mask, ScoreKeeper,
    ScoreRules, Shift, Simulation,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::collision::{collides_below, collides_sideways, fits, is_open};
use crate::pieces::{Piece, Shape, FIRST_SPAWN_ROW, SPAWN_ROW};

#[derive(Debug)]
pub struct TetrisGame {
    board: Board,
    piece: Option<Piece>,
    next: Shape,
    first_spawn: bool,
    /// Landing latch: the piece has already used its grace period
    landed: bool,
    scores: ScoreKeeper,
    rng: StdRng,
}

impl TetrisGame {
    pub fn new(store: Box<dyn HighScoreStore>, mut rng: StdRng) -> Self {
        let next = random_shape(&mut rng);
        Self {
            board: Board::new(),
            piece: None,
            next,
            first_spawn: true,
            landed: false,
            scores: ScoreKeeper::new(ScoreRules::LineClears, store),
            rng,
        }
    }

    pub fn with_seed(store: Box<dyn HighScoreStore>, seed: u64) -> Self {
        Self::new(store, StdRng::seed_from_u64(seed))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    /// Replace the active piece
    pub fn set_piece(&mut self, piece: Piece) {
        self.piece = Some(piece);
    }

    pub fn next_shape(&self) -> Shape {
        self.next
    }

    pub fn next_mask(&self) -> Mask {
        self.next.mask()
    }

    pub fn is_latched(&self) -> bool {
        self.landed
    }

    pub fn move_left(&mut self) -> bool {
        self.move_sideways(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_sideways(1)
    }

    fn move_sideways(&mut self, dcol: i8) -> bool {
        let Some(piece) = self.piece else {
            return false;
        };
        let candidate = piece.shifted(0, dcol);
        if collides_sideways(&self.board, &candidate.cells) {
            return false;
        }
        self.piece = Some(candidate);
        true
    }

    /// Rotate clockwise around the pivot. Rejected as a whole if any resulting cell is off
    /// the board or on a landed cell.
    pub fn rotate(&mut self) -> bool {
        let Some(candidate) = self.piece.and_then(|piece| piece.rotated()) else {
            return false;
        };
        if !fits(&self.board, &candidate.cells) {
            return false;
        }
        self.piece = Some(candidate);
        true
    }

    /// Move one row down. Nothing moves if any cell would pass the floor or hit a landed
    /// cell.
    pub fn move_down(&mut self) -> bool {
        let Some(piece) = self.piece else {
            return false;
        };
        let candidate = piece.shifted(1, 0);
        if !candidate.cells.iter().all(|&cell| is_open(&self.board, cell)) {
            return false;
        }
        self.piece = Some(candidate);
        true
    }

    /// Drop until the piece rests. Returns the number of rows fallen.
    pub fn force_down(&mut self) -> usize {
        let mut rows = 0;
        while !self.collides_below() {
            if !self.move_down() {
                break;
            }
            rows += 1;
        }
        rows
    }

    pub fn collides_below(&self) -> bool {
        self.piece
            .map(|piece| collides_below(&self.board, &piece.cells))
            .unwrap_or(false)
    }

    /// Write the active piece into the board, clear full rows and score them. Returns the
    /// number of rows cleared.
    pub fn commit(&mut self) -> usize {
        let Some(piece) = self.piece.take() else {
            return 0;
        };
        for &(row, col) in &piece.cells {
            self.board.set(row, col, piece.color());
        }
        let cleared = self.board.clear_full_rows();
        if !cleared.is_empty() {
            log::debug!("cleared rows {:?}", cleared.as_slice());
        }
        self.scores.add(line_clear_points(cleared.len()));
        cleared.len()
    }
}

fn random_shape(rng: &mut StdRng) -> Shape {
    Shape::ALL[rng.gen_range(0..Shape::ALL.len())]
}

impl Simulation for TetrisGame {
    fn kind(&self) -> GameKind {
        GameKind::Tetris
    }

    fn spawn(&mut self) {
        let piece = if self.first_spawn {
            self.first_spawn = false;
            Piece::spawn(random_shape(&mut self.rng), FIRST_SPAWN_ROW)
        } else {
            Piece::spawn(self.next, SPAWN_ROW)
        };
        self.piece = Some(piece);
        self.next = random_shape(&mut self.rng);
    }

    fn steer(&mut self, action: UserAction) {
        match action {
            UserAction::Left => {
                self.move_left();
            }
            UserAction::Right => {
                self.move_right();
            }
            UserAction::Down => {
                self.force_down();
            }
            UserAction::Action if !self.landed => {
                self.rotate();
            }
            _ => {}
        }
    }

    fn lands_early(&mut self, action: Option<UserAction>, timer_elapsed: bool) -> bool {
        (self.collides_below() && timer_elapsed) || action == Some(UserAction::Down)
    }

    fn shift(&mut self) -> Shift {
        self.move_down();
        if !self.collides_below() {
            Shift::Advanced
        } else if self.landed {
            Shift::Attach
        } else {
            self.landed = true;
            Shift::Grace
        }
    }

    fn attach(&mut self) -> Attach {
        self.commit();
        self.landed = false;
        if self.board.is_row_touched(0) {
            Attach::GameOver
        } else {
            Attach::Spawn
        }
    }

    fn restart(&mut self) {
        self.board.clear();
        self.piece = None;
        self.landed = false;
        self.scores.reset();
    }

    fn scores(&self) -> &ScoreKeeper {
        &self.scores
    }

    fn render_into(&self, status: GameStatus, out: &mut GameInfoSnapshot) {
        out.board = brick_game_core::EMPTY_GRID;
        if status == GameStatus::Start {
            out.next = None;
            return;
        }
        self.board.write_grid(&mut out.board);
        out.next = Some(self.next_mask());

        if !status.is_in_play() {
            return;
        }
        if let Some(piece) = &self.piece {
            for &(row, col) in &piece.cells {
                if !Board::is_out_of_bounds(row, col) {
                    out.board[row as usize][col as usize] = piece.color();
                }
            }
        }
    }
}
