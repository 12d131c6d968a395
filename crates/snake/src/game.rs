//! Snake game state
//!
//! The snake moves one cell per shift in the direction its head faces. Steering may turn
//! the head by 90 degrees at most once per step: left/right only while moving vertically,
//! up/down only while moving horizontally. Each food eaten scores a point; the game ends on
//! hitting a wall or the body, or on reaching [`SNAKE_WIN_SCORE`].

use brick_game_core::types::{glyph, GameKind, GameStatus, UserAction, SNAKE_WIN_SCORE};
use brick_game_core::{
    Attach, GameInfoSnapshot, HighScoreStore, ScoreKeeper, ScoreRules, Shift, Simulation,
    EMPTY_GRID,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::body::{Body, Direction, Step};
use crate::food::{place_food, START_FOOD};

#[derive(Debug)]
pub struct SnakeGame {
    body: Body,
    food: (i8, i8),
    /// One turn allowed until the next forward step
    turn_armed: bool,
    scores: ScoreKeeper,
    rng: StdRng,
}

impl SnakeGame {
    pub fn new(store: Box<dyn HighScoreStore>, rng: StdRng) -> Self {
        Self {
            body: Body::new(),
            food: START_FOOD,
            turn_armed: true,
            scores: ScoreKeeper::new(ScoreRules::Food, store),
            rng,
        }
    }

    pub fn with_seed(store: Box<dyn HighScoreStore>, seed: u64) -> Self {
        Self::new(store, StdRng::seed_from_u64(seed))
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn set_body(&mut self, body: Body) {
        self.body = body;
    }

    pub fn food(&self) -> (i8, i8) {
        self.food
    }

    pub fn set_food(&mut self, food: (i8, i8)) {
        self.food = food;
    }

    pub fn scores_mut(&mut self) -> &mut ScoreKeeper {
        &mut self.scores
    }

    /// Turn the head if the turn is perpendicular and none was taken since the last step.
    /// Returns whether the head turned.
    pub fn turn(&mut self, dir: Direction) -> bool {
        if !self.turn_armed || dir.is_vertical() == self.body.head().dir.is_vertical() {
            return false;
        }
        self.body.turn(dir);
        self.turn_armed = false;
        true
    }
}

impl Simulation for SnakeGame {
    fn kind(&self) -> GameKind {
        GameKind::Snake
    }

    fn spawn(&mut self) {
        self.body = Body::new();
        self.food = START_FOOD;
        self.turn_armed = true;
        self.scores.reset();
    }

    fn steer(&mut self, action: UserAction) {
        if let Some(dir) = Direction::from_action(action) {
            self.turn(dir);
        }
    }

    fn shift(&mut self) -> Shift {
        self.turn_armed = true;
        match self.body.advance(self.food) {
            Step::Moved => Shift::Advanced,
            Step::Ate => Shift::Attach,
            Step::Blocked => {
                log::debug!("snake blocked at {:?}", self.body.head().pos());
                Shift::Crashed
            }
        }
    }

    fn attach(&mut self) -> Attach {
        self.scores.add(1);
        match place_food(&self.body, &mut self.rng) {
            Some(food) => self.food = food,
            None => return Attach::GameOver,
        }
        if self.scores.score() >= SNAKE_WIN_SCORE {
            log::info!("snake reached {} points", SNAKE_WIN_SCORE);
            Attach::GameOver
        } else {
            Attach::Resume
        }
    }

    fn restart(&mut self) {
        self.scores.reset();
    }

    fn scores(&self) -> &ScoreKeeper {
        &self.scores
    }

    fn render_into(&self, status: GameStatus, out: &mut GameInfoSnapshot) {
        out.board = EMPTY_GRID;
        out.next = None;
        if !status.is_in_play() {
            return;
        }
        for (i, segment) in self.body.segments().iter().enumerate() {
            out.board[segment.row as usize][segment.col as usize] = self.body.glyph(i);
        }
        let (row, col) = self.food;
        out.board[row as usize][col as usize] = glyph::FOOD;
    }
}
