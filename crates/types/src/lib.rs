//! Shared types module - protocol enums and constants
//!
//! Every game served by the engine speaks the same small protocol: a caller posts a
//! [`UserAction`] (plus a `hold` flag) and polls a snapshot, while the engine reports its
//! progress as a [`GameStatus`]. This crate holds those types and the constants both games
//! agree on, with no dependencies beyond `serde` so renderers and transports can use it
//! directly.
//!
//! # Board Dimensions
//!
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Next preview**: 4x4 mask
//!
//! # Timing Constants
//!
//! The clock accumulates abstract timer units; a shift happens once the timer passes
//! [`SHIFT_THRESHOLD`].
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CLOCK_INTERVAL_MS` | 50 | Clock wake interval |
//! | `TETRIS_TICK_MS` | 50 | Tetris FSM tick interval |
//! | `SNAKE_TICK_MS` | 200 | Snake FSM tick interval |
//! | `BASE_TIMER_STEP` | 0.150 | Increment per wake at speed 1 |
//! | `SPEED_TIMER_STEP` | 0.075 | Increment per wake per speed unit above speed 1 |
//! | `HOLD_TIMER_STEP` | 0.5 | Increment per wake while the hold flag is set |
//!
//! # Examples
//!
//! ```
//! use brick_game_types::{GameStatus, UserAction, BOARD_COLS, BOARD_ROWS};
//!
//! let action = UserAction::from_str("left").unwrap();
//! assert_eq!(action, UserAction::Left);
//! assert_eq!(action.as_str(), "left");
//!
//! assert!(GameStatus::Exit.is_terminal());
//! assert_eq!(BOARD_ROWS, 20);
//! assert_eq!(BOARD_COLS, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Board height in cells (20 rows)
pub const BOARD_ROWS: usize = 20;

/// Board width in cells (10 columns)
pub const BOARD_COLS: usize = 10;

/// Side length of the next-piece preview mask
pub const NEXT_SIZE: usize = 4;

/// Cell code for an empty cell, shared by both games
pub const EMPTY: u8 = 0;

/// Clock wake interval in milliseconds
pub const CLOCK_INTERVAL_MS: u64 = 50;

/// Tetris FSM tick interval in milliseconds
pub const TETRIS_TICK_MS: u64 = 50;

/// Snake FSM tick interval in milliseconds
pub const SNAKE_TICK_MS: u64 = 200;

/// Timer value a shift waits for
pub const SHIFT_THRESHOLD: f32 = 1.5;

/// Timer increment per clock wake at speed 1
pub const BASE_TIMER_STEP: f32 = 0.150;

/// Timer increment per clock wake, multiplied by the speed, above speed 1
pub const SPEED_TIMER_STEP: f32 = 0.075;

/// Timer increment per clock wake while the hold flag is set
pub const HOLD_TIMER_STEP: f32 = 0.5;

/// Highest reachable level
pub const MAX_LEVEL: u32 = 10;

/// Snake score that ends the game
pub const SNAKE_WIN_SCORE: u32 = 200;

/// Minimum (and initial) snake length
pub const SNAKE_MIN_LEN: usize = 4;

/// Snake render codes written into the snapshot board.
///
/// Straight body segments carry the direction they travel, turns are drawn with corner
/// glyphs, and the head/tail use their own sprites.
pub mod glyph {
    pub const BODY_UP: u8 = 9;
    pub const BODY_DOWN: u8 = 10;
    pub const BODY_LEFT: u8 = 11;
    pub const BODY_RIGHT: u8 = 12;

    pub const TURN_RIGHT_UP: u8 = 13;
    pub const TURN_LEFT_UP: u8 = 14;
    pub const TURN_RIGHT_DOWN: u8 = 15;
    pub const TURN_LEFT_DOWN: u8 = 16;

    pub const HEAD_UP: u8 = 18;
    pub const HEAD_DOWN: u8 = 19;
    pub const HEAD_RIGHT: u8 = 20;
    pub const HEAD_LEFT: u8 = 21;

    pub const TAIL_UP: u8 = 22;
    pub const TAIL_DOWN: u8 = 23;
    pub const TAIL_RIGHT: u8 = 24;
    pub const TAIL_LEFT: u8 = 25;

    pub const FOOD: u8 = 26;
}

/// FSM states shared by both games
///
/// Exactly one state is active per game instance. Only the simulation loop writes it;
/// everyone else observes it through a status query or a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Waiting for the first `Start` action
    Start,
    /// Placing a new piece / resetting the snake
    Spawn,
    /// Accepting steering input
    Moving,
    /// Timer-gated forward step
    Shifting,
    /// Committing a landed piece or eaten food
    Attaching,
    /// Waiting for `Start` (restart) or `Terminate`
    GameOver,
    /// Terminal state, workers are stopping
    Exit,
    /// Paused until the next `Pause` action
    Pause,
}

impl GameStatus {
    /// Whether the game has stopped for good
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Exit)
    }

    /// Whether a piece/snake is on the board and should be drawn
    pub fn is_in_play(&self) -> bool {
        !matches!(self, GameStatus::Start | GameStatus::Spawn)
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Start => "start",
            GameStatus::Spawn => "spawn",
            GameStatus::Moving => "moving",
            GameStatus::Shifting => "shifting",
            GameStatus::Attaching => "attaching",
            GameStatus::GameOver => "game_over",
            GameStatus::Exit => "exit",
            GameStatus::Pause => "pause",
        }
    }
}

/// Discrete user actions
///
/// Key-repeat detection happens outside the engine; callers post already-classified
/// actions. `Action` is the secondary button: rotate in Tetris, ignored by Snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserAction {
    Start,
    Pause,
    Terminate,
    Left,
    Right,
    Up,
    Down,
    Action,
}

impl UserAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use brick_game_types::UserAction;
    ///
    /// assert_eq!(UserAction::from_str("Start"), Some(UserAction::Start));
    /// assert_eq!(UserAction::from_str("action"), Some(UserAction::Action));
    /// assert_eq!(UserAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(UserAction::Start),
            "pause" => Some(UserAction::Pause),
            "terminate" => Some(UserAction::Terminate),
            "left" => Some(UserAction::Left),
            "right" => Some(UserAction::Right),
            "up" => Some(UserAction::Up),
            "down" => Some(UserAction::Down),
            "action" => Some(UserAction::Action),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            UserAction::Start => "start",
            UserAction::Pause => "pause",
            UserAction::Terminate => "terminate",
            UserAction::Left => "left",
            UserAction::Right => "right",
            UserAction::Up => "up",
            UserAction::Down => "down",
            UserAction::Action => "action",
        }
    }

    /// Whether this is one of the four arrow directions
    pub fn is_directional(&self) -> bool {
        matches!(
            self,
            UserAction::Left | UserAction::Right | UserAction::Up | UserAction::Down
        )
    }
}

/// An action posted by an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub action: UserAction,
    /// The key behind `action` is being held down
    #[serde(default)]
    pub hold: bool,
}

impl ActionRequest {
    pub fn new(action: UserAction) -> Self {
        Self {
            action,
            hold: false,
        }
    }

    pub fn held(action: UserAction) -> Self {
        Self { action, hold: true }
    }
}

/// The games the engine can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    Tetris,
    Snake,
}

impl GameKind {
    /// Every selectable game, in catalogue order
    pub const ALL: [GameKind; 2] = [GameKind::Tetris, GameKind::Snake];

    /// Catalogue identifier
    pub fn id(&self) -> u32 {
        match self {
            GameKind::Tetris => 1,
            GameKind::Snake => 2,
        }
    }

    /// Look a game up by catalogue identifier
    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            GameKind::Tetris => "Tetris",
            GameKind::Snake => "Snake",
        }
    }

    /// Parse a game name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tetris" => Some(GameKind::Tetris),
            "snake" => Some(GameKind::Snake),
            _ => None,
        }
    }

    /// File name the high score is persisted under
    pub fn score_file(&self) -> &'static str {
        match self {
            GameKind::Tetris => "tetris_score",
            GameKind::Snake => "snake_score",
        }
    }

    /// Default FSM tick interval in milliseconds
    pub fn tick_ms(&self) -> u64 {
        match self {
            GameKind::Tetris => TETRIS_TICK_MS,
            GameKind::Snake => SNAKE_TICK_MS,
        }
    }
}
