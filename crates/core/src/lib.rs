//! Core game building blocks - pure, deterministic, and testable
//!
//! Everything both games share lives here. It has **no dependencies** on rendering,
//! networking or threads, so each piece can be exercised directly from a test:
//!
//! - **Deterministic**: games draw randomness from a seeded RNG owned by the game
//! - **Testable**: every rule is a plain function or a small struct
//! - **Fixed-size**: boards and masks are arrays; the tick path does not allocate
//!
//! # Module Structure
//!
//! - [`board`]: 20x10 grid of cell codes with row clearing
//! - [`clock`]: the shift timer fed by the clock thread
//! - [`scoring`]: points, levels and speed through [`ScoreKeeper`]
//! - [`high_score`]: best-effort high score persistence
//! - [`snapshot`]: the render-ready [`GameInfoSnapshot`]
//! - [`simulation`]: the [`Simulation`] trait games implement for the FSM driver
//!
//! # Example
//!
//! ```
//! use brick_game_core::{MemoryStore, ScoreKeeper, ScoreRules};
//!
//! let mut scores = ScoreKeeper::new(ScoreRules::LineClears, Box::new(MemoryStore::new()));
//! scores.add(300);
//! scores.add(300);
//!
//! assert_eq!(scores.score(), 600);
//! assert_eq!(scores.level(), 2);
//! assert_eq!(scores.high_score(), 600);
//! ```

pub mod board;
pub mod clock;
pub mod high_score;
pub mod scoring;
pub mod simulation;
pub mod snapshot;

pub use brick_game_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::{timer_step, Clock};
pub use high_score::{FileStore, HighScoreStore, MemoryStore};
pub use scoring::{
    level_for_score, line_clear_points, speed_for_level, ScoreKeeper, ScoreRules,
};
pub use simulation::{Attach, Shift, Simulation};
pub use snapshot::{GameInfoSnapshot, Grid, Mask, EMPTY_GRID, EMPTY_MASK};
