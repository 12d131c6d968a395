//! Falling-block puzzle game
//!
//! - [`pieces`]: the seven shapes, spawn placement and pivot rotation
//! - [`collision`]: landing, lateral and rotation predicates
//! - [`game`]: [`TetrisGame`], the [`Simulation`](brick_game_core::Simulation) the engine drives
//!
//! # Example
//!
//! ```
//! use brick_game_core::types::{GameStatus, UserAction};
//! use brick_game_core::{MemoryStore, Simulation};
//! use brick_game_tetris::TetrisGame;
//!
//! let mut game = TetrisGame::with_seed(Box::new(MemoryStore::new()), 42);
//! game.spawn();
//! game.steer(UserAction::Down);
//! assert!(game.collides_below());
//!
//! let snapshot = game.snapshot(GameStatus::Moving, false);
//! assert_eq!(snapshot.filled_cells(), 4);
//! assert!(snapshot.has_next());
//! ```

pub mod collision;
pub mod game;
pub mod pieces;

pub use game::TetrisGame;
pub use pieces::{Piece, Shape};
