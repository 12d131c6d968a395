//! Grid snake game
//!
//! - [`body`]: head-first segments, forward steps and render glyphs
//! - [`food`]: food placement on free cells
//! - [`game`]: [`SnakeGame`], the [`Simulation`](brick_game_core::Simulation) the engine drives
//!
//! # Example
//!
//! ```
//! use brick_game_core::{MemoryStore, Shift, Simulation};
//! use brick_game_snake::SnakeGame;
//!
//! let mut game = SnakeGame::with_seed(Box::new(MemoryStore::new()), 42);
//! game.spawn();
//!
//! // Three steps right reach the starting food at (10, 7)
//! assert_eq!(game.shift(), Shift::Advanced);
//! assert_eq!(game.shift(), Shift::Advanced);
//! assert_eq!(game.shift(), Shift::Attach);
//! assert_eq!(game.body().len(), 5);
//! ```

pub mod body;
pub mod food;
pub mod game;

pub use body::{Body, Direction, Segment};
pub use game::SnakeGame;
