//! Game engine - runs games on background threads
//!
//! Each running game gets a [`GameEngine`]: a shared [`GameContext`] behind one mutex, a
//! clock thread feeding the shift timer, and a simulation thread driving the FSM in
//! [`fsm::tick`]. Callers post actions and read snapshots from any thread; both calls take
//! the state lock briefly and never wait on the workers.
//!
//! # Module Structure
//!
//! - [`context`]: the shared state a game's threads and callers agree on
//! - [`fsm`]: one step of the game state machine
//! - [`runtime`]: worker threads, cancellation and teardown
//! - [`session`]: the game catalogue and one-game-at-a-time selection
//! - [`config`]: environment-driven settings
//! - [`error`]: [`EngineError`]
//!
//! # Example
//!
//! ```no_run
//! use brick_game_core::types::{ActionRequest, UserAction};
//! use brick_game_engine::{EngineConfig, Session};
//!
//! let mut session = Session::new(EngineConfig::from_env());
//! session.select(1)?; // Tetris
//! session.submit(ActionRequest::new(UserAction::Start))?;
//!
//! let snapshot = session.snapshot()?;
//! println!("score {}", snapshot.score);
//!
//! session.submit(ActionRequest::new(UserAction::Terminate))?;
//! # Ok::<(), brick_game_engine::EngineError>(())
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod fsm;
pub mod runtime;
pub mod session;

pub use config::EngineConfig;
pub use context::{GameContext, SharedGameState};
pub use error::{EngineError, Result};
pub use runtime::{CancellationToken, GameEngine};
pub use session::{available_games, new_game, GameInfo, Session};
