//! Brick Game (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so binaries and tests can use
//! `brick_game::{core, engine, snake, tetris, types}` while the implementation lives in
//! dedicated crates under `crates/`.

pub use brick_game_core as core;
pub use brick_game_engine as engine;
pub use brick_game_snake as snake;
pub use brick_game_tetris as tetris;
pub use brick_game_types as types;
