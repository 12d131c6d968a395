//! Session - one selectable game at a time
//!
//! A [`Session`] is what a transport or menu talks to. It lists the catalogue, starts the
//! selected game and forwards actions and queries to it. Asking anything of a session with
//! no game running is an error ([`EngineError::NotStarted`]) rather than a status, so
//! "nothing selected" never looks like a finished game.

use brick_game_core::types::{ActionRequest, GameKind, GameStatus, UserAction};
use brick_game_core::{GameInfoSnapshot, Simulation};
use brick_game_snake::SnakeGame;
use brick_game_tetris::TetrisGame;
use serde::Serialize;

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::runtime::GameEngine;

/// Catalogue entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameInfo {
    pub id: u32,
    pub name: &'static str,
}

/// Every game a session can start
pub fn available_games() -> Vec<GameInfo> {
    GameKind::ALL
        .iter()
        .map(|kind| GameInfo {
            id: kind.id(),
            name: kind.name(),
        })
        .collect()
}

/// Build a game with its high score file and RNG from `config`
pub fn new_game(kind: GameKind, config: &EngineConfig) -> Box<dyn Simulation> {
    let store = Box::new(config.score_store(kind));
    match kind {
        GameKind::Tetris => Box::new(TetrisGame::new(store, config.rng())),
        GameKind::Snake => Box::new(SnakeGame::new(store, config.rng())),
    }
}

pub struct Session {
    config: EngineConfig,
    current: Option<GameEngine>,
}

impl Session {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            current: None,
        }
    }

    /// Start game `id`. Fails while another game is still running.
    pub fn select(&mut self, id: u32) -> Result<GameKind> {
        let kind = GameKind::from_id(id).ok_or(EngineError::UnknownGame(id))?;

        if let Some(engine) = &self.current {
            if !engine.is_finished() {
                return Err(EngineError::Conflict);
            }
        }
        self.close()?;

        let engine = GameEngine::start(new_game(kind, &self.config), &self.config)?;
        self.current = Some(engine);
        Ok(kind)
    }

    /// The running game, if any
    pub fn current(&self) -> Option<GameKind> {
        self.current.as_ref().map(GameEngine::kind)
    }

    fn engine(&self) -> Result<&GameEngine> {
        self.current.as_ref().ok_or(EngineError::NotStarted)
    }

    /// Forward an action. `Terminate` also stops the game and frees the session.
    pub fn submit(&mut self, request: ActionRequest) -> Result<()> {
        self.engine()?.submit(request);
        if request.action == UserAction::Terminate {
            self.close()?;
        }
        Ok(())
    }

    pub fn status(&self) -> Result<GameStatus> {
        Ok(self.engine()?.status())
    }

    pub fn snapshot(&self) -> Result<GameInfoSnapshot> {
        Ok(self.engine()?.snapshot())
    }

    /// Stop the current game, if any
    pub fn close(&mut self) -> Result<()> {
        match self.current.take() {
            Some(engine) => engine.shutdown(),
            None => Ok(()),
        }
    }
}
