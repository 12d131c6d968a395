use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to spawn the {name} worker")]
    Spawn {
        name: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("the {0} worker panicked")]
    WorkerPanicked(&'static str),

    #[error("Game already exists")]
    Conflict,

    #[error("no game with id {0}")]
    UnknownGame(u32),

    #[error("no game has been started")]
    NotStarted,
}

pub type Result<T> = std::result::Result<T, EngineError>;
