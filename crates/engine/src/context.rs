//! Shared game state
//!
//! One [`GameContext`] per running game holds everything the FSM reads and writes: status,
//! the pending action, the hold flag, the pause flag and the game itself. It sits behind a
//! single mutex ([`SharedGameState`]) shared by the simulation loop and every caller; the
//! clock timer lives outside it in [`Clock`](brick_game_core::Clock).

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use brick_game_core::types::{ActionRequest, GameStatus, UserAction};
use brick_game_core::{GameInfoSnapshot, Simulation};

#[derive(Debug)]
pub struct GameContext<G> {
    pub(crate) status: GameStatus,
    /// Single slot; a newer action replaces one the loop has not consumed yet
    pub(crate) pending: Option<UserAction>,
    pub(crate) hold: bool,
    pub(crate) paused: bool,
    pub(crate) game: G,
}

pub type SharedGameState<G> = Arc<Mutex<GameContext<G>>>;

impl<G: Simulation> GameContext<G> {
    pub fn new(game: G) -> Self {
        Self {
            status: GameStatus::Start,
            pending: None,
            hold: false,
            paused: false,
            game,
        }
    }

    pub fn shared(game: G) -> SharedGameState<G> {
        Arc::new(Mutex::new(Self::new(game)))
    }

    /// Post an action for the next tick
    pub fn post(&mut self, request: ActionRequest) {
        self.pending = Some(request.action);
        self.hold = request.hold;
    }

    pub fn pending(&self) -> Option<UserAction> {
        self.pending
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Force a status; the runtime uses this to stop a game from outside the loop
    pub fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn snapshot_into(&self, out: &mut GameInfoSnapshot) {
        self.game.snapshot_into(self.status, self.paused, out);
    }

    pub fn snapshot(&self) -> GameInfoSnapshot {
        self.game.snapshot(self.status, self.paused)
    }
}

/// Lock shared state, recovering the data if a worker panicked while holding it
pub fn lock<G>(state: &Mutex<GameContext<G>>) -> MutexGuard<'_, GameContext<G>> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
