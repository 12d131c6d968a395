//! Worker runtime - the clock and simulation threads behind one game
//!
//! [`GameEngine::start`] spawns two named threads and returns at once:
//!
//! - **clock**: sleeps `clock_interval`, then feeds the shift timer, until cancelled
//! - **sim**: takes the state lock, runs one [`tick`], releases it, sleeps
//!   `tick_interval`, until cancelled
//!
//! The simulation loop cancels the shared token as soon as the game reaches `Exit`, which
//! stops the clock on its next wake. [`GameEngine::shutdown`] forces `Exit`, cancels and
//! joins both threads; dropping the engine does the same and logs instead of returning
//! errors.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use brick_game_core::types::{ActionRequest, GameKind, GameStatus};
use brick_game_core::{Clock, GameInfoSnapshot, Simulation};

use crate::config::EngineConfig;
use crate::context::{lock, GameContext, SharedGameState};
use crate::error::{EngineError, Result};
use crate::fsm::tick;

/// Cooperative stop signal shared by a game's workers
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// A running game
pub struct GameEngine<G: Simulation = Box<dyn Simulation>> {
    kind: GameKind,
    state: SharedGameState<G>,
    clock: Arc<Clock>,
    cancel: CancellationToken,
    clock_worker: Option<JoinHandle<()>>,
    sim_worker: Option<JoinHandle<()>>,
}

impl<G: Simulation> GameEngine<G> {
    /// Start both workers for `game`. The game waits in `Start` for a `Start` action.
    pub fn start(game: G, config: &EngineConfig) -> Result<Self> {
        let kind = game.kind();
        let state = GameContext::shared(game);
        let clock = Arc::new(Clock::new());
        let cancel = CancellationToken::new();

        let clock_worker = spawn_clock(
            kind,
            Arc::clone(&clock),
            cancel.clone(),
            config.clock_interval,
        )?;

        let sim_worker = match spawn_sim(
            kind,
            Arc::clone(&state),
            Arc::clone(&clock),
            cancel.clone(),
            config.tick_interval_for(kind),
        ) {
            Ok(handle) => handle,
            Err(e) => {
                cancel.cancel();
                let _ = clock_worker.join();
                return Err(e);
            }
        };

        log::info!("{} started", kind.name());
        Ok(Self {
            kind,
            state,
            clock,
            cancel,
            clock_worker: Some(clock_worker),
            sim_worker: Some(sim_worker),
        })
    }

    pub fn kind(&self) -> GameKind {
        self.kind
    }

    /// Post an action for the next tick
    pub fn submit(&self, request: ActionRequest) {
        lock(&self.state).post(request);
    }

    pub fn status(&self) -> GameStatus {
        lock(&self.state).status()
    }

    /// Consistent copy of the game, taken under the state lock
    pub fn snapshot(&self) -> GameInfoSnapshot {
        lock(&self.state).snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameInfoSnapshot) {
        lock(&self.state).snapshot_into(out);
    }

    /// Whether the workers have been told to stop
    pub fn is_finished(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Run `f` against the locked game state
    pub fn with_state<R>(&self, f: impl FnOnce(&mut GameContext<G>) -> R) -> R {
        f(&mut lock(&self.state))
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Force `Exit`, stop both workers and wait for them
    pub fn shutdown(mut self) -> Result<()> {
        self.stop()
    }

    fn stop(&mut self) -> Result<()> {
        lock(&self.state).set_status(GameStatus::Exit);
        self.cancel.cancel();

        let mut result = Ok(());
        for (name, worker) in [
            ("clock", self.clock_worker.take()),
            ("sim", self.sim_worker.take()),
        ] {
            if let Some(handle) = worker {
                if handle.join().is_err() {
                    result = Err(EngineError::WorkerPanicked(name));
                }
            }
        }
        log::info!("{} stopped", self.kind.name());
        result
    }
}

impl<G: Simulation> Drop for GameEngine<G> {
    fn drop(&mut self) {
        if self.clock_worker.is_none() && self.sim_worker.is_none() {
            return;
        }
        if let Err(e) = self.stop() {
            log::error!("{}: {}", self.kind.name(), e);
        }
    }
}

fn worker_name(kind: GameKind, role: &str) -> String {
    format!("{}-{}", kind.name().to_lowercase(), role)
}

fn spawn_clock(
    kind: GameKind,
    clock: Arc<Clock>,
    cancel: CancellationToken,
    interval: Duration,
) -> Result<JoinHandle<()>> {
    thread::Builder::new()
        .name(worker_name(kind, "clock"))
        .spawn(move || {
            log::debug!("{} clock thread started", kind.name());
            while !cancel.is_cancelled() {
                thread::sleep(interval);
                clock.advance();
            }
            log::debug!("{} clock thread stopped", kind.name());
        })
        .map_err(|source| EngineError::Spawn {
            name: "clock",
            source,
        })
}

fn spawn_sim<G: Simulation>(
    kind: GameKind,
    state: SharedGameState<G>,
    clock: Arc<Clock>,
    cancel: CancellationToken,
    interval: Duration,
) -> Result<JoinHandle<()>> {
    thread::Builder::new()
        .name(worker_name(kind, "sim"))
        .spawn(move || {
            log::debug!("{} simulation thread started", kind.name());
            while !cancel.is_cancelled() {
                {
                    let mut ctx = lock(&state);
                    tick(&mut ctx, &clock);
                    if ctx.status().is_terminal() {
                        cancel.cancel();
                    }
                }
                thread::sleep(interval);
            }
            log::debug!("{} simulation thread stopped", kind.name());
        })
        .map_err(|source| EngineError::Spawn {
            name: "sim",
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use brick_game_core::types::UserAction;
    use brick_game_core::MemoryStore;
    use brick_game_snake::SnakeGame;
    use std::time::Instant;

    fn fast_config() -> EngineConfig {
        EngineConfig::default()
            .with_seed(1)
            .with_intervals(Duration::from_millis(2), Duration::from_millis(2))
    }

    fn wait_for(engine: &GameEngine<SnakeGame>, status: GameStatus) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if engine.status() == status {
                return true;
            }
            thread::sleep(Duration::from_millis(1));
        }
        false
    }

    #[test]
    fn test_cancellation_token() {
        let token = CancellationToken::new();
        let other = token.clone();
        assert!(!other.is_cancelled());
        token.cancel();
        assert!(other.is_cancelled());
    }

    #[test]
    fn test_start_returns_immediately_in_start_state() {
        let game = SnakeGame::with_seed(Box::new(MemoryStore::new()), 1);
        let engine = GameEngine::start(game, &fast_config()).unwrap();
        assert_eq!(engine.status(), GameStatus::Start);
        assert!(!engine.is_finished());
        engine.shutdown().unwrap();
    }

    #[test]
    fn test_terminate_stops_workers() {
        let game = SnakeGame::with_seed(Box::new(MemoryStore::new()), 1);
        let engine = GameEngine::start(game, &fast_config()).unwrap();
        engine.submit(ActionRequest::new(UserAction::Terminate));
        assert!(wait_for(&engine, GameStatus::Exit));

        let deadline = Instant::now() + Duration::from_secs(5);
        while !engine.is_finished() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
        }
        assert!(engine.is_finished());
        engine.shutdown().unwrap();
    }

    #[test]
    fn test_snake_moves_on_its_own() {
        let game = SnakeGame::with_seed(Box::new(MemoryStore::new()), 1);
        let engine = GameEngine::start(game, &fast_config()).unwrap();
        engine.submit(ActionRequest::new(UserAction::Start));
        assert!(wait_for(&engine, GameStatus::Moving));

        let deadline = Instant::now() + Duration::from_secs(5);
        while engine.with_state(|ctx| ctx.game().body().head().col) == 4
            && Instant::now() < deadline
        {
            thread::sleep(Duration::from_millis(1));
        }
        assert!(engine.with_state(|ctx| ctx.game().body().head().col) > 4);
        drop(engine);
    }
}
