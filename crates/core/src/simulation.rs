//! The contract between the FSM driver and a concrete game.
//!
//! The engine owns the state machine, the clock and the threads; a game only knows how to
//! place itself, react to steering, take one forward step and commit what it landed on.
//! Every hook runs with the game state lock held.

use crate::scoring::ScoreKeeper;
use crate::snapshot::GameInfoSnapshot;
use crate::types::{GameKind, GameStatus, UserAction};

/// Result of one timer-gated forward step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    /// Moved one cell, keep accepting input
    Advanced,
    /// Came to rest for the first time; one more round of input before committing
    Grace,
    /// Ready to commit
    Attach,
    /// The step was impossible and the game is lost
    Crashed,
}

/// Result of committing a landed piece or eaten food
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attach {
    /// Place a fresh piece next
    Spawn,
    /// Carry on moving
    Resume,
    GameOver,
}

pub trait Simulation: Send + 'static {
    fn kind(&self) -> GameKind;

    /// Place a new piece, or put the snake back at its starting pose
    fn spawn(&mut self);

    /// Apply a directional or `Action` input while moving
    fn steer(&mut self, action: UserAction);

    /// Checked after steering: whether the game skips the forward step and commits right
    /// away. `timer_elapsed` reports whether a shift would fire this tick.
    fn lands_early(&mut self, _action: Option<UserAction>, _timer_elapsed: bool) -> bool {
        false
    }

    /// One forward step; only called when the shift timer has elapsed
    fn shift(&mut self) -> Shift;

    fn attach(&mut self) -> Attach;

    /// Clear the board and scores before a restart
    fn restart(&mut self);

    fn scores(&self) -> &ScoreKeeper;

    /// Fill `out` for a renderer. Score fields and pause are filled by the caller.
    fn render_into(&self, status: GameStatus, out: &mut GameInfoSnapshot);

    /// Full snapshot of the game in `status`
    fn snapshot_into(&self, status: GameStatus, paused: bool, out: &mut GameInfoSnapshot) {
        self.render_into(status, out);
        let scores = self.scores();
        out.score = scores.score();
        out.high_score = scores.high_score();
        out.level = scores.level();
        out.speed = scores.speed();
        out.pause = paused;
    }

    fn snapshot(&self, status: GameStatus, paused: bool) -> GameInfoSnapshot {
        let mut out = GameInfoSnapshot::default();
        self.snapshot_into(status, paused, &mut out);
        out
    }
}

impl<S: Simulation + ?Sized> Simulation for Box<S> {
    fn kind(&self) -> GameKind {
        (**self).kind()
    }

    fn spawn(&mut self) {
        (**self).spawn()
    }

    fn steer(&mut self, action: UserAction) {
        (**self).steer(action)
    }

    fn lands_early(&mut self, action: Option<UserAction>, timer_elapsed: bool) -> bool {
        (**self).lands_early(action, timer_elapsed)
    }

    fn shift(&mut self) -> Shift {
        (**self).shift()
    }

    fn attach(&mut self) -> Attach {
        (**self).attach()
    }

    fn restart(&mut self) {
        (**self).restart()
    }

    fn scores(&self) -> &ScoreKeeper {
        (**self).scores()
    }

    fn render_into(&self, status: GameStatus, out: &mut GameInfoSnapshot) {
        (**self).render_into(status, out)
    }
}
