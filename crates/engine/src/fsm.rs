//! The game state machine
//!
//! [`tick`] advances a game by one step of its FSM. It is the whole body of the simulation
//! loop, and tests call it directly to drive a game deterministically.
//!
//! | State | Action | Next |
//! |-------|--------|------|
//! | Start | `Start` | Spawn |
//! | Start, GameOver | `Terminate` | Exit |
//! | Spawn | - | Moving |
//! | Moving | `Pause` | Pause |
//! | Moving | `Terminate` | Exit |
//! | Moving | steering, then the game may land early | Attaching |
//! | Moving | otherwise, falls through in the same tick | Shifting |
//! | Shifting | timer not elapsed, or a plain step | Moving |
//! | Shifting | landed or reached food | Attaching |
//! | Shifting | blocked | GameOver |
//! | Attaching | per game | Spawn, Moving or GameOver |
//! | GameOver | `Start` | Spawn |
//! | Pause | `Pause` | Moving |
//!
//! Anything else leaves the state alone. Start, Moving, GameOver and Pause read input and
//! consume the pending action whether or not they act on it. Spawn and Attaching leave it
//! pending for the next state that does. The hold flag is consumed every tick.

use brick_game_core::types::{GameStatus, UserAction};
use brick_game_core::{Attach, Clock, Shift, Simulation};

use crate::context::GameContext;

/// Run one FSM step
pub fn tick<G: Simulation>(ctx: &mut GameContext<G>, clock: &Clock) {
    let action = match ctx.status {
        GameStatus::Spawn | GameStatus::Shifting | GameStatus::Attaching => None,
        _ => ctx.pending.take(),
    };
    clock.set_hold(std::mem::take(&mut ctx.hold));
    clock.set_speed(ctx.game.scores().speed());

    let before = ctx.status;
    match ctx.status {
        GameStatus::Start => match action {
            Some(UserAction::Start) => ctx.status = GameStatus::Spawn,
            Some(UserAction::Terminate) => ctx.status = GameStatus::Exit,
            _ => {}
        },
        GameStatus::Spawn => {
            ctx.game.spawn();
            ctx.status = GameStatus::Moving;
        }
        GameStatus::Moving => moving(ctx, clock, action),
        GameStatus::Shifting => shifting(ctx, clock),
        GameStatus::Attaching => {
            ctx.status = match ctx.game.attach() {
                Attach::Spawn => GameStatus::Spawn,
                Attach::Resume => GameStatus::Moving,
                Attach::GameOver => GameStatus::GameOver,
            };
        }
        GameStatus::GameOver => match action {
            Some(UserAction::Start) => {
                ctx.game.restart();
                ctx.paused = false;
                ctx.status = GameStatus::Spawn;
            }
            Some(UserAction::Terminate) => ctx.status = GameStatus::Exit,
            _ => {}
        },
        GameStatus::Pause => {
            if action == Some(UserAction::Pause) {
                ctx.paused = false;
                ctx.status = GameStatus::Moving;
            }
        }
        GameStatus::Exit => {}
    }

    if ctx.status != before {
        log::debug!(
            "{}: {} -> {}",
            ctx.game.kind().name(),
            before.as_str(),
            ctx.status.as_str()
        );
        if ctx.status == GameStatus::GameOver {
            log::info!(
                "{} over with {} points",
                ctx.game.kind().name(),
                ctx.game.scores().score()
            );
        }
    }
}

fn moving<G: Simulation>(ctx: &mut GameContext<G>, clock: &Clock, action: Option<UserAction>) {
    match action {
        Some(UserAction::Terminate) => {
            ctx.status = GameStatus::Exit;
            return;
        }
        Some(UserAction::Pause) => {
            ctx.paused = true;
            ctx.status = GameStatus::Pause;
            return;
        }
        Some(steer) if steer.is_directional() || steer == UserAction::Action => {
            ctx.game.steer(steer);
        }
        _ => {}
    }

    if ctx.game.lands_early(action, clock.elapsed()) {
        ctx.status = GameStatus::Attaching;
        return;
    }

    ctx.status = GameStatus::Shifting;
    shifting(ctx, clock);
}

fn shifting<G: Simulation>(ctx: &mut GameContext<G>, clock: &Clock) {
    let game = &mut ctx.game;
    ctx.status = match clock.fire(|| game.shift()) {
        None | Some(Shift::Advanced) | Some(Shift::Grace) => GameStatus::Moving,
        Some(Shift::Attach) => GameStatus::Attaching,
        Some(Shift::Crashed) => GameStatus::GameOver,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use brick_game_core::types::ActionRequest;
    use brick_game_core::MemoryStore;
    use brick_game_snake::SnakeGame;
    use brick_game_tetris::TetrisGame;

    fn tetris() -> GameContext<TetrisGame> {
        GameContext::new(TetrisGame::with_seed(Box::new(MemoryStore::new()), 5))
    }

    fn snake() -> GameContext<SnakeGame> {
        GameContext::new(SnakeGame::with_seed(Box::new(MemoryStore::new()), 5))
    }

    fn press<G: Simulation>(ctx: &mut GameContext<G>, clock: &Clock, action: UserAction) {
        ctx.post(ActionRequest::new(action));
        tick(ctx, clock);
    }

    #[test]
    fn test_start_ignores_other_actions() {
        let clock = Clock::new();
        let mut ctx = tetris();
        press(&mut ctx, &clock, UserAction::Left);
        assert_eq!(ctx.status(), GameStatus::Start);
        press(&mut ctx, &clock, UserAction::Start);
        assert_eq!(ctx.status(), GameStatus::Spawn);
        tick(&mut ctx, &clock);
        assert_eq!(ctx.status(), GameStatus::Moving);
        assert!(ctx.game().piece().is_some());
    }

    #[test]
    fn test_terminate_from_start() {
        let clock = Clock::new();
        let mut ctx = snake();
        press(&mut ctx, &clock, UserAction::Terminate);
        assert_eq!(ctx.status(), GameStatus::Exit);
        press(&mut ctx, &clock, UserAction::Start);
        assert_eq!(ctx.status(), GameStatus::Exit);
    }

    #[test]
    fn test_action_consumed_every_tick() {
        let clock = Clock::new();
        let mut ctx = snake();
        press(&mut ctx, &clock, UserAction::Up);
        assert_eq!(ctx.pending(), None);
        assert_eq!(ctx.status(), GameStatus::Start);
    }

    #[test]
    fn test_level_up_speeds_up_clock() {
        let clock = Clock::new();
        let mut ctx = snake();
        tick(&mut ctx, &clock);
        assert_eq!(clock.speed(), 1);

        // 15 points is level 4, speed 2
        ctx.game_mut().scores_mut().add(15);
        tick(&mut ctx, &clock);
        assert_eq!(clock.speed(), 2);

        clock.advance();
        assert!((clock.value() - 0.150).abs() < 1e-6);
    }

    #[test]
    fn test_shift_waits_for_clock() {
        let clock = Clock::new();
        let mut ctx = snake();
        press(&mut ctx, &clock, UserAction::Start);
        tick(&mut ctx, &clock);

        tick(&mut ctx, &clock);
        assert_eq!(ctx.game().body().head().pos(), (10, 4));

        clock.add(2.0);
        tick(&mut ctx, &clock);
        assert_eq!(ctx.status(), GameStatus::Moving);
        assert_eq!(ctx.game().body().head().pos(), (10, 5));
        assert_eq!(clock.value(), 0.0);
    }

    #[test]
    fn test_hold_reaches_clock_for_one_tick() {
        let clock = Clock::new();
        let mut ctx = snake();
        ctx.post(ActionRequest::held(UserAction::Right));
        tick(&mut ctx, &clock);
        assert!(clock.hold());
        tick(&mut ctx, &clock);
        assert!(!clock.hold());
    }

    #[test]
    fn test_pause_blocks_shift() {
        let clock = Clock::new();
        let mut ctx = snake();
        press(&mut ctx, &clock, UserAction::Start);
        tick(&mut ctx, &clock);
        press(&mut ctx, &clock, UserAction::Pause);
        assert_eq!(ctx.status(), GameStatus::Pause);
        assert!(ctx.is_paused());

        clock.add(2.0);
        press(&mut ctx, &clock, UserAction::Down);
        assert_eq!(ctx.status(), GameStatus::Pause);
        assert_eq!(ctx.game().body().head().pos(), (10, 4));
    }

    #[test]
    fn test_snake_crash_and_restart() {
        let clock = Clock::new();
        let mut ctx = snake();
        press(&mut ctx, &clock, UserAction::Start);
        tick(&mut ctx, &clock);
        ctx.game_mut().set_food((0, 0));

        for _ in 0..6 {
            clock.add(2.0);
            tick(&mut ctx, &clock);
        }
        assert_eq!(ctx.status(), GameStatus::GameOver);

        press(&mut ctx, &clock, UserAction::Left);
        assert_eq!(ctx.status(), GameStatus::GameOver);
        press(&mut ctx, &clock, UserAction::Start);
        assert_eq!(ctx.status(), GameStatus::Spawn);
        tick(&mut ctx, &clock);
        assert_eq!(ctx.game().body().head().pos(), (10, 4));
    }

    #[test]
    fn test_tetris_hard_drop_attaches_then_spawns() {
        let clock = Clock::new();
        let mut ctx = tetris();
        press(&mut ctx, &clock, UserAction::Start);
        tick(&mut ctx, &clock);

        press(&mut ctx, &clock, UserAction::Down);
        assert_eq!(ctx.status(), GameStatus::Attaching);
        tick(&mut ctx, &clock);
        assert_eq!(ctx.status(), GameStatus::Spawn);
        assert_eq!(ctx.game().board().filled_count(), 4);
    }
}
