//! Headless game runner (default binary).
//!
//! Starts one game, feeds it a scripted input sequence and logs snapshots while it runs.
//! Useful as a smoke test for the engine without a renderer:
//!
//! ```text
//! brick-game [tetris|snake] [steps]
//! RUST_LOG=debug brick-game snake 60
//! ```

use std::env;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use brick_game::core::GameInfoSnapshot;
use brick_game::engine::{available_games, EngineConfig, Session};
use brick_game::types::{ActionRequest, GameKind, GameStatus, UserAction};

const DEFAULT_STEPS: usize = 40;

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut args = env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "tetris".to_string());
    let kind = GameKind::from_str(&name).ok_or_else(|| {
        let names: Vec<_> = available_games().iter().map(|g| g.name).collect();
        anyhow!("unknown game '{}', expected one of {:?}", name, names)
    })?;
    let steps = args
        .next()
        .map(|s| s.parse::<usize>())
        .transpose()
        .context("steps must be a number")?
        .unwrap_or(DEFAULT_STEPS);

    let config = EngineConfig::from_env();
    log::info!(
        "running {} for {} steps (scores in {})",
        kind.name(),
        steps,
        config.score_dir.display()
    );

    let mut session = Session::new(config);
    session.select(kind.id())?;
    run(&mut session, kind, steps)?;
    session.submit(ActionRequest::new(UserAction::Terminate))?;
    Ok(())
}

fn run(session: &mut Session, kind: GameKind, steps: usize) -> Result<()> {
    session.submit(ActionRequest::new(UserAction::Start))?;

    let pace = Duration::from_millis(kind.tick_ms() * 2);
    for (step, &request) in script(kind).iter().cycle().take(steps).enumerate() {
        thread::sleep(pace);

        let status = session.status()?;
        if status == GameStatus::GameOver {
            log::info!("game over after {} steps", step);
            break;
        }
        session.submit(request)?;

        if step % 10 == 0 {
            log_snapshot(status, &session.snapshot()?);
        }
    }

    log_snapshot(session.status()?, &session.snapshot()?);
    Ok(())
}

/// Input loop for each game
fn script(kind: GameKind) -> Vec<ActionRequest> {
    use UserAction::*;

    let actions: &[UserAction] = match kind {
        GameKind::Tetris => &[Left, Action, Left, Down, Right, Right, Action, Down],
        GameKind::Snake => &[Down, Left, Up, Right, Up, Left, Down, Right],
    };
    actions
        .iter()
        .map(|&action| ActionRequest::new(action))
        .collect()
}

fn log_snapshot(status: GameStatus, snapshot: &GameInfoSnapshot) {
    log::info!(
        "{} | score {} (best {}) level {} speed {}{}",
        status.as_str(),
        snapshot.score,
        snapshot.high_score,
        snapshot.level,
        snapshot.speed,
        if snapshot.pause { " paused" } else { "" }
    );
    for row in snapshot.board.iter() {
        let line: String = row
            .iter()
            .map(|&cell| if cell == 0 { '.' } else { '#' })
            .collect();
        log::debug!("{}", line);
    }
}
