use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use brick_game_core::types::{GameKind, CLOCK_INTERVAL_MS};
use brick_game_core::FileStore;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// How often the clock thread feeds the timer
    pub clock_interval: Duration,
    /// Simulation loop interval; `None` uses each game's own default
    pub tick_interval: Option<Duration>,
    /// Directory holding the high score files
    pub score_dir: PathBuf,
    /// Fixed RNG seed, for reproducible games
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            clock_interval: Duration::from_millis(CLOCK_INTERVAL_MS),
            tick_interval: None,
            score_dir: PathBuf::from("."),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create from environment variables. Unset or unparsable values keep their defaults.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `BRICK_GAME_CLOCK_MS` | 50 |
    /// | `BRICK_GAME_TICK_MS` | per game (Tetris 50, Snake 200) |
    /// | `BRICK_GAME_SCORE_DIR` | `.` |
    /// | `BRICK_GAME_SEED` | random |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let clock_interval = lookup("BRICK_GAME_CLOCK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.clock_interval);

        let tick_interval = lookup("BRICK_GAME_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .map(Duration::from_millis);

        let score_dir = lookup("BRICK_GAME_SCORE_DIR")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) })
            .map(PathBuf::from)
            .unwrap_or(defaults.score_dir);

        let seed = lookup("BRICK_GAME_SEED").and_then(|s| s.trim().parse().ok());

        Self {
            clock_interval,
            tick_interval,
            score_dir,
            seed,
        }
    }

    pub fn with_score_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.score_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_intervals(mut self, clock: Duration, tick: Duration) -> Self {
        self.clock_interval = clock;
        self.tick_interval = Some(tick);
        self
    }

    /// Simulation loop interval for `kind`
    pub fn tick_interval_for(&self, kind: GameKind) -> Duration {
        self.tick_interval
            .unwrap_or_else(|| Duration::from_millis(kind.tick_ms()))
    }

    /// High score file for `kind`
    pub fn score_store(&self, kind: GameKind) -> FileStore {
        FileStore::in_dir(&self.score_dir, kind.score_file())
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = EngineConfig::from_lookup(lookup(&[]));
        assert_eq!(config, EngineConfig::default());
        assert_eq!(
            config.tick_interval_for(GameKind::Snake),
            Duration::from_millis(200)
        );
        assert_eq!(
            config.tick_interval_for(GameKind::Tetris),
            Duration::from_millis(50)
        );
    }

    #[test]
    fn test_parses_values() {
        let config = EngineConfig::from_lookup(lookup(&[
            ("BRICK_GAME_CLOCK_MS", "10"),
            ("BRICK_GAME_TICK_MS", " 20 "),
            ("BRICK_GAME_SCORE_DIR", "/tmp/scores"),
            ("BRICK_GAME_SEED", "99"),
        ]));
        assert_eq!(config.clock_interval, Duration::from_millis(10));
        assert_eq!(
            config.tick_interval_for(GameKind::Snake),
            Duration::from_millis(20)
        );
        assert_eq!(
            config.score_store(GameKind::Tetris).path(),
            Path::new("/tmp/scores/tetris_score")
        );
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = EngineConfig::from_lookup(lookup(&[
            ("BRICK_GAME_CLOCK_MS", "fast"),
            ("BRICK_GAME_TICK_MS", "0"),
            ("BRICK_GAME_SCORE_DIR", "  "),
            ("BRICK_GAME_SEED", "-1"),
        ]));
        assert_eq!(config, EngineConfig::default());
    }
}
