//! Scoring module - points, levels and speed
//!
//! Both games share the same progression:
//!
//! - The level follows the score: one level per `points_per_level` points, starting at 1
//!   and capped at [`MAX_LEVEL`].
//! - Speed rises by one on every even level above 2, so speed is `level / 2` (minimum 1).
//! - The high score is raised and persisted the moment the score passes it.
//!
//! | Game | Points | Points per level |
//! |------|--------|------------------|
//! | Tetris | 100 / 300 / 700 / 1500 for 1-4 cleared rows | 600 |
//! | Snake | 1 per food | 5 |

use crate::high_score::HighScoreStore;
use crate::types::MAX_LEVEL;

/// Points awarded for clearing 0-4 rows at once
pub const LINE_CLEAR_POINTS: [u32; 5] = [0, 100, 300, 700, 1500];

/// Points for a single attach that cleared `lines` rows
pub fn line_clear_points(lines: usize) -> u32 {
    LINE_CLEAR_POINTS.get(lines).copied().unwrap_or(0)
}

/// Level reached with `score` points
pub fn level_for_score(score: u32, points_per_level: u32) -> u32 {
    (1 + score / points_per_level.max(1)).min(MAX_LEVEL)
}

/// Speed at `level`
pub fn speed_for_level(level: u32) -> u32 {
    (level / 2).max(1)
}

/// How a game earns levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreRules {
    /// Tetris: row clears, 600 points per level
    LineClears,
    /// Snake: one point per food, 5 points per level
    Food,
}

impl ScoreRules {
    pub fn points_per_level(&self) -> u32 {
        match self {
            ScoreRules::LineClears => 600,
            ScoreRules::Food => 5,
        }
    }
}

/// Score, level and speed for one game, plus its persisted high score
#[derive(Debug)]
pub struct ScoreKeeper {
    rules: ScoreRules,
    score: u32,
    high_score: u32,
    level: u32,
    speed: u32,
    store: Box<dyn HighScoreStore>,
}

impl ScoreKeeper {
    /// Create a keeper and load the high score from `store`
    pub fn new(rules: ScoreRules, store: Box<dyn HighScoreStore>) -> Self {
        let high_score = store.load();
        Self {
            rules,
            score: 0,
            high_score,
            level: 1,
            speed: 1,
            store,
        }
    }

    /// Add points. Returns `true` if the level changed.
    pub fn add(&mut self, points: u32) -> bool {
        if points == 0 {
            return false;
        }
        self.score = self.score.saturating_add(points);

        if self.score > self.high_score {
            self.high_score = self.score;
            self.store.save(self.high_score);
        }

        let level = level_for_score(self.score, self.rules.points_per_level());
        if level == self.level {
            return false;
        }
        self.level = level;
        self.speed = speed_for_level(level);
        log::debug!("level {} reached, speed {}", self.level, self.speed);
        true
    }

    /// Back to score 0, level 1, speed 1. The high score is kept.
    pub fn reset(&mut self) {
        self.score = 0;
        self.level = 1;
        self.speed = 1;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }
}
