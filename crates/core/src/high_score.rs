//! High score persistence
//!
//! Each game keeps its best score in a small text file holding a single decimal integer.
//! Persistence is best effort: a missing or unreadable file loads as `0`, and a failed
//! write is logged and otherwise ignored so a read-only working directory never stops a
//! game.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

/// Where a game's high score lives
pub trait HighScoreStore: Send + fmt::Debug {
    /// Load the persisted high score, `0` when nothing usable is stored
    fn load(&self) -> u32;

    /// Persist a new high score
    fn save(&self, score: u32);
}

/// Plain text file holding one decimal integer
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `dir/file_name`
    pub fn in_dir(dir: impl AsRef<Path>, file_name: &str) -> Self {
        Self::new(dir.as_ref().join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_load(&self) -> Result<Option<u32>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()))
            }
        };
        let score = text
            .trim()
            .parse::<u32>()
            .with_context(|| format!("parsing high score in {}", self.path.display()))?;
        Ok(Some(score))
    }

    fn try_save(&self, score: u32) -> Result<()> {
        fs::write(&self.path, score.to_string())
            .with_context(|| format!("writing {}", self.path.display()))
    }
}

impl HighScoreStore for FileStore {
    fn load(&self) -> u32 {
        match self.try_load() {
            Ok(Some(score)) => score,
            Ok(None) => {
                log::debug!("no high score at {}, starting from 0", self.path.display());
                0
            }
            Err(e) => {
                log::warn!("ignoring high score file: {e:#}");
                0
            }
        }
    }

    fn save(&self, score: u32) {
        if let Err(e) = self.try_save(score) {
            log::warn!("high score not persisted: {e:#}");
        }
    }
}

/// In-memory store; clones share the same value
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Arc<AtomicU32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: u32) -> Self {
        Self {
            value: Arc::new(AtomicU32::new(score)),
        }
    }

    pub fn get(&self) -> u32 {
        self.value.load(Ordering::Relaxed)
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u32 {
        self.get()
    }

    fn save(&self, score: u32) {
        self.value.store(score, Ordering::Relaxed);
    }
}
