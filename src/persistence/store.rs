use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Storage for the best score across games
pub trait HighScoreStore {
    /// Stored high score, or 0 when missing or unreadable
    fn read(&self) -> u32;

    /// Record a new high score; failures are swallowed
    fn write(&mut self, score: u32);
}

/// High score kept as a plain integer in a text file
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_read(&self) -> Result<u32> {
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read high score from {:?}", self.path))?;
        text.trim()
            .parse()
            .with_context(|| format!("Invalid high score in {:?}", self.path))
    }

    fn try_write(&self, score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }
        std::fs::write(&self.path, score.to_string())
            .with_context(|| format!("Failed to write high score to {:?}", self.path))
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn read(&self) -> u32 {
        if !self.path.exists() {
            return 0;
        }
        match self.try_read() {
            Ok(score) => score,
            Err(e) => {
                warn!("{:#}", e);
                0
            }
        }
    }

    fn write(&mut self, score: u32) {
        match self.try_write(score) {
            Ok(()) => debug!(score, path = ?self.path, "saved high score"),
            Err(e) => warn!("{:#}", e),
        }
    }
}

/// Keeps the high score for the lifetime of the process only
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    score: u32,
}

impl MemoryHighScoreStore {
    pub fn new(score: u32) -> Self {
        Self { score }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn read(&self) -> u32 {
        self.score
    }

    fn write(&mut self, score: u32) {
        self.score = score;
    }
}
