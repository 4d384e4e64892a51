use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Where the best score lives between runs.
pub trait ScoreStore {
    /// Stored best score; 0 when nothing usable is stored. Never fails.
    fn load_best_score(&self) -> u32;

    /// Persist a new best score.
    fn save_best_score(&mut self, score: u32) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct ScoreFile {
    best_score: u32,
}

/// JSON file store, `{"best_score": n}`, replaced atomically on save.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `best_score.json` in the platform's local data directory
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "heart-snake", "HeartSnake")
            .context("could not resolve project directories")?;
        Ok(dirs.data_local_dir().join("best_score.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn load_best_score(&self) -> u32 {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return 0,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "could not read best score file");
                return 0;
            }
        };

        match serde_json::from_str::<ScoreFile>(&raw) {
            Ok(file) => file.best_score,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "ignoring unreadable best score file");
                0
            }
        }
    }

    fn save_best_score(&mut self, score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        let tmp = self.path.with_extension("json.tmp");
        let data = serde_json::to_vec_pretty(&ScoreFile { best_score: score })
            .context("Failed to serialize best score")?;
        fs::write(&tmp, data).with_context(|| format!("Failed to write {:?}", tmp))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace {:?}", self.path))?;
        Ok(())
    }
}

/// Keeps the best score in memory and records every save.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    best: u32,
    saves: Vec<u32>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds `best`, as if saved by an earlier session
    pub fn with_best(best: u32) -> Self {
        Self {
            best,
            saves: Vec::new(),
        }
    }

    /// Every value passed to `save_best_score`, oldest first
    pub fn saves(&self) -> &[u32] {
        &self.saves
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load_best_score(&self) -> u32 {
        self.best
    }

    fn save_best_score(&mut self, score: u32) -> Result<()> {
        self.best = score;
        self.saves.push(score);
        Ok(())
    }
}
