//! Best-score tracking and persistence
//!
//! The best score is loaded once when a [`BestScore`] is built and written
//! back through its [`ScoreStore`] the moment a game beats it. Storage
//! problems never reach the game: unreadable files count as 0 and failed
//! writes are logged.

pub mod store;

pub use store::{FileScoreStore, MemoryScoreStore, ScoreStore};

use tracing::{info, warn};

/// Session-wide best score backed by a store
#[derive(Debug)]
pub struct BestScore<S: ScoreStore> {
    value: u32,
    store: S,
}

impl<S: ScoreStore> BestScore<S> {
    pub fn load(store: S) -> Self {
        let value = store.load_best_score();
        Self { value, store }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Record `score`; persists and returns true only if it beats the best.
    pub fn offer(&mut self, score: u32) -> bool {
        if score <= self.value {
            return false;
        }

        self.value = score;
        match self.store.save_best_score(score) {
            Ok(()) => info!(best_score = score, "new best score"),
            Err(err) => warn!(best_score = score, "failed to save best score: {err:#}"),
        }
        true
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
