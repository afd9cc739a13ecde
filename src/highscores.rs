//! Score history
//!
//! Keeps the top 10 final scores, best first, and reports whether a new score
//! beats every earlier one. Persisted as a JSON array through a
//! [`ScoreStore`].

use serde::{Deserialize, Serialize};

use crate::persistence::{ScoreStore, StorageError};

/// Maximum number of scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// Storage key for the history
pub const STORAGE_KEY: &str = "flip_runner_scores";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreHistory {
    /// Sorted descending
    scores: Vec<u64>,
}

impl ScoreHistory {
    pub fn new() -> Self {
        Self { scores: Vec::new() }
    }

    /// Build from arbitrary scores (sorted and trimmed)
    pub fn from_scores(mut scores: Vec<u64>) -> Self {
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.truncate(MAX_HIGH_SCORES);
        Self { scores }
    }

    pub fn scores(&self) -> &[u64] {
        &self.scores
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn best(&self) -> Option<u64> {
        self.scores.first().copied()
    }

    /// Whether `score` would make the list
    pub fn qualifies(&self, score: u64) -> bool {
        self.scores.len() < MAX_HIGH_SCORES
            || self.scores.last().is_some_and(|&lowest| score > lowest)
    }

    /// Rank a score would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let pos = self.scores.iter().position(|&s| score > s);
        Some(pos.unwrap_or(self.scores.len()) + 1)
    }

    /// Record a final score. Returns true when it is a new best (or the
    /// first score ever recorded).
    pub fn record(&mut self, score: u64) -> bool {
        let is_new_best = self.best().is_none_or(|best| score > best);

        let pos = self
            .scores
            .iter()
            .position(|&s| score > s)
            .unwrap_or(self.scores.len());
        self.scores.insert(pos, score);
        self.scores.truncate(MAX_HIGH_SCORES);

        is_new_best
    }

    /// Load from `store`, falling back to an empty history
    pub fn load(store: &dyn ScoreStore) -> Self {
        match Self::try_load(store) {
            Ok(Some(history)) => {
                log::info!("Loaded {} scores", history.scores.len());
                history
            }
            Ok(None) => {
                log::info!("No score history found, starting fresh");
                Self::new()
            }
            Err(e) => {
                log::warn!("Failed to load score history: {}", e);
                Self::new()
            }
        }
    }

    pub fn try_load(store: &dyn ScoreStore) -> Result<Option<Self>, StorageError> {
        let Some(json) = store.read(STORAGE_KEY)? else {
            return Ok(None);
        };
        let scores: Vec<u64> = serde_json::from_str(&json)?;
        Ok(Some(Self::from_scores(scores)))
    }

    /// Persist to `store`; failures are logged, never fatal
    pub fn save(&self, store: &mut dyn ScoreStore) {
        if let Err(e) = self.try_save(store) {
            log::warn!("Failed to save score history: {}", e);
        }
    }

    pub fn try_save(&self, store: &mut dyn ScoreStore) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.scores)?;
        store.write(STORAGE_KEY, &json)?;
        log::info!("Score history saved ({} entries)", self.scores.len());
        Ok(())
    }
}
