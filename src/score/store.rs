//! Persistent score history
//!
//! Storage is a collaborator, not a dependency: every failure mode (missing
//! file, unreadable file, malformed JSON, failed write) degrades to "no
//! history" with a logged warning, and the game keeps running. Merging is
//! the caller's job ([`super::merge_histories`]); stores only load and save.

use super::record::ScoreRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default history file name
pub const DEFAULT_SCORES_PATH: &str = "wordle_scores.json";

/// Load/save interface for score history
pub trait HistoryStore {
    /// Read the full persisted history; empty on any failure
    fn load(&mut self) -> Vec<ScoreRecord>;

    /// Replace the persisted history; logs and drops the write on failure
    fn save(&mut self, records: &[ScoreRecord]);
}

/// History persisted as a JSON array in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_load(&self) -> anyhow::Result<Vec<ScoreRecord>> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn try_save(&self, records: &[ScoreRecord]) -> anyhow::Result<()> {
        let json = serde_json::to_string(records)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&mut self) -> Vec<ScoreRecord> {
        if !self.path.exists() {
            return Vec::new();
        }
        match self.try_load() {
            Ok(records) => records,
            Err(error) => {
                warn!(
                    path = %self.path.display(),
                    %error,
                    "could not read score history, starting empty"
                );
                Vec::new()
            }
        }
    }

    fn save(&mut self, records: &[ScoreRecord]) {
        if let Err(error) = self.try_save(records) {
            warn!(
                path = %self.path.display(),
                %error,
                "could not write score history"
            );
        }
    }
}

/// Volatile store for tests and history-less runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<ScoreRecord>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }
}

impl HistoryStore for MemoryStore {
    fn load(&mut self) -> Vec<ScoreRecord> {
        self.records.clone()
    }

    fn save(&mut self, records: &[ScoreRecord]) {
        self.records = records.to_vec();
    }
}
