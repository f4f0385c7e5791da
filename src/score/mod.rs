//! Score history: records, aggregation, persistence
//!
//! A finished round produces one [`ScoreRecord`]. Records merge with a
//! persistent store by timestamp identity, so the merge can run as often as
//! the UI likes without duplicating anything. [`ScoreSummary`] derives the
//! score-card numbers from the records alone.

mod record;
mod stats;
mod store;

pub use record::{ScoreRecord, merge_histories, record_result, unix_millis};
pub use stats::ScoreSummary;
pub use store::{DEFAULT_SCORES_PATH, HistoryStore, JsonFileStore, MemoryStore};
