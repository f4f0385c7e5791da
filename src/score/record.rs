//! Round results
//!
//! Serialized field names stay camelCase for compatibility with histories
//! written by earlier versions of the game.

use crate::engine::GameState;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Outcome of one finished round
///
/// Immutable once created. The timestamp doubles as the identity key when
/// merging with persisted history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub won: bool,
    /// Epoch milliseconds at the moment the round ended
    pub timestamp: i64,
    /// Number of guesses used, 1..=6 (a loss always records 6)
    pub guess_count: u8,
}

/// Current wall-clock time as epoch milliseconds
///
/// A clock set before 1970 yields 0 rather than an error; score timestamps
/// only need to be monotonic enough to act as identity keys.
#[must_use]
pub fn unix_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}

/// Produce the score entry for a finished round
///
/// Returns `None` while the round is still in progress; the engine calls
/// this exactly once, at the transition that ends the round.
#[must_use]
pub fn record_result(state: &GameState, timestamp: i64) -> Option<ScoreRecord> {
    if !state.over() {
        return None;
    }
    Some(ScoreRecord {
        won: state.won(),
        timestamp,
        guess_count: (state.current_attempt() + 1) as u8,
    })
}

/// Merge two histories, de-duplicating by timestamp
///
/// The result is sorted oldest-first. Idempotent: merging the same records
/// any number of times yields each of them once, which gives the
/// at-least-once persistence path its safety.
#[must_use]
pub fn merge_histories(a: &[ScoreRecord], b: &[ScoreRecord]) -> Vec<ScoreRecord> {
    let mut seen: FxHashSet<i64> = FxHashSet::default();
    let mut merged: Vec<ScoreRecord> = a
        .iter()
        .chain(b.iter())
        .filter(|record| seen.insert(record.timestamp))
        .copied()
        .collect();
    merged.sort_by_key(|record| record.timestamp);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(won: bool, timestamp: i64, guess_count: u8) -> ScoreRecord {
        ScoreRecord {
            won,
            timestamp,
            guess_count,
        }
    }

    #[test]
    fn merge_is_idempotent() {
        let history = vec![record(true, 100, 3), record(false, 200, 6)];
        let once = merge_histories(&history, &history);
        let twice = merge_histories(&once, &history);

        assert_eq!(once, history);
        assert_eq!(twice, history);
    }

    #[test]
    fn merge_unions_and_sorts_by_timestamp() {
        let stored = vec![record(true, 300, 4), record(true, 100, 2)];
        let session = vec![record(false, 200, 6)];

        let merged = merge_histories(&stored, &session);
        let timestamps: Vec<i64> = merged.iter().map(|r| r.timestamp).collect();
        assert_eq!(timestamps, vec![100, 200, 300]);
    }

    #[test]
    fn merge_keeps_first_record_for_duplicate_timestamp() {
        let a = vec![record(true, 100, 3)];
        let b = vec![record(false, 100, 6)];

        let merged = merge_histories(&a, &b);
        assert_eq!(merged, a);
    }

    #[test]
    fn serde_round_trip_uses_camel_case() {
        let original = record(true, 1_700_000_000_000, 4);
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains("guessCount"));

        let parsed: ScoreRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
