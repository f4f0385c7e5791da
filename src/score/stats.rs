//! Score-card aggregation
//!
//! Everything here is re-derived from the record history on demand; there
//! are no running counters to drift out of sync with the store.

use super::record::ScoreRecord;
use crate::engine::MAX_ATTEMPTS;

/// Display statistics for a score history
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreSummary {
    /// Total finished rounds
    pub played: usize,
    /// Rounds won
    pub wins: usize,
    /// `round(wins / played * 100)`, 0 when nothing has been played
    pub win_pct: u32,
    /// Consecutive wins counting back from the most recent round
    pub current_streak: usize,
    /// Longest run of consecutive wins anywhere in the history
    pub max_streak: usize,
    /// Finished rounds per guess count; index 0 holds one-guess rounds
    pub distribution: [usize; MAX_ATTEMPTS],
}

impl ScoreSummary {
    /// Aggregate a record history
    ///
    /// Records may arrive in any order (merged histories interleave
    /// sessions); streaks are computed over timestamp order.
    #[must_use]
    pub fn from_records(records: &[ScoreRecord]) -> Self {
        let mut ordered: Vec<&ScoreRecord> = records.iter().collect();
        ordered.sort_by_key(|record| record.timestamp);

        let played = ordered.len();
        let wins = ordered.iter().filter(|record| record.won).count();
        let win_pct = if played == 0 {
            0
        } else {
            ((wins as f64 / played as f64) * 100.0).round() as u32
        };

        let current_streak = ordered
            .iter()
            .rev()
            .take_while(|record| record.won)
            .count();

        let mut max_streak = 0;
        let mut run = 0;
        for record in &ordered {
            if record.won {
                run += 1;
                max_streak = max_streak.max(run);
            } else {
                run = 0;
            }
        }

        let mut distribution = [0usize; MAX_ATTEMPTS];
        for record in &ordered {
            let count = usize::from(record.guess_count);
            if (1..=MAX_ATTEMPTS).contains(&count) {
                distribution[count - 1] += 1;
            }
        }

        Self {
            played,
            wins,
            win_pct,
            current_streak,
            max_streak,
            distribution,
        }
    }

    /// The guess count (1-based) with the most rounds, for bar scaling
    ///
    /// Ties resolve to the lower guess count. `None` when nothing has been
    /// played.
    #[must_use]
    pub fn tallest_bucket(&self) -> Option<usize> {
        let max = *self.distribution.iter().max()?;
        if max == 0 {
            return None;
        }
        self.distribution
            .iter()
            .position(|&count| count == max)
            .map(|index| index + 1)
    }
}
