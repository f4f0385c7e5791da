//! Formatting utilities for terminal output

use crate::core::{Verdict, WORD_LEN};

/// Format a verdict row as an emoji string
///
/// # Examples
/// ```
/// use wordle_play::core::Verdict::{Absent, Correct, Present};
/// use wordle_play::output::formatters::verdicts_to_emoji;
///
/// let row = [Correct, Present, Absent, Absent, Correct];
/// assert_eq!(verdicts_to_emoji(&row), "🟩🟨⬜⬜🟩");
/// ```
#[must_use]
pub fn verdicts_to_emoji(verdicts: &[Verdict; WORD_LEN]) -> String {
    verdicts
        .iter()
        .map(|verdict| match verdict {
            Verdict::Correct => '🟩',
            Verdict::Present => '🟨',
            Verdict::Absent => '⬜',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
