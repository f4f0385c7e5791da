//! Core domain types for the guessing game
//!
//! Pure types with no I/O: the validated five-letter [`Word`] and the
//! per-position [`Verdict`] scoring used to color tiles and keyboards.

mod verdict;
mod word;

pub use verdict::{ScoringPolicy, Verdict, score_guess};
pub use word::{WORD_LEN, Word, WordError};
