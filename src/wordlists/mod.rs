//! Word lists for the game
//!
//! Provides the embedded answer pool and allowed-guess list compiled into
//! the binary, plus the [`Lexicon`] dictionary built from them.

mod embedded;
mod lexicon;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use lexicon::Lexicon;

use crate::core::Word;
use rand::prelude::IndexedRandom;

/// Pick a word uniformly from a pool; `None` when the pool is empty
#[must_use]
pub fn pick_from(words: &[Word]) -> Option<Word> {
    words.choose(&mut rand::rng()).cloned()
}

/// Pick a target word uniformly from the embedded answer pool
///
/// # Panics
/// Panics only if the embedded answer list is empty or contains an invalid
/// word, both of which the build script rejects.
#[must_use]
pub fn pick_target() -> Word {
    let choice = ANSWERS
        .choose(&mut rand::rng())
        .expect("embedded answer list is not empty");
    Word::new(*choice).expect("embedded answers are validated at build time")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_subset_of_allowed() {
        let allowed: HashSet<&str> = ALLOWED.iter().copied().collect();
        for &answer in ANSWERS {
            assert!(allowed.contains(answer), "Answer '{answer}' not guessable");
        }
    }

    #[test]
    fn pick_target_returns_an_answer() {
        for _ in 0..10 {
            let word = pick_target();
            assert!(ANSWERS.contains(&word.text()));
        }
    }

    #[test]
    fn pick_from_empty_pool_is_none() {
        assert_eq!(pick_from(&[]), None);
    }

    #[test]
    fn pick_from_singleton_pool() {
        let pool = vec![Word::new("crane").unwrap()];
        assert_eq!(pick_from(&pool), Some(pool[0].clone()));
    }
}
