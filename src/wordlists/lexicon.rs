//! Dictionary predicate over a word set

use crate::engine::Dictionary;
use rustc_hash::FxHashSet;

/// A set of legal guess words
///
/// Implements the engine's [`Dictionary`] so the game can ask "is this a
/// real word?" with one hash lookup.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: FxHashSet<String>,
}

impl Lexicon {
    /// Build the lexicon from the embedded allowed-guess list
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(super::ALLOWED.iter().copied())
    }

    /// Build a lexicon from arbitrary words (normalized to lowercase)
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for Lexicon {
    fn is_valid_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let lexicon = Lexicon::from_words(["crane", "SLATE"]);
        assert!(lexicon.is_valid_word("crane"));
        assert!(lexicon.is_valid_word("CRANE"));
        assert!(lexicon.is_valid_word("slate"));
        assert!(!lexicon.is_valid_word("zzzzz"));
    }

    #[test]
    fn embedded_lexicon_accepts_every_answer() {
        let lexicon = Lexicon::embedded();
        assert!(!lexicon.is_empty());
        for &answer in super::super::ANSWERS {
            assert!(lexicon.is_valid_word(answer));
        }
    }
}
