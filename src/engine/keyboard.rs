//! On-screen keyboard coloring
//!
//! Each letter's status is the best it has earned across every committed
//! attempt: placed correctly anywhere beats merely appearing in the target,
//! which beats being ruled out. Letters never downgrade.

use super::state::GameState;
use rustc_hash::FxHashMap;

/// Revealed knowledge about one keyboard letter
///
/// Ordered by information value so the best status wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum KeyStatus {
    /// Not part of any committed guess yet
    #[default]
    Unused,
    /// Guessed, and the target does not contain it
    Absent,
    /// Guessed, and the target contains it somewhere
    Present,
    /// Guessed in its correct position at least once
    Correct,
}

/// Compute the status of every guessed letter
///
/// Only committed attempts count; the row being typed reveals nothing.
#[must_use]
pub fn keyboard_status(state: &GameState) -> FxHashMap<char, KeyStatus> {
    let mut statuses: FxHashMap<char, KeyStatus> = FxHashMap::default();
    let target = state.target();

    for row in state.committed_rows() {
        for (position, &letter) in row.iter().enumerate() {
            let status = if target.letter_at(position) == letter {
                KeyStatus::Correct
            } else if target.contains(letter) {
                KeyStatus::Present
            } else {
                KeyStatus::Absent
            };

            let entry = statuses.entry(letter).or_default();
            if status > *entry {
                *entry = status;
            }
        }
    }

    statuses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ScoringPolicy, Word};
    use crate::engine::{Engine, Key};

    fn played(target: &str, guesses: &[&str]) -> GameState {
        let accept: fn(&str) -> bool = |_| true;
        let mut engine = Engine::new(accept, ScoringPolicy::default());
        engine.start_game(Word::new(target).unwrap());
        for guess in guesses {
            for letter in guess.chars() {
                engine.submit_key(Key::Letter(letter));
            }
            engine.submit_key(Key::Enter);
        }
        engine.state().unwrap().clone()
    }

    #[test]
    fn untouched_keyboard_is_empty() {
        let state = played("crane", &[]);
        assert!(keyboard_status(&state).is_empty());
    }

    #[test]
    fn current_row_reveals_nothing() {
        let accept: fn(&str) -> bool = |_| true;
        let mut engine = Engine::new(accept, ScoringPolicy::default());
        engine.start_game(Word::new("crane").unwrap());
        for letter in "slate".chars() {
            engine.submit_key(Key::Letter(letter));
        }
        // Typed but not entered
        assert!(keyboard_status(engine.state().unwrap()).is_empty());
    }

    #[test]
    fn statuses_after_one_guess() {
        let state = played("crane", &["slate"]);
        let statuses = keyboard_status(&state);

        assert_eq!(statuses.get(&'s'), Some(&KeyStatus::Absent));
        assert_eq!(statuses.get(&'l'), Some(&KeyStatus::Absent));
        assert_eq!(statuses.get(&'a'), Some(&KeyStatus::Correct)); // a in place
        assert_eq!(statuses.get(&'t'), Some(&KeyStatus::Absent));
        assert_eq!(statuses.get(&'e'), Some(&KeyStatus::Correct)); // e in place
        assert_eq!(statuses.get(&'z'), None);
    }

    #[test]
    fn status_upgrades_but_never_downgrades() {
        // 'r' misplaced in the first guess, placed correctly in the second
        let state = played("crane", &["berry", "brown"]);
        let statuses = keyboard_status(&state);
        assert_eq!(statuses.get(&'r'), Some(&KeyStatus::Correct));
        // 'e' was only ever misplaced and stays Present
        assert_eq!(statuses.get(&'e'), Some(&KeyStatus::Present));
    }

    #[test]
    fn winning_row_colors_the_keyboard() {
        let state = played("crane", &["crane"]);
        let statuses = keyboard_status(&state);
        for letter in "crane".chars() {
            assert_eq!(statuses.get(&letter), Some(&KeyStatus::Correct));
        }
    }
}
