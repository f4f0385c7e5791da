//! Per-letter guess feedback
//!
//! Scoring a guess against the target yields one [`Verdict`] per position.
//! Two duplicate-letter policies exist:
//!
//! - [`ScoringPolicy::Containment`] (default): a position is `Correct` on an
//!   exact match, otherwise `Present` whenever the target contains the letter
//!   anywhere. Repeated letters can be credited more often than they occur in
//!   the target. This is the classic tile-coloring behavior this game ships
//!   with.
//! - [`ScoringPolicy::Canonical`]: multiplicity-aware scoring. Exact matches
//!   are marked first and consume the target's letter pool; the remaining pool
//!   is then distributed left-to-right as `Present`.

use super::{WORD_LEN, Word};

/// Feedback for one letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Letter does not count toward the target
    Absent,
    /// Letter is in the target but not at this position
    Present,
    /// Letter is in the target at exactly this position
    Correct,
}

impl Verdict {
    /// Check whether this verdict reveals the letter as part of the target
    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Present | Self::Correct)
    }
}

/// Duplicate-letter handling for [`score_guess`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringPolicy {
    /// Containment test per position; duplicates may be over-credited
    #[default]
    Containment,
    /// Two-pass scoring that consumes target letter counts
    Canonical,
}

impl ScoringPolicy {
    /// Parse a policy from a CLI-style name, defaulting to containment
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "canonical" | "strict" => Self::Canonical,
            _ => Self::Containment,
        }
    }
}

/// Score a full guess against the target word
///
/// # Examples
/// ```
/// use wordle_play::core::{ScoringPolicy, Verdict, Word, score_guess};
///
/// let target = Word::new("crane").unwrap();
/// let guess = Word::new("trace").unwrap();
/// let verdicts = score_guess(guess.letters(), &target, ScoringPolicy::Containment);
///
/// assert_eq!(
///     verdicts,
///     [
///         Verdict::Absent,  // t
///         Verdict::Correct, // r
///         Verdict::Correct, // a
///         Verdict::Present, // c
///         Verdict::Correct, // e
///     ]
/// );
/// ```
#[must_use]
pub fn score_guess(
    guess: &[char; WORD_LEN],
    target: &Word,
    policy: ScoringPolicy,
) -> [Verdict; WORD_LEN] {
    match policy {
        ScoringPolicy::Containment => score_containment(guess, target),
        ScoringPolicy::Canonical => score_canonical(guess, target),
    }
}

fn score_containment(guess: &[char; WORD_LEN], target: &Word) -> [Verdict; WORD_LEN] {
    let mut result = [Verdict::Absent; WORD_LEN];

    for (i, &letter) in guess.iter().enumerate() {
        if target.letter_at(i) == letter {
            result[i] = Verdict::Correct;
        } else if target.contains(letter) {
            result[i] = Verdict::Present;
        }
    }

    result
}

fn score_canonical(guess: &[char; WORD_LEN], target: &Word) -> [Verdict; WORD_LEN] {
    let mut result = [Verdict::Absent; WORD_LEN];
    let mut available = target.letter_counts();

    // First pass: exact matches consume the letter pool
    for (i, &letter) in guess.iter().enumerate() {
        if target.letter_at(i) == letter {
            result[i] = Verdict::Correct;
            if let Some(count) = available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: distribute what's left as Present
    for (i, &letter) in guess.iter().enumerate() {
        if result[i] == Verdict::Absent
            && let Some(count) = available.get_mut(&letter)
            && *count > 0
        {
            result[i] = Verdict::Present;
            *count -= 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Verdict::{Absent, Correct, Present};

    fn letters(s: &str) -> [char; WORD_LEN] {
        let mut out = ['\0'; WORD_LEN];
        for (i, c) in s.chars().enumerate() {
            out[i] = c;
        }
        out
    }

    #[test]
    fn exact_match_is_all_correct_under_both_policies() {
        let target = Word::new("crane").unwrap();
        for policy in [ScoringPolicy::Containment, ScoringPolicy::Canonical] {
            assert_eq!(
                score_guess(&letters("crane"), &target, policy),
                [Correct; WORD_LEN]
            );
        }
    }

    #[test]
    fn disjoint_letters_are_all_absent() {
        let target = Word::new("crane").unwrap();
        for policy in [ScoringPolicy::Containment, ScoringPolicy::Canonical] {
            assert_eq!(
                score_guess(&letters("moist"), &target, policy),
                [Absent; WORD_LEN]
            );
        }
    }

    #[test]
    fn trace_against_crane() {
        let target = Word::new("crane").unwrap();
        let verdicts = score_guess(&letters("trace"), &target, ScoringPolicy::Containment);
        assert_eq!(verdicts, [Absent, Correct, Correct, Present, Correct]);

        // Same outcome canonically: no duplicate letters involved
        let strict = score_guess(&letters("trace"), &target, ScoringPolicy::Canonical);
        assert_eq!(strict, verdicts);
    }

    #[test]
    fn canonical_consumes_duplicates() {
        // SPEED vs ERASE: both E's yellow, S yellow, P and D gray
        let target = Word::new("erase").unwrap();
        let verdicts = score_guess(&letters("speed"), &target, ScoringPolicy::Canonical);
        assert_eq!(verdicts, [Present, Absent, Present, Present, Absent]);
    }

    #[test]
    fn canonical_green_takes_priority_over_yellow() {
        // ROBOT vs FLOOR: first O yellow, second O green
        let target = Word::new("floor").unwrap();
        let verdicts = score_guess(&letters("robot"), &target, ScoringPolicy::Canonical);
        assert_eq!(verdicts, [Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn containment_over_credits_duplicates() {
        // GEESE vs THOSE has one E; containment credits all three
        let target = Word::new("those").unwrap();

        let lenient = score_guess(&letters("geese"), &target, ScoringPolicy::Containment);
        assert_eq!(lenient, [Absent, Present, Present, Correct, Correct]);

        let strict = score_guess(&letters("geese"), &target, ScoringPolicy::Canonical);
        assert_eq!(strict, [Absent, Absent, Absent, Correct, Correct]);
    }

    #[test]
    fn policy_from_name() {
        assert_eq!(
            ScoringPolicy::from_name("canonical"),
            ScoringPolicy::Canonical
        );
        assert_eq!(
            ScoringPolicy::from_name("CONTAINMENT"),
            ScoringPolicy::Containment
        );
        assert_eq!(
            ScoringPolicy::from_name("anything-else"),
            ScoringPolicy::Containment
        );
    }

    #[test]
    fn verdict_is_hit() {
        assert!(Correct.is_hit());
        assert!(Present.is_hit());
        assert!(!Absent.is_hit());
    }
}
