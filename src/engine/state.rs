//! Round state
//!
//! One [`GameState`] covers a single round: the target word, six guess
//! buffers, and the win/over flags. Mutation goes through `pub(crate)`
//! methods so only the engine's transition function can touch it, and only
//! ever the current attempt's buffer. Completed attempts are immutable
//! history.

use crate::core::{ScoringPolicy, Verdict, WORD_LEN, Word, score_guess};

/// Maximum number of attempts per round
pub const MAX_ATTEMPTS: usize = 6;

/// Identity of one invalid-word flash
///
/// Issued when a guess is rejected by the dictionary and required to clear
/// the flag again. The round id makes tokens from a previous round inert, so
/// a deferred clear that fires after "new game" is a harmless no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShakeToken {
    pub(crate) round: u64,
    pub(crate) attempt: usize,
}

impl ShakeToken {
    /// The attempt index that was rejected
    #[inline]
    #[must_use]
    pub const fn attempt(self) -> usize {
        self.attempt
    }
}

/// In-memory state of a single round
#[derive(Debug, Clone)]
pub struct GameState {
    target: Word,
    guesses: [Vec<char>; MAX_ATTEMPTS],
    current_attempt: usize,
    won: bool,
    over: bool,
    invalid_attempt: Option<ShakeToken>,
}

impl GameState {
    pub(crate) fn new(target: Word) -> Self {
        Self {
            target,
            guesses: std::array::from_fn(|_| Vec::with_capacity(WORD_LEN)),
            current_attempt: 0,
            won: false,
            over: false,
            invalid_attempt: None,
        }
    }

    /// The word being guessed
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Zero-based index of the attempt currently accepting input
    #[inline]
    #[must_use]
    pub const fn current_attempt(&self) -> usize {
        self.current_attempt
    }

    #[inline]
    #[must_use]
    pub const fn won(&self) -> bool {
        self.won
    }

    #[inline]
    #[must_use]
    pub const fn over(&self) -> bool {
        self.over
    }

    /// Attempt index flagged by a rejected guess, if the flash is live
    #[inline]
    #[must_use]
    pub fn invalid_attempt(&self) -> Option<usize> {
        self.invalid_attempt.map(ShakeToken::attempt)
    }

    /// Letters typed so far for the given attempt
    ///
    /// # Panics
    /// Panics if `attempt >= MAX_ATTEMPTS`
    #[inline]
    #[must_use]
    pub fn buffer(&self, attempt: usize) -> &[char] {
        &self.guesses[attempt]
    }

    /// Letters typed so far for the current attempt
    #[inline]
    #[must_use]
    pub fn current_buffer(&self) -> &[char] {
        &self.guesses[self.current_attempt]
    }

    /// Whether the given attempt has been submitted and accepted
    ///
    /// The winning or losing row counts: the round ends without advancing
    /// `current_attempt`, so the final row is committed once `over` is set.
    #[must_use]
    pub const fn is_committed(&self, attempt: usize) -> bool {
        attempt < self.current_attempt || (self.over && attempt == self.current_attempt)
    }

    /// Full letter array for a committed attempt
    #[must_use]
    pub fn row_letters(&self, attempt: usize) -> Option<[char; WORD_LEN]> {
        if !self.is_committed(attempt) {
            return None;
        }
        self.guesses[attempt].as_slice().try_into().ok()
    }

    /// Verdicts for a committed attempt under the given policy
    #[must_use]
    pub fn row_verdicts(
        &self,
        attempt: usize,
        policy: ScoringPolicy,
    ) -> Option<[Verdict; WORD_LEN]> {
        self.row_letters(attempt)
            .map(|letters| score_guess(&letters, &self.target, policy))
    }

    /// Iterate over the letter arrays of every committed attempt, in order
    pub fn committed_rows(&self) -> impl Iterator<Item = [char; WORD_LEN]> + '_ {
        (0..MAX_ATTEMPTS).filter_map(|attempt| self.row_letters(attempt))
    }

    // Transition helpers, engine-only. Each upholds the state invariants:
    // current_attempt stays within [0, MAX_ATTEMPTS), won implies over, and
    // no buffer other than the current one is ever written.

    pub(crate) fn push_letter(&mut self, letter: char) -> bool {
        debug_assert!(!self.over);
        let buffer = &mut self.guesses[self.current_attempt];
        if buffer.len() == WORD_LEN {
            return false;
        }
        buffer.push(letter);
        true
    }

    pub(crate) fn pop_letter(&mut self) -> bool {
        debug_assert!(!self.over);
        self.guesses[self.current_attempt].pop().is_some()
    }

    pub(crate) fn advance(&mut self) {
        debug_assert!(self.current_attempt + 1 < MAX_ATTEMPTS);
        self.current_attempt += 1;
    }

    pub(crate) fn mark_won(&mut self) {
        self.won = true;
        self.over = true;
    }

    pub(crate) fn mark_lost(&mut self) {
        self.won = false;
        self.over = true;
    }

    pub(crate) fn flag_invalid(&mut self, token: ShakeToken) {
        debug_assert_eq!(token.attempt, self.current_attempt);
        self.invalid_attempt = Some(token);
    }

    /// Clear the flash if (and only if) `token` is the one that set it
    pub(crate) fn clear_invalid(&mut self, token: ShakeToken) -> bool {
        if self.invalid_attempt == Some(token) {
            self.invalid_attempt = None;
            true
        } else {
            false
        }
    }
}
