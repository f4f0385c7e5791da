//! Key-event transitions
//!
//! The engine processes one logical input event at a time: letters fill the
//! current buffer, Backspace empties it, Enter submits it. A submitted word
//! is checked against an injected [`Dictionary`]; rejections raise the
//! transient invalid flag instead of an error. Round endings append a
//! [`ScoreRecord`] to the session history exactly once.

use super::state::{GameState, MAX_ATTEMPTS, ShakeToken};
use crate::core::{ScoringPolicy, WORD_LEN, Word};
use crate::score::{
    HistoryStore, ScoreRecord, ScoreSummary, merge_histories, record_result, unix_millis,
};
use std::time::Duration;

/// How long the invalid-word flash should stay visible before the caller
/// clears it with [`Engine::clear_invalid`]
pub const INVALID_FLASH: Duration = Duration::from_millis(510);

/// Word-validity predicate, supplied by the embedding application
pub trait Dictionary {
    /// Whether `word` is an accepted guess (case-insensitive)
    fn is_valid_word(&self, word: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid_word(&self, word: &str) -> bool {
        self(word)
    }
}

/// One logical input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A single alphabetic character; anything else is ignored
    Letter(char),
    Backspace,
    Enter,
}

/// What a key press did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// No effect (full buffer, empty buffer, short Enter, game over, ...)
    Ignored,
    /// The current buffer changed
    Edited,
    /// The submitted word is not in the dictionary; the flag is set until
    /// the caller clears it with the returned token
    NotAWord(ShakeToken),
    /// Valid guess, wrong word, attempts remain
    Advanced,
    /// The round was won
    Won,
    /// The sixth valid guess was wrong
    Lost,
}

type Observer = Box<dyn FnMut(&GameState)>;

/// The guess engine: one round of state plus the session score history
///
/// # Examples
/// ```
/// use wordle_play::core::{ScoringPolicy, Word};
/// use wordle_play::engine::{Engine, Key, KeyOutcome};
///
/// let mut engine = Engine::new(|_: &str| true, ScoringPolicy::default());
/// engine.start_game(Word::new("crane").unwrap());
///
/// for letter in "crane".chars() {
///     engine.submit_key(Key::Letter(letter));
/// }
/// assert_eq!(engine.submit_key(Key::Enter), KeyOutcome::Won);
/// assert_eq!(engine.scores().len(), 1);
/// ```
pub struct Engine<D> {
    dictionary: D,
    policy: ScoringPolicy,
    round: u64,
    state: Option<GameState>,
    scores: Vec<ScoreRecord>,
    observers: Vec<Observer>,
}

impl<D: Dictionary> Engine<D> {
    /// Create an engine with no round in progress
    #[must_use]
    pub fn new(dictionary: D, policy: ScoringPolicy) -> Self {
        Self {
            dictionary,
            policy,
            round: 0,
            state: None,
            scores: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// The active round, if a game has been started
    #[inline]
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// The duplicate-letter policy used for tile and keyboard coloring
    #[inline]
    #[must_use]
    pub const fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    /// Score records accumulated this session, oldest first
    #[inline]
    #[must_use]
    pub fn scores(&self) -> &[ScoreRecord] {
        &self.scores
    }

    /// Aggregate the session history into display statistics
    #[must_use]
    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary::from_records(&self.scores)
    }

    /// Register a callback invoked after every state mutation
    ///
    /// Replaces polling a shared global: the UI subscribes once and re-renders
    /// from the state it is handed.
    pub fn subscribe(&mut self, observer: impl FnMut(&GameState) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Begin a new round with the given target word
    ///
    /// Works from any state. Session history is preserved; a pending
    /// invalid-word flash dies with the old round because its token carries
    /// the old round id.
    pub fn start_game(&mut self, target: Word) {
        self.round += 1;
        self.state = Some(GameState::new(target));
        self.notify();
    }

    /// Apply one input event
    ///
    /// Returns what happened; every non-[`KeyOutcome::Ignored`] outcome has
    /// already been applied to the state when this returns.
    pub fn submit_key(&mut self, key: Key) -> KeyOutcome {
        let Some(state) = self.state.as_mut() else {
            return KeyOutcome::Ignored;
        };
        if state.over() {
            return KeyOutcome::Ignored;
        }

        let outcome = match key {
            Key::Letter(letter) => {
                let letter = letter.to_ascii_lowercase();
                if letter.is_ascii_lowercase() && state.push_letter(letter) {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Backspace => {
                if state.pop_letter() {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Enter => {
                if state.current_buffer().len() < WORD_LEN {
                    KeyOutcome::Ignored
                } else {
                    let submitted: String = state.current_buffer().iter().collect();
                    if !self.dictionary.is_valid_word(&submitted) {
                        let token = ShakeToken {
                            round: self.round,
                            attempt: state.current_attempt(),
                        };
                        state.flag_invalid(token);
                        KeyOutcome::NotAWord(token)
                    } else if submitted == state.target().text() {
                        state.mark_won();
                        if let Some(record) = record_result(state, unix_millis()) {
                            self.scores.push(record);
                        }
                        KeyOutcome::Won
                    } else if state.current_attempt() + 1 == MAX_ATTEMPTS {
                        state.mark_lost();
                        if let Some(record) = record_result(state, unix_millis()) {
                            self.scores.push(record);
                        }
                        KeyOutcome::Lost
                    } else {
                        state.advance();
                        KeyOutcome::Advanced
                    }
                }
            }
        };

        if outcome != KeyOutcome::Ignored {
            self.notify();
        }
        outcome
    }

    /// Clear the invalid-word flash raised with `token`
    ///
    /// Single-shot and race-tolerant: returns `false` without touching state
    /// when the token is stale: already cleared, or minted by a round that
    /// has since been replaced.
    pub fn clear_invalid(&mut self, token: ShakeToken) -> bool {
        if token.round != self.round {
            return false;
        }
        let cleared = self
            .state
            .as_mut()
            .is_some_and(|state| state.clear_invalid(token));
        if cleared {
            self.notify();
        }
        cleared
    }

    /// Merge the session history with a persistent store, both directions
    ///
    /// De-duplicates by timestamp, so re-syncing after every round (or every
    /// render) is idempotent. Store failures degrade to an empty load or a
    /// skipped save inside the store itself.
    pub fn sync_history<S: HistoryStore + ?Sized>(&mut self, store: &mut S) {
        let stored = store.load();
        let merged = merge_histories(&stored, &self.scores);
        if merged != stored {
            store.save(&merged);
        }
        self.scores = merged;
    }

    fn notify(&mut self) {
        if let Some(state) = self.state.as_ref() {
            for observer in &mut self.observers {
                observer(state);
            }
        }
    }
}
