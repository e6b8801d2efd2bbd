//! A single player's game in progress

use serde::{Deserialize, Serialize};

use crate::core::{Feedback, LetterStatuses, MAX_ATTEMPTS, Word, letter_statuses};

/// One player's active puzzle
///
/// Guesses are append-only and the attempt count is always the number of
/// guesses. Stored as `{secret, attempts, guesses, hint_used}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SessionRecord", into = "SessionRecord")]
pub struct GameSession {
    secret: Word,
    guesses: Vec<Word>,
    hint_used: bool,
}

#[derive(Serialize, Deserialize)]
struct SessionRecord {
    secret: Word,
    #[serde(default)]
    attempts: usize,
    #[serde(default)]
    guesses: Vec<Word>,
    #[serde(default)]
    hint_used: bool,
}

impl From<SessionRecord> for GameSession {
    fn from(record: SessionRecord) -> Self {
        // The guess list is authoritative; the stored count is only kept for readers of the file
        Self {
            secret: record.secret,
            guesses: record.guesses,
            hint_used: record.hint_used,
        }
    }
}

impl From<GameSession> for SessionRecord {
    fn from(session: GameSession) -> Self {
        Self {
            attempts: session.attempts(),
            secret: session.secret,
            guesses: session.guesses,
            hint_used: session.hint_used,
        }
    }
}

impl GameSession {
    /// Fresh session with no guesses
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self {
            secret,
            guesses: Vec::new(),
            hint_used: false,
        }
    }

    /// The word to guess
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Accepted guesses so far, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.guesses.len()
    }

    /// Whether the hint was already given
    #[must_use]
    pub const fn hint_used(&self) -> bool {
        self.hint_used
    }

    /// Latch the hint flag
    pub fn mark_hint_used(&mut self) {
        self.hint_used = true;
    }

    /// Record a validated guess and return its feedback
    ///
    /// The caller must have checked the length and that attempts remain.
    pub fn push_guess(&mut self, guess: Word) -> Feedback {
        debug_assert_eq!(guess.len(), self.secret.len());
        debug_assert!(self.attempts() < MAX_ATTEMPTS);

        let feedback = Feedback::calculate(&self.secret, &guess);
        self.guesses.push(guess);
        feedback
    }

    /// Board state safe to show the player (no secret)
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView {
            length: self.secret.len(),
            attempts: self.attempts(),
            max_attempts: MAX_ATTEMPTS,
            rows: self
                .guesses
                .iter()
                .map(|guess| GuessRow {
                    guess: guess.clone(),
                    feedback: Feedback::calculate(&self.secret, guess),
                })
                .collect(),
            letters: letter_statuses(&self.secret, &self.guesses),
            hint_used: self.hint_used,
        }
    }
}

/// One line of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    pub guess: Word,
    pub feedback: Feedback,
}

/// What a player can see of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    /// Letters in the secret
    pub length: usize,
    pub attempts: usize,
    pub max_attempts: usize,
    /// Every guess with its feedback, oldest first
    pub rows: Vec<GuessRow>,
    /// Best status per letter over all rows (keyboard colours)
    pub letters: LetterStatuses,
    pub hint_used: bool,
}

impl SessionView {
    /// Guesses left before the game is lost
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.max_attempts.saturating_sub(self.attempts)
    }

    /// The most recent guess, if any
    #[must_use]
    pub fn last_row(&self) -> Option<&GuessRow> {
        self.rows.last()
    }
}

/// Result of asking for a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new game was created
    Started(SessionView),
    /// A game was already in progress and is returned unchanged
    Resumed(SessionView),
    /// No game in progress and no length given
    LengthRequired,
    /// Requested length outside 4..=11
    InvalidLength(usize),
    /// The dictionary has no secret of this length
    NoWordsOfLength(usize),
}

/// Why a guess was refused. Refusals never cost an attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// The player has no game in progress
    NoActiveGame,
    /// The guess has spaces inside it
    ContainsWhitespace,
    /// The guess has the wrong number of letters
    WrongLength { expected: usize, actual: usize },
    /// The player proposed this word and it is not approved yet
    PendingSuggestion { word: String },
    /// Unknown word; the caller may offer to suggest it for the white list
    NotInDictionary { word: String },
}

/// Result of submitting a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Guess recorded, game continues
    Accepted(SessionView),
    /// Secret found. The session is gone and stats are updated.
    Won(SessionView),
    /// Last attempt used. The session is gone and stats are updated.
    Lost { view: SessionView, secret: Word },
    /// Guess refused, nothing changed
    Rejected(RejectReason),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Status;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn new_session_is_empty() {
        let session = GameSession::new(word("lemon"));
        assert_eq!(session.attempts(), 0);
        assert_eq!(session.view().remaining(), MAX_ATTEMPTS);
        assert!(!session.hint_used());
        assert!(session.guesses().is_empty());
    }

    #[test]
    fn push_guess_appends_and_counts() {
        let mut session = GameSession::new(word("lemon"));
        let feedback = session.push_guess(word("melon"));
        assert_eq!(feedback.to_emoji(), "🟨🟩🟨🟩🟩");
        assert_eq!(session.attempts(), 1);
        assert_eq!(session.guesses(), &[word("melon")]);
    }

    #[test]
    fn view_rebuilds_rows_and_letters() {
        let mut session = GameSession::new(word("lemon"));
        session.push_guess(word("melon"));
        session.push_guess(word("crypt"));
        session.mark_hint_used();

        let view = session.view();
        assert_eq!(view.length, 5);
        assert_eq!(view.attempts, 2);
        assert_eq!(view.max_attempts, 6);
        assert_eq!(view.remaining(), 4);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.last_row().unwrap().guess, word("crypt"));
        assert_eq!(view.letters[&'e'], Status::Hit);
        assert_eq!(view.letters[&'c'], Status::Miss);
        assert!(view.hint_used);
    }

    #[test]
    fn serialized_layout() {
        let mut session = GameSession::new(word("lemon"));
        session.push_guess(word("melon"));
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "secret": "lemon",
                "attempts": 1,
                "guesses": ["melon"],
                "hint_used": false
            })
        );
    }

    #[test]
    fn stored_attempts_do_not_override_guesses() {
        let raw = r#"{"secret": "lemon", "attempts": 4, "guesses": ["melon"]}"#;
        let session: GameSession = serde_json::from_str(raw).unwrap();
        assert_eq!(session.attempts(), 1);
    }
}
