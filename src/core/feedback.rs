//! Guess feedback calculation
//!
//! Each position of a guess gets one of three statuses:
//! - `Miss` (letter not in the secret, shown as ⬜)
//! - `Present` (letter in the secret, wrong position, shown as 🟨)
//! - `Hit` (letter in the correct position, shown as 🟩)
//!
//! Statuses are ordered `Miss < Present < Hit`, which is also the precedence
//! used when folding a whole guess history into per-letter keyboard colours.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::Word;

/// Feedback for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Not in the secret (or every copy already credited)
    Miss,
    /// In the secret at another position
    Present,
    /// Correct letter in the correct position
    Hit,
}

impl Status {
    /// Emoji square used on the board
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Hit => '🟩',
            Self::Present => '🟨',
            Self::Miss => '⬜',
        }
    }
}

/// Per-letter status map, one entry per letter seen in any guess
pub type LetterStatuses = FxHashMap<char, Status>;

/// Feedback for one guess against a secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    positions: Vec<Status>,
}

impl Feedback {
    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// Implements the standard duplicate-letter rules: a letter is credited
    /// (as `Hit` or `Present`) at most as many times as it occurs in the
    /// secret, and exact matches are credited first.
    ///
    /// Both words must have the same length. This is checked in debug builds;
    /// in release builds the extra letters of the longer word are ignored.
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches and remove them from the pool
    /// 2. Second pass: mark present-but-misplaced letters from the remaining pool
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Feedback, Status, Word};
    ///
    /// let secret = Word::new("lemon").unwrap();
    /// let guess = Word::new("melon").unwrap();
    /// let feedback = Feedback::calculate(&secret, &guess);
    ///
    /// use Status::{Hit, Present};
    /// assert_eq!(feedback.positions(), &[Present, Hit, Present, Hit, Hit]);
    /// ```
    #[must_use]
    pub fn calculate(secret: &Word, guess: &Word) -> Self {
        debug_assert_eq!(
            secret.len(),
            guess.len(),
            "feedback needs equal-length words"
        );

        let pairs = || secret.chars().iter().zip(guess.chars());
        let mut positions = vec![Status::Miss; pairs().count()];
        let mut secret_available = secret.char_counts();

        // First pass: exact position matches
        for (i, (s, g)) in pairs().enumerate() {
            if s == g {
                positions[i] = Status::Hit;
                if let Some(count) = secret_available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, limited by what the first pass left
        for (i, (_, g)) in pairs().enumerate() {
            if positions[i] == Status::Hit {
                continue;
            }
            if let Some(count) = secret_available.get_mut(g)
                && *count > 0
            {
                positions[i] = Status::Present;
                *count -= 1;
            }
        }

        Self { positions }
    }

    /// Status of every position, in order
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[Status] {
        &self.positions
    }

    /// Check if every position is a hit
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.positions.iter().all(|&s| s == Status::Hit)
    }

    /// Count positions with the given status
    #[must_use]
    pub fn count(&self, status: Status) -> usize {
        self.positions.iter().filter(|&&s| s == status).count()
    }

    /// Convert feedback to an emoji string like "🟨🟩🟨🟩🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.positions.iter().map(|s| s.emoji()).collect()
    }
}

/// Fold a whole guess history into per-letter statuses
///
/// Each letter keeps the best status it ever received (`Hit > Present > Miss`),
/// so a letter never downgrades once found. The map is rebuilt from the full
/// history on every call.
///
/// # Examples
/// ```
/// use wordle_engine::core::{letter_statuses, Status, Word};
///
/// let secret = Word::new("lemon").unwrap();
/// let guesses = [Word::new("melon").unwrap(), Word::new("lemma").unwrap()];
/// let letters = letter_statuses(&secret, &guesses);
///
/// assert_eq!(letters[&'l'], Status::Hit);
/// assert_eq!(letters[&'a'], Status::Miss);
/// ```
#[must_use]
pub fn letter_statuses(secret: &Word, guesses: &[Word]) -> LetterStatuses {
    let mut letters = LetterStatuses::default();
    for guess in guesses {
        let feedback = Feedback::calculate(secret, guess);
        merge_letters(&mut letters, guess, &feedback);
    }
    letters
}

fn merge_letters(letters: &mut LetterStatuses, guess: &Word, feedback: &Feedback) {
    for (&ch, &status) in guess.chars().iter().zip(feedback.positions()) {
        letters
            .entry(ch)
            .and_modify(|best| *best = (*best).max(status))
            .or_insert(status);
    }
}
