//! Dictionary word representation
//!
//! A Word is a normalized, alphabetic entry of 4 to 11 letters. Letters are
//! stored as `char`s so non-ASCII alphabets work the same as English.

use derive_more::{Display, Error};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{MAX_WORD_LEN, MIN_WORD_LEN};

/// A normalized dictionary word with its letters split out
///
/// Equality and ordering only look at the text, so sorted word lists can be
/// binary searched by string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum WordError {
    /// Letter count outside the playable range
    #[display("Word must be 4-11 letters, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    /// Digits, punctuation or whitespace
    #[display("Word must contain only letters")]
    InvalidCharacters,
}

/// Normalize raw user or file input
///
/// Trims, lowercases and folds `ё` into `е` so both spellings hit the same
/// dictionary entry.
///
/// # Examples
/// ```
/// use wordle_engine::core::normalize;
///
/// assert_eq!(normalize("  Ёлка "), "елка");
/// assert_eq!(normalize("CRANE"), "crane");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ё' { 'е' } else { c })
        .collect()
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is normalized first (see [`normalize`]).
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is outside 4..=11 letters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Word;
    ///
    /// let word = Word::new("Lemon").unwrap();
    /// assert_eq!(word.text(), "lemon");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("abc").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = normalize(text.as_ref());
        let chars: Vec<char> = text.chars().collect();

        if !chars.iter().all(|c| c.is_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&chars.len()) {
            return Err(WordError::InvalidLength(chars.len()));
        }

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters of the word
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false, a valid word has at least four letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the count of each letter in the word
    ///
    /// Used for feedback and hint overlap with duplicate letters.
    #[must_use]
    pub fn char_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }

    /// Size of the multiset intersection of the letters of two words
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Word;
    ///
    /// let a = Word::new("lemon").unwrap();
    /// let b = Word::new("melon").unwrap();
    /// assert_eq!(a.common_letters(&b), 5);
    /// ```
    #[must_use]
    pub fn common_letters(&self, other: &Self) -> usize {
        let ours = self.char_counts();
        other
            .char_counts()
            .into_iter()
            .map(|(ch, theirs)| usize::from(theirs.min(ours.get(&ch).copied().unwrap_or(0))))
            .sum()
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), &['c', 'r', 'a', 'n', 'e']);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("  CrAnE\n").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_folds_yo() {
        let word = Word::new("ЁЖИК").unwrap();
        assert_eq!(word.text(), "ежик");
        assert_eq!(word.len(), 4);
        assert_eq!(word, Word::new("ежик").unwrap());
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("abc"), Err(WordError::InvalidLength(3)));
        assert_eq!(
            Word::new("abcdefghijkl"),
            Err(WordError::InvalidLength(12))
        );
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
        assert!(Word::new("abcd").is_ok());
        assert!(Word::new("abcdefghijk").is_ok());
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("two words"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn length_counts_letters_not_bytes() {
        // Five Cyrillic letters are ten bytes
        let word = Word::new("лимон").unwrap();
        assert_eq!(word.len(), 5);
        assert_eq!(word.text().len(), 10);
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&'s'), Some(&1));
        assert_eq!(counts.get(&'e'), Some(&2));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn common_letters_is_multiset_intersection() {
        let speed = Word::new("speed").unwrap();
        let erase = Word::new("erase").unwrap();
        // s, e, e
        assert_eq!(speed.common_letters(&erase), 3);
        assert_eq!(erase.common_letters(&speed), 3);

        let lemon = Word::new("lemon").unwrap();
        let crypt = Word::new("crypt").unwrap();
        assert_eq!(lemon.common_letters(&crypt), 0);
    }

    #[test]
    fn serde_uses_plain_string() {
        let word = Word::new("lemon").unwrap();
        let json = serde_json::to_string(&word).unwrap();
        assert_eq!(json, "\"lemon\"");

        let back: Word = serde_json::from_str(&json).unwrap();
        assert_eq!(back, word);

        assert!(serde_json::from_str::<Word>("\"no\"").is_err());
    }

    #[test]
    fn ordering_follows_text() {
        let mut words = vec![
            Word::new("pear").unwrap(),
            Word::new("apple").unwrap(),
            Word::new("lemon").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["apple", "lemon", "pear"]);
    }
}
