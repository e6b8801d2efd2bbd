//! Word lists for the game
//!
//! The dictionary is an explicit value: it is loaded once, handed to the
//! engine, and replaced wholesale when curated suggestions are approved.

pub mod loader;
mod suggestions;

pub use suggestions::{MoveReport, SuggestionList, SuggestionSet};

use std::path::Path;

use crate::core::Word;
use crate::error::Result;

/// Sorted, deduplicated word lists split into two partitions
///
/// - `main`: words that can be chosen as secrets (and guessed)
/// - `additional`: words accepted as guesses but never chosen as secrets
///
/// No word is in both partitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    main: Vec<Word>,
    additional: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from raw lists, see [`loader::load`]
    pub fn from_raw<I, J>(raw_main: I, raw_additional: J) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        J: IntoIterator,
        J::Item: AsRef<str>,
    {
        loader::load(raw_main, raw_additional)
    }

    /// Load a dictionary document, see [`loader::load_from_file`]
    ///
    /// # Errors
    /// Returns `EngineError::Dictionary` if the file is missing or corrupt.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        loader::load_from_file(path.as_ref())
    }

    /// Secret candidates, sorted
    #[inline]
    #[must_use]
    pub fn main(&self) -> &[Word] {
        &self.main
    }

    /// Extra accepted guesses, sorted
    #[inline]
    #[must_use]
    pub fn additional(&self) -> &[Word] {
        &self.additional
    }

    /// Total number of words in both partitions
    #[must_use]
    pub fn len(&self) -> usize {
        self.main.len() + self.additional.len()
    }

    /// Check if both partitions are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.main.is_empty() && self.additional.is_empty()
    }

    /// Check if a normalized word is a secret candidate
    #[must_use]
    pub fn contains_main(&self, text: &str) -> bool {
        find(&self.main, text)
    }

    /// Check if a normalized word is an accepted guess (either partition)
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        find(&self.main, text) || find(&self.additional, text)
    }

    /// Secret candidates with the given number of letters
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> Vec<&Word> {
        self.main.iter().filter(|w| w.len() == length).collect()
    }
}

fn find(words: &[Word], text: &str) -> bool {
    words.binary_search_by(|w| w.text().cmp(text)).is_ok()
}
