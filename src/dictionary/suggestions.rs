//! Player suggestions awaiting review
//!
//! Three disjoint lists:
//! - `black`: secret words proposed for removal
//! - `white`: unknown words proposed as new secrets
//! - `add`: words to accept as guesses only, usually moved here from the
//!   other two lists during review

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::Dictionary;

/// One of the three suggestion lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionList {
    /// Remove from the secret list
    Black,
    /// Add to the secret list
    White,
    /// Add to the guess-only list
    Add,
}

impl SuggestionList {
    /// All lists in display order
    pub const ALL: [Self; 3] = [Self::Black, Self::White, Self::Add];

    /// Lowercase list name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
            Self::Add => "add",
        }
    }
}

impl fmt::Display for SuggestionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SuggestionList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "black" => Ok(Self::Black),
            "white" => Ok(Self::White),
            "add" => Ok(Self::Add),
            other => Err(format!("Unknown suggestion list: {other} (black, white, add)")),
        }
    }
}

/// Words moved into the `add` list, grouped by origin
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveReport {
    /// Moved out of `black`
    pub from_black: Vec<String>,
    /// Moved out of `white`
    pub from_white: Vec<String>,
}

impl MoveReport {
    /// Check if nothing moved
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.from_black.is_empty() && self.from_white.is_empty()
    }
}

/// The suggestion queue
///
/// Serialized as three sorted arrays. Inserting a word into one list takes it
/// out of the others, so the lists stay disjoint. Loading goes through the
/// same rule: a word found in several lists keeps the last of black, white,
/// add.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SuggestionRecord")]
pub struct SuggestionSet {
    black: BTreeSet<String>,
    white: BTreeSet<String>,
    add: BTreeSet<String>,
}

/// Stored lists as read, before overlaps are resolved
#[derive(Deserialize, Default)]
#[serde(default)]
struct SuggestionRecord {
    black: Vec<String>,
    white: Vec<String>,
    add: Vec<String>,
}

impl From<SuggestionRecord> for SuggestionSet {
    fn from(record: SuggestionRecord) -> Self {
        let mut set = Self::default();
        let lists = [
            (SuggestionList::Black, record.black),
            (SuggestionList::White, record.white),
            (SuggestionList::Add, record.add),
        ];
        for (list, words) in lists {
            for word in words {
                set.insert(list, word);
            }
        }
        set
    }
}

impl SuggestionSet {
    /// Words in one list, sorted
    #[must_use]
    pub fn list(&self, list: SuggestionList) -> &BTreeSet<String> {
        match list {
            SuggestionList::Black => &self.black,
            SuggestionList::White => &self.white,
            SuggestionList::Add => &self.add,
        }
    }

    fn list_mut(&mut self, list: SuggestionList) -> &mut BTreeSet<String> {
        match list {
            SuggestionList::Black => &mut self.black,
            SuggestionList::White => &mut self.white,
            SuggestionList::Add => &mut self.add,
        }
    }

    /// Check if a word is queued in a list
    #[must_use]
    pub fn contains(&self, list: SuggestionList, word: &str) -> bool {
        self.list(list).contains(word)
    }

    /// Check if all three lists are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        SuggestionList::ALL.iter().all(|&l| self.list(l).is_empty())
    }

    /// Queue a word, taking it out of the other lists
    ///
    /// Returns false if the word was already in `list`.
    pub fn insert(&mut self, list: SuggestionList, word: impl Into<String>) -> bool {
        let word = word.into();
        for other in SuggestionList::ALL.into_iter().filter(|&l| l != list) {
            self.list_mut(other).remove(&word);
        }
        self.list_mut(list).insert(word)
    }

    /// Move words found in `black` or `white` to `add`
    ///
    /// Words in neither list are ignored.
    pub fn move_to_add<S: AsRef<str>>(&mut self, words: &[S]) -> MoveReport {
        let mut report = MoveReport::default();
        for word in words {
            let word = word.as_ref();
            if self.black.remove(word) {
                self.add.insert(word.to_string());
                report.from_black.push(word.to_string());
            } else if self.white.remove(word) {
                self.add.insert(word.to_string());
                report.from_white.push(word.to_string());
            }
        }
        report
    }

    /// Remove words from one list, returning those that were present
    pub fn remove<S: AsRef<str>>(&mut self, list: SuggestionList, words: &[S]) -> Vec<String> {
        let target = self.list_mut(list);
        words
            .iter()
            .map(|word| word.as_ref())
            .filter(|word: &&str| target.remove(*word))
            .map(str::to_string)
            .collect()
    }

    /// Every queued word across all lists
    #[must_use]
    pub fn all_words(&self) -> BTreeSet<&str> {
        SuggestionList::ALL
            .iter()
            .flat_map(|&l| self.list(l).iter().map(String::as_str))
            .collect()
    }

    /// Rebuild a dictionary with the queued edits applied
    ///
    /// `main` loses `black` and gains `white`, `additional` gains `add`. The
    /// result goes through the normal loader rules, so invalid entries are
    /// dropped and everything is sorted again.
    #[must_use]
    pub fn merge_into(&self, dictionary: &Dictionary) -> Dictionary {
        let main = dictionary
            .main()
            .iter()
            .map(|w| w.text())
            .filter(|w| !self.black.contains(*w))
            .chain(self.white.iter().map(String::as_str));
        let additional = dictionary
            .additional()
            .iter()
            .map(|w| w.text())
            .chain(self.add.iter().map(String::as_str));

        Dictionary::from_raw(main, additional)
    }
}
