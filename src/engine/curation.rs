//! Player suggestions and dictionary curation
//!
//! Players queue words into the black, white or add lists. A curator then
//! moves, removes or approves them; approval rewrites the dictionary.

use tracing::{debug, info, instrument, warn};

use super::Engine;
use crate::core::{Word, WordError, normalize};
use crate::dictionary::{MoveReport, SuggestionList, SuggestionSet};
use crate::error::Result;
use crate::storage::{Store, StoreData};

/// Result of a player suggestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestOutcome {
    /// Queued for review and remembered on the player's profile
    Added { list: SuggestionList, word: String },
    /// Already waiting in that list
    AlreadyQueued { list: SuggestionList, word: String },
    /// Proposed as new but the dictionary already has it
    AlreadyKnown(String),
    /// Proposed for removal but it is not a secret word
    NotInDictionary(String),
    /// Not a playable word
    InvalidWord(WordError),
    /// Only single words can be suggested
    ContainsWhitespace,
    /// The queue reached its size cap
    Full,
}

/// Words taken out of one suggestion list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveReport {
    /// Words that were in the list
    pub removed: Vec<String>,
    /// Entries dropped from players' suggested words
    pub purged: usize,
}

/// What an approval changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApproveSummary {
    /// Words taken out of the secret list
    pub removed: usize,
    /// Words added to the secret list
    pub added_main: usize,
    /// Words added to the guess-only list
    pub added_additional: usize,
    /// Entries dropped from players' suggested words
    pub purged: usize,
}

impl ApproveSummary {
    /// Check if the dictionary stayed the same
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.removed == 0 && self.added_main == 0 && self.added_additional == 0
    }
}

/// Drop `words` from every player's suggested words, returning how many went
fn purge_suggested<S: AsRef<str>>(data: &mut StoreData, words: &[S]) -> usize {
    data.users
        .values_mut()
        .map(|profile| {
            let before = profile.suggested_words.len();
            profile
                .suggested_words
                .retain(|w| !words.iter().any(|x| x.as_ref() == w.as_str()));
            before - profile.suggested_words.len()
        })
        .sum()
}

fn serialized_size(set: &SuggestionSet) -> usize {
    serde_json::to_string_pretty(set).map_or(0, |json| json.len())
}

impl<S: Store> Engine<S> {
    /// Queue a word for review on behalf of a player
    ///
    /// `black` only takes current secret words. `white` and `add` only take
    /// valid words the dictionary does not know yet.
    ///
    /// # Errors
    /// Returns store failures.
    #[instrument(skip(self))]
    pub fn suggest(&self, user_id: &str, list: SuggestionList, raw: &str) -> Result<SuggestOutcome> {
        let text = normalize(raw);
        if text.chars().any(char::is_whitespace) {
            return Ok(SuggestOutcome::ContainsWhitespace);
        }

        match list {
            SuggestionList::Black => {
                if !self.dictionary.contains_main(&text) {
                    return Ok(SuggestOutcome::NotInDictionary(text));
                }
            }
            SuggestionList::White | SuggestionList::Add => {
                if let Err(err) = Word::new(&text) {
                    return Ok(SuggestOutcome::InvalidWord(err));
                }
                if self.dictionary.contains(&text) {
                    return Ok(SuggestOutcome::AlreadyKnown(text));
                }
            }
        }

        let limit = self.suggestions_limit;
        let outcome = self.store.update_suggestions(|set| {
            if set.contains(list, &text) {
                return SuggestOutcome::AlreadyQueued {
                    list,
                    word: text.clone(),
                };
            }
            if serialized_size(set) >= limit {
                warn!(limit, "Suggestion queue is full");
                return SuggestOutcome::Full;
            }
            set.insert(list, text.clone());
            SuggestOutcome::Added {
                list,
                word: text.clone(),
            }
        })?;

        if matches!(outcome, SuggestOutcome::Added { .. }) {
            self.store.transaction(|data| {
                let profile = data.users.entry(user_id.to_string()).or_default();
                profile.touch();
                profile.add_suggested_word(&text);
            })?;
            info!(%list, word = %text, "Suggestion queued");
        }
        Ok(outcome)
    }

    /// The current suggestion queue
    ///
    /// # Errors
    /// Returns store failures.
    pub fn suggestions(&self) -> Result<SuggestionSet> {
        self.store.load_suggestions()
    }

    /// Move words from `black` or `white` into `add`
    ///
    /// # Errors
    /// Returns store failures.
    #[instrument(skip(self))]
    pub fn move_suggestions<W: AsRef<str> + std::fmt::Debug>(&self, words: &[W]) -> Result<MoveReport> {
        let words: Vec<String> = words.iter().map(|w| normalize(w.as_ref())).collect();
        let report = self.store.update_suggestions(|set| set.move_to_add(&words))?;
        debug!(?report, "Suggestions moved");
        Ok(report)
    }

    /// Drop words from one list and forget them on every player's profile
    ///
    /// # Errors
    /// Returns store failures.
    #[instrument(skip(self))]
    pub fn remove_suggestions<W: AsRef<str> + std::fmt::Debug>(
        &self,
        list: SuggestionList,
        words: &[W],
    ) -> Result<RemoveReport> {
        let words: Vec<String> = words.iter().map(|w| normalize(w.as_ref())).collect();
        let removed = self.store.update_suggestions(|set| set.remove(list, &words))?;
        let purged = if removed.is_empty() {
            0
        } else {
            self.store.transaction(|data| purge_suggested(data, &removed))?
        };
        info!(%list, removed = removed.len(), purged, "Suggestions removed");
        Ok(RemoveReport { removed, purged })
    }

    /// Apply the whole queue to the dictionary and clear it
    ///
    /// The new dictionary is saved before the queue is cleared, so a failure
    /// part-way leaves the queue in place for another attempt.
    ///
    /// # Errors
    /// Returns store failures.
    #[instrument(skip(self))]
    pub fn approve_suggestions(&mut self) -> Result<ApproveSummary> {
        let set = self.store.load_suggestions()?;
        if set.is_empty() {
            debug!("Nothing to approve");
            return Ok(ApproveSummary::default());
        }

        let merged = set.merge_into(&self.dictionary);
        let mut summary = ApproveSummary {
            removed: self.dictionary.main().len().saturating_sub(
                merged
                    .main()
                    .iter()
                    .filter(|w| self.dictionary.contains_main(w.text()))
                    .count(),
            ),
            added_main: merged
                .main()
                .iter()
                .filter(|w| !self.dictionary.contains_main(w.text()))
                .count(),
            added_additional: merged
                .additional()
                .iter()
                .filter(|w| !self.dictionary.contains(w.text()))
                .count(),
            purged: 0,
        };

        self.store.save_dictionary(&merged)?;
        self.dictionary = merged;

        let words: Vec<&str> = set.all_words().into_iter().collect();
        summary.purged = self.store.transaction(|data| purge_suggested(data, &words))?;
        self.store.save_suggestions(&SuggestionSet::default())?;

        info!(
            removed = summary.removed,
            added_main = summary.added_main,
            added_additional = summary.added_additional,
            purged = summary.purged,
            "Suggestions approved"
        );
        Ok(summary)
    }
}
