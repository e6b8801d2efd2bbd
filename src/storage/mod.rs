//! Persistence for users, statistics, suggestions and the dictionary
//!
//! The engine never keeps state between calls. Every operation runs inside
//! [`Store::transaction`]: load the whole document, mutate it, save it back.
//! Implementations decide how isolated that cycle is.

mod json;
mod memory;

pub use json::JsonFileStore;
pub(crate) use json::write_document;
pub use memory::MemoryStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::dictionary::{Dictionary, SuggestionSet};
use crate::engine::{GameSession, GlobalStats, UserStats};
use crate::error::Result;

/// Identifier of a player (the chat user id)
pub type UserId = String;

/// Everything stored about one player
///
/// Unknown fields in the JSON are ignored and missing ones default, so older
/// documents keep loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// First name as reported by the chat
    pub first_name: String,
    /// Last name, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Public handle, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Interface language reported by the chat
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    /// Last interaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,
    /// Words this player proposed that are still under review
    pub suggested_words: Vec<String>,
    /// Lifetime counters
    pub stats: UserStats,
    /// The game in progress, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_game: Option<GameSession>,
}

impl UserProfile {
    /// Handle if set, otherwise first name
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.first_name)
    }

    /// Record an interaction now
    pub fn touch(&mut self) {
        self.last_seen = Some(Utc::now());
    }

    /// Remember a proposed word, once
    pub fn add_suggested_word(&mut self, word: &str) {
        if !self.suggested_words.iter().any(|w| w == word) {
            self.suggested_words.push(word.to_string());
        }
    }
}

/// Profile fields supplied by the transport on each interaction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerInfo {
    /// Chat user id
    pub id: UserId,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: Option<String>,
    /// Public handle
    pub username: Option<String>,
    /// Interface language
    pub language_code: Option<String>,
}

impl PlayerInfo {
    /// Player known only by id and first name
    #[must_use]
    pub fn new(id: impl Into<UserId>, first_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            ..Self::default()
        }
    }

    /// Copy the transport-supplied fields into a stored profile
    pub fn apply_to(&self, profile: &mut UserProfile) {
        profile.first_name.clone_from(&self.first_name);
        profile.last_name.clone_from(&self.last_name);
        profile.username.clone_from(&self.username);
        profile.language_code.clone_from(&self.language_code);
        profile.touch();
    }
}

/// The user store document
///
/// Users are kept sorted by id, which also fixes the leaderboard tie-break.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreData {
    /// Profiles by user id
    pub users: BTreeMap<UserId, UserProfile>,
    /// Totals across all players
    pub global: GlobalStats,
}

/// Whole-document persistence used by the engine
///
/// `transaction` is the only way the engine mutates user data. The default
/// implementation is a plain load/mutate/save with no isolation; stores that
/// can be shared should override it to serialize writers.
pub trait Store {
    /// Read the user store. Missing or empty documents load as empty.
    ///
    /// # Errors
    /// Returns an error if the document exists but cannot be read or decoded.
    fn load(&self) -> Result<StoreData>;

    /// Replace the user store
    ///
    /// # Errors
    /// Returns an error if the document cannot be written.
    fn save(&self, data: &StoreData) -> Result<()>;

    /// Read the suggestion queue. Missing or broken documents load as empty.
    ///
    /// # Errors
    /// Returns an error if the document exists but cannot be read.
    fn load_suggestions(&self) -> Result<SuggestionSet>;

    /// Replace the suggestion queue
    ///
    /// # Errors
    /// Returns an error if the document cannot be written.
    fn save_suggestions(&self, suggestions: &SuggestionSet) -> Result<()>;

    /// Load (and normalize) the dictionary
    ///
    /// # Errors
    /// Returns `EngineError::Dictionary` if it is missing or corrupt. Callers
    /// treat this as fatal.
    fn load_dictionary(&self) -> Result<Dictionary>;

    /// Replace the dictionary
    ///
    /// # Errors
    /// Returns an error if the document cannot be written.
    fn save_dictionary(&self, dictionary: &Dictionary) -> Result<()>;

    /// Load the user store, apply `f`, save the result
    ///
    /// # Errors
    /// Returns load or save failures. `f` itself cannot fail.
    fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut StoreData) -> T,
    {
        let mut data = self.load()?;
        let out = f(&mut data);
        self.save(&data)?;
        Ok(out)
    }

    /// Load the suggestion queue, apply `f`, save the result
    ///
    /// # Errors
    /// Returns load or save failures.
    fn update_suggestions<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut SuggestionSet) -> T,
    {
        let mut suggestions = self.load_suggestions()?;
        let out = f(&mut suggestions);
        self.save_suggestions(&suggestions)?;
        Ok(out)
    }
}
