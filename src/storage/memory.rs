//! In-memory store for tests and embedding

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{Store, StoreData};
use crate::dictionary::{Dictionary, SuggestionSet};
use crate::error::Result;

/// Store that keeps every document in memory
///
/// Transactions hold the document lock for the whole closure.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Mutex<StoreData>,
    suggestions: Mutex<SuggestionSet>,
    dictionary: Mutex<Dictionary>,
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MemoryStore {
    /// Empty store holding the given dictionary
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary: Mutex::new(dictionary),
            ..Self::default()
        }
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<StoreData> {
        Ok(locked(&self.users).clone())
    }

    fn save(&self, data: &StoreData) -> Result<()> {
        locked(&self.users).clone_from(data);
        Ok(())
    }

    fn load_suggestions(&self) -> Result<SuggestionSet> {
        Ok(locked(&self.suggestions).clone())
    }

    fn save_suggestions(&self, suggestions: &SuggestionSet) -> Result<()> {
        locked(&self.suggestions).clone_from(suggestions);
        Ok(())
    }

    fn load_dictionary(&self) -> Result<Dictionary> {
        Ok(locked(&self.dictionary).clone())
    }

    fn save_dictionary(&self, dictionary: &Dictionary) -> Result<()> {
        locked(&self.dictionary).clone_from(dictionary);
        Ok(())
    }

    fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut StoreData) -> T,
    {
        Ok(f(&mut locked(&self.users)))
    }

    fn update_suggestions<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut SuggestionSet) -> T,
    {
        Ok(f(&mut locked(&self.suggestions)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_mutates_in_place() {
        let store = MemoryStore::default();
        store
            .transaction(|data| data.global.total_games = 3)
            .unwrap();
        assert_eq!(store.load().unwrap().global.total_games, 3);
    }

    #[test]
    fn dictionary_round_trip() {
        let store = MemoryStore::new(Dictionary::from_raw(["lemon"], ["lemur"]));
        let dictionary = store.load_dictionary().unwrap();
        assert!(dictionary.contains("lemur"));

        store.save_dictionary(&Dictionary::default()).unwrap();
        assert!(store.load_dictionary().unwrap().is_empty());
    }
}
