//! JSON documents on disk
//!
//! Three files in one data directory. Each transaction holds a per-document
//! lock for its whole load/mutate/save cycle, so writers inside one process
//! never overwrite each other. Files are replaced by renaming a freshly
//! written sibling.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, instrument, warn};

use super::{Store, StoreData};
use crate::config::Config;
use crate::dictionary::{Dictionary, SuggestionSet, loader};
use crate::error::{EngineError, Result};

/// Store backed by JSON files
#[derive(Debug)]
pub struct JsonFileStore {
    dictionary_path: PathBuf,
    users_path: PathBuf,
    suggestions_path: PathBuf,
    users_lock: Mutex<()>,
    suggestions_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Store using the paths from `config`
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            dictionary_path: config.dictionary_path(),
            users_path: config.users_path(),
            suggestions_path: config.suggestions_path(),
            users_lock: Mutex::new(()),
            suggestions_lock: Mutex::new(()),
        }
    }

    /// Path of the user store document
    #[must_use]
    pub fn users_path(&self) -> &Path {
        &self.users_path
    }
}

/// Read a document, treating absent, blank or syntactically broken files as
/// empty
///
/// A file that parses as JSON but has the wrong shape is an error, so a
/// later save cannot silently replace real data with an empty template.
fn read_document<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "Document missing, starting empty");
            return Ok(T::default());
        }
        Err(e) => return Err(EngineError::io(path, e)),
    };

    if raw.trim().is_empty() {
        return Ok(T::default());
    }

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(e) if matches!(e.classify(), Category::Syntax | Category::Eof) => {
            warn!(path = %path.display(), error = %e, "Unparsable document, starting empty");
            Ok(T::default())
        }
        Err(e) => Err(EngineError::json(path, e)),
    }
}

/// Write a document as pretty JSON
///
/// The content goes to a `.json.tmp` sibling first and is renamed over
/// `path`, so readers see either the old or the new document, never a
/// truncated one.
pub(crate) fn write_document<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| EngineError::io(dir, e))?;
    }

    let json = serde_json::to_string_pretty(value).map_err(|e| EngineError::json(path, e))?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).map_err(|e| EngineError::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| EngineError::io(path, e))
}

impl Store for JsonFileStore {
    fn load(&self) -> Result<StoreData> {
        read_document(&self.users_path)
    }

    fn save(&self, data: &StoreData) -> Result<()> {
        write_document(&self.users_path, data)
    }

    fn load_suggestions(&self) -> Result<SuggestionSet> {
        read_document(&self.suggestions_path)
    }

    fn save_suggestions(&self, suggestions: &SuggestionSet) -> Result<()> {
        write_document(&self.suggestions_path, suggestions)
    }

    fn load_dictionary(&self) -> Result<Dictionary> {
        loader::load_from_file(&self.dictionary_path)
    }

    fn save_dictionary(&self, dictionary: &Dictionary) -> Result<()> {
        loader::save_to_file(dictionary, &self.dictionary_path)
    }

    #[instrument(skip_all, fields(path = %self.users_path.display()))]
    fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut StoreData) -> T,
    {
        let _guard = self
            .users_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let mut data = self.load()?;
        let out = f(&mut data);
        self.save(&data)?;
        debug!(users = data.users.len(), "User store saved");
        Ok(out)
    }

    #[instrument(skip_all, fields(path = %self.suggestions_path.display()))]
    fn update_suggestions<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut SuggestionSet) -> T,
    {
        let _guard = self
            .suggestions_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let mut suggestions = self.load_suggestions()?;
        let out = f(&mut suggestions);
        self.save_suggestions(&suggestions)?;
        Ok(out)
    }
}
