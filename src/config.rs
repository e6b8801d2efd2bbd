//! Engine configuration
//!
//! Where the three JSON documents live and how large the suggestion queue
//! may grow.

use std::path::{Path, PathBuf};

/// Dictionary document name inside the data directory
pub const DICTIONARY_FILE: &str = "base_words.json";

/// User store document name inside the data directory
pub const USERS_FILE: &str = "user_activity.json";

/// Suggestion queue document name inside the data directory
pub const SUGGESTIONS_FILE: &str = "suggestions.json";

/// Default cap on the serialized suggestion queue (bytes)
pub const DEFAULT_SUGGESTIONS_LIMIT: usize = 1_000_000;

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the JSON documents
    pub data_dir: PathBuf,
    /// New suggestions are refused once the queue serializes to this many bytes
    pub suggestions_limit: usize,
}

impl Config {
    /// Configuration rooted at `data_dir` with default limits
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            suggestions_limit: DEFAULT_SUGGESTIONS_LIMIT,
        }
    }

    /// Path of the dictionary document
    #[must_use]
    pub fn dictionary_path(&self) -> PathBuf {
        self.data_dir.join(DICTIONARY_FILE)
    }

    /// Path of the user store document
    #[must_use]
    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join(USERS_FILE)
    }

    /// Path of the suggestion queue document
    #[must_use]
    pub fn suggestions_path(&self) -> PathBuf {
        self.data_dir.join(SUGGESTIONS_FILE)
    }

    /// Data directory
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_inside_data_dir() {
        let config = Config::new("/srv/game");
        assert_eq!(config.data_dir(), Path::new("/srv/game"));
        assert_eq!(
            config.dictionary_path(),
            PathBuf::from("/srv/game/base_words.json")
        );
        assert_eq!(
            config.users_path(),
            PathBuf::from("/srv/game/user_activity.json")
        );
        assert_eq!(
            config.suggestions_path(),
            PathBuf::from("/srv/game/suggestions.json")
        );
    }

    #[test]
    fn default_limit() {
        assert_eq!(Config::default().suggestions_limit, 1_000_000);
    }
}
