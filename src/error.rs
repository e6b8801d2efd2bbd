//! Engine error types
//!
//! Only infrastructure failures are errors. Player mistakes (bad length,
//! unknown word, hint already used) are ordinary outcome values.

use derive_more::{Display, Error, From};
use std::path::{Path, PathBuf};

/// Failure of the engine's persistence or terminal plumbing
#[derive(Debug, Display, Error, From)]
pub enum EngineError {
    /// The dictionary file is missing or unreadable. Fatal at start-up.
    #[display("Dictionary unavailable at {}: {reason}", path.display())]
    Dictionary {
        /// Dictionary file
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// Reading or writing a store document failed
    #[display("I/O error on {}: {source}", path.display())]
    Io {
        /// Document being accessed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// A store document parsed but does not match the expected layout
    #[display("Malformed data in {}: {source}", path.display())]
    Json {
        /// Document being parsed
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },

    /// Reading from or writing to the player's terminal failed
    #[display("Terminal I/O failed: {_0}")]
    #[from]
    Terminal(std::io::Error),
}

impl EngineError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn dictionary(path: &Path, reason: impl ToString) -> Self {
        Self::Dictionary {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

/// Result alias used throughout the engine
pub type Result<T, E = EngineError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_path() {
        let err = EngineError::dictionary(Path::new("data/base_words.json"), "missing");
        assert_eq!(
            err.to_string(),
            "Dictionary unavailable at data/base_words.json: missing"
        );
    }

    #[test]
    fn terminal_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: EngineError = io.into();
        assert!(matches!(err, EngineError::Terminal(_)));
    }
}
