//! Dictionary loading utilities
//!
//! Loads the `{ "main": [...], "additional": [...] }` document, normalizes
//! every entry and writes the cleaned lists back so the file heals itself on
//! every start.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

use super::Dictionary;
use crate::core::Word;
use crate::error::{EngineError, Result};
use crate::storage::write_document;

/// On-disk layout of the dictionary document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryFile {
    /// Secret candidates
    pub main: Vec<String>,
    /// Extra accepted guesses
    pub additional: Vec<String>,
}

impl From<&Dictionary> for DictionaryFile {
    fn from(dictionary: &Dictionary) -> Self {
        let texts = |words: &[Word]| -> Vec<String> {
            words.iter().map(|w| w.text().to_string()).collect()
        };
        Self {
            main: texts(dictionary.main()),
            additional: texts(dictionary.additional()),
        }
    }
}

/// Convert raw strings to a sorted, deduplicated Word list
///
/// Entries that are not 4-11 letters after normalization are dropped
/// silently.
///
/// # Examples
/// ```
/// use wordle_engine::dictionary::loader::words_from_slice;
///
/// let words = words_from_slice(&["Pear", "pear", "x1", "apple"]);
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["apple", "pear"]);
/// ```
#[must_use]
pub fn words_from_slice<S: AsRef<str>>(slice: &[S]) -> Vec<Word> {
    normalize_list(slice)
}

fn normalize_list<I>(raw: I) -> Vec<Word>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut words: Vec<Word> = raw
        .into_iter()
        .filter_map(|entry| match Word::new(entry.as_ref()) {
            Ok(word) => Some(word),
            Err(e) => {
                debug!(entry = entry.as_ref(), error = %e, "Dropping dictionary entry");
                None
            }
        })
        .collect();

    words.sort();
    words.dedup();
    words
}

/// Build a dictionary from raw main and additional word lists
///
/// Words present in `main` are removed from `additional`, so no entry ends up
/// in both partitions.
pub fn load<I, J>(raw_main: I, raw_additional: J) -> Dictionary
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    J: IntoIterator,
    J::Item: AsRef<str>,
{
    let main = normalize_list(raw_main);
    let mut additional = normalize_list(raw_additional);
    additional.retain(|word| main.binary_search(word).is_err());

    Dictionary { main, additional }
}

/// Load the dictionary document and rewrite it in normalized form
///
/// # Errors
///
/// Returns `EngineError::Dictionary` if the file is missing or is not a valid
/// dictionary document, and `EngineError::Io` if the normalized copy cannot
/// be written back.
///
/// # Examples
/// ```no_run
/// use wordle_engine::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("data/base_words.json").unwrap();
/// println!("Loaded {} secret words", dictionary.main().len());
/// ```
#[instrument]
pub fn load_from_file<P: AsRef<Path> + std::fmt::Debug>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| EngineError::dictionary(path, e))?;
    let file: DictionaryFile =
        serde_json::from_str(&content).map_err(|e| EngineError::dictionary(path, e))?;

    let dictionary = load(&file.main, &file.additional);
    info!(
        main = dictionary.main().len(),
        additional = dictionary.additional().len(),
        dropped = (file.main.len() + file.additional.len()).saturating_sub(dictionary.len()),
        "Dictionary loaded"
    );

    save_to_file(&dictionary, path)?;
    Ok(dictionary)
}

/// Write the dictionary as a pretty-printed, sorted JSON document
///
/// The previous document stays in place until the new one is complete.
///
/// # Errors
///
/// Returns `EngineError::Io` if the file cannot be written.
pub fn save_to_file(dictionary: &Dictionary, path: &Path) -> Result<()> {
    write_document(path, &DictionaryFile::from(dictionary))?;
    debug!(path = %path.display(), "Dictionary written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn load_normalizes_and_sorts() {
        let dictionary = load(["Pear", "APPLE", "Ёжик"], Vec::<String>::new());
        assert_eq!(texts(dictionary.main()), ["apple", "pear", "ежик"]);
    }

    #[test]
    fn load_drops_invalid_entries() {
        let dictionary = load(
            ["cat", "lemon", "l3mon", "two words", "abcdefghijkl", ""],
            ["ok"],
        );
        assert_eq!(texts(dictionary.main()), ["lemon"]);
        assert!(dictionary.additional().is_empty());
    }

    #[test]
    fn load_deduplicates_after_normalization() {
        let dictionary = load(["елка", "ЁЛКА", "Елка", "melon"], Vec::<&str>::new());
        assert_eq!(texts(dictionary.main()), ["melon", "елка"]);
    }

    #[test]
    fn main_wins_over_additional() {
        let dictionary = load(["lemon", "melon"], ["melon", "lemur"]);
        assert_eq!(texts(dictionary.main()), ["lemon", "melon"]);
        assert_eq!(texts(dictionary.additional()), ["lemur"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolongforthegame", "abc", "slate"]);
        assert_eq!(texts(&words), ["crane", "slate"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_rewrites_normalized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("base_words.json");
        fs::write(
            &path,
            r#"{"main": ["Pear", "apple", "apple", "x"], "additional": ["pear", "Lemur"]}"#,
        )
        .unwrap();

        let dictionary = load_from_file(&path).unwrap();
        assert_eq!(texts(dictionary.main()), ["apple", "pear"]);
        assert_eq!(texts(dictionary.additional()), ["lemur"]);

        let rewritten: DictionaryFile =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(rewritten.main, ["apple", "pear"]);
        assert_eq!(rewritten.additional, ["lemur"]);
    }

    #[test]
    fn save_to_file_replaces_without_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("base_words.json");
        fs::write(&path, r#"{"main": ["apple"], "additional": []}"#).unwrap();

        let dictionary = load(["melon", "lemon"], ["lemur"]);
        save_to_file(&dictionary, &path).unwrap();

        assert!(!dir.path().join("base_words.json.tmp").exists());
        let entries = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
        assert_eq!(load_from_file(&path).unwrap(), dictionary);
    }

    #[test]
    fn load_from_file_missing_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(dir.path().join("absent.json"));
        assert!(matches!(result, Err(EngineError::Dictionary { .. })));
    }

    #[test]
    fn load_from_file_corrupt_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("base_words.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            load_from_file(&path),
            Err(EngineError::Dictionary { .. })
        ));
    }
}
