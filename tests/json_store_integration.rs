//! Engine over the JSON data directory: state survives restarts.

#![allow(clippy::unwrap_used)]

use std::fs;
use tempfile::TempDir;

use wordle_engine::config::Config;
use wordle_engine::dictionary::SuggestionList;
use wordle_engine::engine::{Engine, GuessOutcome, StartOutcome};
use wordle_engine::error::EngineError;
use wordle_engine::storage::JsonFileStore;

fn data_dir() -> (TempDir, Config) {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("base_words.json"),
        r#"{"main": ["Lemon", "pear", "ёжик"], "additional": ["melon", "lemon"]}"#,
    )
    .unwrap();
    let config = Config::new(dir.path());
    (dir, config)
}

fn open(config: &Config) -> Engine<JsonFileStore> {
    Engine::open(JsonFileStore::new(config)).unwrap().with_seed(2)
}

#[test]
fn game_resumes_after_restart() {
    let (_dir, config) = data_dir();

    let engine = open(&config);
    assert!(matches!(
        engine.start_or_resume("7", Some(5)).unwrap(),
        StartOutcome::Started(_)
    ));
    engine.submit_guess("7", "melon").unwrap();
    drop(engine);

    let engine = open(&config);
    let StartOutcome::Resumed(view) = engine.start_or_resume("7", None).unwrap() else {
        panic!("game should survive a restart");
    };
    assert_eq!(view.attempts, 1);
    assert!(matches!(
        engine.submit_guess("7", "lemon").unwrap(),
        GuessOutcome::Won(_)
    ));

    let raw = fs::read_to_string(config.users_path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["users"]["7"]["stats"]["wins"], 1);
    assert!(json["users"]["7"].get("current_game").is_none());
    assert_eq!(json["global"]["top_player"]["user_id"], "7");
}

#[test]
fn dictionary_is_normalized_on_open() {
    let (_dir, config) = data_dir();
    let engine = open(&config);
    assert!(engine.dictionary().contains_main("ежик"));

    let raw = fs::read_to_string(config.dictionary_path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["main"], serde_json::json!(["lemon", "pear", "ежик"]));
    assert_eq!(json["additional"], serde_json::json!(["melon"]));
}

#[test]
fn missing_dictionary_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = Config::new(dir.path());
    let err = Engine::open(JsonFileStore::new(&config)).unwrap_err();
    assert!(matches!(err, EngineError::Dictionary { .. }));
}

#[test]
fn corrupt_user_store_starts_empty() {
    let (_dir, config) = data_dir();
    fs::write(config.users_path(), "{ not json").unwrap();

    let engine = open(&config);
    assert_eq!(engine.get_global_stats().unwrap().total_games, 0);
    assert!(matches!(
        engine.start_or_resume("1", Some(4)).unwrap(),
        StartOutcome::Started(_)
    ));
}

#[test]
fn approval_persists_dictionary_and_clears_queue() {
    let (_dir, config) = data_dir();
    let mut engine = open(&config);
    engine.suggest("1", SuggestionList::White, "grape").unwrap();
    engine.approve_suggestions().unwrap();
    drop(engine);

    let engine = open(&config);
    assert!(engine.dictionary().contains_main("grape"));
    assert!(engine.suggestions().unwrap().is_empty());

    let raw = fs::read_to_string(config.suggestions_path()).unwrap();
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&raw).unwrap(),
        serde_json::json!({"black": [], "white": [], "add": []})
    );
}
