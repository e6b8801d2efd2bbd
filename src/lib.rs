//! Wordle Engine
//!
//! A word-guessing game engine for chat bots: per-player sessions with
//! Wordle-style feedback, one hint per game, win/loss statistics and a
//! player-driven dictionary curation queue. State lives in a [`storage::Store`]
//! and is reloaded on every call.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::dictionary::Dictionary;
//! use wordle_engine::engine::{Engine, GuessOutcome, StartOutcome};
//! use wordle_engine::storage::MemoryStore;
//!
//! let dictionary = Dictionary::from_raw(["lemon"], ["melon"]);
//! let engine = Engine::new(MemoryStore::new(dictionary.clone()), dictionary);
//!
//! let start = engine.start_or_resume("42", Some(5)).unwrap();
//! assert!(matches!(start, StartOutcome::Started(_)));
//!
//! let outcome = engine.submit_guess("42", "Lemon").unwrap();
//! assert!(matches!(outcome, GuessOutcome::Won(_)));
//! ```

// Core domain types
pub mod core;

// Word lists and the suggestion queue
pub mod dictionary;

// Sessions, hints, statistics and curation
pub mod engine;

// Persistence
pub mod storage;

// Paths and limits
pub mod config;

// Error types
pub mod error;

// Interactive play
pub mod commands;

// Terminal output formatting
pub mod output;
