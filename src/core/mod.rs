//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterStatuses, Status, letter_statuses};
pub use word::{Word, WordError, normalize};

/// Shortest playable word
pub const MIN_WORD_LEN: usize = 4;

/// Longest playable word
pub const MAX_WORD_LEN: usize = 11;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;
