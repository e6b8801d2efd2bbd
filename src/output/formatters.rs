//! Formatting utilities for terminal output

use colored::{ColoredString, Colorize};

use crate::core::{LetterStatuses, Status};
use crate::engine::GuessRow;

fn tile(letter: char, status: Status) -> ColoredString {
    let text = format!(" {} ", letter.to_uppercase());
    match status {
        Status::Hit => text.black().on_green().bold(),
        Status::Present => text.black().on_yellow().bold(),
        Status::Miss => text.white().on_bright_black(),
    }
}

/// Render a guess as coloured letter tiles
#[must_use]
pub fn colored_row(row: &GuessRow) -> String {
    row.guess
        .chars()
        .iter()
        .zip(row.feedback.positions())
        .map(|(&letter, &status)| tile(letter, status).to_string())
        .collect()
}

/// Render a guess as `LEMON 🟨🟩🟨🟩🟩`
#[must_use]
pub fn emoji_row(row: &GuessRow) -> String {
    format!(
        "{} {}",
        row.guess.text().to_uppercase(),
        row.feedback.to_emoji()
    )
}

/// Letters tried so far, alphabetically, coloured by their best status
#[must_use]
pub fn keyboard(letters: &LetterStatuses) -> String {
    let mut seen: Vec<(char, Status)> = letters.iter().map(|(&c, &s)| (c, s)).collect();
    seen.sort_unstable_by_key(|&(c, _)| c);

    seen.into_iter()
        .map(|(letter, status)| {
            let text = letter.to_uppercase().to_string();
            match status {
                Status::Hit => text.green().bold().to_string(),
                Status::Present => text.yellow().bold().to_string(),
                Status::Miss => text.bright_black().strikethrough().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a 0..=1 rate as a percentage with one decimal
#[must_use]
pub fn percentage(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
