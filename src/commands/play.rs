//! Interactive play on stdin/stdout
//!
//! Text-based game loop over the engine. Every line goes through the same
//! engine operations the one-shot subcommands use, so the store stays the
//! single source of truth.

use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::engine::{Engine, GuessOutcome, RejectReason, StartOutcome};
use crate::error::Result;
use crate::output::{
    print_global_stats, print_guess, print_hint, print_reset, print_start, print_user_stats,
};
use crate::storage::Store;

/// What the player typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A word to guess
    Guess(String),
    /// `/hint`
    Hint,
    /// `/reset`
    Reset,
    /// `/stats`
    Stats,
    /// `/global`
    Global,
    /// `/help`
    Help,
    /// `/quit` or end of input
    Quit,
    /// A slash command we do not know
    Unknown(String),
}

impl Input {
    /// Parse one input line
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let Some(command) = line.strip_prefix('/') else {
            return Self::Guess(line.to_string());
        };
        match command.to_lowercase().as_str() {
            "hint" | "h" => Self::Hint,
            "reset" | "new" => Self::Reset,
            "stats" => Self::Stats,
            "global" => Self::Global,
            "help" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

fn print_help() {
    println!("Type a word to guess it. Commands:");
    println!("  /hint    show a word sharing some letters with the secret (once per game)");
    println!("  /reset   abandon this game (statistics are kept)");
    println!("  /stats   your statistics");
    println!("  /global  statistics of all players");
    println!("  /quit    leave; the game is saved and resumes next time\n");
}

/// Read a line with a prompt, `None` at end of input
fn prompt<R: BufRead>(input: &mut R, text: &str) -> Result<Option<String>> {
    print!("{text}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask for a word length until a game starts or input ends
fn start_game<S: Store, R: BufRead>(
    engine: &Engine<S>,
    user_id: &str,
    input: &mut R,
) -> Result<bool> {
    let mut outcome = engine.start_or_resume(user_id, None)?;
    loop {
        print_start(&outcome);
        if matches!(outcome, StartOutcome::Started(_) | StartOutcome::Resumed(_)) {
            return Ok(true);
        }

        let Some(line) = prompt(input, "Word length (4-11)")? else {
            return Ok(false);
        };
        if matches!(Input::parse(&line), Input::Quit) {
            return Ok(false);
        }
        outcome = match line.parse::<usize>() {
            Ok(length) => engine.start_or_resume(user_id, Some(length))?,
            Err(_) => StartOutcome::LengthRequired,
        };
    }
}

/// Run the interactive game loop for one player
///
/// # Errors
///
/// Returns an error on store failures or terminal I/O errors.
pub fn run_interactive<S: Store, R: BufRead>(
    engine: &Engine<S>,
    user_id: &str,
    mut input: R,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Word Game - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    if !start_game(engine, user_id, &mut input)? {
        println!("\n👋 Thanks for playing!\n");
        return Ok(());
    }

    loop {
        let Some(line) = prompt(&mut input, "Guess")? else {
            break;
        };
        let command = Input::parse(&line);
        debug!(?command, "Interactive input");

        let game_over = match command {
            Input::Quit => break,
            Input::Help => {
                print_help();
                false
            }
            Input::Hint => {
                print_hint(&engine.request_hint(user_id)?);
                false
            }
            Input::Reset => {
                print_reset(engine.reset(user_id)?);
                true
            }
            Input::Stats => {
                print_user_stats(user_id, engine.get_user_stats(user_id)?.as_ref());
                false
            }
            Input::Global => {
                print_global_stats(&engine.get_global_stats()?);
                false
            }
            Input::Unknown(other) => {
                println!("{}", format!("Unknown command /{other}, try /help").yellow());
                false
            }
            Input::Guess(word) if word.is_empty() => false,
            Input::Guess(word) => {
                let outcome = engine.submit_guess(user_id, &word)?;
                print_guess(&outcome);
                matches!(
                    outcome,
                    GuessOutcome::Won(_)
                        | GuessOutcome::Lost { .. }
                        | GuessOutcome::Rejected(RejectReason::NoActiveGame)
                )
            }
        };

        if game_over {
            match prompt(&mut input, "Play again? (yes/no)")? {
                Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                    println!("\n🔄 New game!\n");
                    if !start_game(engine, user_id, &mut input)? {
                        break;
                    }
                }
                _ => break,
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}
