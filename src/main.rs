//! Wordle Engine - CLI
//!
//! Plays the word game against a JSON data directory. Each subcommand is one
//! engine operation for one player, so a game can be continued across runs.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_engine::{
    commands::run_interactive,
    config::Config,
    dictionary::SuggestionList,
    engine::Engine,
    output::{
        print_approve_summary, print_global_stats, print_guess, print_hint, print_move_report,
        print_remove_report, print_reset, print_start, print_suggest, print_suggestions,
        print_user_stats,
    },
    storage::{JsonFileStore, PlayerInfo},
};

#[derive(Parser)]
#[command(
    name = "wordle-engine",
    about = "Word-guessing game with per-player sessions, hints and statistics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Player id
    #[arg(short, long, global = true, env = "WORDLE_USER", default_value = "local")]
    user: String,

    /// Player display name (defaults to the id)
    #[arg(long, global = true)]
    name: Option<String>,

    /// Directory holding base_words.json, user_activity.json and suggestions.json
    #[arg(short, long, global = true, env = "WORDLE_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Seed for reproducible secrets and hints
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game on the terminal (default)
    Interactive,

    /// Start a game, or show the one in progress
    Play {
        /// Word length, 4 to 11 (ignored when a game is in progress)
        length: Option<usize>,
    },

    /// Submit a guess
    Guess {
        /// The guessed word
        word: String,
    },

    /// Get a hint word (once per game)
    Hint,

    /// Abandon the current game without affecting statistics
    Reset,

    /// Show the player's statistics
    Stats,

    /// Show statistics across all players
    Global,

    /// Propose a dictionary change: black (remove), white (add secret), add (guess-only)
    Suggest {
        /// Target list
        list: SuggestionList,
        /// The word
        word: String,
    },

    /// Review the suggestion queue
    Suggestions {
        #[command(subcommand)]
        action: SuggestionsAction,
    },
}

#[derive(Subcommand)]
enum SuggestionsAction {
    /// List pending suggestions
    View,

    /// Move words from black or white to add
    Move {
        /// Words to move
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Drop words from one list
    Remove {
        /// List to remove from
        list: SuggestionList,
        /// Words to drop
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Apply every pending suggestion to the dictionary
    Approve,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = Config::new(&cli.data_dir);
    let store = JsonFileStore::new(&config);
    let mut engine = Engine::open(store)
        .with_context(|| {
            format!(
                "Cannot start without a dictionary in {}",
                config.data_dir().display()
            )
        })?
        .with_suggestions_limit(config.suggestions_limit);
    if let Some(seed) = cli.seed {
        engine = engine.with_seed(seed);
    }
    info!(data_dir = %config.data_dir().display(), user = %cli.user, "Engine opened");

    let user = cli.user.as_str();
    let player = PlayerInfo::new(user, cli.name.as_deref().unwrap_or(user));

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Interactive);

    match command {
        Commands::Interactive => {
            engine.register_user(&player)?;
            run_interactive(&engine, user, io::stdin().lock())?;
        }
        Commands::Play { length } => {
            engine.register_user(&player)?;
            print_start(&engine.start_or_resume(user, length)?);
        }
        Commands::Guess { word } => {
            engine.register_user(&player)?;
            print_guess(&engine.submit_guess(user, &word)?);
        }
        Commands::Hint => print_hint(&engine.request_hint(user)?),
        Commands::Reset => print_reset(engine.reset(user)?),
        Commands::Stats => print_user_stats(user, engine.get_user_stats(user)?.as_ref()),
        Commands::Global => print_global_stats(&engine.get_global_stats()?),
        Commands::Suggest { list, word } => {
            engine.register_user(&player)?;
            print_suggest(&engine.suggest(user, list, &word)?);
        }
        Commands::Suggestions { action } => run_suggestions_command(&mut engine, action)?,
    }

    Ok(())
}

fn run_suggestions_command(
    engine: &mut Engine<JsonFileStore>,
    action: SuggestionsAction,
) -> Result<()> {
    match action {
        SuggestionsAction::View => print_suggestions(&engine.suggestions()?),
        SuggestionsAction::Move { words } => print_move_report(&engine.move_suggestions(&words)?),
        SuggestionsAction::Remove { list, words } => {
            print_remove_report(list, &engine.remove_suggestions(list, &words)?);
        }
        SuggestionsAction::Approve => print_approve_summary(&engine.approve_suggestions()?),
    }
    Ok(())
}
