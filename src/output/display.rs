//! Display functions for engine outcomes

use colored::Colorize;

use super::formatters::{colored_row, create_progress_bar, emoji_row, keyboard, percentage};
use crate::dictionary::{MoveReport, SuggestionList, SuggestionSet};
use crate::engine::{
    ApproveSummary, GlobalStats, GuessOutcome, HintOutcome, RejectReason, RemoveReport,
    SessionView, StartOutcome, SuggestOutcome, UserStats,
};

/// Print every guess so far plus the letter summary
pub fn print_board(view: &SessionView) {
    println!();
    for row in &view.rows {
        println!("  {}  {}", colored_row(row), row.feedback.to_emoji());
    }
    for _ in view.rows.len()..view.max_attempts {
        println!("  {}", " · ".repeat(view.length).bright_black());
    }
    if !view.letters.is_empty() {
        println!("\n  Letters: {}", keyboard(&view.letters));
    }
    println!(
        "  Attempts: {}/{}{}",
        view.attempts,
        view.max_attempts,
        if view.hint_used { "  (hint used)" } else { "" }
    );
}

/// Print the result of starting or resuming a game
pub fn print_start(outcome: &StartOutcome) {
    match outcome {
        StartOutcome::Started(view) => {
            println!(
                "{}",
                format!("🎲 New game: guess the {}-letter word!", view.length)
                    .bright_cyan()
                    .bold()
            );
            print_board(view);
        }
        StartOutcome::Resumed(view) => {
            println!(
                "{}",
                format!("↩ Game in progress: {}-letter word", view.length)
                    .bright_cyan()
                    .bold()
            );
            print_board(view);
        }
        StartOutcome::LengthRequired => {
            println!("{}", "Choose a word length from 4 to 11 letters.".yellow());
        }
        StartOutcome::InvalidLength(length) => {
            println!(
                "{}",
                format!("❌ {length} letters is not playable, choose 4 to 11.").red()
            );
        }
        StartOutcome::NoWordsOfLength(length) => {
            println!(
                "{}",
                format!("❌ No {length}-letter words in the dictionary, pick another length.")
                    .red()
            );
        }
    }
}

/// Print why a guess was refused
pub fn print_rejection(reason: &RejectReason) {
    let message = match reason {
        RejectReason::NoActiveGame => "No game in progress. Start one first.".to_string(),
        RejectReason::ContainsWhitespace => "Send a single word without spaces.".to_string(),
        RejectReason::WrongLength { expected, actual } => {
            format!("The word has {expected} letters, your guess has {actual}.")
        }
        RejectReason::PendingSuggestion { word } => {
            format!("\"{word}\" is waiting for review and cannot be played yet.")
        }
        RejectReason::NotInDictionary { word } => format!(
            "\"{word}\" is not in the dictionary. Suggest it with: suggest white {word}"
        ),
    };
    println!("{}", format!("❌ {message}").red());
}

/// Print the result of a guess
pub fn print_guess(outcome: &GuessOutcome) {
    match outcome {
        GuessOutcome::Accepted(view) => {
            print_board(view);
            let left = view.remaining();
            println!("  {left} {} left", if left == 1 { "guess" } else { "guesses" });
        }
        GuessOutcome::Won(view) => {
            print_board(view);
            println!("\n{}", "═".repeat(40).bright_cyan());
            println!("{}", "  🎉  S O L V E D !  🎉".bright_green().bold());
            println!("{}", "═".repeat(40).bright_cyan());
            println!(
                "  Found in {} {}",
                view.attempts.to_string().bright_cyan().bold(),
                if view.attempts == 1 { "guess" } else { "guesses" }
            );
            for row in &view.rows {
                println!("    {}", emoji_row(row));
            }
        }
        GuessOutcome::Lost { view, secret } => {
            print_board(view);
            println!(
                "\n{} {}",
                "💀 Out of guesses. The word was".red().bold(),
                secret.text().to_uppercase().bright_yellow().bold()
            );
        }
        GuessOutcome::Rejected(reason) => print_rejection(reason),
    }
}

/// Print the result of a hint request
pub fn print_hint(outcome: &HintOutcome) {
    match outcome {
        HintOutcome::Hint(word) => println!(
            "💡 Hint: {}",
            word.text().to_uppercase().bright_yellow().bold()
        ),
        HintOutcome::AlreadyUsed => {
            println!("{}", "You already used the hint for this game.".yellow());
        }
        HintOutcome::Unavailable => {
            println!("{}", "No hint word fits this secret. Keep guessing!".yellow());
        }
        HintOutcome::NoActiveGame => {
            println!("{}", "❌ No game in progress. Start one first.".red());
        }
    }
}

/// Print the result of abandoning a game
pub fn print_reset(discarded: bool) {
    if discarded {
        println!("🔄 Game abandoned. Statistics are unchanged.");
    } else {
        println!("{}", "No game in progress.".yellow());
    }
}

/// Print one player's counters
pub fn print_user_stats(user_id: &str, stats: Option<&UserStats>) {
    let Some(stats) = stats else {
        println!("{}", format!("No games recorded for {user_id}.").yellow());
        return;
    };

    println!("\n📊 {}", format!("Statistics for {user_id}").bright_cyan().bold());
    println!("   Games played:  {}", stats.games_played);
    println!("   Wins:          {}", stats.wins.to_string().green());
    println!("   Losses:        {}", stats.losses.to_string().red());
    println!(
        "   Win rate:      [{}] {}",
        create_progress_bar(stats.win_rate, 1.0, 20).green(),
        percentage(stats.win_rate).bright_yellow()
    );
}

/// Print the totals across all players
pub fn print_global_stats(stats: &GlobalStats) {
    println!("\n🌍 {}", "Global statistics".bright_cyan().bold());
    println!("   Games played:  {}", stats.total_games);
    println!("   Wins:          {}", stats.total_wins.to_string().green());
    println!("   Losses:        {}", stats.total_losses.to_string().red());
    println!(
        "   Win rate:      [{}] {}",
        create_progress_bar(stats.win_rate, 1.0, 20).green(),
        percentage(stats.win_rate).bright_yellow()
    );
    match &stats.top_player {
        Some(top) => println!(
            "   Top player:    🏆 {} ({} wins)",
            top.username.bright_white().bold(),
            top.wins
        ),
        None => println!("   Top player:    nobody yet"),
    }
}

/// Print the result of a suggestion
pub fn print_suggest(outcome: &SuggestOutcome) {
    match outcome {
        SuggestOutcome::Added { list, word } => {
            println!("✅ \"{word}\" queued for the {list} list. Thanks!");
        }
        SuggestOutcome::AlreadyQueued { list, word } => {
            println!("{}", format!("\"{word}\" is already in the {list} list.").yellow());
        }
        SuggestOutcome::AlreadyKnown(word) => {
            println!("{}", format!("\"{word}\" is already in the dictionary.").yellow());
        }
        SuggestOutcome::NotInDictionary(word) => {
            println!(
                "{}",
                format!("❌ \"{word}\" is not a secret word, nothing to remove.").red()
            );
        }
        SuggestOutcome::InvalidWord(err) => println!("{}", format!("❌ {err}").red()),
        SuggestOutcome::ContainsWhitespace => {
            println!("{}", "❌ Suggest one word at a time.".red());
        }
        SuggestOutcome::Full => {
            println!("{}", "❌ The suggestion queue is full, try again later.".red());
        }
    }
}

/// Print the suggestion queue
pub fn print_suggestions(set: &SuggestionSet) {
    if set.is_empty() {
        println!("No pending suggestions.");
        return;
    }
    for list in SuggestionList::ALL {
        let words = set.list(list);
        println!(
            "\n{} ({})",
            list.name().to_uppercase().bright_cyan().bold(),
            words.len()
        );
        for word in words {
            println!("  • {word}");
        }
    }
}

/// Print which words moved to the add list
pub fn print_move_report(report: &MoveReport) {
    if report.is_empty() {
        println!("{}", "Nothing moved.".yellow());
        return;
    }
    if !report.from_black.is_empty() {
        println!("From black to add: {}", report.from_black.join(", "));
    }
    if !report.from_white.is_empty() {
        println!("From white to add: {}", report.from_white.join(", "));
    }
}

/// Print which words were removed
pub fn print_remove_report(list: SuggestionList, report: &RemoveReport) {
    if report.removed.is_empty() {
        println!("{}", format!("None of those words are in the {list} list.").yellow());
        return;
    }
    println!(
        "Removed from {list}: {} ({} player entries cleared)",
        report.removed.join(", "),
        report.purged
    );
}

/// Print what an approval changed
pub fn print_approve_summary(summary: &ApproveSummary) {
    if summary.is_empty() {
        println!("{}", "Dictionary unchanged.".yellow());
        return;
    }
    println!("{}", "✅ Dictionary updated".green().bold());
    println!("   Removed secrets:     {}", summary.removed);
    println!("   New secrets:         {}", summary.added_main);
    println!("   New guess-only:      {}", summary.added_additional);
    println!("   Player entries done: {}", summary.purged);
}
