//! Terminal output formatting
//!
//! Display utilities for engine outcomes and statistics.

pub mod display;
pub mod formatters;

pub use display::{
    print_approve_summary, print_board, print_global_stats, print_guess, print_hint,
    print_move_report, print_rejection, print_remove_report, print_reset, print_start,
    print_suggest, print_suggestions, print_user_stats,
};
