//! Command implementations

pub mod play;

pub use play::{Input, run_interactive};
