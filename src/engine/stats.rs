//! Win/loss statistics
//!
//! Counters change only when a game ends in a win or a loss. Abandoned games
//! (reset) leave every counter untouched.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::storage::{StoreData, UserId, UserProfile};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    /// Secret guessed within the attempt limit
    Won,
    /// Attempts exhausted
    Lost,
}

/// Per-player counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserStats {
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    /// `wins / games_played`, 0 before the first game
    pub win_rate: f64,
}

impl UserStats {
    fn record(&mut self, outcome: GameOutcome) {
        self.games_played += 1;
        match outcome {
            GameOutcome::Won => self.wins += 1,
            GameOutcome::Lost => self.losses += 1,
        }
        self.win_rate = rate(self.wins, self.games_played);
    }
}

/// Current leader by total wins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopPlayer {
    pub user_id: UserId,
    /// Handle or first name at the time of the last win
    pub username: String,
    pub wins: u32,
}

/// Totals across every player
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalStats {
    pub total_games: u32,
    pub total_wins: u32,
    pub total_losses: u32,
    /// `total_wins / total_games`, 0 before the first game
    pub win_rate: f64,
    /// Recomputed on every win
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_player: Option<TopPlayer>,
}

impl GlobalStats {
    fn record(&mut self, outcome: GameOutcome) {
        self.total_games += 1;
        match outcome {
            GameOutcome::Won => self.total_wins += 1,
            GameOutcome::Lost => self.total_losses += 1,
        }
        self.win_rate = rate(self.total_wins, self.total_games);
    }
}

fn rate(wins: u32, games: u32) -> f64 {
    if games == 0 {
        0.0
    } else {
        f64::from(wins) / f64::from(games)
    }
}

/// Apply a finished game to the player's and the global counters
///
/// A win also recomputes the leaderboard leader. Creates the profile if the
/// player has none yet.
pub fn record_result(data: &mut StoreData, user_id: &str, outcome: GameOutcome) {
    let stats = &mut data.users.entry(user_id.to_string()).or_default().stats;
    stats.record(outcome);
    debug!(user_id, ?outcome, games = stats.games_played, wins = stats.wins, "User stats updated");

    data.global.record(outcome);

    if outcome == GameOutcome::Won {
        data.global.top_player = leader(&data.users);
        if let Some(top) = &data.global.top_player {
            info!(user_id = %top.user_id, wins = top.wins, "Leaderboard leader");
        }
    }
}

/// Player with the most wins
///
/// Ties go to the lowest user id (the first in map order). Returns `None`
/// when there are no players.
#[must_use]
pub fn leader(users: &BTreeMap<UserId, UserProfile>) -> Option<TopPlayer> {
    let mut best: Option<(&UserId, &UserProfile)> = None;
    for (id, profile) in users {
        if best.is_none_or(|(_, b)| profile.stats.wins > b.stats.wins) {
            best = Some((id, profile));
        }
    }

    best.map(|(id, profile)| TopPlayer {
        user_id: id.clone(),
        username: profile.display_name().to_string(),
        wins: profile.stats.wins,
    })
}
