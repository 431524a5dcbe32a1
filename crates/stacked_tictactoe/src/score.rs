//! Session scoring: win counters and the match result log.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, instrument};

/// Label recorded in the result log when a match ends tied.
pub const TIE_LABEL: &str = "Tie";

/// Win counters keyed by identity label, plus a shared tie counter.
///
/// Both identities are seeded at zero so a scoreboard always shows a
/// row per player, even before anyone has won.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ScoreBoard {
    wins: BTreeMap<String, u32>,
    ties: u32,
}

impl ScoreBoard {
    /// Creates a scoreboard with both identities seeded at zero wins.
    pub fn new(player_one: &str, player_two: &str) -> Self {
        let mut wins = BTreeMap::new();
        wins.insert(player_one.to_string(), 0);
        wins.insert(player_two.to_string(), 0);
        Self { wins, ties: 0 }
    }

    /// Returns the win count for the given identity.
    pub fn wins_for(&self, label: &str) -> u32 {
        self.wins.get(label).copied().unwrap_or(0)
    }

    fn record_win(&mut self, label: &str) {
        *self.wins.entry(label.to_string()).or_insert(0) += 1;
    }

    fn record_tie(&mut self) {
        self.ties += 1;
    }
}

/// One completed match in the result log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new, Getters)]
pub struct MatchRecord {
    /// Winning identity's label, or [`TIE_LABEL`] for a tied match.
    winner_label: String,
    /// When the match ended (local time).
    recorded_at: NaiveDateTime,
}

impl std::fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.winner_label, self.recorded_at)
    }
}

/// Scoring state that survives match resets.
///
/// Counters and the append-only result log accumulate across every
/// match of a session; only a brand-new session starts them fresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreKeeper {
    board: ScoreBoard,
    log: Vec<MatchRecord>,
}

impl ScoreKeeper {
    /// Creates a score keeper for the two identities.
    pub fn new(player_one: &str, player_two: &str) -> Self {
        Self {
            board: ScoreBoard::new(player_one, player_two),
            log: Vec::new(),
        }
    }

    /// Returns the scoreboard.
    pub fn board(&self) -> &ScoreBoard {
        &self.board
    }

    /// Returns the result log, oldest first.
    pub fn log(&self) -> &[MatchRecord] {
        &self.log
    }

    /// Records a match won by the given identity.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, label: &str) {
        info!(label, "Recording match win");
        self.board.record_win(label);
        self.log.push(MatchRecord::new(label.to_string(), now()));
    }

    /// Records a tied match.
    #[instrument(skip(self))]
    pub fn record_tie(&mut self) {
        info!("Recording tied match");
        self.board.record_tie();
        self.log.push(MatchRecord::new(TIE_LABEL.to_string(), now()));
    }
}

fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
