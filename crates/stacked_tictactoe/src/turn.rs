//! Turn control: which mark acts next.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Tracks the mark whose turn it is to act.
///
/// The controller itself advances unconditionally; the session decides
/// when to call it. In particular, a move that ends the match does not
/// advance the turn, so the acting mark at match end names the winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnController {
    acting: Mark,
}

impl TurnController {
    /// Creates a controller with X to act, the opening rule of every match.
    pub fn new() -> Self {
        Self { acting: Mark::X }
    }

    /// Returns the mark to act.
    pub fn acting(&self) -> Mark {
        self.acting
    }

    /// Passes the turn to the opponent.
    pub fn advance(&mut self) {
        self.acting = self.acting.opponent();
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}
