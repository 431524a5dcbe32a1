//! Match session management: turn order, identities, and scoring.

use crate::action::{InvalidMove, MoveError, MoveRecord};
use crate::grid::Grid;
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::meta::MetaBoard;
use crate::position::Position;
use crate::score::{MatchRecord, ScoreBoard, ScoreKeeper};
use crate::subboard::SubBoard;
use crate::turn::TurnController;
use crate::types::{Mark, Outcome};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A session of repeated matches between two named identities.
///
/// The session owns the boards, the turn order, and the scoring. Mark
/// assignment rotates: player one holds X in the first match and the
/// identities swap marks at every reset, while scores and the result
/// log accumulate for the life of the session.
#[derive(Debug, Clone)]
pub struct MatchSession {
    pub(crate) player_one: String,
    pub(crate) player_two: String,
    pub(crate) player_one_is_x: bool,
    pub(crate) meta: MetaBoard,
    pub(crate) turns: TurnController,
    pub(crate) history: Vec<MoveRecord>,
    pub(crate) scores: ScoreKeeper,
}

impl MatchSession {
    /// Creates a new session with player one holding X.
    ///
    /// Identity labels are opaque to the engine: they key the
    /// scoreboard and the result log, nothing more. Two identical
    /// labels share a single scoreboard row.
    #[instrument]
    pub fn new(player_one: String, player_two: String) -> Self {
        info!(%player_one, %player_two, "Creating new match session");
        let scores = ScoreKeeper::new(&player_one, &player_two);
        Self {
            player_one,
            player_two,
            player_one_is_x: true,
            meta: MetaBoard::new(),
            turns: TurnController::new(),
            history: Vec::new(),
            scores,
        }
    }

    /// Applies the acting mark to a cell of the addressed sub-board.
    ///
    /// Indices are raw 0-8 values straight from the caller; everything
    /// is validated here before anything mutates. On success the move
    /// is appended to the history, then either the result is recorded
    /// (if this move ended the match) or the turn passes to the
    /// opponent. A move that only closes a sub-board still advances
    /// the turn; a move that ends the match does not, so the acting
    /// identity at match end is the winner.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::MatchAlreadyOver`] once the match outcome
    /// is terminal (checked before index validation), or
    /// [`MoveError::InvalidMove`] for an out-of-range index, a closed
    /// sub-board, or an occupied cell. A rejected move leaves the
    /// session untouched.
    #[instrument(skip(self))]
    pub fn apply_move(
        &mut self,
        sub_index: usize,
        cell_index: usize,
    ) -> Result<Snapshot, MoveError> {
        if self.meta.outcome().is_terminal() {
            warn!("Move attempted after match end");
            return Err(MoveError::MatchAlreadyOver);
        }

        let slot =
            Position::from_index(sub_index).ok_or(InvalidMove::SubBoardOutOfRange(sub_index))?;
        let cell =
            Position::from_index(cell_index).ok_or(InvalidMove::CellOutOfRange(cell_index))?;

        let mark = self.turns.acting();
        let outcome = self.meta.apply_move(slot, cell, mark)?;
        self.history.push(MoveRecord::new(mark, slot, cell));
        debug!(mark = ?mark, slot = %slot, cell = %cell, "Move applied");

        if outcome.is_terminal() {
            self.record_result(outcome);
        } else {
            self.turns.advance();
        }

        self.assert_invariants();
        Ok(self.snapshot())
    }

    /// Clears the boards for the next match and swaps mark assignment.
    ///
    /// The identity that held O takes X in the new match, and X always
    /// acts first. The move history is cleared; scores and the result
    /// log carry over untouched. Resetting is valid at any point, even
    /// mid-match.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) -> Snapshot {
        self.meta = MetaBoard::new();
        self.turns = TurnController::new();
        self.history.clear();
        self.player_one_is_x = !self.player_one_is_x;
        info!(
            player_one_is_x = self.player_one_is_x,
            "Boards reset for next match"
        );

        self.assert_invariants();
        self.snapshot()
    }

    /// Builds a view of the current state for rendering or transport.
    ///
    /// Snapshots are pure projections: building one never mutates the
    /// session, and consecutive snapshots with no transition between
    /// them are equal.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.meta.projected_grid(),
            self.meta.boards().clone(),
            self.meta.outcome(),
            self.turns.acting(),
            self.current_identity().to_string(),
        )
    }

    /// Returns the identity holding the given mark in the current match.
    pub fn identity_for(&self, mark: Mark) -> &str {
        match (mark, self.player_one_is_x) {
            (Mark::X, true) | (Mark::O, false) => &self.player_one,
            (Mark::X, false) | (Mark::O, true) => &self.player_two,
        }
    }

    /// Returns the identity whose turn it is to act.
    ///
    /// Once the match is won this is the winning identity, since the
    /// ending move does not pass the turn.
    pub fn current_identity(&self) -> &str {
        self.identity_for(self.turns.acting())
    }

    /// Returns the mark to act.
    pub fn acting_mark(&self) -> Mark {
        self.turns.acting()
    }

    /// Returns the meta-board.
    pub fn meta(&self) -> &MetaBoard {
        &self.meta
    }

    /// Returns the move history of the current match, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Returns the scoreboard.
    pub fn scoreboard(&self) -> &ScoreBoard {
        self.scores.board()
    }

    /// Returns the completed-match log, oldest first.
    pub fn result_log(&self) -> &[MatchRecord] {
        self.scores.log()
    }

    /// Returns player one's identity label.
    pub fn player_one(&self) -> &str {
        &self.player_one
    }

    /// Returns player two's identity label.
    pub fn player_two(&self) -> &str {
        &self.player_two
    }

    fn record_result(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(mark) => {
                let label = self.identity_for(mark).to_string();
                info!(winner = %label, "Match won");
                self.scores.record_win(&label);
            }
            Outcome::Tied => {
                info!("Match tied");
                self.scores.record_tie();
            }
            Outcome::InProgress => {}
        }
    }

    /// Asserts that all session invariants hold (debug builds only).
    fn assert_invariants(&self) {
        debug_assert!(
            SessionInvariants::check_all(self).is_ok(),
            "Session invariants violated"
        );
    }
}

/// A view of session state at one point in time.
///
/// Snapshots carry everything a renderer needs: the projected meta
/// grid, the full sub-boards, the match outcome, and whose turn it is
/// by mark and by identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new, Getters)]
pub struct Snapshot {
    /// 3x3 grid of projected sub-board outcomes.
    meta_grid: Grid,
    /// The nine sub-boards in slot order.
    sub_boards: [SubBoard; 9],
    /// Match outcome.
    outcome: Outcome,
    /// Mark to act (the winning mark once the match is won).
    acting_mark: Mark,
    /// Identity to act (the winning identity once the match is won).
    current_identity: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_with_player_one_as_x() {
        let session = MatchSession::new("Ada".to_string(), "Grace".to_string());
        assert_eq!(session.acting_mark(), Mark::X);
        assert_eq!(session.current_identity(), "Ada");
        assert_eq!(session.identity_for(Mark::O), "Grace");
    }

    #[test]
    fn test_reset_swaps_mark_assignment() {
        let mut session = MatchSession::new("Ada".to_string(), "Grace".to_string());
        session.reset_game();
        assert_eq!(session.current_identity(), "Grace");
        assert_eq!(session.identity_for(Mark::O), "Ada");

        session.reset_game();
        assert_eq!(session.current_identity(), "Ada");
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let mut session = MatchSession::new("Ada".to_string(), "Grace".to_string());
        session.apply_move(4, 0).expect("Valid move");
        assert_eq!(session.snapshot(), session.snapshot());
    }

    #[test]
    fn test_apply_move_advances_turn() {
        let mut session = MatchSession::new("Ada".to_string(), "Grace".to_string());
        let snapshot = session.apply_move(0, 4).expect("Valid move");
        assert_eq!(*snapshot.acting_mark(), Mark::O);
        assert_eq!(snapshot.current_identity(), "Grace");
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_out_of_range_indices_rejected() {
        let mut session = MatchSession::new("Ada".to_string(), "Grace".to_string());
        let before = session.snapshot();

        let result = session.apply_move(9, 0);
        assert_eq!(
            result,
            Err(MoveError::InvalidMove(InvalidMove::SubBoardOutOfRange(9)))
        );

        let result = session.apply_move(0, 42);
        assert_eq!(
            result,
            Err(MoveError::InvalidMove(InvalidMove::CellOutOfRange(42)))
        );

        assert_eq!(session.snapshot(), before);
        assert!(session.history().is_empty());
    }
}
