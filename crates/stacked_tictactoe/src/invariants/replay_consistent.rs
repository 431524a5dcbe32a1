//! Replay invariant: the history reproduces the meta-board.

use super::Invariant;
use crate::meta::MetaBoard;
use crate::session::MatchSession;

/// Invariant: Replaying the move history onto a fresh meta-board
/// reproduces the session's meta-board exactly.
///
/// Replay re-runs every placement and re-evaluates every outcome at
/// both levels, so agreement means the stored grids, projections, and
/// cached outcomes all derive from the moves actually made. Marks are
/// monotonic as a consequence: an overwritten cell could never replay.
pub struct ReplayConsistentInvariant;

impl Invariant<MatchSession> for ReplayConsistentInvariant {
    fn holds(session: &MatchSession) -> bool {
        let mut replayed = MetaBoard::new();

        for record in session.history() {
            if replayed
                .apply_move(record.slot(), record.cell(), record.mark())
                .is_err()
            {
                return false;
            }
        }

        replayed == *session.meta()
    }

    fn description() -> &'static str {
        "Replaying the move history reproduces the meta-board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Mark;

    #[test]
    fn test_fresh_session_holds() {
        let session = MatchSession::new("Ada".to_string(), "Grace".to_string());
        assert!(ReplayConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_holds_after_moves() {
        let mut session = MatchSession::new("Ada".to_string(), "Grace".to_string());
        session.apply_move(4, 4).expect("Valid move");
        session.apply_move(4, 0).expect("Valid move");
        session.apply_move(8, 2).expect("Valid move");

        assert!(ReplayConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_unrecorded_move_violates() {
        let mut session = MatchSession::new("Ada".to_string(), "Grace".to_string());
        session.apply_move(4, 4).expect("Valid move");

        // Place a mark directly on the board, bypassing the history
        session
            .meta
            .apply_move(Position::TopLeft, Position::TopLeft, Mark::O)
            .expect("Valid move");

        assert!(!ReplayConsistentInvariant::holds(&session));
    }
}
