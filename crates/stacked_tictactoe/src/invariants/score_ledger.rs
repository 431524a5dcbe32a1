//! Score ledger invariant: counters agree with the result log.

use super::Invariant;
use crate::score::TIE_LABEL;
use crate::session::MatchSession;

/// Invariant: Win and tie counters sum to the result log length, and
/// every log entry names one of the session identities or the tie
/// label.
///
/// Every recorded result bumps exactly one counter and appends exactly
/// one log entry, so the two stay in lockstep for the life of the
/// session.
pub struct ScoreLedgerInvariant;

impl Invariant<MatchSession> for ScoreLedgerInvariant {
    fn holds(session: &MatchSession) -> bool {
        let board = session.scoreboard();
        let wins: u32 = board.wins().values().sum();
        let total = wins + *board.ties();
        if total as usize != session.result_log().len() {
            return false;
        }

        session.result_log().iter().all(|record| {
            let label = record.winner_label().as_str();
            label == session.player_one() || label == session.player_two() || label == TIE_LABEL
        })
    }

    fn description() -> &'static str {
        "Win and tie counters match the result log"
    }
}
