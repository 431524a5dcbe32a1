//! Alternating marks invariant: moves alternate, X first.

use super::Invariant;
use crate::session::MatchSession;
use crate::types::Mark;

/// Invariant: Moves in the current match alternate marks, starting
/// with X.
///
/// X opens every match, so even history indices hold X moves and odd
/// indices hold O moves. The history is cleared at every reset, which
/// restarts the alternation.
pub struct AlternatingMarksInvariant;

impl Invariant<MatchSession> for AlternatingMarksInvariant {
    fn holds(session: &MatchSession) -> bool {
        session
            .history()
            .iter()
            .enumerate()
            .all(|(index, record)| {
                let expected = if index % 2 == 0 { Mark::X } else { Mark::O };
                record.mark() == expected
            })
    }

    fn description() -> &'static str {
        "Moves alternate marks starting with X"
    }
}
