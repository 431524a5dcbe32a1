//! First-class move types and the session error taxonomy.
//!
//! Moves are domain events, not side effects. A recorded move names the
//! acting mark and the full two-level address of the cell it landed on,
//! which is enough to replay a match from scratch.

use crate::position::Position;
use crate::subboard::PlaceError;
use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in the match: a mark placed at a cell of one sub-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The mark that made the move.
    pub mark: Mark,
    /// The sub-board the move landed on.
    pub slot: Position,
    /// The cell within the sub-board.
    pub cell: Position,
}

impl MoveRecord {
    /// Creates a new move record.
    #[instrument]
    pub fn new(mark: Mark, slot: Position, cell: Position) -> Self {
        Self { mark, slot, cell }
    }

    /// Returns the mark that made this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the sub-board address of this move.
    pub fn slot(&self) -> Position {
        self.slot
    }

    /// Returns the cell address of this move.
    pub fn cell(&self) -> Position {
        self.cell
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {} / {}", self.mark, self.slot, self.cell)
    }
}

/// Detail of a rejected move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The sub-board index is outside 0-8.
    #[display("Sub-board index {} is out of range (must be 0-8)", _0)]
    SubBoardOutOfRange(usize),

    /// The cell index is outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    CellOutOfRange(usize),

    /// The addressed sub-board has already been won or tied.
    #[display("Sub-board {} is already closed", slot)]
    SubBoardClosed {
        /// The closed sub-board.
        slot: Position,
    },

    /// The addressed cell is already occupied.
    #[display("Cell {} of sub-board {} is already occupied", cell, slot)]
    CellOccupied {
        /// The sub-board holding the cell.
        slot: Position,
        /// The occupied cell.
        cell: Position,
    },
}

impl std::error::Error for InvalidMove {}

impl InvalidMove {
    /// Attaches the sub-board address to a placement rejection.
    pub(crate) fn from_place_error(slot: Position, err: PlaceError) -> Self {
        match err {
            PlaceError::BoardClosed => InvalidMove::SubBoardClosed { slot },
            PlaceError::CellOccupied(cell) => InvalidMove::CellOccupied { slot, cell },
        }
    }
}

/// Error returned when a session rejects a move.
///
/// Rejections are recoverable: the session state is untouched and the
/// caller may retry with a corrected move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum MoveError {
    /// The match outcome is already terminal.
    #[display("Match is already over")]
    MatchAlreadyOver,

    /// The move itself was invalid.
    #[display("{}", _0)]
    #[from]
    InvalidMove(InvalidMove),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_record_display() {
        let record = MoveRecord::new(Mark::X, Position::TopLeft, Position::Center);
        assert_eq!(record.to_string(), "X -> Top-left / Center");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InvalidMove::SubBoardOutOfRange(12).to_string(),
            "Sub-board index 12 is out of range (must be 0-8)"
        );
        assert_eq!(
            InvalidMove::SubBoardClosed {
                slot: Position::TopLeft
            }
            .to_string(),
            "Sub-board Top-left is already closed"
        );
        assert_eq!(
            MoveError::MatchAlreadyOver.to_string(),
            "Match is already over"
        );
    }

    #[test]
    fn test_place_error_mapping() {
        let closed = InvalidMove::from_place_error(Position::Center, PlaceError::BoardClosed);
        assert_eq!(
            closed,
            InvalidMove::SubBoardClosed {
                slot: Position::Center
            }
        );

        let occupied = InvalidMove::from_place_error(
            Position::Center,
            PlaceError::CellOccupied(Position::TopRight),
        );
        assert_eq!(
            occupied,
            InvalidMove::CellOccupied {
                slot: Position::Center,
                cell: Position::TopRight
            }
        );
    }

    #[test]
    fn test_invalid_move_wraps_into_move_error() {
        let err: MoveError = InvalidMove::CellOutOfRange(42).into();
        assert_eq!(err, MoveError::InvalidMove(InvalidMove::CellOutOfRange(42)));
    }
}
