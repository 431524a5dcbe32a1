//! The 3x3 meta-board composed of nine sub-boards.

use crate::action::{InvalidMove, MoveError};
use crate::grid::Grid;
use crate::position::Position;
use crate::rules;
use crate::subboard::SubBoard;
use crate::types::{Mark, Outcome};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{info, instrument};

/// Nine sub-boards whose outcomes project into a 3x3 grid scored with
/// the same rules as any single board.
///
/// A won sub-board projects its winner's mark into the meta grid; a
/// tied sub-board projects a blocked cell that fills its slot without
/// belonging to either mark. The meta outcome is re-evaluated from the
/// projection after every move and freezes once terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaBoard {
    boards: [SubBoard; 9],
    outcome: Outcome,
}

impl MetaBoard {
    /// Creates a new meta-board with nine open sub-boards.
    pub fn new() -> Self {
        Self {
            boards: std::array::from_fn(|_| SubBoard::new()),
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the sub-board at the given slot.
    pub fn board(&self, slot: Position) -> &SubBoard {
        &self.boards[slot.to_index()]
    }

    /// Returns all nine sub-boards in slot order.
    pub fn boards(&self) -> &[SubBoard; 9] {
        &self.boards
    }

    /// Returns the match outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Projects each sub-board outcome into a 3x3 meta grid.
    pub fn projected_grid(&self) -> Grid {
        let mut grid = Grid::new();
        for slot in Position::ALL {
            grid.set(slot, self.boards[slot.to_index()].outcome().projected_cell());
        }
        grid
    }

    /// Applies a mark to a cell of the addressed sub-board.
    ///
    /// Returns the match outcome after the move. A move that closes a
    /// sub-board updates the projection, and the projection is scored
    /// with the same evaluator that scored the sub-board, so a single
    /// move can close both its board and the match.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::MatchAlreadyOver`] once the match outcome is
    /// terminal, or [`MoveError::InvalidMove`] when the sub-board is
    /// closed or the cell occupied. Rejected moves change nothing.
    #[instrument(skip(self))]
    pub fn apply_move(
        &mut self,
        slot: Position,
        cell: Position,
        mark: Mark,
    ) -> Result<Outcome, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::MatchAlreadyOver);
        }

        let board_outcome = self.boards[slot.to_index()]
            .place(cell, mark)
            .map_err(|err| InvalidMove::from_place_error(slot, err))?;

        if board_outcome.is_terminal() {
            info!(slot = %slot, outcome = %board_outcome, "Sub-board closed");
        }

        self.outcome = rules::evaluate(&self.projected_grid());
        Ok(self.outcome)
    }

    /// Filters moves by board state - returns open (slot, cell) pairs.
    #[instrument(skip(self))]
    pub fn open_moves(&self) -> Vec<(Position, Position)> {
        Position::iter()
            .filter(|slot| !self.board(*slot).outcome().is_terminal())
            .flat_map(|slot| {
                self.board(slot)
                    .open_cells()
                    .into_iter()
                    .map(move |cell| (slot, cell))
            })
            .collect()
    }
}

impl Default for MetaBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MetaBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for outer_row in 0..3 {
            for inner_row in 0..3 {
                for outer_col in 0..3 {
                    let board = &self.boards[outer_row * 3 + outer_col];
                    for inner_col in 0..3 {
                        let cell = Position::ALL[inner_row * 3 + inner_col];
                        let symbol = match board.outcome() {
                            Outcome::InProgress => board.grid().get(cell).symbol(),
                            closed => closed.projected_cell().symbol(),
                        };
                        write!(f, "{}", symbol)?;
                    }
                    if outer_col < 2 {
                        write!(f, " ")?;
                    }
                }
                writeln!(f)?;
            }
            if outer_row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
