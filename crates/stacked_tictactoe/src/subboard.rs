//! A single 3x3 sub-board and its placement rules.

use crate::grid::Grid;
use crate::position::Position;
use crate::rules;
use crate::types::{Cell, Mark, Outcome};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the nine boards stacked into the meta-board.
///
/// The outcome is re-evaluated after every placement and caches the
/// result: a board whose outcome is terminal is closed and rejects all
/// further placements, so a terminal outcome never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubBoard {
    grid: Grid,
    outcome: Outcome,
}

/// Errors that can occur when placing a mark on a sub-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The board has already been won or tied.
    #[display("Board is already closed")]
    BoardClosed,

    /// The cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),
}

impl std::error::Error for PlaceError {}

impl SubBoard {
    /// Creates a new open sub-board.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Places a mark at the given cell and returns the new outcome.
    ///
    /// The caller reads the returned outcome to learn whether this
    /// placement closed the board, and with what result.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::BoardClosed`] if the board outcome is
    /// already terminal, or [`PlaceError::CellOccupied`] if the cell is
    /// taken. A rejected placement leaves the board untouched.
    #[instrument(skip(self))]
    pub fn place(&mut self, cell: Position, mark: Mark) -> Result<Outcome, PlaceError> {
        if self.outcome.is_terminal() {
            return Err(PlaceError::BoardClosed);
        }
        if !self.grid.is_empty(cell) {
            return Err(PlaceError::CellOccupied(cell));
        }

        self.grid.set(cell, Cell::Marked(mark));
        self.outcome = rules::evaluate(&self.grid);
        Ok(self.outcome)
    }

    /// Filters cells by grid state - returns only empty cells.
    #[instrument(skip(self))]
    pub fn open_cells(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.grid.is_empty(*pos))
            .collect()
    }
}

impl Default for SubBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_on_empty_board() {
        let mut board = SubBoard::new();
        let outcome = board.place(Position::Center, Mark::X).expect("Valid placement");
        assert_eq!(outcome, Outcome::InProgress);
        assert_eq!(board.grid().get(Position::Center), Cell::Marked(Mark::X));
    }

    #[test]
    fn test_occupied_cell_rejected_without_mutation() {
        let mut board = SubBoard::new();
        board.place(Position::Center, Mark::X).expect("Valid placement");
        let before = board.clone();

        let result = board.place(Position::Center, Mark::O);
        assert_eq!(result, Err(PlaceError::CellOccupied(Position::Center)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_winning_placement_closes_board() {
        let mut board = SubBoard::new();
        board.place(Position::TopLeft, Mark::X).expect("Valid placement");
        board.place(Position::TopCenter, Mark::X).expect("Valid placement");
        let outcome = board.place(Position::TopRight, Mark::X).expect("Valid placement");
        assert_eq!(outcome, Outcome::Won(Mark::X));
        assert_eq!(board.outcome(), Outcome::Won(Mark::X));

        // Closed board rejects everything, even empty cells
        let result = board.place(Position::BottomRight, Mark::O);
        assert_eq!(result, Err(PlaceError::BoardClosed));
        assert_eq!(board.outcome(), Outcome::Won(Mark::X));
    }

    #[test]
    fn test_tie_script_closes_board_before_full() {
        let mut board = SubBoard::new();
        let cells = [0, 1, 2, 4, 3, 5, 7, 6];
        let mut mark = Mark::X;
        for (idx, cell) in cells.iter().enumerate() {
            let pos = Position::from_index(*cell).expect("Valid index");
            let outcome = board.place(pos, mark).expect("Valid placement");
            if idx < cells.len() - 1 {
                assert_eq!(outcome, Outcome::InProgress);
            } else {
                assert_eq!(outcome, Outcome::Tied);
            }
            mark = mark.opponent();
        }

        // Tied with the bottom-right cell still empty
        assert!(board.grid().is_empty(Position::BottomRight));
        assert_eq!(board.outcome(), Outcome::Tied);
    }

    #[test]
    fn test_open_cells_shrink() {
        let mut board = SubBoard::new();
        assert_eq!(board.open_cells().len(), 9);
        board.place(Position::Center, Mark::X).expect("Valid placement");
        let open = board.open_cells();
        assert_eq!(open.len(), 8);
        assert!(!open.contains(&Position::Center));
    }
}
