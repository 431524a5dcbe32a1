//! Core domain types for stacked tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Mark X (acts first in every match).
    X,
    /// Mark O (acts second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell in a 3x3 grid.
///
/// Sub-board grids only ever hold `Empty` or `Marked` cells. `Blocked`
/// appears in derived meta grids as the projection of a tied sub-board:
/// it counts as occupied but belongs to neither mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a mark.
    Marked(Mark),
    /// Cell owned by neither mark (a tied sub-board in the meta grid).
    Blocked,
}

impl Cell {
    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the mark in the cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Marked(mark) => Some(mark),
            Cell::Empty | Cell::Blocked => None,
        }
    }

    /// Returns the display character for the cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Marked(Mark::X) => 'X',
            Cell::Marked(Mark::O) => 'O',
            Cell::Blocked => '#',
        }
    }
}

/// Outcome of a board, at either level.
///
/// An outcome is recomputed after every placement and never changes
/// again once it reaches `Won` or `Tied`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Board still accepts moves.
    InProgress,
    /// Board won by the given mark.
    Won(Mark),
    /// Board finished with no winner (full or no winnable line left).
    Tied,
}

impl Outcome {
    /// Checks if the outcome is terminal (won or tied).
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(mark),
            Outcome::InProgress | Outcome::Tied => None,
        }
    }

    /// Checks if the outcome is a tie.
    pub fn is_tied(self) -> bool {
        matches!(self, Outcome::Tied)
    }

    /// Projects the outcome into a meta-grid cell.
    ///
    /// A won board projects its winner's mark, a tied board projects a
    /// blocked cell, and a board still in progress projects empty.
    pub fn projected_cell(self) -> Cell {
        match self {
            Outcome::InProgress => Cell::Empty,
            Outcome::Won(mark) => Cell::Marked(mark),
            Outcome::Tied => Cell::Blocked,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(mark) => write!(f, "Player {:?} wins", mark),
            Outcome::Tied => write!(f, "Tied"),
        }
    }
}
