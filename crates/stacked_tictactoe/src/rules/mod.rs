//! Game rules shared by both board levels.
//!
//! This module contains pure functions for evaluating a grid. Rules are
//! separated from board storage so the exact same evaluation scores a
//! sub-board grid and the projected meta grid.

pub mod dead;
pub mod win;

pub use dead::{is_dead, is_full};
pub use win::winner;

use crate::grid::Grid;
use crate::position::Position;
use crate::types::Outcome;
use tracing::instrument;

/// The eight winnable lines of a 3x3 grid, in scan order:
/// rows, then columns, then diagonals.
pub(crate) const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Evaluates a grid into its current outcome.
///
/// A winner takes precedence over fullness: a grid whose last empty
/// cell completes three in a row reports `Won`, never `Tied`. Without
/// a winner, the grid is tied once it is full or no line can still be
/// won, otherwise it remains in progress.
#[instrument]
pub fn evaluate(grid: &Grid) -> Outcome {
    if let Some(mark) = winner(grid) {
        return Outcome::Won(mark);
    }
    if is_full(grid) || is_dead(grid) {
        return Outcome::Tied;
    }
    Outcome::InProgress
}
