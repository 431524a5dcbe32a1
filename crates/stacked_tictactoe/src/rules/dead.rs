//! Tie detection: full grids and dead grids.

use super::LINES;
use crate::grid::Grid;
use crate::position::Position;
use crate::types::{Cell, Mark};
use tracing::instrument;

/// Checks if the grid is full (all cells occupied).
///
/// Blocked cells count as occupied.
#[instrument]
pub fn is_full(grid: &Grid) -> bool {
    grid.cells().iter().all(|c| *c != Cell::Empty)
}

/// Checks whether the line can still be won by the given mark.
///
/// A line stays open for a mark while every cell on it is either that
/// mark or empty. An opposing mark or a blocked cell closes it.
fn line_open_for(grid: &Grid, line: [Position; 3], mark: Mark) -> bool {
    line.iter().all(|pos| match grid.get(*pos) {
        Cell::Empty => true,
        Cell::Marked(m) => m == mark,
        Cell::Blocked => false,
    })
}

/// Checks if no line on the grid can still be won by either mark.
///
/// A dead grid ends the game early: even with empty cells remaining,
/// no sequence of future placements can produce a winner.
#[instrument]
pub fn is_dead(grid: &Grid) -> bool {
    LINES
        .iter()
        .all(|line| !line_open_for(grid, *line, Mark::X) && !line_open_for(grid, *line, Mark::O))
}
