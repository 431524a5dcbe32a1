//! Win detection for a 3x3 grid.

use super::LINES;
use crate::grid::Grid;
use crate::types::{Cell, Mark};
use tracing::instrument;

/// Checks if there is a winner on the grid.
///
/// Returns `Some(mark)` for the first line in scan order held entirely
/// by one mark, `None` otherwise. Blocked cells never form a winning
/// line, and a blocked line never stops the scan from finding a win
/// elsewhere on the grid.
#[instrument]
pub fn winner(grid: &Grid) -> Option<Mark> {
    for [a, b, c] in LINES {
        let cell = grid.get(a);
        if cell == grid.get(b) && cell == grid.get(c) {
            if let Cell::Marked(mark) = cell {
                return Some(mark);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_no_winner_empty_grid() {
        let grid = Grid::new();
        assert_eq!(winner(&grid), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut grid = Grid::new();
        grid.set(Position::TopLeft, Cell::Marked(Mark::X));
        grid.set(Position::TopCenter, Cell::Marked(Mark::X));
        grid.set(Position::TopRight, Cell::Marked(Mark::X));
        assert_eq!(winner(&grid), Some(Mark::X));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut grid = Grid::new();
        grid.set(Position::TopLeft, Cell::Marked(Mark::O));
        grid.set(Position::Center, Cell::Marked(Mark::O));
        grid.set(Position::BottomRight, Cell::Marked(Mark::O));
        assert_eq!(winner(&grid), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut grid = Grid::new();
        grid.set(Position::TopLeft, Cell::Marked(Mark::X));
        grid.set(Position::TopCenter, Cell::Marked(Mark::X));
        assert_eq!(winner(&grid), None);
    }

    #[test]
    fn test_blocked_line_never_wins() {
        let mut grid = Grid::new();
        grid.set(Position::TopLeft, Cell::Blocked);
        grid.set(Position::TopCenter, Cell::Blocked);
        grid.set(Position::TopRight, Cell::Blocked);
        assert_eq!(winner(&grid), None);
    }

    #[test]
    fn test_blocked_line_does_not_mask_later_win() {
        let mut grid = Grid::new();
        // Top row blocked, middle row won by O
        grid.set(Position::TopLeft, Cell::Blocked);
        grid.set(Position::TopCenter, Cell::Blocked);
        grid.set(Position::TopRight, Cell::Blocked);
        grid.set(Position::MiddleLeft, Cell::Marked(Mark::O));
        grid.set(Position::Center, Cell::Marked(Mark::O));
        grid.set(Position::MiddleRight, Cell::Marked(Mark::O));
        assert_eq!(winner(&grid), Some(Mark::O));
    }

    #[test]
    fn test_scan_order_is_deterministic() {
        let mut grid = Grid::new();
        // Two complete lines: X on the top row, O on the middle row.
        // The row scanned first decides.
        grid.set(Position::TopLeft, Cell::Marked(Mark::X));
        grid.set(Position::TopCenter, Cell::Marked(Mark::X));
        grid.set(Position::TopRight, Cell::Marked(Mark::X));
        grid.set(Position::MiddleLeft, Cell::Marked(Mark::O));
        grid.set(Position::Center, Cell::Marked(Mark::O));
        grid.set(Position::MiddleRight, Cell::Marked(Mark::O));
        assert_eq!(winner(&grid), Some(Mark::X));
    }
}
