//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark};
use tracing::instrument;

/// Every line of three on the board as `(row, col)` triples.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first complete line found, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let cell = board.get(a.0, a.1);
        if let Some(Cell::Marked(mark)) = cell
            && cell == board.get(b.0, b.1)
            && cell == board.get(c.0, c.1)
        {
            return Some(mark);
        }
    }

    None
}
