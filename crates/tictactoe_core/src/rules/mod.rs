//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a [`Board`](crate::Board). Rules are kept
//! apart from board storage so the engine and tests can compose them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use crate::{Board, RoundOutcome};
use tracing::instrument;

/// Derives the outcome of a round from the board alone.
///
/// A completed line wins; otherwise a full board is a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> RoundOutcome {
    if let Some(mark) = check_winner(board) {
        RoundOutcome::Won(mark)
    } else if is_full(board) {
        RoundOutcome::Drawn
    } else {
        RoundOutcome::InProgress
    }
}
