//! Round engine: one board, whose turn it is, and how the round stands.

use crate::rules;
use crate::{BOARD_SIZE, Board, Cell, Mark, RoundOutcome};
use tracing::{debug, instrument};

/// Reasons a placement is refused.
///
/// A refused placement leaves the engine untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidMove {
    /// Coordinate is off the 3x3 board.
    #[display("Cell ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// Cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The round is already won or drawn.
    #[display("Round is already over")]
    RoundOver,
}

/// Owns the board of a single round and the mark to play next.
///
/// The board is only reachable through shared references; the single
/// mutation path is [`BoardEngine::place`].
#[derive(Debug, Clone, Default)]
pub struct BoardEngine {
    board: Board,
    turn: Mark,
}

impl BoardEngine {
    /// Creates an engine with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the board and hands the turn back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Mark::X;
        debug!("Board reset");
    }

    /// Places the current mark at `(row, col)` and returns the new outcome.
    ///
    /// The outcome is evaluated before the turn changes. The turn only
    /// passes to the opponent while the round is still in progress, so a
    /// finished round keeps the mark that made the last move.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] without touching the board when the round
    /// is over, the coordinate is off the board, or the cell is taken.
    #[instrument(skip(self), fields(mark = %self.turn))]
    pub fn place(&mut self, row: usize, col: usize) -> Result<RoundOutcome, InvalidMove> {
        if self.outcome().is_over() {
            return Err(InvalidMove::RoundOver);
        }
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(InvalidMove::OutOfBounds { row, col });
        }
        if !self.board.is_empty(row, col) {
            return Err(InvalidMove::Occupied { row, col });
        }

        self.board.set(row, col, Cell::Marked(self.turn));

        let outcome = self.outcome();
        if !outcome.is_over() {
            self.turn = self.turn.opponent();
        }
        debug!(%outcome, next = %self.turn, board = %self.board.display(), "Mark placed");
        Ok(outcome)
    }

    /// Computes the round outcome from the current board.
    pub fn outcome(&self) -> RoundOutcome {
        rules::evaluate(&self.board)
    }

    /// Returns the cell at `(row, col)`, or `None` when off the board.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col)
    }

    /// Returns the mark to play next, or the last mover once the round is over.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns a read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }
}
