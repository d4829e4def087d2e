//! Core domain types for tic-tac-toe.

/// Side length of the board, in cells.
pub const BOARD_SIZE: usize = 3;

/// Mark placed by a player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Mark {
    /// Mark X (moves first).
    #[default]
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// 3x3 board, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an all-empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at `(row, col)`, or `None` when off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Checks if the cell at `(row, col)` exists and is empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Writes a cell. Caller guarantees the coordinate is on the board.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Iterates over `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (row, col, *cell))
        })
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.iter()
            .filter(|(_, _, cell)| *cell == Cell::Marked(mark))
            .count()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => " ".to_string(),
                        Cell::Marked(mark) => mark.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n-+-+-\n")
    }
}

/// Status of the current round, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Round is still being played.
    InProgress,
    /// The mark completed a line.
    Won(Mark),
    /// Board filled with no line.
    Drawn,
}

impl RoundOutcome {
    /// Returns true once the round is decided.
    pub fn is_over(self) -> bool {
        !matches!(self, RoundOutcome::InProgress)
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::InProgress => write!(f, "In progress"),
            RoundOutcome::Won(mark) => write!(f, "{} wins!", mark),
            RoundOutcome::Drawn => write!(f, "Draw!"),
        }
    }
}
