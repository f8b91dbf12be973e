//! Common types for Connect Four: move errors and game outcomes.

use crate::player::PlayerId;

/// Result of evaluating the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No four-in-a-row yet and empty cells remain.
    InProgress,
    /// The given player owns a four-in-a-row.
    Win(PlayerId),
    /// Board is full with no four-in-a-row.
    Draw,
}

impl Outcome {
    /// Returns `true` for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Errors returned when a move is rejected. The board is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Column index outside `[0, COLS)`.
    ColumnOutOfRange { column: usize },
    /// Top cell of the column is already occupied.
    ColumnFull { column: usize },
    /// Game already reached a win or a draw.
    GameOver,
}

impl core::fmt::Display for MoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MoveError::ColumnOutOfRange { column } => {
                write!(f, "Column {} is out of range", column.saturating_add(1))
            }
            MoveError::ColumnFull { column } => write!(f, "Column {} is full", column.saturating_add(1)),
            MoveError::GameOver => write!(f, "Game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}

/// Errors returned when building a board from a text fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Row does not have exactly `COLS` cells.
    InvalidRowLength { row: usize, len: usize },
    /// Character is neither a player mark nor an empty marker.
    UnknownMark { row: usize, col: usize, ch: char },
    /// Piece sits above an empty cell.
    FloatingPiece { row: usize, col: usize },
    /// Piece counts cannot come from alternating moves with the first
    /// player starting.
    TurnOrder { first: usize, second: usize },
    /// Player owns a four-in-a-row but was not the last to move.
    UnreachableWin { player: PlayerId },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidRowLength { row, len } => {
                write!(f, "Row {} has {} cells", row, len)
            }
            BoardError::UnknownMark { row, col, ch } => {
                write!(f, "Unknown mark {:?} at row {}, column {}", ch, row, col)
            }
            BoardError::FloatingPiece { row, col } => {
                write!(f, "Piece at row {}, column {} is not supported", row, col)
            }
            BoardError::TurnOrder { first, second } => {
                write!(f, "{} first-player pieces against {} second-player pieces", first, second)
            }
            BoardError::UnreachableWin { player } => {
                write!(f, "Player {} has four in a row without moving last", player.number())
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
