//! Error types for board and position handling.

use std::fmt;

use super::types::{Color, Piece, Square};

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-11)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-11)
    ColOutOfBounds { col: usize },
    /// Coordinates fall inside one of the cut-out corners
    CornerCutOut { row: usize, col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-11)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-11)")
            }
            SquareError::CornerCutOut { row, col } => {
                write!(f, "Square ({row}, {col}) lies in a cut-out corner")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for position notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Notation has the wrong number of space-separated fields (needs 6)
    WrongFieldCount { found: usize },
    /// Wrong number of rows in the board field
    WrongRowCount { found: usize },
    /// A row describes more or fewer cells than it has
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Invalid piece character
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'a' or 'b')
    InvalidSideToMove { found: String },
    /// Reserve holds more pieces than its capacity
    ReserveOverflow { color: Color },
    /// Invalid bonus square
    InvalidBonus { found: String },
    /// Invalid turn counter
    InvalidTurn { found: String },
    /// The parsed position is not a legal starting point
    Position(PositionError),
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::WrongFieldCount { found } => {
                write!(f, "Notation must have 6 fields, found {found}")
            }
            NotationError::WrongRowCount { found } => {
                write!(f, "Board field must have 12 rows, found {found}")
            }
            NotationError::RowLength {
                row,
                expected,
                found,
            } => {
                write!(f, "Row {} describes {found} cells, expected {expected}", row + 1)
            }
            NotationError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}'")
            }
            NotationError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'a' or 'b'")
            }
            NotationError::ReserveOverflow { color } => {
                write!(f, "Reserve of side {color} exceeds its capacity")
            }
            NotationError::InvalidBonus { found } => {
                write!(f, "Invalid bonus square '{found}'")
            }
            NotationError::InvalidTurn { found } => {
                write!(f, "Invalid turn counter '{found}'")
            }
            NotationError::Position(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for NotationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NotationError::Position(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PositionError> for NotationError {
    fn from(err: PositionError) -> Self {
        NotationError::Position(err)
    }
}

/// A position handed to the engine that it refuses to search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// The game is already decided
    GameOver { winner: Color },
    /// A piece sits on a slot that is not part of the board
    PieceOffBoard { index: usize },
    /// Royal pieces never enter a reserve
    RoyalInReserve { color: Color, piece: Piece },
    /// More than one royal piece of the same kind
    TooManyRoyals { color: Color, piece: Piece },
    /// The pending bonus square does not hold a bonus piece of the side to move
    InvalidBonusSquare { square: Square },
    /// Reserve would exceed its capacity
    ReserveFull { color: Color },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::GameOver { winner } => {
                write!(f, "Game is already won by side {winner}")
            }
            PositionError::PieceOffBoard { index } => {
                write!(f, "Piece on slot {index}, which is not a playable square")
            }
            PositionError::RoyalInReserve { color, piece } => {
                write!(f, "Royal piece {piece} in the reserve of side {color}")
            }
            PositionError::TooManyRoyals { color, piece } => {
                write!(f, "Side {color} has more than one {piece}")
            }
            PositionError::InvalidBonusSquare { square } => {
                write!(f, "No bonus-eligible piece of the side to move on {square}")
            }
            PositionError::ReserveFull { color } => {
                write!(f, "Reserve of side {color} is full")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Not of the form `c3-c4`, `c3xd4` or `P@e5`
    InvalidFormat { notation: String },
    /// Well-formed but not a legal move in the position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidFormat { notation } => {
                write!(f, "Invalid move notation '{notation}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}
