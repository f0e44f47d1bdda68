//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing notation.
//!
//! # Example
//! ```
//! use sanctuary_engine::board::{Color, Piece, PositionBuilder, Square};
//!
//! let pos = PositionBuilder::new()
//!     .piece(Square(0, 5), Color::A, Piece::King)
//!     .piece(Square(11, 5), Color::B, Piece::King)
//!     .piece(Square(3, 4), Color::A, Piece::Courier)
//!     .reserve(Color::B, Piece::Pawn)
//!     .side_to_move(Color::B)
//!     .build()
//!     .unwrap();
//! assert_eq!(pos.reserve(Color::B).len(), 1);
//! ```

use super::error::PositionError;
use super::state::{Board, Position, Reserve};
use super::{Color, Piece, Square};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    reserves: [Vec<Piece>; 2],
    side_to_move: Color,
    turn: u32,
    pending_bonus: Option<Square>,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty builder, side A to move.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            reserves: [Vec::new(), Vec::new()],
            side_to_move: Color::A,
            turn: 0,
            pending_bonus: None,
        }
    }

    /// Create a builder holding the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        builder.pieces = Position::start().board().occupied().collect();
        builder
    }

    /// Place a piece, replacing whatever was on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Add a piece to a side's reserve.
    #[must_use]
    pub fn reserve(mut self, color: Color, piece: Piece) -> Self {
        self.reserves[color.index()].push(piece);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn turn(mut self, turn: u32) -> Self {
        self.turn = turn;
        self
    }

    /// Mark the piece on `square` as owing a bonus move.
    #[must_use]
    pub const fn pending_bonus(mut self, square: Square) -> Self {
        self.pending_bonus = Some(square);
        self
    }

    /// Build and validate the position.
    pub fn build(self) -> Result<Position, PositionError> {
        let mut board = Board::empty();
        for (square, color, piece) in self.pieces {
            if !square.is_playable() {
                return Err(PositionError::PieceOffBoard {
                    index: square.index(),
                });
            }
            board.set(square, Some((color, piece)));
        }

        let mut reserves = [Reserve::new(); 2];
        for color in Color::BOTH {
            let reserve = &mut reserves[color.index()];
            for &piece in &self.reserves[color.index()] {
                if !reserve.push(piece) {
                    return Err(PositionError::ReserveFull { color });
                }
            }
        }

        let pos = Position::from_parts(
            board,
            self.side_to_move,
            self.turn,
            reserves,
            self.pending_bonus,
        );
        pos.validate()?;
        Ok(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kings() -> PositionBuilder {
        PositionBuilder::new()
            .piece(Square(0, 5), Color::A, Piece::King)
            .piece(Square(11, 5), Color::B, Piece::King)
    }

    #[test]
    fn test_starting_position() {
        let built = PositionBuilder::starting_position()
            .build()
            .expect("start is valid");
        assert_eq!(built, Position::start());
    }

    #[test]
    fn test_side_and_turn() {
        let pos = kings().side_to_move(Color::B).turn(7).build().unwrap();
        assert_eq!(pos.side_to_move(), Color::B);
        assert_eq!(pos.turn(), 7);
    }

    #[test]
    fn test_clear_square() {
        let pos = PositionBuilder::starting_position()
            .clear(Square(2, 0))
            .build()
            .unwrap();
        assert!(pos.piece_at(Square(2, 0)).is_none());
        assert!(pos.piece_at(Square(2, 1)).is_some());
    }

    #[test]
    fn test_rejects_corner_piece() {
        let err = kings()
            .piece(Square(0, 0), Color::A, Piece::Pawn)
            .build()
            .unwrap_err();
        assert_eq!(err, PositionError::PieceOffBoard { index: 0 });
    }

    #[test]
    fn test_rejects_full_reserve() {
        let mut builder = kings();
        for _ in 0..7 {
            builder = builder.reserve(Color::A, Piece::Pawn);
        }
        assert_eq!(
            builder.build().unwrap_err(),
            PositionError::ReserveFull { color: Color::A }
        );
    }

    #[test]
    fn test_rejects_decided_position() {
        let err = PositionBuilder::new()
            .piece(Square(0, 5), Color::A, Piece::King)
            .build()
            .unwrap_err();
        assert_eq!(err, PositionError::GameOver { winner: Color::A });
    }

    #[test]
    fn test_bonus_square_must_hold_bonus_piece() {
        let err = kings()
            .piece(Square(4, 4), Color::A, Piece::Rook)
            .pending_bonus(Square(4, 4))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            PositionError::InvalidBonusSquare {
                square: Square(4, 4)
            }
        );

        let ok = kings()
            .piece(Square(4, 4), Color::A, Piece::Courier)
            .pending_bonus(Square(4, 4))
            .build();
        assert!(ok.is_ok());
    }
}
