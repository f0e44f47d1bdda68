//! Move types and move list.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

/// Maximum search ply tracked by per-ply tables
pub const MAX_PLY: usize = 64;

/// A move: either a board move or a drop from the reserve.
///
/// Moves are plain values and compare structurally, which is what the
/// transposition table and killer slots rely on.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    Board {
        from: Square,
        to: Square,
        capture: bool,
    },
    Drop {
        piece: Piece,
        to: Square,
    },
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move::Board {
            from,
            to,
            capture: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square) -> Self {
        Move::Board {
            from,
            to,
            capture: true,
        }
    }

    #[inline]
    #[must_use]
    pub const fn drop(piece: Piece, to: Square) -> Self {
        Move::Drop { piece, to }
    }

    /// Source square; `None` for drops
    #[inline]
    #[must_use]
    pub const fn from(self) -> Option<Square> {
        match self {
            Move::Board { from, .. } => Some(from),
            Move::Drop { .. } => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        match self {
            Move::Board { to, .. } | Move::Drop { to, .. } => to,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        matches!(self, Move::Board { capture: true, .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_drop(self) -> bool {
        matches!(self, Move::Drop { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Board { from, to, capture } => {
                let sep = if capture { 'x' } else { '-' };
                write!(f, "{from}{sep}{to}")
            }
            Move::Drop { piece, to } => write!(f, "{piece}@{to}"),
        }
    }
}

/// Move list used by generation and ordering.
pub type MoveList = Vec<Move>;
