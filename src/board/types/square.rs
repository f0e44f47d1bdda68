//! Square types and board geometry.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Board width in columns.
pub const WIDTH: usize = 12;
/// Board height in rows.
pub const HEIGHT: usize = 12;
/// Side length of the square region cut out of every corner.
pub const CORNER: usize = 2;
/// Number of slots in a row-major board array, including the cut corners.
pub const NUM_SLOTS: usize = WIDTH * HEIGHT;

/// Squares on which a royal piece wins the game for its side.
pub const SANCTUARIES: [Square; 4] = [Square(5, 0), Square(6, 0), Square(5, 11), Square(6, 11)];

#[inline]
const fn in_corner(row: usize, col: usize) -> bool {
    (row < CORNER || row >= HEIGHT - CORNER) && (col < CORNER || col >= WIDTH - CORNER)
}

/// A playable square, represented as (row, col).
///
/// Row 0 is side A's home edge. Squares inside the four corner cut-outs are
/// never constructed by the checked constructors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize);

impl Square {
    /// Create a square, returning `None` off the board or inside a corner.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < HEIGHT && col < WIDTH && !in_corner(row, col) {
            Some(Square(row, col))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Row-major slot index (0..NUM_SLOTS)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 * WIDTH + self.1
    }

    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        Square::new(idx / WIDTH, idx % WIDTH)
    }

    #[inline]
    #[must_use]
    pub const fn is_playable(self) -> bool {
        self.0 < HEIGHT && self.1 < WIDTH && !in_corner(self.0, self.1)
    }

    /// Step by a (row, col) delta, staying on playable squares.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Square> {
        let row = self.0.checked_add_signed(dr)?;
        let col = self.1.checked_add_signed(dc)?;
        Square::new(row, col)
    }

    #[inline]
    #[must_use]
    pub fn is_sanctuary(self) -> bool {
        SANCTUARIES.contains(&self)
    }

    /// Mirror the square across the middle row (A's view <-> B's view)
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square(HEIGHT - 1 - self.0, self.1)
    }

    /// Chebyshev distance to another square
    #[inline]
    #[must_use]
    pub const fn distance(self, other: Square) -> usize {
        let dr = self.0.abs_diff(other.0);
        let dc = self.1.abs_diff(other.1);
        if dr > dc {
            dr
        } else {
            dc
        }
    }

    /// Iterate over every playable square in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SLOTS).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, self.0 + 1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= HEIGHT {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= WIDTH {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Square::new(row, col).ok_or(SquareError::CornerCutOut { row, col })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let col = match chars.next() {
            Some(c @ 'a'..='l') => c as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let row: usize = chars.as_str().parse().map_err(|_| invalid())?;
        if row == 0 {
            return Err(invalid());
        }
        Square::try_from((row - 1, col))
    }
}
