//! Opening book: a short fixed line per side, indexed by turn.

use super::{Color, Move, Square};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpeningBook {
    lines: [Vec<Move>; 2],
}

impl OpeningBook {
    /// A book with no moves.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a book from one line per side; entry `n` is played on turn `n`.
    #[must_use]
    pub fn new(line_a: Vec<Move>, line_b: Vec<Move>) -> Self {
        OpeningBook {
            lines: [line_a, line_b],
        }
    }

    /// The standard line: both central pawns forward one, then the queen-side
    /// knight out to the centre. B mirrors A.
    #[must_use]
    pub fn standard() -> Self {
        let line_a = vec![
            Move::quiet(Square(2, 5), Square(3, 5)),
            Move::quiet(Square(2, 6), Square(3, 6)),
            Move::quiet(Square(1, 2), Square(3, 3)),
        ];
        let line_b = line_a
            .iter()
            .map(|mv| match *mv {
                Move::Board { from, to, capture } => Move::Board {
                    from: from.flip_vertical(),
                    to: to.flip_vertical(),
                    capture,
                },
                drop => drop,
            })
            .collect();
        OpeningBook::new(line_a, line_b)
    }

    /// Book move for `color` on `turn`, if the line is that long.
    #[must_use]
    pub fn lookup(&self, color: Color, turn: u32) -> Option<Move> {
        self.lines[color.index()].get(turn as usize).copied()
    }

    #[must_use]
    pub fn len(&self, color: Color) -> usize {
        self.lines[color.index()].len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(Vec::is_empty)
    }
}
