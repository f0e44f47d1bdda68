//! Sliding patterns: rays that stop at the first occupied square.

use super::super::Piece;
use super::leapers::{DIAGONAL, ORTHOGONAL};

const QUEEN: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) fn rays(piece: Piece) -> &'static [(isize, isize)] {
    match piece {
        Piece::Queen => &QUEEN,
        Piece::Rook | Piece::Chancellor => &ORTHOGONAL,
        Piece::Bishop | Piece::Archbishop => &DIAGONAL,
        _ => &[],
    }
}
