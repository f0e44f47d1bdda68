//! Jump and single-step patterns.
//!
//! A leaper reaches every offset square directly; intervening squares are
//! never checked.

use super::super::Piece;

pub(crate) const ORTHOGONAL: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONAL: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const ALL_STEPS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const KNIGHT: [(isize, isize); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const CAMEL: [(isize, isize); 8] = [
    (1, 3),
    (3, 1),
    (3, -1),
    (1, -3),
    (-1, -3),
    (-3, -1),
    (-3, 1),
    (-1, 3),
];

const ZEBRA: [(isize, isize); 8] = [
    (2, 3),
    (3, 2),
    (3, -2),
    (2, -3),
    (-2, -3),
    (-3, -2),
    (-3, 2),
    (-2, 3),
];

const ALFIL: [(isize, isize); 4] = [(2, 2), (2, -2), (-2, 2), (-2, -2)];
const DABBABA: [(isize, isize); 4] = [(2, 0), (-2, 0), (0, 2), (0, -2)];

/// Offset sets a piece jumps by. Compound pieces list several sets.
pub(crate) fn leaps(piece: Piece) -> &'static [&'static [(isize, isize)]] {
    match piece {
        Piece::King | Piece::Prince | Piece::Shield | Piece::Courier => &[&ALL_STEPS],
        Piece::Knight | Piece::Chancellor | Piece::Archbishop => &[&KNIGHT],
        Piece::Camel => &[&CAMEL],
        Piece::Zebra => &[&ZEBRA],
        Piece::Wazir => &[&ORTHOGONAL],
        Piece::Ferz => &[&DIAGONAL],
        Piece::Alfil => &[&ALFIL],
        Piece::Dabbaba => &[&DABBABA],
        Piece::Hawk => &[&DIAGONAL, &ALFIL],
        Piece::Queen | Piece::Rook | Piece::Bishop | Piece::Pawn | Piece::Lancer => &[],
    }
}
