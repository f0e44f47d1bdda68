//! Static evaluation.
//!
//! Scores are from side A's point of view. Terms: board material, reserve
//! material at a discount, centralization, pawn and lancer advancement, and
//! how close each royal piece is to a sanctuary.

use super::movegen::StandardRules;
use super::state::Position;
use super::{Color, Piece, Score, Square, HEIGHT, SANCTUARIES, WIDTH};

/// Rules-side static evaluation consumed by the search.
pub trait Evaluator {
    /// Positive favours A; `±Score::WIN` once the game is decided.
    fn evaluate(&self, pos: &Position) -> Score;
}

/// Reserve pieces count this many percent of their board value
const RESERVE_PERCENT: i32 = 80;
const CENTER_WEIGHT: i32 = 4;
const ADVANCE_WEIGHT: i32 = 8;
/// Per square of distance a royal is short of the farthest possible
const SANCTUARY_WEIGHT: i32 = 12;
const BOTH_ROYALS_BONUS: i32 = 60;

/// Chebyshev rings from the middle of the board: 0 for the four center
/// squares, 5 on the edges.
#[inline]
fn center_ring(sq: Square) -> i32 {
    let dr = (2 * sq.row() as i32 - (HEIGHT as i32 - 1)).abs() / 2;
    let dc = (2 * sq.col() as i32 - (WIDTH as i32 - 1)).abs() / 2;
    dr.max(dc)
}

/// Rows travelled from the home row of `color`
#[inline]
fn advancement(sq: Square, color: Color) -> i32 {
    match color {
        Color::A => sq.row() as i32,
        Color::B => (HEIGHT - 1 - sq.row()) as i32,
    }
}

fn sanctuary_distance(sq: Square) -> i32 {
    SANCTUARIES
        .iter()
        .map(|&s| sq.distance(s) as i32)
        .min()
        .unwrap_or(0)
}

fn piece_square(piece: Piece, color: Color, sq: Square) -> i32 {
    match piece {
        Piece::King | Piece::Prince => {
            let max = (WIDTH - 1) as i32;
            (max - sanctuary_distance(sq)) * SANCTUARY_WEIGHT
        }
        Piece::Pawn => advancement(sq, color) * ADVANCE_WEIGHT,
        Piece::Lancer => advancement(sq, color) * ADVANCE_WEIGHT / 2,
        _ => (5 - center_ring(sq)) * CENTER_WEIGHT,
    }
}

fn side_score(pos: &Position, color: Color) -> i32 {
    let mut score = 0;
    let mut royals = 0;

    for (sq, piece) in pos.board().pieces(color) {
        if piece.is_royal() {
            royals += 1;
        } else {
            score += piece.value();
        }
        score += piece_square(piece, color, sq);
    }

    if royals == 2 {
        score += BOTH_ROYALS_BONUS;
    }

    let reserve: i32 = pos.reserve(color).iter().map(Piece::value).sum();
    score + reserve * RESERVE_PERCENT / 100
}

impl Evaluator for StandardRules {
    fn evaluate(&self, pos: &Position) -> Score {
        if let Some(winner) = pos.outcome() {
            return Score::win_for(winner, 0);
        }
        Score::new(side_score(pos, Color::A) - side_score(pos, Color::B))
    }
}

/// Evaluate under the standard rules.
#[must_use]
pub fn evaluate(pos: &Position) -> Score {
    StandardRules.evaluate(pos)
}
