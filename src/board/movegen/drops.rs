//! Drops from the reserve.

use super::super::state::{Board, Position};
use super::super::{Color, Move, MoveList, Square, NUM_SLOTS};
use super::{is_shielded_for, walk};

/// Value of the cheapest `by` piece able to capture on each slot, were an
/// enemy piece standing there. Built once per generation call.
pub(crate) fn cheapest_attackers(board: &Board, by: Color) -> [Option<i32>; NUM_SLOTS] {
    let mut cheapest = [None; NUM_SLOTS];
    for (from, piece) in board.pieces(by) {
        let value = piece.value();
        walk(board, from, by, piece, &mut |sq, _, capture| {
            if capture {
                let slot = &mut cheapest[sq.index()];
                *slot = Some(slot.map_or(value, |v: i32| v.min(value)));
            }
        });
    }
    cheapest
}

/// Append every safe drop for the side to move.
///
/// A drop needs an empty playable square that is not a sanctuary, and a
/// Pawn or Lancer may not be dropped on its own promotion row. A drop is
/// unsafe when the cheapest enemy piece able to capture there is worth less
/// than the dropped piece, unless a friendly Shield would protect it.
pub(crate) fn safe_drops(pos: &Position, out: &mut MoveList) {
    let us = pos.side_to_move();
    let reserve = pos.reserve(us);
    if reserve.is_empty() || pos.pending_bonus().is_some() {
        return;
    }

    let board = pos.board();
    let cheapest = cheapest_attackers(board, us.opponent());
    let candidates: Vec<Square> = Square::all()
        .filter(|&sq| board.is_empty(sq) && !sq.is_sanctuary())
        .collect();

    for piece in reserve.distinct() {
        let value = piece.value();
        for &sq in &candidates {
            if piece.promotes_to().is_some() && sq.row() == us.promotion_row() {
                continue;
            }
            let safe = is_shielded_for(board, sq, us)
                || cheapest[sq.index()].map_or(true, |attacker| attacker >= value);
            if safe {
                out.push(Move::drop(piece, sq));
            }
        }
    }
}
