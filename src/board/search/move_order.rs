//! Move ordering for search and quiescence.
//!
//! Ordering only changes the order children are visited in, never which
//! children exist.

use super::constants::{CAPTURE_BASE_SCORE, KILLER1_SCORE, KILLER2_SCORE, TT_MOVE_SCORE};
use super::KillerTable;
use crate::board::{Move, MoveList, Position};

/// (victim value, attacker value) for a board capture
fn capture_values(pos: &Position, mv: Move) -> Option<(i32, i32)> {
    let victim = pos.captured_by(mv)?;
    let (_, attacker) = pos.piece_at(mv.from()?)?;
    Some((victim.value(), attacker.value()))
}

/// MVV-LVA score: high-value victims taken by low-value attackers first.
#[must_use]
pub fn mvv_lva_score(pos: &Position, mv: Move) -> i32 {
    capture_values(pos, mv).map_or(0, |(victim, attacker)| victim * 10 - attacker)
}

/// Material gained by a capture over the capturing piece's own value
#[must_use]
pub fn capture_margin(pos: &Position, mv: Move) -> Option<i32> {
    capture_values(pos, mv).map(|(victim, attacker)| victim - attacker)
}

/// Order moves: TT move, captures by MVV-LVA, killers, then the rest in
/// generation order.
#[must_use]
pub fn order_moves(
    pos: &Position,
    moves: MoveList,
    tt_move: Option<Move>,
    killers: &KillerTable,
    ply: usize,
) -> MoveList {
    let primary = killers.primary(ply);
    let secondary = killers.secondary(ply);

    let mut scored: Vec<(i32, Move)> = moves
        .into_iter()
        .map(|mv| {
            let score = if Some(mv) == tt_move {
                TT_MOVE_SCORE
            } else if mv.is_capture() {
                CAPTURE_BASE_SCORE + mvv_lva_score(pos, mv)
            } else if Some(mv) == primary {
                KILLER1_SCORE
            } else if Some(mv) == secondary {
                KILLER2_SCORE
            } else {
                0
            };
            (score, mv)
        })
        .collect();

    // Stable: equal scores keep generation order
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, mv)| mv).collect()
}

/// Order captures for quiescence: most valuable victim first, then least
/// valuable attacker.
#[must_use]
pub fn order_captures(pos: &Position, mut captures: MoveList) -> MoveList {
    captures.sort_by_cached_key(|&mv| {
        let (victim, attacker) = capture_values(pos, mv).unwrap_or((0, 0));
        (-victim, attacker)
    });
    captures
}
