//! Forward-only movers: the Pawn and the Lancer.

use super::super::{Board, Color, Piece, Square};

/// Visit the squares a Pawn or Lancer of `color` on `from` can reach.
///
/// The callback receives `(square, may_move_quietly, may_capture)`. Pawns
/// step straight ahead without capturing and capture one step diagonally
/// forward. Lancers slide straight ahead and capture like a Rook would.
pub(crate) fn walk_forward(
    board: &Board,
    from: Square,
    color: Color,
    piece: Piece,
    visit: &mut impl FnMut(Square, bool, bool),
) {
    let dir = color.forward();
    match piece {
        Piece::Pawn => {
            if let Some(sq) = from.offset(dir, 0) {
                visit(sq, true, false);
            }
            for dc in [-1, 1] {
                if let Some(sq) = from.offset(dir, dc) {
                    visit(sq, false, true);
                }
            }
        }
        Piece::Lancer => {
            let mut cur = from;
            while let Some(sq) = cur.offset(dir, 0) {
                visit(sq, true, true);
                if !board.is_empty(sq) {
                    break;
                }
                cur = sq;
            }
        }
        _ => {}
    }
}
