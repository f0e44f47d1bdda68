//! Move generation.
//!
//! The search only talks to the [`MoveGenerator`] trait. [`StandardRules`]
//! implements it for the 19-kind game: piece patterns live in `leapers`,
//! `sliders` and `pawns`; reserve drops in `drops`.

mod drops;
mod leapers;
mod pawns;
mod sliders;

use super::state::{Board, Position};
use super::{Color, Move, MoveList, Piece, Square};

use leapers::ORTHOGONAL;

/// A destination for the piece on some origin square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Target {
    pub to: Square,
    pub capture: bool,
}

impl Target {
    #[inline]
    #[must_use]
    pub const fn into_move(self, from: Square) -> Move {
        Move::Board {
            from,
            to: self.to,
            capture: self.capture,
        }
    }
}

/// Rules-side move generation consumed by the search.
///
/// Implementors provide per-piece targets and drops; full move lists,
/// capture lists, bonus follow-ups and attack tests are derived from those.
pub trait MoveGenerator {
    /// Destinations of the piece on `from`. Squares held by its own side and
    /// enemy pieces that may not be captured are excluded.
    fn targets(&self, board: &Board, from: Square, out: &mut Vec<Target>);

    /// Legal drops for the side to move.
    fn drops(&self, pos: &Position, out: &mut MoveList);

    /// Whether a piece of `by` could capture on `sq` right now.
    fn is_attacked(&self, board: &Board, sq: Square, by: Color) -> bool {
        let mut buf = Vec::new();
        board.pieces(by).any(|(from, _)| {
            buf.clear();
            self.targets(board, from, &mut buf);
            buf.iter().any(|t| t.capture && t.to == sq)
        })
    }

    /// Every legal move. With a bonus pending only the follow-ups are legal.
    fn generate_moves(&self, pos: &Position) -> MoveList {
        if pos.pending_bonus().is_some() {
            return self.bonus_follow_ups(pos);
        }

        let board = pos.board();
        let mut moves = MoveList::new();
        let mut buf = Vec::new();
        for (from, _) in board.pieces(pos.side_to_move()) {
            buf.clear();
            self.targets(board, from, &mut buf);
            moves.extend(buf.iter().map(|t| t.into_move(from)));
        }
        self.drops(pos, &mut moves);
        moves
    }

    /// Capturing board moves only, for quiescence.
    fn generate_captures(&self, pos: &Position) -> MoveList {
        if pos.pending_bonus().is_some() {
            return MoveList::new();
        }

        let board = pos.board();
        let mut moves = MoveList::new();
        let mut buf = Vec::new();
        for (from, _) in board.pieces(pos.side_to_move()) {
            buf.clear();
            self.targets(board, from, &mut buf);
            moves.extend(buf.iter().filter(|t| t.capture).map(|t| t.into_move(from)));
        }
        moves
    }

    /// Non-capturing moves of the piece owing a bonus move.
    fn bonus_follow_ups(&self, pos: &Position) -> MoveList {
        let Some(from) = pos.pending_bonus() else {
            return MoveList::new();
        };
        let mut buf = Vec::new();
        self.targets(pos.board(), from, &mut buf);
        buf.iter()
            .filter(|t| !t.capture)
            .map(|t| t.into_move(from))
            .collect()
    }

    /// True when the side to move has a single royal piece left and the
    /// opponent can capture it.
    fn royal_in_danger(&self, pos: &Position) -> bool {
        let us = pos.side_to_move();
        let board = pos.board();
        let mut royals = board.pieces(us).filter(|&(_, p)| p.is_royal());
        match (royals.next(), royals.next()) {
            (Some((sq, _)), None) => self.is_attacked(board, sq, us.opponent()),
            _ => false,
        }
    }
}

/// The reference rule set: movement, Shield protection, drops and evaluation.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardRules;

impl MoveGenerator for StandardRules {
    fn targets(&self, board: &Board, from: Square, out: &mut Vec<Target>) {
        let Some((color, piece)) = board.piece_at(from) else {
            return;
        };
        walk(board, from, color, piece, &mut |to, quiet, capture| {
            match board.piece_at(to) {
                None if quiet => out.push(Target { to, capture: false }),
                Some((c, _)) if c != color && capture && !is_shielded(board, to) => {
                    out.push(Target { to, capture: true });
                }
                _ => {}
            }
        });
    }

    fn drops(&self, pos: &Position, out: &mut MoveList) {
        drops::safe_drops(pos, out);
    }
}

/// Visit every square `piece` of `color` on `from` reaches, with whether it
/// may move there quietly and whether it may capture there.
pub(crate) fn walk(
    board: &Board,
    from: Square,
    color: Color,
    piece: Piece,
    visit: &mut impl FnMut(Square, bool, bool),
) {
    for offsets in leapers::leaps(piece) {
        for &(dr, dc) in offsets.iter() {
            if let Some(sq) = from.offset(dr, dc) {
                visit(sq, true, true);
            }
        }
    }

    for &(dr, dc) in sliders::rays(piece) {
        let mut cur = from;
        while let Some(sq) = cur.offset(dr, dc) {
            visit(sq, true, true);
            if !board.is_empty(sq) {
                break;
            }
            cur = sq;
        }
    }

    pawns::walk_forward(board, from, color, piece, visit);
}

/// A piece of `color` on `sq` would sit next to a friendly Shield.
pub(crate) fn is_shielded_for(board: &Board, sq: Square, color: Color) -> bool {
    ORTHOGONAL.iter().any(|&(dr, dc)| {
        sq.offset(dr, dc)
            .is_some_and(|n| board.piece_at(n) == Some((color, Piece::Shield)))
    })
}

/// The piece on `sq` is protected from capture by an adjacent friendly Shield.
pub(crate) fn is_shielded(board: &Board, sq: Square) -> bool {
    board
        .piece_at(sq)
        .is_some_and(|(color, _)| is_shielded_for(board, sq, color))
}

/// Legal moves under the standard rules.
#[must_use]
pub fn generate_moves(pos: &Position) -> MoveList {
    StandardRules.generate_moves(pos)
}

/// Capturing moves under the standard rules.
#[must_use]
pub fn generate_captures(pos: &Position) -> MoveList {
    StandardRules.generate_captures(pos)
}
