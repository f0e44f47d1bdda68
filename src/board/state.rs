use once_cell::sync::Lazy;

use crate::zobrist::ZOBRIST;

use super::error::PositionError;
use super::types::{Color, Move, Piece, Square, NUM_SLOTS, SANCTUARIES};

/// Maximum number of captured pieces a side may hold in reserve.
pub const RESERVE_CAPACITY: usize = 6;

/// The playing surface: one optional `(Color, Piece)` per slot.
///
/// Slots inside the cut-out corners exist in the array but are never
/// written by the move code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<(Color, Piece)>; NUM_SLOTS],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[must_use]
    pub fn empty() -> Self {
        Board {
            cells: [None; NUM_SLOTS],
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.cells.get(sq.index()).copied().flatten()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, cell: Option<(Color, Piece)>) {
        if let Some(slot) = self.cells.get_mut(sq.index()) {
            *slot = cell;
        }
    }

    /// Raw slot access, including corner slots (used by validation).
    pub(crate) fn slots(&self) -> impl Iterator<Item = (usize, Option<(Color, Piece)>)> + '_ {
        self.cells.iter().copied().enumerate()
    }

    /// Every occupied playable square
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|(c, p)| (sq, c, p)))
    }

    /// Squares and kinds of one side's pieces
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied()
            .filter(move |&(_, c, _)| c == color)
            .map(|(sq, _, p)| (sq, p))
    }

    #[must_use]
    pub fn find(&self, color: Color, piece: Piece) -> Option<Square> {
        self.pieces(color).find(|&(_, p)| p == piece).map(|(sq, _)| sq)
    }

    /// Square of the piece currently carrying the side's royalty: the King,
    /// or the Prince once the King is gone.
    #[must_use]
    pub fn royal_square(&self, color: Color) -> Option<Square> {
        self.find(color, Piece::King)
            .or_else(|| self.find(color, Piece::Prince))
    }

    #[inline]
    #[must_use]
    pub fn has_royal(&self, color: Color) -> bool {
        self.royal_square(color).is_some()
    }
}

/// Bounded sequence of captured piece kinds available for drops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reserve {
    slots: [Piece; RESERVE_CAPACITY],
    len: usize,
}

impl Default for Reserve {
    fn default() -> Self {
        Self::new()
    }
}

impl Reserve {
    #[must_use]
    pub const fn new() -> Self {
        Reserve {
            slots: [Piece::Pawn; RESERVE_CAPACITY],
            len: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Piece] {
        self.slots.get(..self.len).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        self.as_slice().iter().copied()
    }

    #[must_use]
    pub fn count(&self, piece: Piece) -> usize {
        self.iter().filter(|&p| p == piece).count()
    }

    #[must_use]
    pub fn contains(&self, piece: Piece) -> bool {
        self.iter().any(|p| p == piece)
    }

    /// Each kind held, once, in first-captured order
    pub fn distinct(&self) -> impl Iterator<Item = Piece> + '_ {
        let slice = self.as_slice();
        slice
            .iter()
            .enumerate()
            .filter(move |&(i, p)| !slice[..i].contains(p))
            .map(|(_, &p)| p)
    }

    /// Append a piece; returns false when the reserve is full.
    pub fn push(&mut self, piece: Piece) -> bool {
        match self.slots.get_mut(self.len) {
            Some(slot) => {
                *slot = piece;
                self.len += 1;
                true
            }
            None => false,
        }
    }

    /// Remove the first occurrence of `piece`; returns false if absent.
    pub fn remove(&mut self, piece: Piece) -> bool {
        let Some(pos) = self.as_slice().iter().position(|&p| p == piece) else {
            return false;
        };
        self.slots.copy_within(pos + 1..self.len, pos);
        self.len -= 1;
        true
    }
}

/// A full game state: board, side to move, reserves and bonus state.
///
/// Positions are values. Search explores a child by calling
/// [`Position::make_move`], which returns a fresh copy with the Zobrist hash
/// updated incrementally; siblings never share a board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) turn: u32,
    pub(crate) reserves: [Reserve; 2],
    pub(crate) pending_bonus: Option<Square>,
    pub(crate) hash: u64,
}

static START: Lazy<Position> = Lazy::new(|| {
    use Piece::*;

    const BACK: [Piece; 8] = [Rook, Camel, Chancellor, King, Prince, Archbishop, Zebra, Rook];
    const SECOND: [Piece; 8] = [Knight, Alfil, Bishop, Queen, Shield, Bishop, Dabbaba, Knight];
    const THIRD: [Piece; 12] = [
        Lancer, Hawk, Ferz, Pawn, Pawn, Pawn, Pawn, Pawn, Pawn, Wazir, Courier, Lancer,
    ];

    let mut board = Board::empty();
    let rows: [(usize, usize, &[Piece]); 3] = [(0, 2, &BACK), (1, 2, &SECOND), (2, 0, &THIRD)];
    for (row, first_col, pieces) in rows {
        for (i, &piece) in pieces.iter().enumerate() {
            let sq = Square(row, first_col + i);
            board.set(sq, Some((Color::A, piece)));
            board.set(sq.flip_vertical(), Some((Color::B, piece)));
        }
    }
    Position::from_parts(board, Color::A, 0, [Reserve::new(); 2], None)
});

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl Position {
    /// The standard starting position, side A to move.
    #[must_use]
    pub fn start() -> Self {
        START.clone()
    }

    /// Assemble a position and compute its hash from scratch.
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        turn: u32,
        reserves: [Reserve; 2],
        pending_bonus: Option<Square>,
    ) -> Self {
        let mut pos = Position {
            board,
            side_to_move,
            turn,
            reserves,
            pending_bonus,
            hash: 0,
        };
        pos.hash = ZOBRIST.hash_of(&pos);
        pos
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Completed full turns (incremented whenever B hands the move to A)
    #[inline]
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[inline]
    #[must_use]
    pub fn reserve(&self, color: Color) -> &Reserve {
        &self.reserves[color.index()]
    }

    /// Square of the piece that owes a bonus move, if any
    #[inline]
    #[must_use]
    pub fn pending_bonus(&self) -> Option<Square> {
        self.pending_bonus
    }

    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.board.piece_at(sq)
    }

    /// Winner of a decided game: a royal piece on a sanctuary wins for its
    /// side, and a side without any royal piece has lost.
    #[must_use]
    pub fn outcome(&self) -> Option<Color> {
        for color in Color::BOTH {
            let on_sanctuary = SANCTUARIES.iter().any(|&sq| {
                matches!(self.board.piece_at(sq), Some((c, p)) if c == color && p.is_royal())
            });
            if on_sanctuary {
                return Some(color);
            }
        }
        Color::BOTH
            .into_iter()
            .find(|&color| !self.board.has_royal(color))
            .map(Color::opponent)
    }

    /// The piece a move would remove from the board, if any.
    #[must_use]
    pub fn captured_by(&self, mv: Move) -> Option<Piece> {
        match mv {
            Move::Board { to, .. } => self.board.piece_at(to).map(|(_, p)| p),
            Move::Drop { .. } => None,
        }
    }

    /// Return the position after `mv`, which must be legal here.
    ///
    /// Handles captures into the reserve, promotion, bonus bookkeeping and
    /// the incremental hash update.
    #[must_use]
    pub fn make_move(&self, mv: Move) -> Position {
        let mut next = self.clone();
        let us = self.side_to_move;
        let mut bonus_square = None;

        match mv {
            Move::Board { from, to, .. } => {
                let Some((_, before)) = self.board.piece_at(from) else {
                    debug_assert!(false, "make_move: no piece on {from}");
                    return next;
                };
                let victim = self.board.piece_at(to);
                let after = match before.promotes_to() {
                    Some(promoted) if to.row() == us.promotion_row() => promoted,
                    _ => before,
                };

                next.board.set(from, None);
                next.board.set(to, Some((us, after)));
                next.hash = ZOBRIST.update_on_move(self.hash, mv, victim, (us, before), (us, after));

                if let Some((_, captured)) = victim {
                    if !captured.is_royal() {
                        let reserve = &mut next.reserves[us.index()];
                        let nth = reserve.count(captured);
                        if reserve.push(captured) {
                            next.hash ^= ZOBRIST.reserve_key(us, captured, nth);
                        }
                    }
                }

                if self.pending_bonus.is_none() && before.grants_bonus(victim.is_some()) {
                    bonus_square = Some(to);
                }
            }
            Move::Drop { piece, to } => {
                let reserve = &mut next.reserves[us.index()];
                if reserve.remove(piece) {
                    let nth = reserve.count(piece);
                    next.hash ^= ZOBRIST.reserve_key(us, piece, nth);
                } else {
                    debug_assert!(false, "make_move: {piece} not in reserve");
                }
                next.board.set(to, Some((us, piece)));
                next.hash = ZOBRIST.update_on_move(next.hash, mv, None, (us, piece), (us, piece));
            }
        }

        if let Some(sq) = self.pending_bonus {
            next.hash ^= ZOBRIST.bonus_key(sq);
            next.pending_bonus = None;
        }

        match bonus_square {
            Some(sq) => {
                // Same side moves again: undo the side flip.
                next.hash ^= ZOBRIST.side_key() ^ ZOBRIST.bonus_key(sq);
                next.pending_bonus = Some(sq);
            }
            None => next.hand_over(),
        }
        next
    }

    /// Forfeit a pending bonus move and pass the turn.
    #[must_use]
    pub fn pass_bonus(&self) -> Position {
        let mut next = self.clone();
        if let Some(sq) = self.pending_bonus {
            next.hash ^= ZOBRIST.bonus_key(sq) ^ ZOBRIST.side_key();
            next.pending_bonus = None;
            next.hand_over();
        }
        next
    }

    fn hand_over(&mut self) {
        if self.side_to_move == Color::B {
            self.turn += 1;
        }
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Reject positions the search must never be handed.
    pub fn validate(&self) -> Result<(), PositionError> {
        for (index, cell) in self.board.slots() {
            if cell.is_some() && Square::from_index(index).is_none() {
                return Err(PositionError::PieceOffBoard { index });
            }
        }

        for color in Color::BOTH {
            for royal in [Piece::King, Piece::Prince] {
                if self.board.pieces(color).filter(|&(_, p)| p == royal).count() > 1 {
                    return Err(PositionError::TooManyRoyals {
                        color,
                        piece: royal,
                    });
                }
                if self.reserve(color).contains(royal) {
                    return Err(PositionError::RoyalInReserve {
                        color,
                        piece: royal,
                    });
                }
            }
        }

        if let Some(square) = self.pending_bonus {
            let eligible = matches!(
                self.board.piece_at(square),
                Some((c, p)) if c == self.side_to_move && p.bonus_rule().is_some()
            );
            if !eligible {
                return Err(PositionError::InvalidBonusSquare { square });
            }
        }

        if let Some(winner) = self.outcome() {
            return Err(PositionError::GameOver { winner });
        }

        debug_assert_eq!(self.hash, ZOBRIST.hash_of(self), "stale position hash");
        Ok(())
    }
}
