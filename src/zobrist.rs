//! Zobrist hashing for game positions.
//!
//! Provides incrementally-updatable 64-bit position hashes for the
//! transposition table. Besides board contents and side to move, the hash
//! covers reserve contents and the pending bonus square so that positions
//! differing only in those never share a table entry.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Color, Move, Piece, Position, Square, NUM_SLOTS, RESERVE_CAPACITY};

pub struct ZobristKeys {
    // piece_keys[piece][color][slot]
    piece_keys: [[[u64; NUM_SLOTS]; 2]; Piece::COUNT],
    // XORed in while side B is to move
    side_key: u64,
    // reserve_keys[color][piece][nth copy held]
    reserve_keys: [[[u64; RESERVE_CAPACITY]; Piece::COUNT]; 2],
    // bonus_keys[slot] for the square owing a bonus move
    bonus_keys: [u64; NUM_SLOTS],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64); // Fixed seed for reproducibility
        let mut piece_keys = [[[0; NUM_SLOTS]; 2]; Piece::COUNT];
        let mut reserve_keys = [[[0; RESERVE_CAPACITY]; Piece::COUNT]; 2];
        let mut bonus_keys = [0; NUM_SLOTS];

        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let side_key = rng.gen();

        for color in &mut reserve_keys {
            for piece in color.iter_mut() {
                for key in piece.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        for key in &mut bonus_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            side_key,
            reserve_keys,
            bonus_keys,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_key(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[piece.index()][color.index()][sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn side_key(&self) -> u64 {
        self.side_key
    }

    /// Key for holding the `nth` (0-based) copy of `piece` in a reserve.
    #[inline]
    #[must_use]
    pub fn reserve_key(&self, color: Color, piece: Piece, nth: usize) -> u64 {
        self.reserve_keys[color.index()][piece.index()][nth % RESERVE_CAPACITY]
    }

    #[inline]
    #[must_use]
    pub fn bonus_key(&self, sq: Square) -> u64 {
        self.bonus_keys[sq.index()]
    }

    /// Hash a position from scratch.
    #[must_use]
    pub fn hash_of(&self, pos: &Position) -> u64 {
        let mut hash = 0;

        for (sq, color, piece) in pos.board().occupied() {
            hash ^= self.piece_key(color, piece, sq);
        }

        if pos.side_to_move() == Color::B {
            hash ^= self.side_key;
        }

        for color in Color::BOTH {
            let reserve = pos.reserve(color);
            for piece in reserve.distinct() {
                for nth in 0..reserve.count(piece) {
                    hash ^= self.reserve_key(color, piece, nth);
                }
            }
        }

        if let Some(sq) = pos.pending_bonus() {
            hash ^= self.bonus_key(sq);
        }

        hash
    }

    /// Incremental update for the board part of a move.
    ///
    /// Removes the mover from its origin, removes any captured piece, places
    /// the (possibly promoted) mover on the destination and flips the side
    /// key. Drops only place the piece and flip the side. Reserve and bonus
    /// changes are applied by the caller.
    #[must_use]
    pub fn update_on_move(
        &self,
        hash: u64,
        mv: Move,
        captured: Option<(Color, Piece)>,
        (color, before): (Color, Piece),
        (_, after): (Color, Piece),
    ) -> u64 {
        let mut hash = hash ^ self.side_key;
        match mv {
            Move::Board { from, to, .. } => {
                hash ^= self.piece_key(color, before, from);
                if let Some((victim_color, victim)) = captured {
                    hash ^= self.piece_key(victim_color, victim, to);
                }
                hash ^= self.piece_key(color, after, to);
            }
            Move::Drop { piece, to } => {
                hash ^= self.piece_key(color, piece, to);
            }
        }
        hash
    }
}

// Initialize Zobrist keys lazily and globally
pub static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_distinct_per_square() {
        let a = ZOBRIST.piece_key(Color::A, Piece::Pawn, Square(3, 3));
        let b = ZOBRIST.piece_key(Color::A, Piece::Pawn, Square(3, 4));
        let c = ZOBRIST.piece_key(Color::B, Piece::Pawn, Square(3, 3));
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn start_position_hash_matches_full_recompute() {
        let pos = Position::start();
        assert_eq!(pos.hash(), ZOBRIST.hash_of(&pos));
        assert_ne!(pos.hash(), 0);
    }
}
