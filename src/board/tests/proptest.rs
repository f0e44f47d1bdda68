//! Property-based tests using proptest.

use crate::board::movegen::is_shielded;
use crate::board::search::{order_moves, KillerTable};
use crate::board::{generate_moves, Move, Position};
use crate::zobrist::ZOBRIST;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random moves from the start, passing a bonus when
/// the bonus piece is stuck. Captures are preferred every third move so
/// reserves fill up and drops appear.
fn random_playout(seed: u64, num_moves: usize, mut visit: impl FnMut(&Position)) -> Position {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos = Position::start();

    for i in 0..num_moves {
        if pos.outcome().is_some() {
            break;
        }
        let moves = generate_moves(&pos);
        if moves.is_empty() {
            if pos.pending_bonus().is_none() {
                break;
            }
            pos = pos.pass_bonus();
            visit(&pos);
            continue;
        }
        let captures: Vec<Move> = moves.iter().copied().filter(|m| m.is_capture()).collect();
        let pool = if i % 3 == 0 && !captures.is_empty() {
            &captures
        } else {
            &moves
        };
        let mv = pool[rng.gen_range(0..pool.len())];
        pos = pos.make_move(mv);
        visit(&pos);
    }
    pos
}

proptest! {
    /// Property: the incremental hash always matches a full recomputation
    #[test]
    fn prop_hash_consistency(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut drifted = None;
        random_playout(seed, num_moves, |pos| {
            if drifted.is_none() && pos.hash() != ZOBRIST.hash_of(pos) {
                drifted = Some(pos.to_notation());
            }
        });
        prop_assert_eq!(drifted, None);
    }

    /// Property: notation round-trip preserves the position
    #[test]
    fn prop_notation_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let pos = random_playout(seed, num_moves, |_| {});
        // Decided games are rejected by the parser
        if pos.outcome().is_none() {
            let text = pos.to_notation();
            let restored = Position::from_notation(&text).expect("own notation parses");
            prop_assert_eq!(restored.hash(), pos.hash());
            prop_assert_eq!(restored, pos);
        }
    }

    /// Property: generated moves respect occupancy and Shield protection
    #[test]
    fn prop_moves_respect_board(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let pos = random_playout(seed, num_moves, |_| {});
        if pos.outcome().is_none() {
            let us = pos.side_to_move();
            let board = pos.board();
            for mv in generate_moves(&pos) {
                match mv {
                    Move::Board { from, to, capture } => {
                        prop_assert_eq!(board.piece_at(from).map(|(c, _)| c), Some(us));
                        match board.piece_at(to) {
                            None => prop_assert!(!capture),
                            Some((color, _)) => {
                                prop_assert!(capture);
                                prop_assert_eq!(color, us.opponent());
                                prop_assert!(!is_shielded(board, to), "{} captures a shielded piece", mv);
                            }
                        }
                    }
                    Move::Drop { piece, to } => {
                        prop_assert!(pos.reserve(us).contains(piece));
                        prop_assert!(board.is_empty(to));
                        prop_assert!(!to.is_sanctuary());
                        prop_assert!(pos.pending_bonus().is_none());
                    }
                }
            }
        }
    }

    /// Property: move ordering is a permutation of its input
    #[test]
    fn prop_order_moves_permutation(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let pos = random_playout(seed, num_moves, |_| {});
        let moves = generate_moves(&pos);
        let mut ordered = order_moves(&pos, moves.clone(), moves.last().copied(), &KillerTable::new(), 0);
        let mut original = moves;
        let key = |m: &Move| m.to_string();
        ordered.sort_by_key(key);
        original.sort_by_key(key);
        prop_assert_eq!(ordered, original);
    }
}
