//! Adversarial search engine for a two-player game on a 12x12 board with
//! cut corners, reserves, drops and bonus moves.
//!
//! ```
//! use sanctuary_engine::board::{search, Position, SearchConfig, SearchState};
//! use std::sync::atomic::AtomicBool;
//!
//! let pos = Position::start();
//! let mut state = SearchState::default();
//! let stop = AtomicBool::new(false);
//! let result = search(&pos, &mut state, SearchConfig::depth(2), &stop).unwrap();
//! assert!(result.best_move.is_some());
//! ```

pub mod board;
pub mod tt;
pub mod zobrist;

pub use board::{Board, Color, Move, Piece, Position, Square};
pub use tt::TranspositionTable;
