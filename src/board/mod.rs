//! Board representation, game rules and search.
//!
//! The board is a 12x12 grid with the four 2x2 corners cut out. Positions
//! are values: every move produces a new `Position` with an incrementally
//! updated Zobrist hash.
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use sanctuary_engine::board::{find_best_move, Position, SearchState};
//!
//! let pos = Position::start();
//! let mut state = SearchState::new(1);
//! let mv = find_best_move(&pos, &mut state, Duration::from_millis(200)).unwrap();
//! println!("Engine plays {}", mv.unwrap());
//! ```

mod book;
mod builder;
mod error;
mod eval;
mod movegen;
mod notation;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use book::OpeningBook;
pub use builder::PositionBuilder;
pub use error::{MoveParseError, NotationError, PositionError, SquareError};
pub use state::{Board, Position, Reserve, RESERVE_CAPACITY};
pub use types::{
    BonusRule, Color, Move, MoveList, Piece, Score, Square, CORNER, HEIGHT, MAX_PLY, NUM_SLOTS,
    SANCTUARIES, WIDTH,
};

// Rules seams consumed by the search
pub use eval::{evaluate, Evaluator};
pub use movegen::{generate_captures, generate_moves, MoveGenerator, StandardRules, Target};

// Public API - search functions and configuration
pub use search::{
    find_best_move, find_best_move_with_limits, search, search_with, Cancelled, MoveSource,
    SearchClock, SearchConfig, SearchInfoCallback, SearchIterationInfo, SearchLimits,
    SearchResult, SearchState, DEFAULT_MAX_DEPTH, DEFAULT_TT_MB,
};

// Re-export search internals for users who need fine-grained control
#[cfg(feature = "logging")]
pub use search::LogLogger;
pub use search::{
    mvv_lva_score, order_captures, order_moves, KillerTable, SearchLogger, SearchParams,
    SearchStats, SearchTables, StdoutLogger,
};
