#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_BOOK_CAPTURE_MARGIN, DEFAULT_BOOK_TURNS, DEFAULT_MAX_DEPTH, DEFAULT_QSEARCH_DEPTH,
    DEFAULT_TT_MB,
};

/// Tunable search behaviour.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchParams {
    /// Deepest iteration of iterative deepening
    pub max_depth: u32,
    /// Capture plies searched past the horizon
    pub quiescence_depth: u32,
    /// Transposition table size used by `SearchState::default`
    pub tt_mb: usize,
    pub use_tt: bool,
    /// With pruning off every child gets the full window and no cutoffs
    /// happen, which turns the search into plain minimax.
    pub use_pruning: bool,
    pub book_turns: u32,
    pub book_capture_margin: i32,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            max_depth: DEFAULT_MAX_DEPTH,
            quiescence_depth: DEFAULT_QSEARCH_DEPTH,
            tt_mb: DEFAULT_TT_MB,
            use_tt: true,
            use_pruning: true,
            book_turns: DEFAULT_BOOK_TURNS,
            book_capture_margin: DEFAULT_BOOK_CAPTURE_MARGIN,
        }
    }
}
