//! Search constants.

// ============================================================================
// SEARCH LIMITS
// ============================================================================

/// Default iterative deepening limit
pub const DEFAULT_MAX_DEPTH: u32 = 6;

/// Default quiescence search depth
pub const DEFAULT_QSEARCH_DEPTH: u32 = 4;

/// Default transposition table size in MB
pub const DEFAULT_TT_MB: usize = 16;

// ============================================================================
// OPENING BOOK
// ============================================================================

/// The book is consulted only before this turn
pub const DEFAULT_BOOK_TURNS: u32 = 3;

/// A capture gaining at least this much over its attacker's value overrides the book
pub const DEFAULT_BOOK_CAPTURE_MARGIN: i32 = 300;

// ============================================================================
// MOVE ORDERING PRIORITIES
// ============================================================================
// Higher scores = tried earlier. Ordered: TT > captures > killers > quiet

/// Hash move (from transposition table) - highest priority
pub const TT_MOVE_SCORE: i32 = 1 << 30;

/// Added to every capture's `victim * 10 - attacker` score
pub const CAPTURE_BASE_SCORE: i32 = 1_000_000;

/// First killer move (quiet that caused a cutoff at the same ply)
pub const KILLER1_SCORE: i32 = 20000;

/// Second killer move (replaced killer)
pub const KILLER2_SCORE: i32 = 10000;
