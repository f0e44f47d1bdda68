//! Search module implementing alpha-beta with iterative deepening.
//!
//! Features:
//! - Iterative deepening under a wall-clock deadline, node limit and stop flag
//! - Alpha-beta minimax from side A's point of view (A maximizes)
//! - Bonus-turn recursion: a bonus move and its follow-up share one depth unit
//! - Quiescence search over captures with stand-pat
//! - Move ordering (TT move, MVV-LVA captures, killers)
//! - Transposition table for move ordering and cutoffs
//! - Opening book shortcut and a random fallback when no depth completes

mod constants;
mod log;
mod move_order;
mod params;
mod simple;

use parking_lot::Mutex;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::tt::TranspositionTable;

use super::book::OpeningBook;
use super::error::PositionError;
use super::eval::Evaluator;
use super::movegen::{MoveGenerator, StandardRules};
use super::{Move, Position, Score, MAX_PLY};

pub use constants::{DEFAULT_MAX_DEPTH, DEFAULT_TT_MB};
#[cfg(feature = "logging")]
pub use self::log::LogLogger;
pub use self::log::{SearchLogger, StdoutLogger};
pub use move_order::{mvv_lva_score, order_captures, order_moves};
pub use params::SearchParams;

pub(crate) use simple::SimpleSearchContext;

/// The search ran out of time, nodes, or was told to stop.
///
/// Raised inside the search and handled by the driver; never returned to
/// callers of [`search`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cancelled;

/// Where the chosen move came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveSource {
    Book,
    /// The only legal move
    Forced,
    Search,
    /// Random legal move, captures preferred, when no depth completed
    Fallback,
}

/// Outcome of a search request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` only when the side to move has no legal move
    pub best_move: Option<Move>,
    /// Root score of the last completed iteration
    pub score: Option<Score>,
    /// Last completed depth (0 if none)
    pub depth: u32,
    pub nodes: u64,
    pub qnodes: u64,
    pub source: Option<MoveSource>,
}

impl SearchResult {
    pub(crate) fn empty() -> Self {
        SearchResult {
            best_move: None,
            score: None,
            depth: 0,
            nodes: 0,
            qnodes: 0,
            source: None,
        }
    }
}

/// Statistics tracked during search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub qnodes: u64,
    pub tt_hits: u64,
    pub cutoffs: u64,
}

impl SearchStats {
    pub fn reset_search(&mut self) {
        *self = SearchStats::default();
    }

    #[must_use]
    pub fn total_nodes(&self) -> u64 {
        self.nodes + self.qnodes
    }
}

/// Two most recent cutoff-causing non-captures per ply.
pub struct KillerTable {
    slots: [[Option<Move>; 2]; MAX_PLY],
}

impl Default for KillerTable {
    fn default() -> Self {
        Self::new()
    }
}

impl KillerTable {
    #[must_use]
    pub fn new() -> Self {
        KillerTable {
            slots: [[None; 2]; MAX_PLY],
        }
    }

    #[must_use]
    pub fn primary(&self, ply: usize) -> Option<Move> {
        self.slots.get(ply).and_then(|row| row[0])
    }

    #[must_use]
    pub fn secondary(&self, ply: usize) -> Option<Move> {
        self.slots.get(ply).and_then(|row| row[1])
    }

    pub fn update(&mut self, ply: usize, mv: Move) {
        let Some(row) = self.slots.get_mut(ply) else {
            return;
        };
        if row[0] != Some(mv) {
            row[1] = row[0];
            row[0] = Some(mv);
        }
    }

    pub fn reset(&mut self) {
        for killers in &mut self.slots {
            *killers = [None; 2];
        }
    }
}

/// Tables used during search (TT, killers)
pub struct SearchTables {
    pub tt: TranspositionTable,
    pub killer_moves: KillerTable,
}

/// Search state persisted across searches.
///
/// Owned by the caller; every top-level request clears the tables, so no
/// search information leaks from one request into the next.
pub struct SearchState {
    pub stats: SearchStats,
    pub tables: SearchTables,
    pub params: SearchParams,
    pub book: OpeningBook,
}

impl SearchState {
    #[must_use]
    pub fn new(tt_mb: usize) -> Self {
        Self::with_params(SearchParams {
            tt_mb,
            ..SearchParams::default()
        })
    }

    #[must_use]
    pub fn with_params(params: SearchParams) -> Self {
        SearchState {
            stats: SearchStats::default(),
            tables: SearchTables {
                tt: TranspositionTable::new(params.tt_mb),
                killer_moves: KillerTable::new(),
            },
            params,
            book: OpeningBook::standard(),
        }
    }

    pub fn new_search(&mut self) {
        self.stats.reset_search();
        self.tables.tt.clear();
        self.tables.killer_moves.reset();
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn set_book(&mut self, book: OpeningBook) {
        self.book = book;
    }

    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        self.tables.tt.hashfull_per_mille()
    }
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState::with_params(SearchParams::default())
    }
}

/// Time limits for a search, shareable with a thread that may shorten or
/// stop it while the search runs
pub struct SearchLimits {
    pub clock: Arc<SearchClock>,
    pub stop: Arc<AtomicBool>,
}

impl SearchLimits {
    /// Limits with a deadline `budget` from now
    #[must_use]
    pub fn with_budget(budget: Duration) -> Self {
        let now = Instant::now();
        SearchLimits {
            clock: Arc::new(SearchClock::new(now, now.checked_add(budget))),
            stop: Arc::new(AtomicBool::new(false)),
        }
    }
}

/// Start time and deadline of a search. The search reads the deadline at
/// every node, so another thread may move it while the search runs.
pub struct SearchClock {
    start_time: Instant,
    deadline: Mutex<Option<Instant>>,
}

impl SearchClock {
    #[must_use]
    pub fn new(start_time: Instant, deadline: Option<Instant>) -> Self {
        SearchClock {
            start_time,
            deadline: Mutex::new(deadline),
        }
    }

    /// Move the deadline, leaving the start time alone.
    pub fn set_deadline(&self, deadline: Option<Instant>) {
        *self.deadline.lock() = deadline;
    }

    #[must_use]
    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        *self.deadline.lock()
    }
}

// ============================================================================
// UNIFIED SEARCH API
// ============================================================================

/// Configuration for a search operation.
#[derive(Clone, Default)]
pub struct SearchConfig {
    /// Maximum depth to search (None = `SearchParams::max_depth`)
    pub max_depth: Option<u32>,
    /// Wall-clock budget (None = unlimited)
    pub time_limit: Option<Duration>,
    /// Node limit over search and quiescence nodes (0 = unlimited)
    pub node_limit: u64,
    /// Shared clock; when set its deadline replaces `time_limit`
    pub clock: Option<Arc<SearchClock>>,
    /// Optional callback for iteration info
    pub info_callback: Option<SearchInfoCallback>,
}

impl SearchConfig {
    /// Create a depth-limited search config
    #[must_use]
    pub fn depth(max_depth: u32) -> Self {
        SearchConfig {
            max_depth: Some(max_depth),
            ..Default::default()
        }
    }

    /// Create a time-limited search config
    #[must_use]
    pub fn time(time_limit_ms: u64) -> Self {
        SearchConfig {
            time_limit: Some(Duration::from_millis(time_limit_ms)),
            ..Default::default()
        }
    }

    /// Create a config from `SearchLimits`
    #[must_use]
    pub fn from_limits(limits: &SearchLimits) -> Self {
        SearchConfig {
            clock: Some(Arc::clone(&limits.clock)),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_time(mut self, budget: Duration) -> Self {
        self.time_limit = Some(budget);
        self
    }

    /// Set node limit
    #[must_use]
    pub fn with_nodes(mut self, node_limit: u64) -> Self {
        self.node_limit = node_limit;
        self
    }

    /// Attach a callback for iteration info reporting.
    #[must_use]
    pub fn with_info_callback(mut self, callback: SearchInfoCallback) -> Self {
        self.info_callback = Some(callback);
        self
    }
}

/// Information about a completed search iteration.
#[derive(Debug, Clone)]
pub struct SearchIterationInfo {
    pub depth: u32,
    pub nodes: u64,
    pub qnodes: u64,
    pub nps: u64,
    pub time_ms: u64,
    pub score: Score,
    pub best_move: Option<Move>,
    pub hashfull: u32,
    pub tt_hits: u64,
}

/// Callback type for iteration info.
pub type SearchInfoCallback = Arc<dyn Fn(&SearchIterationInfo) + Send + Sync>;

/// Search with caller-supplied rules.
///
/// Validates the position, clears the tables, then tries in turn: no move,
/// a forced move, the opening book, iterative deepening, and finally a
/// random legal move if not even depth 1 completed.
#[allow(clippy::needless_pass_by_value)] // Config is intentionally consumed
pub fn search_with<R: MoveGenerator + Evaluator>(
    pos: &Position,
    state: &mut SearchState,
    config: SearchConfig,
    stop: &AtomicBool,
    rules: &R,
) -> Result<SearchResult, PositionError> {
    pos.validate()?;
    state.new_search();
    Ok(simple::run_search(pos, state, &config, stop, rules))
}

/// Unified search function under the standard rules.
pub fn search(
    pos: &Position,
    state: &mut SearchState,
    config: SearchConfig,
    stop: &AtomicBool,
) -> Result<SearchResult, PositionError> {
    search_with(pos, state, config, stop, &StandardRules)
}

/// Choose a move within `budget`.
///
/// Returns `Ok(None)` only when the side to move has no legal move.
pub fn find_best_move(
    pos: &Position,
    state: &mut SearchState,
    budget: Duration,
) -> Result<Option<Move>, PositionError> {
    let stop = AtomicBool::new(false);
    let config = SearchConfig::default().with_time(budget);
    Ok(search(pos, state, config, &stop)?.best_move)
}

/// Choose a move under shared limits another thread may shorten or stop.
pub fn find_best_move_with_limits(
    pos: &Position,
    state: &mut SearchState,
    limits: &SearchLimits,
) -> Result<Option<Move>, PositionError> {
    let config = SearchConfig::from_limits(limits);
    Ok(search(pos, state, config, &limits.stop)?.best_move)
}
