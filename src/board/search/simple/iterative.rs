use std::sync::atomic::AtomicBool;
use std::time::Instant;

use rand::seq::SliceRandom;

#[cfg(feature = "logging")]
use super::super::log::{LogLogger, SearchLogger};
use super::super::log::{search_debug, search_warn};
use super::super::move_order::capture_margin;
use super::super::{MoveSource, SearchConfig, SearchIterationInfo, SearchResult, SearchState};
use super::SimpleSearchContext;
use crate::board::eval::Evaluator;
use crate::board::movegen::MoveGenerator;
use crate::board::{Move, MoveList, Position, Score};

impl<R: MoveGenerator + Evaluator> SimpleSearchContext<'_, R> {
    /// Iterative deepening from depth 1 to `max_depth`.
    ///
    /// Returns the best move, score and depth of the deepest iteration that
    /// completed. A cancelled iteration is discarded entirely.
    pub fn iterative_deepening(
        &mut self,
        pos: &Position,
        max_depth: u32,
        config: &SearchConfig,
    ) -> Option<(Move, Score, u32)> {
        let mut completed = None;

        for depth in 1..=max_depth {
            self.root_best = None;
            let score = match self.alphabeta(pos, depth, -Score::INFINITY, Score::INFINITY, 0) {
                Ok(score) => score,
                Err(_) => {
                    search_debug!("search cancelled during depth {depth}");
                    break;
                }
            };
            let Some(best) = self.root_best else {
                break;
            };
            completed = Some((best, score, depth));

            let info = self.iteration_info(depth, score, best);
            #[cfg(feature = "logging")]
            LogLogger.info(&info);
            if let Some(cb) = &config.info_callback {
                cb(&info);
            }

            // A decided game will not change with more depth
            if score.is_decisive() {
                break;
            }
        }

        completed
    }

    fn iteration_info(&self, depth: u32, score: Score, best: Move) -> SearchIterationInfo {
        let elapsed = self.start_time.elapsed().as_millis() as u64;
        let stats = self.state.stats;
        let nps = if elapsed > 0 {
            stats.total_nodes() * 1000 / elapsed
        } else {
            0
        };
        SearchIterationInfo {
            depth,
            nodes: stats.nodes,
            qnodes: stats.qnodes,
            nps,
            time_ms: elapsed,
            score,
            best_move: Some(best),
            hashfull: self.state.hashfull_per_mille(),
            tt_hits: stats.tt_hits,
        }
    }
}

/// Book move for this position, if the book applies.
///
/// The book is skipped once `book_turns` have passed, while a bonus move is
/// pending, when the listed move is not legal here, and whenever some
/// capture wins at least `book_capture_margin` over its attacker.
fn book_move(pos: &Position, state: &SearchState, moves: &MoveList) -> Option<Move> {
    let params = &state.params;
    if pos.turn() >= params.book_turns || pos.pending_bonus().is_some() {
        return None;
    }
    let mv = state.book.lookup(pos.side_to_move(), pos.turn())?;
    if !moves.contains(&mv) {
        return None;
    }
    let clearly_better_capture = moves
        .iter()
        .filter_map(|&m| capture_margin(pos, m))
        .any(|margin| margin >= params.book_capture_margin);
    if clearly_better_capture {
        return None;
    }
    Some(mv)
}

/// Random legal move, preferring captures
fn fallback_move(moves: &MoveList) -> Option<Move> {
    let captures: MoveList = moves.iter().copied().filter(|mv| mv.is_capture()).collect();
    let pool = if captures.is_empty() { moves } else { &captures };
    pool.choose(&mut rand::thread_rng()).copied()
}

/// Run a search on a validated position with freshly cleared tables.
pub(crate) fn run_search<R: MoveGenerator + Evaluator>(
    pos: &Position,
    state: &mut SearchState,
    config: &SearchConfig,
    stop: &AtomicBool,
    rules: &R,
) -> SearchResult {
    let start = config
        .clock
        .as_ref()
        .map_or_else(Instant::now, |clock| clock.start_time());
    let deadline = config.time_limit.and_then(|t| start.checked_add(t));
    let max_depth = config.max_depth.unwrap_or(state.params.max_depth).max(1);

    let moves = rules.generate_moves(pos);
    let mut result = SearchResult::empty();

    match moves.as_slice() {
        [] => return result,
        [only] => {
            result.best_move = Some(*only);
            result.source = Some(MoveSource::Forced);
            return result;
        }
        _ => {}
    }

    if let Some(mv) = book_move(pos, state, &moves) {
        search_debug!("book move {mv} on turn {}", pos.turn());
        result.best_move = Some(mv);
        result.source = Some(MoveSource::Book);
        return result;
    }

    let mut ctx = SimpleSearchContext::new(state, rules, stop, deadline, config.node_limit);
    ctx.start_time = start;
    ctx.clock = config.clock.as_deref();
    let completed = ctx.iterative_deepening(pos, max_depth, config);

    result.nodes = state.stats.nodes;
    result.qnodes = state.stats.qnodes;

    match completed {
        Some((mv, score, depth)) => {
            result.best_move = Some(mv);
            result.score = Some(score);
            result.depth = depth;
            result.source = Some(MoveSource::Search);
        }
        None => {
            search_warn!("no search depth completed, playing a random move");
            result.best_move = fallback_move(&moves);
            result.source = Some(MoveSource::Fallback);
        }
    }
    result
}
