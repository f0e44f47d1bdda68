//! Core search implementation.
//!
//! This module implements:
//! - Alpha-beta minimax with side A maximizing
//! - Bonus-turn recursion sharing the parent's depth unit
//! - Transposition table probes and stores with ply-adjusted win scores
//! - Killer recording on cutoffs by non-captures
//!
//! Quiescence lives in `quiescence`, the driver in `iterative`.

mod iterative;
mod quiescence;

pub(crate) use iterative::run_search;

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::tt::BoundType;

use super::move_order::order_moves;
use super::{Cancelled, SearchClock, SearchState};
use crate::board::eval::Evaluator;
use crate::board::movegen::MoveGenerator;
use crate::board::{Color, Move, Position, Score};

/// Search context for a single search request
pub struct SimpleSearchContext<'a, R> {
    pub state: &'a mut SearchState,
    pub rules: &'a R,
    pub stop: &'a AtomicBool,
    pub start_time: Instant,
    pub deadline: Option<Instant>,
    /// Shared clock read at every node; overrides `deadline` when set
    pub clock: Option<&'a SearchClock>,
    pub node_limit: u64,
    /// Best move of the last root node that finished
    pub root_best: Option<Move>,
}

impl<'a, R: MoveGenerator + Evaluator> SimpleSearchContext<'a, R> {
    pub fn new(
        state: &'a mut SearchState,
        rules: &'a R,
        stop: &'a AtomicBool,
        deadline: Option<Instant>,
        node_limit: u64,
    ) -> Self {
        SimpleSearchContext {
            state,
            rules,
            stop,
            start_time: Instant::now(),
            deadline,
            clock: None,
            node_limit,
            root_best: None,
        }
    }

    /// Fail with `Cancelled` once the stop flag, node limit or deadline hits.
    fn check_limits(&self) -> Result<(), Cancelled> {
        if self.stop.load(Ordering::Relaxed) {
            return Err(Cancelled);
        }
        if self.node_limit > 0 && self.state.stats.total_nodes() >= self.node_limit {
            return Err(Cancelled);
        }
        let deadline = match self.clock {
            Some(clock) => clock.deadline(),
            None => self.deadline,
        };
        if let Some(deadline) = deadline {
            if Instant::now() >= deadline {
                return Err(Cancelled);
            }
        }
        Ok(())
    }

    /// Window handed to children: the current one, or the full window when
    /// pruning is disabled.
    fn child_window(&self, alpha: Score, beta: Score) -> (Score, Score) {
        if self.state.params.use_pruning {
            (alpha, beta)
        } else {
            (-Score::INFINITY, Score::INFINITY)
        }
    }

    fn store_tt(
        &mut self,
        pos: &Position,
        depth: u32,
        best: Score,
        (alpha, beta): (Score, Score),
        best_move: Option<Move>,
        ply: usize,
    ) {
        if !self.state.params.use_tt {
            return;
        }
        let bound = BoundType::classify(best, alpha, beta);
        self.state
            .tables
            .tt
            .store(pos.hash(), depth, best.to_tt(ply), bound, best_move);
    }

    /// Alpha-beta minimax. Scores are from A's point of view.
    pub fn alphabeta(
        &mut self,
        pos: &Position,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        ply: usize,
    ) -> Result<Score, Cancelled> {
        self.check_limits()?;
        self.state.stats.nodes += 1;
        let window = (alpha, beta);

        let mut tt_move = None;
        if self.state.params.use_tt {
            let probe = self
                .state
                .tables
                .tt
                .probe(pos.hash(), depth, alpha, beta, ply);
            tt_move = probe.best_move;
            // The root always searches so that it has a move to report
            if ply > 0 {
                if let Some(score) = probe.score {
                    self.state.stats.tt_hits += 1;
                    return Ok(score);
                }
            }
        }

        if let Some(winner) = pos.outcome() {
            return Ok(Score::win_for(winner, ply));
        }

        if depth == 0 {
            let qdepth = self.state.params.quiescence_depth;
            return self.quiesce(pos, alpha, beta, qdepth, ply);
        }

        let moves = self.rules.generate_moves(pos);
        if moves.is_empty() {
            if pos.pending_bonus().is_some() {
                return self.alphabeta(&pos.pass_bonus(), depth, alpha, beta, ply);
            }
            return Ok(if self.rules.royal_in_danger(pos) {
                Score::loss_for(pos.side_to_move(), ply + 1)
            } else {
                Score::ZERO
            });
        }

        let maximizing = pos.side_to_move() == Color::A;
        let ordered = order_moves(pos, moves, tt_move, &self.state.tables.killer_moves, ply);

        let mut best = if maximizing {
            -Score::INFINITY
        } else {
            Score::INFINITY
        };
        let mut best_move = None;

        for mv in ordered {
            let child = pos.make_move(mv);
            let (a, b) = self.child_window(alpha, beta);
            let score = if child.pending_bonus().is_some() {
                self.search_bonus(&child, depth, a, b, ply)?
            } else {
                self.alphabeta(&child, depth - 1, a, b, ply + 1)?
            };

            if maximizing {
                if score > best {
                    best = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best);
            } else {
                if score < best {
                    best = score;
                    best_move = Some(mv);
                }
                beta = beta.min(best);
            }

            if self.state.params.use_pruning && beta <= alpha {
                self.state.stats.cutoffs += 1;
                if !mv.is_capture() {
                    self.state.tables.killer_moves.update(ply, mv);
                }
                break;
            }
        }

        self.store_tt(pos, depth, best, window, best_move, ply);
        if ply == 0 {
            self.root_best = best_move;
        }
        Ok(best)
    }

    /// Search the follow-up of a bonus move.
    ///
    /// `child` is the position right after the bonus-granting move, with the
    /// same side still to move. The follow-up is searched at `depth - 1`, so
    /// the pair costs one depth unit. Without a non-capturing follow-up the
    /// bonus is passed and the turn changes as usual.
    pub(crate) fn search_bonus(
        &mut self,
        child: &Position,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        ply: usize,
    ) -> Result<Score, Cancelled> {
        if child.outcome().is_some() {
            return self.alphabeta(child, depth - 1, alpha, beta, ply + 1);
        }

        let follow_ups = self.rules.bonus_follow_ups(child);
        if follow_ups.is_empty() {
            return self.alphabeta(&child.pass_bonus(), depth - 1, alpha, beta, ply + 1);
        }

        let maximizing = child.side_to_move() == Color::A;
        let mut best = if maximizing {
            -Score::INFINITY
        } else {
            Score::INFINITY
        };

        for mv in follow_ups {
            let next = child.make_move(mv);
            let (a, b) = self.child_window(alpha, beta);
            let score = self.alphabeta(&next, depth - 1, a, b, ply + 1)?;

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if self.state.params.use_pruning && beta <= alpha {
                break;
            }
        }
        Ok(best)
    }
}
