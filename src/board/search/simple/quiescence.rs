use super::super::move_order::order_captures;
use super::super::Cancelled;
use super::SimpleSearchContext;
use crate::board::eval::Evaluator;
use crate::board::movegen::MoveGenerator;
use crate::board::{Color, Position, Score};

impl<R: MoveGenerator + Evaluator> SimpleSearchContext<'_, R> {
    /// Capture-only search past the horizon, fail-hard around the stand-pat.
    ///
    /// With pruning disabled the exact best of stand-pat and all captures is
    /// returned instead.
    pub fn quiesce(
        &mut self,
        pos: &Position,
        mut alpha: Score,
        mut beta: Score,
        qdepth: u32,
        ply: usize,
    ) -> Result<Score, Cancelled> {
        self.check_limits()?;
        self.state.stats.qnodes += 1;

        if let Some(winner) = pos.outcome() {
            return Ok(Score::win_for(winner, ply));
        }
        if pos.pending_bonus().is_some() {
            return self.quiesce(&pos.pass_bonus(), alpha, beta, qdepth, ply);
        }

        let stand_pat = self.rules.evaluate(pos);
        if qdepth == 0 {
            return Ok(stand_pat);
        }

        let maximizing = pos.side_to_move() == Color::A;
        let pruning = self.state.params.use_pruning;

        if pruning {
            if maximizing {
                if stand_pat >= beta {
                    return Ok(beta);
                }
                alpha = alpha.max(stand_pat);
            } else {
                if stand_pat <= alpha {
                    return Ok(alpha);
                }
                beta = beta.min(stand_pat);
            }
        }

        let captures = order_captures(pos, self.rules.generate_captures(pos));
        let mut best = stand_pat;

        for mv in captures {
            let mut child = pos.make_move(mv);
            // Bonus follow-ups are never captures: pass them here
            if child.pending_bonus().is_some() {
                child = child.pass_bonus();
            }
            let (a, b) = self.child_window(alpha, beta);
            let score = self.quiesce(&child, a, b, qdepth - 1, ply + 1)?;

            if !pruning {
                best = if maximizing {
                    best.max(score)
                } else {
                    best.min(score)
                };
                continue;
            }

            if maximizing {
                if score >= beta {
                    return Ok(beta);
                }
                alpha = alpha.max(score);
            } else {
                if score <= alpha {
                    return Ok(alpha);
                }
                beta = beta.min(score);
            }
        }

        if !pruning {
            return Ok(best);
        }
        Ok(if maximizing { alpha } else { beta })
    }
}
