//! Search score type.
//!
//! Scores are always from side A's point of view: positive favours A.
//! Decided games use `WIN - ply`, where `ply` is the distance from the
//! search root at which the result was found, so a faster win is strictly
//! larger than a slower one and a faster loss strictly smaller.

use std::fmt;
use std::ops::Neg;

use super::piece::Color;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Score(i32);

impl Score {
    pub const ZERO: Score = Score(0);
    /// Window bound; strictly outside every reachable score.
    pub const INFINITY: Score = Score(30_000_000);
    /// Magnitude of a decided game at the root.
    pub const WIN: Score = Score(20_000_000);

    /// Scores at least this far from zero encode a decided game.
    const DECISIVE: i32 = Score::WIN.0 - 10_000;

    #[inline]
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Score(value)
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Score for `winner` winning `ply` plies away from the root.
    #[inline]
    #[must_use]
    pub const fn win_for(winner: Color, ply: usize) -> Self {
        let magnitude = Score::WIN.0 - ply as i32;
        Score(magnitude * winner.sign())
    }

    /// Score for `loser` losing `ply` plies away from the root.
    #[inline]
    #[must_use]
    pub const fn loss_for(loser: Color, ply: usize) -> Self {
        Score::win_for(loser.opponent(), ply)
    }

    #[inline]
    #[must_use]
    pub const fn is_decisive(self) -> bool {
        self.0 >= Score::DECISIVE || self.0 <= -Score::DECISIVE
    }

    /// Plies from the root to the end of the game, for decided scores.
    #[must_use]
    pub const fn plies_to_end(self) -> Option<i32> {
        if self.is_decisive() {
            Some(Score::WIN.0 - self.0.abs())
        } else {
            None
        }
    }

    /// Convert a root-relative decided score into a node-relative one before
    /// storing it in the transposition table.
    #[must_use]
    pub const fn to_tt(self, ply: usize) -> Self {
        let ply = ply as i32;
        if self.0 >= Score::DECISIVE {
            Score(self.0 + ply)
        } else if self.0 <= -Score::DECISIVE {
            Score(self.0 - ply)
        } else {
            self
        }
    }

    /// Inverse of [`Score::to_tt`] for the probing node's ply.
    #[must_use]
    pub const fn from_tt(self, ply: usize) -> Self {
        let ply = ply as i32;
        if self.0 >= Score::DECISIVE {
            Score(self.0 - ply)
        } else if self.0 <= -Score::DECISIVE {
            Score(self.0 + ply)
        } else {
            self
        }
    }

    #[inline]
    #[must_use]
    pub const fn saturating_add(self, delta: i32) -> Self {
        let v = self.0.saturating_add(delta);
        if v > Score::INFINITY.0 {
            Score::INFINITY
        } else if v < -Score::INFINITY.0 {
            Score(-Score::INFINITY.0)
        } else {
            Score(v)
        }
    }
}

impl Neg for Score {
    type Output = Score;

    fn neg(self) -> Score {
        Score(-self.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.plies_to_end() {
            Some(plies) if self.0 > 0 => write!(f, "A wins in {plies}"),
            Some(plies) => write!(f, "B wins in {plies}"),
            None => write!(f, "{:+}", self.0),
        }
    }
}
