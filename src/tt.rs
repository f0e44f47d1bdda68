//! Transposition table for caching search results.
//!
//! Keyed by the full Zobrist hash; a slot is reused only when the stored
//! hash matches exactly. Stores always replace: the latest search result for
//! a slot wins regardless of depth.

use std::mem;

use crate::board::{Move, Score};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high, score >= beta)
    UpperBound, // Score is at most this value (failed low, score <= alpha)
}

impl BoundType {
    /// Classify a node result against the window it was searched with.
    #[must_use]
    pub fn classify(best: Score, alpha: Score, beta: Score) -> Self {
        if best <= alpha {
            BoundType::UpperBound
        } else if best >= beta {
            BoundType::LowerBound
        } else {
            BoundType::Exact
        }
    }
}

#[derive(Clone, Debug)]
pub struct TTEntry {
    pub hash: u64,
    pub depth: u32,
    /// Node-relative score (see [`Score::to_tt`])
    pub score: Score,
    pub bound_type: BoundType,
    pub best_move: Option<Move>,
}

/// Result of a probe: a score usable at this node, and a move hint.
///
/// The hint is returned whenever the hash matches, even if the stored depth
/// or bound is not good enough to produce a score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TtProbe {
    pub score: Option<Score>,
    pub best_move: Option<Move>,
}

pub struct TranspositionTable {
    table: Vec<Option<TTEntry>>,
    mask: usize,
}

impl TranspositionTable {
    /// Create a table using roughly `size_mb` megabytes.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let entry_size = mem::size_of::<Option<TTEntry>>();
        let mut num_entries = (size_mb * 1024 * 1024) / entry_size;

        num_entries = num_entries.next_power_of_two() / 2;
        if num_entries == 0 {
            num_entries = 1024;
        }

        TranspositionTable {
            table: vec![None; num_entries],
            mask: num_entries - 1,
        }
    }

    fn index(&self, hash: u64) -> usize {
        (hash as usize) & self.mask
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Raw entry lookup by hash.
    #[must_use]
    pub fn entry(&self, hash: u64) -> Option<&TTEntry> {
        match &self.table[self.index(hash)] {
            Some(entry) if entry.hash == hash => Some(entry),
            _ => None,
        }
    }

    /// Probe for a score usable in the window `(alpha, beta)` at `depth`.
    ///
    /// `alpha` and `beta` are root-relative; `ply` converts stored decided
    /// scores back to the root's frame.
    #[must_use]
    pub fn probe(&self, hash: u64, depth: u32, alpha: Score, beta: Score, ply: usize) -> TtProbe {
        let Some(entry) = self.entry(hash) else {
            return TtProbe::default();
        };

        let mut probe = TtProbe {
            score: None,
            best_move: entry.best_move,
        };
        if entry.depth >= depth {
            let score = entry.score.from_tt(ply);
            let usable = match entry.bound_type {
                BoundType::Exact => true,
                BoundType::LowerBound => score >= beta,
                BoundType::UpperBound => score <= alpha,
            };
            if usable {
                probe.score = Some(score);
            }
        }
        probe
    }

    /// Store a node result, replacing whatever occupies the slot.
    pub fn store(
        &mut self,
        hash: u64,
        depth: u32,
        score: Score,
        bound_type: BoundType,
        best_move: Option<Move>,
    ) {
        let index = self.index(hash);
        self.table[index] = Some(TTEntry {
            hash,
            depth,
            score,
            bound_type,
            best_move,
        });
    }

    /// Returns hash table fullness in per mille (0-1000).
    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        // Sample the first 1000 slots
        let sample_size = self.table.len().min(1000);
        if sample_size == 0 {
            return 0;
        }
        let occupied = self
            .table
            .iter()
            .take(sample_size)
            .filter(|slot| slot.is_some())
            .count();
        ((occupied as u64 * 1000) / sample_size as u64) as u32
    }

    /// Clear all entries from the table.
    pub fn clear(&mut self) {
        self.table.iter_mut().for_each(|slot| *slot = None);
    }
}
