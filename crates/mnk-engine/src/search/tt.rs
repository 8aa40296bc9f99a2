//! Transposition table keyed by Zobrist hash.
//!
//! Entries are overwritten unconditionally. Keys are the full 64-bit hash
//! with no verification word: two positions sharing a hash would share an
//! entry. At 64 bits this is accepted rather than checked.
//!
//! The table does not evict on its own. [`Searcher`](crate::Searcher)
//! may flush it between top-level searches when a capacity is configured.

use std::collections::HashMap;

use mnk_core::Coord;

use crate::eval::Score;

/// How a stored score relates to the true minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The score is exact.
    Exact,
    /// The true value is at least the score (failed high).
    Lower,
    /// The true value is at most the score (failed low).
    Upper,
}

/// One stored search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtEntry {
    /// Remaining depth the result was computed with.
    pub depth: u8,
    /// Score from the searching player's point of view.
    pub score: Score,
    /// Bound type of `score`.
    pub bound: Bound,
    /// Best move found, if the node had any.
    pub best_move: Option<Coord>,
}

/// Result of a probe.
///
/// `score` is present only when the stored entry settles the node for the
/// requested depth and window. `best_move` is returned on any hit, for
/// ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TtProbe {
    pub score: Option<Score>,
    pub best_move: Option<Coord>,
}

/// Hash map from position hash to the latest result for that position.
#[derive(Default)]
pub struct TranspositionTable {
    entries: HashMap<u64, TtEntry>,
}

impl TranspositionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `hash` for a search of `depth` within `(alpha, beta)`.
    pub fn probe(&self, hash: u64, depth: u8, mut alpha: Score, mut beta: Score) -> TtProbe {
        let Some(entry) = self.get(hash) else {
            return TtProbe::default();
        };

        if entry.depth >= depth {
            match entry.bound {
                Bound::Exact => {
                    return TtProbe {
                        score: Some(entry.score),
                        best_move: entry.best_move,
                    };
                }
                Bound::Lower => alpha = alpha.max(entry.score),
                Bound::Upper => beta = beta.min(entry.score),
            }
            if alpha >= beta {
                return TtProbe {
                    score: Some(entry.score),
                    best_move: entry.best_move,
                };
            }
        }

        TtProbe {
            score: None,
            best_move: entry.best_move,
        }
    }

    /// Store a result, replacing whatever was there.
    pub fn store(&mut self, hash: u64, depth: u8, score: Score, bound: Bound, best_move: Option<Coord>) {
        self.entries.insert(
            hash,
            TtEntry {
                depth,
                score,
                bound,
                best_move,
            },
        );
    }

    /// Raw entry for `hash`.
    pub fn get(&self, hash: u64) -> Option<&TtEntry> {
        self.entries.get(&hash)
    }

    /// Number of stored positions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl std::fmt::Debug for TranspositionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranspositionTable")
            .field("entries", &self.entries.len())
            .finish()
    }
}
