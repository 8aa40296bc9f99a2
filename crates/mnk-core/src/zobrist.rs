//! Zobrist hashing keys for position deduplication.
//!
//! Keys are drawn fresh for every board. Hashes are only ever compared
//! within one game, so there is no fixed seed to keep stable.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::coord::Coord;
use crate::player::Player;

/// One random key per (cell, player) pair, indexed row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct ZobristKeys {
    cols: usize,
    keys: Vec<[u64; Player::COUNT]>,
}

impl ZobristKeys {
    /// Draw keys for a `rows x cols` board from the thread-local RNG.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::generate(rows, cols, &mut rand::thread_rng())
    }

    /// Draw keys deterministically from `seed`.
    pub fn from_seed(rows: usize, cols: usize, seed: u64) -> Self {
        Self::generate(rows, cols, &mut StdRng::seed_from_u64(seed))
    }

    fn generate<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let keys = (0..rows * cols)
            .map(|_| [rng.r#gen::<u64>(), rng.r#gen::<u64>()])
            .collect();
        Self { cols, keys }
    }

    /// Key for `player` occupying `coord`.
    ///
    /// The caller guarantees `coord` is on the board.
    #[inline]
    pub fn key(&self, coord: Coord, player: Player) -> u64 {
        self.keys[coord.row * self.cols + coord.col][player.index()]
    }
}

impl std::fmt::Debug for ZobristKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZobristKeys")
            .field("cells", &self.keys.len())
            .finish()
    }
}
