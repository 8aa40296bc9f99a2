//! Tier dispatch: from a board and a side to move to one chosen move.

use std::time::Duration;

use mnk_core::{BoardState, Coord, Player, all_empty_cells};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::book::opening_move;
use crate::difficulty::{Difficulty, Strategy};
use crate::search::{SearchConfig, Searcher, find_winning_move};

/// Greedy play samples among this many cells nearest the center.
const CENTRAL_CANDIDATES: usize = 10;

/// A game-playing engine at one difficulty tier.
///
/// Owns its search tables and random source; tables persist across calls
/// for the life of the engine.
#[derive(Debug)]
pub struct Engine {
    difficulty: Difficulty,
    searcher: Searcher,
    rng: StdRng,
}

impl Engine {
    /// Create an engine with default search settings and an entropy-seeded RNG.
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_config(difficulty, SearchConfig::default())
    }

    /// Create an engine whose random choices are reproducible.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            searcher: Searcher::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create an engine with custom search settings.
    pub fn with_config(difficulty: Difficulty, config: SearchConfig) -> Self {
        Self {
            difficulty,
            searcher: Searcher::new(config),
            rng: StdRng::from_entropy(),
        }
    }

    /// The engine's tier.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Read access to the searcher.
    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    /// Choose a move for `player` on `board`.
    ///
    /// `budget` overrides the tier's default time for the timed tiers and
    /// is ignored otherwise. The caller's board is never modified. Returns
    /// `None` only when the board has no empty cell.
    pub fn choose_move(&mut self, board: &BoardState, player: Player, budget: Option<Duration>) -> Option<Coord> {
        if board.is_full() {
            return None;
        }

        if let Some(mv) = opening_move(board, &mut self.rng) {
            debug!(%mv, placed = board.occupied_count(), "opening book move");
            return Some(mv);
        }

        let mut work = board.clone();
        let chosen = match self.difficulty.strategy(budget) {
            Strategy::Random => None,
            Strategy::Greedy => self.greedy(&mut work, player),
            Strategy::FixedDepth(depth) => self.searcher.search_fixed(&mut work, player, depth).best_move,
            Strategy::Timed { budget, max_depth } => self.timed(&mut work, player, budget, max_depth),
        };

        chosen
            .filter(|&mv| board.is_empty_cell(mv))
            .or_else(|| self.random_move(board))
    }

    /// Win now, else block, else a random cell near the center.
    fn greedy(&mut self, board: &mut BoardState, player: Player) -> Option<Coord> {
        find_winning_move(board, player)
            .or_else(|| find_winning_move(board, player.opponent()))
            .or_else(|| self.central_move(board))
    }

    /// Iterative deepening, short-circuited by an immediate win and seeded
    /// with a forced block.
    fn timed(&mut self, board: &mut BoardState, player: Player, budget: Duration, max_depth: u8) -> Option<Coord> {
        if let Some(win) = find_winning_move(board, player) {
            debug!(%win, "immediate win");
            return Some(win);
        }
        let block = find_winning_move(board, player.opponent());

        let result = self.searcher.search_iterative(board, player, budget, max_depth);
        debug!(
            depth = result.depth,
            score = result.score,
            nodes = result.nodes,
            elapsed_ms = result.elapsed.as_millis() as u64,
            "search finished"
        );
        result.best_move.or(block)
    }

    /// Uniform choice among the empty cells nearest the board center.
    fn central_move(&mut self, board: &BoardState) -> Option<Coord> {
        let mut cells = all_empty_cells(board);
        let (rows, cols) = (board.rows(), board.cols());
        // Distances are doubled so the center (rows/2, cols/2) stays integral.
        // Ties fall back to row-major order, independent of the empty-set layout.
        cells.sort_by_key(|c| ((2 * c.row).abs_diff(rows) + (2 * c.col).abs_diff(cols), c.row, c.col));
        cells.truncate(CENTRAL_CANDIDATES);
        cells.choose(&mut self.rng).copied()
    }

    fn random_move(&mut self, board: &BoardState) -> Option<Coord> {
        all_empty_cells(board).choose(&mut self.rng).copied()
    }
}
