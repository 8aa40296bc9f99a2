//! Search algorithms and move ordering.

pub mod alphabeta;
pub mod control;
pub mod heuristics;
pub mod ordering;
pub mod tt;

use std::time::Duration;

use mnk_core::{BoardState, Coord, Player, relevant_moves};
use tracing::{debug, trace};

use crate::eval::pattern::FORCED_WIN_THRESHOLD;
use crate::eval::{EvalWeights, Evaluator, Score};
use alphabeta::{INF, SearchContext, alphabeta};
use control::SearchControl;
use heuristics::{HistoryTable, KillerTable};
use tt::TranspositionTable;

/// Nominal deadline for fixed-depth searches.
pub const FIXED_DEPTH_DEADLINE: Duration = Duration::from_secs(999);

/// Searcher tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Probe and store the transposition table.
    pub use_tt: bool,
    /// Flush the whole table before a search once it holds more entries
    /// than this. `None` lets it grow for the life of the searcher.
    pub tt_max_entries: Option<usize>,
    /// Evaluation weights.
    pub weights: EvalWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            use_tt: true,
            tt_max_entries: None,
            weights: EvalWeights::default(),
        }
    }
}

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move at the deepest completed depth, if any depth completed.
    pub best_move: Option<Coord>,
    /// Score of that move from the searching player's point of view.
    pub score: Score,
    /// Deepest completed depth (0 if none).
    pub depth: u8,
    /// Total nodes visited across all iterations.
    pub nodes: u64,
    /// Wall-clock time spent.
    pub elapsed: Duration,
}

/// Alpha-beta searcher owning the transposition table and ordering tables.
///
/// Killers and history are reset at the start of every top-level search.
/// The transposition table survives between searches for the same player
/// and board shape, and is cleared when either changes.
pub struct Searcher {
    config: SearchConfig,
    tt: TranspositionTable,
    killers: KillerTable,
    history: HistoryTable,
    evaluator: Option<Evaluator>,
    last_player: Option<Player>,
}

impl Searcher {
    /// Create a searcher with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            tt: TranspositionTable::new(),
            killers: KillerTable::new(),
            history: HistoryTable::new(),
            evaluator: None,
            last_player: None,
        }
    }

    /// Number of positions in the transposition table.
    pub fn tt_len(&self) -> usize {
        self.tt.len()
    }

    /// Search exactly `depth` plies with a nominal deadline.
    pub fn search_fixed(&mut self, board: &mut BoardState, player: Player, depth: u8) -> SearchResult {
        let control = SearchControl::new(FIXED_DEPTH_DEADLINE);
        let mut ctx = self.begin(board, player, &control);

        let (best_move, score, completed) = match alphabeta(board, depth, -INF, INF, true, &mut ctx) {
            Ok((score, mv)) => (mv, score, depth),
            Err(aborted) => {
                trace!(%aborted, depth, "fixed-depth search aborted");
                (None, 0, 0)
            }
        };

        let result = SearchResult {
            best_move,
            score,
            depth: completed,
            nodes: ctx.nodes,
            elapsed: control.elapsed(),
        };
        debug!(
            depth = result.depth,
            score = result.score,
            nodes = result.nodes,
            best = ?result.best_move,
            "fixed-depth search complete"
        );
        result
    }

    /// Iterative deepening from depth 1 to `max_depth` within `budget`.
    ///
    /// Stops after a completed depth that proves a forced win or that used
    /// more than half the budget. An aborted depth is discarded; the
    /// result is the last completed one.
    pub fn search_iterative(
        &mut self,
        board: &mut BoardState,
        player: Player,
        budget: Duration,
        max_depth: u8,
    ) -> SearchResult {
        let control = SearchControl::new(budget);
        let mut ctx = self.begin(board, player, &control);

        let mut best_move = None;
        let mut best_score = 0;
        let mut completed: u8 = 0;

        for depth in 1..=max_depth {
            let (score, mv) = match alphabeta(board, depth, -INF, INF, true, &mut ctx) {
                Ok(found) => found,
                Err(aborted) => {
                    trace!(%aborted, depth, nodes = ctx.nodes, "iteration aborted");
                    break;
                }
            };

            if mv.is_some() {
                best_move = mv;
            }
            best_score = score;
            completed = depth;

            debug!(
                depth,
                score,
                nodes = ctx.nodes,
                best = ?best_move,
                elapsed_ms = control.elapsed().as_millis() as u64,
                "iteration complete"
            );

            if score > FORCED_WIN_THRESHOLD {
                break;
            }
            if control.fraction_used() > 0.5 {
                break;
            }
            // Nothing deeper exists once every empty cell is in the line.
            if mv.is_none() || depth as usize >= board.empty().len() {
                break;
            }
        }

        SearchResult {
            best_move,
            score: best_score,
            depth: completed,
            nodes: ctx.nodes,
            elapsed: control.elapsed(),
        }
    }

    /// Prepare the tables for a new top-level search and build its context.
    fn begin<'a>(&'a mut self, board: &BoardState, player: Player, control: &'a SearchControl) -> SearchContext<'a> {
        let shape_changed = !self.evaluator.as_ref().is_some_and(|ev| ev.fits(board));
        if shape_changed {
            self.evaluator = None;
        }

        let over_capacity = self
            .config
            .tt_max_entries
            .is_some_and(|max| self.tt.len() > max);
        if shape_changed || over_capacity || self.last_player != Some(player) {
            if !self.tt.is_empty() {
                trace!(entries = self.tt.len(), "clearing transposition table");
            }
            self.tt.clear();
        }
        self.last_player = Some(player);
        self.killers.clear();
        self.history.clear();

        let weights = self.config.weights;
        let evaluator = self
            .evaluator
            .get_or_insert_with(|| Evaluator::new(board, weights));

        SearchContext {
            tt: &mut self.tt,
            killers: &mut self.killers,
            history: &mut self.history,
            evaluator: &*evaluator,
            control,
            root: player,
            use_tt: self.config.use_tt,
            nodes: 0,
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl std::fmt::Debug for Searcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Searcher")
            .field("config", &self.config)
            .field("tt", &self.tt)
            .field("last_player", &self.last_player)
            .finish()
    }
}

/// First move among `relevant_moves(board, 1)` that wins on the spot for
/// `player`.
///
/// Each candidate is tried with make/undo; the board is unchanged on return.
pub fn find_winning_move(board: &mut BoardState, player: Player) -> Option<Coord> {
    relevant_moves(board, 1).into_iter().find(|&mv| {
        if !board.make_move(mv, player) {
            return false;
        }
        let won = board.winner() == Some(player);
        board.undo_move(mv);
        won
    })
}
