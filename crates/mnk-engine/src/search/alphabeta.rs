//! Minimax alpha-beta search over an in-place board.
//!
//! Scores are always from the root player's point of view: the root player
//! maximizes, the opponent minimizes. The board is mutated with
//! make/undo in strict LIFO order and is restored before every return,
//! including an abort.

use mnk_core::{BoardState, Coord, Player, relevant_moves};

use crate::eval::{Evaluator, Score};
use crate::search::control::{SearchAborted, SearchControl};
use crate::search::heuristics::{HistoryTable, KillerTable};
use crate::search::ordering::order_moves;
use crate::search::tt::{Bound, TranspositionTable};

/// Score beyond any reachable evaluation.
pub const INF: Score = Score::MAX / 4;

/// Mutable state shared across one top-level search.
pub(super) struct SearchContext<'a> {
    pub tt: &'a mut TranspositionTable,
    pub killers: &'a mut KillerTable,
    pub history: &'a mut HistoryTable,
    pub evaluator: &'a Evaluator,
    pub control: &'a SearchControl,
    pub root: Player,
    pub use_tt: bool,
    pub nodes: u64,
}

/// Alpha-beta search to `depth` plies.
///
/// `maximizing` is true when the root player is to move. Returns the node
/// value and the best move found (`None` at leaves).
pub(super) fn alphabeta(
    board: &mut BoardState,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    ctx: &mut SearchContext<'_>,
) -> Result<(Score, Option<Coord>), SearchAborted> {
    ctx.control.check(ctx.nodes)?;
    ctx.nodes += 1;

    let hash = board.hash();
    let mut tt_move = None;
    if ctx.use_tt {
        let probe = ctx.tt.probe(hash, depth, alpha, beta);
        if let Some(score) = probe.score {
            return Ok((score, probe.best_move));
        }
        tt_move = probe.best_move;
    }

    if board.winner().is_some() || depth == 0 || board.is_full() {
        return Ok((ctx.evaluator.evaluate(board, ctx.root), None));
    }

    let radius = if depth > 2 { 2 } else { 1 };
    let mut moves = relevant_moves(board, radius);
    order_moves(&mut moves, tt_move, ctx.killers.get(depth), ctx.history);

    let mover = if maximizing { ctx.root } else { ctx.root.opponent() };
    let (original_alpha, original_beta) = (alpha, beta);
    let mut value = if maximizing { -INF } else { INF };
    let mut best_move = None;

    for mv in moves {
        if !board.make_move(mv, mover) {
            continue;
        }
        let child = alphabeta(board, depth - 1, alpha, beta, !maximizing, ctx);
        board.undo_move(mv);
        let (child_value, _) = child?;

        if maximizing {
            if child_value > value {
                value = child_value;
                best_move = Some(mv);
            }
            alpha = alpha.max(value);
        } else {
            if child_value < value {
                value = child_value;
                best_move = Some(mv);
            }
            beta = beta.min(value);
        }

        if alpha >= beta {
            ctx.killers.store(depth, mv);
            ctx.history.reward(mv, depth);
            break;
        }
    }

    if ctx.use_tt {
        let bound = if value <= original_alpha {
            Bound::Upper
        } else if value >= original_beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        ctx.tt.store(hash, depth, value, bound, best_move);
    }

    Ok((value, best_move))
}
