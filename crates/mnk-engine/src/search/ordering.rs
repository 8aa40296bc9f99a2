//! Move ordering: TT move, then killers, then history.

use std::cmp::Reverse;

use mnk_core::Coord;

use crate::search::heuristics::HistoryTable;

/// Priority of the transposition table's stored move.
pub const TT_MOVE_PRIORITY: u64 = 100_000_000;
/// Priority of the most recent killer at this depth.
pub const KILLER_0_PRIORITY: u64 = 9_000_000;
/// Priority of the older killer at this depth.
pub const KILLER_1_PRIORITY: u64 = 8_000_000;

/// Ordering priority of a single move.
fn priority(mv: Coord, tt_move: Option<Coord>, killers: [Option<Coord>; 2], history: &HistoryTable) -> u64 {
    if tt_move == Some(mv) {
        TT_MOVE_PRIORITY
    } else if killers[0] == Some(mv) {
        KILLER_0_PRIORITY
    } else if killers[1] == Some(mv) {
        KILLER_1_PRIORITY
    } else {
        history.score(mv)
    }
}

/// Sort `moves` by descending priority.
///
/// The sort is stable: moves of equal priority keep their generation order.
pub fn order_moves(moves: &mut [Coord], tt_move: Option<Coord>, killers: [Option<Coord>; 2], history: &HistoryTable) {
    moves.sort_by_key(|&mv| Reverse(priority(mv, tt_move, killers, history)));
}
