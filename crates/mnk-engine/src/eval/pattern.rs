//! Window pattern scores.
//!
//! A window is exactly `k` consecutive cells of one line holding marks of
//! a single player. Its value depends on how many marks it holds and how
//! many of the two cells bracketing it are empty ("open ends").
//!
//! | marks   | 2 open    | 1 open  | 0 open |
//! |---------|-----------|---------|--------|
//! | k       | WIN       | WIN     | WIN    |
//! | k - 1   | 5,000,000 | 100,000 | 0      |
//! | k - 2   | 50,000    | 2,000   | 100    |
//! | k - 3   | 1,000     | 100     | 0      |
//! | fewer   | marks * 10                   |

use crate::eval::Score;

/// Score of a completed run, and of a terminal win.
pub const WIN: Score = 100_000_000;

/// Search scores above this indicate a forced win.
pub const FORCED_WIN_THRESHOLD: Score = 90_000_000;

/// Open k-1 run: one move from a win that cannot be blocked on both sides.
pub const LIVE_NEAR_WIN: Score = 5_000_000;

/// k-1 run with one open end.
pub const DEAD_NEAR_WIN: Score = 100_000;

/// Magnitude of a single-player window holding `count` marks.
///
/// `count` must be in `1..=k` and `open_ends` in `0..=2`.
pub fn window_score(count: usize, k: usize, open_ends: u8) -> Score {
    debug_assert!(count >= 1 && count <= k);
    debug_assert!(open_ends <= 2);

    if count == k {
        return WIN;
    }
    let missing = k - count;
    match (missing, open_ends) {
        (1, 2) => LIVE_NEAR_WIN,
        (1, 1) => DEAD_NEAR_WIN,
        (1, _) => 0,
        (2, 2) => 50_000,
        (2, 1) => 2_000,
        (2, _) => 100,
        (3, 2) => 1_000,
        (3, 1) => 100,
        (3, _) => 0,
        _ => count as Score * 10,
    }
}
