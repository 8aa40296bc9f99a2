//! Time management: turn a player's remaining clock into a per-move budget.

use std::time::Duration;

const MIN_BUDGET: Duration = Duration::from_millis(500);
const MAX_BUDGET: Duration = Duration::from_secs(20);
const SAFETY_MARGIN: Duration = Duration::from_millis(500);
const FLOOR: Duration = Duration::from_millis(100);
const LOW_CLOCK: Duration = Duration::from_secs(10);

/// Per-move search budget for a player with `remaining` on the clock.
///
/// | Remaining | Budget                                              |
/// |-----------|-----------------------------------------------------|
/// | any       | 10% of remaining, clamped to 0.5 s ..= 20 s         |
/// | tight     | `max(0.1 s, remaining - 0.5 s)` if the above exceeds it |
/// | < 10 s    | additionally capped at 0.5 s                        |
pub fn budget_from_clock(remaining: Duration) -> Duration {
    let mut budget = (remaining / 10).clamp(MIN_BUDGET, MAX_BUDGET);

    let reserve = remaining.saturating_sub(SAFETY_MARGIN);
    if budget > reserve {
        budget = reserve.max(FLOOR);
    }
    if remaining < LOW_CLOCK {
        budget = budget.min(MIN_BUDGET);
    }
    budget
}
