//! Search control: the wall-clock deadline.

use std::time::{Duration, Instant};

/// How often (in visited nodes) the clock is consulted. Must be a power of two.
pub const CHECK_INTERVAL: u64 = 128;

/// Signal raised when a search runs past its deadline.
///
/// Returned through every pending recursive frame; each frame undoes its
/// trial move before passing it on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("search time budget of {budget:?} exceeded")]
pub struct SearchAborted {
    /// The budget that ran out.
    pub budget: Duration,
}

/// Decides when a search must stop.
///
/// The clock starts at construction. Only the node-count gate in
/// [`should_abort`](Self::should_abort) ever interrupts a search in flight.
#[derive(Debug, Clone)]
pub struct SearchControl {
    start: Instant,
    budget: Duration,
}

impl SearchControl {
    /// Start a clock with `budget` to spend.
    pub fn new(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }

    /// Check whether the search must abort, given the nodes visited so far.
    ///
    /// Only every [`CHECK_INTERVAL`]-th node reads the clock.
    pub fn should_abort(&self, nodes: u64) -> bool {
        if nodes & (CHECK_INTERVAL - 1) != 0 {
            return false;
        }
        self.elapsed() > self.budget
    }

    /// Return `Err` if the search must abort at this node.
    pub fn check(&self, nodes: u64) -> Result<(), SearchAborted> {
        if self.should_abort(nodes) {
            Err(SearchAborted {
                budget: self.budget,
            })
        } else {
            Ok(())
        }
    }

    /// Fraction of the budget spent so far (may exceed 1.0).
    pub fn fraction_used(&self) -> f64 {
        if self.budget.is_zero() {
            return f64::INFINITY;
        }
        self.elapsed().as_secs_f64() / self.budget.as_secs_f64()
    }

    /// Elapsed time since the clock started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generous_budget_never_aborts() {
        let control = SearchControl::new(Duration::from_secs(999));
        assert!(!control.should_abort(0));
        assert!(!control.should_abort(128));
        assert!(control.check(256).is_ok());
    }

    #[test]
    fn expired_budget_aborts_only_on_check_nodes() {
        let control = SearchControl::new(Duration::ZERO);
        std::thread::sleep(Duration::from_millis(2));
        assert!(control.should_abort(0));
        assert!(control.should_abort(CHECK_INTERVAL * 3));
        assert!(!control.should_abort(5), "off-interval nodes skip the clock");
        assert_eq!(
            control.check(CHECK_INTERVAL),
            Err(SearchAborted { budget: Duration::ZERO })
        );
    }

    #[test]
    fn fraction_used_grows() {
        let control = SearchControl::new(Duration::from_secs(100));
        assert!(control.fraction_used() < 0.5);
        assert!(SearchControl::new(Duration::ZERO).fraction_used().is_infinite());
    }
}
