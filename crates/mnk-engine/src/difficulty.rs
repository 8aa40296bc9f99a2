//! Difficulty tiers and the strategy each one plays.

use std::fmt;
use std::time::Duration;

/// Lowest tier.
pub const MIN_TIER: u8 = 1;
/// Highest tier.
pub const MAX_TIER: u8 = 8;

/// Engine strength, a tier in `1..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Difficulty(u8);

/// What the engine does for a given tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Uniformly random empty cell.
    Random,
    /// Win now, else block, else a random cell near the center.
    Greedy,
    /// Alpha-beta to a fixed depth.
    FixedDepth(u8),
    /// Iterative deepening within a time budget.
    Timed { budget: Duration, max_depth: u8 },
}

impl Difficulty {
    /// Clamp any integer into the valid tier range.
    pub fn new(tier: i64) -> Self {
        Self(tier.clamp(MIN_TIER as i64, MAX_TIER as i64) as u8)
    }

    /// The tier number.
    pub fn tier(self) -> u8 {
        self.0
    }

    /// Per-move budget used when the caller supplies none.
    ///
    /// Only the timed tiers have one.
    pub fn default_budget(self) -> Option<Duration> {
        match self.0 {
            5 => Some(Duration::from_millis(500)),
            6 => Some(Duration::from_secs(1)),
            7 => Some(Duration::from_secs(2)),
            8 => Some(Duration::from_secs(5)),
            _ => None,
        }
    }

    /// Iterative-deepening depth cap for the timed tiers.
    pub fn depth_cap(self) -> Option<u8> {
        match self.0 {
            5 => Some(6),
            6 => Some(8),
            7 => Some(10),
            8 => Some(40),
            _ => None,
        }
    }

    /// The strategy for this tier. `budget` overrides the tier default.
    pub fn strategy(self, budget: Option<Duration>) -> Strategy {
        match self.0 {
            1 => Strategy::Random,
            2 => Strategy::Greedy,
            3 => Strategy::FixedDepth(2),
            4 => Strategy::FixedDepth(3),
            _ => Strategy::Timed {
                budget: budget
                    .or(self.default_budget())
                    .unwrap_or(Duration::from_secs(5)),
                max_depth: self.depth_cap().unwrap_or(40),
            },
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(MIN_TIER)
    }
}

impl From<i64> for Difficulty {
    fn from(tier: i64) -> Self {
        Self::new(tier)
    }
}

/// Integer text is clamped; `easy`, `medium` and `hard` map to 2, 5 and 8;
/// anything else is tier 1.
impl From<&str> for Difficulty {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if let Ok(tier) = s.parse::<i64>() {
            return Self::new(tier);
        }
        match s {
            "easy" => Self(2),
            "medium" => Self(5),
            "hard" => Self(8),
            _ => Self(MIN_TIER),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tier {}", self.0)
    }
}
