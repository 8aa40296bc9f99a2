//! Per-player chess clock.

use std::time::Duration;

use mnk_core::Player;

use crate::config::ClockConfig;

/// Remaining time for both players plus the per-move increment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameClock {
    remaining: [Duration; Player::COUNT],
    increment: Duration,
}

impl GameClock {
    /// Start both players at `config.initial`.
    pub fn new(config: ClockConfig) -> Self {
        Self {
            remaining: [config.initial; Player::COUNT],
            increment: config.increment,
        }
    }

    /// Time left for `player`.
    pub fn remaining(&self, player: Player) -> Duration {
        self.remaining[player.index()]
    }

    /// Subtract `dt` from `player`'s time. Returns `true` once the flag
    /// has fallen (no time left).
    pub fn charge(&mut self, player: Player, dt: Duration) -> bool {
        let left = &mut self.remaining[player.index()];
        *left = left.saturating_sub(dt);
        left.is_zero()
    }

    /// Credit `player` with one increment.
    pub fn add_increment(&mut self, player: Player) {
        self.remaining[player.index()] += self.increment;
    }

    /// Return `true` if `player` has no time left.
    pub fn is_flagged(&self, player: Player) -> bool {
        self.remaining(player).is_zero()
    }
}
