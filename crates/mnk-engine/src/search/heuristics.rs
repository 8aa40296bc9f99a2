//! Killer move table and history heuristic for move ordering.

use std::collections::HashMap;

use mnk_core::Coord;

/// Two killer moves per remaining-depth slot: moves that caused a cutoff.
#[derive(Debug, Default)]
pub struct KillerTable {
    slots: Vec<[Option<Coord>; 2]>,
}

impl KillerTable {
    /// Create an empty killer table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a killer move at `depth`.
    ///
    /// Shifts slot 0 to slot 1 if the new move differs from slot 0.
    pub fn store(&mut self, depth: u8, mv: Coord) {
        let depth = depth as usize;
        if self.slots.len() <= depth {
            self.slots.resize(depth + 1, [None, None]);
        }
        let slot = &mut self.slots[depth];
        if slot[0] != Some(mv) {
            slot[1] = slot[0];
            slot[0] = Some(mv);
        }
    }

    /// The two killers at `depth`, most recent first.
    pub fn get(&self, depth: u8) -> [Option<Coord>; 2] {
        self.slots
            .get(depth as usize)
            .copied()
            .unwrap_or([None, None])
    }

    /// Forget every killer.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

/// History heuristic: accumulated cutoff weight per coordinate.
#[derive(Debug, Default)]
pub struct HistoryTable {
    table: HashMap<Coord, u64>,
}

impl HistoryTable {
    /// Create an empty history table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reward a move that caused a cutoff with `depth * depth`.
    pub fn reward(&mut self, mv: Coord, depth: u8) {
        let bonus = (depth as u64) * (depth as u64);
        *self.table.entry(mv).or_insert(0) += bonus;
    }

    /// The accumulated score of `mv` (0 if never rewarded).
    pub fn score(&self, mv: Coord) -> u64 {
        self.table.get(&mv).copied().unwrap_or(0)
    }

    /// Forget all history.
    pub fn clear(&mut self) {
        self.table.clear();
    }
}
