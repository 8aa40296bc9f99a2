//! Dense coordinate set over a fixed grid.

use crate::coord::Coord;

const ABSENT: usize = usize::MAX;

/// A set of cells on an `rows x cols` grid.
///
/// Membership lives in a per-cell slot table pointing into a packed member
/// list, so insert, remove and lookup are O(1) and iteration visits only
/// members. Removal swaps the last member into the hole; iteration order is
/// deterministic for a given sequence of operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellSet {
    cols: usize,
    slots: Vec<usize>,
    members: Vec<Coord>,
}

impl CellSet {
    /// Create an empty set over a `rows x cols` grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            slots: vec![ABSENT; rows * cols],
            members: Vec::new(),
        }
    }

    /// Create a set containing every cell of the grid, in row-major order.
    pub fn full(rows: usize, cols: usize) -> Self {
        let mut set = Self::new(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                set.insert(Coord::new(row, col));
            }
        }
        set
    }

    #[inline]
    fn slot_index(&self, coord: Coord) -> Option<usize> {
        if coord.col >= self.cols {
            return None;
        }
        let idx = coord.row * self.cols + coord.col;
        (idx < self.slots.len()).then_some(idx)
    }

    /// Add `coord`. Returns `false` if it was already present or off the grid.
    pub fn insert(&mut self, coord: Coord) -> bool {
        let Some(idx) = self.slot_index(coord) else {
            return false;
        };
        if self.slots[idx] != ABSENT {
            return false;
        }
        self.slots[idx] = self.members.len();
        self.members.push(coord);
        true
    }

    /// Remove `coord`. Returns `false` if it was not present.
    pub fn remove(&mut self, coord: Coord) -> bool {
        let Some(idx) = self.slot_index(coord) else {
            return false;
        };
        let pos = self.slots[idx];
        if pos == ABSENT {
            return false;
        }
        self.members.swap_remove(pos);
        if let Some(&moved) = self.members.get(pos) {
            let moved_idx = moved.row * self.cols + moved.col;
            self.slots[moved_idx] = pos;
        }
        self.slots[idx] = ABSENT;
        true
    }

    /// Return `true` if `coord` is a member.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.slot_index(coord)
            .is_some_and(|idx| self.slots[idx] != ABSENT)
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Return `true` if the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate over the members.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.members.iter().copied()
    }

    /// The members as a slice.
    pub fn as_slice(&self) -> &[Coord] {
        &self.members
    }
}
