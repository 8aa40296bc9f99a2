//! Board coordinates.

use std::fmt;
use std::str::FromStr;

use crate::error::CoordParseError;

/// A cell on the board, addressed by zero-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a coordinate from a row and column.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// Chebyshev (king-move) distance to `other`.
    pub fn chebyshev(self, other: Coord) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Step `steps` times along `(dr, dc)`, returning `None` if the result
    /// would leave the non-negative quadrant.
    #[inline]
    pub fn offset(self, dr: isize, dc: isize, steps: isize) -> Option<Coord> {
        let row = self.row.checked_add_signed(dr * steps)?;
        let col = self.col.checked_add_signed(dc * steps)?;
        Some(Coord { row, col })
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Coord {
    type Err = CoordParseError;

    /// Parse `"r,c"`, `"r c"` or `"(r, c)"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s
            .chars()
            .map(|ch| if ch == ',' || ch == '(' || ch == ')' { ' ' } else { ch })
            .collect();
        let parts: Vec<&str> = cleaned.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(CoordParseError::WrongFieldCount {
                input: s.to_string(),
            });
        }
        let parse = |field: &str| {
            field.parse::<usize>().map_err(|_| CoordParseError::InvalidNumber {
                field: field.to_string(),
            })
        };
        Ok(Coord::new(parse(parts[0])?, parse(parts[1])?))
    }
}
