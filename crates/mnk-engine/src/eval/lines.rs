//! Precomputed board lines for pattern scanning.

use mnk_core::{BoardState, Coord};

/// Every maximal line of a board shape long enough to hold a win:
/// rows, columns, and both diagonal families.
///
/// Each line is stored as row-major cell indices in walking order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTable {
    rows: usize,
    cols: usize,
    win_length: usize,
    lines: Vec<Vec<usize>>,
}

impl LineTable {
    /// Build the line table for `board`'s shape.
    pub fn new(board: &BoardState) -> Self {
        let (rows, cols, k) = (board.rows(), board.cols(), board.win_length());
        let index = |row: usize, col: usize| row * cols + col;
        let mut lines = Vec::new();

        if cols >= k {
            for row in 0..rows {
                lines.push((0..cols).map(|col| index(row, col)).collect());
            }
        }
        if rows >= k {
            for col in 0..cols {
                lines.push((0..rows).map(|row| index(row, col)).collect());
            }
        }

        // Diagonals run down-right from the top row and the left column.
        let starts = (0..cols)
            .map(|col| Coord::new(0, col))
            .chain((1..rows).map(|row| Coord::new(row, 0)));
        for start in starts {
            let line: Vec<usize> = (0..)
                .map_while(|step| start.offset(1, 1, step))
                .take_while(|c| c.row < rows && c.col < cols)
                .map(|c| index(c.row, c.col))
                .collect();
            if line.len() >= k {
                lines.push(line);
            }
        }

        // Anti-diagonals run down-left from the top row and the right column.
        let starts = (0..cols)
            .map(|col| Coord::new(0, col))
            .chain((1..rows).map(|row| Coord::new(row, cols - 1)));
        for start in starts {
            let line: Vec<usize> = (0..)
                .map_while(|step| start.offset(1, -1, step))
                .take_while(|c| c.row < rows)
                .map(|c| index(c.row, c.col))
                .collect();
            if line.len() >= k {
                lines.push(line);
            }
        }

        Self {
            rows,
            cols,
            win_length: k,
            lines,
        }
    }

    /// Return `true` if this table was built for `board`'s shape.
    pub fn fits(&self, board: &BoardState) -> bool {
        self.rows == board.rows() && self.cols == board.cols() && self.win_length == board.win_length()
    }

    /// The lines, each a list of cell indices.
    pub fn lines(&self) -> &[Vec<usize>] {
        &self.lines
    }
}
