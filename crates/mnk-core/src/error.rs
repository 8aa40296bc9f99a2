//! Error types for board construction and coordinate parsing.

/// Errors from constructing a [`BoardState`](crate::BoardState).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The board has no rows or no columns.
    #[error("board must have at least one row and one column, got {rows}x{cols}")]
    EmptyBoard {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// The win length cannot fit on the board.
    #[error("win length {k} does not fit a {rows}x{cols} board")]
    InvalidWinLength {
        /// Requested run length.
        k: usize,
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },
}

/// Errors from parsing a [`Coord`](crate::Coord) out of user text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordParseError {
    /// The input did not contain exactly two fields.
    #[error("expected \"row col\", got \"{input}\"")]
    WrongFieldCount {
        /// The raw input.
        input: String,
    },
    /// A field was not a non-negative integer.
    #[error("invalid coordinate number: \"{field}\"")]
    InvalidNumber {
        /// The offending field.
        field: String,
    },
}
