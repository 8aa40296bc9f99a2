//! Match errors.

use mnk_core::{BoardError, Coord, Player};

/// Errors raised by match configuration and play.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// A move was submitted after the game ended.
    #[error("the game is over")]
    GameOver,

    /// A human move was submitted while an engine seat is to move.
    #[error("{player} is not a human seat")]
    NotHumanTurn {
        /// The player to move.
        player: Player,
    },

    /// The target cell is occupied or off the board.
    #[error("illegal move {coord}")]
    IllegalMove {
        /// The rejected cell.
        coord: Coord,
    },

    /// A flag was given without its value.
    #[error("missing value for {flag}")]
    MissingValue {
        /// The flag missing a value.
        flag: String,
    },

    /// A flag's value could not be parsed.
    #[error("invalid value {value:?} for {flag}")]
    InvalidValue {
        /// The flag being parsed.
        flag: String,
        /// The offending value.
        value: String,
    },

    /// An unrecognized flag.
    #[error("unknown flag {flag}")]
    UnknownFlag {
        /// The flag as given.
        flag: String,
    },

    /// An engine thread ended without handing back a result.
    #[error("engine for {player} stopped without answering")]
    EngineLost {
        /// The player whose engine was lost.
        player: Player,
    },

    /// The board dimensions are impossible.
    #[error(transparent)]
    Board(#[from] BoardError),
}
