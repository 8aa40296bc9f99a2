//! Core m,n,k game types: board state, hashing, win detection, and candidate moves.

mod board;
mod cell_set;
mod coord;
mod error;
pub mod movegen;
mod player;
mod zobrist;

pub use board::{BoardState, PrettyBoard};
pub use cell_set::CellSet;
pub use coord::Coord;
pub use error::{BoardError, CoordParseError};
pub use movegen::{all_empty_cells, relevant_moves};
pub use player::Player;
pub use zobrist::ZobristKeys;
