//! Search and evaluation for m,n,k games.

pub mod book;
pub mod difficulty;
pub mod engine;
pub mod eval;
pub mod search;
pub mod time;

pub use book::opening_move;
pub use difficulty::{Difficulty, Strategy};
pub use engine::Engine;
pub use eval::{EvalWeights, Evaluator, Score, evaluate};
pub use search::control::{SearchAborted, SearchControl};
pub use search::{SearchConfig, SearchResult, Searcher, find_winning_move};
pub use time::budget_from_clock;
