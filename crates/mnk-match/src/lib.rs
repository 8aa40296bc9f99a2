//! Two-seat matches: humans and engines taking turns on one board, with
//! optional chess clocks.

pub mod clock;
pub mod config;
pub mod error;
pub mod session;
pub mod thinker;

pub use clock::GameClock;
pub use config::{ClockConfig, MatchConfig, Seat};
pub use error::MatchError;
pub use session::{MatchSession, Outcome};
pub use thinker::{Thinker, ThinkerDone};
