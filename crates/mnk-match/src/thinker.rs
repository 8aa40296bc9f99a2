//! Background engine search.
//!
//! The engine and a board snapshot move into a worker thread; the engine
//! comes back over a channel together with its answer.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use mnk_core::{BoardState, Coord, Player};
use mnk_engine::Engine;
use tracing::debug;

use crate::error::MatchError;

/// What a finished search hands back.
#[derive(Debug)]
pub struct ThinkerDone {
    /// The engine, with its tables intact.
    pub engine: Engine,
    /// The chosen move.
    pub mv: Option<Coord>,
    /// Wall-clock time the search took.
    pub elapsed: Duration,
}

/// One engine search running on its own thread.
#[derive(Debug)]
pub struct Thinker {
    player: Player,
    rx: Receiver<ThinkerDone>,
}

impl Thinker {
    /// Start `engine` searching `board` for `player`.
    pub fn spawn(mut engine: Engine, board: BoardState, player: Player, budget: Option<Duration>) -> Thinker {
        let (tx, rx) = mpsc::channel();
        debug!(%player, budget_ms = budget.map(|b| b.as_millis() as u64), "engine thinking");

        thread::spawn(move || {
            let start = Instant::now();
            let mv = engine.choose_move(&board, player, budget);
            let done = ThinkerDone {
                engine,
                mv,
                elapsed: start.elapsed(),
            };
            // The receiver is gone if the match ended meanwhile.
            let _ = tx.send(done);
        });

        Thinker { player, rx }
    }

    #[cfg(test)]
    pub(crate) fn from_receiver(player: Player, rx: Receiver<ThinkerDone>) -> Thinker {
        Thinker { player, rx }
    }

    /// The player being searched for.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Non-blocking check for a result.
    pub fn poll(&self) -> Result<Option<ThinkerDone>, MatchError> {
        match self.rx.try_recv() {
            Ok(done) => Ok(Some(done)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(MatchError::EngineLost { player: self.player }),
        }
    }

    /// Block until the search finishes.
    pub fn wait(self) -> Result<ThinkerDone, MatchError> {
        self.rx.recv().map_err(|_| MatchError::EngineLost { player: self.player })
    }
}

#[cfg(test)]
mod tests {
    use mnk_engine::Difficulty;

    use super::*;

    #[test]
    fn hands_back_engine_and_move() {
        let mut board = BoardState::new(3, 3, 3).unwrap();
        board.make_move(Coord::new(0, 0), Player::One);
        board.make_move(Coord::new(2, 2), Player::Two);
        board.make_move(Coord::new(0, 1), Player::One);

        let engine = Engine::with_seed(Difficulty::new(2), 1);
        let thinker = Thinker::spawn(engine, board.clone(), Player::Two, None);
        assert_eq!(thinker.player(), Player::Two);

        let done = thinker.wait().unwrap();
        assert_eq!(done.mv, Some(Coord::new(0, 2)));
        assert!(done.elapsed < Duration::from_secs(10));
        assert_eq!(done.engine.difficulty(), Difficulty::new(2));
    }

    #[test]
    fn poll_eventually_yields() {
        let board = BoardState::new(5, 5, 4).unwrap();
        let thinker = Thinker::spawn(Engine::with_seed(Difficulty::new(1), 2), board, Player::One, None);
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            if let Some(done) = thinker.poll().unwrap() {
                assert_eq!(done.mv, Some(Coord::new(2, 2)));
                break;
            }
            assert!(Instant::now() < deadline, "thinker never answered");
            thread::sleep(Duration::from_millis(1));
        }
    }
}
