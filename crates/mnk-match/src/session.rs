//! A running match: board, turn, clocks and seats.

use std::fmt;
use std::time::Duration;

use mnk_core::{BoardState, Coord, Player};
use mnk_engine::{Engine, budget_from_clock};
use tracing::{debug, info, warn};

use crate::clock::GameClock;
use crate::config::{MatchConfig, Seat};
use crate::error::MatchError;
use crate::thinker::Thinker;

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A player completed a run.
    Win(Player),
    /// The board filled with no run.
    Draw,
    /// A player ran out of time.
    Timeout { loser: Player },
}

impl Outcome {
    /// The winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            Outcome::Draw => None,
            Outcome::Timeout { loser } => Some(loser.opponent()),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "{player} wins"),
            Outcome::Draw => f.write_str("draw"),
            Outcome::Timeout { loser } => write!(f, "{} wins on time", loser.opponent()),
        }
    }
}

/// One match between two seats.
///
/// Player one moves first. Engine seats think on a background thread
/// started and polled by [`update`](Self::update); human seats move through
/// [`submit_move`](Self::submit_move).
#[derive(Debug)]
pub struct MatchSession {
    board: BoardState,
    to_move: Player,
    seats: [Seat; Player::COUNT],
    engines: [Option<Engine>; Player::COUNT],
    clock: Option<GameClock>,
    thinker: Option<Thinker>,
    history: Vec<(Player, Coord)>,
    outcome: Option<Outcome>,
}

impl MatchSession {
    /// Set up a fresh board and one engine per AI seat.
    pub fn new(config: &MatchConfig) -> Result<MatchSession, MatchError> {
        let board = match config.seed {
            Some(seed) => BoardState::with_seed(config.rows, config.cols, config.win_length, seed)?,
            None => BoardState::new(config.rows, config.cols, config.win_length)?,
        };

        let engines = Player::ALL.map(|player| match config.seat(player) {
            Seat::Human => None,
            Seat::Ai(difficulty) => Some(match config.seed {
                Some(seed) => Engine::with_seed(difficulty, seed.wrapping_add(player.index() as u64)),
                None => Engine::new(difficulty),
            }),
        });

        info!(
            rows = config.rows,
            cols = config.cols,
            k = config.win_length,
            p1 = %config.seats[0],
            p2 = %config.seats[1],
            clock_secs = config.clock.map(|c| c.initial.as_secs_f64()),
            increment_secs = config.clock.map(|c| c.increment.as_secs_f64()),
            "match started"
        );

        Ok(MatchSession {
            board,
            to_move: Player::One,
            seats: config.seats,
            engines,
            clock: config.clock.map(GameClock::new),
            thinker: None,
            history: Vec::new(),
            outcome: None,
        })
    }

    /// The live board.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// The player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The seat for `player`.
    pub fn seat(&self, player: Player) -> Seat {
        self.seats[player.index()]
    }

    /// The clock, if the match is timed.
    pub fn clock(&self) -> Option<&GameClock> {
        self.clock.as_ref()
    }

    /// Moves played so far, in order.
    pub fn history(&self) -> &[(Player, Coord)] {
        &self.history
    }

    /// The result, once the match is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Return `true` if the game is still running and a human is to move.
    pub fn is_human_turn(&self) -> bool {
        self.outcome.is_none() && self.seat(self.to_move).is_human()
    }

    /// Return `true` while an engine search is in flight.
    pub fn is_thinking(&self) -> bool {
        self.thinker.is_some()
    }

    /// Play a human move for the side to move.
    pub fn submit_move(&mut self, coord: Coord) -> Result<(), MatchError> {
        if self.outcome.is_some() {
            return Err(MatchError::GameOver);
        }
        let player = self.to_move;
        if !self.seat(player).is_human() {
            return Err(MatchError::NotHumanTurn { player });
        }
        if !self.board.make_move(coord, player) {
            return Err(MatchError::IllegalMove { coord });
        }
        self.finish_move(player, coord);
        Ok(())
    }

    /// Advance the match by `dt` of wall-clock time.
    ///
    /// Charges the side to move, then drives an engine seat: starts a
    /// search if none is running, or applies its answer once ready.
    /// Returns the engine move applied during this call, if any.
    pub fn update(&mut self, dt: Duration) -> Result<Option<Coord>, MatchError> {
        if self.outcome.is_some() {
            return Ok(None);
        }
        let player = self.to_move;

        if let Some(clock) = &mut self.clock
            && clock.charge(player, dt)
        {
            self.thinker = None;
            self.end(Outcome::Timeout { loser: player });
            return Ok(None);
        }

        if self.seat(player).is_human() {
            return Ok(None);
        }

        let Some(thinker) = &self.thinker else {
            self.start_thinking(player)?;
            return Ok(None);
        };
        let done = match thinker.poll() {
            Ok(Some(done)) => done,
            Ok(None) => return Ok(None),
            Err(err) => {
                self.thinker = None;
                return Err(err);
            }
        };
        self.thinker = None;
        debug!(
            %player,
            elapsed_ms = done.elapsed.as_millis() as u64,
            tt_entries = done.engine.searcher().tt_len(),
            "engine answered"
        );
        self.engines[player.index()] = Some(done.engine);

        match done.mv {
            Some(mv) if self.board.make_move(mv, player) => {
                self.finish_move(player, mv);
                Ok(Some(mv))
            }
            other => {
                warn!(%player, mv = ?other, "engine returned an unusable move, retrying");
                Ok(None)
            }
        }
    }

    fn start_thinking(&mut self, player: Player) -> Result<(), MatchError> {
        let engine = self.engines[player.index()]
            .take()
            .ok_or(MatchError::EngineLost { player })?;
        let budget = self
            .clock
            .as_ref()
            .map(|clock| budget_from_clock(clock.remaining(player)));
        self.thinker = Some(Thinker::spawn(engine, self.board.clone(), player, budget));
        Ok(())
    }

    /// Bookkeeping after `player` placed a mark on `coord`.
    fn finish_move(&mut self, player: Player, coord: Coord) {
        if let Some(clock) = &mut self.clock {
            clock.add_increment(player);
        }
        self.history.push((player, coord));
        info!(
            %player,
            mv = %coord,
            ply = self.history.len(),
            remaining_secs = self.clock.as_ref().map(|c| c.remaining(player).as_secs_f64()),
            "move played"
        );

        if self.board.winner() == Some(player) {
            self.end(Outcome::Win(player));
        } else if self.board.is_full() {
            self.end(Outcome::Draw);
        } else {
            self.to_move = player.opponent();
        }
    }

    fn end(&mut self, outcome: Outcome) {
        info!(%outcome, plies = self.history.len(), "match over");
        self.outcome = Some(outcome);
    }
}
