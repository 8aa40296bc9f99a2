//! Match configuration parsed from command-line tokens.

use std::fmt;
use std::time::Duration;

use mnk_core::{BoardState, Player};
use mnk_engine::Difficulty;

use crate::error::MatchError;

/// Who plays one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// Moves come from [`MatchSession::submit_move`](crate::MatchSession::submit_move).
    Human,
    /// An engine at the given tier.
    Ai(Difficulty),
}

impl Seat {
    /// Parse a seat token: `human` (or `0`) for a person, anything else is
    /// read as a difficulty.
    pub fn parse(token: &str) -> Seat {
        match token.trim() {
            "human" | "0" => Seat::Human,
            other => Seat::Ai(Difficulty::from(other)),
        }
    }

    /// Return `true` for a human seat.
    pub fn is_human(self) -> bool {
        matches!(self, Seat::Human)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Human => f.write_str("human"),
            Seat::Ai(difficulty) => write!(f, "AI {difficulty}"),
        }
    }
}

/// Chess-clock settings shared by both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    /// Starting time per player.
    pub initial: Duration,
    /// Time added after each of a player's moves.
    pub increment: Duration,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            initial: Duration::from_secs(5 * 60),
            increment: Duration::ZERO,
        }
    }
}

/// Everything needed to start a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub rows: usize,
    pub cols: usize,
    pub win_length: usize,
    /// Seat for player one, then player two.
    pub seats: [Seat; 2],
    /// `None` plays without clocks; engines then use their tier budgets.
    pub clock: Option<ClockConfig>,
    /// Seed for board keys and engine randomness.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            win_length: 5,
            seats: [Seat::Human, Seat::Ai(Difficulty::from("medium"))],
            clock: Some(ClockConfig::default()),
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Parse `--rows --cols --k --p1 --p2 --minutes --increment --seed`.
    ///
    /// Unset flags keep their defaults. `--minutes 0` disables the clock.
    /// The board shape is validated before returning.
    pub fn from_args<I, S>(args: I) -> Result<MatchConfig, MatchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let tokens: Vec<&str> = args.iter().map(|s| s.as_ref()).collect();

        let mut config = MatchConfig::default();
        let mut minutes: Option<f64> = None;
        let mut increment: Option<f64> = None;

        let mut i = 0;
        while i < tokens.len() {
            let flag = tokens[i];
            let value = tokens.get(i + 1).copied();
            match flag {
                "--rows" => config.rows = parse_value(flag, value)?,
                "--cols" => config.cols = parse_value(flag, value)?,
                "--k" => config.win_length = parse_value(flag, value)?,
                "--p1" => config.seats[0] = Seat::parse(require(flag, value)?),
                "--p2" => config.seats[1] = Seat::parse(require(flag, value)?),
                "--minutes" => minutes = Some(parse_seconds(flag, value)?),
                "--increment" => increment = Some(parse_seconds(flag, value)?),
                "--seed" => config.seed = Some(parse_value(flag, value)?),
                _ => {
                    return Err(MatchError::UnknownFlag {
                        flag: flag.to_string(),
                    });
                }
            }
            i += 2;
        }

        let mut clock = ClockConfig::default();
        if let Some(m) = minutes {
            clock.initial = Duration::from_secs_f64(m * 60.0);
        }
        if let Some(s) = increment {
            clock.increment = Duration::from_secs_f64(s);
        }
        config.clock = (!clock.initial.is_zero()).then_some(clock);

        config.validate()?;
        Ok(config)
    }

    /// Check that the board shape is playable.
    pub fn validate(&self) -> Result<(), MatchError> {
        BoardState::new(self.rows, self.cols, self.win_length)?;
        Ok(())
    }

    /// Seat for `player`.
    pub fn seat(&self, player: Player) -> Seat {
        self.seats[player.index()]
    }
}

fn require<'a>(flag: &str, value: Option<&'a str>) -> Result<&'a str, MatchError> {
    value.ok_or_else(|| MatchError::MissingValue {
        flag: flag.to_string(),
    })
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&str>) -> Result<T, MatchError> {
    let value = require(flag, value)?;
    value.parse().map_err(|_| MatchError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

/// A non-negative, finite number.
fn parse_seconds(flag: &str, value: Option<&str>) -> Result<f64, MatchError> {
    let parsed: f64 = parse_value(flag, value)?;
    if !parsed.is_finite() || parsed < 0.0 {
        return Err(MatchError::InvalidValue {
            flag: flag.to_string(),
            value: value.unwrap_or_default().to_string(),
        });
    }
    Ok(parsed)
}
