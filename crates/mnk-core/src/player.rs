//! The two sides of an m,n,k game.

use std::fmt;
use std::ops::Not;

/// A player: the first or second to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    One = 1,
    Two = 2,
}

impl Player {
    /// Total number of players.
    pub const COUNT: usize = 2;

    /// Both players in index order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Return the zero-based index (0 for One, 1 for Two).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Return the other player.
    #[inline]
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Return the board glyph for this player's marks.
    pub const fn symbol(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

impl Not for Player {
    type Output = Player;

    #[inline]
    fn not(self) -> Player {
        self.opponent()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "player 1"),
            Player::Two => write!(f, "player 2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Player;

    #[test]
    fn index_values() {
        assert_eq!(Player::One.index(), 0);
        assert_eq!(Player::Two.index(), 1);
    }

    #[test]
    fn opponent_roundtrip() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(!!Player::One, Player::One);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Player::Two), "player 2");
        assert_eq!(Player::One.symbol(), 'X');
    }
}
