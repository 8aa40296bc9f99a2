//! Line-pattern evaluation.
//!
//! Every line of the board is scanned with a window of exactly `k` cells.
//! Windows holding marks of only one player are scored by
//! [`pattern::window_score`]; the player's windows count positively and
//! the opponent's negatively, scaled by [`EvalWeights::defense_percent`].

pub mod lines;
pub mod pattern;

use mnk_core::{BoardState, Player};

use lines::LineTable;
use pattern::{WIN, window_score};

/// Evaluation and search score.
pub type Score = i64;

/// Tunable evaluation weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalWeights {
    /// Opponent windows are scaled by this percentage. Values above 100
    /// make the engine answer threats before building its own.
    pub defense_percent: Score,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            defense_percent: 150,
        }
    }
}

/// Board evaluator with a cached line table.
#[derive(Debug, Clone)]
pub struct Evaluator {
    table: LineTable,
    weights: EvalWeights,
}

impl Evaluator {
    /// Build an evaluator for `board`'s shape.
    pub fn new(board: &BoardState, weights: EvalWeights) -> Self {
        Self {
            table: LineTable::new(board),
            weights,
        }
    }

    /// Return `true` if the cached lines match `board`'s shape.
    pub fn fits(&self, board: &BoardState) -> bool {
        self.table.fits(board)
    }

    /// Score `board` from `player`'s point of view.
    ///
    /// A decided game scores `±WIN`. Otherwise the result is the sum of all
    /// window patterns.
    pub fn evaluate(&self, board: &BoardState, player: Player) -> Score {
        match board.winner() {
            Some(winner) if winner == player => return WIN,
            Some(_) => return -WIN,
            None => {}
        }

        let cells = board.cells();
        let k = board.win_length();
        self.table
            .lines()
            .iter()
            .map(|line| self.score_line(cells, line, k, player))
            .sum()
    }

    fn score_line(&self, cells: &[Option<Player>], line: &[usize], k: usize, player: Player) -> Score {
        let len = line.len();
        if len < k {
            return 0;
        }

        let mut mine = 0usize;
        let mut theirs = 0usize;
        for &idx in &line[..k] {
            match cells[idx] {
                Some(p) if p == player => mine += 1,
                Some(_) => theirs += 1,
                None => {}
            }
        }

        let mut score = 0;
        for start in 0..=len - k {
            if start > 0 {
                match cells[line[start - 1]] {
                    Some(p) if p == player => mine -= 1,
                    Some(_) => theirs -= 1,
                    None => {}
                }
                match cells[line[start + k - 1]] {
                    Some(p) if p == player => mine += 1,
                    Some(_) => theirs += 1,
                    None => {}
                }
            }

            if (mine > 0) == (theirs > 0) {
                // Mixed windows are dead; empty ones carry no information.
                continue;
            }

            let before_open = start > 0 && cells[line[start - 1]].is_none();
            let after_open = start + k < len && cells[line[start + k]].is_none();
            let open_ends = before_open as u8 + after_open as u8;

            if mine > 0 {
                score += window_score(mine, k, open_ends);
            } else {
                score -= window_score(theirs, k, open_ends) * self.weights.defense_percent / 100;
            }
        }
        score
    }
}

/// Score `board` from `player`'s point of view with default weights.
///
/// Builds the line table on every call; searches should hold an
/// [`Evaluator`] instead.
pub fn evaluate(board: &BoardState, player: Player) -> Score {
    Evaluator::new(board, EvalWeights::default()).evaluate(board, player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mnk_core::Coord;

    fn board_with(rows: usize, cols: usize, k: usize, marks: &[(usize, usize, Player)]) -> BoardState {
        let mut board = BoardState::with_seed(rows, cols, k, 1).unwrap();
        for &(r, c, p) in marks {
            assert!(board.make_move(Coord::new(r, c), p));
        }
        board
    }

    #[test]
    fn empty_board_scores_zero() {
        let board = board_with(7, 7, 4, &[]);
        assert_eq!(evaluate(&board, Player::One), 0);
    }

    #[test]
    fn terminal_scores() {
        let board = board_with(3, 3, 3, &[
            (0, 0, Player::Two),
            (1, 1, Player::Two),
            (2, 2, Player::Two),
        ]);
        assert_eq!(evaluate(&board, Player::Two), WIN);
        assert_eq!(evaluate(&board, Player::One), -WIN);
    }

    #[test]
    fn single_line_open_three_in_five() {
        // 1x7 board, k=5: marks at 2,3,4.
        let board = board_with(1, 7, 5, &[
            (0, 2, Player::One),
            (0, 3, Player::One),
            (0, 4, Player::One),
        ]);
        // Windows: [0..5) 3 marks, after-end 5 empty -> 1 open -> 2,000
        //          [1..6) 3 marks, both ends empty -> 50,000
        //          [2..7) 3 marks, before-end 1 empty -> 1 open -> 2,000
        assert_eq!(evaluate(&board, Player::One), 54_000);
    }

    #[test]
    fn opponent_windows_are_weighted() {
        let marks = [(0, 2, Player::Two), (0, 3, Player::Two), (0, 4, Player::Two)];
        let board = board_with(1, 7, 5, &marks);
        assert_eq!(evaluate(&board, Player::One), -81_000);
        let neutral = Evaluator::new(&board, EvalWeights { defense_percent: 100 });
        assert_eq!(neutral.evaluate(&board, Player::One), -54_000);
    }

    #[test]
    fn mixed_windows_score_nothing() {
        let board = board_with(1, 3, 3, &[(0, 0, Player::One), (0, 2, Player::Two)]);
        assert_eq!(evaluate(&board, Player::One), 0);
    }

    #[test]
    fn antisymmetric_with_neutral_weights() {
        let board = board_with(6, 6, 4, &[
            (2, 2, Player::One),
            (2, 3, Player::Two),
            (3, 3, Player::One),
            (1, 1, Player::Two),
            (4, 4, Player::One),
            (0, 5, Player::Two),
            (3, 2, Player::One),
        ]);
        assert!(board.winner().is_none());
        let neutral = Evaluator::new(&board, EvalWeights { defense_percent: 100 });
        let a = neutral.evaluate(&board, Player::One);
        let b = neutral.evaluate(&board, Player::Two);
        assert_ne!(a, 0);
        assert_eq!(a, -b);
    }

    #[test]
    fn defensive_bias_makes_mirror_positions_negative() {
        // Symmetric position: each side has one open two on its own row.
        let board = board_with(5, 9, 4, &[
            (0, 3, Player::One),
            (0, 4, Player::One),
            (4, 3, Player::Two),
            (4, 4, Player::Two),
        ]);
        let one = evaluate(&board, Player::One);
        let two = evaluate(&board, Player::Two);
        assert_eq!(one, two, "mirror position scores the same for both sides");
        assert!(one < 0, "equal threats weigh more on defense");
    }

    #[test]
    fn evaluator_reports_shape() {
        let board = board_with(4, 5, 3, &[]);
        let ev = Evaluator::new(&board, EvalWeights::default());
        assert!(ev.fits(&board));
        assert!(!ev.fits(&board_with(5, 4, 3, &[])));
    }
}
