//! Candidate move generation.

use crate::board::BoardState;
use crate::coord::Coord;

/// Every empty cell on the board.
pub fn all_empty_cells(board: &BoardState) -> Vec<Coord> {
    board.empty().as_slice().to_vec()
}

/// Empty cells within Chebyshev distance `radius` of any mark.
///
/// On an empty board only the center cell is returned. If marks exist but
/// none has an empty neighbor in range, every empty cell is returned.
pub fn relevant_moves(board: &BoardState, radius: usize) -> Vec<Coord> {
    if board.occupied().is_empty() {
        return vec![board.center()];
    }

    let mut seen = vec![false; board.rows() * board.cols()];
    let mut moves = Vec::new();
    let r = radius as isize;

    for stone in board.occupied().iter() {
        for dr in -r..=r {
            for dc in -r..=r {
                let Some(cell) = stone.offset(dr, dc, 1) else {
                    continue;
                };
                if !board.is_empty_cell(cell) {
                    continue;
                }
                let idx = board.index_of(cell);
                if !seen[idx] {
                    seen[idx] = true;
                    moves.push(cell);
                }
            }
        }
    }

    if moves.is_empty() {
        return all_empty_cells(board);
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;

    fn sorted(mut v: Vec<Coord>) -> Vec<Coord> {
        v.sort();
        v
    }

    #[test]
    fn empty_board_yields_center() {
        let board = BoardState::new(15, 15, 5).unwrap();
        assert_eq!(relevant_moves(&board, 2), vec![Coord::new(7, 7)]);
        let board = BoardState::new(6, 7, 4).unwrap();
        assert_eq!(relevant_moves(&board, 1), vec![Coord::new(3, 3)]);
    }

    #[test]
    fn all_empty_cells_counts() {
        let mut board = BoardState::new(3, 4, 3).unwrap();
        assert_eq!(all_empty_cells(&board).len(), 12);
        board.make_move(Coord::new(0, 0), Player::One);
        let cells = all_empty_cells(&board);
        assert_eq!(cells.len(), 11);
        assert!(!cells.contains(&Coord::new(0, 0)));
    }

    #[test]
    fn radius_one_ring() {
        let mut board = BoardState::new(5, 5, 3).unwrap();
        board.make_move(Coord::new(2, 2), Player::One);
        let moves = relevant_moves(&board, 1);
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|c| c.chebyshev(Coord::new(2, 2)) == 1));
    }

    #[test]
    fn radius_two_clipped_at_corner() {
        let mut board = BoardState::new(5, 5, 3).unwrap();
        board.make_move(Coord::new(0, 0), Player::One);
        let moves = relevant_moves(&board, 2);
        // 3x3 corner square minus the stone itself
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn neighborhoods_are_deduplicated() {
        let mut board = BoardState::new(5, 5, 3).unwrap();
        board.make_move(Coord::new(2, 1), Player::One);
        board.make_move(Coord::new(2, 2), Player::Two);
        let moves = relevant_moves(&board, 1);
        let unique = sorted(moves.clone());
        let mut dedup = unique.clone();
        dedup.dedup();
        assert_eq!(unique, dedup);
        // 3x4 rectangle around the pair minus the two stones
        assert_eq!(moves.len(), 10);
    }

    #[test]
    fn falls_back_to_all_empty_cells() {
        // Row 0 is fully occupied; the only empty cells are far away.
        let mut board = BoardState::new(4, 3, 3).unwrap();
        let stones = [(0, 0, Player::One), (0, 1, Player::Two), (0, 2, Player::One)];
        for (r, c, p) in stones {
            board.make_move(Coord::new(r, c), p);
        }
        for c in 0..3 {
            board.make_move(Coord::new(1, c), Player::Two);
        }
        // Remaining empties are in rows 2..3; radius 0 finds nothing.
        let moves = relevant_moves(&board, 0);
        assert_eq!(sorted(moves), sorted(all_empty_cells(&board)));
    }
}
