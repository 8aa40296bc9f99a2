//! Opening book for the first few marks.

use mnk_core::{BoardState, Coord};
use rand::Rng;
use rand::seq::SliceRandom;

/// The book applies while at most this many marks are on the board.
pub const BOOK_MAX_OCCUPIED: usize = 2;

/// Known-good early moves keyed by `(rows, cols, k)`.
const BOOK: &[((usize, usize, usize), &[(usize, usize)])] = &[
    ((3, 3, 3), &[(1, 1)]),
    ((15, 15, 5), &[(7, 7), (7, 6), (6, 7), (8, 7), (7, 8)]),
    ((10, 10, 5), &[(4, 4), (5, 5), (4, 5), (5, 4)]),
    ((19, 19, 5), &[(9, 9)]),
    ((6, 7, 4), &[(3, 2), (3, 3), (3, 4)]),
];

/// Book moves listed for a board shape, if any.
pub fn book_moves(rows: usize, cols: usize, k: usize) -> Option<&'static [(usize, usize)]> {
    BOOK.iter()
        .find(|(shape, _)| *shape == (rows, cols, k))
        .map(|(_, moves)| *moves)
}

/// An opening move for `board`, or `None` once the book no longer applies.
///
/// Listed moves for the exact shape come first; any still-empty one is
/// chosen uniformly. Otherwise an empty board gets the center, and a board
/// with one mark gets the center or, if that is taken, a random empty
/// diagonal neighbor of it.
pub fn opening_move<R: Rng + ?Sized>(board: &BoardState, rng: &mut R) -> Option<Coord> {
    let placed = board.occupied_count();
    if placed > BOOK_MAX_OCCUPIED {
        return None;
    }

    if let Some(moves) = book_moves(board.rows(), board.cols(), board.win_length()) {
        let open: Vec<Coord> = moves
            .iter()
            .map(|&rc| Coord::from(rc))
            .filter(|&c| board.is_empty_cell(c))
            .collect();
        if let Some(&mv) = open.choose(rng) {
            return Some(mv);
        }
    }

    let center = board.center();
    match placed {
        0 => Some(center),
        1 if board.is_empty_cell(center) => Some(center),
        1 => {
            let diagonals: Vec<Coord> = [(-1, -1), (1, 1), (-1, 1), (1, -1)]
                .into_iter()
                .filter_map(|(dr, dc)| center.offset(dr, dc, 1))
                .filter(|&c| board.is_empty_cell(c))
                .collect();
            diagonals.choose(rng).copied()
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use mnk_core::Player;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[test]
    fn book_shapes() {
        assert_eq!(book_moves(3, 3, 3), Some(&[(1, 1)][..]));
        assert_eq!(book_moves(19, 19, 5), Some(&[(9, 9)][..]));
        assert_eq!(book_moves(7, 6, 4), None);
    }

    #[test]
    fn empty_book_board_plays_listed_move() {
        let board = BoardState::new(15, 15, 5).unwrap();
        let listed: Vec<Coord> = book_moves(15, 15, 5)
            .unwrap()
            .iter()
            .map(|&rc| Coord::from(rc))
            .collect();
        let mut rng = rng();
        for _ in 0..20 {
            let mv = opening_move(&board, &mut rng).unwrap();
            assert!(listed.contains(&mv));
        }
    }

    #[test]
    fn occupied_book_moves_are_skipped() {
        let mut board = BoardState::new(6, 7, 4).unwrap();
        board.make_move(Coord::new(3, 2), Player::One);
        board.make_move(Coord::new(3, 3), Player::Two);
        assert_eq!(opening_move(&board, &mut rng()), Some(Coord::new(3, 4)));
    }

    #[test]
    fn generic_center_on_unknown_shape() {
        let board = BoardState::new(8, 9, 4).unwrap();
        assert_eq!(opening_move(&board, &mut rng()), Some(Coord::new(4, 4)));
    }

    #[test]
    fn center_taken_gives_diagonal_neighbor() {
        let mut board = BoardState::new(8, 8, 4).unwrap();
        board.make_move(Coord::new(4, 4), Player::One);
        let mut rng = rng();
        for _ in 0..20 {
            let mv = opening_move(&board, &mut rng).unwrap();
            assert_eq!(mv.chebyshev(Coord::new(4, 4)), 1);
            assert!(mv.row != 4 && mv.col != 4);
        }
    }

    #[test]
    fn one_stone_elsewhere_takes_center() {
        let mut board = BoardState::new(8, 8, 4).unwrap();
        board.make_move(Coord::new(0, 0), Player::One);
        assert_eq!(opening_move(&board, &mut rng()), Some(Coord::new(4, 4)));
    }

    #[test]
    fn two_stones_off_book_has_no_opening() {
        let mut board = BoardState::new(8, 8, 4).unwrap();
        board.make_move(Coord::new(4, 4), Player::One);
        board.make_move(Coord::new(3, 3), Player::Two);
        assert_eq!(opening_move(&board, &mut rng()), None);
    }

    #[test]
    fn book_ends_after_two_marks() {
        let mut board = BoardState::new(3, 3, 3).unwrap();
        board.make_move(Coord::new(0, 0), Player::One);
        board.make_move(Coord::new(0, 1), Player::Two);
        board.make_move(Coord::new(2, 2), Player::One);
        assert_eq!(opening_move(&board, &mut rng()), None);
    }
}
