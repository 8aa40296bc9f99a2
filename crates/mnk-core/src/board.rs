//! The m,n,k board: occupancy, incremental hashing, and win detection.

use std::fmt;

use crate::cell_set::CellSet;
use crate::coord::Coord;
use crate::error::BoardError;
use crate::player::Player;
use crate::zobrist::ZobristKeys;

/// The four line axes: horizontal, vertical, diagonal, anti-diagonal.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Mutable game state for one m,n,k game.
///
/// The same instance is used for real play and for search, which applies
/// and reverts trial moves in strict LIFO order via [`make_move`] and
/// [`undo_move`].
///
/// [`make_move`]: BoardState::make_move
/// [`undo_move`]: BoardState::undo_move
#[derive(Clone)]
pub struct BoardState {
    /// Number of rows (`m`).
    rows: usize,
    /// Number of columns (`n`).
    cols: usize,
    /// Run length needed to win (`k`).
    win_length: usize,
    /// Row-major cell contents.
    cells: Vec<Option<Player>>,
    occupied: CellSet,
    empty: CellSet,
    last_move: Option<Coord>,
    winner: Option<Player>,
    /// Zobrist hash of the occupied cells.
    hash: u64,
    keys: ZobristKeys,
}

impl BoardState {
    /// Create an empty `rows x cols` board where `win_length` in a row wins.
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Result<BoardState, BoardError> {
        Self::validate(rows, cols, win_length)?;
        Ok(Self::with_keys(rows, cols, win_length, ZobristKeys::new(rows, cols)))
    }

    /// Like [`new`](Self::new), but with Zobrist keys drawn from `seed`.
    pub fn with_seed(
        rows: usize,
        cols: usize,
        win_length: usize,
        seed: u64,
    ) -> Result<BoardState, BoardError> {
        Self::validate(rows, cols, win_length)?;
        Ok(Self::with_keys(
            rows,
            cols,
            win_length,
            ZobristKeys::from_seed(rows, cols, seed),
        ))
    }

    fn validate(rows: usize, cols: usize, win_length: usize) -> Result<(), BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::EmptyBoard { rows, cols });
        }
        if win_length == 0 || win_length > rows.max(cols) {
            return Err(BoardError::InvalidWinLength {
                k: win_length,
                rows,
                cols,
            });
        }
        Ok(())
    }

    fn with_keys(rows: usize, cols: usize, win_length: usize, keys: ZobristKeys) -> BoardState {
        BoardState {
            rows,
            cols,
            win_length,
            cells: vec![None; rows * cols],
            occupied: CellSet::new(rows, cols),
            empty: CellSet::full(rows, cols),
            last_move: None,
            winner: None,
            hash: 0,
            keys,
        }
    }

    /// Number of rows (`m`).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`n`).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Run length needed to win (`k`).
    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Return `true` if `coord` lies on the board.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Row-major index of an on-board coordinate.
    #[inline]
    pub fn index_of(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }

    /// Contents of `coord`, or `None` if it is empty or off the board.
    #[inline]
    pub fn cell(&self, coord: Coord) -> Option<Player> {
        if self.contains(coord) {
            self.cells[self.index_of(coord)]
        } else {
            None
        }
    }

    /// Return `true` if `coord` is on the board and unoccupied.
    #[inline]
    pub fn is_empty_cell(&self, coord: Coord) -> bool {
        self.contains(coord) && self.cells[self.index_of(coord)].is_none()
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Option<Player>] {
        &self.cells
    }

    /// The occupied cells.
    #[inline]
    pub fn occupied(&self) -> &CellSet {
        &self.occupied
    }

    /// The empty cells.
    #[inline]
    pub fn empty(&self) -> &CellSet {
        &self.empty
    }

    /// Number of marks on the board.
    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    /// The most recent move, if it has not been undone.
    #[inline]
    pub fn last_move(&self) -> Option<Coord> {
        self.last_move
    }

    /// The winner, if the last move completed a run.
    #[inline]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Zobrist hash of the position.
    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// The center cell `(rows / 2, cols / 2)`.
    #[inline]
    pub fn center(&self) -> Coord {
        Coord::new(self.rows / 2, self.cols / 2)
    }

    /// Return `true` if no empty cell remains.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty.is_empty()
    }

    /// Place `player`'s mark on `coord`.
    ///
    /// Returns `false` without touching any state if the cell is occupied
    /// or off the board. Otherwise updates occupancy and hash, records the
    /// move as the last move, and sets the winner if the placement
    /// completes a run of at least `k`.
    pub fn make_move(&mut self, coord: Coord, player: Player) -> bool {
        if !self.is_empty_cell(coord) {
            return false;
        }
        let idx = self.index_of(coord);
        self.cells[idx] = Some(player);
        self.empty.remove(coord);
        self.occupied.insert(coord);
        self.hash ^= self.keys.key(coord, player);
        self.last_move = Some(coord);

        if self.completes_run(coord, player) {
            self.winner = Some(player);
        }
        true
    }

    /// Remove the mark on `coord`.
    ///
    /// The winner and last move are cleared unconditionally; callers that
    /// unwind several moves must track those themselves. Empty or
    /// off-board cells are left alone.
    pub fn undo_move(&mut self, coord: Coord) {
        if !self.contains(coord) {
            return;
        }
        let idx = self.index_of(coord);
        if let Some(player) = self.cells[idx].take() {
            self.occupied.remove(coord);
            self.empty.insert(coord);
            self.hash ^= self.keys.key(coord, player);
        }
        self.winner = None;
        self.last_move = None;
    }

    /// Length of the contiguous run of `player` through `coord` along `(dr, dc)`.
    pub fn run_length(&self, coord: Coord, player: Player, dr: isize, dc: isize) -> usize {
        let mut count = 1;
        for sign in [1, -1] {
            for step in 1..self.win_length as isize {
                match coord.offset(dr * sign, dc * sign, step) {
                    Some(next) if self.cell(next) == Some(player) => count += 1,
                    _ => break,
                }
            }
        }
        count
    }

    fn completes_run(&self, coord: Coord, player: Player) -> bool {
        AXES.iter()
            .any(|&(dr, dc)| self.run_length(coord, player, dr, dc) >= self.win_length)
    }

    /// Recompute the hash from the grid.
    pub fn hash_from_scratch(&self) -> u64 {
        self.occupied.iter().fold(0, |hash, coord| match self.cell(coord) {
            Some(player) => hash ^ self.keys.key(coord, player),
            None => hash,
        })
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardState")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("k", &self.win_length)
            .field("occupied", &self.occupied.len())
            .field("winner", &self.winner)
            .field("hash", &format_args!("{:#018x}", self.hash))
            .finish()
    }
}

/// Grid rendering of a board: `.` empty, `X` player one, `O` player two.
pub struct PrettyBoard<'a>(&'a BoardState);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        write!(f, "    ")?;
        for col in 0..board.cols {
            write!(f, "{col:>3}")?;
        }
        writeln!(f)?;
        for row in 0..board.rows {
            write!(f, "{row:>3} ")?;
            for col in 0..board.cols {
                let glyph = board
                    .cell(Coord::new(row, col))
                    .map_or('.', Player::symbol);
                write!(f, "{glyph:>3}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: usize, cols: usize, k: usize) -> BoardState {
        BoardState::with_seed(rows, cols, k, 0xC0FFEE).unwrap()
    }

    fn play(board: &mut BoardState, moves: &[(usize, usize, Player)]) {
        for &(row, col, player) in moves {
            assert!(board.make_move(Coord::new(row, col), player));
        }
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert_eq!(
            BoardState::new(0, 3, 3).unwrap_err(),
            BoardError::EmptyBoard { rows: 0, cols: 3 }
        );
        assert!(matches!(
            BoardState::new(3, 3, 4),
            Err(BoardError::InvalidWinLength { k: 4, .. })
        ));
        assert!(BoardState::new(3, 3, 0).is_err());
        assert!(BoardState::new(2, 6, 5).is_ok());
    }

    #[test]
    fn new_board_partitions_cells() {
        let b = board(4, 5, 3);
        assert_eq!(b.empty().len(), 20);
        assert_eq!(b.occupied_count(), 0);
        assert_eq!(b.hash(), 0);
        assert_eq!(b.center(), Coord::new(2, 2));
        assert!(b.winner().is_none());
    }

    #[test]
    fn make_move_updates_state() {
        let mut b = board(3, 3, 3);
        let c = Coord::new(0, 2);
        assert!(b.make_move(c, Player::Two));
        assert_eq!(b.cell(c), Some(Player::Two));
        assert!(b.occupied().contains(c));
        assert!(!b.empty().contains(c));
        assert_eq!(b.last_move(), Some(c));
        assert_ne!(b.hash(), 0);
        assert_eq!(b.hash(), b.hash_from_scratch());
    }

    #[test]
    fn occupied_cell_is_rejected_without_mutation() {
        let mut b = board(3, 3, 3);
        b.make_move(Coord::new(1, 1), Player::One);
        let hash = b.hash();
        let cells = b.cells().to_vec();
        let empty = b.empty().len();

        assert!(!b.make_move(Coord::new(1, 1), Player::Two));
        assert_eq!(b.hash(), hash);
        assert_eq!(b.cells(), cells.as_slice());
        assert_eq!(b.empty().len(), empty);
        assert_eq!(b.cell(Coord::new(1, 1)), Some(Player::One));
    }

    #[test]
    fn off_board_move_is_rejected() {
        let mut b = board(3, 3, 3);
        assert!(!b.make_move(Coord::new(3, 0), Player::One));
        assert!(!b.make_move(Coord::new(0, 3), Player::One));
        assert_eq!(b.occupied_count(), 0);
    }

    #[test]
    fn undo_is_hash_symmetric() {
        let mut b = board(5, 5, 4);
        play(&mut b, &[(0, 0, Player::One), (2, 3, Player::Two), (4, 4, Player::One)]);
        let before = b.hash();
        let c = Coord::new(1, 2);
        b.make_move(c, Player::Two);
        assert_ne!(b.hash(), before);
        b.undo_move(c);
        assert_eq!(b.hash(), before);
        assert!(b.empty().contains(c));
        assert!(!b.occupied().contains(c));
        assert_eq!(b.cell(c), None);
        assert_eq!(b.occupied().len() + b.empty().len(), 25);
    }

    #[test]
    fn random_make_undo_sequences_restore_hash() {
        use rand::rngs::StdRng;
        use rand::seq::SliceRandom;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(99);
        let mut b = board(7, 6, 4);
        for _ in 0..50 {
            let start = b.hash();
            let mut stack = Vec::new();
            let mut player = Player::One;
            for _ in 0..10 {
                let empties: Vec<Coord> = b.empty().iter().collect();
                let Some(&c) = empties.choose(&mut rng) else {
                    break;
                };
                assert!(b.make_move(c, player));
                stack.push(c);
                player = player.opponent();
            }
            assert_eq!(b.hash(), b.hash_from_scratch());
            while let Some(c) = stack.pop() {
                b.undo_move(c);
            }
            assert_eq!(b.hash(), start);
            assert_eq!(b.occupied_count(), 0);
        }
    }

    #[test]
    fn horizontal_win() {
        let mut b = board(5, 5, 3);
        play(&mut b, &[(2, 0, Player::One), (2, 1, Player::One)]);
        assert!(b.winner().is_none(), "k-1 run must not win");
        b.make_move(Coord::new(2, 2), Player::One);
        assert_eq!(b.winner(), Some(Player::One));
    }

    #[test]
    fn vertical_win_from_middle() {
        let mut b = board(6, 4, 4);
        play(&mut b, &[(0, 3, Player::Two), (1, 3, Player::Two), (3, 3, Player::Two)]);
        assert!(b.winner().is_none());
        b.make_move(Coord::new(2, 3), Player::Two);
        assert_eq!(b.winner(), Some(Player::Two));
    }

    #[test]
    fn diagonal_win() {
        let mut b = board(4, 4, 3);
        play(&mut b, &[(1, 1, Player::One), (2, 2, Player::One)]);
        b.make_move(Coord::new(3, 3), Player::One);
        assert_eq!(b.winner(), Some(Player::One));
    }

    #[test]
    fn anti_diagonal_win() {
        let mut b = board(4, 4, 3);
        play(&mut b, &[(0, 3, Player::Two), (1, 2, Player::Two)]);
        assert!(b.winner().is_none());
        b.make_move(Coord::new(2, 1), Player::Two);
        assert_eq!(b.winner(), Some(Player::Two));
    }

    #[test]
    fn broken_run_does_not_win() {
        let mut b = board(1, 5, 3);
        play(&mut b, &[(0, 0, Player::One), (0, 1, Player::Two), (0, 3, Player::One)]);
        b.make_move(Coord::new(0, 2), Player::One);
        assert!(b.winner().is_none());
    }

    #[test]
    fn overline_counts_as_win() {
        let mut b = board(1, 7, 3);
        play(&mut b, &[(0, 0, Player::One), (0, 1, Player::One), (0, 3, Player::One), (0, 4, Player::One)]);
        // Placements at 0 and 1 and 3 and 4 each see a run of at most 2.
        assert!(b.winner().is_none());
        b.make_move(Coord::new(0, 2), Player::One);
        assert_eq!(b.winner(), Some(Player::One));
        assert_eq!(b.run_length(Coord::new(0, 2), Player::One, 0, 1), 5);
    }

    #[test]
    fn undo_clears_winner() {
        let mut b = board(3, 3, 3);
        play(&mut b, &[(0, 0, Player::One), (0, 1, Player::One), (0, 2, Player::One)]);
        assert_eq!(b.winner(), Some(Player::One));
        b.undo_move(Coord::new(0, 2));
        assert!(b.winner().is_none());
        assert!(b.last_move().is_none());
    }

    #[test]
    fn k_equals_one_wins_immediately() {
        let mut b = board(2, 2, 1);
        b.make_move(Coord::new(1, 0), Player::Two);
        assert_eq!(b.winner(), Some(Player::Two));
    }

    #[test]
    fn nearly_full_ten_by_ten_draw() {
        // Pairs of columns alternating owner, flipped on every row: no run exceeds 2.
        let mut b = board(10, 10, 5);
        let owner = |row: usize, col: usize| {
            if (col / 2 + row) % 2 == 0 { Player::One } else { Player::Two }
        };
        let last = Coord::new(9, 9);
        for row in 0..10 {
            for col in 0..10 {
                let c = Coord::new(row, col);
                if c != last {
                    assert!(b.make_move(c, owner(row, col)));
                    assert!(b.winner().is_none(), "unexpected win at {c}");
                }
            }
        }
        assert!(!b.is_full());
        assert_eq!(b.empty().len(), 1);
        assert!(b.make_move(last, owner(9, 9)));
        assert!(b.winner().is_none());
        assert!(b.is_full());
    }

    #[test]
    fn pretty_renders_marks() {
        let mut b = board(2, 3, 2);
        play(&mut b, &[(0, 1, Player::One), (1, 2, Player::Two)]);
        let text = format!("{}", b.pretty());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with(".  X  ."));
        assert!(lines[2].ends_with(".  .  O"));
    }

    #[test]
    fn clone_shares_keys() {
        let mut b = board(5, 5, 4);
        b.make_move(Coord::new(2, 2), Player::One);
        let mut snapshot = b.clone();
        snapshot.make_move(Coord::new(0, 0), Player::Two);
        b.make_move(Coord::new(0, 0), Player::Two);
        assert_eq!(b.hash(), snapshot.hash());
    }
}
