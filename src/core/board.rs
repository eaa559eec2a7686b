//! The Gomoku grid.
//!
//! `Board` owns an N×N grid of [`Cell`]s stored flat in linearized order,
//! so the cell at `(column, row)` lives at `column * N + row` and a cell
//! index is the same number as the action that targets it.
//!
//! Boards are plain owned values. The environment never mutates a board
//! it was handed; transitions clone first and place on the copy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

use super::action::Move;
use super::player::{Cell, Side};
use crate::error::GomokuError;

/// Stones needed in an unbroken line to win. Longer runs also win.
pub const WIN_LENGTH: usize = 5;

/// Axis directions as `(column step, row step)`: vertical-index,
/// horizontal-index, diagonal and anti-diagonal.
static DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// An N×N Gomoku board.
///
/// ## Example
///
/// ```
/// use rust_gomoku::core::{Board, Move, Side};
///
/// let mut board = Board::new(15);
/// board.place(Move::new(7, 7), Side::First);
///
/// assert_eq!(board.occupied_count(), 1);
/// assert_eq!(board.legal_moves(Side::Second).len(), 15 * 15 - 1);
/// assert!(!board.has_five_in_a_row(Side::First));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

#[derive(Deserialize)]
struct BoardRepr {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = GomokuError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        Board::from_cells(repr.size, repr.cells)
    }
}

impl Board {
    /// Create an empty board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board size must be positive");
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Build a board from cells in linearized order.
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Result<Self, GomokuError> {
        if size == 0 {
            return Err(GomokuError::InvalidBoardSize(size));
        }
        if cells.len() != size * size {
            return Err(GomokuError::InvalidBoardLength {
                expected: size * size,
                got: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Build a board from the numeric `0 / +1 / -1` encoding.
    pub fn from_values(size: usize, values: &[i8]) -> Result<Self, GomokuError> {
        let cells = values
            .iter()
            .map(|&v| Cell::try_from(v))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cells(size, cells)
    }

    /// Side length N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cells in linearized order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Numeric encoding of every cell, in linearized order.
    #[must_use]
    pub fn values(&self) -> Vec<i8> {
        self.cells.iter().map(|c| c.value()).collect()
    }

    /// Get a cell, or `None` if the move is off the board.
    #[must_use]
    pub fn get(&self, mv: Move) -> Option<Cell> {
        mv.is_on_board(self.size)
            .then(|| self.cells[mv.to_action(self.size)])
    }

    /// Every empty cell, scanned rows outer and columns inner.
    ///
    /// `_side` is accepted for symmetry with other games; legality only
    /// depends on emptiness.
    #[must_use]
    pub fn legal_moves(&self, _side: Side) -> Vec<Move> {
        let n = self.size;
        (0..n)
            .flat_map(|row| (0..n).map(move |column| Move::new(column, row)))
            .filter(|&mv| self[mv].is_empty())
            .collect()
    }

    /// Check whether at least one empty cell exists.
    #[must_use]
    pub fn has_legal_moves(&self) -> bool {
        self.cells.iter().any(|c| c.is_empty())
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Write a side's stone into a cell.
    ///
    /// # Panics
    ///
    /// Panics if the move is off the board or the cell is occupied.
    /// Callers validate first; overwriting a stone would corrupt the game.
    pub fn place(&mut self, mv: Move, side: Side) {
        assert!(
            mv.is_on_board(self.size),
            "Move {} is off a {}x{} board",
            mv,
            self.size,
            self.size
        );
        let index = mv.to_action(self.size);
        assert!(
            self.cells[index].is_empty(),
            "Cell {} is already occupied",
            mv
        );
        self.cells[index] = Cell::from(side);
    }

    /// Check whether `side` owns an unbroken line of at least five stones
    /// along any of the four axes.
    #[must_use]
    pub fn has_five_in_a_row(&self, side: Side) -> bool {
        let stone = Cell::from(side);
        self.stones(stone).any(|mv| {
            DIRECTIONS
                .iter()
                .any(|&dir| self.run_from(mv, dir, stone) >= WIN_LENGTH)
        })
    }

    /// Length of the longest unbroken line owned by `side`.
    #[must_use]
    pub fn longest_run(&self, side: Side) -> usize {
        let stone = Cell::from(side);
        self.stones(stone)
            .flat_map(|mv| DIRECTIONS.iter().map(move |&dir| (mv, dir)))
            .map(|(mv, dir)| self.run_from(mv, dir, stone))
            .max()
            .unwrap_or(0)
    }

    /// Multiply every cell by a side's sign.
    #[must_use]
    pub fn scaled(&self, side: Side) -> Self {
        Self {
            size: self.size,
            cells: self.cells.iter().map(|c| c.scaled(side)).collect(),
        }
    }

    fn stones(&self, stone: Cell) -> impl Iterator<Item = Move> + '_ {
        let n = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c == stone)
            .map(move |(i, _)| Move::from_action(i, n))
    }

    /// Run length starting at `start` and walking along `dir`.
    ///
    /// Returns 0 unless `start` is the first stone of its run, so every
    /// run is measured exactly once and from its full extent.
    fn run_from(&self, start: Move, dir: (isize, isize), stone: Cell) -> usize {
        if self.step(start, dir, -1).is_some_and(|prev| self[prev] == stone) {
            return 0;
        }
        let mut length = 0;
        let mut cursor = Some(start);
        while let Some(mv) = cursor {
            if self[mv] != stone {
                break;
            }
            length += 1;
            cursor = self.step(mv, dir, 1);
        }
        length
    }

    fn step(&self, mv: Move, (dc, dr): (isize, isize), sign: isize) -> Option<Move> {
        let column = mv.column.checked_add_signed(dc * sign)?;
        let row = mv.row.checked_add_signed(dr * sign)?;
        let next = Move::new(column, row);
        next.is_on_board(self.size).then_some(next)
    }
}

impl Index<Move> for Board {
    type Output = Cell;

    fn index(&self, mv: Move) -> &Self::Output {
        assert!(
            mv.is_on_board(self.size),
            "Move {} is off a {}x{} board",
            mv,
            self.size,
            self.size
        );
        &self.cells[mv.to_action(self.size)]
    }
}

/// Text rendering: one printed line per column index, `X . O` glyphs.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size;
        let rule = format!("  {}-", "--".repeat(n));

        write!(f, "   ")?;
        for y in 0..n {
            write!(f, "{} ", y)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", rule)?;
        for y in 0..n {
            write!(f, "{:2}|", y)?;
            for x in 0..n {
                write!(f, "{} ", self[Move::new(y, x)].glyph())?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{}", rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, stones: &[(usize, usize, Side)]) -> Board {
        let mut board = Board::new(size);
        for &(column, row, side) in stones {
            board.place(Move::new(column, row), side);
        }
        board
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(5);
        assert_eq!(board.size(), 5);
        assert_eq!(board.cells().len(), 25);
        assert_eq!(board.occupied_count(), 0);
        assert!(board.has_legal_moves());
    }

    #[test]
    #[should_panic(expected = "Board size must be positive")]
    fn test_zero_size_board() {
        let _ = Board::new(0);
    }

    #[test]
    fn test_legal_moves_order() {
        let board = Board::new(3);
        let moves = board.legal_moves(Side::First);
        assert_eq!(moves.len(), 9);
        // Rows outer, columns inner
        assert_eq!(moves[0], Move::new(0, 0));
        assert_eq!(moves[1], Move::new(1, 0));
        assert_eq!(moves[2], Move::new(2, 0));
        assert_eq!(moves[3], Move::new(0, 1));
        assert_eq!(moves, board.legal_moves(Side::Second));
    }

    #[test]
    fn test_legal_moves_skip_occupied() {
        let board = board_with(3, &[(1, 1, Side::First), (0, 0, Side::Second)]);
        let moves = board.legal_moves(Side::First);
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&Move::new(1, 1)));
        assert!(!moves.contains(&Move::new(0, 0)));
    }

    #[test]
    fn test_place_writes_cell() {
        let mut board = Board::new(5);
        board.place(Move::new(2, 3), Side::Second);
        assert_eq!(board[Move::new(2, 3)], Cell::Second);
        assert_eq!(board.cells()[2 * 5 + 3], Cell::Second);
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn test_place_on_occupied_cell_panics() {
        let mut board = Board::new(5);
        board.place(Move::new(2, 3), Side::First);
        board.place(Move::new(2, 3), Side::Second);
    }

    #[test]
    #[should_panic(expected = "off a 5x5 board")]
    fn test_place_off_board_panics() {
        let mut board = Board::new(5);
        board.place(Move::new(5, 0), Side::First);
    }

    #[test]
    fn test_full_board_has_no_legal_moves() {
        let mut board = Board::new(2);
        board.place(Move::new(0, 0), Side::First);
        board.place(Move::new(0, 1), Side::Second);
        board.place(Move::new(1, 0), Side::First);
        assert!(board.has_legal_moves());
        board.place(Move::new(1, 1), Side::Second);
        assert!(!board.has_legal_moves());
        assert!(board.legal_moves(Side::First).is_empty());
    }

    #[test]
    fn test_five_along_each_axis() {
        let n = 9;
        let lines: [Vec<(usize, usize)>; 4] = [
            (2..7).map(|c| (c, 4)).collect(),
            (2..7).map(|r| (4, r)).collect(),
            (2..7).map(|i| (i, i)).collect(),
            (2..7).map(|i| (i, 8 - i)).collect(),
        ];
        for line in lines {
            let stones: Vec<_> = line.iter().map(|&(c, r)| (c, r, Side::First)).collect();
            let board = board_with(n, &stones);
            assert!(board.has_five_in_a_row(Side::First), "line {:?}", line);
            assert!(!board.has_five_in_a_row(Side::Second));
        }
    }

    #[test]
    fn test_four_blocked_both_ends_is_not_a_win() {
        let mut stones: Vec<_> = (1..5).map(|c| (c, 0, Side::First)).collect();
        stones.push((0, 0, Side::Second));
        stones.push((5, 0, Side::Second));
        let board = board_with(7, &stones);
        assert!(!board.has_five_in_a_row(Side::First));
        assert_eq!(board.longest_run(Side::First), 4);
    }

    #[test]
    fn test_broken_line_is_not_a_win() {
        let stones: Vec<_> = [0, 1, 2, 4, 5]
            .iter()
            .map(|&r| (3, r, Side::Second))
            .collect();
        let board = board_with(7, &stones);
        assert!(!board.has_five_in_a_row(Side::Second));
    }

    #[test]
    fn test_overline_wins() {
        let stones: Vec<_> = (0..7).map(|r| (0, r, Side::Second)).collect();
        let board = board_with(7, &stones);
        assert!(board.has_five_in_a_row(Side::Second));
        assert_eq!(board.longest_run(Side::Second), 7);
    }

    #[test]
    fn test_five_touching_edges() {
        let stones: Vec<_> = (0..5).map(|i| (i, 4 - i, Side::First)).collect();
        let board = board_with(5, &stones);
        assert!(board.has_five_in_a_row(Side::First));
    }

    #[test]
    fn test_longest_run_empty() {
        assert_eq!(Board::new(5).longest_run(Side::First), 0);
    }

    #[test]
    fn test_scaled_swaps_sides() {
        let board = board_with(3, &[(0, 0, Side::First), (2, 1, Side::Second)]);
        let flipped = board.scaled(Side::Second);
        assert_eq!(flipped[Move::new(0, 0)], Cell::Second);
        assert_eq!(flipped[Move::new(2, 1)], Cell::First);
        assert_eq!(flipped[Move::new(1, 1)], Cell::Empty);
        assert_eq!(board.scaled(Side::First), board);
    }

    #[test]
    fn test_from_values() {
        let board = Board::from_values(2, &[1, 0, -1, 0]).unwrap();
        assert_eq!(board[Move::new(0, 0)], Cell::First);
        assert_eq!(board[Move::new(1, 0)], Cell::Second);
        assert_eq!(board.values(), vec![1, 0, -1, 0]);

        assert!(matches!(
            Board::from_values(2, &[1, 0, 0]),
            Err(GomokuError::InvalidBoardLength { expected: 4, got: 3 })
        ));
        assert!(matches!(
            Board::from_values(2, &[1, 0, 0, 7]),
            Err(GomokuError::InvalidCellValue(7))
        ));
        assert!(matches!(
            Board::from_values(0, &[]),
            Err(GomokuError::InvalidBoardSize(0))
        ));
    }

    #[test]
    fn test_get() {
        let board = board_with(3, &[(1, 2, Side::First)]);
        assert_eq!(board.get(Move::new(1, 2)), Some(Cell::First));
        assert_eq!(board.get(Move::new(3, 0)), None);
    }

    #[test]
    fn test_display() {
        let board = board_with(3, &[(0, 1, Side::First), (2, 0, Side::Second)]);
        let expected = "   0 1 2 \n\
                        \x20 -------\n\
                        \x200|. O . |\n\
                        \x201|. . . |\n\
                        \x202|X . . |\n\
                        \x20 -------\n";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_board_serialization() {
        let board = board_with(3, &[(0, 1, Side::First), (2, 0, Side::Second)]);
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);

        let bad = r#"{"size":3,"cells":[0,0,0]}"#;
        assert!(serde_json::from_str::<Board>(bad).is_err());
    }
}
