//! Player sides and cell states.
//!
//! ## Side
//!
//! Gomoku is strictly two-player. A side doubles as the board marker and
//! as the multiplicative sign used for canonicalization: `First` is `+1`,
//! `Second` is `-1`, and `-side` is the opponent.
//!
//! ## Cell
//!
//! Tri-state cell value. Serialized as the historical `0 / +1 / -1`
//! encoding so snapshots stay interchangeable with numeric tooling.

use serde::{Deserialize, Serialize};
use std::ops::Neg;

use crate::error::GomokuError;

/// One of the two players.
///
/// ```
/// use rust_gomoku::core::Side;
///
/// assert_eq!(Side::First.sign(), 1);
/// assert_eq!(-Side::First, Side::Second);
/// assert_eq!(Side::try_from(-1).unwrap(), Side::Second);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Side {
    /// Plays `+1` stones and moves first.
    First,
    /// Plays `-1` stones.
    Second,
}

impl Side {
    /// Both sides, first mover first.
    pub const ALL: [Side; 2] = [Side::First, Side::Second];

    /// The numeric sign of this side (`+1` or `-1`).
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Side::First => 1,
            Side::Second => -1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

impl Neg for Side {
    type Output = Side;

    fn neg(self) -> Self::Output {
        self.opponent()
    }
}

impl From<Side> for i8 {
    fn from(side: Side) -> Self {
        side.sign()
    }
}

impl TryFrom<i8> for Side {
    type Error = GomokuError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Side::First),
            -1 => Ok(Side::Second),
            other => Err(GomokuError::InvalidSide(other)),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+}", self.sign())
    }
}

/// State of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Cell {
    /// Unoccupied.
    #[default]
    Empty,
    /// Holds a `+1` stone.
    First,
    /// Holds a `-1` stone.
    Second,
}

impl Cell {
    /// Numeric encoding: `0`, `+1` or `-1`.
    #[must_use]
    pub const fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::First => 1,
            Cell::Second => -1,
        }
    }

    /// The side owning this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::First => Some(Side::First),
            Cell::Second => Some(Side::Second),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Multiply the cell by a side's sign.
    ///
    /// `Second` swaps the two stone colors; `Empty` is fixed.
    #[must_use]
    pub const fn scaled(self, side: Side) -> Self {
        match (self, side) {
            (Cell::First, Side::Second) => Cell::Second,
            (Cell::Second, Side::Second) => Cell::First,
            (cell, _) => cell,
        }
    }

    /// Display glyph: `X` for `-1`, `.` for empty, `O` for `+1`.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Cell::Second => 'X',
            Cell::Empty => '.',
            Cell::First => 'O',
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::First => Cell::First,
            Side::Second => Cell::Second,
        }
    }
}

impl From<Cell> for i8 {
    fn from(cell: Cell) -> Self {
        cell.value()
    }
}

impl TryFrom<i8> for Cell {
    type Error = GomokuError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::First),
            -1 => Ok(Cell::Second),
            other => Err(GomokuError::InvalidCellValue(other)),
        }
    }
}
