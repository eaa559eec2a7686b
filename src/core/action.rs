//! Move representation and action linearization.
//!
//! A move addresses a cell by `(column, row)`. Agents and training code
//! work with a single action index instead, derived by the fixed
//! linearization `index = column * N + row`. Every consumer (validity
//! vectors, human input, pointer mapping) uses this one convention.

use serde::{Deserialize, Serialize};

use crate::error::GomokuError;

/// A board coordinate.
///
/// ## Example
///
/// ```
/// use rust_gomoku::core::Move;
///
/// let mv = Move::new(2, 3);
/// let action = mv.to_action(15);
/// assert_eq!(action, 2 * 15 + 3);
/// assert_eq!(Move::from_action(action, 15), mv);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// First board index.
    pub column: usize,
    /// Second board index.
    pub row: usize,
}

impl Move {
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Linearize into an action index for a board of side `size`.
    #[must_use]
    pub const fn to_action(self, size: usize) -> usize {
        self.column * size + self.row
    }

    /// Recover the coordinate an action index was built from.
    #[must_use]
    pub const fn from_action(action: usize, size: usize) -> Self {
        Self {
            column: action / size,
            row: action % size,
        }
    }

    /// Decode an action, rejecting indices outside `[0, size²)`.
    pub fn try_from_action(action: usize, size: usize) -> Result<Self, GomokuError> {
        let action_size = size * size;
        if action >= action_size {
            return Err(GomokuError::ActionOutOfRange {
                action,
                action_size,
            });
        }
        Ok(Self::from_action(action, size))
    }

    /// Check that both coordinates lie on a board of side `size`.
    #[must_use]
    pub const fn is_on_board(self, size: usize) -> bool {
        self.column < size && self.row < size
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linearization() {
        assert_eq!(Move::new(0, 0).to_action(5), 0);
        assert_eq!(Move::new(0, 4).to_action(5), 4);
        assert_eq!(Move::new(1, 0).to_action(5), 5);
        assert_eq!(Move::new(4, 4).to_action(5), 24);
    }

    #[test]
    fn test_round_trip_all_actions() {
        for size in 1..=19 {
            for action in 0..size * size {
                let mv = Move::from_action(action, size);
                assert!(mv.is_on_board(size));
                assert_eq!(mv.to_action(size), action);
            }
        }
    }

    #[test]
    fn test_try_from_action_out_of_range() {
        assert_eq!(Move::try_from_action(24, 5).unwrap(), Move::new(4, 4));
        let err = Move::try_from_action(25, 5).unwrap_err();
        assert!(matches!(
            err,
            GomokuError::ActionOutOfRange { action: 25, action_size: 25 }
        ));
    }

    #[test]
    fn test_is_on_board() {
        assert!(Move::new(4, 0).is_on_board(5));
        assert!(!Move::new(5, 0).is_on_board(5));
        assert!(!Move::new(0, 5).is_on_board(5));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Move::new(3, 7)), "(3, 7)");
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::new(2, 9);
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
