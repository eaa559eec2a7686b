//! Game environment trait.
//!
//! Games implement `GameEnvironment` to expose a side-effect-free,
//! value-in/value-out contract:
//! - What actions are legal
//! - How an action produces the next board
//! - Win/loss/draw detection from a player's perspective
//! - Canonical forms and symmetry-augmented training pairs
//!
//! The environment holds no state between calls. The match state machine
//! lives entirely in the `(board, side)` pair threaded by the caller.

use serde::{Deserialize, Serialize};

use crate::core::Side;
use crate::error::GomokuError;

/// Verdict for a finished game, relative to the side that asked.
///
/// An ongoing game is `None` in `Option<GameResult>`, so "no verdict yet"
/// can never be confused with a draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// The querying side has won.
    Win,
    /// The opponent has won.
    Loss,
    /// Board exhausted with no winner.
    Draw,
}

impl GameResult {
    /// Signed value: `+1` win, `-1` loss, `0` draw.
    #[must_use]
    pub const fn value(self) -> i8 {
        match self {
            GameResult::Win => 1,
            GameResult::Loss => -1,
            GameResult::Draw => 0,
        }
    }

    /// The same outcome seen from the other side.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }

    /// Re-express a result computed for `side` from `Side::First`'s view.
    #[must_use]
    pub const fn for_first(self, side: Side) -> Self {
        match side {
            Side::First => self,
            Side::Second => self.flipped(),
        }
    }
}

/// Hashable, comparable serialization of a board.
///
/// Identical boards produce identical keys; suitable for transposition
/// tables in search code.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateKey(pub Vec<u8>);

impl StateKey {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// A training example produced by symmetry augmentation.
pub type SymmetryPair<B> = (B, Vec<f32>);

/// Uniform two-player environment contract.
///
/// ## Implementation Notes
///
/// - Every method takes the board by reference and returns new values.
/// - `next_state` must refuse, not repair, an action it cannot apply.
/// - `game_ended` returns `None` while the game continues.
/// - `symmetries` must keep each policy entry aligned with its cell.
pub trait GameEnvironment {
    /// Board snapshot type.
    type Board: Clone + PartialEq + std::fmt::Debug;

    /// A fresh, empty board.
    fn init_board(&self) -> Self::Board;

    /// Board dimensions `(N, N)`.
    fn board_size(&self) -> (usize, usize);

    /// Number of distinct action indices.
    fn action_size(&self) -> usize;

    /// Apply `action` for `side` on a copy of `board`.
    ///
    /// Returns the new board and the side to move next.
    fn next_state(
        &self,
        board: &Self::Board,
        side: Side,
        action: usize,
    ) -> Result<(Self::Board, Side), GomokuError>;

    /// Indicator vector of length `action_size()`: `true` iff legal.
    fn valid_moves(&self, board: &Self::Board, side: Side) -> Vec<bool>;

    /// Terminal verdict from `side`'s perspective, `None` if ongoing.
    fn game_ended(&self, board: &Self::Board, side: Side) -> Option<GameResult>;

    /// The board as seen by `side`: its own stones are always `+1`.
    fn canonical_form(&self, board: &Self::Board, side: Side) -> Self::Board;

    /// The eight dihedral transforms of a board and its policy vector.
    fn symmetries(
        &self,
        board: &Self::Board,
        policy: &[f32],
    ) -> Result<Vec<SymmetryPair<Self::Board>>, GomokuError>;

    /// Stable key for caching.
    fn stable_key(&self, board: &Self::Board) -> Result<StateKey, GomokuError>;

    // === Convenience Methods ===

    /// Legal action indices in ascending order.
    fn legal_actions(&self, board: &Self::Board, side: Side) -> Vec<usize> {
        self.valid_moves(board, side)
            .iter()
            .enumerate()
            .filter_map(|(action, &valid)| valid.then_some(action))
            .collect()
    }

    /// Check a single action against the validity vector.
    fn is_valid(&self, board: &Self::Board, side: Side, action: usize) -> bool {
        self.valid_moves(board, side)
            .get(action)
            .copied()
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_values() {
        assert_eq!(GameResult::Win.value(), 1);
        assert_eq!(GameResult::Loss.value(), -1);
        assert_eq!(GameResult::Draw.value(), 0);
    }

    #[test]
    fn test_game_result_flipped() {
        assert_eq!(GameResult::Win.flipped(), GameResult::Loss);
        assert_eq!(GameResult::Loss.flipped(), GameResult::Win);
        assert_eq!(GameResult::Draw.flipped(), GameResult::Draw);
    }

    #[test]
    fn test_game_result_for_first() {
        assert_eq!(GameResult::Win.for_first(Side::First), GameResult::Win);
        assert_eq!(GameResult::Win.for_first(Side::Second), GameResult::Loss);
        assert_eq!(GameResult::Draw.for_first(Side::Second), GameResult::Draw);
    }

    #[test]
    fn test_state_key_ordering() {
        let a = StateKey(vec![0, 1]);
        let b = StateKey(vec![0, 2]);
        assert!(a < b);
        assert_eq!(a.as_bytes(), &[0, 1]);
    }
}
