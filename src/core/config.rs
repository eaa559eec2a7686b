//! Game configuration.
//!
//! The only tunable rule parameter is the board size. The win condition
//! is fixed at five in a row.

use serde::{Deserialize, Serialize};

use crate::error::GomokuError;

/// Default board side length.
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length N of the N×N board. Fixed for a whole game.
    pub board_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

impl GameConfig {
    /// Create a configuration for an N×N board.
    pub fn new(board_size: usize) -> Self {
        Self { board_size }
    }

    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Reject configurations that cannot describe a board.
    pub fn validate(&self) -> Result<(), GomokuError> {
        if self.board_size == 0 {
            return Err(GomokuError::InvalidBoardSize(self.board_size));
        }
        Ok(())
    }

    /// Number of actions (one per cell).
    #[must_use]
    pub fn action_size(&self) -> usize {
        self.board_size * self.board_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 15);
        assert_eq!(config.action_size(), 225);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::default().with_board_size(9);
        assert_eq!(config, GameConfig::new(9));
        assert_eq!(config.action_size(), 81);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            GameConfig::new(0).validate(),
            Err(GomokuError::InvalidBoardSize(0))
        ));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new(11);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
