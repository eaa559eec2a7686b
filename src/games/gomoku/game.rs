//! Gomoku environment implementation.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Board, Cell, GameConfig, Move, Side};
use crate::error::GomokuError;
use crate::rules::{GameEnvironment, GameResult, StateKey, Symmetry, SymmetryPair};

/// Five-in-a-row on an N×N board.
///
/// Holds only the board size, so it is `Copy` and can be handed to every
/// agent and driver that needs to query the rules. Serialized as its
/// [`GameConfig`], so deserialization goes through the same validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GameConfig", into = "GameConfig")]
pub struct GomokuGame {
    n: usize,
}

impl GomokuGame {
    /// Create a game on an N×N board.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "Board size must be positive");
        Self { n }
    }

    /// Create a game from a validated configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self, GomokuError> {
        config.validate()?;
        Ok(Self {
            n: config.board_size,
        })
    }

    /// Side length N.
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Render a raw (non-canonical) board as text.
    #[must_use]
    pub fn display(board: &Board) -> String {
        board.to_string()
    }

    fn check_shape(&self, board: &Board) -> Result<(), GomokuError> {
        if board.size() != self.n {
            return Err(GomokuError::InvalidBoardLength {
                expected: self.n * self.n,
                got: board.cells().len(),
            });
        }
        Ok(())
    }

    fn assert_shape(&self, board: &Board) {
        assert_eq!(
            board.size(),
            self.n,
            "Board is {0}x{0}, expected {1}x{1}",
            board.size(),
            self.n
        );
    }
}

impl From<GomokuGame> for GameConfig {
    fn from(game: GomokuGame) -> Self {
        GameConfig::new(game.n)
    }
}

impl TryFrom<GameConfig> for GomokuGame {
    type Error = GomokuError;

    fn try_from(config: GameConfig) -> Result<Self, Self::Error> {
        GomokuGame::from_config(&config)
    }
}

impl Default for GomokuGame {
    fn default() -> Self {
        Self {
            n: GameConfig::default().board_size,
        }
    }
}

impl GameEnvironment for GomokuGame {
    type Board = Board;

    fn init_board(&self) -> Board {
        Board::new(self.n)
    }

    fn board_size(&self) -> (usize, usize) {
        (self.n, self.n)
    }

    fn action_size(&self) -> usize {
        self.n * self.n
    }

    fn next_state(
        &self,
        board: &Board,
        side: Side,
        action: usize,
    ) -> Result<(Board, Side), GomokuError> {
        self.check_shape(board)?;
        let mv = Move::try_from_action(action, self.n)?;
        if board[mv] != Cell::Empty {
            return Err(GomokuError::CellOccupied {
                column: mv.column,
                row: mv.row,
            });
        }

        let mut next = board.clone();
        next.place(mv, side);
        trace!(%mv, %side, action, "placed stone");
        Ok((next, -side))
    }

    fn valid_moves(&self, board: &Board, side: Side) -> Vec<bool> {
        self.assert_shape(board);
        let mut valids = vec![false; self.action_size()];
        for mv in board.legal_moves(side) {
            valids[mv.to_action(self.n)] = true;
        }
        valids
    }

    fn game_ended(&self, board: &Board, side: Side) -> Option<GameResult> {
        self.assert_shape(board);
        // A double five resolves in favour of the querying side.
        if board.has_five_in_a_row(side) {
            Some(GameResult::Win)
        } else if board.has_five_in_a_row(-side) {
            Some(GameResult::Loss)
        } else if !board.has_legal_moves() {
            Some(GameResult::Draw)
        } else {
            None
        }
    }

    fn canonical_form(&self, board: &Board, side: Side) -> Board {
        self.assert_shape(board);
        board.scaled(side)
    }

    fn symmetries(
        &self,
        board: &Board,
        policy: &[f32],
    ) -> Result<Vec<SymmetryPair<Board>>, GomokuError> {
        let n = self.n;
        if policy.len() != n * n {
            return Err(GomokuError::PolicyLength {
                expected: n * n,
                got: policy.len(),
            });
        }
        self.check_shape(board)?;

        Symmetry::all()
            .iter()
            .map(|symmetry| {
                let cells = symmetry.transform(board.cells(), n);
                Ok((Board::from_cells(n, cells)?, symmetry.transform(policy, n)))
            })
            .collect()
    }

    fn stable_key(&self, board: &Board) -> Result<StateKey, GomokuError> {
        self.check_shape(board)?;
        Ok(StateKey(bincode::serialize(board)?))
    }
}
