//! Game bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::core::{Board, Side, DEFAULT_BOARD_SIZE};
use crate::error::GomokuError;
use crate::games::GomokuGame;
use crate::rules::GameEnvironment;

type Rows = Vec<Vec<i8>>;

/// Python wrapper for GomokuGame.
#[pyclass(name = "GomokuGame")]
pub struct PyGomokuGame {
    game: GomokuGame,
}

impl PyGomokuGame {
    fn board(&self, rows: Rows) -> Result<Board, GomokuError> {
        let n = self.game.n();
        if rows.len() != n || rows.iter().any(|column| column.len() != n) {
            return Err(GomokuError::InvalidBoardLength {
                expected: n * n,
                got: rows.iter().map(Vec::len).sum(),
            });
        }
        Board::from_values(n, &rows.concat())
    }
}

fn rows(board: &Board) -> Rows {
    board
        .values()
        .chunks(board.size())
        .map(<[i8]>::to_vec)
        .collect()
}

#[pymethods]
impl PyGomokuGame {
    /// Create a game on an n×n board.
    #[new]
    #[pyo3(signature = (n = DEFAULT_BOARD_SIZE))]
    fn new(n: usize) -> PyResult<Self> {
        if n == 0 {
            return Err(GomokuError::InvalidBoardSize(n).into());
        }
        Ok(Self {
            game: GomokuGame::new(n),
        })
    }

    #[getter]
    fn n(&self) -> usize {
        self.game.n()
    }

    fn get_init_board(&self) -> Rows {
        rows(&self.game.init_board())
    }

    fn get_board_size(&self) -> (usize, usize) {
        self.game.board_size()
    }

    fn get_action_size(&self) -> usize {
        self.game.action_size()
    }

    /// Returns `(next_board, next_player)`.
    fn get_next_state(&self, board: Rows, player: i8, action: usize) -> PyResult<(Rows, i8)> {
        let board = self.board(board)?;
        let (next, side) = self
            .game
            .next_state(&board, Side::try_from(player)?, action)?;
        Ok((rows(&next), side.sign()))
    }

    /// Validity vector as a `uint8` numpy array of length n².
    fn get_valid_moves<'py>(
        &self,
        py: Python<'py>,
        board: Rows,
        player: i8,
    ) -> PyResult<Bound<'py, PyArray1<u8>>> {
        let board = self.board(board)?;
        let valids = self
            .game
            .valid_moves(&board, Side::try_from(player)?)
            .into_iter()
            .map(u8::from)
            .collect::<Vec<u8>>();
        Ok(PyArray1::from_vec_bound(py, valids))
    }

    /// `None` while ongoing, else `1` win, `-1` loss, `0` draw for `player`.
    fn get_game_ended(&self, board: Rows, player: i8) -> PyResult<Option<i8>> {
        let board = self.board(board)?;
        Ok(self
            .game
            .game_ended(&board, Side::try_from(player)?)
            .map(|result| result.value()))
    }

    fn get_canonical_form(&self, board: Rows, player: i8) -> PyResult<Rows> {
        let board = self.board(board)?;
        Ok(rows(&self.game.canonical_form(&board, Side::try_from(player)?)))
    }

    /// Eight `(board, pi)` pairs for training-data augmentation.
    fn get_symmetries(&self, board: Rows, pi: Vec<f32>) -> PyResult<Vec<(Rows, Vec<f32>)>> {
        let board = self.board(board)?;
        Ok(self
            .game
            .symmetries(&board, &pi)?
            .into_iter()
            .map(|(board, pi)| (rows(&board), pi))
            .collect())
    }

    /// Stable bytes key for caching search statistics.
    fn string_representation<'py>(
        &self,
        py: Python<'py>,
        board: Rows,
    ) -> PyResult<Bound<'py, PyBytes>> {
        let board = self.board(board)?;
        let key = self.game.stable_key(&board)?;
        Ok(PyBytes::new_bound(py, key.as_bytes()))
    }

    /// Text rendering of a raw board.
    fn display(&self, board: Rows) -> PyResult<String> {
        Ok(GomokuGame::display(&self.board(board)?))
    }

    fn __repr__(&self) -> String {
        format!("GomokuGame(n={})", self.game.n())
    }
}
