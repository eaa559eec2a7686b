//! Python bindings for the Gomoku environment.
//!
//! Exposes the environment contract to a Python training loop. Boards
//! cross the boundary as nested lists indexed `board[column][row]` with
//! `0 / +1 / -1` cells; players are `+1` or `-1`.
//!
//! # Quick Start
//!
//! ```python
//! import rust_gomoku
//!
//! game = rust_gomoku.GomokuGame(15)
//! board = game.get_init_board()
//! board, player = game.get_next_state(board, 1, 112)
//! assert game.get_game_ended(board, player) is None
//! ```

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::error::GomokuError;

mod py_game;

pub use py_game::PyGomokuGame;

impl From<GomokuError> for PyErr {
    fn from(err: GomokuError) -> Self {
        match err {
            GomokuError::Io(_) | GomokuError::InputClosed => PyIOError::new_err(err.to_string()),
            other => PyValueError::new_err(other.to_string()),
        }
    }
}

/// rust_gomoku: five-in-a-row environment for AlphaZero-style training.
#[pymodule]
fn rust_gomoku(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGomokuGame>()?;
    m.add("WIN_LENGTH", crate::core::WIN_LENGTH)?;
    Ok(())
}
