//! Core engine types: sides, cells, moves, the board, RNG, configuration.
//!
//! These are the purely local building blocks. Nothing here knows about
//! turns, canonical forms or symmetry; that lives in `rules` and `games`.

pub mod action;
pub mod board;
pub mod config;
pub mod player;
pub mod rng;

pub use action::Move;
pub use board::{Board, WIN_LENGTH};
pub use config::{GameConfig, DEFAULT_BOARD_SIZE};
pub use player::{Cell, Side};
pub use rng::GameRng;
