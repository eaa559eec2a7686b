//! Gomoku: five-in-a-row on an N×N board.
//!
//! - Two sides alternate placing one stone on any empty cell
//! - Five or more stones in an unbroken line (orthogonal or diagonal) wins
//! - A full board with no such line is a draw
//!
//! The default board is 15×15.

mod game;

pub use game::GomokuGame;
