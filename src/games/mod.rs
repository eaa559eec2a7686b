//! Concrete game environments.

pub mod gomoku;

pub use gomoku::GomokuGame;
