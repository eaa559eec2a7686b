//! # rust-gomoku
//!
//! A Gomoku (five-in-a-row) game environment for RL/MCTS self-play.
//!
//! ## Design Principles
//!
//! 1. **Pure Environment**: Every rules query takes a board and a side and
//!    returns new values. The match state lives with the caller.
//!
//! 2. **Canonical Views**: Agents only see the board from their own side,
//!    with their stones as `+1`.
//!
//! 3. **Loud Contract Violations**: Illegal actions and malformed inputs
//!    surface as errors immediately and are never silently corrected.
//!
//! ## Architecture
//!
//! - **Linearization**: The cell `(column, row)` on an N×N board is action
//!   `column * N + row`, used for moves, validity vectors, human input and
//!   pointer mapping alike.
//!
//! - **Augmentation**: Each training position expands to its eight
//!   dihedral images, with the policy vector transformed alongside.
//!
//! ## Modules
//!
//! - `core`: Sides, cells, moves, the board, RNG, configuration
//! - `rules`: `GameEnvironment` trait, results, board symmetries
//! - `games`: The Gomoku environment
//! - `agents`: Random, greedy, human and scripted players
//! - `arena`: Match orchestration and tallies
//! - `error`: Crate error type

pub mod agents;
pub mod arena;
pub mod core;
pub mod error;
pub mod games;
pub mod rules;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{Board, Cell, GameConfig, GameRng, Move, Side, WIN_LENGTH};

pub use crate::rules::{GameEnvironment, GameResult, StateKey, Symmetry};

pub use crate::games::GomokuGame;

pub use crate::agents::{
    Agent, FnAgent, GreedyAgent, HumanAgent, PointerGeometry, RandomAgent, RunLengthScorer,
    Scorer,
};

pub use crate::arena::{Arena, ArenaConfig, ArenaTally};

pub use crate::error::GomokuError;
