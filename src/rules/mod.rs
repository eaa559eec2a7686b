//! Game environment contract and board symmetries.
//!
//! Games implement `GameEnvironment` to define:
//! - Legal actions for a board
//! - How actions produce new boards
//! - Win/loss/draw verdicts
//! - Canonical forms and training-data augmentation
//!
//! Agents and the arena call into `GameEnvironment` but never interpret
//! game-specific concepts directly.

pub mod engine;
pub mod symmetry;

pub use engine::{GameEnvironment, GameResult, StateKey, SymmetryPair};
pub use symmetry::Symmetry;
