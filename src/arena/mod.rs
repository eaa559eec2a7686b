//! Match orchestration between two agents.
//!
//! ## Overview
//!
//! An [`Arena`] seats two agents, plays matches from a fresh board each
//! time, and tallies results. Each agent only ever sees the canonical
//! board from its own side. Across a batch, both agents move first in
//! exactly half of the games.
//!
//! ## Usage
//!
//! ```rust
//! use rust_gomoku::agents::RandomAgent;
//! use rust_gomoku::arena::Arena;
//! use rust_gomoku::games::GomokuGame;
//!
//! let game = GomokuGame::new(7);
//! let mut arena = Arena::new(
//!     game,
//!     RandomAgent::seeded(game, 1),
//!     RandomAgent::seeded(game, 2),
//! );
//! let tally = arena.play_games(4).unwrap();
//! assert_eq!(tally.total(), 4);
//! ```

mod config;
mod runner;
mod tally;

pub use config::ArenaConfig;
pub use runner::Arena;
pub use tally::ArenaTally;
