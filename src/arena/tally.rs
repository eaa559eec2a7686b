use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rules::GameResult;

/// Win/loss/draw counts for a batch, keyed by agent rather than seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArenaTally {
    /// Games won by the agent passed as `player1`.
    pub one_won: usize,
    /// Games won by the agent passed as `player2`.
    pub two_won: usize,
    pub draws: usize,
}

impl ArenaTally {
    #[must_use]
    pub fn new(one_won: usize, two_won: usize, draws: usize) -> Self {
        Self {
            one_won,
            two_won,
            draws,
        }
    }

    /// Count a result given from player one's perspective.
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.one_won += 1,
            GameResult::Loss => self.two_won += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    /// Games counted so far.
    #[must_use]
    pub fn total(&self) -> usize {
        self.one_won + self.two_won + self.draws
    }
}

impl fmt::Display for ArenaTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "player1 won {}, player2 won {}, draws {}",
            self.one_won, self.two_won, self.draws
        )
    }
}
