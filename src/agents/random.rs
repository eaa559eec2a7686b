//! Uniform random play by rejection sampling over the validity vector.

use crate::core::{GameRng, Side};
use crate::error::GomokuError;
use crate::rules::GameEnvironment;

use super::Agent;

/// An agent that picks uniformly among legal actions.
///
/// Draws indices from the whole action space and redraws until one is
/// legal, so each legal action is equally likely.
#[derive(Clone, Debug)]
pub struct RandomAgent<G> {
    game: G,
    rng: GameRng,
}

impl<G: GameEnvironment> RandomAgent<G> {
    pub fn new(game: G, rng: GameRng) -> Self {
        Self { game, rng }
    }

    /// Seeded convenience constructor.
    pub fn seeded(game: G, seed: u64) -> Self {
        Self::new(game, GameRng::new(seed))
    }
}

impl<G: GameEnvironment> Agent<G::Board> for RandomAgent<G> {
    fn choose(&mut self, canonical: &G::Board) -> Result<usize, GomokuError> {
        let valids = self.game.valid_moves(canonical, Side::First);
        if !valids.contains(&true) {
            return Err(GomokuError::NoLegalMoves);
        }
        loop {
            let action = self.rng.gen_range_usize(0..valids.len());
            if valids[action] {
                return Ok(action);
            }
        }
    }

    fn name(&self) -> &str {
        "random"
    }
}
