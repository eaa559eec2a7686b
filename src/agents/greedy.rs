//! One-ply greedy agent and the scoring capability it depends on.

use crate::core::{Board, Side, WIN_LENGTH};
use crate::error::GomokuError;
use crate::rules::GameEnvironment;

use super::Agent;

/// Evaluates a board from one side's perspective. Higher is better.
pub trait Scorer<B> {
    fn score(&self, board: &B, side: Side) -> f64;
}

impl<B, F> Scorer<B> for F
where
    F: Fn(&B, Side) -> f64,
{
    fn score(&self, board: &B, side: Side) -> f64 {
        self(board, side)
    }
}

/// Scores a board by the side's longest unbroken line.
///
/// A completed five (or overline) is worth `f64::INFINITY`, so an
/// immediate win always outranks extending a shorter run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunLengthScorer;

impl Scorer<Board> for RunLengthScorer {
    fn score(&self, board: &Board, side: Side) -> f64 {
        let run = board.longest_run(side);
        if run >= WIN_LENGTH {
            f64::INFINITY
        } else {
            run as f64
        }
    }
}

/// Plays the legal action whose resulting board scores highest.
///
/// Ties go to the lowest action index, so play is fully deterministic
/// for a deterministic scorer.
#[derive(Clone, Debug)]
pub struct GreedyAgent<G, S> {
    game: G,
    scorer: S,
}

impl<G: GameEnvironment, S: Scorer<G::Board>> GreedyAgent<G, S> {
    pub fn new(game: G, scorer: S) -> Self {
        Self { game, scorer }
    }
}

impl<G: GameEnvironment, S: Scorer<G::Board>> Agent<G::Board> for GreedyAgent<G, S> {
    fn choose(&mut self, canonical: &G::Board) -> Result<usize, GomokuError> {
        let mut best: Option<(f64, usize)> = None;
        for action in self.game.legal_actions(canonical, Side::First) {
            let (next, _) = self.game.next_state(canonical, Side::First, action)?;
            let score = self.scorer.score(&next, Side::First);
            // Legal actions ascend, so a strict improvement keeps the lowest index on ties.
            if best.map_or(true, |(top, _)| score.total_cmp(&top).is_gt()) {
                best = Some((score, action));
            }
        }
        best.map(|(_, action)| action)
            .ok_or(GomokuError::NoLegalMoves)
    }

    fn name(&self) -> &str {
        "greedy"
    }
}
