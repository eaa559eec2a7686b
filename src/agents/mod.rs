//! Players that pick an action from a canonical board.
//!
//! Every agent sees the board from its own perspective (its stones are
//! `+1`) and answers with an action index. Agents never mutate the board
//! they are shown and are free to be stateful (RNG, input streams).
//!
//! ## Variants
//!
//! - [`RandomAgent`]: uniform rejection sampling over legal actions
//! - [`GreedyAgent`]: one-ply lookahead with an injected [`Scorer`]
//! - [`HumanAgent`]: line-oriented text input, with [`PointerGeometry`]
//!   for mapping clicks on a graphical board
//! - [`FnAgent`]: wraps a closure, for scripted play

mod greedy;
mod human;
mod random;

pub use greedy::{GreedyAgent, RunLengthScorer, Scorer};
pub use human::{HumanAgent, PointerGeometry};
pub use random::RandomAgent;

use crate::error::GomokuError;

/// Chooses moves for one seat in a match.
pub trait Agent<B> {
    /// Pick an action for the canonical board `canonical`.
    fn choose(&mut self, canonical: &B) -> Result<usize, GomokuError>;

    /// Display name used in logs and errors.
    fn name(&self) -> &str;
}

impl<B, A: Agent<B> + ?Sized> Agent<B> for Box<A> {
    fn choose(&mut self, canonical: &B) -> Result<usize, GomokuError> {
        (**self).choose(canonical)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Adapts a closure `FnMut(&B) -> usize` into an [`Agent`].
///
/// ```
/// use rust_gomoku::agents::{Agent, FnAgent};
/// use rust_gomoku::core::Board;
///
/// let mut corner = FnAgent::new("corner", |_: &Board| 0usize);
/// assert_eq!(corner.choose(&Board::new(5)).unwrap(), 0);
/// assert_eq!(corner.name(), "corner");
/// ```
pub struct FnAgent<F> {
    name: String,
    f: F,
}

impl<F> FnAgent<F> {
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<B, F> Agent<B> for FnAgent<F>
where
    F: FnMut(&B) -> usize,
{
    fn choose(&mut self, canonical: &B) -> Result<usize, GomokuError> {
        Ok((self.f)(canonical))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> std::fmt::Debug for FnAgent<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnAgent").field("name", &self.name).finish()
    }
}
