//! The match loop.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, info};

use crate::agents::Agent;
use crate::core::Side;
use crate::error::GomokuError;
use crate::rules::{GameEnvironment, GameResult};

use super::config::ArenaConfig;
use super::tally::ArenaTally;

type Seat<'a, B> = Box<dyn Agent<B> + 'a>;
type Renderer<'a, B> = Box<dyn Fn(&B) + 'a>;

/// Pits two agents against each other.
///
/// `player1` takes the first seat (moves first, plays `+1` stones) until
/// `play_games` swaps seats for the second half of a batch.
pub struct Arena<'a, G: GameEnvironment> {
    game: G,
    player1: Seat<'a, G::Board>,
    player2: Seat<'a, G::Board>,
    display: Option<Renderer<'a, G::Board>>,
    config: ArenaConfig,
}

impl<'a, G: GameEnvironment> Arena<'a, G> {
    /// Create an arena with no display and default configuration.
    pub fn new(
        game: G,
        player1: impl Agent<G::Board> + 'a,
        player2: impl Agent<G::Board> + 'a,
    ) -> Self {
        Self {
            game,
            player1: Box::new(player1),
            player2: Box::new(player2),
            display: None,
            config: ArenaConfig::default(),
        }
    }

    /// Attach a display, called with the raw board during verbose play.
    #[must_use]
    pub fn with_display(mut self, display: impl Fn(&G::Board) + 'a) -> Self {
        self.display = Some(Box::new(display));
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: ArenaConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn game(&self) -> &G {
        &self.game
    }

    #[must_use]
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Names of the agents in the first and second seat.
    #[must_use]
    pub fn seats(&self) -> (&str, &str) {
        (self.player1.name(), self.player2.name())
    }

    /// Play one match from an empty board.
    ///
    /// Returns the result from the first seat's perspective. An agent
    /// choosing an action that is not legal aborts the match with
    /// [`GomokuError::IllegalAction`].
    pub fn play_game(&mut self, verbose: bool) -> Result<GameResult, GomokuError> {
        if verbose && self.display.is_none() {
            return Err(GomokuError::MissingDisplay);
        }

        let mut board = self.game.init_board();
        let mut side = Side::First;
        let mut turn = 0usize;

        let verdict = loop {
            if let Some(verdict) = self.game.game_ended(&board, side) {
                break verdict;
            }
            turn += 1;
            if verbose {
                info!(turn, %side, "turn");
                self.show(&board);
            }

            let canonical = self.game.canonical_form(&board, side);
            let agent = match side {
                Side::First => &mut self.player1,
                Side::Second => &mut self.player2,
            };
            let action = agent.choose(&canonical)?;
            if !self.game.is_valid(&canonical, Side::First, action) {
                error!(agent = agent.name(), action, turn, "action is not valid");
                return Err(GomokuError::IllegalAction {
                    agent: agent.name().to_string(),
                    action,
                });
            }
            debug!(turn, %side, agent = agent.name(), action, "move");

            (board, side) = self.game.next_state(&board, side, action)?;
        };

        let result = verdict.for_first(side);
        if verbose {
            info!(turn, result = result.value(), "game over");
            self.show(&board);
        }
        debug!(turns = turn, ?result, "match finished");
        Ok(result)
    }

    /// Play `count / 2` matches with `player1` first, then `count / 2`
    /// with `player2` first.
    ///
    /// The tally always counts wins per agent, not per seat. Seats are
    /// restored before returning, including on error.
    pub fn play_games(&mut self, count: usize) -> Result<ArenaTally, GomokuError> {
        let half = count / 2;
        let verbose = self.config.verbose;
        let mut tally = ArenaTally::default();

        for result in self.play_half(half, "player1 go first", verbose)? {
            tally.record(result);
        }

        self.swap_seats();
        let second = self.play_half(half, "player2 go first", verbose);
        self.swap_seats();
        for result in second? {
            tally.record(result.flipped());
        }

        info!(
            games = tally.total(),
            one_won = tally.one_won,
            two_won = tally.two_won,
            draws = tally.draws,
            "arena finished"
        );
        Ok(tally)
    }

    fn play_half(
        &mut self,
        count: usize,
        label: &'static str,
        verbose: bool,
    ) -> Result<Vec<GameResult>, GomokuError> {
        let progress = self.progress(count, label)?;
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            results.push(self.play_game(verbose)?);
            progress.inc(1);
        }
        progress.finish_and_clear();
        Ok(results)
    }

    fn progress(&self, count: usize, label: &'static str) -> Result<ProgressBar, GomokuError> {
        if !self.config.show_progress {
            return Ok(ProgressBar::hidden());
        }
        let pb = ProgressBar::new(count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games")?
                .progress_chars("=>-"),
        );
        pb.set_message(label);
        Ok(pb)
    }

    fn swap_seats(&mut self) {
        std::mem::swap(&mut self.player1, &mut self.player2);
    }

    fn show(&self, board: &G::Board) {
        if let Some(display) = &self.display {
            display(board);
        }
    }
}
