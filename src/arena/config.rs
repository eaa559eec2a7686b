//! Arena configuration.

use serde::{Deserialize, Serialize};

/// How a batch of matches is run and reported.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Draw a progress bar for each half of `play_games`.
    pub show_progress: bool,

    /// Render every position through the display while batch playing.
    /// Requires a display collaborator.
    pub verbose: bool,
}

impl ArenaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable progress bars.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Enable or disable verbose batch play.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
