//! Gomoku arena CLI.
//!
//! Pits two agents against each other and prints the tally.

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rust_gomoku::agents::{Agent, GreedyAgent, HumanAgent, RandomAgent, RunLengthScorer};
use rust_gomoku::arena::{Arena, ArenaConfig};
use rust_gomoku::core::{Board, GameConfig, GameRng, DEFAULT_BOARD_SIZE};
use rust_gomoku::games::GomokuGame;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PlayerKind {
    Random,
    Greedy,
    Human,
}

#[derive(Parser, Debug)]
#[command(name = "gomoku", about = "Play Gomoku matches between two agents")]
struct Cli {
    /// Side length of the square board
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    board_size: usize,

    /// Number of games; each agent moves first in half of them
    #[arg(long, default_value_t = 2)]
    games: usize,

    #[arg(long, value_enum, default_value_t = PlayerKind::Greedy)]
    player1: PlayerKind,

    #[arg(long, value_enum, default_value_t = PlayerKind::Random)]
    player2: PlayerKind,

    /// Seed for the random agents
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Print every position
    #[arg(long)]
    verbose: bool,

    /// Show progress bars
    #[arg(long)]
    progress: bool,
}

fn build_agent<'a>(
    kind: PlayerKind,
    game: GomokuGame,
    rng: &mut GameRng,
) -> Box<dyn Agent<Board> + 'a> {
    match kind {
        PlayerKind::Random => Box::new(RandomAgent::new(game, rng.fork())),
        PlayerKind::Greedy => Box::new(GreedyAgent::new(game, RunLengthScorer)),
        PlayerKind::Human => Box::new(HumanAgent::new(game, io::stdin().lock(), io::stdout())),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = GameConfig::new(cli.board_size);
    let game = GomokuGame::from_config(&config).context("invalid board size")?;

    let mut rng = GameRng::new(cli.seed);
    let player1 = build_agent(cli.player1, game, &mut rng);
    let player2 = build_agent(cli.player2, game, &mut rng);

    // Humans need to see the board to play
    let show_board = cli.verbose || cli.player1 == PlayerKind::Human || cli.player2 == PlayerKind::Human;
    info!(
        board_size = cli.board_size,
        games = cli.games,
        player1 = ?cli.player1,
        player2 = ?cli.player2,
        "starting arena"
    );

    let mut arena = Arena::new(game, player1, player2)
        .with_display(|board: &Board| print!("{}", GomokuGame::display(board)))
        .with_config(
            ArenaConfig::new()
                .with_progress(cli.progress)
                .with_verbose(show_board),
        );

    let tally = arena.play_games(cli.games).context("match aborted")?;
    println!("{}", tally);
    Ok(())
}
