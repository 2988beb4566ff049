// SPDX-License-Identifier: MIT OR Apache-2.0

//! Goban CLI - play Go in the terminal
//!
//! Reads one command per line, forwards it to the rules engine and prints
//! the resulting board. A one-second interval drives the players' clocks.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use goban_cli::{parse_command, Session, Step};
use goban_core::{Board, Color, Game, GameConfig};
use std::path::PathBuf;
use tokio::io::AsyncBufReadExt;
use tokio::signal;
use tokio::time::{interval_at, Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "goban", about = "Play Go in the terminal", version)]
struct Args {
    /// Board size (overrides the config file)
    #[arg(short, long)]
    size: Option<usize>,

    /// Seconds on each player's clock (overrides the config file)
    #[arg(short, long)]
    time: Option<i64>,

    /// Who moves first (overrides the config file)
    #[arg(long, value_enum)]
    first: Option<FirstPlayer>,

    /// JSON game configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON starting position: an array of rows of 0 (empty), 1 (white), 2 (black)
    #[arg(short, long)]
    board: Option<PathBuf>,

    /// Print snapshots as JSON instead of a text board
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FirstPlayer {
    White,
    Black,
}

impl From<FirstPlayer> for Color {
    fn from(first: FirstPlayer) -> Self {
        match first {
            FirstPlayer::White => Color::White,
            FirstPlayer::Black => Color::Black,
        }
    }
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => GameConfig::default(),
    };

    if let Some(size) = args.size {
        config.board_size = size;
    }
    if let Some(time) = args.time {
        config.time_budget_secs = time;
    }
    if let Some(first) = args.first {
        config.first_player = first.into();
    }

    Ok(config)
}

fn create_game(args: &Args) -> Result<Game> {
    let config = load_config(args)?;

    let game = match &args.board {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read board {}", path.display()))?;
            let board: Board = serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse board {}", path.display()))?;
            Game::from_board(board, config)?
        }
        None => Game::new(config)?,
    };

    Ok(game)
}

/// Main entry point
#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let game = create_game(&args)?;
    tracing::info!(
        size = game.board().size(),
        time = game.config().time_budget_secs,
        "Starting game"
    );

    let mut session = Session::new(game, args.json);
    print!("{}", session.render()?);
    println!("Type 'help' for commands.");

    run_game_loop(&mut session).await
}

/// Run the main game loop
async fn run_game_loop(session: &mut Session) -> Result<()> {
    let period = Duration::from_secs(1);
    let mut clock = interval_at(Instant::now() + period, period);
    let mut stdin_lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                println!("\nReceived Ctrl+C, shutting down...");
                break;
            }

            _ = clock.tick() => {
                if let Some(text) = session.tick() {
                    print!("{text}");
                }
            }

            result = stdin_lines.next_line() => {
                let line = match result {
                    Ok(Some(line)) => line,
                    Ok(None) => break, // EOF
                    Err(e) => {
                        eprintln!("Error reading input: {e}");
                        continue;
                    }
                };

                let command = match parse_command(&line) {
                    Ok(command) => command,
                    Err(e) => {
                        eprintln!("{e}");
                        continue;
                    }
                };

                match session.handle(command)? {
                    Step::Continue(text) => print!("{text}"),
                    Step::Quit => break,
                }
            }
        }
    }

    Ok(())
}
