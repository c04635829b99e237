//! Terminal hangman runner (default binary).
//!
//! Reads guesses line by line from stdin and prints the canvas to stdout.
//! Logs go to stderr, filtered by `RUST_LOG` (default `warn`).

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tui_hangman::core::ComponentSet;
use tui_hangman::engine::{Game, GameConfig};
use tui_hangman::term::{FrameStyle, TerminalConsole};
use tui_hangman::types::{Level, DEFAULT_PENALTY, DEFAULT_REWARD};
use tui_hangman::words::WordLists;

#[derive(Parser, Debug)]
#[command(name = "tui-hangman", version, about = "Guess the word before the gallows fill up")]
struct Args {
    /// Seed for word selection (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Play every round at this level: easy, medium, hard or unix
    #[arg(long, value_parser = parse_level)]
    level: Option<Level>,

    /// Points per revealed letter, before the level coefficient
    #[arg(long, default_value_t = DEFAULT_REWARD)]
    reward: u32,

    /// Points lost per incorrect guess, before the level coefficient
    #[arg(long, default_value_t = DEFAULT_PENALTY)]
    penalty: u32,

    /// Print the canvas without colours or attributes
    #[arg(long)]
    no_color: bool,
}

fn parse_level(s: &str) -> Result<Level, String> {
    Level::from_str(s).ok_or_else(|| format!("unknown level {s:?} (expected easy, medium, hard or unix)"))
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let components = ComponentSet::load().context("failed to parse the embedded drawings")?;
    let words = WordLists::builtin();

    let style = if args.no_color {
        FrameStyle::plain()
    } else {
        FrameStyle::default()
    };
    let config = GameConfig {
        reward: args.reward,
        penalty: args.penalty,
        seed: args.seed,
        level: args.level,
    };
    tracing::debug!(?config, "starting game");

    let console = TerminalConsole::stdio(style);
    let mut game = Game::new(console, &components, &words, config);
    game.start()
}
