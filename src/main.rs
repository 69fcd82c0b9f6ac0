//! Scrabble Rush - CLI
//!
//! Timed word-scoring game with TUI and line modes, plus one-shot scoring helpers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use scrabble_rush::{
    commands::{check_word, run_simple, score_word},
    config::GameConfig,
    dictionary::{WordSet, loader::load_from_file},
    game::RoundController,
    interactive::{App, Scoreboard, run_tui},
    logging,
    output::{print_check_report, print_score_report},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "scrabble_rush",
    about = "Timed word game: Scrabble letter scores plus a bonus for answering fast",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: bundled list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Rounds per game
    #[arg(short, long, global = true)]
    rounds: Option<u32>,

    /// Seconds per round
    #[arg(short, long, global = true)]
    seconds: Option<u32>,

    /// Directory for scrabble_rush.log
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-mode game without the TUI
    Simple,

    /// Show a word's letter values and its total at every bonus tier
    Score {
        /// Word to score
        word: String,
    },

    /// Check whether a word would be accepted in a round
    Check {
        /// Word to check
        word: String,

        /// Required word length
        #[arg(short, long)]
        length: usize,
    },
}

/// Load the word list given by `--dictionary`, or the bundled one
fn load_dictionary(path: Option<&Path>) -> Result<WordSet> {
    let dictionary = match path {
        Some(path) => load_from_file(path)?,
        None => WordSet::embedded(),
    };
    tracing::info!("Dictionary ready with {} words", dictionary.len());
    Ok(dictionary)
}

/// Environment first, then command-line overrides
fn build_config(cli: &Cli) -> GameConfig {
    let mut config = GameConfig::from_env();
    if let Some(rounds) = cli.rounds {
        config = config.with_max_rounds(rounds);
    }
    if let Some(seconds) = cli.seconds {
        config = config.with_round_seconds(seconds);
    }
    config
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = logging::init(cli.log_dir.as_deref())?;

    let config = build_config(&cli);
    config.validate()?;
    let dictionary = load_dictionary(cli.dictionary.as_deref())?;
    let missing = dictionary.missing_lengths(config.min_length..=config.max_length);
    if !missing.is_empty() {
        tracing::warn!(?missing, "Word list has no words for some round lengths");
    }

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(config, dictionary).await,
        Commands::Simple => {
            run_simple(config, dictionary).await?;
            Ok(())
        }
        Commands::Score { word } => {
            let report = score_word(&word).map_err(|e| anyhow::anyhow!(e))?;
            print_score_report(&report);
            Ok(())
        }
        Commands::Check { word, length } => {
            let report = check_word(&word, length, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_check_report(&report);
            Ok(())
        }
    }
}

async fn run_play_command(config: GameConfig, dictionary: WordSet) -> Result<()> {
    let scoreboard = Scoreboard::new(config.max_rounds, config.round_seconds);
    let (controller, events) = RoundController::new(config, dictionary, scoreboard)?;
    run_tui(App::new(controller), events).await
}
