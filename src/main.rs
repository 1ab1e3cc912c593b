//! Wordle.uz - CLI
//!
//! Uzbek Wordle with a TUI and a line mode, plus word list utilities.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_uz::{
    commands::{check_lists, run_simple, score_words},
    config::{CliOverrides, Config, Theme},
    interactive::{App, run_tui},
    logging::init_tracing,
    output::{print_check_report, print_score_result},
    wordlists::{LoadState, WordListLoader},
};

#[derive(Parser)]
#[command(
    name = "wordle_uz",
    about = "Uzbek Wordle: find the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: ./wordle_uz.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Candidate word list to draw targets from
    #[arg(long, global = true)]
    common: Option<PathBuf>,

    /// Full dictionary of accepted guesses
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Colour theme of the TUI
    #[arg(long, global = true, value_enum)]
    theme: Option<Theme>,

    /// Do not ring the terminal bell with notifications
    #[arg(long, global = true)]
    no_bell: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-by-line game without the TUI
    Simple,

    /// Score one guess against a target
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },

    /// Check the word lists for problems
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        common: cli.common.clone(),
        full: cli.words.clone(),
        theme: cli.theme,
        no_bell: cli.no_bell,
    };
    let mut config = Config::load(cli.config.as_deref(), &overrides)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so its logs go to a file
    if matches!(command, Commands::Play) && config.log.file.is_none() {
        config.log.file = Some(std::env::temp_dir().join("wordle_uz.log"));
    }
    init_tracing(&config.log);
    tracing::debug!(?config, "configuration resolved");

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Score { guess, target } => {
            let result = score_words(&guess, &target).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Check => {
            let report = check_lists(&config.words.common_source(), &config.words.full_source())
                .context("cannot check word lists")?;
            print_check_report(&report);
            Ok(())
        }
    }
}

fn run_play_command(config: &Config) -> Result<()> {
    let mut loader = WordListLoader::new();
    loader.start(config.words.common_source(), config.words.full_source());
    run_tui(App::new(loader, &config.ui))
}

fn run_simple_command(config: &Config) -> Result<()> {
    let mut loader = WordListLoader::new();
    loader.start(config.words.common_source(), config.words.full_source());

    let LoadState::Ready(lists) = loader.wait() else {
        bail!("word lists could not be loaded (see the log for details)");
    };
    let lists = std::sync::Arc::clone(lists);

    run_simple(&lists).map_err(|e| anyhow::anyhow!(e))
}
