//! mnk_tui - configurable-size tic-tac-toe in the terminal.

#![warn(missing_docs)]

mod cli;
mod config;
mod tui;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use config::AppConfig;
use mnk_tictactoe::{BoardSize, LineSet, MAX_SETTING};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        None => run_play(PlayArgs::defaults()),
        Some(Command::Play(args)) => run_play(args),
        Some(Command::Lines {
            rows,
            columns,
            win_length,
        }) => run_lines(rows, columns, win_length),
    }
}

/// Play in the terminal UI.
fn run_play(args: PlayArgs) -> Result<()> {
    let config = AppConfig::load_or_default(&args.config)?.with_overrides(&args)?;

    // Log to a file so output does not interfere with the UI.
    init_file_logging(config.log_file())?;
    info!(?config, "Starting mnk_tui");

    tui::run_tui(config.settings()?)
}

/// Print generated lines as JSON.
fn run_lines(rows: usize, columns: usize, win_length: Option<usize>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let size = lines_board_size(rows, columns)?;
    let set = LineSet::new(size);
    let lines: Vec<_> = match win_length {
        Some(k) => set.winnable(k).collect(),
        None => set.lines().iter().collect(),
    };

    println!("{}", serde_json::to_string_pretty(&lines)?);
    Ok(())
}

/// Board size for the `lines` command. Sides may be 1 but no larger than
/// the UI allows.
fn lines_board_size(rows: usize, columns: usize) -> Result<BoardSize> {
    ensure!(
        rows <= MAX_SETTING && columns <= MAX_SETTING,
        "rows and columns must be at most {MAX_SETTING}"
    );
    BoardSize::new(rows, columns).context("rows and columns must be positive")
}

fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_board_size_bounds() {
        let size = lines_board_size(1, 4).unwrap();
        assert_eq!(size, BoardSize::new(1, 4).unwrap());
        assert!(lines_board_size(0, 3).is_err());
        assert!(lines_board_size(3, MAX_SETTING + 1).is_err());
        assert!(lines_board_size(1 << 32, 1 << 32).is_err());
    }
}
