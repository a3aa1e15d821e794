//! Command-line interface for mnk_tui.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Configurable-size tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "mnk_tui")]
#[command(about = "Play (m,n,k) tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play(PlayArgs),

    /// Print the lines generated for a board size as JSON
    Lines {
        /// Number of rows
        #[arg(short, long)]
        rows: usize,

        /// Number of columns
        #[arg(short, long)]
        columns: usize,

        /// Only print lines long enough for this win length
        #[arg(short, long)]
        win_length: Option<usize>,
    },
}

/// Options for the `play` command.
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Path to the TOML config file
    #[arg(long, default_value = "mnk.toml")]
    pub config: PathBuf,

    /// Board rows (overrides the config file)
    #[arg(short, long)]
    pub rows: Option<usize>,

    /// Board columns (overrides the config file)
    #[arg(short, long)]
    pub columns: Option<usize>,

    /// Marks in a row needed to win (overrides the config file)
    #[arg(short, long)]
    pub win_length: Option<usize>,
}

impl PlayArgs {
    /// Arguments used when no subcommand is given.
    pub fn defaults() -> Self {
        Self {
            config: PathBuf::from("mnk.toml"),
            ..Self::default()
        }
    }
}
