//! Command-line interface for strictly_timetravel.

use crate::games::tictactoe::{Position, SortOrder};
use crate::settings::DEFAULT_CONFIG_FILE;
use clap::{Parser, Subcommand};

/// Strictly Timetravel - tic-tac-toe with a rewindable move history
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Tic-tac-toe with full move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (optional; defaults apply if absent)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// List history newest first
        #[arg(long)]
        descending: bool,
    },

    /// Play a list of moves and print the resulting board and history
    Replay {
        /// Comma-separated moves: indices 0-8 or labels like "center"
        #[arg(value_delimiter = ',', value_parser = parse_position)]
        moves: Vec<Position>,

        /// Jump to this history step after playing the moves
        #[arg(long)]
        jump: Option<usize>,

        /// List history newest first
        #[arg(long)]
        descending: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Command {
    /// Sort order forced by `--descending`, if given.
    pub fn sort_override(&self) -> Option<SortOrder> {
        let descending = match self {
            Command::Play { descending } | Command::Replay { descending, .. } => *descending,
        };
        descending.then_some(SortOrder::Descending)
    }
}

fn parse_position(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s)
        .ok_or_else(|| format!("'{}' is not a board position (use 0-8 or a label)", s))
}
