//! Strictly Timetravel - CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use strictly_timetravel::{Cli, Command, ReplayReport, Settings, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)
        .with_context(|| format!("Failed to load settings from {}", cli.config.display()))?;
    let settings = match cli.command.sort_override() {
        Some(sort) => settings.with_sort(sort),
        None => settings,
    };

    match cli.command {
        Command::Play { .. } => run_tui(&settings),
        Command::Replay { moves, jump, json, .. } => {
            init_stderr_tracing(&settings);
            info!(config = %cli.config.display(), sort = ?settings.sort(), "Settings loaded");
            run_replay(&moves, jump, *settings.sort(), json)
        }
    }
}

/// Logs to stderr so stdout stays clean for the report.
fn init_stderr_tracing(settings: &Settings) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Plays the moves and prints the report.
#[instrument(skip_all, fields(moves = moves.len(), ?jump, ?sort))]
fn run_replay(
    moves: &[strictly_timetravel::Position],
    jump: Option<usize>,
    sort: strictly_timetravel::SortOrder,
    json: bool,
) -> Result<()> {
    let report = ReplayReport::build(moves, jump, sort).context("Replay failed")?;
    info!(status = %report.status, "Replay complete");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}
