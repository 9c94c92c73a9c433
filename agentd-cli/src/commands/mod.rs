//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod answer;
mod report;
mod run;
mod service;
mod status;
mod watch;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Submit a topic and start a new analysis run
    Run {
        /// Topic to analyze
        topic: String,

        /// Watch the run after submitting
        #[arg(long)]
        watch: bool,
    },
    /// Watch a run until it completes, answering agent questions interactively
    Watch {
        /// Request id returned at submission
        id: String,
    },
    /// Show the current status of a run
    Status {
        /// Request id returned at submission
        id: String,

        /// Print the raw status payload as JSON
        #[arg(long)]
        json: bool,
    },
    /// Answer a pending agent question without watching
    Answer {
        /// Request id returned at submission
        id: String,

        /// Answer text
        answer: String,
    },
    /// Download the final report of a completed run
    Report {
        /// Request id returned at submission
        id: String,

        /// Output path (defaults to <id>.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show aggregate session counts for the service
    Overview,
    /// Probe service liveness
    Health,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Run { topic, watch } => run::handle_run(&topic, watch, config).await,
        Commands::Watch { id } => watch::handle_watch(&id, config).await,
        Commands::Status { id, json } => status::handle_status(&id, json, config).await,
        Commands::Answer { id, answer } => answer::handle_answer(&id, &answer, config).await,
        Commands::Report { id, output } => report::handle_report(&id, output, config).await,
        Commands::Overview => service::handle_overview(config).await,
        Commands::Health => service::handle_health(config).await,
    }
}

/// Reject empty or whitespace-only user input before any request is sent
///
/// Returns the trimmed value so downstream code never carries stray
/// whitespace to the service.
pub(crate) fn ensure_non_empty<'a>(value: &'a str, what: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        anyhow::bail!("{} must not be empty", what);
    }
    Ok(trimmed)
}
