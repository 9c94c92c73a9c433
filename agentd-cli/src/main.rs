//! Agentd CLI
//!
//! Command-line interface for the agentd analysis pipeline: submit a topic,
//! watch a run's progress (answering agent questions along the way), and
//! download the final report.

mod commands;
mod config;
mod prompt;
mod render;
mod watcher;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "agentd")]
#[command(about = "Agentd analysis pipeline CLI", long_about = None)]
struct Cli {
    /// Service base URL
    #[arg(long, env = "AGENTD_BASE_URL", default_value = "http://localhost:5000")]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Keep tracing out of the human-facing output unless RUST_LOG asks for it
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agentd_cli=warn,agentd_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config::new(cli.base_url);
    config.validate()?;

    handle_command(cli.command, &config).await
}
