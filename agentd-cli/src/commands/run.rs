//! Run command handler
//!
//! Submits a topic to the service and prints the request id, optionally
//! dropping straight into the watch loop.

use agentd_client::PipelineClient;
use agentd_core::dto::session::RunPipeline;
use anyhow::Result;
use colored::*;

use crate::commands::{ensure_non_empty, watch};
use crate::config::Config;

/// Submit a topic and start a new analysis run
///
/// The topic is validated locally first; an empty or whitespace-only topic
/// never reaches the network.
pub async fn handle_run(topic: &str, watch_after: bool, config: &Config) -> Result<()> {
    let topic = ensure_non_empty(topic, "Topic")?;

    let client = PipelineClient::new(&config.base_url);
    let accepted = client
        .start_run(RunPipeline {
            topic: topic.to_string(),
        })
        .await?;

    println!(
        "{} {}",
        "✓".green(),
        accepted
            .message
            .as_deref()
            .unwrap_or("Pipeline started.")
            .bold()
    );
    println!("  Request: {}", accepted.request_id.cyan());

    if watch_after {
        println!();
        return watch::handle_watch(&accepted.request_id, config).await;
    }

    println!(
        "  Follow it with: {}",
        format!("agentd watch {}", accepted.request_id).dimmed()
    );

    Ok(())
}
