//! Status command handler
//!
//! Fetches a single snapshot and prints it, without entering the watch loop.

use agentd_client::PipelineClient;
use anyhow::Result;
use colored::*;

use crate::config::Config;
use crate::render;

/// Show the current status of a run
pub async fn handle_status(id: &str, json: bool, config: &Config) -> Result<()> {
    let client = PipelineClient::new(&config.base_url);
    let snapshot = client.session_status(id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    render::print_snapshot_details(&snapshot);

    if !snapshot.pipeline_status.is_terminal() {
        println!(
            "  Follow it with: {}",
            format!("agentd watch {}", snapshot.request_id).dimmed()
        );
    }

    Ok(())
}
