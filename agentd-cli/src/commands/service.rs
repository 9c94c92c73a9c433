//! Service-level command handlers
//!
//! Overview (aggregate session counts) and health probe.

use agentd_client::PipelineClient;
use anyhow::Result;
use colored::*;

use crate::config::Config;

/// Show aggregate per-status session counts
pub async fn handle_overview(config: &Config) -> Result<()> {
    let client = PipelineClient::new(&config.base_url);
    let overview = client.overview().await?;
    let counts = overview.data;

    println!("{}", "Service Overview:".bold());
    println!("  Queued:            {}", counts.queued_pipelines);
    println!(
        "  Running:           {}",
        counts.running_pipelines.to_string().cyan()
    );
    println!(
        "  Waiting for input: {}",
        counts.waiting_for_input_pipelines.to_string().yellow()
    );
    println!(
        "  Completed:         {}",
        counts.completed_pipelines.to_string().green()
    );
    println!(
        "  Failed:            {}",
        counts.failed_pipelines.to_string().red()
    );

    Ok(())
}

/// Probe service liveness
pub async fn handle_health(config: &Config) -> Result<()> {
    let client = PipelineClient::new(&config.base_url);
    let health = client.health().await?;

    let status = if health.status == "ok" {
        health.status.green()
    } else {
        health.status.red()
    };

    println!("{}", "Service Health:".bold());
    println!("  Status:          {}", status);
    println!("  Active sessions: {}", health.active_sessions);
    println!("  Uptime:          {:.0}s", health.uptime);
    println!(
        "  Last cleanup:    {} ({} total)",
        health
            .last_cleanup
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .dimmed(),
        health.cleanup_count
    );

    Ok(())
}
