//! Report command handler
//!
//! Downloads the final report of a completed run to disk.

use std::path::PathBuf;

use agentd_client::PipelineClient;
use anyhow::{Context, Result};
use colored::*;

use crate::config::Config;

/// Download the report for a completed run
///
/// Writes to `--output` if given, otherwise `<id>.pdf` in the current
/// directory.
pub async fn handle_report(id: &str, output: Option<PathBuf>, config: &Config) -> Result<()> {
    let client = PipelineClient::new(&config.base_url);

    let bytes = client.download_report(id).await?;
    let path = output.unwrap_or_else(|| PathBuf::from(format!("{}.pdf", id)));

    tokio::fs::write(&path, &bytes)
        .await
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    println!(
        "{} Saved report to {} ({} bytes)",
        "✓".green(),
        path.display().to_string().cyan(),
        bytes.len()
    );

    Ok(())
}
