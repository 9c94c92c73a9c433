//! Watch command handler
//!
//! Drives the status poll loop for a run, rendering incremental updates and
//! prompting for answers while the session waits for input.

use agentd_client::PipelineClient;
use anyhow::Result;
use colored::*;

use crate::config::Config;
use crate::prompt::ConsolePrompt;
use crate::render;
use crate::watcher::{StatusWatcher, WatchOutcome};

/// Watch a run until it reaches a terminal state
///
/// Ctrl-C aborts the watch handle, which cancels the pending tick and
/// discards any in-flight fetch; the run itself keeps going server-side.
pub async fn handle_watch(id: &str, config: &Config) -> Result<()> {
    let client = PipelineClient::new(&config.base_url);
    let report_url = client.report_url(id);

    let watcher = StatusWatcher::new(client, ConsolePrompt, id.to_string(), config.poll_interval);
    let mut handle = watcher.spawn();

    let outcome = tokio::select! {
        outcome = handle.join() => outcome?,
        _ = tokio::signal::ctrl_c() => {
            // Returning drops the handle, which aborts the loop and discards
            // any in-flight fetch.
            println!("\n{}", "Watch interrupted; the run continues server-side.".yellow());
            println!(
                "  Resume with: {}",
                format!("agentd watch {}", id).dimmed()
            );
            return Ok(());
        }
    };

    match outcome {
        WatchOutcome::Completed(snapshot) => {
            render::print_completed(&snapshot, &report_url);
            Ok(())
        }
        WatchOutcome::Failed(snapshot) => {
            render::print_failed(&snapshot);
            // Job failure is a distinct terminal view, not a transport error,
            // but scripts still need a non-zero exit.
            std::process::exit(1);
        }
    }
}
