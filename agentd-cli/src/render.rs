//! Terminal rendering for session snapshots
//!
//! All user-facing printing for the status and watch commands lives here so
//! the watch loop stays focused on state.

use agentd_core::domain::session::{PipelineStatus, SessionSnapshot};
use colored::*;

/// Colorize a pipeline status for display
pub fn colorize_status(status: &PipelineStatus) -> ColoredString {
    let label = status.label();
    match status {
        PipelineStatus::Queued => label.yellow(),
        PipelineStatus::Running => label.cyan(),
        PipelineStatus::WaitingForInput => label.yellow().bold(),
        PipelineStatus::Completed => label.green(),
        PipelineStatus::Failed => label.red(),
    }
}

/// Print agent updates appended since the last poll
///
/// Returns the new count of rendered entries. History is append-only, so a
/// plain skip is enough to find the fresh tail.
pub fn print_new_agent_updates(snapshot: &SessionSnapshot, already_rendered: usize) -> usize {
    for update in snapshot.agent_updates.iter().skip(already_rendered) {
        println!();
        for (i, line) in update.lines().enumerate() {
            if i == 0 {
                println!("  {} {}", "▸".cyan(), line);
            } else {
                println!("    {}", line);
            }
        }
    }
    snapshot.agent_updates.len()
}

/// Print the one-line progress view used by the watch loop
pub fn print_status_line(snapshot: &SessionSnapshot) {
    println!(
        "[{}] {} {:>3}%",
        snapshot
            .updated_at
            .format("%H:%M:%S")
            .to_string()
            .dimmed(),
        colorize_status(&snapshot.pipeline_status),
        snapshot.progress
    );
}

/// Print detailed session information for the one-shot status view
pub fn print_snapshot_details(snapshot: &SessionSnapshot) {
    println!("{}", "Run Details:".bold());
    println!("  Request:  {}", snapshot.request_id.cyan());
    println!(
        "  Status:   {}",
        colorize_status(&snapshot.pipeline_status)
    );
    println!("  Progress: {}%", snapshot.progress);
    println!(
        "  Started:  {}",
        snapshot.started_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!(
        "  Updated:  {}",
        snapshot.updated_at.format("%Y-%m-%d %H:%M:%S")
    );

    if let Some(ended) = snapshot.ended_at {
        println!("  Ended:    {}", ended.format("%Y-%m-%d %H:%M:%S"));
    }

    if let Some(error) = &snapshot.error {
        println!("\n{}", "Error:".bold());
        println!("  {}", error.red());
    }

    if let Some(update) = &snapshot.update {
        println!("\n{}", "Current update:".bold());
        for line in update.lines() {
            println!("  {}", line);
        }
    }

    if !snapshot.agent_updates.is_empty() {
        println!(
            "\n{}",
            format!("{} agent update(s):", snapshot.agent_updates.len()).bold()
        );
        print_new_agent_updates(snapshot, 0);
    }
}

/// Print the terminal view of a completed run
pub fn print_completed(snapshot: &SessionSnapshot, report_url: &str) {
    println!();
    println!("{} {}", "✓".green(), "Analysis completed".green().bold());
    println!(
        "  {} agent update(s), finished at {}",
        snapshot.agent_updates.len(),
        snapshot
            .ended_at
            .unwrap_or(snapshot.updated_at)
            .format("%Y-%m-%d %H:%M:%S")
    );
    println!("  Report: {}", report_url.cyan());
    println!(
        "  Download with: {}",
        format!("agentd report {}", snapshot.request_id).dimmed()
    );
}

/// Print the terminal view of a failed run
///
/// Distinct from transport errors: the run itself ended in `failed` and the
/// snapshot carries the reason.
pub fn print_failed(snapshot: &SessionSnapshot) {
    println!();
    println!("{} {}", "✗".red(), "Analysis failed".red().bold());
    println!(
        "  Error: {}",
        snapshot
            .error
            .as_deref()
            .unwrap_or("no failure reason reported")
            .red()
    );
    if let Some(update) = &snapshot.update {
        println!("  Last update: {}", update);
    }
    println!(
        "  Updated: {}",
        snapshot.updated_at.format("%Y-%m-%d %H:%M:%S")
    );
}
