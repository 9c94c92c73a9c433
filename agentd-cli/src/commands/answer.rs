//! Answer command handler
//!
//! One-shot answer submission for a session waiting for input, for use
//! outside the interactive watch loop (scripts, a second terminal).

use agentd_client::PipelineClient;
use agentd_core::dto::session::SubmitAnswer;
use anyhow::Result;
use colored::*;

use crate::commands::ensure_non_empty;
use crate::config::Config;

/// Submit an answer to a pending agent question
pub async fn handle_answer(id: &str, answer: &str, config: &Config) -> Result<()> {
    let answer = ensure_non_empty(answer, "Answer")?;

    let client = PipelineClient::new(&config.base_url);
    let ack = client
        .submit_answer(
            id,
            SubmitAnswer {
                answer: answer.to_string(),
            },
        )
        .await?;

    println!(
        "{} {}",
        "✓".green(),
        ack.message
            .as_deref()
            .unwrap_or("Answer is being processed.")
    );

    Ok(())
}
