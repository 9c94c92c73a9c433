//! Session-related API endpoints
//!
//! Covers the run/status/answer lifecycle of a single analysis session.

use agentd_core::domain::session::SessionSnapshot;
use agentd_core::dto::session::{Ack, RunAccepted, RunPipeline, SubmitAnswer};
use async_trait::async_trait;

use crate::PipelineClient;
use crate::error::Result;

impl PipelineClient {
    // =============================================================================
    // Session Lifecycle
    // =============================================================================

    /// Submit a topic and start a new analysis run
    ///
    /// # Arguments
    /// * `req` - The run request carrying the topic
    ///
    /// # Returns
    /// The accepted run with the request id used for all follow-up calls
    ///
    /// # Example
    /// ```no_run
    /// # use agentd_client::PipelineClient;
    /// # use agentd_core::dto::session::RunPipeline;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = PipelineClient::new("http://localhost:5000");
    /// let accepted = client.start_run(RunPipeline {
    ///     topic: "remote work productivity".to_string(),
    /// }).await?;
    /// println!("{}", accepted.request_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn start_run(&self, req: RunPipeline) -> Result<RunAccepted> {
        let url = format!("{}/api/run", self.base_url);
        let response = self.client.post(&url).json(&req).send().await?;

        self.handle_response(response).await
    }

    /// Fetch the latest snapshot of a session
    ///
    /// # Arguments
    /// * `request_id` - The session's request id
    ///
    /// # Returns
    /// The current session snapshot
    pub async fn session_status(&self, request_id: &str) -> Result<SessionSnapshot> {
        let url = format!("{}/api/status/{}", self.base_url, request_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Submit an answer to a session waiting for input
    ///
    /// The service only accepts answers while the session reports
    /// `waiting_for_input`; at any other time it responds with an error.
    ///
    /// # Arguments
    /// * `request_id` - The session's request id
    /// * `req` - The answer payload
    pub async fn submit_answer(&self, request_id: &str, req: SubmitAnswer) -> Result<Ack> {
        let url = format!("{}/api/answer/{}", self.base_url, request_id);
        let response = self.client.post(&url).json(&req).send().await?;

        self.handle_response(response).await
    }
}

/// The session endpoints consumed by a polling loop
///
/// [`PipelineClient`] is the production implementation; tests substitute
/// scripted fakes so loop behavior can be exercised without a server.
#[async_trait]
pub trait SessionApi: Send + Sync {
    /// Fetch the latest snapshot of a session
    async fn session_status(&self, request_id: &str) -> Result<SessionSnapshot>;

    /// Submit an answer to a session waiting for input
    async fn submit_answer(&self, request_id: &str, req: SubmitAnswer) -> Result<Ack>;
}

#[async_trait]
impl SessionApi for PipelineClient {
    async fn session_status(&self, request_id: &str) -> Result<SessionSnapshot> {
        PipelineClient::session_status(self, request_id).await
    }

    async fn submit_answer(&self, request_id: &str, req: SubmitAnswer) -> Result<Ack> {
        PipelineClient::submit_answer(self, request_id, req).await
    }
}
