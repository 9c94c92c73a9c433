//! Agentd HTTP Client
//!
//! A simple, type-safe HTTP client for communicating with the agentd analysis
//! pipeline service.
//!
//! This crate provides the single interface the CLI uses to talk to the
//! service: run submission, status polling, answer submission, report
//! download, and the service-level overview/health probes.
//!
//! # Example
//!
//! ```no_run
//! use agentd_client::PipelineClient;
//! use agentd_core::dto::session::RunPipeline;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PipelineClient::new("http://localhost:5000");
//!
//!     // Submit a topic for analysis
//!     let accepted = client.start_run(RunPipeline {
//!         topic: "market trends in renewable energy".to_string(),
//!     }).await?;
//!
//!     println!("Started run: {}", accepted.request_id);
//!     Ok(())
//! }
//! ```

pub mod error;
mod service;
mod sessions;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use sessions::SessionApi;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::extract_message;

/// HTTP client for the agentd service API
///
/// This client provides methods for all service endpoints, organized into
/// logical groups:
/// - Session lifecycle (run submission, status polling, answers)
/// - Report download
/// - Service overview and health probes
#[derive(Debug, Clone)]
pub struct PipelineClient {
    /// Base URL of the service (e.g., "http://localhost:5000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl PipelineClient {
    /// Create a new pipeline client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the agentd service (e.g., "http://localhost:5000")
    ///
    /// # Example
    /// ```
    /// use agentd_client::PipelineClient;
    ///
    /// let client = PipelineClient::new("http://localhost:5000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new pipeline client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the agentd service
    /// * `client` - A configured reqwest Client
    ///
    /// # Example
    /// ```
    /// use agentd_client::PipelineClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = PipelineClient::with_client("http://localhost:5000", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns the service-provided error message
    /// if the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        debug!(status = status.as_u16(), "api response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::api_error(
                status.as_u16(),
                extract_message(status.as_u16(), &body),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
