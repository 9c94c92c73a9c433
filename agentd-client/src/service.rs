//! Report download and service-level endpoints

use agentd_core::dto::service::{HealthReport, ServiceOverview};

use crate::PipelineClient;
use crate::error::Result;

impl PipelineClient {
    // =============================================================================
    // Reports
    // =============================================================================

    /// Build the report URL for a completed session
    ///
    /// Shown to users so the report can also be fetched out-of-band
    /// (browser, curl).
    pub fn report_url(&self, request_id: &str) -> String {
        format!("{}/api/report/{}", self.base_url, request_id)
    }

    /// Download the final report for a completed session
    ///
    /// # Arguments
    /// * `request_id` - The session's request id
    ///
    /// # Returns
    /// The raw report bytes (PDF)
    pub async fn download_report(&self, request_id: &str) -> Result<Vec<u8>> {
        let url = self.report_url(request_id);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(crate::error::ClientError::api_error(
                status.as_u16(),
                crate::error::extract_message(status.as_u16(), &body),
            ));
        }

        Ok(response.bytes().await?.to_vec())
    }

    // =============================================================================
    // Service Probes
    // =============================================================================

    /// Fetch aggregate per-status session counts
    pub async fn overview(&self) -> Result<ServiceOverview> {
        let url = format!("{}/api/api-status", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Probe service liveness
    pub async fn health(&self) -> Result<HealthReport> {
        let url = format!("{}/api/health", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }
}
