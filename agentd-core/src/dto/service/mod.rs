//! Service-level DTOs: aggregate overview and health probe payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate session counts reported by `GET api/api-status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceOverview {
    pub data: OverviewCounts,
}

/// Per-status session counts
///
/// The service reports counts rather than ids so the overview endpoint does
/// not leak other users' request identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewCounts {
    pub queued_pipelines: u64,
    pub running_pipelines: u64,
    pub completed_pipelines: u64,
    pub failed_pipelines: u64,
    pub waiting_for_input_pipelines: u64,
}

/// Health probe payload from `GET api/health`
///
/// Unlike session timestamps, these are timezone-aware RFC 3339 values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub active_sessions: u64,
    pub last_cleanup: DateTime<Utc>,
    pub cleanup_count: u64,
    pub uptime: f64,
    pub timestamp: DateTime<Utc>,
}
