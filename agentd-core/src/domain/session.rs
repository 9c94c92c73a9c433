//! Session domain types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a pipeline session
///
/// Serialized in snake_case to match the wire format. `Completed` and
/// `Failed` are terminal; no further transitions occur after either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStatus {
    Queued,
    Running,
    WaitingForInput,
    Completed,
    Failed,
}

impl PipelineStatus {
    /// Whether this status is terminal (no further polling is useful)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Running => "running",
            Self::WaitingForInput => "waiting for input",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

/// Snapshot of a remote pipeline session
///
/// The session itself lives in the agentd service; the client holds only the
/// latest polled copy and replaces it wholesale on every successful poll.
/// Timestamps are naive because the service emits ISO-8601 UTC without an
/// offset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub request_id: String,
    pub pipeline_status: PipelineStatus,
    pub progress: u8,
    pub update: Option<String>,
    pub error: Option<String>,
    #[serde(default)]
    pub agent_updates: Vec<String>,
    pub updated_at: NaiveDateTime,
    pub started_at: NaiveDateTime,
    pub ended_at: Option<NaiveDateTime>,
}
