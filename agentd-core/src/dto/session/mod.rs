//! Session DTOs for the run/status/answer endpoints

use serde::{Deserialize, Serialize};

/// Request to start a new pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunPipeline {
    pub topic: String,
}

/// Response to an accepted run submission
///
/// The service replies 202 with the identifier used for all follow-up calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunAccepted {
    pub request_id: String,
    pub message: Option<String>,
}

/// Freeform answer to a pending agent question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAnswer {
    pub answer: String,
}

/// Generic acknowledgement payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub message: Option<String>,
}
