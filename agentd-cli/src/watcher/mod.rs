//! Watch loop for session status
//!
//! Polls the service at a fixed interval, reconciles each snapshot into the
//! terminal view, and routes agent questions to the answer prompt until the
//! session reaches a terminal state.

pub mod poller;

pub use poller::{StatusWatcher, WatchOutcome};
