//! Agentd Core
//!
//! Core types for the agentd analysis pipeline client.
//!
//! This crate contains:
//! - Domain types: the polled session entity and its lifecycle status
//! - DTOs: request/response payloads exchanged with the agentd service

pub mod domain;
pub mod dto;
