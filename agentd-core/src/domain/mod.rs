//! Core domain types
//!
//! This module contains the domain structures the client reconciles against.
//! The session is owned by the remote service; the client only ever holds a
//! cached snapshot of it.

pub mod session;
