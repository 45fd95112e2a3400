//! Test support utilities for the resource server
//!
//! Shared by unit and integration tests: one-time tracing initialization,
//! assertions over relayed header sets, and Problem Details checks.

pub mod headers;
pub mod logging;
pub mod problem_details;
