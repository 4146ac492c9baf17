//! Error handling.
//!
//! This module provides the error types for:
//! - **Initialization**: logger and HTTP client setup
//! - **Fetching**: network, status and decode failures against the APIs
//! - **Mapping**: loading user-supplied pairing tables
//!
//! All of them are funnelled into `anyhow::Error` by the orchestrator and
//! reported once at the top of the binary.

mod types;

// Re-export public API
pub use types::{FetchError, InitializationError, MappingError};
