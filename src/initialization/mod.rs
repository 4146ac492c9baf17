//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - HTTP client (with timeout and user agent)
//! - API base URLs

mod client;
mod logger;

use url::Url;

use crate::error_handling::InitializationError;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Parses an API base URL so endpoint paths can be appended to it.
///
/// A trailing slash is added when missing, so `.../v1/1` and `.../v1/1/`
/// both resolve `random.php` to `.../v1/1/random.php`.
///
/// # Errors
///
/// Returns `InitializationError::InvalidBaseUrl` if the URL does not parse.
pub fn init_base_url(raw: &str) -> Result<Url, InitializationError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalized).map_err(|source| InitializationError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })
}
