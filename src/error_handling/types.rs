//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// An API base URL could not be parsed.
    #[error("Invalid API base URL '{url}': {source}")]
    InvalidBaseUrl {
        /// The URL as given
        url: String,
        /// Parser error
        #[source]
        source: url::ParseError,
    },
}

/// Errors raised while talking to the recipe and cocktail APIs.
///
/// Transport failures, non-2xx statuses and JSON decode failures all surface
/// through `Http`; the remaining variants cover well-formed but empty answers.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Request, status or body decode failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] ReqwestError),

    /// The random-meal endpoint returned no meal records.
    #[error("Recipe API returned no meals")]
    NoMeal,

    /// The random-cocktail endpoint returned no drink records.
    #[error("Cocktail API returned no drinks")]
    NoCocktail,
}

/// Errors loading a user-supplied pairing table.
#[derive(Error, Debug)]
pub enum MappingError {
    /// The overrides file could not be read.
    #[error("Failed to read pairing file: {0}")]
    Io(#[from] std::io::Error),

    /// The overrides file is not a JSON object of strings.
    #[error("Invalid pairing file: {0}")]
    Json(#[from] serde_json::Error),
}
