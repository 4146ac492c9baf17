//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_COCKTAIL_API_BASE, DEFAULT_RECIPE_API_BASE, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How the meal and cocktail are presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Coloured text on stdout, written as each stage completes
    Text,
    /// Standalone HTML page with `mealContainer` and `cocktailContainer`
    Html,
}

/// Command-line options and library configuration.
///
/// Parsed by `clap` in the binary; library callers can build it directly
/// and fill the rest from `Default`.
///
/// # Examples
///
/// ```bash
/// # Print a pairing to the terminal
/// meal_pairing
///
/// # Write an HTML page instead
/// meal_pairing --format html --output pairing.html
///
/// # Extend the category table
/// meal_pairing --mapping my_pairings.json
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "meal_pairing",
    about = "Fetches a random recipe and pairs it with a matching cocktail."
)]
pub struct Config {
    /// Base URL of the recipe API
    #[arg(long, default_value = DEFAULT_RECIPE_API_BASE)]
    pub recipe_api_base: String,

    /// Base URL of the cocktail API
    #[arg(long, default_value = DEFAULT_COCKTAIL_API_BASE)]
    pub cocktail_api_base: String,

    /// Output format: text|html
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Where to write the HTML page (stdout when omitted)
    #[arg(long, value_parser)]
    pub output: Option<PathBuf>,

    /// JSON file of extra `"Category": "spirit"` pairings
    ///
    /// Entries replace the built-in pairing for the same category.
    #[arg(long, value_parser)]
    pub mapping: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recipe_api_base: DEFAULT_RECIPE_API_BASE.to_string(),
            cocktail_api_base: DEFAULT_COCKTAIL_API_BASE.to_string(),
            format: OutputFormat::Text,
            output: None,
            mapping: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
