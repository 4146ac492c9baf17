//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `meal_pairing` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Choosing and flushing the renderer
//!
//! All core functionality is implemented in the library crate.

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::error;

use meal_pairing::initialization::init_logger_with;
use meal_pairing::{
    run_pairing, Config, HtmlRenderer, OutputFormat, PairingReport, TerminalRenderer,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Lets RUST_LOG live in .env; a missing file is fine
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let format = config.format;
    let output = config.output.clone();

    let result = match format {
        OutputFormat::Text => {
            let mut renderer = TerminalRenderer::stdout();
            run_pairing(config, &mut renderer).await
        }
        OutputFormat::Html => {
            let mut renderer = HtmlRenderer::new();
            let result = run_pairing(config, &mut renderer).await;
            // Whatever was rendered before a failure is still written out
            let written = write_page(&renderer.to_document(), output.as_deref());
            merge_results(result, written)
        }
    };

    match result {
        Ok(report) => {
            eprintln!(
                "{} ({}) pairs with {} via {}{} in {:.1}s",
                report.meal_name,
                report.category.as_deref().unwrap_or("no category"),
                report.cocktail_name,
                report.spirit,
                if report.fallback_used {
                    " (random fallback)"
                } else {
                    ""
                },
                report.elapsed_seconds
            );
            if let Some(path) = output.filter(|_| format == OutputFormat::Html) {
                eprintln!("Page saved to {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            error!("{:#}", e);
            eprintln!("meal_pairing error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Writes the HTML page to `output`, or to stdout when no path is given.
fn write_page(document: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, document)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            print!("{document}");
            Ok(())
        }
    }
}

/// Combines the pairing outcome with the page write.
///
/// A pairing failure wins; a write failure alongside it is only logged.
fn merge_results(result: Result<PairingReport>, written: Result<()>) -> Result<PairingReport> {
    match (result, written) {
        (Ok(report), Ok(())) => Ok(report),
        (Err(e), Ok(())) | (Ok(_), Err(e)) => Err(e),
        (Err(e), Err(write_err)) => {
            error!("{:#}", write_err);
            Err(e)
        }
    }
}
