//! meal_pairing library: pairs a random recipe with a cocktail
//!
//! Fetches a random meal from TheMealDB, maps its category to a spirit,
//! looks up a cocktail made with that spirit on TheCocktailDB (or a random
//! cocktail when nothing matches) and hands both to a [`Renderer`].
//!
//! # Example
//!
//! ```no_run
//! use meal_pairing::{run_pairing, Config, HtmlRenderer};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut renderer = HtmlRenderer::new();
//! let report = run_pairing(Config::default(), &mut renderer).await?;
//! println!("{} goes with {}", report.meal_name, report.cocktail_name);
//! std::fs::write("pairing.html", renderer.to_document())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
#[allow(missing_docs)]
pub mod fetch;
pub mod initialization;
#[allow(missing_docs)]
pub mod models;
pub mod pairing;
#[allow(missing_docs)]
pub mod render;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{FetchError, InitializationError, MappingError};
pub use fetch::{CocktailMatch, RecipeClient};
pub use models::{Cocktail, Ingredient, Meal};
pub use pairing::{map_category_to_spirit, CategorySpiritMap, Spirit};
pub use render::{HtmlRenderer, Renderer, TerminalRenderer};
pub use run::{pair_and_render, run_pairing, PairingReport};

// Internal run module (contains the orchestration)
mod run {
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;

    use crate::config::Config;
    use crate::fetch::RecipeClient;
    use crate::initialization::{init_base_url, init_client};
    use crate::pairing::{map_category_to_spirit, CategorySpiritMap};
    use crate::render::Renderer;

    /// Outcome of one pairing run.
    #[derive(Debug, Clone)]
    pub struct PairingReport {
        /// Name of the fetched meal
        pub meal_name: String,
        /// The meal's category, if it had one
        pub category: Option<String>,
        /// Spirit derived from the category
        pub spirit: String,
        /// Name of the paired cocktail
        pub cocktail_name: String,
        /// True when no cocktail matched the spirit and a random one was used
        pub fallback_used: bool,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs one pairing with the provided configuration.
    ///
    /// Builds the HTTP client and pairing table from `config`, then delegates
    /// to [`pair_and_render`].
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The pairing overrides file cannot be loaded
    /// - An API base URL is invalid or the HTTP client cannot be built
    /// - Any API call fails or returns no record
    pub async fn run_pairing(config: Config, renderer: &mut dyn Renderer) -> Result<PairingReport> {
        let map = match &config.mapping {
            Some(path) => CategorySpiritMap::load_overrides(path)
                .with_context(|| format!("Failed to load pairings from {}", path.display()))?,
            None => CategorySpiritMap::standard(),
        };

        let http = init_client(&config).context("Failed to initialize HTTP client")?;
        let recipe_base = init_base_url(&config.recipe_api_base)?;
        let cocktail_base = init_base_url(&config.cocktail_api_base)?;
        let client = RecipeClient::new(http, recipe_base, cocktail_base);

        pair_and_render(&client, &map, renderer).await
    }

    /// Fetches a meal, renders it, pairs it and renders the cocktail.
    ///
    /// Steps run strictly in sequence; the first failure aborts the rest. The
    /// meal is rendered before the cocktail is looked up, so it remains
    /// rendered when a later step fails.
    ///
    /// # Errors
    ///
    /// Returns the first fetch failure, with context naming the failed stage.
    pub async fn pair_and_render(
        client: &RecipeClient,
        map: &CategorySpiritMap,
        renderer: &mut dyn Renderer,
    ) -> Result<PairingReport> {
        let start_time = Instant::now();

        let meal = client
            .fetch_random_meal()
            .await
            .context("Failed to fetch a random meal")?;
        info!(
            "Fetched meal '{}' (category: {})",
            meal.name(),
            meal.category().unwrap_or("none")
        );
        renderer.render_meal(&meal);

        let spirit = map_category_to_spirit(map, meal.category());
        info!("Pairing with spirit '{}'", spirit);

        let found = client
            .fetch_cocktail_for_spirit(&spirit)
            .await
            .with_context(|| format!("Failed to fetch a cocktail for '{}'", spirit))?;
        info!(
            "Fetched cocktail '{}'{}",
            found.cocktail.name(),
            if found.fallback { " (random fallback)" } else { "" }
        );
        renderer.render_cocktail(&found.cocktail);

        Ok(PairingReport {
            meal_name: meal.name().to_string(),
            category: meal.category().map(str::to_string),
            spirit: spirit.to_string(),
            cocktail_name: found.cocktail.name().to_string(),
            fallback_used: found.fallback,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
