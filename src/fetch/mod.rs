//! Recipe and cocktail API access.
//!
//! `RecipeClient` wraps one shared `reqwest::Client` and the two API base
//! URLs. Every call is a single GET; nothing is retried or cached.

use std::sync::Arc;

use log::debug;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::{RANDOM_ENDPOINT, SEARCH_ENDPOINT, SEARCH_QUERY_PARAM};
use crate::error_handling::FetchError;
use crate::models::{Cocktail, DrinksResponse, Meal, MealsResponse};
use crate::pairing::Spirit;

/// A cocktail together with how it was found.
#[derive(Debug, Clone)]
pub struct CocktailMatch {
    pub cocktail: Cocktail,
    /// True when the search had no match and a random cocktail was used
    pub fallback: bool,
}

/// Client for TheMealDB and TheCocktailDB.
#[derive(Debug, Clone)]
pub struct RecipeClient {
    client: Arc<reqwest::Client>,
    recipe_base: Url,
    cocktail_base: Url,
}

impl RecipeClient {
    /// Creates a client. Base URLs must end in `/` (see `init_base_url`).
    pub fn new(client: Arc<reqwest::Client>, recipe_base: Url, cocktail_base: Url) -> Self {
        RecipeClient {
            client,
            recipe_base,
            cocktail_base,
        }
    }

    /// Fetches one random meal.
    ///
    /// # Errors
    ///
    /// `FetchError::Http` on transport, status or decode failure;
    /// `FetchError::NoMeal` when the response holds no meal records.
    pub async fn fetch_random_meal(&self) -> Result<Meal, FetchError> {
        let url = endpoint(&self.recipe_base, RANDOM_ENDPOINT);
        let data: MealsResponse = self.get_json(url).await?;
        debug!("Meal data: {:?}", data);
        data.meals
            .and_then(|meals| meals.into_iter().next())
            .ok_or(FetchError::NoMeal)
    }

    /// Searches cocktails by spirit name. A `null` match list is returned as empty.
    ///
    /// # Errors
    ///
    /// `FetchError::Http` on transport, status or decode failure.
    pub async fn search_cocktails(&self, spirit: &Spirit) -> Result<Vec<Cocktail>, FetchError> {
        let mut url = endpoint(&self.cocktail_base, SEARCH_ENDPOINT);
        url.query_pairs_mut()
            .append_pair(SEARCH_QUERY_PARAM, spirit.as_str());
        let data: DrinksResponse = self.get_json(url).await?;
        debug!("Cocktail data: {:?}", data);
        Ok(data.drinks.unwrap_or_default())
    }

    /// Fetches one random cocktail.
    ///
    /// # Errors
    ///
    /// `FetchError::Http` on transport, status or decode failure;
    /// `FetchError::NoCocktail` when the response holds no drink records.
    pub async fn fetch_random_cocktail(&self) -> Result<Cocktail, FetchError> {
        let url = endpoint(&self.cocktail_base, RANDOM_ENDPOINT);
        let data: DrinksResponse = self.get_json(url).await?;
        debug!("Random cocktail data: {:?}", data);
        data.drinks
            .and_then(|drinks| drinks.into_iter().next())
            .ok_or(FetchError::NoCocktail)
    }

    /// Returns the first cocktail matching `spirit`, or a random cocktail
    /// when the search comes back empty.
    ///
    /// The fallback request is only issued after the search has completed,
    /// and at most once.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the search or the fallback.
    pub async fn fetch_cocktail_for_spirit(
        &self,
        spirit: &Spirit,
    ) -> Result<CocktailMatch, FetchError> {
        let matches = self.search_cocktails(spirit).await?;
        if let Some(cocktail) = matches.into_iter().next() {
            return Ok(CocktailMatch {
                cocktail,
                fallback: false,
            });
        }

        debug!("No cocktail found for '{}', fetching a random one", spirit);
        let cocktail = self.fetch_random_cocktail().await?;
        Ok(CocktailMatch {
            cocktail,
            fallback: true,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}

/// Joins an endpoint path onto a base URL that ends in `/`.
fn endpoint(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    // Base URLs are normalised with a trailing slash, so appending is a plain join
    let joined = format!("{}{}", url.path(), path);
    url.set_path(&joined);
    url
}
