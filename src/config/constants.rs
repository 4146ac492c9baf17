//! Configuration constants.
//!
//! This module defines the API endpoints, record layout limits and other
//! operational defaults used throughout the application.

/// Base URL of TheMealDB public API (v1, test key).
pub const DEFAULT_RECIPE_API_BASE: &str = "https://www.themealdb.com/api/json/v1/1";

/// Base URL of TheCocktailDB public API (v1, test key).
pub const DEFAULT_COCKTAIL_API_BASE: &str = "https://www.thecocktaildb.com/api/json/v1/1";

/// Endpoint returning a single random record (same path on both APIs).
pub const RANDOM_ENDPOINT: &str = "random.php";

/// Cocktail search endpoint, takes the spirit name as the `s` query parameter.
pub const SEARCH_ENDPOINT: &str = "search.php";

/// Query parameter carrying the search term.
pub const SEARCH_QUERY_PARAM: &str = "s";

// Record layout
/// Number of `strIngredientN`/`strMeasureN` slots in a meal record
pub const MAX_MEAL_INGREDIENTS: usize = 20;
/// Number of `strIngredientN`/`strMeasureN` slots in a cocktail record
pub const MAX_COCKTAIL_INGREDIENTS: usize = 15;

/// Spirit used when a meal category has no entry in the pairing table.
pub const DEFAULT_SPIRIT: &str = "cola";

// Output containers
/// Identifier of the container holding the rendered meal
pub const MEAL_CONTAINER_ID: &str = "mealContainer";
/// Identifier of the container holding the rendered cocktail
pub const COCKTAIL_CONTAINER_ID: &str = "cocktailContainer";

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for API requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("meal_pairing/", env!("CARGO_PKG_VERSION"));
