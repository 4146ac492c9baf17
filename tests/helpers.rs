// Shared test helpers for mock API servers and renderer capture.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::sync::Arc;

use httptest::Server;
use serde_json::{json, Value};

use meal_pairing::initialization::init_base_url;
use meal_pairing::{Cocktail, Config, Meal, RecipeClient, Renderer};

/// Path prefix the mock server uses for the recipe API.
pub const MEAL_PREFIX: &str = "/meal";
/// Path prefix the mock server uses for the cocktail API.
pub const COCKTAIL_PREFIX: &str = "/cocktail";

/// Config pointing both APIs at the mock server.
#[allow(dead_code)] // Used by other test files
pub fn mock_config(server: &Server) -> Config {
    Config {
        recipe_api_base: server.url_str(MEAL_PREFIX),
        cocktail_api_base: server.url_str(COCKTAIL_PREFIX),
        timeout_seconds: 5,
        ..Default::default()
    }
}

/// Client pointing both APIs at the mock server.
#[allow(dead_code)]
pub fn mock_client(server: &Server) -> RecipeClient {
    RecipeClient::new(
        Arc::new(reqwest::Client::new()),
        init_base_url(&server.url_str(MEAL_PREFIX)).expect("meal base should parse"),
        init_base_url(&server.url_str(COCKTAIL_PREFIX)).expect("cocktail base should parse"),
    )
}

/// A meal record in TheMealDB shape.
#[allow(dead_code)]
pub fn meal_record(name: &str, category: Option<&str>) -> Value {
    json!({
        "idMeal": "52959",
        "strMeal": name,
        "strCategory": category,
        "strArea": "British",
        "strInstructions": "Cook it well.",
        "strMealThumb": "https://www.themealdb.com/images/media/meals/test.jpg",
        "strIngredient1": "Potatoes",
        "strMeasure1": "500g",
        "strIngredient2": "",
        "strMeasure2": " ",
        "strIngredient3": "Butter",
        "strMeasure3": "2 tbs",
        "strIngredient4": null,
        "strMeasure4": null
    })
}

/// A drink record in TheCocktailDB shape.
#[allow(dead_code)]
pub fn cocktail_record(name: &str) -> Value {
    json!({
        "idDrink": "11000",
        "strDrink": name,
        "strAlcoholic": "Alcoholic",
        "strGlass": "Highball glass",
        "strInstructions": "Muddle and stir.",
        "strDrinkThumb": "https://www.thecocktaildb.com/images/media/drink/test.jpg",
        "strIngredient1": "Light rum",
        "strMeasure1": "2-3 oz ",
        "strIngredient2": "Lime",
        "strMeasure2": null,
        "strIngredient3": null,
        "strMeasure3": null
    })
}

/// Renderer that records what it was asked to render, in order.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingRenderer {
    pub events: Vec<String>,
}

impl Renderer for RecordingRenderer {
    fn render_meal(&mut self, meal: &Meal) {
        self.events.push(format!("meal:{}", meal.name()));
    }

    fn render_cocktail(&mut self, cocktail: &Cocktail) {
        self.events.push(format!("cocktail:{}", cocktail.name()));
    }
}
