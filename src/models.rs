//! API record types for TheMealDB and TheCocktailDB.
//!
//! Both APIs return flat records where ingredients live in numbered
//! `strIngredientN` / `strMeasureN` fields. The named fields are decoded
//! directly; the numbered slots are kept in a side map and extracted on demand.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::config::{MAX_COCKTAIL_INGREDIENTS, MAX_MEAL_INGREDIENTS};

/// Envelope returned by the recipe API.
#[derive(Debug, Deserialize)]
pub struct MealsResponse {
    /// `null` when the API has nothing to return
    #[serde(default)]
    pub meals: Option<Vec<Meal>>,
}

/// Envelope returned by the cocktail API (search and random).
#[derive(Debug, Deserialize)]
pub struct DrinksResponse {
    /// `null` when a search has no match
    #[serde(default)]
    pub drinks: Option<Vec<Cocktail>>,
}

/// One recipe record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal", default)]
    pub id: Option<String>,
    #[serde(rename = "strMeal", default)]
    pub name: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    /// Every other field, including the numbered ingredient slots
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

/// One drink record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Cocktail {
    #[serde(rename = "idDrink", default)]
    pub id: Option<String>,
    #[serde(rename = "strDrink", default)]
    pub name: Option<String>,
    #[serde(rename = "strDrinkThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strAlcoholic", default)]
    pub alcoholic: Option<String>,
    #[serde(rename = "strGlass", default)]
    pub glass: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

/// An ingredient with its optional measure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub measure: Option<String>,
    pub name: String,
}

impl Ingredient {
    /// Formats the ingredient as `"measure ingredient"`, or just the
    /// ingredient when no measure is given.
    pub fn line(&self) -> String {
        match &self.measure {
            Some(measure) => format!("{} {}", measure, self.name),
            None => self.name.clone(),
        }
    }
}

impl Meal {
    /// Recipe name, empty when absent.
    pub fn name(&self) -> &str {
        text_or_empty(&self.name)
    }

    /// Category label as sent by the API, `None` when absent or blank.
    pub fn category(&self) -> Option<&str> {
        non_blank(&self.category)
    }

    /// Preparation text, empty when absent.
    pub fn instructions(&self) -> &str {
        text_or_empty(&self.instructions)
    }

    /// Ingredients in slot order (1..=20), blank slots skipped.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        extract_ingredients(&self.fields, MAX_MEAL_INGREDIENTS)
    }
}

impl Cocktail {
    /// Drink name, empty when absent.
    pub fn name(&self) -> &str {
        text_or_empty(&self.name)
    }

    /// Preparation text, empty when absent.
    pub fn instructions(&self) -> &str {
        text_or_empty(&self.instructions)
    }

    /// Ingredients in slot order (1..=15), blank slots skipped.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        extract_ingredients(&self.fields, MAX_COCKTAIL_INGREDIENTS)
    }
}

/// Scans `strIngredient1..=max` and pairs each present ingredient with its
/// `strMeasureN`.
///
/// Slots whose ingredient is missing, `null`, non-string or whitespace-only
/// are skipped. Values are trimmed; the APIs pad many measures with spaces.
pub fn extract_ingredients(fields: &HashMap<String, Value>, max: usize) -> Vec<Ingredient> {
    (1..=max)
        .filter_map(|i| {
            let name = slot_text(fields, &format!("strIngredient{i}"))?;
            let measure = slot_text(fields, &format!("strMeasure{i}"));
            Some(Ingredient {
                measure: measure.map(str::to_string),
                name: name.to_string(),
            })
        })
        .collect()
}

fn slot_text<'a>(fields: &'a HashMap<String, Value>, key: &str) -> Option<&'a str> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

fn text_or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn meal_from(value: Value) -> Meal {
        serde_json::from_value(value).expect("meal should decode")
    }

    #[test]
    fn test_sparse_ingredients_keep_slot_order() {
        let meal = meal_from(json!({
            "strMeal": "Sparse",
            "strIngredient3": "Garlic",
            "strMeasure3": "2 cloves",
            "strIngredient7": "Salt",
            "strMeasure7": "1 pinch",
        }));

        let lines: Vec<String> = meal.ingredients().iter().map(Ingredient::line).collect();
        assert_eq!(lines, vec!["2 cloves Garlic", "1 pinch Salt"]);
    }

    #[test]
    fn test_blank_and_null_ingredients_are_skipped() {
        let meal = meal_from(json!({
            "strIngredient1": "Chicken",
            "strMeasure1": "1 whole",
            "strIngredient2": "",
            "strMeasure2": "",
            "strIngredient3": "   ",
            "strMeasure3": "1 tsp",
            "strIngredient4": null,
            "strMeasure4": null,
        }));

        let ingredients = meal.ingredients();
        assert_eq!(ingredients.len(), 1);
        assert_eq!(ingredients[0].name, "Chicken");
    }

    #[test]
    fn test_missing_measure_renders_ingredient_only() {
        let meal = meal_from(json!({
            "strIngredient1": "Ice",
            "strMeasure1": null,
            "strIngredient2": "Lime",
        }));

        let lines: Vec<String> = meal.ingredients().iter().map(Ingredient::line).collect();
        assert_eq!(lines, vec!["Ice", "Lime"]);
    }

    #[test]
    fn test_measures_are_trimmed() {
        let meal = meal_from(json!({
            "strIngredient1": " Flour ",
            "strMeasure1": "1 cup ",
        }));
        assert_eq!(meal.ingredients()[0].line(), "1 cup Flour");
    }

    #[test]
    fn test_meal_slots_stop_at_twenty() {
        let mut record = serde_json::Map::new();
        for i in 1..=21 {
            record.insert(format!("strIngredient{i}"), json!(format!("item{i}")));
        }
        let meal = meal_from(Value::Object(record));
        let ingredients = meal.ingredients();
        assert_eq!(ingredients.len(), MAX_MEAL_INGREDIENTS);
        assert_eq!(ingredients.last().unwrap().name, "item20");
    }

    #[test]
    fn test_cocktail_slots_stop_at_fifteen() {
        let mut record = serde_json::Map::new();
        for i in 1..=20 {
            record.insert(format!("strIngredient{i}"), json!(format!("item{i}")));
        }
        let cocktail: Cocktail = serde_json::from_value(Value::Object(record)).unwrap();
        assert_eq!(cocktail.ingredients().len(), MAX_COCKTAIL_INGREDIENTS);
    }

    #[test]
    fn test_meal_decodes_api_shape() {
        let response: MealsResponse = serde_json::from_value(json!({
            "meals": [{
                "idMeal": "52772",
                "strMeal": "Teriyaki Chicken Casserole",
                "strCategory": "Chicken",
                "strArea": "Japanese",
                "strInstructions": "Preheat oven to 350.",
                "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
                "strTags": "Meat,Casserole",
                "strIngredient1": "soy sauce",
                "strMeasure1": "3/4 cup",
                "strSource": null,
                "dateModified": null
            }]
        }))
        .unwrap();

        let meals = response.meals.unwrap();
        let meal = &meals[0];
        assert_eq!(meal.id.as_deref(), Some("52772"));
        assert_eq!(meal.name(), "Teriyaki Chicken Casserole");
        assert_eq!(meal.category(), Some("Chicken"));
        assert_eq!(meal.area.as_deref(), Some("Japanese"));
        assert_eq!(meal.ingredients()[0].line(), "3/4 cup soy sauce");
    }

    #[test]
    fn test_missing_category_and_text_fields() {
        let meal = meal_from(json!({ "strCategory": "  " }));
        assert_eq!(meal.category(), None);
        assert_eq!(meal.name(), "");
        assert_eq!(meal.instructions(), "");

        let meal = meal_from(json!({ "strCategory": null }));
        assert_eq!(meal.category(), None);
    }

    #[test]
    fn test_category_is_not_trimmed() {
        let meal = meal_from(json!({ "strCategory": " Seafood " }));
        assert_eq!(meal.category(), Some(" Seafood "));
    }

    #[test]
    fn test_null_drinks_envelope() {
        let response: DrinksResponse = serde_json::from_value(json!({ "drinks": null })).unwrap();
        assert!(response.drinks.is_none());

        let response: DrinksResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.drinks.is_none());
    }
}
