//! Meal category to spirit pairing.
//!
//! The pairing table is built once at startup and handed to the mapper by
//! reference; nothing here is global or mutable after construction.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::config::DEFAULT_SPIRIT;
use crate::error_handling::MappingError;

/// Built-in pairings, keyed by TheMealDB category label.
const STANDARD_PAIRINGS: &[(&str, &str)] = &[
    ("Beef", "whiskey"),
    ("Chicken", "gin"),
    ("Dessert", "amaretto"),
    ("Lamb", "vodka"),
    ("Miscellaneous", "vodka"),
    ("Pasta", "tequila"),
    ("Pork", "tequila"),
    ("Seafood", "rum"),
    ("Side", "brandy"),
    ("Starter", "rum"),
    ("Vegetarian", "gin"),
    ("Breakfast", "vodka"),
    ("Goat", "whiskey"),
    ("Vegan", "rum"),
];

/// A liquor name used as the cocktail search key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Spirit(String);

impl Spirit {
    /// Wraps a spirit name.
    pub fn new(name: impl Into<String>) -> Self {
        Spirit(name.into())
    }

    /// The fallback spirit for unmapped categories.
    pub fn default_spirit() -> Self {
        Spirit::new(DEFAULT_SPIRIT)
    }

    /// The spirit name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Spirit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable mapping from meal category to spirit.
#[derive(Debug, Clone)]
pub struct CategorySpiritMap {
    entries: HashMap<String, Spirit>,
    default: Spirit,
}

impl CategorySpiritMap {
    /// The built-in table with `cola` as the default.
    pub fn standard() -> Self {
        let entries = STANDARD_PAIRINGS
            .iter()
            .map(|(category, spirit)| (category.to_string(), Spirit::new(*spirit)))
            .collect();
        CategorySpiritMap {
            entries,
            default: Spirit::default_spirit(),
        }
    }

    /// The built-in table with `overrides` layered on top.
    ///
    /// An override for an existing category replaces it; new categories are added.
    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        let mut map = Self::standard();
        for (category, spirit) in overrides {
            map.entries.insert(category, Spirit::new(spirit));
        }
        map
    }

    /// Reads a JSON object of `"Category": "spirit"` overrides from `path`
    /// and layers it over the built-in table.
    ///
    /// # Errors
    ///
    /// Returns `MappingError` if the file cannot be read or is not a JSON
    /// object of strings.
    pub fn load_overrides(path: &Path) -> Result<Self, MappingError> {
        let raw = std::fs::read_to_string(path)?;
        let overrides: HashMap<String, String> = serde_json::from_str(&raw)?;
        log::debug!(
            "Loaded {} pairing override(s) from {}",
            overrides.len(),
            path.display()
        );
        Ok(Self::with_overrides(overrides))
    }

    /// Looks up the spirit for `category`, falling back to the default.
    pub fn spirit_for(&self, category: Option<&str>) -> Spirit {
        category
            .filter(|c| !c.is_empty())
            .and_then(|c| self.entries.get(c))
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }

    /// Number of mapped categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no category is mapped.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CategorySpiritMap {
    fn default() -> Self {
        Self::standard()
    }
}

/// Maps a meal category to the spirit used for the cocktail search.
///
/// `None`, empty and unknown categories yield the map's default (`cola`).
pub fn map_category_to_spirit(map: &CategorySpiritMap, category: Option<&str>) -> Spirit {
    map.spirit_for(category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Meal;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_every_standard_category_maps_to_its_spirit() {
        let map = CategorySpiritMap::standard();
        for (category, spirit) in STANDARD_PAIRINGS {
            assert_eq!(
                map_category_to_spirit(&map, Some(*category)).as_str(),
                *spirit,
                "category {category}"
            );
        }
        assert_eq!(map.len(), 14);
        assert!(!map.is_empty());
    }

    #[test]
    fn test_documented_pairings() {
        let map = CategorySpiritMap::standard();
        assert_eq!(map_category_to_spirit(&map, Some("Seafood")).as_str(), "rum");
        assert_eq!(map_category_to_spirit(&map, Some("Beef")).as_str(), "whiskey");
        assert_eq!(map_category_to_spirit(&map, Some("Dessert")).as_str(), "amaretto");
        assert_eq!(map_category_to_spirit(&map, Some("Side")).as_str(), "brandy");
    }

    #[test]
    fn test_unmapped_empty_and_missing_categories_default_to_cola() {
        let map = CategorySpiritMap::standard();
        assert_eq!(map_category_to_spirit(&map, Some("Unknown")).as_str(), "cola");
        assert_eq!(map_category_to_spirit(&map, Some("")).as_str(), "cola");
        assert_eq!(map_category_to_spirit(&map, None).as_str(), "cola");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let map = CategorySpiritMap::standard();
        assert_eq!(map_category_to_spirit(&map, Some("seafood")).as_str(), "cola");
    }

    #[test]
    fn test_padded_category_is_not_in_the_table() {
        let map = CategorySpiritMap::standard();
        let meal: Meal = serde_json::from_value(json!({ "strCategory": " Seafood " })).unwrap();
        assert_eq!(map_category_to_spirit(&map, meal.category()).as_str(), "cola");
        assert_eq!(map_category_to_spirit(&map, Some("   ")).as_str(), "cola");
    }

    #[test]
    fn test_overrides_replace_and_extend() {
        let overrides = HashMap::from([
            ("Seafood".to_string(), "vodka".to_string()),
            ("Soup".to_string(), "sherry".to_string()),
        ]);
        let map = CategorySpiritMap::with_overrides(overrides);

        assert_eq!(map.spirit_for(Some("Seafood")).as_str(), "vodka");
        assert_eq!(map.spirit_for(Some("Soup")).as_str(), "sherry");
        assert_eq!(map.spirit_for(Some("Beef")).as_str(), "whiskey");
        assert_eq!(map.len(), 15);
    }

    #[test]
    fn test_load_overrides_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Pasta": "grappa"}}"#).unwrap();

        let map = CategorySpiritMap::load_overrides(file.path()).unwrap();
        assert_eq!(map.spirit_for(Some("Pasta")).as_str(), "grappa");
    }

    #[test]
    fn test_load_overrides_rejects_non_string_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Pasta": 3}}"#).unwrap();

        let err = CategorySpiritMap::load_overrides(file.path()).unwrap_err();
        assert!(matches!(err, MappingError::Json(_)));
    }

    #[test]
    fn test_load_overrides_missing_file() {
        let err =
            CategorySpiritMap::load_overrides(Path::new("/nonexistent/pairings.json")).unwrap_err();
        assert!(matches!(err, MappingError::Io(_)));
    }

    #[test]
    fn test_spirit_display() {
        assert_eq!(Spirit::new("rum").to_string(), "rum");
        assert_eq!(Spirit::default_spirit().as_str(), DEFAULT_SPIRIT);
    }
}
