//! Presentation of meals and cocktails.
//!
//! Fetching code only sees the `Renderer` trait. Both concrete renderers share
//! the same view model: a named `Container` holding a list of `Element`s that
//! is cleared and rebuilt on every render.

mod html;
mod terminal;

pub use html::HtmlRenderer;
pub use terminal::TerminalRenderer;

use crate::models::{Cocktail, Ingredient, Meal};

/// Output sink for the two rendering steps.
pub trait Renderer {
    /// Replaces the meal container's content with `meal`.
    fn render_meal(&mut self, meal: &Meal);

    /// Replaces the cocktail container's content with `cocktail`.
    fn render_cocktail(&mut self, cocktail: &Cocktail);
}

/// One block of rendered content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Record name (`h2`)
    Title(String),
    /// Thumbnail with alt text
    Image { src: String, alt: String },
    /// Section heading (`h3`)
    Heading(String),
    /// Paragraph of text
    Text(String),
    /// Bulleted list
    List(Vec<String>),
}

/// A named output region, rewritten wholesale on each update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub id: &'static str,
    pub elements: Vec<Element>,
}

impl Container {
    /// An empty container.
    pub fn new(id: &'static str) -> Self {
        Container {
            id,
            elements: Vec::new(),
        }
    }

    /// Removes all content.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Clears the container, then fills it with `elements`.
    pub fn replace(&mut self, elements: Vec<Element>) {
        self.clear();
        self.elements.extend(elements);
    }
}

/// Builds the meal view: title, image, category line, ingredients, instructions.
///
/// The category line is omitted when the meal has no (or a blank) category.
pub fn meal_view(meal: &Meal) -> Vec<Element> {
    let mut elements = vec![
        Element::Title(meal.name().to_string()),
        Element::Image {
            src: meal.thumbnail.clone().unwrap_or_default(),
            alt: meal.name().to_string(),
        },
    ];
    if let Some(category) = meal.category() {
        elements.push(Element::Text(format!("Category: {category}")));
    }
    elements.extend(recipe_body(&meal.ingredients(), meal.instructions()));
    elements
}

/// Builds the cocktail view: title, image, ingredients, instructions.
pub fn cocktail_view(cocktail: &Cocktail) -> Vec<Element> {
    let mut elements = vec![
        Element::Title(cocktail.name().to_string()),
        Element::Image {
            src: cocktail.thumbnail.clone().unwrap_or_default(),
            alt: cocktail.name().to_string(),
        },
    ];
    elements.extend(recipe_body(&cocktail.ingredients(), cocktail.instructions()));
    elements
}

fn recipe_body(ingredients: &[Ingredient], instructions: &str) -> [Element; 4] {
    [
        Element::Heading("Ingredients:".to_string()),
        Element::List(ingredients.iter().map(Ingredient::line).collect()),
        Element::Heading("Instructions:".to_string()),
        Element::Text(instructions.to_string()),
    ]
}
