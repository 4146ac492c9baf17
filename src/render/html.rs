//! HTML page output.

use std::fmt::Write as _;

use super::{cocktail_view, meal_view, Container, Element, Renderer};
use crate::config::{COCKTAIL_CONTAINER_ID, MEAL_CONTAINER_ID};
use crate::models::{Cocktail, Meal};

/// Renders into two in-memory containers and serialises them as a page.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    meal: Container,
    cocktail: Container,
}

impl HtmlRenderer {
    /// Both containers start empty.
    pub fn new() -> Self {
        HtmlRenderer {
            meal: Container::new(MEAL_CONTAINER_ID),
            cocktail: Container::new(COCKTAIL_CONTAINER_ID),
        }
    }

    /// The meal container.
    pub fn meal_container(&self) -> &Container {
        &self.meal
    }

    /// The cocktail container.
    pub fn cocktail_container(&self) -> &Container {
        &self.cocktail
    }

    /// Serialises a complete HTML document holding both containers.
    ///
    /// Containers that were never rendered are emitted empty.
    pub fn to_document(&self) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n<title>Meal &amp; Cocktail Pairing</title>\n");
        out.push_str("</head>\n<body>\n");
        write_container(&mut out, &self.meal);
        write_container(&mut out, &self.cocktail);
        out.push_str("</body>\n</html>\n");
        out
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HtmlRenderer {
    fn render_meal(&mut self, meal: &Meal) {
        self.meal.replace(meal_view(meal));
    }

    fn render_cocktail(&mut self, cocktail: &Cocktail) {
        self.cocktail.replace(cocktail_view(cocktail));
    }
}

fn write_container(out: &mut String, container: &Container) {
    // Writing to a String cannot fail
    let _ = writeln!(out, "<div id=\"{}\">", escape(container.id));
    for element in &container.elements {
        let _ = match element {
            Element::Title(text) => writeln!(out, "<h2>{}</h2>", escape(text)),
            Element::Image { src, alt } => writeln!(
                out,
                "<img src=\"{}\" alt=\"{}\">",
                escape(src),
                escape(alt)
            ),
            Element::Heading(text) => writeln!(out, "<h3>{}</h3>", escape(text)),
            Element::Text(text) => writeln!(out, "<p>{}</p>", escape(text)),
            Element::List(items) => {
                out.push_str("<ul>\n");
                for item in items {
                    let _ = writeln!(out, "<li>{}</li>", escape(item));
                }
                writeln!(out, "</ul>")
            }
        };
    }
    out.push_str("</div>\n");
}

/// Escapes text for use in element content and double-quoted attributes.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
