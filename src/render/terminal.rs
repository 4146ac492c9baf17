//! Coloured terminal output.

use std::io::{self, Write};

use colored::*;
use log::warn;

use super::{cocktail_view, meal_view, Container, Element, Renderer};
use crate::config::{COCKTAIL_CONTAINER_ID, MEAL_CONTAINER_ID};
use crate::models::{Cocktail, Meal};

/// Writes each container to `out` as soon as it is rendered.
///
/// A meal therefore stays on screen even if the cocktail stage fails later.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl TerminalRenderer<io::Stdout> {
    /// Renders to standard output.
    pub fn stdout() -> Self {
        TerminalRenderer { out: io::stdout() }
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Renders to an arbitrary writer.
    pub fn new(out: W) -> Self {
        TerminalRenderer { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, id: &'static str, elements: Vec<Element>) {
        let mut container = Container::new(id);
        container.replace(elements);
        if let Err(e) = write_container(&mut self.out, &container) {
            warn!("Failed to write {}: {}", id, e);
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render_meal(&mut self, meal: &Meal) {
        self.emit(MEAL_CONTAINER_ID, meal_view(meal));
    }

    fn render_cocktail(&mut self, cocktail: &Cocktail) {
        self.emit(COCKTAIL_CONTAINER_ID, cocktail_view(cocktail));
    }
}

fn write_container<W: Write>(out: &mut W, container: &Container) -> io::Result<()> {
    for element in &container.elements {
        match element {
            Element::Title(text) => writeln!(out, "{}", text.bold().underline())?,
            Element::Image { src, .. } if src.is_empty() => {}
            Element::Image { src, .. } => writeln!(out, "{}", src.dimmed())?,
            Element::Heading(text) => writeln!(out, "\n{}", text.yellow())?,
            Element::Text(text) => writeln!(out, "{}", text)?,
            Element::List(items) => {
                for item in items {
                    writeln!(out, "  • {}", item)?;
                }
            }
        }
    }
    writeln!(out)?;
    out.flush()
}
