// src/render/page.rs

//! Per-recipe pages

use super::Markdown;
use crate::recipe::Recipe;

/// Render the standalone page for one recipe
///
/// Sections always appear in the order Ingredients, Equipment, Notes, with
/// entries verbatim and in their original order. Empty sections keep their
/// heading.
pub fn render_recipe_page(recipe: &Recipe) -> String {
    let mut md = Markdown::titled(&recipe.name);

    let sections = [
        ("Ingredients", &recipe.ingredients),
        ("Equipment", &recipe.equipment),
        ("Notes", &recipe.notes),
    ];
    for (heading, entries) in sections {
        md.section(heading);
        for entry in entries {
            md.item(entry);
        }
    }

    md.finish()
}
