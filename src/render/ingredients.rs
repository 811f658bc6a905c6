// src/render/ingredients.rs

//! Ingredient cross-reference

use super::Markdown;
use crate::catalog::Groups;

/// Render `ingredients.md`: one section per canonical ingredient
pub fn render_ingredient_index(groups: &Groups<'_>, details_dir: &str) -> String {
    let mut md = Markdown::titled("Ingredients");
    for (ingredient, recipes) in groups.sections() {
        md.section(ingredient);
        for recipe in recipes {
            md.link_item(&recipe.name, &recipe.page_link(details_dir));
        }
    }
    md.finish()
}
