// src/render/index.rs

//! Top-level recipe listing

use super::{Markdown, EQUIPMENT_INDEX_FILE, INGREDIENT_INDEX_FILE};
use crate::catalog::sort_recipes;
use crate::recipe::Recipe;

/// Render `recipes.md`: every recipe sorted by name, then the two indices
pub fn render_recipe_index(recipes: &[Recipe], details_dir: &str) -> String {
    let mut sorted: Vec<&Recipe> = recipes.iter().collect();
    sort_recipes(&mut sorted);

    let mut md = Markdown::titled("Recipes");
    for recipe in sorted {
        md.link_item(&recipe.name, &recipe.page_link(details_dir));
    }

    md.blank();
    md.link_item("Ingredients", INGREDIENT_INDEX_FILE);
    md.link_item("Equipment", EQUIPMENT_INDEX_FILE);

    md.finish()
}
