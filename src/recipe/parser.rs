// src/recipe/parser.rs

//! Recipe file parsing

use crate::error::{Error, Result};
use crate::recipe::format::{Recipe, RecipeDocument};
use std::path::Path;

/// Parse a recipe from a YAML string
///
/// `path` is only used to label errors and is stored on the recipe.
pub fn parse_recipe(content: &str, path: &Path) -> Result<Recipe> {
    let doc: Option<RecipeDocument> = serde_yaml::from_str(content).map_err(|e| Error::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    let doc = doc.unwrap_or_default();

    let name = doc.name.ok_or_else(|| Error::MissingName {
        path: path.to_path_buf(),
    })?;

    Ok(Recipe {
        name,
        ingredients: doc.ingredients,
        equipment: doc.equipment,
        notes: doc.notes,
        source: path.to_path_buf(),
    })
}

/// Parse a recipe from a file
pub fn parse_recipe_file(path: &Path) -> Result<Recipe> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_recipe(&content, path)
}
