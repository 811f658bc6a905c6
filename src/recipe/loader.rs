// src/recipe/loader.rs

//! Loading every recipe record from a source directory

use crate::error::{Error, Result};
use crate::recipe::format::Recipe;
use crate::recipe::parser::parse_recipe_file;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// File extensions recognized as recipe records
pub const RECIPE_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Check whether a file name carries a recipe extension (case-insensitive)
pub fn is_recipe_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            RECIPE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Load all recipes found directly inside `dir`
///
/// Entries are visited in file name order so repeated runs see the same
/// sequence. Symlinked records are followed. Subdirectories and files with
/// other extensions are skipped. `dir` itself must be a directory.
/// The first unreadable or invalid record aborts the load.
pub fn load_recipes(dir: &Path) -> Result<Vec<Recipe>> {
    info!("Loading recipes from {}", dir.display());

    let metadata = fs::metadata(dir).map_err(|e| Error::io(dir, e))?;
    if !metadata.is_dir() {
        return Err(Error::io(
            dir,
            io::Error::new(io::ErrorKind::NotADirectory, "recipe source is not a directory"),
        ));
    }

    let mut recipes = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| io::Error::other("directory walk failed"));
            Error::Io { path, source }
        })?;

        let path = entry.path();
        if !entry.file_type().is_file() || !is_recipe_file(path) {
            debug!("Skipping {}", path.display());
            continue;
        }

        let recipe = parse_recipe_file(path)?;
        debug!("Loaded recipe '{}' from {}", recipe.name, path.display());
        recipes.push(recipe);
    }

    info!("Loaded {} recipes", recipes.len());
    Ok(recipes)
}
