// src/book.rs

//! Full generation pass: load records, then write every document
//!
//! Pages are written after the whole source directory has loaded, so a bad
//! record aborts the run before this run touches the output. Files left over
//! from earlier runs are never cleaned up.

use crate::catalog::Groups;
use crate::config::{BookConfig, CollisionPolicy};
use crate::error::{Error, Result};
use crate::recipe::{load_recipes, Recipe};
use crate::render::{
    render_equipment_index, render_ingredient_index, render_recipe_index, render_recipe_page,
    EQUIPMENT_INDEX_FILE, INGREDIENT_INDEX_FILE, RECIPE_INDEX_FILE,
};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Two recipes whose names produce the same slug
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugCollision {
    pub slug: String,
    /// Recipe whose page gets replaced
    pub first: String,
    /// Recipe whose page is kept
    pub second: String,
}

/// Summary of a generation run
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    /// Number of recipes loaded
    pub recipes: usize,
    /// Per-recipe pages written, in write order
    pub pages: Vec<PathBuf>,
    /// Distinct canonical ingredients
    pub ingredients: usize,
    /// Distinct equipment items
    pub equipment: usize,
    /// Slug collisions detected while planning pages
    pub collisions: Vec<SlugCollision>,
}

/// Find recipes sharing a slug, in load order
///
/// Each later duplicate is reported against the recipe it replaces.
pub fn find_collisions(recipes: &[Recipe]) -> Vec<SlugCollision> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut collisions = Vec::new();

    for recipe in recipes {
        let slug = recipe.slug();
        if let Some(previous) = seen.insert(slug.clone(), &recipe.name) {
            collisions.push(SlugCollision {
                slug,
                first: previous.to_string(),
                second: recipe.name.clone(),
            });
        }
    }

    collisions
}

/// Load recipes from the configured source and write all documents
pub fn generate(config: &BookConfig) -> Result<GenerateReport> {
    let recipes = load_recipes(&config.paths.source)?;
    write_book(&recipes, config)
}

/// Write pages and indices for an already loaded collection
pub fn write_book(recipes: &[Recipe], config: &BookConfig) -> Result<GenerateReport> {
    let collisions = find_collisions(recipes);
    for collision in &collisions {
        match config.render.on_collision {
            CollisionPolicy::Overwrite => debug!(
                "Page '{}' for '{}' replaced by '{}'",
                collision.slug, collision.first, collision.second
            ),
            CollisionPolicy::Warn => warn!(
                "Page '{}' for '{}' replaced by '{}'",
                collision.slug, collision.first, collision.second
            ),
            CollisionPolicy::Error => {
                return Err(Error::SlugCollision {
                    slug: collision.slug.clone(),
                    first: collision.first.clone(),
                    second: collision.second.clone(),
                });
            }
        }
    }

    let details_dir = &config.paths.details;
    let details_path = config.details_path();
    fs::create_dir_all(&details_path).map_err(|e| Error::io(&details_path, e))?;

    let mut pages = Vec::with_capacity(recipes.len());
    for recipe in recipes {
        let page = details_path.join(format!("{}.md", recipe.slug()));
        write_document(&page, &render_recipe_page(recipe))?;
        pages.push(page);
    }

    let output = &config.paths.output;
    write_document(
        &output.join(RECIPE_INDEX_FILE),
        &render_recipe_index(recipes, details_dir),
    )?;

    let ingredients = Groups::by_ingredient(recipes);
    write_document(
        &output.join(INGREDIENT_INDEX_FILE),
        &render_ingredient_index(&ingredients, details_dir),
    )?;

    let equipment = Groups::by_equipment(recipes);
    write_document(
        &output.join(EQUIPMENT_INDEX_FILE),
        &render_equipment_index(&equipment, details_dir, config.render.equipment_links),
    )?;

    info!(
        "Generated {} pages, {} ingredients, {} equipment items",
        pages.len(),
        ingredients.len(),
        equipment.len()
    );

    Ok(GenerateReport {
        recipes: recipes.len(),
        pages,
        ingredients: ingredients.len(),
        equipment: equipment.len(),
        collisions,
    })
}

fn write_document(path: &Path, content: &str) -> Result<()> {
    debug!("Writing {}", path.display());
    fs::write(path, content).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(output: &Path) -> BookConfig {
        let mut config = BookConfig::default();
        config.paths.output = output.to_path_buf();
        config
    }

    #[test]
    fn test_find_collisions() {
        let recipes = vec![
            Recipe::new("Mac & Cheese"),
            Recipe::new("Tea"),
            Recipe::new("mac  cheese"),
        ];
        let collisions = find_collisions(&recipes);
        assert_eq!(
            collisions,
            vec![SlugCollision {
                slug: "mac--cheese".to_string(),
                first: "Mac & Cheese".to_string(),
                second: "mac  cheese".to_string(),
            }]
        );
    }

    #[test]
    fn test_no_collisions() {
        let recipes = vec![Recipe::new("Toast"), Recipe::new("Tea")];
        assert!(find_collisions(&recipes).is_empty());
    }

    #[test]
    fn test_collision_overwrites_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let mut first = Recipe::new("Toast!");
        first.notes = vec!["first".into()];
        let mut second = Recipe::new("toast");
        second.notes = vec!["second".into()];

        let report = write_book(&[first, second], &config_for(dir.path())).unwrap();
        assert_eq!(report.collisions.len(), 1);

        let page = fs::read_to_string(dir.path().join("recipe_details/toast.md")).unwrap();
        assert!(page.starts_with("# toast\n"));
        assert!(page.contains("- second\n"));

        let index = fs::read_to_string(dir.path().join("recipes.md")).unwrap();
        assert!(index.contains("- [Toast!](recipe_details/toast.md)\n"));
        assert!(index.contains("- [toast](recipe_details/toast.md)\n"));
    }

    #[test]
    fn test_collision_error_policy_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_for(dir.path());
        config.render.on_collision = CollisionPolicy::Error;

        let err = write_book(&[Recipe::new("Tea"), Recipe::new("TEA")], &config).unwrap_err();
        assert!(matches!(err, Error::SlugCollision { .. }));
        assert!(!dir.path().join("recipe_details").exists());
        assert!(!dir.path().join("recipes.md").exists());
    }

    #[test]
    fn test_write_book_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let report = write_book(&[], &config_for(dir.path())).unwrap();
        assert_eq!(report.recipes, 0);
        assert!(report.pages.is_empty());
        assert!(dir.path().join("recipe_details").is_dir());
        assert_eq!(
            fs::read_to_string(dir.path().join("equipment.md")).unwrap(),
            "# Equipment\n\n"
        );
    }
}
