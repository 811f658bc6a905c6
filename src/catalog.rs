// src/catalog.rs

//! Cross-reference groups over the loaded recipes
//!
//! Ingredients are grouped by their canonical name so that `"Flour (2 cups)"`
//! and `"Flour"` land in the same group. Equipment is grouped by the raw
//! string. A recipe listing the same key twice appears twice in that group.

use crate::ingredient::canonical_ingredient;
use crate::recipe::Recipe;
use std::collections::BTreeMap;

/// Sort recipes by name ignoring case, keeping input order for ties
pub fn sort_recipes(recipes: &mut [&Recipe]) {
    recipes.sort_by_cached_key(|r| r.name.to_lowercase());
}

/// Recipes grouped under a shared key
#[derive(Debug, Clone, Default)]
pub struct Groups<'a> {
    entries: BTreeMap<&'a str, Vec<&'a Recipe>>,
}

impl<'a> Groups<'a> {
    /// Group recipes by canonical ingredient name
    pub fn by_ingredient(recipes: &'a [Recipe]) -> Self {
        Self::collect(recipes, |r| {
            r.ingredients.iter().map(|i| canonical_ingredient(i)).collect()
        })
    }

    /// Group recipes by exact equipment string
    pub fn by_equipment(recipes: &'a [Recipe]) -> Self {
        Self::collect(recipes, |r| r.equipment.iter().map(String::as_str).collect())
    }

    fn collect<F>(recipes: &'a [Recipe], keys: F) -> Self
    where
        F: Fn(&'a Recipe) -> Vec<&'a str>,
    {
        let mut entries: BTreeMap<&'a str, Vec<&'a Recipe>> = BTreeMap::new();
        for recipe in recipes {
            for key in keys(recipe) {
                entries.entry(key).or_default().push(recipe);
            }
        }
        Self { entries }
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recipes recorded under `key`, in load order
    pub fn get(&self, key: &str) -> Option<&[&'a Recipe]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Keys and their recipes, both sorted case-insensitively
    ///
    /// Keys that only differ in case keep their byte order.
    pub fn sections(&self) -> Vec<(&'a str, Vec<&'a Recipe>)> {
        let mut sections: Vec<_> = self
            .entries
            .iter()
            .map(|(key, recipes)| {
                let mut recipes = recipes.clone();
                sort_recipes(&mut recipes);
                (*key, recipes)
            })
            .collect();
        sections.sort_by_cached_key(|(key, _)| key.to_lowercase());
        sections
    }
}
