// src/lib.rs

//! Cookbook generator
//!
//! Turns a directory of YAML recipe records into cross-linked Markdown:
//! one page per recipe, a sorted recipe listing, and indices grouping recipes
//! by ingredient and by equipment.
//!
//! # Pipeline
//!
//! - Load: every `*.yaml` / `*.yml` record in the source directory
//! - Slug: each recipe name becomes the stem of its page and its links
//! - Render: pages and indices are plain strings built from the loaded records
//! - Write: documents land under the output root, overwriting previous runs
//!
//! The whole run is a single synchronous pass over an immutable collection.

pub mod book;
pub mod catalog;
pub mod config;
mod error;
pub mod ingredient;
pub mod recipe;
pub mod render;
pub mod slug;

pub use book::{find_collisions, generate, write_book, GenerateReport, SlugCollision};
pub use catalog::{sort_recipes, Groups};
pub use config::{BookConfig, CollisionPolicy, PathsConfig, RenderConfig, DEFAULT_CONFIG_PATH};
pub use error::{Error, Result};
pub use ingredient::canonical_ingredient;
pub use recipe::{load_recipes, parse_recipe, parse_recipe_file, Recipe};
pub use slug::slug;
