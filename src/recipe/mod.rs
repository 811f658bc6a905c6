// src/recipe/mod.rs

//! Recipe records and how they are read from disk
//!
//! Each record is a YAML file holding a single recipe:
//!
//! ```yaml
//! name: Tea
//! ingredients:
//!   - Water (1 cup)
//!   - Tea Bag
//! equipment:
//!   - Kettle
//! notes:
//!   - Steep 3 min
//! ```
//!
//! Only `name` is required. The loader returns records in file name order;
//! consumers sort them as they need.

mod format;
pub mod loader;
pub mod parser;

pub use format::Recipe;
pub use loader::{is_recipe_file, load_recipes, RECIPE_EXTENSIONS};
pub use parser::{parse_recipe, parse_recipe_file};
