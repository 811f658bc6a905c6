// src/config.rs

//! Generator configuration
//!
//! Every setting has a default matching the plain no-argument run, so the
//! configuration file is optional:
//!
//! ```toml
//! [paths]
//! source = "data"
//! output = "."
//! details = "recipe_details"
//!
//! [render]
//! equipment_links = false
//! on_collision = "overwrite"   # overwrite | warn | error
//! ```
//!
//! Command-line flags are applied on top of the loaded file.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "cookbook.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookConfig {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

/// Where records are read from and documents written to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Directory holding the recipe YAML files
    pub source: PathBuf,

    /// Root receiving `recipes.md`, `ingredients.md` and `equipment.md`
    pub output: PathBuf,

    /// Per-recipe page directory, relative to `output`; also used in links
    pub details: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("data"),
            output: PathBuf::from("."),
            details: "recipe_details".to_string(),
        }
    }
}

/// Rendering options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// List the recipes using each item in `equipment.md`
    pub equipment_links: bool,

    /// What to do when two recipe names share a slug
    pub on_collision: CollisionPolicy,
}

/// Handling of recipe names that map to the same page
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// Later recipe silently replaces the earlier page
    #[default]
    Overwrite,
    /// Later recipe replaces the earlier page and a warning is logged
    Warn,
    /// Abort before any page is written
    Error,
}

impl BookConfig {
    /// Parse a configuration from a TOML string
    pub fn from_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load configuration from a file that must exist
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content, path)
    }

    /// Load `path` if given, else [`DEFAULT_CONFIG_PATH`] when present, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if default.is_file() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Directory receiving per-recipe pages
    pub fn details_path(&self) -> PathBuf {
        self.paths.output.join(&self.paths.details)
    }
}
