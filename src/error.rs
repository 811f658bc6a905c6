// src/error.rs

//! Error types for recipe loading and document generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building the cookbook
#[derive(Error, Debug)]
pub enum Error {
    /// Reading a recipe or writing a document failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Recipe file is not valid YAML or has the wrong shape
    #[error("Invalid recipe {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// Recipe record has no `name` field
    #[error("Recipe {} has no name", path.display())]
    MissingName { path: PathBuf },

    /// Two recipe names produce the same page slug
    #[error("Recipes '{first}' and '{second}' both map to page '{slug}'")]
    SlugCollision {
        slug: String,
        first: String,
        second: String,
    },

    /// Configuration file could not be read
    #[error("Failed to read configuration {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML
    #[error("Invalid configuration {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Result type for cookbook operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
