// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use cookbook::BookConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TOAST_YAML: &str = r#"name: Toast
ingredients:
  - Bread (2 slices)
equipment:
  - Toaster
notes: []
"#;

pub const TEA_YAML: &str = r#"name: Tea
ingredients:
  - Water (1 cup)
  - Tea Bag
equipment:
  - Kettle
notes:
  - Steep 3 min
"#;

/// A temporary workspace with a `data` source directory and an `out` root.
///
/// Keep the value alive for the duration of the test to prevent cleanup.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("data")).unwrap();
        Self { dir }
    }

    /// Workspace seeded with the Toast and Tea records
    pub fn breakfast() -> Self {
        let ws = Self::new();
        ws.add_record("toast.yaml", TOAST_YAML);
        ws.add_record("tea.yaml", TEA_YAML);
        ws
    }

    pub fn source(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    pub fn output(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    pub fn add_record(&self, file_name: &str, content: &str) {
        fs::write(self.source().join(file_name), content).unwrap();
    }

    pub fn config(&self) -> BookConfig {
        let mut config = BookConfig::default();
        config.paths.source = self.source();
        config.paths.output = self.output();
        config
    }

    /// Read a generated document relative to the output root
    pub fn read(&self, relative: impl AsRef<Path>) -> String {
        fs::read_to_string(self.output().join(relative)).unwrap()
    }
}

/// Recipe names listed in a `recipes.md` document, in order
pub fn index_names(index: &str) -> Vec<String> {
    index
        .lines()
        .filter_map(|line| line.strip_prefix("- ["))
        .filter_map(|rest| rest.split_once("](recipe_details/"))
        .map(|(name, _)| name.to_string())
        .collect()
}
