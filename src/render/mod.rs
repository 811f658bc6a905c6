// src/render/mod.rs

//! Markdown rendering for recipe pages and index documents
//!
//! Every renderer returns the full document as a `String`; writing it to disk
//! is left to [`crate::book`]. Renderers only depend on each other through
//! page links, which are derived from slugs.

mod equipment;
mod index;
mod ingredients;
mod page;

pub use equipment::render_equipment_index;
pub use index::render_recipe_index;
pub use ingredients::render_ingredient_index;
pub use page::render_recipe_page;

/// File name of the top-level recipe listing
pub const RECIPE_INDEX_FILE: &str = "recipes.md";

/// File name of the ingredient cross-reference
pub const INGREDIENT_INDEX_FILE: &str = "ingredients.md";

/// File name of the equipment listing
pub const EQUIPMENT_INDEX_FILE: &str = "equipment.md";

/// Incremental builder for the small subset of Markdown we emit
#[derive(Debug, Default)]
pub(crate) struct Markdown {
    buf: String,
    in_section: bool,
}

impl Markdown {
    /// Start a document with a `#` title
    pub fn titled(title: &str) -> Self {
        let mut md = Self::default();
        md.buf.push_str(&format!("# {}\n\n", title));
        md
    }

    /// Open a `##` section, separated from the previous one by a blank line
    pub fn section(&mut self, heading: &str) {
        if self.in_section {
            self.blank();
        }
        self.buf.push_str(&format!("## {}\n\n", heading));
        self.in_section = true;
    }

    /// Plain list item
    pub fn item(&mut self, text: &str) {
        self.buf.push_str(&format!("- {}\n", text));
    }

    /// List item holding a single link
    pub fn link_item(&mut self, label: &str, target: &str) {
        self.item(&link(label, target));
    }

    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Inline Markdown link
pub(crate) fn link(label: &str, target: &str) -> String {
    format!("[{}]({})", label, target)
}
