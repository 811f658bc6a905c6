// src/slug.rs

//! Page slugs derived from recipe names
//!
//! A slug is used both as the page file name and as the link target, so it
//! must stay stable for a given name. Distinct names can map to the same slug;
//! see [`crate::config::CollisionPolicy`] for how that is handled.

/// Convert a display name into an identifier-safe slug.
///
/// Lowercases the text, turns every space into a hyphen, then drops any
/// character that is not a letter, digit, underscore, or hyphen.
pub fn slug(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|&c| c.is_alphanumeric() || c == '_' || c == '-')
        .collect()
}
