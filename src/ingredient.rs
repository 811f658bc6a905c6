// src/ingredient.rs

//! Canonical ingredient names used as grouping keys

/// Recover the ingredient name from a line such as `"Flour (2 cups)"`.
///
/// Everything from the first `(` on is dropped and the rest trimmed. Lines
/// without a parenthesis are only trimmed.
pub fn canonical_ingredient(line: &str) -> &str {
    match line.find('(') {
        Some(pos) => line[..pos].trim(),
        None => line.trim(),
    }
}
