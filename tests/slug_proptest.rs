// tests/slug_proptest.rs

//! Property-based tests for slugs and canonical ingredient names

use cookbook::{canonical_ingredient, slug};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_slug_idempotent(text in "[a-zA-Z0-9 _.,!?&'éÉ-]{0,40}") {
        let once = slug(&text);
        prop_assert_eq!(slug(&once), once.clone());
    }

    #[test]
    fn test_slug_ignores_ascii_case(text in "[a-zA-Z0-9 _-]{0,40}") {
        prop_assert_eq!(slug(&text), slug(&text.to_ascii_lowercase()));
        prop_assert_eq!(slug(&text), slug(&text.to_ascii_uppercase()));
    }

    #[test]
    fn test_slug_charset(text in "\\PC{0,40}") {
        let s = slug(&text);
        prop_assert!(!s.contains(' '));
        prop_assert!(s.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-'));
    }

    #[test]
    fn test_canonical_ingredient_drops_annotation(
        name in "[A-Za-z][A-Za-z ]{0,20}",
        note in "[^()]{0,20}",
    ) {
        let line = format!("{} ({})", name, note);
        prop_assert_eq!(canonical_ingredient(&line), name.trim());
    }
}
