// src/recipe/format.rs

//! Recipe record definitions
//!
//! Records are YAML mappings. Only `name` is required; the list fields default
//! to empty when absent or null. List entries are plain text, but YAML scalars
//! such as `2`, `1.0` or `true` are accepted and kept in their textual form.
//! A null entry becomes an empty string.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A single recipe loaded from the source directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    /// Display name, also the seed for the page slug
    pub name: String,

    /// Ingredient lines, possibly with a parenthetical quantity
    pub ingredients: Vec<String>,

    /// Equipment items, used verbatim
    pub equipment: Vec<String>,

    /// Free-form notes, used verbatim
    pub notes: Vec<String>,

    /// File the record was read from
    #[serde(skip)]
    pub source: PathBuf,
}

impl Recipe {
    /// Create a recipe with empty lists
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
            equipment: Vec::new(),
            notes: Vec::new(),
            source: PathBuf::new(),
        }
    }

    /// Page slug for this recipe
    pub fn slug(&self) -> String {
        crate::slug::slug(&self.name)
    }

    /// Link target of this recipe's page, relative to the output root
    pub fn page_link(&self, details_dir: &str) -> String {
        format!("{}/{}.md", details_dir, self.slug())
    }
}

/// Raw document shape as it appears on disk
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RecipeDocument {
    #[serde(default, deserialize_with = "optional_text")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "text_list")]
    pub ingredients: Vec<String>,

    #[serde(default, deserialize_with = "text_list")]
    pub equipment: Vec<String>,

    #[serde(default, deserialize_with = "text_list")]
    pub notes: Vec<String>,
}

/// A YAML scalar read back as text
struct Text(String);

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TextVisitor;

        impl Visitor<'_> for TextVisitor {
            type Value = Text;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string, number, or boolean")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Text, E> {
                Ok(Text(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Text, E> {
                Ok(Text(v))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Text, E> {
                Ok(Text(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Text, E> {
                Ok(Text(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Text, E> {
                Ok(Text(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Text, E> {
                // Debug keeps the fractional part: 1.0 stays "1.0"
                Ok(Text(format!("{:?}", v)))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Text, E> {
                Ok(Text(String::new()))
            }

            fn visit_none<E: de::Error>(self) -> Result<Text, E> {
                Ok(Text(String::new()))
            }
        }

        deserializer.deserialize_any(TextVisitor)
    }
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Text>::deserialize(deserializer)?.map(|t| t.0))
}

fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<Text>>::deserialize(deserializer)?;
    Ok(items.unwrap_or_default().into_iter().map(|t| t.0).collect())
}
