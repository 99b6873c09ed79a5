//! Category entity model and display-name formatting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An item category.
///
/// Items reference categories by slug as free text, not by foreign key;
/// the table exists for catalog browsing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique category identifier.
    pub id: i64,
    /// URL-safe slug, e.g. `cleaning-materials`.
    pub slug: String,
    /// Human-readable name, e.g. `Cleaning Materials`.
    pub name: String,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategory {
    /// URL-safe slug.
    pub slug: String,
    /// Human-readable name.
    pub name: String,
}

/// Known slug-to-display-name overrides.
///
/// Every formatting path goes through [`display_name`]; slugs not listed
/// here fall back to title-casing the hyphenated words.
const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("cleaning-materials", "Cleaning Materials"),
    ("office-supplies", "Office Supplies"),
    ("atk", "ATK (Alat Tulis Kantor)"),
    ("electronics", "Electronics"),
    ("tools", "Tools"),
    ("safety-equipment", "Safety Equipment"),
];

/// Format a category slug for display.
pub fn display_name(slug: &str) -> String {
    let normalized = slug.trim().to_lowercase();
    if let Some((_, name)) = DISPLAY_NAMES.iter().find(|(s, _)| *s == normalized) {
        return (*name).to_string();
    }
    normalized
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_slugs() {
        assert_eq!(display_name("cleaning-materials"), "Cleaning Materials");
        assert_eq!(display_name("ATK"), "ATK (Alat Tulis Kantor)");
    }

    #[test]
    fn test_fallback_title_case() {
        assert_eq!(display_name("spare-parts"), "Spare Parts");
        assert_eq!(display_name("misc"), "Misc");
        assert_eq!(display_name(" tools "), "Tools");
    }
}
