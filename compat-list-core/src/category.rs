use serde::{Deserialize, Serialize};

/// Compatibility categories an entry can be filtered by.
///
/// Every compatibility code falls into exactly one category (see
/// [`classify`](crate::classify)). The declaration order is the order used
/// for toggles, summaries and rendered checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Perfect,
    Playable,
    Unplayable,
    Untested,
}

/// All category variants in display order.
const ALL_CATEGORIES: &[Category] = &[
    Category::Perfect,
    Category::Playable,
    Category::Unplayable,
    Category::Untested,
];

impl Category {
    /// Canonical lower-case name used for CLI arguments and CSS classes.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::Playable => "playable",
            Self::Unplayable => "unplayable",
            Self::Untested => "untested",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Perfect => "Perfect",
            Self::Playable => "Playable",
            Self::Unplayable => "Unplayable",
            Self::Untested => "Untested",
        }
    }

    /// All accepted names for this category (case-insensitive matching).
    ///
    /// The canonical name comes first, followed by the rating labels that
    /// fall into the category so `--categories great` does what it says.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Perfect => &["perfect", "great"],
            Self::Playable => &["playable", "good", "ok"],
            Self::Unplayable => &["unplayable", "poor", "bad", "broken"],
            Self::Untested => &["untested", "unknown", "none"],
        }
    }

    /// All 4 category variants.
    pub fn all() -> &'static [Category] {
        ALL_CATEGORIES
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `Category`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl std::fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown category: '{}' (expected one of perfect, playable, unplayable, untested)",
            self.0
        )
    }
}

impl std::error::Error for CategoryParseError {}

impl std::str::FromStr for Category {
    type Err = CategoryParseError;

    /// Parse a category from its name or any alias (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_CATEGORIES
            .iter()
            .copied()
            .find(|category| category.aliases().contains(&lower.as_str()))
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/category_tests.rs"]
mod tests;
