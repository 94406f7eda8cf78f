//! Compatibility code classification.
//!
//! Codes are small integers written by testers: `0` (best) through `5`
//! (worst), plus `99` for titles nobody has tested yet. Anything else is
//! treated as an unknown outcome and grouped with the untested titles.
//!
//! Categories come from the same fixed table as the labels. Open-ended
//! bands ("<= 1 is perfect", "everything above 3 is unplayable") are not
//! used: they would file a negative code under perfect and `6` or `150`
//! under unplayable while the badge says "Unknown".

use crate::Category;

/// Code used by the dataset for titles with no test report.
pub const UNTESTED_CODE: i64 = 99;

/// Per-code rating, the finer-grained label shown on a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rating {
    Perfect,
    Great,
    Good,
    Ok,
    Poor,
    Bad,
    Untested,
    /// A code outside the known set.
    Unknown,
}

const ALL_RATINGS: &[Rating] = &[
    Rating::Perfect,
    Rating::Great,
    Rating::Good,
    Rating::Ok,
    Rating::Poor,
    Rating::Bad,
    Rating::Untested,
    Rating::Unknown,
];

impl Rating {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Perfect,
            1 => Self::Great,
            2 => Self::Good,
            3 => Self::Ok,
            4 => Self::Poor,
            5 => Self::Bad,
            UNTESTED_CODE => Self::Untested,
            _ => Self::Unknown,
        }
    }

    /// The code this rating is written as, or `None` for [`Rating::Unknown`].
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Perfect => Some(0),
            Self::Great => Some(1),
            Self::Good => Some(2),
            Self::Ok => Some(3),
            Self::Poor => Some(4),
            Self::Bad => Some(5),
            Self::Untested => Some(UNTESTED_CODE),
            Self::Unknown => None,
        }
    }

    /// Badge label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Perfect => "Perfect",
            Self::Great => "Great",
            Self::Good => "Good",
            Self::Ok => "OK",
            Self::Poor => "Poor",
            Self::Bad => "Bad",
            Self::Untested => "Untested",
            Self::Unknown => "Unknown",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Self::Perfect | Self::Great => Category::Perfect,
            Self::Good | Self::Ok => Category::Playable,
            Self::Poor | Self::Bad => Category::Unplayable,
            Self::Untested | Self::Unknown => Category::Untested,
        }
    }

    pub fn all() -> &'static [Rating] {
        ALL_RATINGS
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of classifying a compatibility code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub code: i64,
    pub rating: Rating,
    pub category: Category,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        self.rating.label()
    }

    /// Badge text, e.g. `"Great (1)"`.
    pub fn badge_text(&self) -> String {
        format!("{} ({})", self.rating.label(), self.code)
    }
}

/// Map a compatibility code to its category and label.
pub fn classify(code: i64) -> Classification {
    let rating = Rating::from_code(code);
    Classification {
        code,
        rating,
        category: rating.category(),
    }
}

#[cfg(test)]
#[path = "tests/rating_tests.rs"]
mod tests;
