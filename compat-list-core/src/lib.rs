use serde::{Deserialize, Deserializer, Serialize};

pub mod category;
pub mod error;
pub mod rating;
pub mod schema;
pub mod util;

pub use category::{Category, CategoryParseError};
pub use error::SchemaError;
pub use rating::{Classification, Rating, UNTESTED_CODE, classify};
pub use schema::parse_entries;

/// Placeholder shown when an entry has no release to take an id from.
pub const MISSING_ID: &str = "N/A";

/// One catalog item: a tested title and its compatibility code.
///
/// Entries are immutable once loaded. Fields other than the ones below are
/// accepted and ignored so the dataset can grow without breaking readers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Display title (e.g., "The Legend of Zelda: Ocarina of Time 3D")
    pub title: String,

    /// Raw compatibility code, see [`classify`]
    pub compatibility: i64,

    /// Regional releases, in dataset order. A missing or `null` list is empty.
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub releases: Vec<Release>,
}

impl Entry {
    pub fn new(title: impl Into<String>, compatibility: i64) -> Self {
        Self {
            title: title.into(),
            compatibility,
            releases: Vec::new(),
        }
    }

    pub fn with_release(mut self, id: impl Into<String>) -> Self {
        self.releases.push(Release::new(id));
        self
    }

    pub fn classification(&self) -> Classification {
        classify(self.compatibility)
    }

    pub fn category(&self) -> Category {
        self.classification().category
    }

    /// Id of the first release, used as the entry's representative id.
    pub fn primary_id(&self) -> Option<&str> {
        self.releases.first().map(|r| r.id.as_str())
    }

    pub fn release_ids(&self) -> impl Iterator<Item = &str> {
        self.releases.iter().map(|r| r.id.as_str())
    }
}

/// A single regional release of an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    /// Title id (e.g., "00040000001B8700")
    pub id: String,

    /// Any additional per-release fields, preserved verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Release {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            extra: serde_json::Map::new(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Release>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Release>>::deserialize(deserializer)?.unwrap_or_default())
}
