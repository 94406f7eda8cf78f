use thiserror::Error;

/// Errors produced while validating a compatibility dataset.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The document is not valid JSON at all
    #[error("Malformed JSON: {0}")]
    Json(#[source] serde_json::Error),

    /// The document parsed but its root is not an array of entries
    #[error("Expected a JSON array of entries, found {found}")]
    NotAnArray { found: &'static str },

    /// A single entry did not match the expected shape
    #[error("Invalid entry at index {index}: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl SchemaError {
    pub fn invalid_entry(index: usize, source: serde_json::Error) -> Self {
        Self::InvalidEntry { index, source }
    }

    /// Index of the offending entry, when the error is tied to one.
    pub fn entry_index(&self) -> Option<usize> {
        match self {
            Self::InvalidEntry { index, .. } => Some(*index),
            _ => None,
        }
    }
}
