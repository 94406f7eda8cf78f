use std::path::PathBuf;

use thiserror::Error;

use compat_list_core::SchemaError;

/// Errors from fetching the raw bytes of a dataset.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or body read failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered, but not with a success status
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// Reading a local dataset failed
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors from loading the collection into a controller.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Neither the primary nor the fallback location could be fetched
    #[error("Dataset unavailable (primary: {primary}; fallback: {fallback})")]
    Unavailable {
        primary: FetchError,
        fallback: FetchError,
    },

    /// The dataset was fetched but does not have the expected shape
    #[error("Invalid dataset from {location}: {source}")]
    Schema {
        location: String,
        #[source]
        source: SchemaError,
    },

    /// A controller only ever loads once
    #[error("Dataset has already been loaded")]
    AlreadyLoaded,
}

/// Errors from reading or writing the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid setting {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Error returned when a string cannot be parsed into a [`Location`](crate::Location).
#[derive(Debug, Error)]
#[error("invalid location '{input}': {reason}")]
pub struct LocationParseError {
    pub input: String,
    pub reason: String,
}

impl LocationParseError {
    pub fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
