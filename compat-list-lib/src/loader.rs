//! One-shot dataset loading with a single fallback.
//!
//! The primary location is tried first. Any fetch failure (network error,
//! timeout, non-success status, unreadable file) moves on to the fallback,
//! exactly once. Validation failures are not retried: a body that was
//! fetched but is malformed is reported as a schema error.

use compat_list_core::util::format_bytes_approx;
use compat_list_core::{Entry, parse_entries};

use crate::error::LoadError;
use crate::source::{DataSources, Fetcher, Location};

/// Which of the two configured locations supplied the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Primary,
    Fallback,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// A successfully loaded and validated collection.
#[derive(Debug, Clone)]
pub struct LoadedData {
    pub entries: Vec<Entry>,
    pub origin: SourceKind,
    pub location: Location,
    /// Size of the raw document in bytes
    pub size: u64,
}

/// Fetch the raw dataset, trying the fallback once if the primary fails.
pub async fn fetch_with_fallback<F: Fetcher>(
    fetcher: &F,
    sources: &DataSources,
) -> Result<(SourceKind, Vec<u8>), LoadError> {
    let primary_err = match fetcher.fetch(&sources.primary).await {
        Ok(bytes) => return Ok((SourceKind::Primary, bytes)),
        Err(e) => e,
    };

    log::warn!(
        "Primary fetch from {} failed, trying fallback {}: {primary_err}",
        sources.primary,
        sources.fallback,
    );

    match fetcher.fetch(&sources.fallback).await {
        Ok(bytes) => Ok((SourceKind::Fallback, bytes)),
        Err(fallback_err) => Err(LoadError::Unavailable {
            primary: primary_err,
            fallback: fallback_err,
        }),
    }
}

/// Fetch and validate the dataset.
pub async fn load_entries<F: Fetcher>(
    fetcher: &F,
    sources: &DataSources,
) -> Result<LoadedData, LoadError> {
    let (origin, bytes) = fetch_with_fallback(fetcher, sources).await?;
    let location = match origin {
        SourceKind::Primary => sources.primary.clone(),
        SourceKind::Fallback => sources.fallback.clone(),
    };

    let entries = parse_entries(&bytes).map_err(|source| LoadError::Schema {
        location: location.to_string(),
        source,
    })?;

    log::debug!(
        "Loaded {} entries ({}) from {origin} source {location}",
        entries.len(),
        format_bytes_approx(bytes.len() as u64),
    );

    Ok(LoadedData {
        entries,
        origin,
        location,
        size: bytes.len() as u64,
    })
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
