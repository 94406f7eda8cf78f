//! Dataset locations and the fetchers that read them.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Url;

use crate::error::{FetchError, LocationParseError};

/// Upstream compatibility list maintained by the Azahar project.
pub const DEFAULT_PRIMARY_URL: &str =
    "https://raw.githubusercontent.com/azahar-emu/compatibility-list/master/compatibility_list.json";

/// Local copy read when the upstream list cannot be fetched.
pub const DEFAULT_FALLBACK_PATH: &str = "./compatibility_list.json";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const DEFAULT_USER_AGENT: &str = concat!("compat-list/", env!("CARGO_PKG_VERSION"));

/// Where a dataset can be read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// An `http://` or `https://` URL
    Remote(Url),
    /// A file on the local filesystem
    Local(PathBuf),
}

impl Location {
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{url}"),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

impl std::str::FromStr for Location {
    type Err = LocationParseError;

    /// URLs with an `http`/`https` scheme are remote, `file://` URLs and
    /// everything else are local paths.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(LocationParseError::new(s, "empty location"));
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = Url::parse(trimmed).map_err(|e| LocationParseError::new(s, e.to_string()))?;
            return Ok(Self::Remote(url));
        }
        if lower.starts_with("file://") {
            let url = Url::parse(trimmed).map_err(|e| LocationParseError::new(s, e.to_string()))?;
            let path = url
                .to_file_path()
                .map_err(|_| LocationParseError::new(s, "not a usable file URL"))?;
            return Ok(Self::Local(path));
        }
        Ok(Self::Local(PathBuf::from(trimmed)))
    }
}

/// The primary location and the single fallback tried after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSources {
    pub primary: Location,
    pub fallback: Location,
}

impl DataSources {
    pub fn new(primary: Location, fallback: Location) -> Self {
        Self { primary, fallback }
    }
}

impl Default for DataSources {
    fn default() -> Self {
        Self {
            primary: Location::Remote(
                Url::parse(DEFAULT_PRIMARY_URL).expect("default primary URL is valid"),
            ),
            fallback: Location::Local(PathBuf::from(DEFAULT_FALLBACK_PATH)),
        }
    }
}

/// Reads the raw bytes behind a [`Location`].
///
/// The controller only talks to this trait, so tests and embedders can
/// supply canned data without touching the network.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    /// Fetch the full body at `location`.
    ///
    /// Any non-success HTTP status must be reported as an error so the
    /// caller can fall back.
    async fn fetch(&self, location: &Location) -> Result<Vec<u8>, FetchError>;
}

/// Default fetcher: `reqwest` for remote URLs, `tokio::fs` for local paths.
pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { http })
    }

    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, location: &Location) -> Result<Vec<u8>, FetchError> {
        match location {
            Location::Remote(url) => {
                log::debug!("GET {url}");
                let resp = self.http.get(url.clone()).send().await?;
                let status = resp.status();
                if !status.is_success() {
                    return Err(FetchError::status(url.as_str(), status.as_u16()));
                }
                let bytes = resp.bytes().await?;
                Ok(bytes.to_vec())
            }
            Location::Local(path) => {
                log::debug!("Reading {}", path.display());
                tokio::fs::read(path)
                    .await
                    .map_err(|e| FetchError::io(path, e))
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
