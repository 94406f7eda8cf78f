//! User settings (data locations, HTTP behaviour, link target).
//!
//! The settings file is `~/.config/compat-list/settings.toml`. Every field is
//! optional; missing fields take the built-in defaults, and command-line
//! overrides win over both.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::render::{DEFAULT_ISSUE_SEARCH_URL, RenderOptions};
use crate::source::{
    DEFAULT_FALLBACK_PATH, DEFAULT_PRIMARY_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, DataSources,
    Location,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub source: SourceSettings,
    pub http: HttpSettings,
    pub render: RenderSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// URL or path tried first
    pub primary: String,
    /// URL or path tried once if the primary fails
    pub fallback: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY_URL.to_string(),
            fallback: DEFAULT_FALLBACK_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Issue tracker to link each row to. Empty disables the links.
    pub issue_search_url: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            issue_search_url: DEFAULT_ISSUE_SEARCH_URL.to_string(),
        }
    }
}

impl Settings {
    /// Resolve the data locations, letting explicit overrides win.
    pub fn data_sources(
        &self,
        primary_override: Option<&str>,
        fallback_override: Option<&str>,
    ) -> Result<DataSources, SettingsError> {
        let primary = parse_location(
            "source.primary",
            primary_override.unwrap_or(&self.source.primary),
        )?;
        let fallback = parse_location(
            "source.fallback",
            fallback_override.unwrap_or(&self.source.fallback),
        )?;
        Ok(DataSources::new(primary, fallback))
    }

    pub fn render_options(&self) -> Result<RenderOptions, SettingsError> {
        let raw = self.render.issue_search_url.trim();
        if raw.is_empty() {
            return Ok(RenderOptions::default());
        }
        let url = Url::parse(raw).map_err(|e| SettingsError::Invalid {
            key: "render.issue_search_url",
            message: e.to_string(),
        })?;
        Ok(RenderOptions {
            issue_search_url: Some(url),
        })
    }

    /// HTTP timeout; zero falls back to the default.
    pub fn timeout(&self) -> Duration {
        if self.http.timeout_secs == 0 {
            DEFAULT_TIMEOUT
        } else {
            Duration::from_secs(self.http.timeout_secs)
        }
    }

    pub fn user_agent(&self) -> &str {
        if self.http.user_agent.trim().is_empty() {
            DEFAULT_USER_AGENT
        } else {
            &self.http.user_agent
        }
    }
}

fn parse_location(key: &'static str, raw: &str) -> Result<Location, SettingsError> {
    raw.parse::<Location>()
        .map_err(|e| SettingsError::Invalid {
            key,
            message: e.to_string(),
        })
}

/// Canonical path to the settings file: `~/.config/compat-list/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("compat-list").join("settings.toml")
}

/// Load settings from the canonical path. A missing file yields defaults.
pub fn load_settings() -> Result<Settings, SettingsError> {
    load_settings_from(&settings_path())
}

/// Load settings from `path`. A missing file yields defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    toml::from_str(&contents).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `settings` to `path`, creating parent directories.
///
/// The file is written to a temporary sibling and renamed into place.
pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    let io_err = |source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let serialized = toml::to_string_pretty(settings)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, serialized).map_err(io_err)?;
    std::fs::rename(&tmp, path).map_err(io_err)?;
    Ok(())
}

/// The effective settings as pretty-printed TOML, for display.
pub fn settings_to_string(settings: &Settings) -> Result<String, SettingsError> {
    Ok(toml::to_string_pretty(settings)?)
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
