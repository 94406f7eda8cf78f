//! Loading, filtering and rendering of emulator compatibility lists.
//!
//! The typical flow is: resolve [`Settings`], build a [`ListingController`],
//! `load` it once with a [`Fetcher`], then feed it [`ListingEvent`]s and read
//! back the [`RenderedList`] (or a full HTML page).

pub mod controller;
pub mod error;
pub mod filter;
pub mod loader;
pub mod render;
pub mod settings;
pub mod source;

pub use compat_list_core::{
    Category, CategoryParseError, Classification, Entry, Rating, Release, SchemaError, classify,
};
pub use controller::{ListingController, ListingEvent, ListingState, LoadPhase};
pub use error::{FetchError, LoadError, LocationParseError, SettingsError};
pub use filter::{
    CategoryCounts, CategoryToggles, FilterState, FilteredView, apply_filters, count_categories,
};
pub use loader::{LoadedData, SourceKind, load_entries};
pub use render::{DisplayRow, RenderOptions, RenderedList, escape_html, render_list, render_page};
pub use settings::{Settings, load_settings, load_settings_from, save_settings_to, settings_path};
pub use source::{DataSources, Fetcher, HttpFetcher, Location};

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
