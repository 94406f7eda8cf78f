//! The listing controller: load once, then filter and re-render on every
//! user event.
//!
//! All state lives in an explicit [`ListingState`]. The controller only
//! sequences transitions; the view is always recomputed by the pure
//! [`apply_filters`] and [`render_list`] functions.

use compat_list_core::{Category, Entry};

use crate::error::LoadError;
use crate::filter::{FilterState, FilteredView, apply_filters};
use crate::loader::{SourceKind, load_entries};
use crate::render::{RenderOptions, RenderedList, render_list, render_page};
use crate::source::{DataSources, Fetcher};

/// Lifecycle of the collection.
///
/// `Idle -> Loading -> Ready | Failed`. A ready listing stays ready across
/// filter changes; neither terminal phase is ever left.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready {
        origin: SourceKind,
    },
    Failed {
        reason: String,
    },
}

impl LoadPhase {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// The loading banner is visible until the load settles.
    pub fn shows_loading(&self) -> bool {
        !self.is_ready() && !self.is_failed()
    }

    pub fn shows_error(&self) -> bool {
        self.is_failed()
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Failed { reason } => Some(reason),
            _ => None,
        }
    }
}

/// A user input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingEvent {
    /// The search box changed to this text
    SearchChanged(String),
    /// A category checkbox was set or cleared
    CategoryToggled(Category, bool),
}

impl FilterState {
    /// Fold one event into the filter.
    pub fn apply_event(&mut self, event: &ListingEvent) {
        match event {
            ListingEvent::SearchChanged(term) => self.set_search_term(term),
            ListingEvent::CategoryToggled(category, enabled) => {
                self.toggles.set(*category, *enabled)
            }
        }
    }
}

/// Everything the page shows, in one place.
#[derive(Debug, Clone, Default)]
pub struct ListingState {
    phase: LoadPhase,
    collection: Vec<Entry>,
    filter: FilterState,
    rendered: RenderedList,
}

impl ListingState {
    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    /// The full loaded collection (empty until ready, and after a failure).
    pub fn collection(&self) -> &[Entry] {
        &self.collection
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// The list as of the last transition.
    pub fn rendered(&self) -> &RenderedList {
        &self.rendered
    }

    /// Recompute the filtered view from scratch.
    pub fn view(&self) -> FilteredView<'_> {
        apply_filters(&self.filter, &self.collection)
    }
}

/// Drives a [`ListingState`] through its lifecycle.
pub struct ListingController {
    state: ListingState,
    options: RenderOptions,
}

impl ListingController {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            state: ListingState::default(),
            options,
        }
    }

    /// Start from a non-default filter (e.g. one given on the command line).
    pub fn with_filter(mut self, filter: FilterState) -> Self {
        self.state.filter = filter;
        self.refresh();
        self
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.state.phase
    }

    pub fn rendered(&self) -> &RenderedList {
        &self.state.rendered
    }

    /// Load the collection. Only the first call does anything.
    ///
    /// On failure the collection stays empty, the phase becomes
    /// [`LoadPhase::Failed`] and the rendered list shows zero results.
    pub async fn load<F: Fetcher>(
        &mut self,
        fetcher: &F,
        sources: &DataSources,
    ) -> Result<SourceKind, LoadError> {
        if self.state.phase != LoadPhase::Idle {
            log::warn!("Ignoring load request: dataset already requested");
            return Err(LoadError::AlreadyLoaded);
        }

        self.state.phase = LoadPhase::Loading;
        log::debug!("Listing phase: loading");

        match load_entries(fetcher, sources).await {
            Ok(data) => {
                let origin = data.origin;
                self.state.collection = data.entries;
                self.state.phase = LoadPhase::Ready { origin };
                self.refresh();
                log::debug!(
                    "Listing phase: ready ({} entries, {} shown)",
                    self.state.collection.len(),
                    self.state.rendered.count,
                );
                Ok(origin)
            }
            Err(e) => {
                log::debug!("Listing phase: failed ({e})");
                self.state.collection.clear();
                self.state.phase = LoadPhase::Failed {
                    reason: e.to_string(),
                };
                self.refresh();
                Err(e)
            }
        }
    }

    /// Apply a user event and re-render.
    pub fn handle(&mut self, event: ListingEvent) -> &RenderedList {
        log::debug!("Listing event: {event:?}");
        self.state.filter.apply_event(&event);
        self.refresh();
        &self.state.rendered
    }

    pub fn set_search(&mut self, term: &str) -> &RenderedList {
        self.handle(ListingEvent::SearchChanged(term.to_string()))
    }

    pub fn set_category(&mut self, category: Category, enabled: bool) -> &RenderedList {
        self.handle(ListingEvent::CategoryToggled(category, enabled))
    }

    /// Full HTML page for the current state.
    pub fn render_page(&self) -> String {
        render_page(&self.state)
    }

    fn refresh(&mut self) {
        let view = apply_filters(&self.state.filter, &self.state.collection);
        self.state.rendered = render_list(&view, &self.options);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
