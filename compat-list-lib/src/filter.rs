//! Search and category filtering over a loaded collection.
//!
//! Everything here is a pure function of its inputs. The view is rebuilt
//! from scratch on every call; there is no incremental diffing.

use compat_list_core::{Category, Entry};

/// Per-category on/off switches. All categories start enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryToggles {
    perfect: bool,
    playable: bool,
    unplayable: bool,
    untested: bool,
}

impl Default for CategoryToggles {
    fn default() -> Self {
        Self::all()
    }
}

impl CategoryToggles {
    /// Every category enabled.
    pub fn all() -> Self {
        Self {
            perfect: true,
            playable: true,
            unplayable: true,
            untested: true,
        }
    }

    /// Every category disabled.
    pub fn none() -> Self {
        Self {
            perfect: false,
            playable: false,
            unplayable: false,
            untested: false,
        }
    }

    /// Only the listed categories enabled.
    pub fn only(categories: &[Category]) -> Self {
        let mut toggles = Self::none();
        for &category in categories {
            toggles.set(category, true);
        }
        toggles
    }

    pub fn set(&mut self, category: Category, enabled: bool) {
        *self.slot_mut(category) = enabled;
    }

    pub fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::Perfect => self.perfect,
            Category::Playable => self.playable,
            Category::Unplayable => self.unplayable,
            Category::Untested => self.untested,
        }
    }

    /// Enabled categories in display order.
    pub fn enabled(&self) -> impl Iterator<Item = Category> + '_ {
        Category::all()
            .iter()
            .copied()
            .filter(|&c| self.is_enabled(c))
    }

    pub fn all_disabled(&self) -> bool {
        self.enabled().next().is_none()
    }

    fn slot_mut(&mut self, category: Category) -> &mut bool {
        match category {
            Category::Perfect => &mut self.perfect,
            Category::Playable => &mut self.playable,
            Category::Unplayable => &mut self.unplayable,
            Category::Untested => &mut self.untested,
        }
    }
}

/// User-controlled filter inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Search text as the user typed it
    search_term: String,
    /// Lower-cased copy of `search_term` used for matching
    needle: String,
    pub toggles: CategoryToggles,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: &str) -> Self {
        self.set_search_term(term);
        self
    }

    pub fn with_toggles(mut self, toggles: CategoryToggles) -> Self {
        self.toggles = toggles;
        self
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.needle = term.to_lowercase();
    }

    /// The search text as entered, for echoing back into an input.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The lower-cased search text entries are matched against.
    pub fn needle(&self) -> &str {
        &self.needle
    }
}

/// The entries of a collection that pass the current filter, in
/// collection order.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a> {
    entries: Vec<&'a Entry>,
}

impl<'a> FilteredView<'a> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[&'a Entry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Entry> + '_ {
        self.entries.iter().copied()
    }
}

/// Whether `entry`'s title or any release id contains `needle`.
///
/// `needle` must already be lower-case. An empty needle matches everything.
pub fn matches_search(entry: &Entry, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if entry.title.to_lowercase().contains(needle) {
        return true;
    }
    entry
        .release_ids()
        .any(|id| id.to_lowercase().contains(needle))
}

/// Compute the filtered view of `collection` under `state`.
pub fn apply_filters<'a>(state: &FilterState, collection: &'a [Entry]) -> FilteredView<'a> {
    let entries = collection
        .iter()
        .filter(|entry| state.toggles.is_enabled(entry.category()))
        .filter(|entry| matches_search(entry, state.needle()))
        .collect();
    FilteredView { entries }
}

/// Number of entries per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    perfect: usize,
    playable: usize,
    unplayable: usize,
    untested: usize,
}

impl CategoryCounts {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Perfect => self.perfect,
            Category::Playable => self.playable,
            Category::Unplayable => self.unplayable,
            Category::Untested => self.untested,
        }
    }

    pub fn total(&self) -> usize {
        self.perfect + self.playable + self.unplayable + self.untested
    }
}

/// Tally entries by category.
pub fn count_categories<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> CategoryCounts {
    let mut counts = CategoryCounts::default();
    for entry in entries {
        match entry.category() {
            Category::Perfect => counts.perfect += 1,
            Category::Playable => counts.playable += 1,
            Category::Unplayable => counts.unplayable += 1,
            Category::Untested => counts.untested += 1,
        }
    }
    counts
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
