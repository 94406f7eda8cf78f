//! Turning a filtered view into display rows and HTML markup.
//!
//! Rows keep their text raw; escaping happens when markup is produced, so
//! terminal output and HTML output share the same rows.

use reqwest::Url;

use compat_list_core::{Category, Entry, MISSING_ID};

use crate::controller::ListingState;
use crate::filter::FilteredView;

/// Issue tracker searched by the per-row "Search issues" link.
pub const DEFAULT_ISSUE_SEARCH_URL: &str = "https://github.com/azahar-emu/azahar/issues";

pub const NO_RESULTS_HEADING: &str = "No games found";
pub const NO_RESULTS_HINT: &str = "Try adjusting your search term or filter settings.";

/// Element ids of the page the list is rendered into.
pub mod ids {
    use compat_list_core::Category;

    pub const SEARCH_INPUT: &str = "searchInput";
    pub const LOADING_MESSAGE: &str = "loadingMessage";
    pub const ERROR_MESSAGE: &str = "errorMessage";
    pub const GAME_COUNT: &str = "gameCount";
    pub const GAME_LIST: &str = "gameList";

    /// Id of the checkbox controlling `category`.
    pub fn toggle(category: Category) -> &'static str {
        match category {
            Category::Perfect => "filterPerfect",
            Category::Playable => "filterPlayable",
            Category::Unplayable => "filterUnplayable",
            Category::Untested => "filterUntested",
        }
    }
}

/// Presentation options that do not depend on the data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// When set, every row links to an issue search for its title.
    pub issue_search_url: Option<Url>,
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// One rendered entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub title: String,
    /// First release id, or `N/A`
    pub id: String,
    pub category: Category,
    /// e.g. "Great (1)"
    pub badge: String,
    pub issue_url: Option<String>,
}

impl DisplayRow {
    pub fn from_entry(entry: &Entry, options: &RenderOptions) -> Self {
        let classification = entry.classification();
        Self {
            title: entry.title.clone(),
            id: entry.primary_id().unwrap_or(MISSING_ID).to_string(),
            category: classification.category,
            badge: classification.badge_text(),
            issue_url: options
                .issue_search_url
                .as_ref()
                .map(|base| issue_search_link(base, &entry.title).to_string()),
        }
    }

    fn write_html(&self, out: &mut String) {
        out.push_str("<div class=\"game-item\">\n");
        out.push_str("  <div class=\"game-info\">\n");
        out.push_str(&format!("    <h3>{}</h3>\n", escape_html(&self.title)));
        out.push_str(&format!(
            "    <div class=\"game-id\">ID: {}</div>\n",
            escape_html(&self.id)
        ));
        if let Some(ref url) = self.issue_url {
            out.push_str(&format!(
                "    <a class=\"issue-link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Search issues</a>\n",
                escape_html(url)
            ));
        }
        out.push_str("  </div>\n");
        out.push_str(&format!(
            "  <div class=\"compatibility-badge compatibility-{}\">{}</div>\n",
            self.category.name(),
            escape_html(&self.badge)
        ));
        out.push_str("</div>\n");
    }
}

/// The count and rows for the current view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedList {
    pub count: usize,
    pub rows: Vec<DisplayRow>,
}

impl RenderedList {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Markup for the list container: one `game-item` per row, or the
    /// no-results placeholder.
    pub fn to_html(&self) -> String {
        if self.rows.is_empty() {
            return no_results_html();
        }
        let mut out = String::new();
        for row in &self.rows {
            row.write_html(&mut out);
        }
        out
    }
}

/// Build display rows for every entry in `view`.
pub fn render_list(view: &FilteredView<'_>, options: &RenderOptions) -> RenderedList {
    let rows: Vec<DisplayRow> = view
        .iter()
        .map(|entry| DisplayRow::from_entry(entry, options))
        .collect();
    RenderedList {
        count: rows.len(),
        rows,
    }
}

fn no_results_html() -> String {
    format!(
        "<div class=\"no-results\">\n  <h3>{NO_RESULTS_HEADING}</h3>\n  <p>{NO_RESULTS_HINT}</p>\n</div>\n"
    )
}

/// Link to an issue-tracker search for `title`.
pub fn issue_search_link(base: &Url, title: &str) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("q", &format!("is:issue \"{title}\""));
    url
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Full page
// ---------------------------------------------------------------------------

const PAGE_STYLE: &str = "\
body { font-family: sans-serif; margin: 2rem; }
.controls { display: flex; gap: 1rem; flex-wrap: wrap; margin-bottom: 1rem; }
.game-item { display: flex; justify-content: space-between; align-items: center; padding: 0.5rem 0; border-bottom: 1px solid #ddd; }
.game-info h3 { margin: 0; }
.game-id { color: #666; font-family: monospace; }
.compatibility-badge { padding: 0.25rem 0.75rem; border-radius: 1rem; color: #fff; }
.compatibility-perfect { background: #2e7d32; }
.compatibility-playable { background: #f9a825; }
.compatibility-unplayable { background: #c62828; }
.compatibility-untested { background: #757575; }
.no-results { text-align: center; color: #666; }
.banner-error { color: #c62828; }
";

/// A complete, static HTML document for `state`.
///
/// The search box and checkboxes reflect the filter; the loading banner is
/// shown until a load has finished and the error banner only after a failed
/// load.
pub fn render_page(state: &ListingState) -> String {
    let phase = state.phase();
    let rendered = state.rendered();

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<title>Compatibility List</title>\n");
    out.push_str(&format!("<style>\n{PAGE_STYLE}</style>\n"));
    out.push_str("</head>\n<body>\n");
    out.push_str("<h1>Compatibility List</h1>\n");

    out.push_str("<div class=\"controls\">\n");
    out.push_str(&format!(
        "  <input type=\"search\" id=\"{}\" placeholder=\"Search by title or ID\" value=\"{}\">\n",
        ids::SEARCH_INPUT,
        escape_html(state.filter().search_term())
    ));
    for &category in Category::all() {
        let checked = if state.filter().toggles.is_enabled(category) {
            " checked"
        } else {
            ""
        };
        out.push_str(&format!(
            "  <label><input type=\"checkbox\" id=\"{}\"{checked}> {}</label>\n",
            ids::toggle(category),
            category.display_name()
        ));
    }
    out.push_str("</div>\n");

    out.push_str(&format!(
        "<div id=\"{}\" style=\"display: {}\">Loading compatibility data...</div>\n",
        ids::LOADING_MESSAGE,
        display_value(phase.shows_loading())
    ));
    out.push_str(&format!(
        "<div id=\"{}\" class=\"banner-error\" style=\"display: {}\">Failed to load compatibility data.{}</div>\n",
        ids::ERROR_MESSAGE,
        display_value(phase.shows_error()),
        phase
            .failure_reason()
            .map(|r| format!(" <small>{}</small>", escape_html(r)))
            .unwrap_or_default()
    ));

    out.push_str(&format!(
        "<p>Showing <span id=\"{}\">{}</span> games</p>\n",
        ids::GAME_COUNT,
        rendered.count
    ));
    out.push_str(&format!("<div id=\"{}\">\n", ids::GAME_LIST));
    out.push_str(&rendered.to_html());
    out.push_str("</div>\n");
    out.push_str("</body>\n</html>\n");
    out
}

fn display_value(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
