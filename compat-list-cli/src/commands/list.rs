use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use compat_list_core::util::truncate_chars;
use compat_list_lib::render::{NO_RESULTS_HEADING, NO_RESULTS_HINT};
use compat_list_lib::{Category, DisplayRow, count_categories};

use crate::cli_types::{FilterArgs, LoadArgs};
use crate::error::CliError;

const TITLE_WIDTH: usize = 48;
const ID_WIDTH: usize = 18;

/// Print the filtered list to the terminal.
pub(crate) fn run_list(
    load: LoadArgs<'_>,
    filter: &FilterArgs,
    limit: Option<usize>,
    summary: bool,
) -> Result<(), CliError> {
    let (controller, outcome) = super::load_listing(load, filter.to_filter_state())?;
    outcome.map_err(|e| CliError::load(e.to_string()))?;

    let state = controller.state();
    let rendered = controller.rendered();
    let total = state.collection().len();

    if state.filter().toggles.all_disabled() {
        log::warn!("All categories are disabled; nothing can match");
    }

    if rendered.is_empty() {
        log::info!(
            "{}",
            NO_RESULTS_HEADING.if_supports_color(Stdout, |t| t.bold()),
        );
        log::info!("{NO_RESULTS_HINT}");
    } else {
        let shown = limit.unwrap_or(usize::MAX);
        for row in rendered.rows.iter().take(shown) {
            print_row(row);
        }
        if rendered.rows.len() > shown {
            log::info!(
                "  {}",
                format!("... and {} more", rendered.rows.len() - shown)
                    .if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }

    log::info!("");
    log::info!(
        "Showing {} of {} games",
        rendered.count.if_supports_color(Stdout, |t| t.bold()),
        total,
    );

    if summary {
        let counts = count_categories(state.collection());
        log::info!("");
        for &category in Category::all() {
            log::info!(
                "  {:<12} {:>6}",
                category_colored(category, category.display_name()),
                counts.get(category),
            );
        }
        log::info!("  {:<12} {:>6}", "Total", counts.total());
    }

    Ok(())
}

fn print_row(row: &DisplayRow) {
    let title = truncate_chars(&row.title, TITLE_WIDTH);
    let id = truncate_chars(&row.id, ID_WIDTH);
    log::info!(
        "  {:<title_w$}  {:<id_w$}  {}",
        title,
        id.if_supports_color(Stdout, |t| t.dimmed()),
        category_colored(row.category, &row.badge),
        title_w = TITLE_WIDTH,
        id_w = ID_WIDTH,
    );
}

/// Color `text` by the category it belongs to.
pub(crate) fn category_colored(category: Category, text: &str) -> String {
    match category {
        Category::Perfect => text.if_supports_color(Stdout, |t| t.green()).to_string(),
        Category::Playable => text.if_supports_color(Stdout, |t| t.yellow()).to_string(),
        Category::Unplayable => text.if_supports_color(Stdout, |t| t.red()).to_string(),
        Category::Untested => text.if_supports_color(Stdout, |t| t.dimmed()).to_string(),
    }
}
