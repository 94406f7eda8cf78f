use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use compat_list_lib::{Category, Rating};

use super::list::category_colored;

/// Print every category with the ratings (and codes) it covers.
pub(crate) fn run_categories() {
    log::info!("Compatibility categories:");
    log::info!("");

    for &category in Category::all() {
        log::info!(
            "{} [{}]",
            category_colored(category, category.display_name()),
            category
                .aliases()
                .join(", ")
                .if_supports_color(Stdout, |t| t.cyan()),
        );
        for rating in Rating::all().iter().filter(|r| r.category() == category) {
            let code = match rating.code() {
                Some(code) => code.to_string(),
                None => "other".to_string(),
            };
            log::info!(
                "  {:<10} {}",
                rating.label(),
                code.if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }
}
