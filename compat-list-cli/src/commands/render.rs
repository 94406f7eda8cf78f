use std::io::Write;
use std::path::Path;

use crate::cli_types::{FilterArgs, LoadArgs};
use crate::error::CliError;

/// Render the filtered list as HTML to `output` or stdout.
///
/// A failed load still produces a page (with the error banner and zero
/// results); the load error is reported afterwards.
pub(crate) fn run_render(
    load: LoadArgs<'_>,
    filter: &FilterArgs,
    output: Option<&Path>,
    fragment: bool,
) -> Result<(), CliError> {
    let (controller, outcome) = super::load_listing(load, filter.to_filter_state())?;

    let html = if fragment {
        controller.rendered().to_html()
    } else {
        controller.render_page()
    };

    match output {
        Some(path) => {
            std::fs::write(path, &html)?;
            log::debug!(
                "Wrote {} rows to {}",
                controller.rendered().count,
                path.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }

    outcome.map_err(|e| CliError::load(e.to_string()))
}
