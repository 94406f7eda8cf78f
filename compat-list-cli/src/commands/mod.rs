pub(crate) mod categories;
pub(crate) mod config;
pub(crate) mod list;
pub(crate) mod render;

use compat_list_lib::{FilterState, HttpFetcher, ListingController, LoadError, load_settings};

use crate::cli_types::LoadArgs;
use crate::error::CliError;
use crate::spinner;

/// Build a controller with `filter` applied and run its one load.
///
/// A failed load is not an error here: the controller is returned in its
/// failed phase together with the load error so callers can still render.
pub(crate) fn load_listing(
    load: LoadArgs<'_>,
    filter: FilterState,
) -> Result<(ListingController, Result<(), LoadError>), CliError> {
    let settings = load_settings()?;
    let sources = settings.data_sources(load.source, load.fallback)?;
    let options = settings.render_options()?;
    let fetcher = HttpFetcher::new(settings.timeout(), settings.user_agent())
        .map_err(|e| CliError::other(format!("Failed to create HTTP client: {e}")))?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::runtime(format!("Failed to create async runtime: {e}")))?;

    let mut controller = ListingController::new(options).with_filter(filter);

    let verb = if sources.primary.is_remote() {
        "Downloading"
    } else {
        "Reading"
    };
    let pb = spinner::start(
        load.quiet,
        format!("{verb} compatibility data from {}...", sources.primary),
    );
    let outcome = rt.block_on(controller.load(&fetcher, &sources));
    pb.finish_and_clear();

    match outcome {
        Ok(origin) => {
            log::debug!(
                "Loaded {} entries from {origin} source",
                controller.state().collection().len()
            );
            Ok((controller, Ok(())))
        }
        Err(e) => Ok((controller, Err(e))),
    }
}
