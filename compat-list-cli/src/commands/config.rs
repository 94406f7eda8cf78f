use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use compat_list_lib::settings::settings_to_string;
use compat_list_lib::{Settings, load_settings, save_settings_to, settings_path};

use crate::cli_types::LoadArgs;
use crate::error::CliError;

/// Show the settings file status and the effective values.
pub(crate) fn run_config_show(load: LoadArgs<'_>) -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "compat-list Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let settings = load_settings()?;
    let sources = settings.data_sources(load.source, load.fallback)?;

    let origin = |overridden: bool| {
        if overridden {
            "(command line)"
        } else {
            "(settings)"
        }
    };

    let fields = [
        (
            "primary",
            sources.primary.to_string(),
            origin(load.source.is_some()),
        ),
        (
            "fallback",
            sources.fallback.to_string(),
            origin(load.fallback.is_some()),
        ),
        ("timeout", format!("{}s", settings.timeout().as_secs()), ""),
        ("user_agent", settings.user_agent().to_string(), ""),
        (
            "issue_search_url",
            match settings.render_options()?.issue_search_url {
                Some(url) => url.to_string(),
                None => "disabled".to_string(),
            },
            "",
        ),
    ];

    for (name, value, source) in fields {
        log::info!(
            "  {} {} {}",
            format!("{name}:").if_supports_color(Stdout, |t| t.cyan()),
            value,
            source.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}

/// Write a settings file with default values.
pub(crate) fn run_config_init(force: bool) -> Result<(), CliError> {
    let path = settings_path();
    if path.exists() && !force {
        return Err(CliError::config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let settings = Settings::default();
    save_settings_to(&path, &settings)?;

    log::info!(
        "{} {}",
        "Wrote".if_supports_color(Stdout, |t| t.green()),
        path.display(),
    );
    log::debug!("{}", settings_to_string(&settings)?);
    Ok(())
}
