//! compat-list CLI
//!
//! Command-line interface for searching and rendering emulator
//! compatibility lists.

mod cli_types;
mod commands;
mod error;
mod logger;
mod spinner;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction, LoadArgs};
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        log::logger().flush();
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let load = LoadArgs {
        source: cli.source.as_deref(),
        fallback: cli.fallback.as_deref(),
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::List {
            filter,
            limit,
            summary,
        } => commands::list::run_list(load, &filter, limit, summary),
        Commands::Render {
            filter,
            output,
            fragment,
        } => commands::render::run_render(load, &filter, output.as_deref(), fragment),
        Commands::Categories => {
            commands::categories::run_categories();
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(load),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::Init { force } => commands::config::run_config_init(force),
        },
    }
}
