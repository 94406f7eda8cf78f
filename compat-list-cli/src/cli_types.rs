//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use compat_list_lib::{Category, CategoryToggles, FilterState};

#[derive(Parser)]
#[command(name = "compat-list")]
#[command(about = "Search and render emulator compatibility lists", long_about = None)]
pub(crate) struct Cli {
    /// Primary dataset location (URL or path); overrides settings.toml
    #[arg(long, global = true)]
    pub source: Option<String>,

    /// Fallback dataset location tried once if the primary fails
    #[arg(long, global = true)]
    pub fallback: Option<String>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that loads the dataset.
#[derive(Clone, Copy)]
pub(crate) struct LoadArgs<'a> {
    pub source: Option<&'a str>,
    pub fallback: Option<&'a str>,
    pub quiet: bool,
}

/// Search and category filters.
#[derive(Args, Clone, Default)]
pub(crate) struct FilterArgs {
    /// Case-insensitive text matched against titles and release ids
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show these categories (e.g., perfect,playable). Default: all
    #[arg(short, long, value_delimiter = ',')]
    pub categories: Option<Vec<Category>>,
}

impl FilterArgs {
    pub(crate) fn to_filter_state(&self) -> FilterState {
        let toggles = match self.categories {
            Some(ref categories) => CategoryToggles::only(categories),
            None => CategoryToggles::all(),
        };
        FilterState::new()
            .with_search(self.search.as_deref().unwrap_or(""))
            .with_toggles(toggles)
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print matching entries to the terminal
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Maximum number of rows to print (the count still covers all matches)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print per-category totals for the whole dataset
        #[arg(long)]
        summary: bool,
    },

    /// Render matching entries as HTML
    Render {
        #[command(flatten)]
        filter: FilterArgs,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit only the list markup instead of a full page
        #[arg(long)]
        fragment: bool,
    },

    /// List compatibility categories and the codes they cover
    Categories,

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective settings and where they come from
    Show,

    /// Print the settings file path
    Path,

    /// Write a settings file with the default values
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}
