//! Terminal logger.
//!
//! User-facing output goes through the `log` macros. `info` lines are
//! printed to stdout as-is; warnings and errors go to stderr. With
//! `--verbose` every line gets a timestamp and level, and debug output from
//! this workspace's crates is enabled. `--logfile` mirrors every line to a
//! file with ANSI escapes stripped.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::CliError;

/// Crate prefixes whose debug output is shown with `--verbose`.
const OWN_TARGETS: &[&str] = &["compat_list"];

struct CliLogger {
    level: LevelFilter,
    verbose: bool,
    file: Option<Mutex<File>>,
}

impl CliLogger {
    fn format(&self, record: &Record<'_>) -> String {
        if self.verbose {
            format!(
                "{} {:<5} {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        } else {
            match record.level() {
                Level::Error => format!("error: {}", record.args()),
                _ => record.args().to_string(),
            }
        }
    }
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        // Dependencies (reqwest, hyper, ...) only get to warn.
        metadata.level() <= Level::Warn
            || OWN_TARGETS
                .iter()
                .any(|prefix| metadata.target().starts_with(prefix))
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format(record);

        match record.level() {
            Level::Info => println!("{line}"),
            _ => eprintln!("{line}"),
        }

        if let Some(ref file) = self.file {
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{}", strip_ansi_escapes::strip_str(&line));
            }
        }
    }

    fn flush(&self) {
        if let Some(ref file) = self.file {
            if let Ok(mut f) = file.lock() {
                let _ = f.flush();
            }
        }
    }
}

/// Install the logger. Must be called once, before any command runs.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let file = match logfile {
        Some(path) => Some(Mutex::new(File::create(path)?)),
        None => None,
    };

    let logger = CliLogger {
        level,
        verbose,
        file,
    };
    log::set_boxed_logger(Box::new(logger))
        .map_err(|e| CliError::other(format!("Failed to install logger: {e}")))?;
    log::set_max_level(level);
    Ok(())
}
