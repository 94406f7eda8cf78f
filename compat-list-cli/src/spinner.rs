//! Spinner shown while the dataset is being fetched.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a ticking spinner with `msg`, or a hidden one when `quiet`.
pub(crate) fn start(quiet: bool, msg: String) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb.set_message(msg);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
