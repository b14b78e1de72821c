//! Progress reporting for mapping runs.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

pub const MAP_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({per_sec}) {msg}";

/// Progress bar over `length` patients, drawn to stderr.
///
/// A hidden bar is returned when `visible` is false so callers can tick it
/// unconditionally.
#[must_use]
pub fn patient_progress(length: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::with_draw_target(Some(length), ProgressDrawTarget::stderr());
    let style = ProgressStyle::default_bar()
        .template(MAP_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    bar.set_style(style);
    bar.set_message("mapping patients");
    bar
}
