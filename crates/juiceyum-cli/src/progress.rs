//! Download progress display
//!
//! Bridges the downloader's observer callback to an indicatif progress bar.
//! Progress is purely cosmetic: the bar only appears when the server
//! reports a content length.

use indicatif::{ProgressBar, ProgressStyle};
use juiceyum_repo::Downloader;

pub fn with_progress_bar(downloader: Downloader) -> Downloader {
    let bar = ProgressBar::no_length();
    bar.set_style(
        ProgressStyle::with_template(
            "{bytes}/{total_bytes} [{wide_bar}] {bytes_per_sec} ({elapsed})",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> "),
    );

    downloader.on_progress(move |progress| {
        if bar.length() != Some(progress.total) {
            bar.reset();
            bar.set_length(progress.total);
        }
        bar.set_position(progress.bytes);
        if progress.bytes >= progress.total {
            bar.finish_and_clear();
        }
    })
}
