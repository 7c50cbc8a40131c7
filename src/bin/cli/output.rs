//! Console output helpers: run header, progress bar, log pointer.

use std::path::{Path, PathBuf};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use skald_rs::core::config::SkaldConfig;
use skald_rs::core::pipeline::ProgressCallback;

/// Print the run header before processing starts.
pub fn print_run_header(config: &SkaldConfig, paths: &[PathBuf]) {
    let names: Vec<String> = paths
        .iter()
        .map(|p| {
            p.file_name()
                .map_or_else(|| p.display().to_string(), |n| n.to_string_lossy().into_owned())
        })
        .collect();
    println!("Using metric: {}", style(config.metric).cyan());
    println!("Reading files: {}", names.join(", "));
    if let Some(books) = &config.books {
        println!("Restricting to books: {}", books.join(", "));
    }
    println!("Comparing verses...");
}

/// Progress callback backed by an indicatif bar over corpus rows.
pub fn progress_callback(total: usize) -> ProgressCallback {
    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} verses ({eta})")
            .expect("progress template is valid"),
    );
    Box::new(move |done, _total| {
        bar.set_position(done as u64);
        if done >= total {
            bar.finish_and_clear();
        }
    })
}

/// Point the reviewer at the detail log after the summary.
pub fn print_log_location(path: &Path) {
    println!("Detail log: {}", style(path.display()).dim());
}
