//! Loading spinner built on indicatif

use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a dataset file is read
pub fn loading_spinner(path: &Path) -> ProgressBar {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let pb = ProgressBar::new_spinner();
    let spinner_style = ProgressStyle::default_spinner()
        .template("    {spinner:.cyan} {msg} {elapsed:.dim}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    pb.set_style(spinner_style);
    pb.set_message(format!("Loading {}...", name));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Stop the spinner and report the shape of the loaded table
pub fn finish_loading(pb: &ProgressBar, rows: usize, columns: usize) {
    pb.finish_with_message(format!("✅ Loaded {} rows x {} columns", rows, columns));
}
