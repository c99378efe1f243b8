//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for per-file label stripping
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
    completed: usize,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
            completed: 0,
        }
    }

    /// Start a bar over `total_files` files
    pub fn init_files(&mut self, total_files: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_files);
        if let Ok(style) =
            ProgressStyle::default_bar().template("{spinner} {pos}/{len} stripped {wide_msg}")
        {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Record that the stripped copy `destination` was written
    pub fn file_completed(&mut self, destination: &str) {
        self.completed += 1;
        if let Some(pb) = &self.progress_bar {
            pb.set_message(destination.to_string());
            pb.inc(1);
        }
    }

    /// Number of files recorded so far
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Clear the bar and log a one-line summary
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
        log::info!("Stripped {} files", self.completed);
    }
}
