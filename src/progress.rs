// Import required dependencies
use indicatif::{ProgressBar, ProgressStyle}; // For progress bar rendering
use std::time::Instant;

/// Progress bar over the sequential file loop
pub struct ProgressTracker {
    bar: ProgressBar,
    start_time: Instant,
    files_done: usize,
}

impl ProgressTracker {
    pub fn new(total_files: usize) -> Self {
        let style = ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) | {msg}",
            )
            .unwrap()
            .progress_chars("#>-");

        let bar = ProgressBar::new(total_files as u64);
        bar.set_style(style);

        Self {
            bar,
            start_time: Instant::now(),
            files_done: 0,
        }
    }

    /// Show which file is currently being worked on
    pub fn start_file(&self, name: &str) {
        self.bar.set_message(name.to_string());
    }

    /// Advance the bar after a file finishes, success or not
    pub fn file_done(&mut self) {
        self.files_done += 1;
        self.bar.set_position(self.files_done as u64);
    }

    pub fn finish(&self, failures: usize) {
        self.bar.finish_with_message(format!(
            "Completed in {:.2}s | Files: {} | Failures: {}",
            self.start_time.elapsed().as_secs_f64(),
            self.files_done,
            failures
        ));
    }
}
