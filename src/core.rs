// ============================================================================
// Core Processing Module
//
// Drives a fix run end to end: discovery → sequential per-file repair →
// final report. Files are processed strictly one at a time in sorted-path
// order. Read and write faults are caught at the file boundary and recorded
// in that file's outcome; they never abort the rest of the run.
// ============================================================================

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::discovery::Discovery;
use crate::encoding::{self, FixStats, SourceEncoding};
use crate::errors::FixerResult;
use crate::progress::ProgressTracker;
use crate::report::{FileOutcome, RunReport};

// Define a struct to manage the core processing logic
pub struct FixerCore {
    target_dir: PathBuf,
    pattern: String,
    verbose: bool, // Flag to enable per-file narration
    debug: bool,   // Flag to print the statistics breakdown
    dry_run: bool, // Decode and inspect only, skip the write step
    stats: FixStats,
}

// Implement methods for FixerCore
impl FixerCore {
    pub fn new(
        target_dir: PathBuf,
        pattern: String,
        verbose: bool,
        debug: bool,
        dry_run: bool,
    ) -> Self {
        Self {
            target_dir,
            pattern,
            verbose,
            debug,
            dry_run,
            stats: FixStats::new(),
        }
    }

    /// Run discovery and process every matching file.
    ///
    /// Returns the accumulated report. Whole-run conditions (missing
    /// directory, zero matches) surface as errors before any file is
    /// touched; per-file faults are inside the report.
    pub async fn run(&mut self) -> FixerResult<RunReport> {
        if self.verbose {
            println!("{}", "=".repeat(70));
            println!("HTML Encoding Fix Tool");
            println!("{}", "=".repeat(70));
            println!(
                "\nLooking for files matching `{}` in: {}",
                self.pattern,
                self.target_dir.display()
            );
        }

        let files = Discovery::find_target_files(&self.target_dir, &self.pattern)?;
        info!("Discovered {} file(s) to process", files.len());

        if self.verbose {
            println!("Found {} files to process\n", files.len());
        }

        let mut tracker = ProgressTracker::new(files.len());
        let mut report = RunReport::new();

        for file in &files {
            tracker.start_file(&file_label(file));
            let outcome = self.fix_file(file).await;

            if !outcome.success {
                warn!("{}: {}", outcome.file_name(), outcome.message);
            } else {
                debug!("{}: {}", outcome.file_name(), outcome.message);
            }

            tracker.file_done();
            report.record(outcome);
        }

        tracker.finish(report.failure_count());
        report.print_summary();

        if self.debug {
            self.stats.print_summary();
        }
        info!("{}", self.stats.log_summary());

        Ok(report)
    }

    // Repair a single file. Faults are converted into the outcome record
    // rather than propagated, which is what keeps failure isolation per-file.
    async fn fix_file(&mut self, path: &Path) -> FileOutcome {
        self.stats.record_file_processed();

        if self.verbose {
            println!("Processing: {}", file_label(path));
        }

        // Read step: the only place a decode can "fail" is here, as an I/O
        // fault; the fallback decode below is total
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                self.stats.record_failure();
                if self.verbose {
                    println!("  ❌ Failed to read file: {}\n", e);
                }
                return FileOutcome::failed(path, format!("failed to read file: {}", e));
            }
        };

        let sanitized = encoding::sanitize(&bytes);

        self.stats.record_source_encoding(sanitized.source);
        if self.verbose && sanitized.source == SourceEncoding::Latin1 {
            println!("  ⚠ UTF-8 decode failed, read as latin-1 instead");
        }

        if sanitized.flags.has_mojibake_markers {
            self.stats.record_flagged();
            if self.verbose {
                println!("  ⚠ Found mojibake markers");
            }
        }

        if !sanitized.flags.declares_utf8_charset {
            warn!(
                "No UTF-8 charset declaration found in {}",
                path.display()
            );
        }

        if self.dry_run {
            if self.verbose {
                println!(
                    "  ✅ Dry run (read as {}, write skipped)\n",
                    sanitized.source
                );
            }
            return FileOutcome::skipped(
                path,
                sanitized.source,
                sanitized.flags.has_mojibake_markers,
            );
        }

        // In-place write, no temp-file-and-rename: a fault here can leave a
        // truncated file behind
        match tokio::fs::write(path, sanitized.text.as_bytes()).await {
            Ok(()) => {
                if self.verbose {
                    println!(
                        "  ✅ Success (read as {}, saved as UTF-8)\n",
                        sanitized.source
                    );
                }
                FileOutcome::fixed(
                    path,
                    sanitized.source,
                    sanitized.flags.has_mojibake_markers,
                )
            }
            Err(e) => {
                self.stats.record_failure();
                if self.verbose {
                    println!("  ❌ Failed to write file: {}\n", e);
                }
                FileOutcome::failed(path, format!("failed to write file: {}", e))
            }
        }
    }

    /// Get current statistics
    pub fn stats(&self) -> &FixStats {
        &self.stats
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
