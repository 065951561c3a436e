// Per-file outcome records and the end-of-run report. Pure aggregation over
// the processing loop's results; printing the final tally is the only side
// effect, and it happens after all files have been visited.

use std::path::{Path, PathBuf};

use crate::encoding::SourceEncoding;

/// Outcome record for a single processed file
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub success: bool,
    pub message: String,
    pub encoding_used: Option<SourceEncoding>,
    pub had_issues: bool,
}

impl FileOutcome {
    /// Record a file that was decoded and rewritten
    pub fn fixed(path: &Path, encoding: SourceEncoding, had_issues: bool) -> Self {
        let message = if had_issues {
            format!("read as {}, mojibake markers fixed, saved as UTF-8", encoding)
        } else {
            format!("read as {}, saved as UTF-8", encoding)
        };

        Self {
            path: path.to_path_buf(),
            success: true,
            message,
            encoding_used: Some(encoding),
            had_issues,
        }
    }

    /// Record a file that was inspected but deliberately not rewritten
    pub fn skipped(path: &Path, encoding: SourceEncoding, had_issues: bool) -> Self {
        Self {
            path: path.to_path_buf(),
            success: true,
            message: format!("dry run: read as {}, write skipped", encoding),
            encoding_used: Some(encoding),
            had_issues,
        }
    }

    /// Record a read or write fault
    pub fn failed(path: &Path, message: String) -> Self {
        Self {
            path: path.to_path_buf(),
            success: false,
            message,
            encoding_used: None,
            had_issues: false,
        }
    }

    /// Bare file name for display
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Accumulated outcomes for a whole run
#[derive(Debug, Default)]
pub struct RunReport {
    outcomes: Vec<FileOutcome>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success).count()
    }

    pub fn failure_count(&self) -> usize {
        self.total() - self.success_count()
    }

    /// Number of files the mojibake heuristic flagged
    pub fn flagged_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.had_issues).count()
    }

    pub fn all_successful(&self) -> bool {
        self.failure_count() == 0
    }

    pub fn outcomes(&self) -> &[FileOutcome] {
        &self.outcomes
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| !o.success)
    }

    /// Print the final tally and, when anything failed, the failure listing
    pub fn print_summary(&self) {
        println!("\n{}", "=".repeat(70));
        println!(
            "Processing Complete: {}/{} files successful",
            self.success_count(),
            self.total()
        );
        println!("{}", "=".repeat(70));

        if self.all_successful() {
            println!("✅ All files processed successfully!");
        } else {
            println!("❌ Failed files:");
            for outcome in self.failures() {
                println!("   - {}: {}", outcome.file_name(), outcome.message);
            }
        }
    }
}
