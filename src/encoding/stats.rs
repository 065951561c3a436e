// ============================================================================
// Encoding Statistics Module
//
// Tracks counters for a fix run: how many files were processed, which decode
// tier each one went through, how many were flagged by the mojibake
// heuristic and how many failed outright. Pure aggregation; printing the
// summary is the only output.
// ============================================================================

use super::SourceEncoding;

/// Statistics collector for a single fix run
#[derive(Debug, Clone, Default)]
pub struct FixStats {
    files_processed: usize,
    utf8_files: usize,
    latin1_fallbacks: usize,
    flagged_files: usize,
    failed_files: usize,
}

impl FixStats {
    /// Create a new statistics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a file entered processing
    pub fn record_file_processed(&mut self) {
        self.files_processed += 1;
    }

    /// Record which decode tier produced a file's text
    pub fn record_source_encoding(&mut self, encoding: SourceEncoding) {
        match encoding {
            SourceEncoding::Utf8 => self.utf8_files += 1,
            SourceEncoding::Latin1 => self.latin1_fallbacks += 1,
        }
    }

    /// Record that the mojibake heuristic flagged a file
    pub fn record_flagged(&mut self) {
        self.flagged_files += 1;
    }

    /// Record a read or write fault
    pub fn record_failure(&mut self) {
        self.failed_files += 1;
    }

    pub fn files_processed(&self) -> usize {
        self.files_processed
    }

    pub fn latin1_fallbacks(&self) -> usize {
        self.latin1_fallbacks
    }

    pub fn flagged_files(&self) -> usize {
        self.flagged_files
    }

    pub fn failed_files(&self) -> usize {
        self.failed_files
    }

    /// Check if every processed file completed without a fault
    pub fn is_fully_successful(&self) -> bool {
        self.failed_files == 0 && self.files_processed > 0
    }

    /// Print a summary of the run's encoding statistics
    pub fn print_summary(&self) {
        println!("\n📊 Encoding Fix Summary:");
        println!("├─ Files processed: {}", self.files_processed);
        println!("├─ Decoded as UTF-8: {}", self.utf8_files);
        println!("├─ Latin-1 fallbacks: {}", self.latin1_fallbacks);
        println!("├─ Flagged by mojibake heuristic: {}", self.flagged_files);

        if self.failed_files > 0 {
            println!("└─ Failures: {}", self.failed_files);
        } else {
            println!("└─ Failures: None ✓");
        }
    }

    /// Get a compact summary line for logging
    pub fn log_summary(&self) -> String {
        format!(
            "Fix stats: {} files, {} utf-8, {} latin-1 fallback(s), {} flagged, {} failed",
            self.files_processed,
            self.utf8_files,
            self.latin1_fallbacks,
            self.flagged_files,
            self.failed_files
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_collection() {
        let mut stats = FixStats::new();

        stats.record_file_processed();
        stats.record_source_encoding(SourceEncoding::Utf8);
        stats.record_file_processed();
        stats.record_source_encoding(SourceEncoding::Latin1);
        stats.record_flagged();

        assert_eq!(stats.files_processed(), 2);
        assert_eq!(stats.latin1_fallbacks(), 1);
        assert_eq!(stats.flagged_files(), 1);
        assert!(stats.is_fully_successful());
    }

    #[test]
    fn test_failure_breaks_full_success() {
        let mut stats = FixStats::new();

        stats.record_file_processed();
        stats.record_failure();

        assert_eq!(stats.failed_files(), 1);
        assert!(!stats.is_fully_successful());
    }

    #[test]
    fn test_empty_run_is_not_successful() {
        let stats = FixStats::new();
        assert!(!stats.is_fully_successful());
    }

    #[test]
    fn test_log_summary_contents() {
        let mut stats = FixStats::new();
        stats.record_file_processed();
        stats.record_source_encoding(SourceEncoding::Latin1);

        let summary = stats.log_summary();
        assert!(summary.contains("1 files"));
        assert!(summary.contains("1 latin-1 fallback(s)"));
    }
}
