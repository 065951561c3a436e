// ============================================================================
// Discovery Module
//
// Builds the target file set: one glob over one directory, results sorted
// lexicographically. Computed once at the start of a run and immutable
// afterward. A missing directory and an empty match set are whole-run
// errors; nothing gets processed in either case.
// ============================================================================

use std::path::{Path, PathBuf};

use glob::glob;
use log::warn;

use crate::errors::{FixerError, FixerResult};

/// Default directory holding the lesson part files, relative to the
/// invocation directory
pub const PARTS_DIR: &str = "parts";

/// Default filename pattern selecting the lesson 24 part files
pub const PART_FILE_PATTERN: &str = "lesson_24_firefly_rendering_part_*.html";

pub struct Discovery;

impl Discovery {
    /// Find all files matching `pattern` directly inside `dir`.
    ///
    /// Returns the matches sorted lexicographically. Fails with
    /// `DirectoryNotFound` when `dir` is missing and `NoMatchingFiles` when
    /// it exists but nothing matches.
    pub fn find_target_files(dir: &Path, pattern: &str) -> FixerResult<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(FixerError::DirectoryNotFound(dir.to_path_buf()));
        }

        let full_pattern = dir.join(pattern).to_string_lossy().into_owned();
        let entries = glob(&full_pattern).map_err(|e| FixerError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) => {
                    if path.is_file() {
                        files.push(path);
                    }
                }
                Err(e) => warn!("Skipping unreadable path during discovery: {}", e),
            }
        }

        files.sort();

        if files.is_empty() {
            return Err(FixerError::NoMatchingFiles {
                dir: dir.to_path_buf(),
                pattern: pattern.to_string(),
            });
        }

        Ok(files)
    }
}
