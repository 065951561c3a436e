use std::path::PathBuf;
use thiserror::Error;

/// Type alias for Result with FixerError as the error type
pub type FixerResult<T> = Result<T, FixerError>;

/// Custom error types for the encoding fix application
#[derive(Error, Debug)]
pub enum FixerError {
    /// Standard IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration related errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The target directory does not exist
    #[error("Parts directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// The target directory exists but nothing matched the pattern
    #[error("No files matching `{pattern}` found in {dir}")]
    NoMatchingFiles { dir: PathBuf, pattern: String },

    /// The filename pattern could not be compiled as a glob
    #[error("Invalid file pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },

    /// One or more files failed during processing
    #[error("{failed} of {total} file(s) failed during processing")]
    FilesFailed { failed: usize, total: usize },
}

/// Specific errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Target directory not found: {0}")]
    TargetDirNotFound(PathBuf),

    #[error("File pattern cannot be empty")]
    EmptyPattern,

    #[error("Invalid configuration format: {0}")]
    InvalidFormat(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FixerError {
    fn from(err: serde_json::Error) -> Self {
        FixerError::Config(ConfigError::InvalidFormat(err.to_string()))
    }
}
