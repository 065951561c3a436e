// Import required dependencies
use crate::errors::{ConfigError, FixerError, FixerResult};
use serde::{Deserialize, Serialize}; // For JSON serialization/deserialization
use std::path::PathBuf; // For file path handling
use tokio::fs; // For async file operations

// Configuration structure that can be serialized to/from JSON
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub target_dir: Option<PathBuf>, // Directory containing the HTML part files
    pub pattern: Option<String>,     // Filename glob selecting the part files
    pub verbose: bool,               // Enable per-file narration
    pub debug: bool,                 // Enable the statistics breakdown
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_dir: None,
            pattern: None,
            verbose: true,
            debug: false,
        }
    }
}

impl Config {
    // Load configuration from a JSON file
    pub async fn load(path: &PathBuf) -> FixerResult<Self> {
        let content = fs::read_to_string(path).await.map_err(FixerError::Io)?;
        serde_json::from_str(&content)
            .map_err(|e| FixerError::Config(ConfigError::InvalidFormat(e.to_string())))
    }

    // Save configuration to a JSON file
    pub async fn save(&self, path: &PathBuf) -> FixerResult<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| FixerError::Config(ConfigError::SerializationError(e.to_string())))?;
        fs::write(path, content).await.map_err(FixerError::Io)
    }

    // Create a default configuration template
    pub fn template() -> Self {
        Self {
            target_dir: Some(PathBuf::from(crate::discovery::PARTS_DIR)),
            pattern: Some(crate::discovery::PART_FILE_PATTERN.to_string()),
            verbose: true,
            debug: false,
        }
    }

    // Validate the configured values before a run
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(pattern) = &self.pattern {
            if pattern.trim().is_empty() {
                return Err(ConfigError::EmptyPattern);
            }
        }

        // A configured directory must exist; the built-in default is checked
        // again by discovery at run time
        if let Some(dir) = &self.target_dir {
            if !dir.exists() {
                return Err(ConfigError::TargetDirNotFound(dir.clone()));
            }
        }

        Ok(())
    }
}
