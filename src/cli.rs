// ============================================================================
// CLI Module - Command-Line Interface Definitions
//
// Defines the command-line interface for htmlfix using the clap crate with
// derive macros. Running the binary with no arguments is the primary mode:
// it fixes the lesson part files in the default `parts` directory. The
// subcommands exist for overrides and config management.
// ============================================================================

use clap::{Parser, Subcommand}; // Modern command-line parsing with derive macros
use log::LevelFilter;
use std::path::PathBuf; // Cross-platform file path handling // Logging level configuration

/// htmlfix - HTML Encoding Normalizer
///
/// Re-reads HTML lesson part files with a best-effort encoding fallback
/// (UTF-8 first, Latin-1 on decode failure) and rewrites them as UTF-8 with
/// Unix line endings, so emojis and punctuation display properly in
/// browsers.
///
/// Examples:
///   htmlfix
///   htmlfix fix --dir parts --pattern 'lesson_24_firefly_rendering_part_*.html'
///   htmlfix fix --dry-run
///   htmlfix generate-config config.json --template
#[derive(Parser)]
#[command(
    name = "htmlfix",
    about = "Re-encodes HTML lesson part files as clean UTF-8 with Unix line endings",
    long_about = "htmlfix scans a directory for HTML part files matching a filename pattern, \
                  re-reads each one with a best-effort encoding fallback (strict UTF-8, then \
                  Latin-1, which never fails), flags suspected mojibake, and rewrites the file \
                  as UTF-8 with all line endings normalized to a single linefeed.",
    version,
    after_help = "Examples:\n  \
                  htmlfix\n  \
                  htmlfix fix --dir parts\n  \
                  htmlfix fix --dry-run -d\n  \
                  htmlfix generate-config config.json --template\n\n\
                  Running with no arguments fixes lesson_24_firefly_rendering_part_*.html \
                  files in ./parts."
)]
pub struct Cli {
    /// Increase verbosity level (can be used multiple times)
    #[arg(
        global = true,
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v: per-file narration)"
    )]
    verbose: u8,

    /// The operation to perform; defaults to `fix` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Set the logging level explicitly
    ///
    /// Accepts: error, warn, info, debug, trace
    #[arg(
        global = true,
        long,
        default_value = "info",
        help = "Set log level explicitly [error|warn|info|debug|trace]"
    )]
    log_level: String,
}

// ============================================================================
// SUBCOMMAND DEFINITIONS
// ============================================================================

/// Available subcommands for different operations
#[derive(Subcommand)]
pub enum Commands {
    /// Fix encoding and line endings of the matching HTML files
    ///
    /// Discovers the part files, decodes each with the UTF-8 / Latin-1
    /// fallback, and rewrites them in place as UTF-8. This is also what
    /// runs when no subcommand is given.
    #[command(
        about = "Fix encoding and line endings of matching HTML files (default)",
        long_about = "Discover HTML part files, decode each with a strict-UTF-8-then-Latin-1 \
                      fallback, flag suspected mojibake, and rewrite the files in place as \
                      UTF-8 with Unix line endings. A read or write fault on one file never \
                      stops the remaining files from being processed."
    )]
    Fix(FixArgs),

    /// Generate a configuration file template
    ///
    /// Creates a JSON configuration file with the default target directory
    /// and filename pattern, ready to customize.
    #[command(
        about = "Generate a JSON configuration file template",
        long_about = "Generate a JSON configuration file with the default settings for reuse. \
                      The template records the target directory, the filename pattern, and the \
                      verbosity preferences."
    )]
    GenerateConfig(GenerateConfigArgs),
}

// Structure defining all possible arguments for the fix command
#[derive(Parser, Clone, Default)]
pub struct FixArgs {
    // Directory containing the HTML part files
    #[arg(
        long = "dir",
        help = "Directory containing the HTML part files [default: parts]",
        value_name = "DIR"
    )]
    pub dir: Option<PathBuf>,

    // Filename glob selecting the part files
    #[arg(
        long = "pattern",
        help = "Filename glob selecting the part files [default: lesson_24_firefly_rendering_part_*.html]",
        value_name = "GLOB"
    )]
    pub pattern: Option<String>,

    // Configuration file path
    #[arg(
        short = 'c',
        long = "config",
        help = "JSON configuration file with default settings",
        value_name = "FILE"
    )]
    pub config: Option<PathBuf>,

    // Inspect without rewriting
    #[arg(
        long = "dry-run",
        help = "Decode and inspect the files without rewriting them"
    )]
    pub dry_run: bool,

    // Debug mode flag
    #[arg(short = 'd', long = "debug", help = "Print the encoding statistics breakdown")]
    pub debug: bool,
}

// Arguments for the generate-config command
#[derive(Parser, Clone)]
pub struct GenerateConfigArgs {
    // Output path for the configuration file
    #[arg(help = "Destination path for configuration file", value_name = "FILE")]
    pub output: PathBuf,

    // Flag to generate template configuration
    #[arg(
        short = 't',
        long = "template",
        help = "Generate default configuration template"
    )]
    pub template: bool,
}

// Implementation of helper methods for the Cli struct
impl Cli {
    // Convert the log level argument to the corresponding filter
    pub fn log_level(&self) -> LevelFilter {
        match self.log_level.as_str() {
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Info,
        }
    }

    pub fn verbose_count(&self) -> u8 {
        self.verbose
    }
}
