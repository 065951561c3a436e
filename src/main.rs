// ============================================================================
// htmlfix - HTML Encoding Normalizer
// Main Entry Point
//
// Re-reads HTML lesson part files with a best-effort encoding fallback
// (strict UTF-8, then Latin-1, which never fails) and rewrites them as
// UTF-8 with Unix line endings. One sequential pass over a bounded file
// set; a fault on one file never stops the rest.
// ============================================================================

use clap::Parser; // Command-line argument parsing with derive macros
use log::info; // Structured logging for debugging and monitoring

// Application modules - organized by functionality
mod cli; // Command-line interface definitions and argument parsing
mod commands; // Command handlers for the fix and config operations
mod config; // Configuration file management and validation
mod core; // Core processing logic for the fix run
mod discovery; // Target file discovery via glob matching
mod encoding; // Encoding fallback, content inspection and normalization
mod errors; // Custom error types and error handling utilities
mod progress; // Progress bar over the file loop
mod report; // Per-file outcomes and the final tally

// Import application components
use anyhow::Result; // Error handling at the binary boundary
use cli::{Cli, Commands, FixArgs}; // CLI structure and command enumeration
use commands::CommandHandler; // Command processing and orchestration

/// Main application entry point
///
/// Parses command-line arguments, initializes logging, and dispatches to
/// the command handlers. With no subcommand the fix operation runs with its
/// built-in defaults, which is the primary way this tool is invoked. A
/// non-zero exit status covers every failure mode: missing directory, zero
/// matching files, and any per-file read or write fault.
#[tokio::main] // Tokio async runtime initialization
async fn main() -> Result<()> {
    // Parse command-line arguments using clap derive macros
    let cli = Cli::parse();

    // Initialize the structured logging system
    // Log level is configurable via CLI arguments (--log-level)
    env_logger::builder().filter_level(cli.log_level()).init();

    info!("htmlfix starting up");

    // Route execution to the appropriate command handler
    match cli.command {
        // FIX COMMAND - Primary functionality
        Some(Commands::Fix(ref args)) => {
            info!("Executing fix command");
            CommandHandler::handle_fix(&cli, args.clone()).await?;
        }

        // GENERATE-CONFIG COMMAND - Configuration management
        Some(Commands::GenerateConfig(ref args)) => {
            info!("Executing generate-config command");
            CommandHandler::handle_generate_config(args.clone()).await?;
        }

        // No subcommand: run the fix with its defaults
        None => {
            info!("No subcommand given, running fix with defaults");
            CommandHandler::handle_fix(&cli, FixArgs::default()).await?;
        }
    }

    info!("htmlfix operation completed");
    Ok(())
}
