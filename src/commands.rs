// Import required dependencies
use anyhow::{Context, Result}; // For error handling
use log::info; // For logging
use std::path::PathBuf; // For file path operations

// Import local modules
use crate::{
    cli::{Cli, FixArgs, GenerateConfigArgs}, // CLI arguments
    config::Config,                          // Configuration handling
    core::FixerCore,                         // Core processing logic
    discovery,                               // Default directory and pattern
    errors::FixerError,                      // Custom error types
};

// Command handler for processing CLI commands
pub struct CommandHandler;

impl CommandHandler {
    // Handle the fix command - repairs encoding of the matching HTML files
    pub async fn handle_fix(cli: &Cli, args: FixArgs) -> Result<()> {
        info!("Starting encoding fix operation");

        // Load existing config or fall back to built-in defaults
        let config = if let Some(config_path) = &args.config {
            Config::load(config_path).await?
        } else {
            Config::default()
        };
        config.validate()?;

        // CLI flags win over config values, config over built-in defaults
        let target_dir = args
            .dir
            .or(config.target_dir)
            .unwrap_or_else(|| PathBuf::from(discovery::PARTS_DIR));
        let pattern = args
            .pattern
            .or(config.pattern)
            .unwrap_or_else(|| discovery::PART_FILE_PATTERN.to_string());

        let debug_enabled = args.debug || config.debug;
        let verbose_enabled = cli.verbose_count() > 0 || config.verbose;

        let mut core = FixerCore::new(
            target_dir,
            pattern,
            verbose_enabled,
            debug_enabled,
            args.dry_run,
        );
        let report = core.run().await?;

        // Per-file faults do not abort the run, but they must surface in the
        // exit status
        if !report.all_successful() {
            return Err(FixerError::FilesFailed {
                failed: report.failure_count(),
                total: report.total(),
            }
            .into());
        }

        info!("Fix operation completed");
        Ok(())
    }

    // Handle configuration file generation
    pub async fn handle_generate_config(args: GenerateConfigArgs) -> Result<()> {
        info!("Generating configuration file");

        // Template fills in the default directory and pattern; otherwise the
        // generated file leaves them unset
        let config = if args.template {
            Config::template()
        } else {
            Config::default()
        };

        // Save configuration to specified path
        config
            .save(&args.output)
            .await
            .with_context(|| format!("failed to write configuration to {:?}", args.output))?;

        info!("Configuration file generated at: {:?}", args.output);
        Ok(())
    }
}
