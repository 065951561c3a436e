// Declare the cli module, which defines the command-line interface
pub mod cli;

// Declare the commands module, which handles the individual CLI operations
pub mod commands;

// Declare the config module, which handles configuration management
pub mod config;

// Declare the core module, which drives a fix run end to end
pub mod core;

// Declare the discovery module, which finds the target HTML files
pub mod discovery;

// Declare the encoding module, which handles decoding, inspection and
// newline normalization
pub mod encoding;

// Declare the errors module, which contains custom error types
pub mod errors;

// Declare the progress module, which renders the file-loop progress bar
pub mod progress;

// Declare the report module, which accumulates per-file outcomes
pub mod report;
