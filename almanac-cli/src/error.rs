//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Input loading error
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Almanac parsing error
    #[error("Parse error: {0}")]
    Parse(#[from] almanac_core::ParseError),

    /// Executor error
    #[error("Executor error: {0}")]
    Executor(#[from] ExecutorError),
}

/// Input-loading errors
#[derive(Error, Debug)]
pub enum InputError {
    /// The named input file does not exist in the data directory
    #[error("input file {} not found", path.display())]
    NotFound { path: PathBuf },

    /// Reading the input file failed
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Executor-specific errors
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),
}
