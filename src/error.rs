//! Error types for unit-converter.
//!
//! Malformed numbers are not errors (they render as NaN). These cover
//! the operational failures around the form: terminal I/O, log setup
//! and report encoding.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to `main`.
#[derive(Debug, Error)]
pub enum Error {
    /// Terminal setup, drawing or event reading failed.
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),

    /// No platform data directory to place the default log file in.
    #[error("could not determine a data directory for the log file")]
    DataDirNotFound,

    /// Log file or its directory could not be created.
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A global tracing subscriber was already installed.
    #[error("failed to initialize logging: {0}")]
    LoggingInit(String),

    /// Report could not be encoded as JSON.
    #[error("failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
