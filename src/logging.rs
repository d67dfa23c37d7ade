//! Logging via `tracing`, written to a file.
//!
//! The TUI owns stdout, so log lines never go to the terminal. By default
//! they land in `<data dir>/unit-converter/unit-converter.log`.
//!
//! Filter precedence: `UNIT_CONVERTER_LOG`, then `RUST_LOG`, then the
//! level derived from `-v` flags (info, debug, trace).

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Error, Result};

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "UNIT_CONVERTER_LOG";

const APP_DIR: &str = "unit-converter";
const LOG_FILE: &str = "unit-converter.log";

/// Where and how much to log.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    /// Log file. None means the default location.
    pub file: Option<PathBuf>,
}

impl LogConfig {
    /// 0 → info, 1 → debug, 2+ → trace.
    pub fn from_verbosity(verbosity: u8, file: Option<PathBuf>) -> Self {
        let level = match verbosity {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        };
        LogConfig { level, file }
    }
}

/// Default log file under the platform data directory.
pub fn default_log_path() -> Result<PathBuf> {
    let base = dirs::data_local_dir().ok_or(Error::DataDirNotFound)?;
    Ok(base.join(APP_DIR).join(LOG_FILE))
}

/// Open the log file for appending, creating it and its parent directories.
/// Earlier runs stay in the file, so a `convert` call never wipes the log
/// of an interactive session.
pub fn open_log_file(path: &Path) -> Result<File> {
    let to_error = |source: std::io::Error| Error::LogFile {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(to_error)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_error)
}

/// Filter directive: an explicit override wins over the crate level.
pub fn filter_directive(level: Level, env_override: Option<String>) -> String {
    match env_override {
        Some(directive) if !directive.trim().is_empty() => directive,
        _ => format!("{}={}", env!("CARGO_CRATE_NAME"), level.to_string().to_lowercase()),
    }
}

/// Install the global subscriber. Returns the log file path in use.
pub fn init_logging(config: &LogConfig) -> Result<PathBuf> {
    let path = match &config.file {
        Some(path) => path.clone(),
        None => default_log_path()?,
    };
    let file = open_log_file(&path)?;

    let env_override = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok();
    let directive = filter_directive(config.level, env_override);
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| Error::LoggingInit(format!("invalid filter {:?}: {}", directive, e)))?;

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| Error::LoggingInit(e.to_string()))?;

    Ok(path)
}

// ============================================================================
// TESTS
// ============================================================================
