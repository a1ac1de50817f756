//! File-based logging
//!
//! The terminal belongs to the TUI, so log output goes to a file.
//! Filter defaults to `info` and can be overridden with `RUST_LOG`.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file name inside the log directory
pub const LOG_FILE_NAME: &str = "tij-empty.log";

/// Errors that can occur while setting up logging
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("failed to create log directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Default log directory (`<temp dir>/tij-empty`)
pub fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join("tij-empty")
}

/// Install a global subscriber writing to `<dir>/tij-empty.log`
///
/// Returns the log file path and the guard that flushes the non-blocking
/// writer; keep the guard alive for the lifetime of the program.
pub fn init_logging(dir: &Path) -> Result<(PathBuf, WorkerGuard), LoggingError> {
    std::fs::create_dir_all(dir).map_err(|source| LoggingError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)?;

    Ok((dir.join(LOG_FILE_NAME), guard))
}
