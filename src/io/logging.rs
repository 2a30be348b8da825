use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::model::LoggingConfig;

/// Environment variable overriding `[logging] level`
pub const LOG_ENV: &str = "DAYBOOK_LOG";
pub const LOG_DIR: &str = ".logs";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("could not create log directory: {0}")]
    CreateDir(#[from] std::io::Error),
    #[error("invalid log filter {0:?}")]
    Filter(String),
    #[error("logging already initialized")]
    AlreadyInitialized,
}

/// Filter from `DAYBOOK_LOG` when set, otherwise the configured level
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    let directive = std::env::var(LOG_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| config.level.clone());
    EnvFilter::try_new(&directive).map_err(|_| LoggingError::Filter(directive))
}

/// Install a daily-rolling file subscriber under `<dir>/.logs/`.
///
/// The terminal belongs to the TUI, so nothing is written to stdout or
/// stderr. Keep the returned guard alive until exit so buffered lines get
/// flushed.
pub fn init_logging(dir: &Path, config: &LoggingConfig) -> Result<WorkerGuard, LoggingError> {
    let log_dir = dir.join(LOG_DIR);
    std::fs::create_dir_all(&log_dir)?;
    let appender = tracing_appender::rolling::daily(log_dir, "daybook.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)?;
    Ok(guard)
}
