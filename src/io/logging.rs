use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::model::config::LogConfig;

/// Environment variable that overrides the configured log filter
pub const LOG_ENV: &str = "TODO_LOG";

/// Error type for logging setup
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("could not open log file {path}: {source}")]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not install log subscriber: {0}")]
    InitError(#[from] tracing_subscriber::util::TryInitError),
}

/// Build the filter: `TODO_LOG` wins, then the configured level, then "info"
pub fn log_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a file-backed subscriber. The terminal belongs to the TUI, so
/// with no log file configured nothing is installed and events are dropped.
/// Returns the file being written, if any.
pub fn init_logging(
    config: &LogConfig,
    file_override: Option<&Path>,
) -> Result<Option<PathBuf>, LogError> {
    let Some(path) = file_override.or(config.file.as_deref()) else {
        return Ok(None);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LogError::OpenError {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing_subscriber::registry()
        .with(log_filter(&config.level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init()?;

    Ok(Some(path.to_path_buf()))
}
