use crate::{CONFIG_DIRECTORY, LOG_FILE};
use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,soundboard=debug";

pub fn log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(CONFIG_DIRECTORY))
}

/// The terminal belongs to the TUI, so everything goes to a log file.
///
/// Logging is optional: when the cache directory is unknown or unwritable
/// a single line goes to stderr and the board runs without a subscriber.
/// The returned guard flushes buffered lines when dropped and must be held
/// for the lifetime of the program.
pub fn init_logging() -> Option<WorkerGuard> {
    match log_dir() {
        Some(dir) => init_logging_in(&dir),
        None => {
            eprintln!("Logging disabled: could not determine cache directory");
            None
        }
    }
}

pub fn init_logging_in(log_dir: &Path) -> Option<WorkerGuard> {
    match install(log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Logging disabled: {e:#}");
            None
        }
    }
}

fn install(log_dir: &Path) -> Result<WorkerGuard> {
    let (file_writer, guard) = file_writer(log_dir)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::fmt()
        .with_writer(file_writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_env_filter(filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("Could not install log subscriber: {e}"))?;

    Ok(guard)
}

fn file_writer(log_dir: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Could not create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    Ok(tracing_appender::non_blocking(file_appender))
}
