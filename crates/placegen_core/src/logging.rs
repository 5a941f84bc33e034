use std::path::Path;

use anyhow::Result;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

use crate::config::PlacegenConfig;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,placegen_core=debug,placegen_app=debug";

/// Initializes the logging system with file + console output.
/// Returns a guard that must be kept alive for the duration of the run.
pub fn init_logging() -> Result<WorkerGuard> {
    let logs_dir = PlacegenConfig::logs_dir()?;
    init(&logs_dir, DEFAULT_FILTER, true)
}

/// Initialize logging to a custom directory with a custom filter.
/// Useful for tests where `~/.placegen/logs` is not desired.
pub fn init_logging_to_dir(logs_dir: &Path, filter: &str) -> Result<WorkerGuard> {
    init(logs_dir, filter, false)
}

/// Console-only logging, used when the logs directory is unavailable.
pub fn init_console_logging() -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(DEFAULT_FILTER))
        .with(fmt::layer().with_target(false).compact())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}

fn init(logs_dir: &Path, filter: &str, console: bool) -> Result<WorkerGuard> {
    std::fs::create_dir_all(logs_dir)?;

    // File appender: daily rotation
    let file_appender = tracing_appender::rolling::daily(logs_dir, "placegen");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter(filter))
        .with(file_layer(non_blocking))
        .with(console.then(|| fmt::layer().with_target(false).compact()))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(guard)
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn file_layer<S>(writer: tracing_appender::non_blocking::NonBlocking) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
}
