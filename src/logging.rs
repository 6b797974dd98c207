//! Tracing subscriber setup
//!
//! Logs never go to stdout, which may carry the check's outputs.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

fn env_filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "debug" } else { DEFAULT_FILTER };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber.
///
/// With `log_file` set, logs are written there as JSON lines; otherwise they
/// go to stderr. Keep the returned guard alive until exit so buffered lines
/// are flushed.
pub fn init(verbose: bool, log_file: Option<&Path>) -> std::io::Result<Option<WorkerGuard>> {
    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            let (writer, guard) = tracing_appender::non_blocking(file);

            tracing_subscriber::fmt()
                .json()
                .with_env_filter(env_filter(verbose))
                .with_writer(writer)
                .init();

            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(verbose))
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();

            Ok(None)
        }
    }
}
