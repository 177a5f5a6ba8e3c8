//! Logging infrastructure for fsshim.
//!
//! Structured logging through `tracing` with two outputs:
//! - a log file (cleared on session start), without ANSI colors
//! - stdout, optional, for tailing a long-running session
//!
//! The level is taken from the `RUST_LOG` environment variable and defaults
//! to `info`.

use std::fs;
use std::io;
use std::path::Path;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_FILE};

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard flushes and closes the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize logging to the log file and stdout.
///
/// Creates `log_dir` if needed, truncates `log_file` inside it, and installs
/// a global subscriber writing to both the file and stdout.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be
/// cleared.
pub fn init_logging(
    log_dir: impl AsRef<Path>,
    log_file: &str,
) -> Result<LoggingGuard, io::Error> {
    init_logging_full(log_dir, log_file, true)
}

/// Initialize logging with control over the stdout output.
///
/// With `stdout_enabled` false, events go to the log file only. Commands
/// that print their own results use this so log lines do not mix with
/// command output.
pub fn init_logging_full(
    log_dir: impl AsRef<Path>,
    log_file: &str,
    stdout_enabled: bool,
) -> Result<LoggingGuard, io::Error> {
    let (subscriber, guard) = build_subscriber(log_dir.as_ref(), log_file, stdout_enabled)?;
    subscriber.init();
    Ok(guard)
}

fn build_subscriber(
    log_dir: &Path,
    log_file: &str,
    stdout_enabled: bool,
) -> Result<(impl Subscriber + Send + Sync + 'static, LoggingGuard), io::Error> {
    prepare_log_file(log_dir, log_file)?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let stdout_layer = stdout_enabled.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stdout)
            .with_ansi(true)
    });

    let subscriber = tracing_subscriber::registry()
        .with(default_env_filter())
        .with(file_layer)
        .with(stdout_layer);

    Ok((
        subscriber,
        LoggingGuard {
            _file_guard: file_guard,
        },
    ))
}

/// Create the log directory and truncate the log file.
fn prepare_log_file(log_dir: &Path, log_file: &str) -> Result<(), io::Error> {
    fs::create_dir_all(log_dir)?;
    fs::write(log_dir.join(log_file), "")
}

/// Initialize stderr-only logging for short-lived commands.
///
/// `RUST_LOG` still takes precedence over `default_level`.
pub fn init_stderr_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter_or(default_level))
        .with_writer(io::stderr)
        .init();
}

/// Filter from `RUST_LOG`, falling back to `info`.
pub fn default_env_filter() -> EnvFilter {
    env_filter_or("info")
}

fn env_filter_or(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Get default log directory path.
pub fn default_log_dir() -> &'static str {
    DEFAULT_LOG_DIRECTORY
}

/// Get default log file name.
pub fn default_log_file() -> &'static str {
    DEFAULT_LOG_FILE
}
