//! Logging setup.
//!
//! Records go to a daily-rolling JSON file under `<data_dir>/logs`. There is no
//! stdout layer: while ratatui holds the terminal in raw/alternate-screen mode
//! anything written to stdout corrupts the display.

use std::fs;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub const LOG_FILE_PREFIX: &str = "campaign-admin.log";

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Directory the log files are written to.
pub fn log_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("logs")
}

/// Initialize the logging system for TUI mode.
///
/// This sets up:
/// 1. A file logger (JSON formatted) in `<data_dir>/logs`.
/// 2. Redirects standard `log` crate events to `tracing`.
///
/// Returns a `WorkerGuard` which must be kept alive for the duration of the application
/// to ensure buffered logs are flushed on shutdown.
pub fn init_tui(data_dir: &Path) -> WorkerGuard {
    let log_dir = log_dir(data_dir);

    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create logs directory: {}", e);
        }
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(true)
        .with_filter(env_filter);

    // `try_init` also installs the `log` -> `tracing` bridge, so `log::` records
    // from the views land in the same file.
    if let Err(e) = tracing_subscriber::registry().with(file_layer).try_init() {
        eprintln!("Failed to install tracing subscriber: {}", e);
    }

    tracing::info!(
        log_file = %log_dir.join(LOG_FILE_PREFIX).display(),
        "Logging initialized (daily rolling)"
    );

    guard
}
