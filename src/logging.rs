//! Logging setup for the host shell
//!
//! The core never configures logging on its own; the shell that embeds
//! it decides where log files live and calls [`init_logging`] once at
//! startup. Output goes to a daily-rotated file only, since a mobile
//! shell has no console to write to.

use anyhow::Result;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize file-based logging under the directory the shell owns.
///
/// Creates `<log_dir>/<file_stem>.log` with daily rotation. Level
/// defaults to info and can be overridden with RUST_LOG. Fails if a
/// global subscriber is already installed.
pub fn init_logging(log_dir: impl AsRef<Path>, file_stem: &str) -> Result<()> {
    let log_dir = log_dir.as_ref();
    std::fs::create_dir_all(log_dir)?;

    let file_appender =
        RollingFileAppender::new(Rotation::DAILY, log_dir, format!("{file_stem}.log"));

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    tracing::info!(
        "Logging initialized, writing to {}/{}.log",
        log_dir.display(),
        file_stem
    );

    Ok(())
}
