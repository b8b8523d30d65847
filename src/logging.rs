use anyhow::{Context, Result};
use camino::Utf8Path;
use std::fs;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log level filter for the given mode.
///
/// Console output stays at `warn` outside debug mode so project listings are
/// not interleaved with log lines.
pub fn level_filter(debug_mode: bool) -> EnvFilter {
    if debug_mode {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    }
}

/// Setup logging to stderr, plus a daily rotating file when `log_dir` is set.
///
/// # Arguments
/// * `debug_mode` - If true, use debug level; otherwise warn
/// * `log_dir` - Optional directory for log files
/// * `log_prefix` - Prefix for log files (e.g., "mycode")
///
/// # Returns
/// A guard that must be held for the duration of the program when file logging is active
pub fn setup_logging(
    debug_mode: bool,
    log_dir: Option<&Utf8Path>,
    log_prefix: &str,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false);

    let (file_layer, guard) = match log_dir {
        Some(log_dir) => {
            // Create log directory if it doesn't exist
            if !log_dir.exists() {
                fs::create_dir_all(log_dir)
                    .with_context(|| format!("Failed to create log directory: {}", log_dir))?;
            }

            let file_appender = rolling::daily(log_dir, log_prefix);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false) // No ANSI codes in log files
                .with_target(true)
                .with_file(true)
                .with_line_number(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(level_filter(debug_mode))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::debug!(
        "Logging initialized: debug={}, log_dir={:?}",
        debug_mode,
        log_dir
    );

    Ok(guard)
}
