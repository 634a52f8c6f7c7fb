//! Tracing setup.
//!
//! The terminal belongs to the game, so log records go to a file through a
//! non-blocking writer. `RUST_LOG` filters as usual (default `info`).

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

/// Install the global subscriber writing to `log_path`.
///
/// Keep the returned guard alive until shutdown; dropping it flushes
/// buffered records.
pub fn init(log_path: &Path) -> Result<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let dir = match log_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let file_name = log_path
        .file_name()
        .with_context(|| format!("log path {} has no file name", log_path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    // Panics would otherwise print into the alternate screen and vanish.
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "<unknown>".to_string());
        let message = if let Some(s) = info.payload().downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "<non-string panic>".to_string()
        };
        let bt = std::backtrace::Backtrace::force_capture();
        tracing::error!(%location, "panic: {message}\nBacktrace:\n{bt:?}");
        previous(info);
    }));

    Ok(guard)
}
