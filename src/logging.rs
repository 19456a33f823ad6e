//! Tracing setup. Output goes to a daily log file because the terminal is
//! taken over by the playfield.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{self, LogSettings};
use crate::error::{Error, Result};

/// Installs the global subscriber. Keep the returned guard alive until exit so
/// buffered lines are flushed. Returns `None` when file logging is disabled.
pub fn init(settings: &LogSettings) -> Result<Option<WorkerGuard>> {
    if !settings.file_logging {
        return Ok(None);
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let dir = config::log_dir()?;
    std::fs::create_dir_all(&dir)?;
    let appender = tracing_appender::rolling::daily(&dir, "stratoblocks.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer),
        )
        .try_init()
        .map_err(|e| Error::config(format!("logging already initialised: {e}")))?;

    Ok(Some(guard))
}
