use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// File name of the CLI's own log inside the log directory
pub const LOG_FILE_NAME: &str = "plugin-kit.log";

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `verbose`. With a `log_dir` the output is
/// written as JSON lines to [`LOG_FILE_NAME`] through a non-blocking writer;
/// the returned guard must be kept alive until exit so buffered lines get
/// flushed. Without one, human-readable lines go to stderr.
///
/// A subscriber that is already installed is left in place.
pub fn init(log_dir: Option<&Path>, verbose: bool) -> io::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));

    let Some(dir) = log_dir else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .try_init();
        return Ok(None);
    };

    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();

    Ok(Some(guard))
}
