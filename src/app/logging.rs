use std::path::Path;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

pub const LOG_FILE_NAME: &str = "tilemaze.log";

/// Log level from the `DEBUG` environment variable: `DEBUG=1` enables debug logs.
pub fn log_level() -> Level {
    match std::env::var("DEBUG") {
        Ok(val) if val == "1" => Level::DEBUG,
        _ => Level::INFO,
    }
}

/// Route tracing output to a log file in `dir`, keeping the terminal free for the maze.
/// The returned guard must be held until exit so buffered lines get flushed.
pub fn init_logging(dir: impl AsRef<Path>) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(log_level())
        .init();
    guard
}
