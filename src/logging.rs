use std::path::Path;

use anyhow::{Context, anyhow};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Installs the global `tracing` subscriber.
///
/// Events go to stderr, or to `log_file` through a non-blocking writer when a
/// path is given. The returned guard flushes the file writer on drop and must
/// be kept alive until the program exits.
pub fn init(level: Level, log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .with_context(|| format!("log path {} has no file name", path.display()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            builder
                .with_ansi(false)
                .with_writer(writer)
                .try_init()
                .map_err(|e| anyhow!("failed to install tracing subscriber: {}", e))?;
            Ok(Some(guard))
        }
        None => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow!("failed to install tracing subscriber: {}", e))?;
            Ok(None)
        }
    }
}
