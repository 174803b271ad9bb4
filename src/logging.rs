use anyhow::Context;
use std::env;
use std::path::Path;
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Console logging goes to stderr so it never mixes with the rename plan.
/// A file layer is added when `LOG_FILE_PATH` or the configured `log_file`
/// names one; keep the returned guard alive until exit.
pub fn init_logger(config_log_file: Option<&str>) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = env::var("TRACING_LEVEL").unwrap_or_else(|_| "warn".to_string());
    let filter_layer = EnvFilter::new(filter);

    let log_file_path = env::var("LOG_FILE_PATH")
        .ok()
        .or_else(|| config_log_file.map(str::to_string));

    let (file_layer, guard) = match log_file_path {
        Some(path) => {
            let file_appender = file_appender(Path::new(&path))?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().with_writer(non_blocking).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_file(false)
                .without_time()
                .with_ansi(console::colors_enabled_stderr()),
        )
        .with(file_layer)
        .with(filter_layer)
        .try_init()
        .context("installing the tracing subscriber")?;

    debug!("Tracing is configured");

    Ok(guard)
}

/// Non-rotating appender writing exactly to `path`.
fn file_appender(path: &Path) -> anyhow::Result<RollingFileAppender> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .with_context(|| format!("log file path {} has no file name", path.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name.to_string_lossy())
        .build(dir)
        .with_context(|| format!("cannot open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_appender_creates_log_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("logs").join("vimv.log");
        assert!(file_appender(&path).is_ok());
        assert!(tmp.path().join("logs").is_dir());
    }

    #[test]
    fn test_file_appender_under_regular_file_is_an_error() {
        let tmp = tempdir().unwrap();
        let blocker = tmp.path().join("f");
        fs::write(&blocker, "not a directory").unwrap();

        let err = file_appender(&blocker.join("x.log")).unwrap_err();
        assert!(err.to_string().contains("cannot open log file"));
    }

    #[test]
    fn test_file_appender_needs_a_file_name() {
        assert!(file_appender(Path::new("/")).is_err());
    }
}
