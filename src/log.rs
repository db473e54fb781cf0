//! Logging setup with file output and optional stderr.
//!
//! Logs always go to a file. Stderr logging is only enabled when
//! `VISIONARY_LOG` or `RUST_LOG` is set, since terminal mode owns the screen.
//!
//! ## Filter priority
//!
//! 1. **`VISIONARY_LOG`**
//! 2. **`RUST_LOG`**
//! 3. **Default** - `warn` globally, `info` for visionary
//!
//! ## Log file location
//!
//! Default: `<data_local_dir>/visionary/logs/visionary-<pid>.log`
//! (`~/.local/share/visionary/logs/...` on Linux). Override with
//! `--log-file <path>` or `VISIONARY_LOG_FILE`.

use std::env;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

const DEFAULT_FILTER: &str = "warn,visionary=info";

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("failed to open the log file: {0}")]
    File(#[from] InitError),
    #[error("failed to install the log subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Returned from [`init`]; must be held alive so the log file gets flushed.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

#[derive(Debug, Default)]
pub struct LogConfig {
    pub log_file_path: Option<PathBuf>,
}

/// Initialize logging.
///
/// The returned [`LogGuard`] must be held for the lifetime of the program;
/// dropping it flushes and stops the background file writer.
pub fn init(config: LogConfig) -> Result<LogGuard, LogError> {
    let (log_dir, filename) = resolve_log_path(config.log_file_path);

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(&filename)
        .build(&log_dir)?;
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(create_filter());

    let stderr_enabled = env::var("VISIONARY_LOG").is_ok() || env::var("RUST_LOG").is_ok();
    let stderr_layer = if stderr_enabled {
        Some(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(create_filter()),
        )
    } else {
        None
    };

    Registry::default()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    Ok(LogGuard {
        _file_guard: file_guard,
        log_file: log_dir.join(filename),
    })
}

fn create_filter() -> EnvFilter {
    filter_from(
        env::var("VISIONARY_LOG")
            .ok()
            .or_else(|| env::var("RUST_LOG").ok()),
    )
}

fn filter_from(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Split the log destination into (directory, file name).
///
/// A path with an extension names the file itself; anything else is treated
/// as a directory that gets the per-process file name.
fn resolve_log_path(override_path: Option<PathBuf>) -> (PathBuf, String) {
    let filename = format!("visionary-{}.log", std::process::id());

    if let Some(path) = override_path {
        if path.extension().is_some() {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or(filename);
            return (dir.to_path_buf(), name);
        }
        return (path, filename);
    }

    let dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("visionary")
        .join("logs");

    (dir, filename)
}
