//! Logging configuration with file-based output and size-based rotation.
//!
//! Writes logs to `~/.config/tipboard/tipboard.log` (or platform equivalent)
//! with 10 MB size-based rotation. Console output goes to stderr so it does
//! not interleave with the REPL's stdout. Set `DEBUG_LOGGING=1` to enable
//! debug output for tipboard crates.

use std::path::{Path, PathBuf};

use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const LOG_FILE: &str = "tipboard.log";
const MAX_LOG_BYTES: u64 = 10 * 1024 * 1024;
/// tipboard.log plus tipboard.log.1
const ROTATED_FILES: usize = 1;

/// Filter directive for the given debug switch. Dependencies stay at warn.
fn directive(debug_logging: bool) -> &'static str {
    if debug_logging {
        "warn,tipboard_core=debug,tipboard_cli=debug"
    } else {
        "warn,tipboard_core=info,tipboard_cli=info"
    }
}

fn log_dir() -> Result<PathBuf, String> {
    let dir = dirs::config_dir()
        .ok_or("no config directory on this platform")?
        .join("tipboard");
    std::fs::create_dir_all(&dir)
        .map_err(|e| format!("failed to create log directory {dir:?}: {e}"))?;
    Ok(dir)
}

fn open_appender(dir: &Path) -> Result<(PathBuf, BasicRollingFileAppender), String> {
    let path = dir.join(LOG_FILE);
    let appender = BasicRollingFileAppender::new(
        &path,
        RollingConditionBasic::new().max_size(MAX_LOG_BYTES),
        ROTATED_FILES,
    )
    .map_err(|e| format!("failed to create log file at {path:?}: {e}"))?;
    Ok((path, appender))
}

/// Initialize logging with dual output (file + stderr).
///
/// Returns a `WorkerGuard` that must be held for the application lifetime
/// so buffered lines are flushed on shutdown.
///
/// # Behavior
/// - **File output:** tipboard crates at INFO+ (DEBUG+ with `DEBUG_LOGGING`),
///   dependencies at WARN+, no ANSI colors
/// - **Stderr output:** same filter as the file
/// - **Rotation:** size-based at 10 MB, keeps one rotated file
///
/// # Fallback
/// If the log directory or file cannot be created, prints the reason to
/// stderr, installs a stderr-only subscriber and returns `None`.
pub fn init() -> Option<WorkerGuard> {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let (log_path, appender) = match log_dir().and_then(|dir| open_appender(&dir)) {
        Ok(opened) => opened,
        Err(reason) => {
            // Subscriber not installed yet
            eprintln!("{reason}, logging to stderr only");
            init_stderr_only(debug_logging);
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer())
        .with(EnvFilter::new(directive(debug_logging)))
        .init();

    tracing::info!(log_file = ?log_path, debug_logging, "tipboard logging initialized");
    Some(guard)
}

fn stderr_layer<S>() -> impl tracing_subscriber::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE)
}

fn init_stderr_only(debug_logging: bool) {
    tracing_subscriber::registry()
        .with(stderr_layer())
        .with(EnvFilter::new(directive(debug_logging)))
        .init();

    tracing::info!(debug_logging, "tipboard logging initialized (stderr only)");
}
