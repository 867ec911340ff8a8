//! Logging for the Iconik command-line tools.
//!
//! Colored output on stderr (stdout is reserved for results) plus an optional
//! plain-text log file, with thread-safe one-time initialization.

use crate::error::ToolError;

use common::ErrorLocation;

use std::io::stderr;
use std::path::Path;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

/// Thread-safe initialization guard.
static INIT_LOGGER_ONCE: Once = Once::new();

/// Tracks if logger initialization was already attempted.
static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

pub const LOG_FILE_NAME: &str = "iconik-tools.log";

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";
const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

/// Noisy HTTP internals stay at `Warn` unless tracing is asked for.
const QUIET_MODULES: [&str; 3] = ["hyper_util", "reqwest", "rustls"];

/// Initialize the global logger.
///
/// Safe to call multiple times: later calls log a warning and return Ok.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or the dispatch
/// cannot be installed.
pub fn initialize(level: LevelFilter, log_dir: Option<&Path>) -> Result<(), ToolError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        result = build_dispatch(level, log_dir).and_then(|dispatch| {
            dispatch.apply().map_err(|e| ToolError::Tool {
                message: format!("Failed to initialize logger: {e}"),
                location: ErrorLocation::from(std::panic::Location::caller()),
            })
        });
        if result.is_ok() {
            info!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{level:?}");
        }
    });

    result
}

/// Build the stderr dispatch and, when `log_dir` is given, the file dispatch.
#[track_caller]
pub fn build_dispatch(level: LevelFilter, log_dir: Option<&Path>) -> Result<Dispatch, ToolError> {
    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let mut base_dispatch = Dispatch::new().level(level);
    if level < LevelFilter::Trace {
        for module in QUIET_MODULES {
            base_dispatch = base_dispatch.level_for(module, LevelFilter::Warn);
        }
    }

    let stderr_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(stderr());

    base_dispatch = base_dispatch.chain(stderr_dispatch);

    if let Some(log_dir) = log_dir {
        let log_file_path = log_dir.join(LOG_FILE_NAME);
        let file_dispatch = Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    date = format_rfc3339(SystemTime::now()),
                    level = record.level(),
                    message = message,
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0)
                ))
            })
            .chain(
                fern::log_file(&log_file_path).map_err(|e| ToolError::Tool {
                    message: format!("Failed to create log file {}: {e}", log_file_path.display()),
                    location: ErrorLocation::from(std::panic::Location::caller()),
                })?,
            );
        base_dispatch = base_dispatch.chain(file_dispatch);
    }

    Ok(base_dispatch)
}
