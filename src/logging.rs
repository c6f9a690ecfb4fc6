//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The terminal belongs to the game screen, so log lines never go to
//! stdout/stderr. They are appended to a file, or dropped entirely when
//! logging was not asked for.
//!
//! # Log Levels
//!
//! - `warn`: dictionary failures, unreadable config
//! - `info`: session starts
//! - `debug`: every accepted or rejected word

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// `None` turns logging off.
    pub level: Option<Level>,
    pub log_file: Option<PathBuf>,
}

impl LogConfig {
    /// - 0: off, unless a log file was given (then info)
    /// - 1 (`-v`): debug
    /// - 2+ (`-vv`): trace
    #[must_use]
    pub fn from_verbosity(verbosity: u8, log_file: Option<PathBuf>) -> Self {
        let level = match (verbosity, log_file.is_some()) {
            (0, false) => None,
            (0, true) => Some(Level::INFO),
            (1, _) => Some(Level::DEBUG),
            _ => Some(Level::TRACE),
        };
        Self { level, log_file }
    }
}

/// Installs the global subscriber. Call once at startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init_logging(config: &LogConfig, default_file: Option<PathBuf>) -> io::Result<()> {
    let Some(level) = config.level else {
        return Ok(());
    };

    let Some(path) = config.log_file.clone().or(default_file) else {
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    init_logging_with_writer(level, Mutex::new(file));
    tracing::debug!(path = %path.display(), "logging initialised");
    Ok(())
}

/// Initialize logging with a custom writer (useful for testing).
pub fn init_logging_with_writer<W>(level: Level, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false);

    // try_init so a second call (tests) is a no-op rather than a panic
    let _ = tracing_subscriber::registry()
        .with(build_env_filter(level))
        .with(layer)
        .try_init();
}

/// `RUST_LOG` wins over the configured level.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.as_str().to_lowercase();
        EnvFilter::new(format!("warn,scramble={level}"))
    })
}
