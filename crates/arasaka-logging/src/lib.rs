//! Console and JSONL logging for the Arasaka portfolio
//!
//! The console gets pretty lines by default or JSON lines on request. An
//! optional session log writes JSON lines to a directory through
//! tracing-appender, rotated daily, hourly or not at all.
//!
//! ```ignore
//! use arasaka_logging::{ConsoleFormat, PortfolioSubscriberBuilder, RotationStrategy};
//!
//! let _guard = PortfolioSubscriberBuilder::new()
//!     .with_level("debug")
//!     .with_console(ConsoleFormat::Json)
//!     .with_session_log("./logs", RotationStrategy::Daily)
//!     .init();
//! ```
//!
//! Keep the returned guard alive for as long as the session log should be
//! flushed.

pub mod config;

pub use config::{ConsoleFormat, LogConfig, RotationStrategy, SessionLog, SESSION_LOG_PREFIX};

use std::fs::{self, File};
use std::path::PathBuf;

use thiserror::Error;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log directory or file could not be created
    #[error("failed to open log output: {0}")]
    Io(#[from] std::io::Error),

    /// A global subscriber is already installed
    #[error("subscriber already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Builder for the portfolio's global subscriber
#[derive(Debug, Default)]
pub struct PortfolioSubscriberBuilder {
    config: LogConfig,
}

impl PortfolioSubscriberBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter used when `RUST_LOG` is unset
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config.level = level.into();
        self
    }

    pub fn with_console(mut self, format: ConsoleFormat) -> Self {
        self.config.console = format;
        self
    }

    /// Also write JSON lines into `directory`
    pub fn with_session_log(
        mut self,
        directory: impl Into<PathBuf>,
        rotation: RotationStrategy,
    ) -> Self {
        self.config.session_log = Some(SessionLog::new(directory, rotation));
        self
    }

    /// Install the subscriber globally.
    ///
    /// Returns the session log guard when a session log is configured.
    pub fn try_init(self) -> Result<Option<WorkerGuard>, LoggingError> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.config.level));

        let pretty_console = (self.config.console == ConsoleFormat::Pretty).then(|| {
            tracing_subscriber::fmt::layer()
                .with_ansi(true)
                .with_target(true)
        });

        let json_console = (self.config.console == ConsoleFormat::Json).then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .flatten_event(true)
        });

        let (file_layer, guard) = match &self.config.session_log {
            Some(log) => {
                let (writer, guard) = session_writer(log)?;
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .flatten_event(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(writer);
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        Registry::default()
            .with(env_filter)
            .with(pretty_console)
            .with(json_console)
            .with(file_layer)
            .try_init()
            .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

        Ok(guard)
    }

    /// Install the subscriber globally, reporting failures on stderr.
    pub fn init(self) -> Option<WorkerGuard> {
        match self.try_init() {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("Warning: {e}");
                None
            }
        }
    }
}

/// Non-blocking writer for the session log. `Never` truncates a single
/// file, the other strategies append to rolling files.
fn session_writer(log: &SessionLog) -> Result<(NonBlocking, WorkerGuard), LoggingError> {
    fs::create_dir_all(&log.directory)?;
    let rotation = match log.rotation {
        RotationStrategy::Never => {
            return Ok(tracing_appender::non_blocking(File::create(log.single_file())?));
        }
        RotationStrategy::Daily => Rotation::DAILY,
        RotationStrategy::Hourly => Rotation::HOURLY,
    };
    let appender = RollingFileAppender::new(rotation, &log.directory, SESSION_LOG_PREFIX);
    Ok(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_flags() {
        let builder = PortfolioSubscriberBuilder::new()
            .with_level("trace")
            .with_console(ConsoleFormat::Json)
            .with_session_log("/tmp/logs", RotationStrategy::Hourly);
        assert_eq!(builder.config.level, "trace");
        assert_eq!(builder.config.console, ConsoleFormat::Json);
        assert_eq!(
            builder.config.session_log,
            Some(SessionLog::new("/tmp/logs", RotationStrategy::Hourly))
        );
    }

    #[test]
    fn test_never_rotation_creates_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let log = SessionLog::new(dir.path().join("logs"), RotationStrategy::Never);
        let (_writer, guard) = session_writer(&log).unwrap();
        drop(guard);
        assert!(dir.path().join("logs").join("arasaka-portfolio.log").exists());
    }

    #[test]
    fn test_unwritable_log_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("taken");
        fs::write(&blocker, "not a directory").unwrap();

        let log = SessionLog::new(blocker.join("logs"), RotationStrategy::Daily);
        assert!(matches!(session_writer(&log), Err(LoggingError::Io(_))));
    }

    #[test]
    fn test_second_init_reports_error() {
        let _ = PortfolioSubscriberBuilder::new().with_level("warn").try_init();
        let err = PortfolioSubscriberBuilder::new()
            .with_level("warn")
            .try_init()
            .unwrap_err();
        assert!(matches!(err, LoggingError::AlreadyInitialized(_)));
    }
}
