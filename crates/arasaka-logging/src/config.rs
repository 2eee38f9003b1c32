//! Where portfolio logs go and how they look

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// File name prefix of the session log
pub const SESSION_LOG_PREFIX: &str = "arasaka-portfolio";

/// Console rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsoleFormat {
    /// Human-readable, colored lines
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

/// How the session log is split across files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RotationStrategy {
    #[default]
    Daily,
    Hourly,
    /// A single file, truncated at startup
    Never,
}

impl RotationStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RotationStrategy::Daily => "daily",
            RotationStrategy::Hourly => "hourly",
            RotationStrategy::Never => "never",
        }
    }
}

impl fmt::Display for RotationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RotationStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(RotationStrategy::Daily),
            "hourly" => Ok(RotationStrategy::Hourly),
            "never" => Ok(RotationStrategy::Never),
            other => Err(format!(
                "unknown rotation '{other}' (expected daily, hourly or never)"
            )),
        }
    }
}

/// JSONL session log written next to the console output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLog {
    pub directory: PathBuf,
    pub rotation: RotationStrategy,
}

impl SessionLog {
    pub fn new(directory: impl Into<PathBuf>, rotation: RotationStrategy) -> Self {
        Self {
            directory: directory.into(),
            rotation,
        }
    }

    /// Path of the log file for strategies that write a single file.
    pub fn single_file(&self) -> PathBuf {
        self.directory.join(format!("{SESSION_LOG_PREFIX}.log"))
    }
}

/// Logging setup for one portfolio process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is unset
    pub level: String,
    pub console: ConsoleFormat,
    pub session_log: Option<SessionLog>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console: ConsoleFormat::default(),
            session_log: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pretty_console_only() {
        let config = LogConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.console, ConsoleFormat::Pretty);
        assert!(config.session_log.is_none());
    }

    #[test]
    fn test_rotation_parses_case_insensitively() {
        assert_eq!("Hourly".parse(), Ok(RotationStrategy::Hourly));
        assert_eq!("never".parse(), Ok(RotationStrategy::Never));
        for strategy in [
            RotationStrategy::Daily,
            RotationStrategy::Hourly,
            RotationStrategy::Never,
        ] {
            assert_eq!(strategy.to_string().parse(), Ok(strategy));
        }
        let err = "weekly".parse::<RotationStrategy>().unwrap_err();
        assert!(err.contains("weekly"));
    }

    #[test]
    fn test_single_file_path() {
        let log = SessionLog::new("/tmp/arasaka-logs", RotationStrategy::Never);
        assert_eq!(
            log.single_file(),
            PathBuf::from("/tmp/arasaka-logs/arasaka-portfolio.log")
        );
    }
}
