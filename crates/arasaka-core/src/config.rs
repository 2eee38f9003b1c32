//! Configuration types for the portfolio

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing for one typewriter reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timing {
    /// Delay between revealed characters
    pub char_interval_ms: u64,
    /// Delay between the last tick and the completion signal
    pub settle_delay_ms: u64,
}

impl Timing {
    /// Password banner on the login gate
    pub const GATE: Timing = Timing {
        char_interval_ms: 80,
        settle_delay_ms: 800,
    };

    /// Entrance text on the content panels
    pub const PANEL: Timing = Timing {
        char_interval_ms: 30,
        settle_delay_ms: 800,
    };

    pub fn new(char_interval_ms: u64, settle_delay_ms: u64) -> Self {
        Self {
            char_interval_ms,
            settle_delay_ms,
        }
    }

    pub fn char_interval(&self) -> Duration {
        Duration::from_millis(self.char_interval_ms.max(1))
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

/// All animation and feedback timing used by the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Login gate password reveal
    pub gate: Timing,
    /// Content panel entrance text
    pub panel: Timing,
    /// Cursor blink half-period
    pub cursor_period_ms: u64,
    /// Simulated contact transmission delay
    pub submit_delay_ms: u64,
    /// How long a success/error banner stays up
    pub status_display_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            gate: Timing::GATE,
            panel: Timing::PANEL,
            cursor_period_ms: 500,
            submit_delay_ms: 2000,
            status_display_ms: 5000,
        }
    }
}

impl AnimationConfig {
    pub fn cursor_period(&self) -> Duration {
        Duration::from_millis(self.cursor_period_ms.max(1))
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn status_display(&self) -> Duration {
        Duration::from_millis(self.status_display_ms)
    }
}

/// Top-level portfolio configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioConfig {
    /// Directory holding the persisted session file
    pub data_dir: PathBuf,
    /// Keep the session in memory only
    pub ephemeral: bool,
    /// Animation timing
    pub animation: AnimationConfig,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            ephemeral: false,
            animation: AnimationConfig::default(),
        }
    }
}

impl PortfolioConfig {
    /// Set the data directory
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Keep the session in memory only
    pub fn with_ephemeral(mut self, ephemeral: bool) -> Self {
        self.ephemeral = ephemeral;
        self
    }

    /// Path of the persisted key-value file
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join("local_storage.json")
    }
}

/// Get the default data directory for the portfolio.
///
/// Respects the `ARASAKA_DATA_DIR` env var.
pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ARASAKA_DATA_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support/arasaka-portfolio");
        }
    }
    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("arasaka-portfolio");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".local/share/arasaka-portfolio");
        }
    }
    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("arasaka-portfolio");
        }
    }
    PathBuf::from(".").join("arasaka-portfolio")
}
