//! Shared state handed from `main` to the component tree.

use std::sync::{Arc, OnceLock};

use arasaka_core::{AnimationConfig, LocalSession, MemoryStore, Shell};
use chrono::{DateTime, Local};

/// Launch state set by `main` before the window opens.
static LAUNCH: OnceLock<PortfolioContext> = OnceLock::new();

/// Everything components need from the process.
#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioContext {
    pub shell: Shell,
    pub animation: AnimationConfig,
    pub started_at: DateTime<Local>,
    /// Make every simulated contact transmission fail
    pub fail_transmissions: bool,
}

impl PortfolioContext {
    pub fn new(shell: Shell, animation: AnimationConfig) -> Self {
        Self {
            shell,
            animation,
            started_at: Local::now(),
            fail_transmissions: false,
        }
    }

    pub fn with_failing_transmissions(mut self, fail: bool) -> Self {
        self.fail_transmissions = fail;
        self
    }

    /// In-memory session with default timing.
    pub fn ephemeral() -> Self {
        let animation = AnimationConfig::default();
        let store = Arc::new(LocalSession::new(MemoryStore::new()));
        Self::new(Shell::boot(store, animation.gate), animation)
    }

    /// Store the launch context. Only the first call wins.
    pub fn install(self) {
        if LAUNCH.set(self).is_err() {
            tracing::warn!("Launch context already installed");
        }
    }

    /// The installed launch context, or an ephemeral one when `main` did
    /// not install any.
    pub fn launched() -> Self {
        LAUNCH.get().cloned().unwrap_or_else(Self::ephemeral)
    }

    /// Session start formatted for the status bar.
    pub fn session_started(&self) -> String {
        self.started_at.format("%H:%M:%S").to_string()
    }
}
