//! # Arasaka Core
//!
//! Framework-free state and timing for the Arasaka terminal portfolio.
//!
//! The front end is a themed "login" gate followed by navigable content
//! panels. Everything with state or timing lives here so it can be driven
//! and tested without a UI:
//!
//! - [`schedule`]: cancellable timers ([`TaskHandle`], [`TimerArena`])
//! - [`sequencer`]: typewriter reveal and cursor blink
//! - [`session`]: persisted unlock flag and visitor counter
//! - [`unlock`]: the two-stage unlock gate
//! - [`router`]: which panel is active
//! - [`shell`]: the controller composing the pieces above
//! - [`contact`]: contact form validation and simulated submission
//! - [`projects`]: the project catalog and tag filtering
//! - [`content`]: static copy shown on the panels
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use arasaka_core::{InputEvent, MemoryStore, LocalSession, Shell, Timing};
//!
//! let store = Arc::new(LocalSession::new(MemoryStore::new()));
//! let shell = Shell::boot(store, Timing::GATE);
//! shell.input(&InputEvent::Click); // starts the password sequence
//! ```

pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod projects;
pub mod router;
pub mod schedule;
pub mod sequencer;
pub mod session;
pub mod shell;
pub mod unlock;

pub use config::{default_data_dir, AnimationConfig, PortfolioConfig, Timing};
pub use contact::{
    validate, ContactDesk, ContactForm, ContactMessage, Field, FieldErrors, FormStatus,
    SimulatedTransmitter, Transmitter,
};
pub use error::{StorageError, SubmitError};
pub use projects::{CardFlip, ProjectRecord, ProjectStatus, TagSelection};
pub use router::{Page, Router};
pub use schedule::{TaskHandle, TimerArena};
pub use sequencer::{CursorBlink, Tick, Timeline, Typewriter, TypingAnimation};
pub use session::{
    FileStore, KeyValueStore, LocalSession, MemoryStore, SessionPatch, SessionState, SessionStore,
};
pub use shell::{Shell, ShellView};
pub use unlock::{InputEvent, UnlockCommand, UnlockMachine, UnlockPhase};
