//! Entry point for the Arasaka terminal portfolio.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

use arasaka_core::{
    FileStore, LocalSession, MemoryStore, PortfolioConfig, SessionPatch, SessionStore, Shell,
};
use arasaka_logging::{ConsoleFormat, PortfolioSubscriberBuilder, RotationStrategy};
use arasaka_portfolio::components::App;
use arasaka_portfolio::state::PortfolioContext;

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "arasaka-portfolio")]
#[command(about = "Arasaka terminal portfolio")]
struct Args {
    /// Directory holding the persisted session (overrides ARASAKA_DATA_DIR)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Keep the session in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Default log level (RUST_LOG takes precedence)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write JSONL to the console instead of pretty output
    #[arg(long)]
    log_json: bool,

    /// Also write JSONL logs into this directory
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Session log rotation: daily, hourly or never
    #[arg(long, default_value_t = RotationStrategy::Daily)]
    log_rotation: RotationStrategy,

    /// Forget a persisted unlock before launching
    #[arg(long)]
    reset_session: bool,

    /// Make every simulated contact transmission fail
    #[arg(long)]
    fail_transmissions: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let console = if args.log_json {
        ConsoleFormat::Json
    } else {
        ConsoleFormat::Pretty
    };
    let mut logging = PortfolioSubscriberBuilder::new()
        .with_level(args.log_level.clone())
        .with_console(console);
    if let Some(dir) = &args.log_file {
        logging = logging.with_session_log(dir, args.log_rotation);
    }
    let _log_guard = logging.init();

    let mut config = PortfolioConfig::default().with_ephemeral(args.ephemeral);
    if let Some(dir) = args.data_dir {
        config = config.with_data_dir(dir);
    }

    let store: Arc<dyn SessionStore> = if config.ephemeral {
        tracing::info!("Using in-memory session");
        Arc::new(LocalSession::new(MemoryStore::new()))
    } else {
        let path = config.storage_path();
        tracing::info!(path = %path.display(), "Using persisted session");
        Arc::new(LocalSession::new(FileStore::open(path)))
    };

    if args.reset_session {
        store
            .save(SessionPatch::logout())
            .context("failed to reset the persisted session")?;
        tracing::info!("--reset-session: unlock flag cleared");
    }

    let shell = Shell::boot(store, config.animation.gate);
    PortfolioContext::new(shell, config.animation)
        .with_failing_transmissions(args.fail_transmissions)
        .install();

    tracing::info!("Starting Arasaka portfolio");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Arasaka OS")
                        .with_inner_size(LogicalSize::new(1200.0, 800.0))
                        .with_maximized(false),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Share+Tech+Mono&family=JetBrains+Mono:wght@400;500;600&display=swap" rel="stylesheet">
                    <style>{}</style>
                    "#,
                    STYLES_CSS
                )),
        )
        .launch(App);

    Ok(())
}
