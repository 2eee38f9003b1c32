//! End-to-end gate flow over a file-backed session.

use std::sync::Arc;
use std::time::Duration;

use arasaka_core::sequencer::publish_to;
use arasaka_core::session::{UNLOCKED_KEY, VISITOR_COUNT_KEY};
use arasaka_core::{
    FileStore, InputEvent, KeyValueStore, LocalSession, Page, PortfolioConfig, SessionStore, Shell,
    Timing, Typewriter, TypingAnimation, UnlockPhase,
};
use tokio::sync::watch;
use tokio::time;

const GATE: Timing = Timing {
    char_interval_ms: 10,
    settle_delay_ms: 100,
};

fn open(config: &PortfolioConfig) -> Arc<LocalSession<FileStore>> {
    Arc::new(LocalSession::new(FileStore::open(config.storage_path())))
}

async fn unlock(shell: &Shell) {
    shell.input(&InputEvent::key("Enter"));
    time::sleep(Duration::from_millis(400)).await;
    assert!(shell.view().awaiting_confirm());
    shell.input(&InputEvent::Click);
}

#[tokio::test(start_paused = true)]
async fn test_unlock_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = PortfolioConfig::default().with_data_dir(dir.path());

    let shell = Shell::with_password(open(&config), GATE, "NEURAL_LINK");
    unlock(&shell).await;
    assert!(shell.view().is_unlocked());
    drop(shell);

    let store = open(&config);
    assert_eq!(store.backend().get(UNLOCKED_KEY).unwrap().as_deref(), Some("true"));
    assert_eq!(store.backend().get(VISITOR_COUNT_KEY).unwrap().as_deref(), Some("1"));

    let shell = Shell::with_password(store, GATE, "NEURAL_LINK");
    let view = shell.view();
    assert_eq!(view.phase, UnlockPhase::Unlocked);
    assert_eq!(view.password.revealed(), "NEURAL_LINK");
    assert!(shell.navigate(Page::About));
}

#[tokio::test(start_paused = true)]
async fn test_logout_then_return_visit() {
    let dir = tempfile::tempdir().unwrap();
    let config = PortfolioConfig::default().with_data_dir(dir.path().join("nested"));

    let shell = Shell::with_password(open(&config), GATE, "LINK");
    unlock(&shell).await;
    shell.navigate(Page::Links);
    shell.logout();
    drop(shell);

    let store = open(&config);
    let session = store.load();
    assert!(!session.unlocked);
    assert_eq!(session.visitor_count, 1);
    assert_eq!(store.backend().get(UNLOCKED_KEY).unwrap(), None);

    let shell = Shell::with_password(store.clone(), GATE, "LINK");
    assert_eq!(shell.view().phase, UnlockPhase::Locked);
    unlock(&shell).await;
    assert_eq!(shell.view().visitor_count, 2);
    assert_eq!(store.load().visitor_count, 2);
}

#[tokio::test(start_paused = true)]
async fn test_corrupt_session_file_falls_back_to_locked() {
    let dir = tempfile::tempdir().unwrap();
    let config = PortfolioConfig::default().with_data_dir(dir.path());
    std::fs::write(config.storage_path(), "{ not json").unwrap();

    let shell = Shell::with_password(open(&config), GATE, "LINK");
    let view = shell.view();
    assert_eq!(view.phase, UnlockPhase::Locked);
    assert_eq!(view.visitor_count, 0);
}

#[tokio::test(start_paused = true)]
async fn test_panels_animate_independently() {
    let panel = Timing::new(30, 800);
    let (about_tx, about) = watch::channel(TypingAnimation::default());
    let (contact_tx, contact) = watch::channel(TypingAnimation::default());

    let _about = Typewriter::start("ABOUT", panel, publish_to(about_tx));
    time::sleep(Duration::from_millis(45)).await;
    let contact_writer = Typewriter::start("CONTACT", panel, publish_to(contact_tx));

    time::sleep(Duration::from_millis(50)).await;
    assert_eq!(about.borrow().revealed(), "ABO");
    assert_eq!(contact.borrow().revealed(), "C");

    // navigating away from contact tears its reveal down
    contact_writer.dispose();
    time::sleep(Duration::from_secs(2)).await;
    assert!(about.borrow().is_complete());
    assert_eq!(contact.borrow().revealed(), "C");
    assert!(!contact.borrow().is_complete());
}

#[tokio::test(start_paused = true)]
async fn test_unwritable_data_dir_still_unlocks_for_this_run() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("data");
    std::fs::write(&blocker, "not a directory").unwrap();
    let config = PortfolioConfig::default().with_data_dir(&blocker);

    let store = open(&config);
    let shell = Shell::with_password(store.clone(), GATE, "LINK");
    unlock(&shell).await;
    assert!(shell.view().is_unlocked());
    assert_eq!(shell.view().visitor_count, 1);

    // the failed write left nothing behind, in memory or on disk
    assert_eq!(store.backend().get(UNLOCKED_KEY).unwrap(), None);
    assert!(!store.load().unlocked);

    shell.logout();
    assert_eq!(shell.view().phase, UnlockPhase::Locked);

    let shell = Shell::with_password(open(&config), GATE, "LINK");
    assert_eq!(shell.view().phase, UnlockPhase::Locked);
}
