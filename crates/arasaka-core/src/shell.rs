//! Top-level controller for the portfolio.
//!
//! The [`Shell`] owns the injected [`SessionStore`], the [`UnlockMachine`],
//! the [`Router`] and the password [`Typewriter`]. Every change is published
//! as a [`ShellView`] snapshot on a watch channel, which is all a front end
//! needs to render the gate and pick a panel.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::config::Timing;
use crate::content::GATE_PASSWORD;
use crate::router::{Page, Router};
use crate::sequencer::{Timeline, Typewriter, TypingAnimation};
use crate::session::{SessionPatch, SessionStore};
use crate::unlock::{InputEvent, UnlockCommand, UnlockMachine, UnlockPhase};

/// Snapshot of everything the gate and the navigation need to render
#[derive(Debug, Clone, PartialEq)]
pub struct ShellView {
    pub phase: UnlockPhase,
    pub page: Option<Page>,
    pub password: TypingAnimation,
    pub visitor_count: u64,
}

impl ShellView {
    pub fn is_unlocked(&self) -> bool {
        self.phase.is_unlocked()
    }

    /// The password has finished typing and the gate waits for a confirming input.
    pub fn awaiting_confirm(&self) -> bool {
        self.phase == UnlockPhase::Animating { ready: true }
    }

    /// The footer is shown on content panels only.
    pub fn show_footer(&self) -> bool {
        self.is_unlocked() && self.page.is_some()
    }
}

struct ShellCore {
    machine: UnlockMachine,
    router: Router,
    password: TypingAnimation,
    visitor_count: u64,
    /// Bumped whenever a password sequence starts or is abandoned, so late
    /// callbacks from an old sequence are recognised and dropped.
    generation: u64,
    sequence: Option<Typewriter>,
}

struct ShellInner {
    store: Arc<dyn SessionStore>,
    gate: Timing,
    password_text: String,
    core: Mutex<ShellCore>,
    view: watch::Sender<ShellView>,
}

impl ShellInner {
    fn snapshot(core: &ShellCore) -> ShellView {
        ShellView {
            phase: core.machine.phase(),
            page: core.router.current(),
            password: core.password.clone(),
            visitor_count: core.visitor_count,
        }
    }

    fn publish(&self, core: &ShellCore) {
        self.view.send_replace(Self::snapshot(core));
    }

    fn on_reveal(&self, generation: u64, anim: &TypingAnimation) {
        let mut core = self.core.lock();
        if core.generation != generation {
            return;
        }
        core.password = anim.clone();
        if anim.is_complete() && core.machine.sequence_complete() {
            info!("Password sequence complete, awaiting confirmation");
        }
        self.publish(&core);
    }
}

/// Handle to the portfolio controller. Cheap to clone.
#[derive(Clone)]
pub struct Shell {
    inner: Arc<ShellInner>,
}

impl Shell {
    /// Load the session and decide the initial phase.
    ///
    /// A persisted unlock starts directly in [`UnlockPhase::Unlocked`] with
    /// the password shown in full.
    pub fn boot(store: Arc<dyn SessionStore>, gate: Timing) -> Self {
        Self::with_password(store, gate, GATE_PASSWORD)
    }

    pub fn with_password(
        store: Arc<dyn SessionStore>,
        gate: Timing,
        password: impl Into<String>,
    ) -> Self {
        let password_text = password.into();
        let session = store.load();
        info!(
            unlocked = session.unlocked,
            visitor_count = session.visitor_count,
            "Session loaded"
        );

        let password = if session.unlocked {
            TypingAnimation::complete(password_text.clone())
        } else {
            TypingAnimation::new(password_text.clone())
        };
        let core = ShellCore {
            machine: UnlockMachine::from_session(&session),
            router: Router::new(),
            password,
            visitor_count: session.visitor_count,
            generation: 0,
            sequence: None,
        };
        let (view, _) = watch::channel(ShellInner::snapshot(&core));

        Self {
            inner: Arc::new(ShellInner {
                store,
                gate,
                password_text,
                core: Mutex::new(core),
                view,
            }),
        }
    }

    /// Current snapshot.
    pub fn view(&self) -> ShellView {
        self.inner.view.borrow().clone()
    }

    /// Receive every future snapshot.
    pub fn subscribe(&self) -> watch::Receiver<ShellView> {
        self.inner.view.subscribe()
    }

    /// Deliver a key press, click or tap to the gate.
    pub fn input(&self, input: &InputEvent) -> Option<UnlockCommand> {
        let mut core = self.inner.core.lock();
        let command = core.machine.handle(input)?;

        match command {
            UnlockCommand::StartSequence => {
                core.generation += 1;
                let generation = core.generation;
                let weak: Weak<ShellInner> = Arc::downgrade(&self.inner);
                core.password = TypingAnimation::new(self.inner.password_text.clone());
                core.sequence = Some(Typewriter::start(
                    self.inner.password_text.clone(),
                    self.inner.gate,
                    move |anim| {
                        if let Some(inner) = weak.upgrade() {
                            inner.on_reveal(generation, anim);
                        }
                    },
                ));
                let schedule = Timeline::reveal_schedule(&self.inner.password_text, self.inner.gate);
                info!(
                    ready_in_ms = schedule.completes_at.as_millis() as u64,
                    "Password sequence started"
                );
            }
            UnlockCommand::PersistUnlock => {
                core.sequence = None;
                let visitor_count = core.visitor_count.saturating_add(1);
                if let Err(e) = self.inner.store.save(SessionPatch::unlock(visitor_count)) {
                    warn!(error = %e, "Failed to persist unlock");
                }
                core.visitor_count = visitor_count;
                core.router.reset();
                info!(visitor_count, "Unlock confirmed");
            }
            UnlockCommand::ClearSession => {}
        }

        self.inner.publish(&core);
        Some(command)
    }

    /// Open a panel. Ignored while the gate is still locked.
    pub fn navigate(&self, page: Page) -> bool {
        let mut core = self.inner.core.lock();
        if !core.machine.is_unlocked() {
            debug!(%page, "Navigation ignored while locked");
            return false;
        }
        core.router.navigate(page);
        debug!(%page, "Navigated");
        self.inner.publish(&core);
        true
    }

    /// Back to the directory listing.
    pub fn go_back(&self) {
        let mut core = self.inner.core.lock();
        core.router.go_back();
        debug!("Returned to listing");
        self.inner.publish(&core);
    }

    /// Lock the gate again, forgetting the unlock but not the visitor count.
    pub fn logout(&self) {
        let mut core = self.inner.core.lock();
        if let Some(sequence) = core.sequence.take() {
            sequence.dispose();
        }
        core.generation += 1;
        core.machine.logout();
        core.router.reset();
        core.password.reset();
        if let Err(e) = self.inner.store.save(SessionPatch::logout()) {
            warn!(error = %e, "Failed to clear persisted unlock");
        }
        info!("Logged out");
        self.inner.publish(&core);
    }
}

impl PartialEq for Shell {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell").field("view", &self.view()).finish()
    }
}
