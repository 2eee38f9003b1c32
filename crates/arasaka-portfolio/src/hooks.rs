//! Hooks bridging `arasaka-core` watch channels into Dioxus signals.
//!
//! Timer hooks register their handles in the caller's [`Timers`] arena, so
//! unmounting a panel tears all of its animations down together.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use arasaka_core::sequencer::publish_to;
use arasaka_core::{
    ContactDesk, ContactForm, CursorBlink, Shell, ShellView, TimerArena, Timing, Typewriter,
    TypingAnimation,
};
use dioxus::prelude::*;
use tokio::sync::watch;

/// Follow the shell's published view.
pub fn use_shell_view(shell: Shell) -> Signal<ShellView> {
    let view = use_signal(|| shell.view());
    use_future(move || {
        let mut rx = shell.subscribe();
        async move {
            let mut view = view;
            while rx.changed().await.is_ok() {
                let next = rx.borrow_and_update().clone();
                view.set(next);
            }
        }
    });
    view
}

/// Timers owned by the calling component, cleared when it unmounts.
pub type Timers = Rc<RefCell<TimerArena>>;

pub fn use_timer_arena() -> Timers {
    let timers = use_hook(|| Rc::new(RefCell::new(TimerArena::new())));
    let owned = timers.clone();
    use_drop(move || owned.borrow_mut().clear());
    timers
}

/// Reveal `text` one character at a time, starting on mount.
pub fn use_typewriter(text: &'static str, timing: Timing, timers: &Timers) -> Signal<TypingAnimation> {
    let anim = use_signal(|| TypingAnimation::new(text));
    let rx = use_hook(|| {
        let (tx, rx) = watch::channel(TypingAnimation::new(text));
        let writer = Typewriter::start(text, timing, publish_to(tx));
        timers.borrow_mut().track(writer.into_handle());
        rx
    });

    use_future(move || {
        let mut rx = rx.clone();
        async move {
            let mut anim = anim;
            while rx.changed().await.is_ok() {
                let next = rx.borrow_and_update().clone();
                anim.set(next);
            }
        }
    });

    anim
}

/// A cursor that blinks with the given half-period.
pub fn use_cursor_blink(period: Duration, timers: &Timers) -> Signal<bool> {
    let visible = use_signal(|| true);
    let rx = use_hook(|| {
        let (tx, rx) = watch::channel(true);
        let cursor = CursorBlink::start(period, move |on| {
            tx.send_replace(on);
        });
        timers.borrow_mut().track(cursor.into_handle());
        rx
    });

    use_future(move || {
        let mut rx = rx.clone();
        async move {
            let mut visible = visible;
            while rx.changed().await.is_ok() {
                let next = *rx.borrow_and_update();
                visible.set(next);
            }
        }
    });

    visible
}

/// A contact desk living as long as the calling component, plus its form.
pub fn use_contact_desk(make: impl FnOnce() -> ContactDesk) -> (Rc<ContactDesk>, Signal<ContactForm>) {
    let desk = use_hook(|| Rc::new(make()));
    let form = use_signal(|| desk.form());

    let follow = desk.clone();
    use_future(move || {
        let mut rx = follow.subscribe();
        async move {
            let mut form = form;
            while rx.changed().await.is_ok() {
                let next = rx.borrow_and_update().clone();
                form.set(next);
            }
        }
    });

    (desk, form)
}
