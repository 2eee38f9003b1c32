//! Typewriter reveal and cursor blink.
//!
//! [`TypingAnimation`] is the pure state of a reveal. [`Typewriter`] drives
//! it from a repeating tokio timer: each tick reveals one more character,
//! the first tick after the last character stops the repeat, and the
//! completion is published once after the settle delay. [`CursorBlink`]
//! toggles a visibility flag forever.
//!
//! Both publish through a sink closure. Use [`publish_to`] to feed a
//! `tokio::sync::watch` channel.

use std::ops::ControlFlow;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::config::Timing;
use crate::schedule::{every, TaskHandle};

/// Outcome of one reveal tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// One more character is visible; carries the new revealed length.
    Revealed(usize),
    /// Nothing left to reveal.
    Exhausted,
}

/// Progressive reveal of a string.
///
/// Lengths are counted in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypingAnimation {
    full_text: String,
    char_count: usize,
    revealed_len: usize,
    revealed_bytes: usize,
    complete: bool,
}

impl TypingAnimation {
    /// A reveal that has not started.
    pub fn new(text: impl Into<String>) -> Self {
        let full_text = text.into();
        let char_count = full_text.chars().count();
        Self {
            full_text,
            char_count,
            ..Default::default()
        }
    }

    /// A reveal that is already finished, used when a returning visitor
    /// skips the animation.
    pub fn complete(text: impl Into<String>) -> Self {
        let mut anim = Self::new(text);
        anim.settle();
        anim
    }

    /// Reveal the next character, or report exhaustion.
    pub fn advance(&mut self) -> Tick {
        match self.full_text[self.revealed_bytes..].chars().next() {
            Some(c) => {
                self.revealed_bytes += c.len_utf8();
                self.revealed_len += 1;
                Tick::Revealed(self.revealed_len)
            }
            None => Tick::Exhausted,
        }
    }

    /// Mark the reveal complete, showing the full text.
    ///
    /// Returns true only the first time.
    pub fn settle(&mut self) -> bool {
        if self.complete {
            return false;
        }
        self.revealed_len = self.char_count;
        self.revealed_bytes = self.full_text.len();
        self.complete = true;
        true
    }

    /// Start over with the same text.
    pub fn reset(&mut self) {
        *self = Self::new(std::mem::take(&mut self.full_text));
    }

    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    /// The currently visible prefix.
    pub fn revealed(&self) -> &str {
        &self.full_text[..self.revealed_bytes]
    }

    pub fn revealed_len(&self) -> usize {
        self.revealed_len
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn is_empty(&self) -> bool {
        self.char_count == 0
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

/// A sink that replaces the value held by a watch channel.
pub fn publish_to<T>(tx: watch::Sender<T>) -> impl FnMut(&T) + Send + 'static
where
    T: Clone + Send + Sync + 'static,
{
    move |value: &T| {
        tx.send_replace(value.clone());
    }
}

/// A running typewriter reveal.
///
/// Dropping it cancels both the reveal ticks and the pending completion.
#[derive(Debug)]
pub struct Typewriter {
    task: TaskHandle,
}

impl Typewriter {
    /// Start revealing `text`. The sink sees the empty initial state, every
    /// revealed prefix, and the completed state exactly once.
    pub fn start<S>(text: impl Into<String>, timing: Timing, mut sink: S) -> Self
    where
        S: FnMut(&TypingAnimation) + Send + 'static,
    {
        let mut anim = TypingAnimation::new(text);
        let task = TaskHandle::spawn("typewriter", move |live| async move {
            sink(&anim);

            if !anim.is_empty() {
                let interval = timing.char_interval();
                let mut ticks = time::interval_at(Instant::now() + interval, interval);
                ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    ticks.tick().await;
                    if !live.is_alive() {
                        return;
                    }
                    match anim.advance() {
                        Tick::Revealed(_) => sink(&anim),
                        Tick::Exhausted => break,
                    }
                }
            }

            time::sleep(timing.settle_delay()).await;
            if live.is_alive() && anim.settle() {
                sink(&anim);
            }
        });
        Self { task }
    }

    /// Cancel the reveal. No further updates reach the sink.
    pub fn dispose(&self) {
        self.task.dispose();
    }

    /// Hand the underlying timer to an owner such as a [`TimerArena`].
    ///
    /// [`TimerArena`]: crate::schedule::TimerArena
    pub fn into_handle(self) -> TaskHandle {
        self.task
    }
}

/// A blinking cursor. Starts visible; toggles every period until dropped.
#[derive(Debug)]
pub struct CursorBlink {
    task: TaskHandle,
}

impl CursorBlink {
    pub fn start<S>(period: Duration, mut sink: S) -> Self
    where
        S: FnMut(bool) + Send + 'static,
    {
        let mut visible = true;
        let task = every("cursor-blink", period, move || {
            visible = !visible;
            sink(visible);
            ControlFlow::Continue(())
        });
        Self { task }
    }

    pub fn into_handle(self) -> TaskHandle {
        self.task
    }
}

/// One visible step of a reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Offset from the start of the reveal
    pub at: Duration,
    /// Prefix visible from this point on
    pub revealed: String,
}

/// The full schedule a [`Typewriter`] follows, computed without timers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    pub frames: Vec<Frame>,
    /// Offset at which the completion signal fires
    pub completes_at: Duration,
}

impl Timeline {
    pub fn reveal_schedule(text: &str, timing: Timing) -> Self {
        let interval = timing.char_interval();
        let mut anim = TypingAnimation::new(text);
        let mut frames = Vec::with_capacity(anim.char_count());
        let mut at = Duration::ZERO;

        if !anim.is_empty() {
            loop {
                at += interval;
                match anim.advance() {
                    Tick::Revealed(_) => frames.push(Frame {
                        at,
                        revealed: anim.revealed().to_string(),
                    }),
                    Tick::Exhausted => break,
                }
            }
        }

        Self {
            frames,
            completes_at: at + timing.settle_delay(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use parking_lot::Mutex;

    use crate::schedule::TimerArena;

    const FAST: Timing = Timing {
        char_interval_ms: 10,
        settle_delay_ms: 100,
    };

    fn recorder() -> (
        Arc<Mutex<Vec<TypingAnimation>>>,
        impl FnMut(&TypingAnimation) + Send + 'static,
    ) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = seen.clone();
        (seen, move |anim: &TypingAnimation| s.lock().push(anim.clone()))
    }

    #[test]
    fn test_advance_reveals_prefixes() {
        let mut anim = TypingAnimation::new("abc");
        assert_eq!(anim.revealed(), "");
        assert_eq!(anim.advance(), Tick::Revealed(1));
        assert_eq!(anim.revealed(), "a");
        assert_eq!(anim.advance(), Tick::Revealed(2));
        assert_eq!(anim.advance(), Tick::Revealed(3));
        assert_eq!(anim.revealed(), "abc");
        assert!(!anim.is_complete());
        assert_eq!(anim.advance(), Tick::Exhausted);
        assert_eq!(anim.revealed_len(), 3);
    }

    #[test]
    fn test_advance_counts_characters_not_bytes() {
        let mut anim = TypingAnimation::new("▓é");
        assert_eq!(anim.char_count(), 2);
        anim.advance();
        assert_eq!(anim.revealed(), "▓");
        anim.advance();
        assert_eq!(anim.revealed(), "▓é");
        assert_eq!(anim.advance(), Tick::Exhausted);
    }

    #[test]
    fn test_settle_fires_once() {
        let mut anim = TypingAnimation::new("hi");
        anim.advance();
        assert!(anim.settle());
        assert_eq!(anim.revealed(), "hi");
        assert!(anim.is_complete());
        assert!(!anim.settle());
    }

    #[test]
    fn test_complete_constructor_prefills() {
        let anim = TypingAnimation::complete("ARASAKA");
        assert!(anim.is_complete());
        assert_eq!(anim.revealed(), "ARASAKA");
        assert_eq!(anim.revealed_len(), anim.char_count());
    }

    #[test]
    fn test_reset_starts_over() {
        let mut anim = TypingAnimation::complete("abc");
        anim.reset();
        assert_eq!(anim, TypingAnimation::new("abc"));
        assert_eq!(anim.revealed_len(), 0);
    }

    #[test]
    fn test_timeline_for_text() {
        let timeline = Timeline::reveal_schedule("abc", FAST);
        assert_eq!(timeline.frames.len(), 3);
        assert_eq!(timeline.frames[0].at, Duration::from_millis(10));
        assert_eq!(timeline.frames[2].revealed, "abc");
        assert!(timeline.frames.windows(2).all(|w| w[0].at < w[1].at));
        // one extra tick notices exhaustion, then the settle delay
        assert_eq!(timeline.completes_at, Duration::from_millis(140));
    }

    #[test]
    fn test_timeline_for_empty_text() {
        let timeline = Timeline::reveal_schedule("", FAST);
        assert!(timeline.frames.is_empty());
        assert_eq!(timeline.completes_at, Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_typewriter_runs_to_completion() {
        let (seen, sink) = recorder();
        let _writer = Typewriter::start("abc", FAST, sink);

        time::sleep(Duration::from_millis(25)).await;
        assert_eq!(seen.lock().last().unwrap().revealed(), "ab");

        time::sleep(Duration::from_millis(200)).await;
        let seen = seen.lock();
        let last = seen.last().unwrap();
        assert!(last.is_complete());
        assert_eq!(last.revealed(), "abc");
        assert_eq!(seen.iter().filter(|a| a.is_complete()).count(), 1);
        // initial + 3 reveals + completion
        assert_eq!(seen.len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_typewriter_completion_waits_for_settle() {
        let (seen, sink) = recorder();
        let _writer = Typewriter::start("ab", FAST, sink);

        // exhaustion noticed at 30ms, completion due at 130ms
        time::sleep(Duration::from_millis(120)).await;
        assert!(!seen.lock().last().unwrap().is_complete());
        time::sleep(Duration::from_millis(20)).await;
        assert!(seen.lock().last().unwrap().is_complete());
    }

    #[tokio::test(start_paused = true)]
    async fn test_typewriter_empty_text_still_completes() {
        let (seen, sink) = recorder();
        let _writer = Typewriter::start("", FAST, sink);

        time::sleep(Duration::from_millis(150)).await;
        let seen = seen.lock();
        assert_eq!(seen.len(), 2);
        assert!(seen[1].is_complete());
        assert_eq!(seen[1].revealed(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_disposed_typewriter_publishes_nothing_more() {
        let (seen, sink) = recorder();
        let writer = Typewriter::start("abcdef", FAST, sink);

        time::sleep(Duration::from_millis(35)).await;
        writer.dispose();
        let count = seen.lock().len();
        assert_eq!(seen.lock().last().unwrap().revealed(), "abc");

        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(seen.lock().len(), count);
        assert!(!seen.lock().iter().any(|a| a.is_complete()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispose_during_settle_cancels_completion() {
        let (seen, sink) = recorder();
        let writer = Typewriter::start("a", FAST, sink);

        time::sleep(Duration::from_millis(50)).await;
        writer.dispose();
        time::sleep(Duration::from_secs(1)).await;
        assert!(!seen.lock().iter().any(|a| a.is_complete()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_begins_at_zero() {
        let (first, sink) = recorder();
        let writer = Typewriter::start("first", FAST, sink);
        time::sleep(Duration::from_millis(25)).await;
        drop(writer);

        let (second, sink) = recorder();
        let _writer = Typewriter::start("second", FAST, sink);
        time::sleep(Duration::from_millis(5)).await;
        let second = second.lock();
        assert_eq!(second[0].revealed_len(), 0);
        assert_eq!(second[0].full_text(), "second");
        assert_eq!(first.lock().last().unwrap().revealed(), "fi");
    }

    #[tokio::test(start_paused = true)]
    async fn test_typewriter_feeds_watch_channel() {
        let (tx, rx) = watch::channel(TypingAnimation::default());
        let _writer = Typewriter::start("ok", FAST, publish_to(tx));

        time::sleep(Duration::from_millis(200)).await;
        let latest = rx.borrow().clone();
        assert!(latest.is_complete());
        assert_eq!(latest.revealed(), "ok");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cursor_blink_alternates() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = seen.clone();
        let blink = CursorBlink::start(Duration::from_millis(500), move |v| s.lock().push(v));

        time::sleep(Duration::from_millis(1600)).await;
        assert_eq!(*seen.lock(), vec![false, true, false]);

        drop(blink);
        time::sleep(Duration::from_secs(3)).await;
        assert_eq!(seen.lock().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_arena_owns_reveal_and_cursor() {
        let (seen, sink) = recorder();
        let blinks = Arc::new(Mutex::new(0usize));
        let b = blinks.clone();

        let mut arena = TimerArena::new();
        arena.track(Typewriter::start("abcdef", FAST, sink).into_handle());
        arena.track(
            CursorBlink::start(Duration::from_millis(20), move |_| *b.lock() += 1).into_handle(),
        );

        time::sleep(Duration::from_millis(45)).await;
        assert_eq!(seen.lock().last().unwrap().revealed(), "abcd");
        assert_eq!(*blinks.lock(), 2);

        arena.clear();
        let (frames, toggles) = (seen.lock().len(), *blinks.lock());
        time::sleep(Duration::from_secs(2)).await;
        assert_eq!(seen.lock().len(), frames);
        assert_eq!(*blinks.lock(), toggles);
        assert!(!seen.lock().iter().any(|a| a.is_complete()));
    }
}
