//! Cancellable timers on the tokio runtime.
//!
//! Every timer is owned by a [`TaskHandle`]. Disposing the handle (or
//! dropping it) aborts the task and flips a liveness flag the task checks
//! before touching state, so a disposed owner never sees another update.
//! [`TimerArena`] groups the handles of one component so they can be torn
//! down together.

use std::future::Future;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::AbortHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::trace;

/// Shared flag telling a running task whether its owner still wants updates.
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Returns false once the owning handle has been disposed.
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn kill(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Disposable handle over a spawned timer task.
///
/// Dropping the handle disposes the task.
#[derive(Debug)]
pub struct TaskHandle {
    label: &'static str,
    abort: AbortHandle,
    liveness: Liveness,
}

impl TaskHandle {
    /// Spawn a task on the current tokio runtime.
    ///
    /// The closure receives the task's [`Liveness`] and must check it before
    /// publishing anything.
    pub fn spawn<F, Fut>(label: &'static str, make: F) -> Self
    where
        F: FnOnce(Liveness) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let liveness = Liveness::new();
        let join = tokio::spawn(make(liveness.clone()));
        trace!(task = label, "timer task spawned");
        Self {
            label,
            abort: join.abort_handle(),
            liveness,
        }
    }

    /// Cancel the task. Safe to call more than once.
    pub fn dispose(&self) {
        if self.liveness.is_alive() {
            trace!(task = self.label, "timer task disposed");
        }
        self.liveness.kill();
        self.abort.abort();
    }

    /// Whether the task has run to completion or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.abort.is_finished()
    }

    /// Whether the handle has been disposed.
    pub fn is_disposed(&self) -> bool {
        !self.liveness.is_alive()
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Repeating timer. The first call happens one `period` after start.
///
/// Returning [`ControlFlow::Break`] from the callback ends the timer.
pub fn every<F>(label: &'static str, period: Duration, mut f: F) -> TaskHandle
where
    F: FnMut() -> ControlFlow<()> + Send + 'static,
{
    TaskHandle::spawn(label, move |live| async move {
        let mut ticks = time::interval_at(Instant::now() + period, period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticks.tick().await;
            if !live.is_alive() {
                return;
            }
            if f().is_break() {
                return;
            }
        }
    })
}

/// One-shot timer.
pub fn after<F>(label: &'static str, delay: Duration, f: F) -> TaskHandle
where
    F: FnOnce() + Send + 'static,
{
    TaskHandle::spawn(label, move |live| async move {
        time::sleep(delay).await;
        if live.is_alive() {
            f();
        }
    })
}

/// Owns the timers of one component and disposes them together.
#[derive(Debug, Default)]
pub struct TimerArena {
    handles: Vec<TaskHandle>,
}

impl TimerArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a handle.
    pub fn track(&mut self, handle: TaskHandle) {
        self.prune();
        self.handles.push(handle);
    }

    /// Dispose every tracked timer.
    pub fn clear(&mut self) {
        for handle in self.handles.drain(..) {
            handle.dispose();
        }
    }

    /// Forget handles whose task already ended.
    pub fn prune(&mut self) {
        self.handles.retain(|h| !h.is_finished());
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl Drop for TimerArena {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counter() -> (Arc<AtomicUsize>, impl FnMut() -> ControlFlow<()> + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        (count, move || {
            c.fetch_add(1, Ordering::SeqCst);
            ControlFlow::Continue(())
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_skips_immediate_tick() {
        let (count, f) = counter();
        let _handle = every("test", Duration::from_millis(100), f);

        time::sleep(Duration::from_millis(50)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        time::sleep(Duration::from_millis(300)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_stops_on_break() {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        let handle = every("test", Duration::from_millis(10), move || {
            if c.fetch_add(1, Ordering::SeqCst) + 1 == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        time::sleep(Duration::from_millis(100)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispose_stops_repeating_timer() {
        let (count, f) = counter();
        let handle = every("test", Duration::from_millis(100), f);

        time::sleep(Duration::from_millis(250)).await;
        handle.dispose();
        let seen = count.load(Ordering::SeqCst);

        time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(count.load(Ordering::SeqCst), seen);
        assert!(handle.is_disposed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_after_fires_once() {
        let fired = Arc::new(AtomicUsize::new(0));
        let f = fired.clone();
        let _handle = after("test", Duration::from_millis(800), move || {
            f.fetch_add(1, Ordering::SeqCst);
        });

        time::sleep(Duration::from_millis(799)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        time::sleep(Duration::from_millis(500)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_handle_cancels_one_shot() {
        let fired = Arc::new(AtomicUsize::new(0));
        let f = fired.clone();
        let handle = after("test", Duration::from_millis(100), move || {
            f.fetch_add(1, Ordering::SeqCst);
        });
        drop(handle);

        time::sleep(Duration::from_millis(500)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_arena_clear_stops_everything() {
        let (a, fa) = counter();
        let (b, fb) = counter();
        let mut arena = TimerArena::new();
        arena.track(every("a", Duration::from_millis(10), fa));
        arena.track(every("b", Duration::from_millis(20), fb));
        assert_eq!(arena.len(), 2);

        time::sleep(Duration::from_millis(45)).await;
        arena.clear();
        assert!(arena.is_empty());
        let (seen_a, seen_b) = (a.load(Ordering::SeqCst), b.load(Ordering::SeqCst));
        assert_eq!((seen_a, seen_b), (4, 2));

        time::sleep(Duration::from_millis(200)).await;
        assert_eq!(a.load(Ordering::SeqCst), seen_a);
        assert_eq!(b.load(Ordering::SeqCst), seen_b);
    }

    #[tokio::test(start_paused = true)]
    async fn test_arena_prunes_finished_tasks() {
        let mut arena = TimerArena::new();
        arena.track(after("short", Duration::from_millis(5), || {}));
        time::sleep(Duration::from_millis(50)).await;

        arena.track(after("long", Duration::from_secs(60), || {}));
        assert_eq!(arena.len(), 1);
    }
}
