//! Deferred execution on the navigator's control context.
//!
//! Completion callbacks never run inside the command call that produced
//! them. The navigator hands them to a [`Scheduler`] together with a delay,
//! and the scheduler runs them later on the same thread.
//!
//! - [`ManualScheduler`] — a virtual clock driven by the caller. Used by
//!   tests and by hosts that pump their own frame loop.
//! - [`TokioScheduler`] — timer-driven, runs tasks on a tokio `LocalSet`
//!   (feature `tokio`).

use crate::trace_log;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Deferred unit of work.
pub type Task = Box<dyn FnOnce()>;

/// Runs tasks after a delay on the caller's control context.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Task);
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    fn schedule(&self, delay: Duration, task: Task) {
        (**self).schedule(delay, task);
    }
}

// ============================================================================
// ManualScheduler
// ============================================================================

/// Deterministic scheduler with a virtual clock.
///
/// Tasks run only when the owner calls [`advance`](Self::advance) or
/// [`run_until_idle`](Self::run_until_idle). Tasks due at the same instant
/// run in the order they were scheduled. A task may schedule further tasks;
/// those run in the same `advance` call if they fall due within it.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use std::time::Duration;
/// use stack_navigator::{ManualScheduler, Scheduler};
///
/// let scheduler = ManualScheduler::new();
/// let fired = Rc::new(Cell::new(false));
/// let flag = fired.clone();
/// scheduler.schedule(Duration::from_millis(250), Box::new(move || flag.set(true)));
///
/// scheduler.advance(Duration::from_millis(249));
/// assert!(!fired.get());
/// scheduler.advance(Duration::from_millis(1));
/// assert!(fired.get());
/// ```
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    seq: Cell<u64>,
    queue: RefCell<BTreeMap<(Duration, u64), Task>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    /// Number of tasks waiting to run.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Move the clock forward by `by`, running every task that falls due.
    /// Returns how many tasks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let deadline = self.now.get() + by;
        let mut ran = 0;
        while let Some((at, task)) = self.pop_due(deadline) {
            self.now.set(self.now.get().max(at));
            task();
            ran += 1;
        }
        self.now.set(self.now.get().max(deadline));
        ran
    }

    /// Run tasks until the queue is empty, moving the clock as far as the
    /// last task requires. Returns how many tasks ran.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        while let Some((at, task)) = self.pop_next() {
            self.now.set(self.now.get().max(at));
            task();
            ran += 1;
        }
        ran
    }

    fn pop_due(&self, deadline: Duration) -> Option<(Duration, Task)> {
        let mut queue = self.queue.borrow_mut();
        let key = *queue.keys().next()?;
        if key.0 > deadline {
            return None;
        }
        queue.remove(&key).map(|task| (key.0, task))
    }

    fn pop_next(&self) -> Option<(Duration, Task)> {
        let mut queue = self.queue.borrow_mut();
        let key = *queue.keys().next()?;
        queue.remove(&key).map(|task| (key.0, task))
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let at = self.now.get() + delay;
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        trace_log!("task #{} scheduled at {:?}", seq, at);
        self.queue.borrow_mut().insert((at, seq), task);
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now", &self.now.get())
            .field("pending", &self.pending())
            .finish()
    }
}

// ============================================================================
// TokioScheduler
// ============================================================================

/// Timer-driven scheduler on the current tokio `LocalSet`.
///
/// Tasks are spawned with [`tokio::task::spawn_local`], so scheduling must
/// happen from inside a `LocalSet` (the "UI thread" of a tokio app).
#[cfg(feature = "tokio")]
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioScheduler;

#[cfg(feature = "tokio")]
impl TokioScheduler {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "tokio")]
impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        trace_log!("spawning settle timer for {:?}", delay);
        tokio::task::spawn_local(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            task();
        });
    }
}
