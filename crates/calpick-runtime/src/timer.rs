#![forbid(unsafe_code)]

//! Deferred actions on a logical clock.
//!
//! [`TimerQueue`] stores tasks due at a logical time. The host calls
//! [`advance`](TimerQueue::advance) with the elapsed wall time (or any
//! synthetic duration in tests) and receives every task that came due, in
//! due order.
//!
//! # Invariants
//!
//! 1. A cancelled task never fires, no matter how far the clock advances.
//! 2. Tasks fire in `(due, schedule order)` order.
//! 3. A [`TimerHandle`] is never reused within one queue.
//!
//! Owners that allow at most one live timer keep an `Option<TimerHandle>`
//! and cancel it before scheduling the next one.

use web_time::Duration;

/// Identifies one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Pending<T> {
    handle: TimerHandle,
    due: Duration,
    task: T,
}

/// A queue of deferred tasks driven by an explicit clock.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 1,
            pending: Vec::new(),
        }
    }

    /// Logical time elapsed since the queue was created.
    #[inline]
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `task` to fire `delay` after the current logical time.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        let due = self.now.saturating_add(delay);
        tracing::debug!(timer = handle.0, delay_ms = delay.as_millis() as u64, "Scheduling timer");
        self.pending.push(Pending { handle, due, task });
        handle
    }

    /// Cancel a pending task. Returns `false` if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.handle != handle);
        let removed = self.pending.len() != before;
        if removed {
            tracing::debug!(timer = handle.0, "Cancelled timer");
        }
        removed
    }

    /// Whether `handle` is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|p| p.handle == handle)
    }

    /// Number of tasks waiting to fire.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Time until the earliest pending task is due, if any.
    #[must_use]
    pub fn next_due_in(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|p| p.due.saturating_sub(self.now))
            .min()
    }

    /// Move the clock forward by `elapsed` and return every task that came
    /// due, earliest first.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<(TimerHandle, T)> {
        self.now = self.now.saturating_add(elapsed);
        let now = self.now;

        let mut due = Vec::new();
        let mut waiting = Vec::with_capacity(self.pending.len());
        for p in self.pending.drain(..) {
            if p.due <= now {
                due.push(p);
            } else {
                waiting.push(p);
            }
        }
        self.pending = waiting;

        due.sort_by_key(|p| (p.due, p.handle));
        due.into_iter()
            .map(|p| {
                tracing::debug!(timer = p.handle.0, "Timer fired");
                (p.handle, p.task)
            })
            .collect()
    }

    /// Drop every pending task without firing it.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
