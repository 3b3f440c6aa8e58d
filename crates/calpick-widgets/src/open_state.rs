#![forbid(unsafe_code)]

//! Open/closed lifecycle with its deferred focus timer.
//!
//! # State Machine
//!
//! ```text
//!            show()                       hide(move_focus)
//! ┌────────┐ ────────▶ ┌──────┐  ────────────────────────▶ ┌────────┐
//! │ Closed │           │ Open │                            │ Closed │
//! └────────┘ ◀──────── └──────┘ ◀── show() (re-entrant) ──┘└────────┘
//! ```
//!
//! # Invariants
//!
//! 1. At most one focus timer is pending. Both transitions cancel the
//!    previous handle before scheduling anything new.
//! 2. `show()` always schedules [`DeferredFocus::MonthSelect`].
//! 3. `hide(true)` schedules [`DeferredFocus::Toggle`]; `hide(false)`
//!    schedules nothing.
//! 4. Hiding before the open timer fires cancels it: focus never lands
//!    inside a closed dialog.

use calpick_runtime::{TimerHandle, TimerQueue};
use web_time::Duration;

/// Default delay before deferred focus moves, letting transitions finish.
pub const DEFAULT_FOCUS_DELAY: Duration = Duration::from_millis(400);

/// Dialog visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OpenState {
    #[default]
    Closed,
    Open,
}

/// A focus move performed when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeferredFocus {
    /// Move focus into the dialog, onto the month selector.
    MonthSelect,
    /// Return focus to the trigger control.
    Toggle,
    /// Focus the day grid after layout settles.
    DayGrid,
}

/// Owns open/closed status and the single pending lifecycle focus timer.
#[derive(Debug, Clone)]
pub struct OpenStateMachine {
    state: OpenState,
    pending: Option<TimerHandle>,
    delay: Duration,
}

impl Default for OpenStateMachine {
    fn default() -> Self {
        Self::new(DEFAULT_FOCUS_DELAY)
    }
}

impl OpenStateMachine {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            state: OpenState::Closed,
            pending: None,
            delay,
        }
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> OpenState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == OpenState::Open
    }

    /// The pending lifecycle timer, if any.
    #[inline]
    #[must_use]
    pub fn pending(&self) -> Option<TimerHandle> {
        self.pending
    }

    #[inline]
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Transition to `Open` and schedule focus into the dialog.
    pub fn show(&mut self, timers: &mut TimerQueue<DeferredFocus>) {
        self.cancel_pending(timers);
        self.state = OpenState::Open;
        self.pending = Some(timers.schedule(self.delay, DeferredFocus::MonthSelect));
        tracing::debug!(state = ?self.state, "Picker opened");
    }

    /// Transition to `Closed`, optionally scheduling focus back to the
    /// trigger control.
    pub fn hide(&mut self, timers: &mut TimerQueue<DeferredFocus>, move_focus_to_button: bool) {
        self.cancel_pending(timers);
        self.state = OpenState::Closed;
        if move_focus_to_button {
            self.pending = Some(timers.schedule(self.delay, DeferredFocus::Toggle));
        }
        tracing::debug!(state = ?self.state, move_focus_to_button, "Picker closed");
    }

    /// Forget `handle` once its timer has fired. Returns `true` when it was
    /// the lifecycle timer owned by this machine.
    pub fn timer_fired(&mut self, handle: TimerHandle) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    fn cancel_pending(&mut self, timers: &mut TimerQueue<DeferredFocus>) {
        if let Some(handle) = self.pending.take() {
            timers.cancel(handle);
        }
    }
}
