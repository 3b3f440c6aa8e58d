#![forbid(unsafe_code)]

//! Tab-key focus trap for the calendar dialog.
//!
//! The trap holds the dialog's focusable targets in declaration order:
//! the close control first, the day grid last, selectors in between.
//!
//! # Invariants
//!
//! 1. **Forward tab** from any element in the trap moves focus to the first
//!    element and suppresses the host's traversal. Natural forward order
//!    inside the dialog is never used.
//! 2. **Backward tab** from the first element wraps to the last (the
//!    focused day). Backward tab from any other element is left to the
//!    host's natural traversal.
//! 3. Tab from an element outside the trap, or with an empty trap, is not
//!    intercepted.

/// Logical focus targets of the picker. The rendering layer maps each to
/// its own element handle; the engine only ever asks for focus to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// The text input.
    Input,
    /// The button that opens the dialog.
    Toggle,
    Close,
    MonthSelect,
    YearSelect,
    PrevMonth,
    NextMonth,
    /// The focused day inside the calendar grid.
    DayGrid,
}

impl FocusTarget {
    /// Dialog targets in the default trap order.
    pub const DIALOG_ORDER: [FocusTarget; 6] = [
        Self::Close,
        Self::MonthSelect,
        Self::YearSelect,
        Self::PrevMonth,
        Self::NextMonth,
        Self::DayGrid,
    ];
}

/// Where focus must go in response to a tab key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrapDecision {
    /// Let the host perform its default traversal.
    PassThrough,
    /// Move focus to the target and suppress default traversal.
    MoveTo(FocusTarget),
}

/// Ordered focusable targets inside the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTrap {
    targets: Vec<FocusTarget>,
}

impl Default for FocusTrap {
    fn default() -> Self {
        Self::new(FocusTarget::DIALOG_ORDER.to_vec())
    }
}

impl FocusTrap {
    #[must_use]
    pub fn new(targets: Vec<FocusTarget>) -> Self {
        Self { targets }
    }

    #[must_use]
    pub fn targets(&self) -> &[FocusTarget] {
        &self.targets
    }

    /// Highest-priority target; receives focus first on open.
    #[must_use]
    pub fn first(&self) -> Option<FocusTarget> {
        self.targets.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<FocusTarget> {
        self.targets.last().copied()
    }

    #[must_use]
    pub fn contains(&self, target: FocusTarget) -> bool {
        self.targets.contains(&target)
    }

    /// Decide where focus goes for a tab press on `origin`.
    #[must_use]
    pub fn on_tab(&self, origin: FocusTarget, backward: bool) -> TrapDecision {
        let (Some(first), Some(last)) = (self.first(), self.last()) else {
            return TrapDecision::PassThrough;
        };
        if !self.contains(origin) {
            return TrapDecision::PassThrough;
        }

        if backward {
            if origin == first {
                TrapDecision::MoveTo(last)
            } else {
                TrapDecision::PassThrough
            }
        } else {
            TrapDecision::MoveTo(first)
        }
    }
}
