#![forbid(unsafe_code)]

//! Pointer interactions outside the picker's owned regions.
//!
//! The picker owns two regions: the dialog and the trigger button. A
//! pointer-down anywhere else while the dialog is open closes it without
//! returning focus to the trigger, since the user has already moved on.
//! The host routes document pointer-downs here through a capture-phase
//! subscription so target handlers cannot swallow them first.

use calpick_core::geometry::{Position, Rect};

/// Hit tester for the dialog and trigger regions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OutsideInteractionDetector {
    dialog: Rect,
    trigger: Rect,
}

impl OutsideInteractionDetector {
    #[must_use]
    pub const fn new(dialog: Rect, trigger: Rect) -> Self {
        Self { dialog, trigger }
    }

    /// Update regions after layout.
    pub fn set_regions(&mut self, dialog: Rect, trigger: Rect) {
        self.dialog = dialog;
        self.trigger = trigger;
    }

    #[must_use]
    pub fn dialog(&self) -> Rect {
        self.dialog
    }

    #[must_use]
    pub fn trigger(&self) -> Rect {
        self.trigger
    }

    /// Whether `target` lies in a region the picker owns.
    #[must_use]
    pub fn is_owned(&self, target: Position) -> bool {
        self.dialog.contains(target) || self.trigger.contains(target)
    }

    /// Whether an interaction at `target` must close the dialog.
    #[must_use]
    pub fn should_close(&self, target: Position, open: bool) -> bool {
        open && !self.is_owned(target)
    }
}
