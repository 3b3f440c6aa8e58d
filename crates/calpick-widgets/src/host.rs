#![forbid(unsafe_code)]

//! The seam between the picker engine and the rendering layer.
//!
//! The engine never touches elements. It asks the host to move focus to a
//! logical [`FocusTarget`] and hands it notifications to deliver. Emitted
//! notifications stop at the widget boundary: the host delivers them to the
//! application and must not re-dispatch the native events they came from.

use crate::focus_trap::FocusTarget;
use crate::value::ChangeEvent;

/// Notifications raised by the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// The committed value changed.
    Change(ChangeEvent),
    /// The text input gained focus.
    Focus,
    /// The text input lost focus.
    Blur,
}

/// What the host should do with the native event it just forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[must_use]
pub enum Handling {
    /// Let the host's default action run.
    #[default]
    PassThrough,
    /// Cancel the default action (scroll, tab traversal).
    Suppress,
}

impl Handling {
    #[inline]
    pub const fn is_suppressed(self) -> bool {
        matches!(self, Self::Suppress)
    }
}

/// Imperative operations the engine needs from the rendering layer.
pub trait PickerHost {
    /// Move input focus to `target`.
    fn focus(&mut self, target: FocusTarget);

    /// Deliver a notification to the application.
    fn emit(&mut self, event: PickerEvent);
}

/// A host that records every request, for tests and headless use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingHost {
    pub focus_moves: Vec<FocusTarget>,
    pub events: Vec<PickerEvent>,
}

impl RecordingHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent focus target, if any.
    #[must_use]
    pub fn focused(&self) -> Option<FocusTarget> {
        self.focus_moves.last().copied()
    }

    /// Every change payload emitted so far.
    #[must_use]
    pub fn changes(&self) -> Vec<&ChangeEvent> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PickerEvent::Change(change) => Some(change),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.focus_moves.clear();
        self.events.clear();
    }
}

impl PickerHost for RecordingHost {
    fn focus(&mut self, target: FocusTarget) {
        self.focus_moves.push(target);
    }

    fn emit(&mut self, event: PickerEvent) {
        self.events.push(event);
    }
}
