#![forbid(unsafe_code)]

//! The committed value and its change notifications.
//!
//! [`ValueController`] is the single source of truth for what the user has
//! committed. It changes only through day selection or text entry, and
//! every commit yields a [`ChangeEvent`] carrying both the ISO-8601 string
//! and the date.

use calpick_core::date::{self, CalendarDate};
use calpick_i18n::{DateAdapter, clean_date_text};

use crate::cursor::FocusedDayCursor;

/// Payload of a value commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// `YYYY-MM-DD`, or empty when the value was cleared.
    pub value: String,
    pub date: Option<CalendarDate>,
}

impl ChangeEvent {
    #[must_use]
    pub fn new(date: Option<CalendarDate>) -> Self {
        Self {
            value: date.map(date::print_iso_date).unwrap_or_default(),
            date,
        }
    }
}

/// Result of selecting a day in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Outside the range or unavailable: nothing changed.
    Ignored,
    /// A day from an adjacent month: the cursor moved, no commit.
    Navigated(CalendarDate),
    /// The day was committed; the dialog should close.
    Committed(ChangeEvent),
}

/// Result of editing the text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextOutcome {
    /// The text did not parse; the previous value stands.
    Unchanged,
    Committed(ChangeEvent),
}

/// Owns the nullable committed date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueController {
    value: Option<CalendarDate>,
}

impl ValueController {
    #[must_use]
    pub fn new(value: Option<CalendarDate>) -> Self {
        Self { value }
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<CalendarDate> {
        self.value
    }

    /// The value as `YYYY-MM-DD`, or empty.
    #[must_use]
    pub fn iso(&self) -> String {
        self.value.map(date::print_iso_date).unwrap_or_default()
    }

    /// Set the value and build its change notification.
    pub fn commit(&mut self, value: Option<CalendarDate>) -> ChangeEvent {
        self.value = value;
        let event = ChangeEvent::new(value);
        tracing::debug!(value = %event.value, "Value committed");
        event
    }

    /// Select `day` from the grid.
    ///
    /// Days outside the cursor's range, or rejected by `is_available`, are
    /// ignored. A day in a different month than the focused one only moves
    /// the cursor, so clicking a leading/trailing day browses into its month.
    pub fn select(
        &mut self,
        day: CalendarDate,
        cursor: &mut FocusedDayCursor,
        is_available: impl Fn(CalendarDate) -> bool,
    ) -> SelectOutcome {
        if !cursor.range().contains(day) || !is_available(day) {
            tracing::trace!(%day, "Selection ignored");
            return SelectOutcome::Ignored;
        }
        if !day.same_month(cursor.focused_day()) {
            cursor.set_focused_day(day);
            return SelectOutcome::Navigated(day);
        }
        SelectOutcome::Committed(self.commit(Some(day)))
    }

    /// Commit from free text. Non-date characters are stripped first; empty
    /// text clears the value; unparseable text is ignored.
    pub fn set_from_text(&mut self, raw: &str, adapter: &dyn DateAdapter) -> TextOutcome {
        let cleaned = clean_date_text(raw);
        if cleaned.is_empty() {
            return TextOutcome::Committed(self.commit(None));
        }
        match adapter.parse(&cleaned) {
            Some(day) => TextOutcome::Committed(self.commit(Some(day))),
            None => TextOutcome::Unchanged,
        }
    }
}
