#![forbid(unsafe_code)]

//! The focused-day cursor.
//!
//! [`FocusedDayCursor`] owns the single day under the keyboard/visual cursor
//! and the `active_focus` flag that says the cursor is being driven by the
//! keyboard. Every mutation passes through the range clamp, so the focused
//! day is always inside the configured range.
//!
//! The cursor is distinct from the committed value: it roams while the user
//! browses and only becomes the value on selection.

use calpick_core::date::{self, CalendarDate, DateRange, Weekday};

/// Focused day plus keyboard-focus flag, bounded by a [`DateRange`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusedDayCursor {
    focused_day: CalendarDate,
    active_focus: bool,
    range: DateRange,
    first_day_of_week: Weekday,
}

impl FocusedDayCursor {
    /// Create a cursor at `day`, clamped into `range`.
    #[must_use]
    pub fn new(day: CalendarDate, range: DateRange, first_day_of_week: Weekday) -> Self {
        Self {
            focused_day: range.clamp(day),
            active_focus: false,
            range,
            first_day_of_week,
        }
    }

    #[inline]
    #[must_use]
    pub fn focused_day(&self) -> CalendarDate {
        self.focused_day
    }

    /// Whether keyboard navigation is currently driving focus.
    #[inline]
    #[must_use]
    pub fn active_focus(&self) -> bool {
        self.active_focus
    }

    pub fn set_active_focus(&mut self, active: bool) {
        self.active_focus = active;
    }

    #[inline]
    #[must_use]
    pub fn range(&self) -> DateRange {
        self.range
    }

    #[inline]
    #[must_use]
    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    /// Replace the range and re-clamp the focused day into it.
    pub fn set_range(&mut self, range: DateRange) {
        self.range = range;
        self.focused_day = range.clamp(self.focused_day);
    }

    /// Set the focused day directly, clamped into range.
    pub fn set_focused_day(&mut self, day: CalendarDate) {
        let clamped = self.range.clamp(day);
        tracing::trace!(requested = %day, focused = %clamped, "Cursor moved");
        self.focused_day = clamped;
    }

    pub fn move_by_days(&mut self, n: i64) {
        self.set_focused_day(date::add_days(self.focused_day, n));
    }

    pub fn move_by_weeks(&mut self, n: i64) {
        self.move_by_days(n.saturating_mul(7));
    }

    pub fn move_to_start_of_week(&mut self) {
        self.set_focused_day(date::start_of_week(self.focused_day, self.first_day_of_week));
    }

    pub fn move_to_end_of_week(&mut self) {
        self.set_focused_day(date::end_of_week(self.focused_day, self.first_day_of_week));
    }

    /// Move by whole months. Moving from the 31st into a shorter month lands
    /// on that month's last day.
    pub fn move_by_months(&mut self, n: i32) {
        let month = self.focused_day.month() as i32;
        let candidate = date::set_month(self.focused_day, month.saturating_add(n));
        self.set_within_month(candidate);
    }

    /// Move by whole years. Feb 29 lands on Feb 28 in common years.
    pub fn move_by_years(&mut self, n: i32) {
        let year = self.focused_day.year();
        let candidate = date::set_year(self.focused_day, year.saturating_add(n));
        self.set_within_month(candidate);
    }

    /// Jump to `month` (1-based) of the focused year, as a month selector does.
    pub fn select_month(&mut self, month: u32) {
        let candidate = date::set_month(self.focused_day, month.clamp(1, 12) as i32);
        self.set_within_month(candidate);
    }

    /// Jump to `year`, keeping month and (clamped) day, as a year selector does.
    pub fn select_year(&mut self, year: i32) {
        let candidate = date::set_year(self.focused_day, year);
        self.set_within_month(candidate);
    }

    fn set_within_month(&mut self, candidate: CalendarDate) {
        let local = date::clamp(
            candidate,
            Some(date::start_of_month(candidate)),
            Some(date::end_of_month(candidate)),
        );
        self.set_focused_day(local);
    }
}
