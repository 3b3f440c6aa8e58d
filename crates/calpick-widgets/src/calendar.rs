#![forbid(unsafe_code)]

//! Calendar view model: the month grid and selector options.
//!
//! The rendering layer draws from these values and never computes dates
//! itself. A month view always spans whole weeks, so leading and trailing
//! days of adjacent months are included and flagged `in_month == false`.

use std::ops::RangeInclusive;

use calpick_core::date::{self, CalendarDate, DateRange, Weekday};
use calpick_i18n::Locale;

/// Years shown on each side of the focused year when a bound is absent.
pub const DEFAULT_YEAR_SPAN: i32 = 10;

/// One day in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: CalendarDate,
    /// Belongs to the focused month (not a leading/trailing day).
    pub in_month: bool,
    pub in_range: bool,
    /// Rejected by the host's availability predicate.
    pub is_disabled: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_focused: bool,
    /// Padding before `0000-01-01` or after `9999-12-31`. `date` then holds
    /// the nearest representable day and the cell must render blank.
    pub is_placeholder: bool,
}

impl DayCell {
    fn placeholder(date: CalendarDate) -> Self {
        Self {
            date,
            in_month: false,
            in_range: false,
            is_disabled: true,
            is_today: false,
            is_selected: false,
            is_focused: false,
            is_placeholder: true,
        }
    }
}

/// Whole weeks covering the focused month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<[DayCell; 7]>,
}

impl MonthView {
    /// Iterate every cell, row by row.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|w| w.iter())
    }
}

/// Inputs for building a [`MonthView`].
#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    pub focused: CalendarDate,
    pub first_day_of_week: Weekday,
    pub range: DateRange,
    pub today: CalendarDate,
    pub selected: Option<CalendarDate>,
}

/// Build the grid for the month containing `ctx.focused`.
///
/// Cells are laid out by their offset from the first of the month, so the
/// columns stay aligned with `first_day_of_week` even at the ends of the
/// representable range.
#[must_use]
pub fn month_view(ctx: &ViewContext, is_available: impl Fn(CalendarDate) -> bool) -> MonthView {
    let month_start = date::start_of_month(ctx.focused);
    let month_end = date::end_of_month(ctx.focused);
    let lead = weekday_column(month_start.weekday(), ctx.first_day_of_week);
    let trail = 6 - weekday_column(month_end.weekday(), ctx.first_day_of_week);
    let cells = lead + month_end.day() + trail;

    let weeks: Vec<[DayCell; 7]> = (0..cells / 7)
        .map(|row| {
            std::array::from_fn(|col| {
                let offset = i64::from(row * 7) + col as i64 - i64::from(lead);
                match date::checked_add_days(month_start, offset) {
                    Some(day) => DayCell {
                        date: day,
                        in_month: day.same_month(ctx.focused),
                        in_range: ctx.range.contains(day),
                        is_disabled: !is_available(day),
                        is_today: day == ctx.today,
                        is_selected: ctx.selected == Some(day),
                        is_focused: day == ctx.focused,
                        is_placeholder: false,
                    },
                    None if offset < 0 => DayCell::placeholder(CalendarDate::min_value()),
                    None => DayCell::placeholder(CalendarDate::max_value()),
                }
            })
        })
        .collect();

    MonthView {
        year: ctx.focused.year(),
        month: ctx.focused.month(),
        weeks,
    }
}

/// Column of `day` in a week that begins on `first_day`.
fn weekday_column(day: Weekday, first_day: Weekday) -> u32 {
    (7 + day.num_days_from_monday() - first_day.num_days_from_monday()) % 7
}

/// An entry of the month selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthOption {
    /// 1-based month.
    pub month: u32,
    pub label: &'static str,
    /// The whole month lies outside the range.
    pub disabled: bool,
}

/// Month selector entries for `year`.
#[must_use]
pub fn month_options(year: i32, range: DateRange, locale: &Locale) -> Vec<MonthOption> {
    (1..=12)
        .filter_map(|month| {
            let start = CalendarDate::new(year, month, 1)?;
            let end = date::end_of_month(start);
            let disabled = range.min.is_some_and(|min| end < min)
                || range.max.is_some_and(|max| start > max);
            Some(MonthOption {
                month,
                label: locale.month_name(month),
                disabled,
            })
        })
        .collect()
}

/// Years offered by the year selector. Absent bounds extend
/// [`DEFAULT_YEAR_SPAN`] years from the focused year.
#[must_use]
pub fn year_options(focused: CalendarDate, range: DateRange) -> RangeInclusive<i32> {
    let lo = range
        .min
        .map_or(focused.year() - DEFAULT_YEAR_SPAN, CalendarDate::year)
        .max(date::MIN_YEAR);
    let hi = range
        .max
        .map_or(focused.year() + DEFAULT_YEAR_SPAN, CalendarDate::year)
        .min(date::MAX_YEAR);
    lo..=hi
}

/// Whether the whole previous month lies before the range.
#[must_use]
pub fn is_prev_month_disabled(focused: CalendarDate, range: DateRange) -> bool {
    let start = date::start_of_month(focused);
    if start == CalendarDate::min_value() {
        return true;
    }
    let prev_end = date::add_days(start, -1);
    range.min.is_some_and(|min| prev_end < min)
}

/// Whether the whole next month lies after the range.
#[must_use]
pub fn is_next_month_disabled(focused: CalendarDate, range: DateRange) -> bool {
    let end = date::end_of_month(focused);
    if end == CalendarDate::max_value() {
        return true;
    }
    let next_start = date::add_days(end, 1);
    range.max.is_some_and(|max| next_start > max)
}
