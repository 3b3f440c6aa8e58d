#![forbid(unsafe_code)]

//! Timezone-less calendar dates and the pure arithmetic over them.
//!
//! [`CalendarDate`] wraps a [`chrono::NaiveDate`] restricted to the years
//! `0000..=9999`, which is exactly the set of dates the `YYYY-MM-DD` wire
//! format can represent. Every arithmetic helper saturates at those bounds
//! instead of failing, so callers can chain moves without handling errors.
//!
//! # Invariants
//!
//! 1. `parse_iso_date(&print_iso_date(d)) == Some(d)` for every date.
//! 2. `set_month`/`set_year` never produce an invalid day: the day of month
//!    is clamped down to the target month's length.
//! 3. `clamp(d, min, max)` always satisfies `in_range(.., min, max)` when
//!    `min <= max`.

use std::fmt;

use chrono::{Datelike, Days, Local, NaiveDate};

pub use chrono::Weekday;

/// Smallest year representable in the four-digit ISO format.
pub const MIN_YEAR: i32 = 0;

/// Largest year representable in the four-digit ISO format.
pub const MAX_YEAR: i32 = 9999;

/// Week start used when none is configured.
pub const DEFAULT_FIRST_DAY_OF_WEEK: Weekday = Weekday::Mon;

/// An immutable (year, month, day) value with no time-of-day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create a date from its fields. Returns `None` for impossible dates
    /// (Feb 30, month 13) and for years outside `0..=9999`.
    #[must_use]
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Wrap a chrono date, rejecting years the ISO format cannot carry.
    #[must_use]
    pub fn from_naive(date: NaiveDate) -> Option<Self> {
        if (MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            Some(Self(date))
        } else {
            None
        }
    }

    /// The current local calendar date.
    #[must_use]
    pub fn today() -> Self {
        Self::saturating(Local::now().date_naive())
    }

    /// Earliest representable date, `0000-01-01`.
    #[must_use]
    pub fn min_value() -> Self {
        Self(first_of(MIN_YEAR, 1))
    }

    /// Latest representable date, `9999-12-31`.
    #[must_use]
    pub fn max_value() -> Self {
        Self(first_of(MAX_YEAR, 12).with_day(31).unwrap_or(first_of(MAX_YEAR, 12)))
    }

    fn saturating(date: NaiveDate) -> Self {
        if date.year() < MIN_YEAR {
            Self::min_value()
        } else if date.year() > MAX_YEAR {
            Self::max_value()
        } else {
            Self(date)
        }
    }

    #[inline]
    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Month of year, `1..=12`.
    #[inline]
    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Day of month, `1..=31`.
    #[inline]
    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    #[inline]
    #[must_use]
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// The underlying chrono value.
    #[inline]
    #[must_use]
    pub fn as_naive(self) -> NaiveDate {
        self.0
    }

    /// Whether both dates fall in the same month of the same year.
    #[must_use]
    pub fn same_month(self, other: Self) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

/// First day of a month. `month` must already be in `1..=12` and `year` in
/// chrono's supported span; both hold for every caller in this module.
fn first_of(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

// ---------------------------------------------------------------------------
// Ranges
// ---------------------------------------------------------------------------

/// Optional inclusive bounds. An absent side is unbounded.
///
/// When both bounds are present the caller guarantees `min <= max`; this is
/// not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub min: Option<CalendarDate>,
    pub max: Option<CalendarDate>,
}

impl DateRange {
    /// A range with no bounds on either side.
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None,
    };

    #[must_use]
    pub const fn new(min: Option<CalendarDate>, max: Option<CalendarDate>) -> Self {
        Self { min, max }
    }

    /// Whether `date` lies inside the range (inclusive).
    #[inline]
    #[must_use]
    pub fn contains(&self, date: CalendarDate) -> bool {
        in_range(date, self.min, self.max)
    }

    /// Force `date` to the nearest bound if it lies outside the range.
    #[inline]
    #[must_use]
    pub fn clamp(&self, date: CalendarDate) -> CalendarDate {
        clamp(date, self.min, self.max)
    }

    /// Whether no bound is set on either side.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

/// Number of days in `month` (1-based) of `year`.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

/// Proleptic Gregorian leap-year rule.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Add `n` days (negative moves backwards), crossing month and year
/// boundaries. Saturates at the representable range.
#[must_use]
pub fn add_days(date: CalendarDate, n: i64) -> CalendarDate {
    checked_add_days(date, n).unwrap_or_else(|| {
        if n >= 0 {
            CalendarDate::max_value()
        } else {
            CalendarDate::min_value()
        }
    })
}

/// Add `n` days, or `None` when the result leaves the representable range.
#[must_use]
pub fn checked_add_days(date: CalendarDate, n: i64) -> Option<CalendarDate> {
    let days = Days::new(n.unsigned_abs());
    let moved = if n >= 0 {
        date.0.checked_add_days(days)
    } else {
        date.0.checked_sub_days(days)
    };
    moved.and_then(CalendarDate::from_naive)
}

/// First day of the week containing `date`, for a week that begins on
/// `first_day`.
#[must_use]
pub fn start_of_week(date: CalendarDate, first_day: Weekday) -> CalendarDate {
    let current = date.weekday().num_days_from_monday();
    let first = first_day.num_days_from_monday();
    let offset = (7 + current - first) % 7;
    add_days(date, -i64::from(offset))
}

/// Last day of the week containing `date`, for a week that begins on
/// `first_day`.
#[must_use]
pub fn end_of_week(date: CalendarDate, first_day: Weekday) -> CalendarDate {
    add_days(start_of_week(date, first_day), 6)
}

#[must_use]
pub fn start_of_month(date: CalendarDate) -> CalendarDate {
    CalendarDate(first_of(date.year(), date.month()))
}

#[must_use]
pub fn end_of_month(date: CalendarDate) -> CalendarDate {
    let last = days_in_month(date.year(), date.month());
    CalendarDate(date.0.with_day(last).unwrap_or(date.0))
}

/// Replace the month field. `month` is 1-based and may overflow in either
/// direction (13 is January of the next year, 0 is December of the previous
/// one). The day is clamped to the target month's length.
#[must_use]
pub fn set_month(date: CalendarDate, month: i32) -> CalendarDate {
    let zero_based = i64::from(month) - 1;
    let year = i64::from(date.year()) + zero_based.div_euclid(12);
    let year = year.clamp(i64::from(MIN_YEAR) - 1, i64::from(MAX_YEAR) + 1) as i32;
    let month = zero_based.rem_euclid(12) as u32 + 1;
    with_year_month(date, year, month)
}

/// Replace the year field, clamping Feb 29 to Feb 28 in common years.
#[must_use]
pub fn set_year(date: CalendarDate, year: i32) -> CalendarDate {
    with_year_month(date, year, date.month())
}

fn with_year_month(date: CalendarDate, year: i32, month: u32) -> CalendarDate {
    if year < MIN_YEAR {
        return CalendarDate::min_value();
    }
    if year > MAX_YEAR {
        return CalendarDate::max_value();
    }
    let day = date.day().min(days_in_month(year, month));
    CalendarDate::new(year, month, day).unwrap_or(date)
}

/// Return `date` when it lies within `[min, max]`, else the nearer bound.
/// An absent bound is unbounded.
#[must_use]
pub fn clamp(
    date: CalendarDate,
    min: Option<CalendarDate>,
    max: Option<CalendarDate>,
) -> CalendarDate {
    if let Some(min) = min
        && date < min
    {
        return min;
    }
    if let Some(max) = max
        && date > max
    {
        return max;
    }
    date
}

/// Inclusive membership test. An absent bound is unbounded.
#[must_use]
pub fn in_range(date: CalendarDate, min: Option<CalendarDate>, max: Option<CalendarDate>) -> bool {
    min.is_none_or(|min| date >= min) && max.is_none_or(|max| date <= max)
}

// ---------------------------------------------------------------------------
// ISO-8601
// ---------------------------------------------------------------------------

/// Parse an exact `YYYY-MM-DD` string. Anything else, including a
/// well-shaped but impossible date such as `2023-02-29`, yields `None`.
#[must_use]
pub fn parse_iso_date(s: &str) -> Option<CalendarDate> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let year = digits(&bytes[0..4])?;
    let month = digits(&bytes[5..7])?;
    let day = digits(&bytes[8..10])?;
    CalendarDate::new(year as i32, month, day)
}

/// Print a date as zero-padded `YYYY-MM-DD`.
#[must_use]
pub fn print_iso_date(date: CalendarDate) -> String {
    date.to_string()
}

fn digits(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0u32, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}
