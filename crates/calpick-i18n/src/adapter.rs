#![forbid(unsafe_code)]

//! Locale-facing free-text date formats.
//!
//! The text input accepts numeric dates only. [`clean_date_text`] strips
//! everything but ASCII digits and the separator class `[./-]`, then a
//! [`DateAdapter`] parses the cleaned text. Parsing never raises: anything
//! that is not a real date yields `None`.

use calpick_core::CalendarDate;

/// Characters that survive [`clean_date_text`] besides ASCII digits.
pub const SEPARATORS: [char; 3] = ['.', '/', '-'];

/// Parse and print dates in a locale's text format.
pub trait DateAdapter {
    /// Parse cleaned text. Returns `None` on anything that is not a date.
    fn parse(&self, text: &str) -> Option<CalendarDate>;

    /// Format a date for display in the text input.
    fn format(&self, date: CalendarDate) -> String;
}

/// Field order of a numeric date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateOrder {
    DayMonthYear,
    MonthDayYear,
    YearMonthDay,
}

/// Numeric `D.M.YYYY`-style adapter parameterized by field order.
///
/// Parsing accepts any separator from [`SEPARATORS`] between fields, one or
/// two digits for day and month, and exactly four digits for the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericDateAdapter {
    order: DateOrder,
    separator: char,
    zero_pad: bool,
}

impl NumericDateAdapter {
    #[must_use]
    pub const fn new(order: DateOrder, separator: char, zero_pad: bool) -> Self {
        Self {
            order,
            separator,
            zero_pad,
        }
    }

    #[must_use]
    pub const fn order(&self) -> DateOrder {
        self.order
    }
}

impl Default for NumericDateAdapter {
    fn default() -> Self {
        Self::new(DateOrder::DayMonthYear, '.', false)
    }
}

impl DateAdapter for NumericDateAdapter {
    fn parse(&self, text: &str) -> Option<CalendarDate> {
        let mut fields = text.split(SEPARATORS);
        let a = fields.next()?;
        let b = fields.next()?;
        let c = fields.next()?;
        if fields.next().is_some() {
            return None;
        }

        let (year, month, day) = match self.order {
            DateOrder::DayMonthYear => (c, b, a),
            DateOrder::MonthDayYear => (c, a, b),
            DateOrder::YearMonthDay => (a, b, c),
        };

        let year = number(year, 4..=4)?;
        let month = number(month, 1..=2)?;
        let day = number(day, 1..=2)?;
        CalendarDate::new(year as i32, month, day)
    }

    fn format(&self, date: CalendarDate) -> String {
        let sep = self.separator;
        let (d, m, y) = (date.day(), date.month(), date.year());
        let (day, month) = if self.zero_pad {
            (format!("{d:02}"), format!("{m:02}"))
        } else {
            (d.to_string(), m.to_string())
        };
        match self.order {
            DateOrder::DayMonthYear => format!("{day}{sep}{month}{sep}{y:04}"),
            DateOrder::MonthDayYear => format!("{month}{sep}{day}{sep}{y:04}"),
            DateOrder::YearMonthDay => format!("{y:04}{sep}{month}{sep}{day}"),
        }
    }
}

fn number(field: &str, len: std::ops::RangeInclusive<usize>) -> Option<u32> {
    if !len.contains(&field.len()) || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Strip every character except ASCII digits and the separator class.
#[must_use]
pub fn clean_date_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || SEPARATORS.contains(c))
        .collect()
}
