#![forbid(unsafe_code)]

//! Built-in string tables for the supported languages.
//!
//! A [`Locale`] is immutable and `'static`; resolving one is a table lookup.
//! Name arrays are ordered January-first and Monday-first; use
//! [`Locale::weekday_headers`] to rotate weekday names for a configured
//! week start.

use std::fmt;

use calpick_core::date::Weekday;

use crate::adapter::{DateOrder, NumericDateAdapter};

/// A supported language tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Fi,
    Sv,
    De,
}

impl Language {
    /// Every supported language, in declaration order.
    pub const ALL: [Language; 4] = [Self::En, Self::Fi, Self::Sv, Self::De];

    /// Resolve a BCP-47-ish tag. Matching is case-insensitive and only the
    /// primary subtag is considered, so `en-GB` and `EN` both resolve to
    /// English. Unknown tags yield `None`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "fi" => Some(Self::Fi),
            "sv" => Some(Self::Sv),
            "de" => Some(Self::De),
            _ => None,
        }
    }

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fi => "fi",
            Self::Sv => "sv",
            Self::De => "de",
        }
    }

    /// The string table for this language.
    #[must_use]
    pub fn locale(self) -> &'static Locale {
        match self {
            Self::En => &EN,
            Self::Fi => &FI,
            Self::Sv => &SV,
            Self::De => &DE,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Month/day names and UI label strings for one language.
#[derive(Debug, PartialEq, Eq)]
pub struct Locale {
    pub language: Language,
    pub button_label: &'static str,
    pub placeholder: &'static str,
    pub selected_date_message: &'static str,
    pub prev_month_label: &'static str,
    pub next_month_label: &'static str,
    pub month_select_label: &'static str,
    pub year_select_label: &'static str,
    pub close_label: &'static str,
    pub keyboard_instruction: &'static str,
    pub calendar_heading: &'static str,
    pub month_names: [&'static str; 12],
    pub month_names_short: [&'static str; 12],
    /// Monday-first long weekday names.
    pub day_names: [&'static str; 7],
    /// Monday-first short weekday names.
    pub day_names_short: [&'static str; 7],
    date_order: DateOrder,
    date_separator: char,
    zero_pad: bool,
}

impl Locale {
    /// Long name of a 1-based month. Out-of-range months yield `""`.
    #[must_use]
    pub fn month_name(&self, month: u32) -> &'static str {
        month_index(month).map_or("", |i| self.month_names[i])
    }

    #[must_use]
    pub fn month_name_short(&self, month: u32) -> &'static str {
        month_index(month).map_or("", |i| self.month_names_short[i])
    }

    #[must_use]
    pub fn weekday_name(&self, day: Weekday) -> &'static str {
        self.day_names[day.num_days_from_monday() as usize]
    }

    #[must_use]
    pub fn weekday_name_short(&self, day: Weekday) -> &'static str {
        self.day_names_short[day.num_days_from_monday() as usize]
    }

    /// Short weekday names in column order for a week starting on `first`.
    #[must_use]
    pub fn weekday_headers(&self, first: Weekday) -> [&'static str; 7] {
        let offset = first.num_days_from_monday() as usize;
        std::array::from_fn(|i| self.day_names_short[(i + offset) % 7])
    }

    /// The numeric text format used for the input field.
    #[must_use]
    pub fn date_adapter(&self) -> NumericDateAdapter {
        NumericDateAdapter::new(self.date_order, self.date_separator, self.zero_pad)
    }
}

fn month_index(month: u32) -> Option<usize> {
    (1..=12).contains(&month).then(|| month as usize - 1)
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

static EN: Locale = Locale {
    language: Language::En,
    button_label: "Choose date",
    placeholder: "",
    selected_date_message: "Selected date is",
    prev_month_label: "Previous month",
    next_month_label: "Next month",
    month_select_label: "Month",
    year_select_label: "Year",
    close_label: "Close window",
    keyboard_instruction: "You can use arrow keys to navigate dates",
    calendar_heading: "Choose a date",
    month_names: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    month_names_short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    day_names: [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ],
    day_names_short: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    date_order: DateOrder::MonthDayYear,
    date_separator: '/',
    zero_pad: false,
};

static FI: Locale = Locale {
    language: Language::Fi,
    button_label: "Valitse päivämäärä",
    placeholder: "",
    selected_date_message: "Valittu päivämäärä on",
    prev_month_label: "Edellinen kuukausi",
    next_month_label: "Seuraava kuukausi",
    month_select_label: "Kuukausi",
    year_select_label: "Vuosi",
    close_label: "Sulje ikkuna",
    keyboard_instruction: "Voit navigoida päivämääriä nuolinäppäimillä",
    calendar_heading: "Valitse päivämäärä",
    month_names: [
        "tammikuu",
        "helmikuu",
        "maaliskuu",
        "huhtikuu",
        "toukokuu",
        "kesäkuu",
        "heinäkuu",
        "elokuu",
        "syyskuu",
        "lokakuu",
        "marraskuu",
        "joulukuu",
    ],
    month_names_short: [
        "tammi", "helmi", "maalis", "huhti", "touko", "kesä", "heinä", "elo", "syys", "loka",
        "marras", "joulu",
    ],
    day_names: [
        "maanantai",
        "tiistai",
        "keskiviikko",
        "torstai",
        "perjantai",
        "lauantai",
        "sunnuntai",
    ],
    day_names_short: ["ma", "ti", "ke", "to", "pe", "la", "su"],
    date_order: DateOrder::DayMonthYear,
    date_separator: '.',
    zero_pad: false,
};

static SV: Locale = Locale {
    language: Language::Sv,
    button_label: "Välj datum",
    placeholder: "",
    selected_date_message: "Valt datum är",
    prev_month_label: "Föregående månad",
    next_month_label: "Nästa månad",
    month_select_label: "Månad",
    year_select_label: "År",
    close_label: "Stäng fönster",
    keyboard_instruction: "Du kan använda piltangenterna för att navigera mellan datum",
    calendar_heading: "Välj ett datum",
    month_names: [
        "januari",
        "februari",
        "mars",
        "april",
        "maj",
        "juni",
        "juli",
        "augusti",
        "september",
        "oktober",
        "november",
        "december",
    ],
    month_names_short: [
        "jan", "feb", "mar", "apr", "maj", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
    ],
    day_names: [
        "måndag", "tisdag", "onsdag", "torsdag", "fredag", "lördag", "söndag",
    ],
    day_names_short: ["mån", "tis", "ons", "tor", "fre", "lör", "sön"],
    date_order: DateOrder::YearMonthDay,
    date_separator: '-',
    zero_pad: true,
};

static DE: Locale = Locale {
    language: Language::De,
    button_label: "Datum auswählen",
    placeholder: "",
    selected_date_message: "Ausgewähltes Datum ist",
    prev_month_label: "Vorheriger Monat",
    next_month_label: "Nächster Monat",
    month_select_label: "Monat",
    year_select_label: "Jahr",
    close_label: "Fenster schließen",
    keyboard_instruction: "Mit den Pfeiltasten können Sie zwischen den Daten navigieren",
    calendar_heading: "Datum auswählen",
    month_names: [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ],
    month_names_short: [
        "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
    ],
    day_names: [
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
        "Sonntag",
    ],
    day_names_short: ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"],
    date_order: DateOrder::DayMonthYear,
    date_separator: '.',
    zero_pad: true,
};
