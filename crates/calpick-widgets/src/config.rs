#![forbid(unsafe_code)]

//! Picker configuration.
//!
//! [`PickerConfig`] mirrors the host-facing attribute surface: everything
//! is a plain string or flag so it can be loaded from JSON/TOML or set
//! directly. [`PickerConfig::resolve`] turns it into typed values and never
//! fails: malformed dates become "absent", an unknown language becomes
//! English, an unknown week start becomes Monday. Each fallback is logged
//! at `warn`.
//!
//! # Example
//!
//! ```
//! use calpick_widgets::config::PickerConfig;
//!
//! let config = PickerConfig::from_toml(r#"
//!     value = "2024-01-15"
//!     min = "2024-01-01"
//!     language = "fi"
//! "#).unwrap();
//! let resolved = config.resolve();
//! assert_eq!(resolved.value.map(|d| d.day()), Some(15));
//! ```

use calpick_core::date::{self, CalendarDate, DEFAULT_FIRST_DAY_OF_WEEK, DateRange, Weekday};
use calpick_i18n::{Language, Locale};
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::error::Result;
use crate::open_state::DEFAULT_FOCUS_DELAY;

/// Horizontal alignment of the popover relative to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    #[default]
    Right,
}

/// Host-facing configuration, as strings and flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Committed value as `YYYY-MM-DD`; empty for none.
    pub value: String,
    /// Lower bound as `YYYY-MM-DD`; empty for unbounded.
    pub min: String,
    /// Upper bound as `YYYY-MM-DD`; empty for unbounded.
    pub max: String,
    pub language: String,
    /// When set, every interaction handler is inert.
    pub disabled: bool,
    /// Form field name, passed through to the host.
    pub name: String,
    /// Element identifier, passed through to the host.
    pub identifier: String,
    /// ARIA role override, passed through to the host.
    pub role: Option<String>,
    /// Weekday name such as `monday` or `sun`.
    pub first_day_of_week: String,
    pub direction: Direction,
    /// Delay before deferred focus moves on open and close.
    pub open_focus_delay_ms: u64,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            value: String::new(),
            min: String::new(),
            max: String::new(),
            language: Language::En.tag().to_owned(),
            disabled: false,
            name: "date".to_owned(),
            identifier: String::new(),
            role: None,
            first_day_of_week: "monday".to_owned(),
            direction: Direction::Right,
            open_focus_delay_ms: DEFAULT_FOCUS_DELAY.as_millis() as u64,
        }
    }
}

impl PickerConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    #[must_use]
    pub fn min(mut self, min: impl Into<String>) -> Self {
        self.min = min.into();
        self
    }

    #[must_use]
    pub fn max(mut self, max: impl Into<String>) -> Self {
        self.max = max.into();
        self
    }

    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn first_day_of_week(mut self, day: impl Into<String>) -> Self {
        self.first_day_of_week = day.into();
        self
    }

    /// Parse every field into typed values, degrading malformed input.
    #[must_use]
    pub fn resolve(&self) -> ResolvedConfig {
        let language = Language::from_tag(&self.language).unwrap_or_else(|| {
            tracing::warn!(language = %self.language, "Unknown language, using en");
            Language::En
        });
        let first_day_of_week = self.first_day_of_week.parse::<Weekday>().unwrap_or_else(|_| {
            tracing::warn!(first_day_of_week = %self.first_day_of_week, "Unknown week start, using monday");
            DEFAULT_FIRST_DAY_OF_WEEK
        });

        ResolvedConfig {
            value: parse_optional("value", &self.value),
            range: DateRange::new(
                parse_optional("min", &self.min),
                parse_optional("max", &self.max),
            ),
            language,
            locale: language.locale(),
            disabled: self.disabled,
            name: self.name.clone(),
            identifier: self.identifier.clone(),
            role: self.role.clone(),
            first_day_of_week,
            direction: self.direction,
            focus_delay: Duration::from_millis(self.open_focus_delay_ms),
        }
    }
}

fn parse_optional(field: &'static str, text: &str) -> Option<CalendarDate> {
    if text.is_empty() {
        return None;
    }
    let parsed = date::parse_iso_date(text);
    if parsed.is_none() {
        tracing::warn!(field, text, "Malformed ISO date, treating as absent");
    }
    parsed
}

/// Typed configuration consumed by the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub value: Option<CalendarDate>,
    pub range: DateRange,
    pub language: Language,
    pub locale: &'static Locale,
    pub disabled: bool,
    pub name: String,
    pub identifier: String,
    pub role: Option<String>,
    pub first_day_of_week: Weekday,
    pub direction: Direction,
    pub focus_delay: Duration,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        PickerConfig::default().resolve()
    }
}
