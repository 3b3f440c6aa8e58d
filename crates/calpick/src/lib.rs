#![forbid(unsafe_code)]

//! calpick public facade crate.
//!
//! This crate provides the stable surface area for hosts embedding the date
//! picker. It re-exports the common types from the internal crates, loads
//! configuration files, and offers a small prelude.
//!
//! # Example
//!
//! ```
//! use calpick::prelude::*;
//!
//! let config = PickerConfig::default().value("2024-01-15").language("de");
//! let picker = DatePicker::new(&config);
//! assert_eq!(picker.input_display(), "15.01.2024");
//! assert_eq!(picker.locale().month_name(1), "Januar");
//! ```

use std::path::Path;

// --- Core re-exports -------------------------------------------------------

pub use calpick_core::date::{CalendarDate, DateRange, Weekday};
pub use calpick_core::event::{KeyCode, KeyEvent, KeyEventKind, Modifiers, TouchEvent, TouchPhase};
pub use calpick_core::geometry::{Position, Rect};

// --- i18n re-exports -------------------------------------------------------

pub use calpick_i18n::{DateAdapter, Language, Locale};

// --- Runtime re-exports ----------------------------------------------------

pub use calpick_runtime::{SubId, Subscriptions};

// --- Widget re-exports -----------------------------------------------------

pub use calpick_widgets::{
    ChangeEvent, ConfigError, DatePicker, Direction, FocusTarget, Handling, PickerConfig,
    PickerEvent, PickerHost, RecordingHost, SelectOutcome, TextOutcome,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for calpick hosts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration document is not valid JSON/TOML.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The file extension names no supported format.
    #[error("unsupported configuration format: {0}")]
    UnsupportedFormat(String),
}

/// Standard result type for calpick APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Load a picker configuration from a `.json` or `.toml` file.
pub fn load_config(path: impl AsRef<Path>) -> Result<PickerConfig> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    tracing::debug!(path = %path.display(), %extension, "Loading picker config");

    let text = std::fs::read_to_string(path)?;
    let config = match extension.as_str() {
        "json" => PickerConfig::from_json(&text)?,
        "toml" => PickerConfig::from_toml(&text)?,
        _ => return Err(Error::UnsupportedFormat(extension)),
    };
    Ok(config)
}

/// Convenience: load a configuration file and build a picker from it.
pub fn picker_from_file(path: impl AsRef<Path>) -> Result<DatePicker> {
    Ok(DatePicker::new(&load_config(path)?))
}

/// Prelude for day-to-day usage.
pub mod prelude {
    pub use crate::{
        CalendarDate, DatePicker, Error, FocusTarget, Handling, KeyCode, KeyEvent, Modifiers,
        PickerConfig, PickerEvent, PickerHost, Result, TouchEvent, TouchPhase,
    };

    pub use crate::{core, i18n, runtime, widgets};
}

pub use calpick_core as core;
pub use calpick_i18n as i18n;
pub use calpick_runtime as runtime;
pub use calpick_widgets as widgets;
