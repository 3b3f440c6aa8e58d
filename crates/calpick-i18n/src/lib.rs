#![forbid(unsafe_code)]

//! Internationalization for calpick.
//!
//! Provides the fixed set of supported languages, their string tables
//! (month and weekday names, button and dialog labels), and the
//! locale-facing numeric date text format used by the text input.
//!
//! # How it fits in the system
//! The widget layer looks up a [`Locale`] once per configuration and never
//! inspects its contents beyond reading strings. It does not depend on the
//! widget or runtime crates, keeping the localization layer reusable.

pub mod adapter;
pub mod locale;

pub use adapter::{DateAdapter, DateOrder, NumericDateAdapter, clean_date_text};
pub use locale::{Language, Locale};
