#![forbid(unsafe_code)]

//! Core: calendar dates, date arithmetic, input events, and recognizers.
//!
//! # Role in calpick
//! `calpick-core` is the leaf layer. It owns the timezone-less
//! [`CalendarDate`](date::CalendarDate) value type, the pure date arithmetic
//! the calendar engine is built from, and the canonical input events that the
//! widget layer consumes.
//!
//! # Primary responsibilities
//! - **date**: `CalendarDate`, `DateRange`, week/month boundaries, month-end
//!   clamping, range clamp, ISO-8601 parse/print.
//! - **event**: key codes, modifiers, touch points.
//! - **geometry**: rectangles and positions for hit testing.
//! - **gesture**: swipe recognition over a touch start/move/end triplet.
//! - **keymap**: keyboard events to calendar navigation commands.
//!
//! # How it fits in the system
//! `calpick-i18n` formats and parses dates on top of this crate, and
//! `calpick-widgets` composes the recognizers into the date picker engine.
//! Nothing here holds mutable state beyond the gesture tracker.

pub mod date;
pub mod event;
pub mod geometry;
pub mod gesture;
pub mod keymap;

pub use date::{CalendarDate, DateRange};
