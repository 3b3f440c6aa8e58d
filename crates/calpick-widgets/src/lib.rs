#![forbid(unsafe_code)]

//! The calpick date picker engine.
//!
//! # Role in calpick
//! This crate owns every piece of picker behavior that is not date math or
//! localization: the focused-day cursor, the open/closed lifecycle with its
//! deferred focus moves, the dialog focus trap, the committed value, and
//! outside-click dismissal. [`DatePicker`] composes them.
//!
//! # Host contract
//! The engine renders nothing. A host forwards native events to the
//! `DatePicker::handle_*` methods, honors the returned [`Handling`], and
//! implements [`PickerHost`] to move focus and deliver [`PickerEvent`]s.
//! Time only passes when the host calls `DatePicker::advance`.

pub mod calendar;
pub mod config;
pub mod cursor;
pub mod error;
pub mod focus_trap;
pub mod host;
pub mod open_state;
pub mod outside;
pub mod picker;
pub mod value;

pub use calendar::{DayCell, MonthOption, MonthView};
pub use config::{Direction, PickerConfig, ResolvedConfig};
pub use cursor::FocusedDayCursor;
pub use error::{ConfigError, Result};
pub use focus_trap::{FocusTarget, FocusTrap, TrapDecision};
pub use host::{Handling, PickerEvent, PickerHost, RecordingHost};
pub use open_state::{DeferredFocus, OpenState, OpenStateMachine};
pub use outside::OutsideInteractionDetector;
pub use picker::DatePicker;
pub use value::{ChangeEvent, SelectOutcome, TextOutcome, ValueController};
