#![forbid(unsafe_code)]

//! Runtime plumbing for calpick widgets.
//!
//! # Role in calpick
//! Widgets are single-threaded and event-driven: every transition happens
//! synchronously inside a host event handler. The only asynchrony is
//! deferred focus movement, and the only ambient subscription is the
//! document-level pointer listener. This crate makes both explicit:
//!
//! - [`TimerQueue`]: a logical-clock queue of deferred actions addressed by
//!   [`TimerHandle`]. The host advances the clock; nothing fires on its own,
//!   which makes show/hide races reproducible in tests.
//! - [`Subscriptions`]: a registry of capture/bubble listeners with an
//!   explicit subscribe/unsubscribe lifecycle and ordered dispatch.

pub mod subscription;
pub mod timer;

pub use subscription::{Phase, Propagation, SubId, Subscriptions};
pub use timer::{TimerHandle, TimerQueue};
