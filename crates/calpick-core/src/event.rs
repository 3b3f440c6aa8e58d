#![forbid(unsafe_code)]

//! Canonical input event types.
//!
//! Hosts translate their native key and touch events into these values
//! before handing them to the picker. Key codes are a closed enumeration so
//! no raw key numbers cross the widget interface.
//!
//! # Design Notes
//!
//! - `KeyEventKind` defaults to `Press`; releases never drive navigation.
//! - Shift+Tab may arrive either as `Tab` with [`Modifiers::SHIFT`] or as
//!   [`KeyCode::BackTab`]; both are treated as backward tab.
//! - Touch coordinates are floating point host units (CSS pixels on the web).

use bitflags::bitflags;

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,

    /// Held modifiers; only Shift changes the mapping.
    pub modifiers: Modifiers,

    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// A plain press of `code`.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Replace the held modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Whether Shift is held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }
}

/// Key codes the calendar reacts to, plus a catch-all for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Printable character.
    Char(char),
    Enter,
    Escape,
    Tab,
    /// Shift+Tab as a distinct key.
    BackTab,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
    /// Function key; ignored by the calendar.
    F(u8),
}

/// Press, auto-repeat, or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Also used when the host cannot tell.
    #[default]
    Press,
    Repeat,
    Release,
}

bitflags! {
    /// Held modifier keys.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A single touch contact point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Phase of a touch interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    Start,
    Move,
    End,
}

/// A touch event at one contact point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub point: TouchPoint,
}

impl TouchEvent {
    #[must_use]
    pub const fn new(phase: TouchPhase, x: f32, y: f32) -> Self {
        Self {
            phase,
            point: TouchPoint::new(x, y),
        }
    }
}
