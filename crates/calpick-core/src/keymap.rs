#![forbid(unsafe_code)]

//! Keyboard events to calendar navigation commands.
//!
//! | Key | Shift | Command |
//! |---|---|---|
//! | Right / Left | any | `MoveDays(±1)` |
//! | Down / Up | any | `MoveWeeks(±1)` |
//! | PageDown / PageUp | no | `MoveMonths(±1)` |
//! | PageDown / PageUp | yes | `MoveYears(±1)` |
//! | Home / End | any | `StartOfWeek` / `EndOfWeek` |
//! | Tab | no | `TabForward` |
//! | Tab (or BackTab) | yes | `TabBackward` |
//! | Escape | any | `Close` |
//!
//! Every command except the two tab signals marks keyboard focus active and
//! suppresses the host's default action. Tab suppression is decided by the
//! focus trap. Unmapped keys produce no command and are left to the host.

use crate::event::{KeyCode, KeyEvent, KeyEventKind};

/// A navigation command resolved from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCommand {
    MoveDays(i32),
    MoveWeeks(i32),
    MoveMonths(i32),
    MoveYears(i32),
    StartOfWeek,
    EndOfWeek,
    TabForward,
    TabBackward,
    Close,
}

impl KeyCommand {
    /// Whether this command is one of the two tab-trap signals.
    #[inline]
    #[must_use]
    pub const fn is_tab(self) -> bool {
        matches!(self, Self::TabForward | Self::TabBackward)
    }

    /// Whether resolving this command turns on keyboard-driven focus.
    #[inline]
    #[must_use]
    pub const fn activates_focus(self) -> bool {
        !self.is_tab()
    }

    /// Whether the host's default action must be cancelled outright.
    #[inline]
    #[must_use]
    pub const fn suppresses_default(self) -> bool {
        !self.is_tab()
    }

    /// Whether the command moves the focused-day cursor.
    #[inline]
    #[must_use]
    pub const fn is_cursor_move(self) -> bool {
        !matches!(self, Self::TabForward | Self::TabBackward | Self::Close)
    }
}

/// Stateless key-to-command mapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyCommandMapper;

impl KeyCommandMapper {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Resolve a key event. Releases never map to a command; repeats do, so
    /// holding an arrow key keeps moving.
    #[must_use]
    pub fn map(&self, event: &KeyEvent) -> Option<KeyCommand> {
        if event.kind == KeyEventKind::Release {
            return None;
        }

        let shift = event.shift();
        let command = match event.code {
            KeyCode::Right => KeyCommand::MoveDays(1),
            KeyCode::Left => KeyCommand::MoveDays(-1),
            KeyCode::Down => KeyCommand::MoveWeeks(1),
            KeyCode::Up => KeyCommand::MoveWeeks(-1),
            KeyCode::PageDown if shift => KeyCommand::MoveYears(1),
            KeyCode::PageDown => KeyCommand::MoveMonths(1),
            KeyCode::PageUp if shift => KeyCommand::MoveYears(-1),
            KeyCode::PageUp => KeyCommand::MoveMonths(-1),
            KeyCode::Home => KeyCommand::StartOfWeek,
            KeyCode::End => KeyCommand::EndOfWeek,
            KeyCode::Tab if shift => KeyCommand::TabBackward,
            KeyCode::Tab => KeyCommand::TabForward,
            KeyCode::BackTab => KeyCommand::TabBackward,
            KeyCode::Escape => KeyCommand::Close,
            KeyCode::Char(_) | KeyCode::Enter | KeyCode::F(_) => return None,
        };
        Some(command)
    }
}
