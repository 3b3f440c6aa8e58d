#![forbid(unsafe_code)]

//! Swipe recognition: turns a touch start/move/end triplet into a command.
//!
//! [`GestureRecognizer`] tracks one touch contact at a time and classifies
//! its displacement against a fixed threshold.
//!
//! # State Machine
//!
//! ```text
//! ┌──────┐  start   ┌──────────┐  end   ┌──────┐
//! │ Idle │────────▶│ Tracking │──────▶│ Idle │
//! └──────┘          └──────────┘        └──────┘
//! ```
//!
//! # Invariants
//!
//! 1. A horizontal swipe needs `|dx| >= threshold` and `|dy| < threshold`.
//!    A leftward finger motion (`dx < 0`) advances to the next month.
//! 2. A downward swipe needs `|dy| >= threshold`, `|dx| < threshold` and
//!    `dy > 0`; it closes the dialog and suppresses the default action.
//! 3. Only the start-to-end displacement is classified. Intermediate moves
//!    never produce a command, so a path that dips down and finishes
//!    sideways is a horizontal swipe.
//! 4. Every move while tracking suppresses the host's default scrolling.

use crate::event::{TouchEvent, TouchPhase, TouchPoint};

/// Default displacement threshold in host units.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 70.0;

/// Thresholds for swipe recognition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Minimum displacement along the swipe axis (default: 70).
    pub threshold: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

/// Discrete command produced by a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SwipeCommand {
    #[default]
    None,
    PreviousMonth,
    NextMonth,
    Close,
}

/// Result of feeding one touch event to the recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TouchOutcome {
    pub command: SwipeCommand,
    /// The host must cancel the event's default action (page scroll).
    pub suppress_default: bool,
}

/// Classify a completed displacement from `start` to `end`.
#[must_use]
pub fn classify_swipe(start: TouchPoint, end: TouchPoint, threshold: f32) -> SwipeCommand {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    if dx.abs() >= threshold && dy.abs() < threshold {
        if dx > 0.0 {
            SwipeCommand::PreviousMonth
        } else {
            SwipeCommand::NextMonth
        }
    } else if dy.abs() >= threshold && dx.abs() < threshold && dy > 0.0 {
        SwipeCommand::Close
    } else {
        SwipeCommand::None
    }
}

/// Stateful swipe recognizer for a single touch contact.
#[derive(Debug, Clone, Default)]
pub struct GestureRecognizer {
    config: GestureConfig,
    start: Option<TouchPoint>,
}

impl GestureRecognizer {
    /// Create a new recognizer with the given configuration.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            start: None,
        }
    }

    /// Dispatch a touch event to the matching phase handler.
    pub fn process(&mut self, event: &TouchEvent) -> TouchOutcome {
        match event.phase {
            TouchPhase::Start => {
                self.touch_start(event.point);
                TouchOutcome::default()
            }
            TouchPhase::Move => self.touch_move(event.point),
            TouchPhase::End => {
                let command = self.touch_end(event.point);
                TouchOutcome {
                    command,
                    suppress_default: command == SwipeCommand::Close,
                }
            }
        }
    }

    /// Begin tracking a contact. A new start replaces any stale one.
    pub fn touch_start(&mut self, point: TouchPoint) {
        self.start = Some(point);
    }

    /// Observe movement. Never classifies; only asks the host to hold off
    /// scrolling while a contact is tracked.
    pub fn touch_move(&mut self, _point: TouchPoint) -> TouchOutcome {
        TouchOutcome {
            command: SwipeCommand::None,
            suppress_default: self.start.is_some(),
        }
    }

    /// Finish the contact and classify the whole displacement.
    pub fn touch_end(&mut self, point: TouchPoint) -> SwipeCommand {
        match self.start.take() {
            Some(start) => classify_swipe(start, point, self.config.threshold),
            None => SwipeCommand::None,
        }
    }

    /// Whether a contact is currently being tracked.
    #[inline]
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Drop any in-progress contact.
    pub fn reset(&mut self) {
        self.start = None;
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> TouchPoint {
        TouchPoint::new(x, y)
    }

    #[test]
    fn leftward_swipe_is_next_month() {
        assert_eq!(
            classify_swipe(p(200.0, 50.0), p(100.0, 50.0), 70.0),
            SwipeCommand::NextMonth
        );
    }

    #[test]
    fn rightward_swipe_is_previous_month() {
        assert_eq!(
            classify_swipe(p(100.0, 50.0), p(200.0, 50.0), 70.0),
            SwipeCommand::PreviousMonth
        );
    }

    #[test]
    fn downward_swipe_closes() {
        assert_eq!(
            classify_swipe(p(0.0, 0.0), p(0.0, 100.0), 70.0),
            SwipeCommand::Close
        );
    }

    #[test]
    fn upward_swipe_does_nothing() {
        assert_eq!(
            classify_swipe(p(0.0, 100.0), p(0.0, 0.0), 70.0),
            SwipeCommand::None
        );
    }

    #[test]
    fn diagonal_swipe_does_nothing() {
        assert_eq!(
            classify_swipe(p(0.0, 0.0), p(100.0, 100.0), 70.0),
            SwipeCommand::None
        );
    }

    #[test]
    fn threshold_exactly_met() {
        assert_eq!(
            classify_swipe(p(0.0, 0.0), p(-70.0, 69.0), 70.0),
            SwipeCommand::NextMonth
        );
        assert_eq!(
            classify_swipe(p(0.0, 0.0), p(-69.9, 0.0), 70.0),
            SwipeCommand::None
        );
    }

    #[test]
    fn move_suppresses_scroll_while_tracking() {
        let mut gr = GestureRecognizer::default();
        gr.touch_start(p(10.0, 10.0));
        let out = gr.touch_move(p(15.0, 12.0));
        assert_eq!(out.command, SwipeCommand::None);
        assert!(out.suppress_default);
        assert!(gr.is_tracking());
    }

    #[test]
    fn move_without_start_is_passive() {
        let mut gr = GestureRecognizer::default();
        let out = gr.touch_move(p(15.0, 12.0));
        assert_eq!(out, TouchOutcome::default());
    }

    #[test]
    fn downward_move_does_not_close_before_end() {
        let mut gr = GestureRecognizer::default();
        gr.touch_start(p(0.0, 0.0));
        let out = gr.touch_move(p(0.0, 100.0));
        assert_eq!(out.command, SwipeCommand::None);
        assert!(out.suppress_default);
        assert!(gr.is_tracking());
    }

    #[test]
    fn dip_then_sideways_end_is_horizontal() {
        let mut gr = GestureRecognizer::default();
        let _ = gr.process(&TouchEvent::new(TouchPhase::Start, 200.0, 0.0));
        let mid = gr.process(&TouchEvent::new(TouchPhase::Move, 200.0, 80.0));
        assert_eq!(mid.command, SwipeCommand::None);
        let end = gr.process(&TouchEvent::new(TouchPhase::End, 100.0, 0.0));
        assert_eq!(end.command, SwipeCommand::NextMonth);
        assert!(!end.suppress_default);
    }

    #[test]
    fn downward_end_closes_with_suppression() {
        let mut gr = GestureRecognizer::default();
        let _ = gr.process(&TouchEvent::new(TouchPhase::Start, 0.0, 0.0));
        let end = gr.process(&TouchEvent::new(TouchPhase::End, 0.0, 100.0));
        assert_eq!(
            end,
            TouchOutcome {
                command: SwipeCommand::Close,
                suppress_default: true,
            }
        );
    }

    #[test]
    fn horizontal_swipe_recognized_on_end() {
        let mut gr = GestureRecognizer::default();
        let _ = gr.process(&TouchEvent::new(TouchPhase::Start, 300.0, 40.0));
        let mid = gr.process(&TouchEvent::new(TouchPhase::Move, 250.0, 40.0));
        assert_eq!(mid.command, SwipeCommand::None);
        let end = gr.process(&TouchEvent::new(TouchPhase::End, 200.0, 40.0));
        assert_eq!(end.command, SwipeCommand::NextMonth);
        assert!(!gr.is_tracking());
    }

    #[test]
    fn custom_threshold() {
        let mut gr = GestureRecognizer::new(GestureConfig { threshold: 10.0 });
        gr.touch_start(p(0.0, 0.0));
        assert_eq!(gr.touch_end(p(12.0, 0.0)), SwipeCommand::PreviousMonth);
        assert_eq!(gr.config().threshold, 10.0);
    }

    #[test]
    fn reset_drops_contact() {
        let mut gr = GestureRecognizer::default();
        gr.touch_start(p(0.0, 0.0));
        gr.reset();
        assert_eq!(gr.touch_end(p(-100.0, 0.0)), SwipeCommand::None);
    }
}
