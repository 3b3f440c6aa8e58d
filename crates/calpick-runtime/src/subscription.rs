#![forbid(unsafe_code)]

//! Explicit listener subscriptions for document-level events.
//!
//! A widget that must observe every pointer-down in the document (to close
//! when the user interacts elsewhere) registers a capture-phase listener
//! here when it becomes active and unregisters it when it is torn down.
//! Nothing subscribes implicitly.
//!
//! # How dispatch works
//!
//! 1. Capture listeners run first, in registration order.
//! 2. Bubble listeners run next, in registration order.
//! 3. A listener returning [`Propagation::Stop`] halts the remaining
//!    listeners. Because capture runs before the target's own handlers,
//!    a target that stops propagation cannot hide the event from capture
//!    listeners.

/// A unique identifier for a subscription.
pub type SubId = u64;

/// Event phase a listener observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Capture,
    Bubble,
}

/// Whether dispatch should continue after a listener ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Propagation {
    #[default]
    Continue,
    Stop,
}

#[derive(Debug, Clone)]
struct Listener {
    id: SubId,
    phase: Phase,
    label: &'static str,
}

/// Registry of active listeners.
#[derive(Debug, Clone, Default)]
pub struct Subscriptions {
    next_id: SubId,
    active: Vec<Listener>,
}

impl Subscriptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener and return its id.
    pub fn subscribe(&mut self, phase: Phase, label: &'static str) -> SubId {
        self.next_id += 1;
        let id = self.next_id;
        tracing::debug!(sub_id = id, ?phase, label, "Starting subscription");
        self.active.push(Listener { id, phase, label });
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubId) -> bool {
        let Some(index) = self.active.iter().position(|l| l.id == id) else {
            return false;
        };
        let listener = self.active.remove(index);
        tracing::debug!(sub_id = id, label = listener.label, "Stopping subscription");
        true
    }

    #[must_use]
    pub fn is_active(&self, id: SubId) -> bool {
        self.active.iter().any(|l| l.id == id)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Listener ids in dispatch order: capture first, then bubble.
    #[must_use]
    pub fn dispatch_order(&self) -> Vec<SubId> {
        let capture = self.active.iter().filter(|l| l.phase == Phase::Capture);
        let bubble = self.active.iter().filter(|l| l.phase == Phase::Bubble);
        capture.chain(bubble).map(|l| l.id).collect()
    }

    /// Invoke `handler` for each listener in dispatch order until one stops
    /// propagation. Returns the number of listeners that ran.
    pub fn dispatch<F>(&self, mut handler: F) -> usize
    where
        F: FnMut(SubId, Phase) -> Propagation,
    {
        let mut ran = 0;
        for id in self.dispatch_order() {
            let Some(listener) = self.active.iter().find(|l| l.id == id) else {
                continue;
            };
            ran += 1;
            if handler(id, listener.phase) == Propagation::Stop {
                break;
            }
        }
        ran
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribe_then_unsubscribe() {
        let mut subs = Subscriptions::new();
        let id = subs.subscribe(Phase::Capture, "outside-click");
        assert!(subs.is_active(id));
        assert!(subs.unsubscribe(id));
        assert!(!subs.is_active(id));
        assert!(!subs.unsubscribe(id));
        assert!(subs.is_empty());
    }

    #[test]
    fn ids_are_not_reused() {
        let mut subs = Subscriptions::new();
        let a = subs.subscribe(Phase::Bubble, "a");
        subs.unsubscribe(a);
        let b = subs.subscribe(Phase::Bubble, "b");
        assert_ne!(a, b);
    }

    #[test]
    fn capture_runs_before_bubble() {
        let mut subs = Subscriptions::new();
        let target = subs.subscribe(Phase::Bubble, "target");
        let capture = subs.subscribe(Phase::Capture, "outside-click");
        assert_eq!(subs.dispatch_order(), vec![capture, target]);
    }

    #[test]
    fn stop_in_bubble_does_not_hide_from_capture() {
        let mut subs = Subscriptions::new();
        let target = subs.subscribe(Phase::Bubble, "target");
        let later = subs.subscribe(Phase::Bubble, "later");
        let capture = subs.subscribe(Phase::Capture, "outside-click");

        let mut seen = Vec::new();
        let ran = subs.dispatch(|id, _| {
            seen.push(id);
            if id == target {
                Propagation::Stop
            } else {
                Propagation::Continue
            }
        });

        assert_eq!(ran, 2);
        assert_eq!(seen, vec![capture, target]);
        assert!(!seen.contains(&later));
    }
}
