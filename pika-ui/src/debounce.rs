//! Cancel-and-reschedule timers driven by host-supplied instants.
use std::time::{Duration, Instant};

/// A single pending action with a deadline.
///
/// Scheduling replaces whatever was pending, so at most one action is ever
/// outstanding.
#[derive(Debug, Clone)]
pub struct Debounce<A> {
    pending: Option<(Instant, A)>,
}

impl<A> Debounce<A> {
    /// Creates an idle timer.
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Schedules `action` to fire `delay` after `now`, dropping any pending one.
    pub fn schedule(&mut self, now: Instant, delay: Duration, action: A) {
        self.pending = Some((now + delay, action));
    }

    /// Drops the pending action, returning it.
    pub fn cancel(&mut self) -> Option<A> {
        self.pending.take().map(|(_, action)| action)
    }

    /// Returns true while an action is pending.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the deadline of the pending action.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Takes the pending action if its deadline has passed.
    pub fn fire(&mut self, now: Instant) -> Option<A> {
        if self.deadline().is_some_and(|deadline| deadline <= now) {
            self.cancel()
        } else {
            None
        }
    }
}

impl<A> Default for Debounce<A> {
    fn default() -> Self {
        Self::new()
    }
}
