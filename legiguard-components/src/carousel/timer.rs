//! Single-slot deadline timers.
//!
//! The controller never sleeps or spawns anything. Each timer kind owns one
//! [`Timer`] slot holding at most one deadline; the host polls them through
//! the controller's `tick`.

use std::time::Duration;

use crate::Instant;

/// Timer kinds owned by a carousel controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Advances the active card.
    Autoplay,
    /// Collapses a burst of scroll signals into one read.
    Debounce,
    /// Releases the animation guard after a programmatic scroll.
    Settle,
    /// Releases touch engagement after a touch ends.
    TouchGrace,
}

/// A cancellable one-shot deadline.
///
/// Arming replaces any pending deadline, so a slot can never hold two live
/// firings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    /// An unarmed timer.
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arms the timer to fire `delay` after `now`, dropping any earlier deadline.
    ///
    /// A deadline the clock cannot represent never comes due, so the timer is
    /// left unarmed. Returns whether a deadline was set.
    pub fn arm(&mut self, now: Instant, delay: Duration) -> bool {
        self.deadline = now.checked_add(delay);
        self.deadline.is_some()
    }

    /// Cancels the pending deadline. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Whether a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns the pending deadline when it is due at `now`, without firing.
    pub fn due(&self, now: Instant) -> Option<Instant> {
        self.deadline.filter(|deadline| *deadline <= now)
    }

    /// Disarms and returns the deadline if it is due at `now`.
    pub fn fire(&mut self, now: Instant) -> Option<Instant> {
        let due = self.due(now)?;
        self.deadline = None;
        Some(due)
    }
}
