//! Interaction gate: hover, touch and focus tracking that pauses autoplay.
//!
//! The gate only answers "is someone engaged with the carousel right now".
//! It never touches the active index.

use std::time::Duration;

use crate::Instant;

use super::timer::Timer;

/// Part of the carousel an interaction targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InteractionRegion {
    /// The scrollable viewport holding the cards.
    Viewport,
    /// Navigation controls: previous/next buttons and index dots.
    Controls,
}

impl InteractionRegion {
    const fn slot(self) -> usize {
        match self {
            Self::Viewport => 0,
            Self::Controls => 1,
        }
    }
}

/// How the paused state changed in response to an interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateTransition {
    /// Went from engaged-free to engaged.
    Paused,
    /// Went from engaged to engaged-free.
    Resumed,
    /// The paused state did not change.
    Unchanged,
}

impl GateTransition {
    fn between(was_paused: bool, is_paused: bool) -> Self {
        match (was_paused, is_paused) {
            (false, true) => Self::Paused,
            (true, false) => Self::Resumed,
            _ => Self::Unchanged,
        }
    }
}

/// Tracks every engagement source that should hold autoplay.
#[derive(Clone, Debug, Default)]
pub struct InteractionGate {
    hovered: [bool; 2],
    focused: [bool; 2],
    touching: bool,
    touch_grace: Timer,
}

impl InteractionGate {
    /// Creates a gate with nothing engaged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any source is engaged, including a pending touch grace.
    pub fn is_paused(&self) -> bool {
        self.hovered.iter().any(|hovered| *hovered)
            || self.focused.iter().any(|focused| *focused)
            || self.touching
            || self.touch_grace.is_armed()
    }

    /// Pointer entered `region`.
    pub fn pointer_enter(&mut self, region: InteractionRegion) -> GateTransition {
        self.update(|gate| gate.hovered[region.slot()] = true)
    }

    /// Pointer left `region`.
    pub fn pointer_leave(&mut self, region: InteractionRegion) -> GateTransition {
        self.update(|gate| gate.hovered[region.slot()] = false)
    }

    /// Focus moved inside `region`.
    pub fn focus_in(&mut self, region: InteractionRegion) -> GateTransition {
        self.update(|gate| gate.focused[region.slot()] = true)
    }

    /// Focus left `region`.
    pub fn focus_out(&mut self, region: InteractionRegion) -> GateTransition {
        self.update(|gate| gate.focused[region.slot()] = false)
    }

    /// A touch started. Cancels any pending grace from an earlier touch.
    pub fn touch_start(&mut self) -> GateTransition {
        self.update(|gate| {
            gate.touching = true;
            gate.touch_grace.cancel();
        })
    }

    /// A touch ended. Engagement lingers for `grace` after `now`.
    pub fn touch_end(&mut self, now: Instant, grace: Duration) -> GateTransition {
        self.update(|gate| {
            if gate.touching {
                // A grace too long to schedule keeps the touch engaged.
                gate.touching = !gate.touch_grace.arm(now, grace);
            }
        })
    }

    /// Deadline of the pending touch grace, if any.
    pub fn touch_grace_deadline(&self) -> Option<Instant> {
        self.touch_grace.deadline()
    }

    /// Ends the touch grace if it is due at `now`.
    pub fn expire_touch_grace(&mut self, now: Instant) -> GateTransition {
        self.update(|gate| {
            gate.touch_grace.fire(now);
        })
    }

    /// Forgets every engagement.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn update(&mut self, apply: impl FnOnce(&mut Self)) -> GateTransition {
        let was_paused = self.is_paused();
        apply(self);
        GateTransition::between(was_paused, self.is_paused())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRACE: Duration = Duration::from_millis(1200);

    #[test]
    fn test_hover_pauses_and_resumes() {
        let mut gate = InteractionGate::new();
        assert_eq!(
            gate.pointer_enter(InteractionRegion::Viewport),
            GateTransition::Paused
        );
        assert!(gate.is_paused());
        assert_eq!(
            gate.pointer_leave(InteractionRegion::Viewport),
            GateTransition::Resumed
        );
        assert!(!gate.is_paused());
    }

    #[test]
    fn test_moving_between_regions_stays_paused() {
        let mut gate = InteractionGate::new();
        gate.pointer_enter(InteractionRegion::Viewport);
        assert_eq!(
            gate.pointer_enter(InteractionRegion::Controls),
            GateTransition::Unchanged
        );
        assert_eq!(
            gate.pointer_leave(InteractionRegion::Viewport),
            GateTransition::Unchanged
        );
        assert_eq!(
            gate.pointer_leave(InteractionRegion::Controls),
            GateTransition::Resumed
        );
    }

    #[test]
    fn test_focus_within_controls_pauses() {
        let mut gate = InteractionGate::new();
        assert_eq!(
            gate.focus_in(InteractionRegion::Controls),
            GateTransition::Paused
        );
        gate.pointer_enter(InteractionRegion::Viewport);
        gate.pointer_leave(InteractionRegion::Viewport);
        assert!(gate.is_paused());
        assert_eq!(
            gate.focus_out(InteractionRegion::Controls),
            GateTransition::Resumed
        );
    }

    #[test]
    fn test_touch_end_lingers_for_grace() {
        let start = Instant::now();
        let mut gate = InteractionGate::new();
        assert_eq!(gate.touch_start(), GateTransition::Paused);
        assert_eq!(gate.touch_end(start, GRACE), GateTransition::Unchanged);
        assert!(gate.is_paused());
        assert_eq!(gate.touch_grace_deadline(), Some(start + GRACE));

        let early = start + Duration::from_millis(1199);
        assert_eq!(gate.expire_touch_grace(early), GateTransition::Unchanged);
        assert_eq!(
            gate.expire_touch_grace(start + GRACE),
            GateTransition::Resumed
        );
        assert!(!gate.is_paused());
    }

    #[test]
    fn test_new_touch_cancels_pending_grace() {
        let start = Instant::now();
        let mut gate = InteractionGate::new();
        gate.touch_start();
        gate.touch_end(start, GRACE);
        assert_eq!(gate.touch_start(), GateTransition::Unchanged);
        assert_eq!(gate.touch_grace_deadline(), None);
        assert_eq!(
            gate.expire_touch_grace(start + GRACE * 2),
            GateTransition::Unchanged
        );
        assert!(gate.is_paused());
    }

    #[test]
    fn test_stray_touch_end_is_ignored() {
        let mut gate = InteractionGate::new();
        assert_eq!(
            gate.touch_end(Instant::now(), GRACE),
            GateTransition::Unchanged
        );
        assert!(!gate.is_paused());
    }

    #[test]
    fn test_unschedulable_grace_keeps_touch_engaged() {
        let now = Instant::now();
        let mut gate = InteractionGate::new();
        gate.touch_start();
        assert_eq!(gate.touch_end(now, Duration::MAX), GateTransition::Unchanged);
        assert!(gate.is_paused());
        assert_eq!(gate.touch_grace_deadline(), None);

        gate.touch_start();
        assert_eq!(gate.touch_end(now, GRACE), GateTransition::Unchanged);
        assert_eq!(gate.expire_touch_grace(now + GRACE), GateTransition::Resumed);
    }
}
