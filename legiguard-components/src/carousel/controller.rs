//! The carousel controller.
//!
//! Two paths write the active index: [`CarouselController::go_to`] (intent,
//! from autoplay, dots and arrows) and the debounced scroll observer
//! (observation, from free scrolling). A programmatic scroll holds an
//! animation guard so its own scroll signals are never read back as user
//! input.

use tracing::{debug, trace, warn};

use crate::{Instant, error::CarouselError};

use super::{
    CarouselArgs,
    controls::{Direction, Indicators, indicators},
    gate::{GateTransition, InteractionGate, InteractionRegion},
    geometry::ViewportGeometry,
    surface::{ScrollBehavior, ScrollSurface},
    timer::{Timer, TimerKind},
};

/// Which entry point wrote the active index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeCause {
    /// `go_to`, `next`, `previous` or autoplay.
    Intent,
    /// The scroll observer after scrolling settled.
    Observation,
}

/// Record of one change to the active index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexChange {
    /// Index before the change.
    pub from: usize,
    /// Index after the change.
    pub to: usize,
    /// Entry point that made the change.
    pub cause: ChangeCause,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct GuardToken(u64);

/// Keeps autoplay, free scrolling and the active card index consistent.
///
/// The controller is driven entirely by its host: platform events are
/// forwarded to the matching methods and [`tick`](Self::tick) is called when
/// [`next_deadline`](Self::next_deadline) passes. Every method takes the
/// current instant, so behavior is deterministic for a given event sequence.
///
/// After [`dispose`](Self::dispose) (or drop) every method is a no-op.
#[derive(Debug)]
pub struct CarouselController<S: ScrollSurface> {
    len: usize,
    active: usize,
    revision: u64,
    last_change: Option<IndexChange>,
    geometry: Option<ViewportGeometry>,
    guard: Option<GuardToken>,
    guard_generation: u64,
    /// Guard the pending settle deadline was armed for.
    settle_token: Option<GuardToken>,
    /// A scroll signal arrived while guarded and has not been read back.
    missed_scroll: bool,
    settle: Timer,
    debounce: Timer,
    autoplay: Timer,
    gate: InteractionGate,
    args: CarouselArgs,
    surface: S,
    alive: bool,
}

impl<S: ScrollSurface> CarouselController<S> {
    /// Mounts a controller for `len` cards scrolling on `surface`.
    ///
    /// The active index starts at 0 and, when autoplay is enabled, the first
    /// advance is due one full period after `now`.
    pub fn mount(
        len: usize,
        surface: S,
        args: CarouselArgs,
        now: Instant,
    ) -> Result<Self, CarouselError> {
        args.validate()?;
        if len == 0 {
            return Err(CarouselError::EmptySequence);
        }

        let mut autoplay = Timer::new();
        if args.autoplay {
            autoplay.arm(now, args.autoplay_period);
        }
        debug!(len, autoplay = args.autoplay, "carousel mounted");

        Ok(Self {
            len,
            active: 0,
            revision: 0,
            last_change: None,
            geometry: None,
            guard: None,
            guard_generation: 0,
            settle_token: None,
            missed_scroll: false,
            settle: Timer::new(),
            debounce: Timer::new(),
            autoplay,
            gate: InteractionGate::new(),
            args,
            surface,
            alive: true,
        })
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; a carousel holds at least one card.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The active card.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Number of times the active index has changed. Hosts can re-render
    /// dependent state only when this moves.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Most recent change to the active index.
    pub fn last_change(&self) -> Option<IndexChange> {
        self.last_change
    }

    /// Index dots for the current state.
    pub fn indicators(&self) -> Indicators {
        indicators(self.active, self.len)
    }

    /// Whether autoplay is held by an interaction.
    pub fn is_paused(&self) -> bool {
        self.gate.is_paused()
    }

    /// Whether a programmatic scroll is still suppressing the observer.
    pub fn is_guarded(&self) -> bool {
        self.guard.is_some()
    }

    /// Whether the controller has not been disposed.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Active configuration.
    pub fn args(&self) -> &CarouselArgs {
        &self.args
    }

    /// Last accepted geometry.
    pub fn geometry(&self) -> Option<&ViewportGeometry> {
        self.geometry.as_ref()
    }

    /// The driven surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the driven surface, for hosts that animate it.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Pending deadline of one timer kind.
    pub fn deadline(&self, kind: TimerKind) -> Option<Instant> {
        match kind {
            TimerKind::Autoplay => self.autoplay.deadline(),
            TimerKind::Debounce => self.debounce.deadline(),
            TimerKind::Settle => self.settle.deadline(),
            TimerKind::TouchGrace => self.gate.touch_grace_deadline(),
        }
    }

    /// Earliest pending deadline across all timers.
    pub fn next_deadline(&self) -> Option<Instant> {
        if !self.alive {
            return None;
        }
        TIMER_ORDER
            .iter()
            .filter_map(|kind| self.deadline(*kind))
            .min()
    }

    /// Replaces the measured geometry.
    ///
    /// A measurement describing a different number of cards is rejected and
    /// the previous geometry is kept.
    pub fn update_geometry(&mut self, geometry: ViewportGeometry) -> Result<(), CarouselError> {
        if !self.alive {
            return Ok(());
        }
        if geometry.len() != self.len {
            warn!(
                expected = self.len,
                actual = geometry.len(),
                "rejected carousel geometry"
            );
            return Err(CarouselError::GeometryMismatch {
                expected: self.len,
                actual: geometry.len(),
            });
        }
        self.geometry = Some(geometry);
        Ok(())
    }

    /// Forgets the geometry, e.g. while cards are being re-laid out.
    pub fn clear_geometry(&mut self) {
        self.geometry = None;
    }

    /// Makes `index` the active card and scrolls it into the center.
    ///
    /// Any integer is accepted and wrapped into range. The index is written
    /// before the scroll starts so indicators reflect the request at once.
    pub fn go_to(&mut self, index: isize, now: Instant) {
        if !self.alive {
            return;
        }
        let target = wrap_index(index, self.len);
        self.write_active(target, ChangeCause::Intent);
        self.debounce.cancel();

        let Some(offset) = self
            .geometry
            .as_ref()
            .and_then(|geometry| geometry.centering_offset(target))
        else {
            trace!(index = target, "geometry not measured, skipping scroll");
            return;
        };

        self.guard_generation = self.guard_generation.wrapping_add(1);
        let token = GuardToken(self.guard_generation);
        self.guard = Some(token);
        self.missed_scroll = false;
        self.settle_token = self
            .settle
            .arm(now, self.args.settle_duration)
            .then_some(token);
        debug!(index = target, offset, "programmatic scroll");
        self.surface.scroll_to(offset, ScrollBehavior::Smooth);
    }

    /// Moves to the following card, wrapping at the end.
    pub fn next(&mut self, now: Instant) {
        self.step(Direction::Next, now);
    }

    /// Moves to the preceding card, wrapping at the start.
    pub fn previous(&mut self, now: Instant) {
        self.step(Direction::Previous, now);
    }

    /// Moves one card in `direction`.
    pub fn step(&mut self, direction: Direction, now: Instant) {
        // `len` fits in isize: it bounds a Vec of cards.
        self.go_to(self.active as isize + direction.step(), now);
    }

    /// Raw scroll signal from the surface.
    pub fn on_scroll(&mut self, now: Instant) {
        if !self.alive {
            return;
        }
        if self.guard.is_some() {
            trace!("scroll signal during programmatic scroll ignored");
            self.missed_scroll = true;
            return;
        }
        self.debounce.arm(now, self.args.debounce_delay);
    }

    /// Platform "scrolling finished" signal.
    ///
    /// Releases a live animation guard early and reads the resting position
    /// if scrolling was seen during the guard. Without a guard, a pending
    /// debounce is flushed immediately.
    pub fn on_scroll_end(&mut self, _now: Instant) {
        if !self.alive {
            return;
        }
        if self.guard.is_some() {
            self.settle.cancel();
            self.settle_token = None;
            if self.release_guard() {
                self.observe();
            }
        } else if self.debounce.cancel() {
            self.observe();
        }
    }

    /// Pointer entered part of the carousel.
    pub fn pointer_enter(&mut self, region: InteractionRegion, now: Instant) {
        if self.alive {
            let transition = self.gate.pointer_enter(region);
            self.apply_transition(transition, now);
        }
    }

    /// Pointer left part of the carousel.
    pub fn pointer_leave(&mut self, region: InteractionRegion, now: Instant) {
        if self.alive {
            let transition = self.gate.pointer_leave(region);
            self.apply_transition(transition, now);
        }
    }

    /// Focus moved inside part of the carousel.
    pub fn focus_in(&mut self, region: InteractionRegion, now: Instant) {
        if self.alive {
            let transition = self.gate.focus_in(region);
            self.apply_transition(transition, now);
        }
    }

    /// Focus left part of the carousel.
    pub fn focus_out(&mut self, region: InteractionRegion, now: Instant) {
        if self.alive {
            let transition = self.gate.focus_out(region);
            self.apply_transition(transition, now);
        }
    }

    /// A touch started on the carousel.
    pub fn touch_start(&mut self, now: Instant) {
        if self.alive {
            let transition = self.gate.touch_start();
            self.apply_transition(transition, now);
        }
    }

    /// A touch ended; autoplay stays paused for the touch grace.
    pub fn touch_end(&mut self, now: Instant) {
        if self.alive {
            let transition = self.gate.touch_end(now, self.args.touch_grace);
            self.apply_transition(transition, now);
        }
    }

    /// Fires every timer due at `now`, earliest first, each at its own
    /// deadline.
    pub fn tick(&mut self, now: Instant) {
        if !self.alive {
            return;
        }
        while let Some((kind, at)) = self.next_due(now) {
            self.fire(kind, at);
        }
    }

    /// Cancels every timer, releases the guard and detaches the surface.
    /// Later calls on the controller do nothing.
    pub fn dispose(&mut self) {
        if !self.alive {
            return;
        }
        self.alive = false;
        self.autoplay.cancel();
        self.debounce.cancel();
        self.settle.cancel();
        self.settle_token = None;
        self.guard = None;
        self.missed_scroll = false;
        self.gate.reset();
        self.surface.detach();
        debug!("carousel disposed");
    }

    fn next_due(&self, now: Instant) -> Option<(TimerKind, Instant)> {
        TIMER_ORDER
            .iter()
            .filter_map(|kind| {
                self.deadline(*kind)
                    .filter(|deadline| *deadline <= now)
                    .map(|deadline| (*kind, deadline))
            })
            .min_by_key(|(_, deadline)| *deadline)
    }

    fn fire(&mut self, kind: TimerKind, at: Instant) {
        match kind {
            TimerKind::Settle => {
                self.settle.fire(at);
                let armed_for = self.settle_token.take();
                if armed_for.is_none() || armed_for != self.guard {
                    trace!("settle deadline for a superseded guard ignored");
                } else if self.release_guard() {
                    // The strip may have moved under the guard; read it once it rests.
                    self.debounce.arm(at, self.args.debounce_delay);
                }
            }
            TimerKind::TouchGrace => {
                let transition = self.gate.expire_touch_grace(at);
                self.apply_transition(transition, at);
            }
            TimerKind::Debounce => {
                self.debounce.fire(at);
                if self.guard.is_some() {
                    trace!("debounced read discarded during programmatic scroll");
                } else {
                    self.observe();
                }
            }
            TimerKind::Autoplay => {
                self.autoplay.fire(at);
                self.autoplay.arm(at, self.args.autoplay_period);
                if self.gate.is_paused() {
                    trace!("autoplay tick skipped while paused");
                } else {
                    self.next(at);
                }
            }
        }
    }

    fn observe(&mut self) {
        let Some(geometry) = self.geometry.as_ref() else {
            trace!("geometry not measured, skipping scroll observation");
            return;
        };
        let offset = self.surface.scroll_offset();
        let Some(nearest) = geometry.nearest_index(offset) else {
            return;
        };
        self.write_active(nearest, ChangeCause::Observation);
    }

    /// Drops the guard. Returns whether scroll signals were suppressed
    /// while it was held.
    fn release_guard(&mut self) -> bool {
        if let Some(GuardToken(generation)) = self.guard.take() {
            debug!(generation, "animation guard released");
        }
        std::mem::take(&mut self.missed_scroll)
    }

    fn apply_transition(&mut self, transition: GateTransition, now: Instant) {
        match transition {
            GateTransition::Paused => {
                self.autoplay.cancel();
                debug!("autoplay paused");
            }
            GateTransition::Resumed => {
                if self.args.autoplay {
                    self.autoplay.arm(now, self.args.autoplay_period);
                }
                debug!("autoplay resumed");
            }
            GateTransition::Unchanged => {}
        }
    }

    fn write_active(&mut self, index: usize, cause: ChangeCause) {
        if index == self.active {
            return;
        }
        let change = IndexChange {
            from: self.active,
            to: index,
            cause,
        };
        self.active = index;
        self.revision += 1;
        self.last_change = Some(change);
        debug!(from = change.from, to = change.to, ?cause, "active card changed");
    }
}

impl<S: ScrollSurface> Drop for CarouselController<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Tie-break order when several timers share a deadline.
const TIMER_ORDER: [TimerKind; 4] = [
    TimerKind::Settle,
    TimerKind::TouchGrace,
    TimerKind::Debounce,
    TimerKind::Autoplay,
];

fn wrap_index(index: isize, len: usize) -> usize {
    // `len` fits in isize: it bounds a Vec of cards.
    index.rem_euclid(len as isize) as usize
}
