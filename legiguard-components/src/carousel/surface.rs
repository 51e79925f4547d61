//! The scrolling surface a carousel drives.
//!
//! In a browser this is the overflow container of the card strip; natively it
//! can be any widget that scrolls horizontally. [`TweenSurface`] is an
//! in-memory implementation that animates smooth scrolls itself.

use std::time::Duration;

use crate::Instant;

/// How a scroll request should move the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Animate to the target with the surface's own easing.
    #[default]
    Smooth,
    /// Jump to the target immediately.
    Instant,
}

/// Host-side scroll container.
pub trait ScrollSurface {
    /// Current scroll offset along the card axis.
    fn scroll_offset(&self) -> f32;

    /// Requests a scroll to `offset`.
    fn scroll_to(&mut self, offset: f32, behavior: ScrollBehavior);

    /// Stops delivering scroll signals to the controller. Called once on dispose.
    fn detach(&mut self) {}
}

impl<S: ScrollSurface + ?Sized> ScrollSurface for Box<S> {
    fn scroll_offset(&self) -> f32 {
        (**self).scroll_offset()
    }

    fn scroll_to(&mut self, offset: f32, behavior: ScrollBehavior) {
        (**self).scroll_to(offset, behavior);
    }

    fn detach(&mut self) {
        (**self).detach();
    }
}

/// What happened to a [`TweenSurface`] during one [`advance`](TweenSurface::advance).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenFrame {
    /// Nothing moved.
    Idle,
    /// The offset changed and the animation continues.
    Scrolled,
    /// The animation reached its target on this frame.
    Settled,
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
}

impl Tween {
    fn sample(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start);
        let t = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
        };
        self.from + (self.to - self.from) * smoothstep(t)
    }

    fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }
}

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// In-memory surface that animates smooth scrolls with a fixed-length
/// smoothstep tween.
///
/// Smooth requests start on the next [`advance`](Self::advance) and retarget
/// from wherever the surface currently is, so an interrupted animation
/// continues without a jump.
#[derive(Clone, Debug)]
pub struct TweenSurface {
    offset: f32,
    duration: Duration,
    pending: Option<f32>,
    tween: Option<Tween>,
    attached: bool,
}

impl TweenSurface {
    /// Animation length used by [`Default`].
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(350);

    /// Creates a surface at offset zero animating over `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            offset: 0.0,
            duration,
            pending: None,
            tween: None,
            attached: true,
        }
    }

    /// Whether a smooth scroll is queued or running.
    pub fn is_animating(&self) -> bool {
        self.pending.is_some() || self.tween.is_some()
    }

    /// Whether the surface still accepts scroll requests.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Steps the animation to `now`.
    pub fn advance(&mut self, now: Instant) -> TweenFrame {
        if let Some(target) = self.pending.take() {
            self.tween = Some(Tween {
                from: self.offset,
                to: target,
                start: now,
                duration: self.duration,
            });
        }
        let Some(tween) = self.tween else {
            return TweenFrame::Idle;
        };

        self.offset = tween.sample(now);
        if tween.is_done(now) {
            self.offset = tween.to;
            self.tween = None;
            TweenFrame::Settled
        } else {
            TweenFrame::Scrolled
        }
    }

    /// Simulates the user dragging the strip by `delta`. Interrupts any
    /// animation. Returns whether the offset moved.
    pub fn drag_by(&mut self, delta: f32) -> bool {
        if !self.attached || !delta.is_finite() || delta == 0.0 {
            return false;
        }
        self.pending = None;
        self.tween = None;
        self.offset += delta;
        true
    }
}

impl Default for TweenSurface {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION)
    }
}

impl ScrollSurface for TweenSurface {
    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn scroll_to(&mut self, offset: f32, behavior: ScrollBehavior) {
        if !self.attached || !offset.is_finite() {
            return;
        }
        match behavior {
            ScrollBehavior::Smooth => self.pending = Some(offset),
            ScrollBehavior::Instant => {
                self.pending = None;
                self.tween = None;
                self.offset = offset;
            }
        }
    }

    fn detach(&mut self) {
        self.attached = false;
        self.pending = None;
        self.tween = None;
    }
}

#[cfg(test)]
pub(crate) use recording::RecordingSurface;
