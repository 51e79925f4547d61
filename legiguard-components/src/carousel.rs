//! Scroll-synchronized carousel for testimonial cards.
//!
//! ## Usage
//!
//! Present a fixed list of cards in a horizontally scrolling strip that
//! advances on its own, pauses while the visitor interacts with it, and keeps
//! its index dots in sync with free scrolling.
//!
//! The [`CarouselController`] owns every timer and the single active index.
//! A host wires its platform events to the controller and calls
//! [`CarouselController::tick`] whenever [`CarouselController::next_deadline`]
//! passes:
//!
//! ```
//! use std::time::Duration;
//!
//! use legiguard_components::{
//!     Instant,
//!     carousel::{
//!         CarouselArgs, CarouselController, InteractionRegion, TweenSurface, ViewportGeometry,
//!     },
//! };
//!
//! let start = Instant::now();
//! let args = CarouselArgs::default().autoplay_period(Duration::from_secs(5));
//! let mut carousel = CarouselController::mount(3, TweenSurface::default(), args, start)?;
//! carousel.update_geometry(ViewportGeometry::uniform(3, 400.0, 16.0, 0.0, 400.0)?)?;
//!
//! carousel.tick(start + Duration::from_secs(5));
//! assert_eq!(carousel.active_index(), 1);
//!
//! carousel.pointer_enter(InteractionRegion::Viewport, start + Duration::from_secs(6));
//! carousel.tick(start + Duration::from_secs(30));
//! assert_eq!(carousel.active_index(), 1);
//! # Ok::<(), legiguard_components::CarouselError>(())
//! ```
use std::time::Duration;

use derive_setters::Setters;

use crate::error::CarouselError;

mod controller;
mod controls;
mod gate;
mod geometry;
mod handle;
mod surface;
mod timer;

pub use controller::{CarouselController, ChangeCause, IndexChange};
pub use controls::{Direction, Indicator, Indicators, indicators};
pub use gate::{GateTransition, InteractionGate, InteractionRegion};
pub use geometry::{CardRect, ViewportGeometry};
pub use handle::CarouselHandle;
pub use surface::{ScrollBehavior, ScrollSurface, TweenFrame, TweenSurface};
pub use timer::{Timer, TimerKind};

/// Default timings for [`CarouselArgs`].
pub struct CarouselDefaults;

impl CarouselDefaults {
    /// Time between automatic advances.
    pub const AUTOPLAY_PERIOD: Duration = Duration::from_millis(6000);
    /// Quiet time after the last scroll signal before the active card is
    /// re-derived from the scroll position.
    pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(80);
    /// How long scroll signals are ignored after a programmatic scroll.
    /// Must cover the surface's smooth-scroll animation.
    pub const SETTLE_DURATION: Duration = Duration::from_millis(400);
    /// How long a finished touch keeps autoplay paused.
    pub const TOUCH_GRACE: Duration = Duration::from_millis(1200);
}

/// Configuration for a [`CarouselController`].
#[derive(Clone, Debug, PartialEq, Eq, Setters)]
pub struct CarouselArgs {
    /// Whether the carousel advances on its own.
    pub autoplay: bool,
    /// Time between automatic advances.
    pub autoplay_period: Duration,
    /// Quiet time before a burst of scroll signals is turned into one read.
    pub debounce_delay: Duration,
    /// Guard window after a programmatic scroll.
    pub settle_duration: Duration,
    /// Pause that lingers after a touch ends.
    pub touch_grace: Duration,
}

impl Default for CarouselArgs {
    fn default() -> Self {
        Self {
            autoplay: true,
            autoplay_period: CarouselDefaults::AUTOPLAY_PERIOD,
            debounce_delay: CarouselDefaults::DEBOUNCE_DELAY,
            settle_duration: CarouselDefaults::SETTLE_DURATION,
            touch_grace: CarouselDefaults::TOUCH_GRACE,
        }
    }
}

impl CarouselArgs {
    /// Rejects timings the controller cannot run with.
    pub fn validate(&self) -> Result<(), CarouselError> {
        if self.autoplay && self.autoplay_period.is_zero() {
            return Err(CarouselError::InvalidArgs {
                field: "autoplay_period",
                value: self.autoplay_period,
            });
        }
        if self.settle_duration.is_zero() {
            return Err(CarouselError::InvalidArgs {
                field: "settle_duration",
                value: self.settle_duration,
            });
        }
        Ok(())
    }
}
