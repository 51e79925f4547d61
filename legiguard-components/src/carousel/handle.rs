//! Shared ownership of one controller across host callbacks.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{controller::CarouselController, surface::ScrollSurface};

/// Cloneable handle to a [`CarouselController`].
///
/// A host typically registers several callbacks (scroll listener, timer
/// wake-up, button clicks, pointer events) that all need the same
/// controller. Each clone points at the same instance.
///
/// ```
/// use legiguard_components::{
///     Instant,
///     carousel::{CarouselArgs, CarouselController, CarouselHandle, TweenSurface},
/// };
///
/// let now = Instant::now();
/// let controller = CarouselController::mount(3, TweenSurface::default(), CarouselArgs::default(), now)?;
/// let handle = CarouselHandle::new(controller);
/// let on_next = handle.clone();
///
/// on_next.with_mut(|carousel| carousel.next(now));
/// assert_eq!(handle.active_index(), 1);
/// # Ok::<(), legiguard_components::CarouselError>(())
/// ```
pub struct CarouselHandle<S: ScrollSurface> {
    inner: Arc<Mutex<CarouselController<S>>>,
}

impl<S: ScrollSurface> Clone for CarouselHandle<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: ScrollSurface> CarouselHandle<S> {
    /// Wraps a mounted controller.
    pub fn new(controller: CarouselController<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    /// Execute a closure with a shared reference to the controller.
    pub fn with<R>(&self, f: impl FnOnce(&CarouselController<S>) -> R) -> R {
        let guard = self.inner.lock();
        f(&guard)
    }

    /// Execute a closure with a mutable reference to the controller.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut CarouselController<S>) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// The active card.
    pub fn active_index(&self) -> usize {
        self.with(CarouselController::active_index)
    }

    /// Disposes the shared controller. Every clone sees the disposal.
    pub fn dispose(&self) {
        self.with_mut(CarouselController::dispose);
    }
}

impl<S: ScrollSurface> From<CarouselController<S>> for CarouselHandle<S> {
    fn from(controller: CarouselController<S>) -> Self {
        Self::new(controller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Instant,
        carousel::{CarouselArgs, InteractionRegion, surface::RecordingSurface},
    };

    #[test]
    fn test_clones_share_one_controller() {
        let now = Instant::now();
        let controller =
            CarouselController::mount(4, RecordingSurface::default(), CarouselArgs::default(), now)
                .unwrap();
        let handle = CarouselHandle::from(controller);
        let buttons = handle.clone();
        let pointer = handle.clone();

        buttons.with_mut(|carousel| carousel.previous(now));
        pointer.with_mut(|carousel| carousel.pointer_enter(InteractionRegion::Controls, now));

        assert_eq!(handle.active_index(), 3);
        assert!(handle.with(|carousel| carousel.is_paused()));
    }

    #[test]
    fn test_dispose_is_visible_through_every_clone() {
        let now = Instant::now();
        let controller =
            CarouselController::mount(2, RecordingSurface::default(), CarouselArgs::default(), now)
                .unwrap();
        let handle = CarouselHandle::new(controller);
        let timer_callback = handle.clone();

        handle.dispose();
        timer_callback.with_mut(|carousel| carousel.next(now));

        assert_eq!(timer_callback.active_index(), 0);
        assert!(!timer_callback.with(|carousel| carousel.is_alive()));
        assert!(handle.with(|carousel| carousel.surface().detached));
    }
}
