//! Components for the LegiGuard marketing site.
//!
//! The interesting piece is the [`carousel`] controller that keeps an autoplay
//! timer, user scrolling and the active card index consistent. Everything
//! else on the site is static layout fed by plain data such as
//! [`testimonial`].
//!
//! # Example
//!
//! ```
//! use legiguard_components::{
//!     Instant,
//!     carousel::{CarouselArgs, CarouselController, TweenSurface, ViewportGeometry},
//!     testimonial,
//! };
//!
//! let cards = testimonial::spotlight();
//! let now = Instant::now();
//! let mut carousel =
//!     CarouselController::mount(cards.len(), TweenSurface::default(), CarouselArgs::default(), now)?;
//! carousel.update_geometry(ViewportGeometry::uniform(cards.len(), 640.0, 24.0, 0.0, 640.0)?)?;
//!
//! carousel.next(now);
//! assert_eq!(carousel.active_index(), 1);
//! # Ok::<(), legiguard_components::CarouselError>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

mod time;

pub mod carousel;
pub mod error;
pub mod testimonial;

pub use error::{CarouselError, GeometryError};
pub use time::Instant;
