//! Error types for carousel construction and geometry updates.
//!
//! Runtime misuse (out-of-range indices, unmeasured cards, calls after
//! dispose) is absorbed silently by the controller. Only configuration
//! mistakes a host can act on are reported here.

use std::time::Duration;

use thiserror::Error;

/// Errors produced while validating measured card geometry.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// A measured value was NaN or infinite.
    #[error("{index} has a non-finite {field}")]
    NonFinite {
        /// Card index, or the viewport.
        index: CardSlot,
        /// Which measurement was invalid.
        field: &'static str,
    },
    /// A card or the viewport reported a negative width.
    #[error("{index} has negative width {width}")]
    NegativeWidth {
        /// Card index, or the viewport.
        index: CardSlot,
        /// The offending width.
        width: f32,
    },
}

/// Identifies which measured element a [`GeometryError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSlot {
    /// The scrollable viewport.
    Viewport,
    /// The card at the given position.
    Card(usize),
}

impl std::fmt::Display for CardSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Viewport => f.write_str("viewport"),
            Self::Card(index) => write!(f, "card {index}"),
        }
    }
}

/// Errors returned by [`CarouselController`](crate::carousel::CarouselController).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CarouselError {
    /// The card sequence was empty.
    #[error("a carousel needs at least one card")]
    EmptySequence,
    /// A configured duration cannot drive the controller.
    #[error("invalid carousel argument `{field}`: {value:?}")]
    InvalidArgs {
        /// Name of the offending field.
        field: &'static str,
        /// Configured value.
        value: Duration,
    },
    /// Measured geometry describes a different number of cards.
    #[error("geometry describes {actual} cards, carousel has {expected}")]
    GeometryMismatch {
        /// Card count fixed at mount.
        expected: usize,
        /// Card count found in the measurement.
        actual: usize,
    },
    /// Measured geometry failed validation.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
