//! Viewport model: measured card geometry and the nearest-card math built on
//! top of it.
//!
//! Everything here is a pure function of the measured data, so the active
//! card can be re-derived at any time from geometry plus a scroll offset.

use crate::error::{CardSlot, GeometryError};

/// Position and width of one mounted card along the scroll axis.
///
/// Offsets are in scroll-content coordinates: a card at offset `x` is flush
/// with the viewport's leading edge when the scroll offset equals `x`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardRect {
    /// Leading edge of the card.
    pub offset: f32,
    /// Width of the card.
    pub width: f32,
}

impl CardRect {
    /// Creates a card rectangle.
    pub const fn new(offset: f32, width: f32) -> Self {
        Self { offset, width }
    }

    /// Center of the card along the scroll axis.
    pub fn center(self) -> f32 {
        self.offset + self.width / 2.0
    }
}

/// Measured geometry of a carousel viewport and its cards.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportGeometry {
    viewport_width: f32,
    cards: Vec<CardRect>,
}

impl ViewportGeometry {
    /// Validates and wraps a measurement.
    ///
    /// A zero viewport width is accepted and means the viewport has not been
    /// laid out yet; every query then returns `None`.
    pub fn new(viewport_width: f32, cards: Vec<CardRect>) -> Result<Self, GeometryError> {
        check_width(CardSlot::Viewport, viewport_width)?;
        for (index, card) in cards.iter().enumerate() {
            let slot = CardSlot::Card(index);
            if !card.offset.is_finite() {
                return Err(GeometryError::NonFinite {
                    index: slot,
                    field: "offset",
                });
            }
            check_width(slot, card.width)?;
        }
        Ok(Self {
            viewport_width,
            cards,
        })
    }

    /// Geometry for `count` equally sized cards separated by `gap`, the first
    /// one starting at `leading`.
    pub fn uniform(
        count: usize,
        card_width: f32,
        gap: f32,
        leading: f32,
        viewport_width: f32,
    ) -> Result<Self, GeometryError> {
        let stride = card_width + gap;
        let cards = (0..count)
            .map(|index| CardRect::new(leading + stride * index as f32, card_width))
            .collect();
        Self::new(viewport_width, cards)
    }

    /// Number of measured cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` when no cards were measured.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Visible width of the viewport.
    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Measured cards in sequence order.
    pub fn cards(&self) -> &[CardRect] {
        &self.cards
    }

    /// Whether the measurement can answer geometry queries.
    pub fn is_measured(&self) -> bool {
        self.viewport_width > 0.0 && !self.cards.is_empty()
    }

    /// Index of the card whose center is closest to the viewport center at
    /// `scroll_offset`. Exact ties resolve to the lower index.
    pub fn nearest_index(&self, scroll_offset: f32) -> Option<usize> {
        if !self.is_measured() || !scroll_offset.is_finite() {
            return None;
        }
        let viewport_center = scroll_offset + self.viewport_width / 2.0;
        let mut nearest: Option<(usize, f32)> = None;
        for (index, card) in self.cards.iter().enumerate() {
            let distance = (card.center() - viewport_center).abs();
            match nearest {
                Some((_, best)) if distance >= best => {}
                _ => nearest = Some((index, distance)),
            }
        }
        nearest.map(|(index, _)| index)
    }

    /// Scroll offset that centers the card at `index` in the viewport.
    ///
    /// The result is not clamped to a scroll range.
    pub fn centering_offset(&self, index: usize) -> Option<f32> {
        if !self.is_measured() {
            return None;
        }
        let card = self.cards.get(index)?;
        Some(card.offset - (self.viewport_width - card.width) / 2.0)
    }
}

fn check_width(index: CardSlot, width: f32) -> Result<(), GeometryError> {
    if !width.is_finite() {
        return Err(GeometryError::NonFinite {
            index,
            field: "width",
        });
    }
    if width < 0.0 {
        return Err(GeometryError::NegativeWidth { index, width });
    }
    Ok(())
}
