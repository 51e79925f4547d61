//! Index dots and directional controls, derived from the active index.

use smallvec::SmallVec;

/// Indicator list; stays inline for typical carousel sizes.
pub type Indicators = SmallVec<[Indicator; 8]>;

/// One index dot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Indicator {
    /// Card this dot selects.
    pub index: usize,
    /// Number of cards in the carousel.
    pub total: usize,
    /// Whether this dot marks the active card.
    pub is_active: bool,
}

impl Indicator {
    /// Accessible label for the dot's button.
    pub fn label(&self) -> String {
        format!("Show testimonial {} of {}", self.index + 1, self.total)
    }
}

/// Builds the dot list for `len` cards with `active` highlighted.
pub fn indicators(active: usize, len: usize) -> Indicators {
    (0..len)
        .map(|index| Indicator {
            index,
            total: len,
            is_active: index == active,
        })
        .collect()
}

/// Previous/next buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Moves to the preceding card, wrapping to the last.
    Previous,
    /// Moves to the following card, wrapping to the first.
    Next,
}

impl Direction {
    /// Signed step applied to the active index.
    pub const fn step(self) -> isize {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }

    /// Accessible label for the control.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Previous => "Previous testimonial",
            Self::Next => "Next testimonial",
        }
    }
}
