//! Element identity and transient presentation state.

use sortable_core::math::Vec2;
use std::fmt;
use std::time::Duration;

/// Identifier of an element owned by the host UI.
///
/// Items (direct children of the list) and their handle sub-elements share
/// the same id space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl ElementId {
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Element({})", self.0)
    }
}

/// Timing applied when a presentation change takes effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    /// Jump straight to the new state.
    #[default]
    Instant,
    /// Slide to the new state over the given duration.
    Slide(Duration),
}

impl Transition {
    pub fn duration(&self) -> Duration {
        match self {
            Transition::Instant => Duration::ZERO,
            Transition::Slide(duration) => *duration,
        }
    }
}

/// Transient visual state of an item.
///
/// Presentation only affects painting: the host applies it as a transform
/// and alpha on top of the item's layout box, never as a structural move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    /// Offset from the item's layout position.
    pub translation: Vec2,
    /// Opacity override, `None` restores the host default.
    pub opacity: Option<f32>,
    pub transition: Transition,
}

impl Presentation {
    /// Presentation with no translation, default opacity and no transition.
    pub const fn cleared() -> Self {
        Self {
            translation: Vec2::ZERO,
            opacity: None,
            transition: Transition::Instant,
        }
    }

    pub fn is_cleared(&self) -> bool {
        *self == Self::cleared()
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::cleared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleared_presentation() {
        let p = Presentation::default();
        assert!(p.is_cleared());
        assert_eq!(p.transition.duration(), Duration::ZERO);

        let moved = Presentation {
            translation: Vec2::new(0.0, 40.0),
            ..Presentation::cleared()
        };
        assert!(!moved.is_cleared());
    }

    #[test]
    fn test_element_display() {
        assert_eq!(ElementId(7).to_string(), "Element(7)");
        assert_eq!(ElementId::from_raw(9).as_u64(), 9);
    }
}
