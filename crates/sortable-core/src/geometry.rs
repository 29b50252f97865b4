//! Viewport-space geometry.

use crate::math::Vec2;

/// An axis-aligned box in viewport coordinates.
///
/// Edges are inclusive: a point lying exactly on `right` or `bottom` is
/// inside the box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl BoundingBox {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build a box from an origin and a size.
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            left: origin.x,
            top: origin.y,
            right: origin.x + size.x,
            bottom: origin.y + size.y,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    /// Top-left corner.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.right - self.left, self.bottom - self.top)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }

    /// The same box moved by `offset`.
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            left: self.left + offset.x,
            top: self.top + offset.y,
            right: self.right + offset.x,
            bottom: self.bottom + offset.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_edge_inclusive() {
        let b = BoundingBox::new(0.0, 0.0, 100.0, 40.0);
        assert!(b.contains(Vec2::new(0.0, 0.0)));
        assert!(b.contains(Vec2::new(100.0, 40.0)));
        assert!(b.contains(Vec2::new(50.0, 20.0)));
        assert!(!b.contains(Vec2::new(100.5, 20.0)));
        assert!(!b.contains(Vec2::new(50.0, -0.5)));
    }

    #[test]
    fn test_from_origin_size() {
        let b = BoundingBox::from_origin_size(Vec2::new(10.0, 20.0), Vec2::new(30.0, 5.0));
        assert_eq!(b, BoundingBox::new(10.0, 20.0, 40.0, 25.0));
        assert_eq!(b.origin(), Vec2::new(10.0, 20.0));
        assert_eq!(b.size(), Vec2::new(30.0, 5.0));
        assert_eq!(b.center(), Vec2::new(25.0, 22.5));
    }

    #[test]
    fn test_translated() {
        let b = BoundingBox::new(0.0, 40.0, 100.0, 80.0).translated(Vec2::new(0.0, -40.0));
        assert_eq!(b, BoundingBox::new(0.0, 0.0, 100.0, 40.0));
    }
}
