//! Axis-aligned bounding boxes
//!
//! Screen convention: +y points down, so `top < bottom`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { min: pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    pub fn area(&self) -> f32 {
        self.size.x * self.size.y
    }

    /// Grow the box vertically by `pad` on both the top and bottom
    pub fn padded_y(&self, pad: f32) -> Self {
        Self::new(self.min.x, self.min.y - pad, self.size.x, self.size.y + 2.0 * pad)
    }

    /// Strict intersection (touching edges do not count)
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Horizontal extents overlap or touch
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        !(self.left() > other.right() || other.left() > self.right())
    }

    /// Area of the intersection (0 when disjoint)
    pub fn overlap_area(&self, other: &Aabb) -> f32 {
        let w = self.right().min(other.right()) - self.left().max(other.left());
        let h = self.bottom().min(other.bottom()) - self.top().max(other.top());
        if w <= 0.0 || h <= 0.0 { 0.0 } else { w * h }
    }

    /// Share of this box's area covered by `other`
    pub fn overlap_fraction(&self, other: &Aabb) -> f32 {
        let area = self.area();
        if area <= 0.0 {
            return 0.0;
        }
        self.overlap_area(other) / area
    }

    /// Share of this box's height lying above `top` or below `bottom`
    pub fn outside_fraction_y(&self, top: f32, bottom: f32) -> f32 {
        if self.size.y <= 0.0 {
            return 0.0;
        }
        let over_top = (top - self.top()).max(0.0);
        let over_bottom = (self.bottom() - bottom).max(0.0);
        over_top.max(over_bottom) / self.size.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_intersects_is_strict() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Aabb::new(5.0, 5.0, 10.0, 10.0)));
        // Shared edge only
        assert!(!a.intersects(&Aabb::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Aabb::new(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_overlaps_x_includes_touching() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps_x(&Aabb::new(10.0, 500.0, 5.0, 5.0)));
        assert!(!a.overlaps_x(&Aabb::new(10.5, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn test_overlap_area() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 6.0, 10.0, 10.0);
        assert_eq!(a.overlap_area(&b), 5.0 * 4.0);
        assert_eq!(a.overlap_area(&Aabb::new(20.0, 20.0, 1.0, 1.0)), 0.0);
        assert!((a.overlap_fraction(&b) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_padded_y() {
        let p = Aabb::new(10.0, 100.0, 50.0, 6.0).padded_y(1.0);
        assert_eq!(p.top(), 99.0);
        assert_eq!(p.bottom(), 107.0);
        assert_eq!(p.left(), 10.0);
    }

    #[test]
    fn test_outside_fraction_y() {
        let inside = Aabb::new(0.0, 100.0, 10.0, 100.0);
        assert_eq!(inside.outside_fraction_y(0.0, 640.0), 0.0);

        let low = Aabb::new(0.0, 600.0, 10.0, 100.0);
        assert_eq!(low.outside_fraction_y(0.0, 640.0), 0.6);

        let high = Aabb::new(0.0, -25.0, 10.0, 100.0);
        assert_eq!(high.outside_fraction_y(0.0, 640.0), 0.25);
    }

    proptest! {
        #[test]
        fn prop_overlap_fraction_is_a_fraction(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..200.0, ah in 1.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 1.0f32..200.0, bh in 1.0f32..200.0,
        ) {
            let a = Aabb::new(ax, ay, aw, ah);
            let b = Aabb::new(bx, by, bw, bh);
            let f = a.overlap_fraction(&b);
            prop_assert!((0.0..=1.0 + 1e-5).contains(&f));
            prop_assert_eq!(a.overlap_area(&b) > 0.0, a.intersects(&b));
        }
    }
}
