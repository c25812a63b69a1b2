//! Axis-aligned collision detection
//!
//! Every pairwise interaction in the game (projectile vs enemy, enemy vs
//! player) reduces to one strict AABB overlap test.

use glam::Vec2;

/// An axis-aligned bounding box (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box with top-left corner at `pos`
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Grow the box by `dx` on each horizontal side and `dy` on each vertical side
    pub fn expand(&self, dx: f32, dy: f32) -> Self {
        Self::new(
            self.x - dx,
            self.y - dy,
            self.width + 2.0 * dx,
            self.height + 2.0 * dy,
        )
    }

    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        intersects(self, other)
    }
}

/// Anything that takes part in collision tests
pub trait HasBounds {
    /// Box used for hit-testing; must match what is drawn
    fn bounds(&self) -> Aabb;
}

/// Strict AABB overlap: boxes that only share an edge do not intersect.
#[inline]
pub fn intersects(a: &Aabb, b: &Aabb) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

/// Overlap test between two bounded entities
pub fn collides(a: &impl HasBounds, b: &impl HasBounds) -> bool {
    intersects(&a.bounds(), &b.bounds())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_boxes_collide() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(9.0, 0.0, 10.0, 10.0);
        assert!(intersects(&a, &b));
        assert!(intersects(&b, &a));
    }

    #[test]
    fn test_edge_touching_does_not_collide() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let right = Aabb::new(10.0, 0.0, 10.0, 10.0);
        let below = Aabb::new(0.0, 10.0, 10.0, 10.0);
        assert!(!intersects(&a, &right));
        assert!(!intersects(&a, &below));
    }

    #[test]
    fn test_contained_box_collides() {
        let outer = Aabb::new(0.0, 0.0, 100.0, 100.0);
        let inner = Aabb::new(40.0, 40.0, 4.0, 4.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_vertical_separation_misses() {
        // Same columns, one box well above the other
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 30.0, 10.0, 10.0);
        assert!(!intersects(&a, &b));
    }

    #[test]
    fn test_expand() {
        let glow = Aabb::new(10.0, 20.0, 8.0, 4.0).expand(2.0, 1.0);
        assert_eq!(glow, Aabb::new(8.0, 19.0, 12.0, 6.0));
    }

    #[test]
    fn test_collides_uses_bounds() {
        struct Dot(Vec2);
        impl HasBounds for Dot {
            fn bounds(&self) -> Aabb {
                Aabb::from_pos_size(self.0, Vec2::splat(2.0))
            }
        }

        assert!(collides(&Dot(Vec2::ZERO), &Dot(Vec2::new(1.0, 1.0))));
        assert!(!collides(&Dot(Vec2::ZERO), &Dot(Vec2::new(2.0, 0.0))));
    }
}
