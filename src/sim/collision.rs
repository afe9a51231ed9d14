//! Axis-aligned bounds for circles and the arena
//!
//! Circles collide by their bounding boxes, not by exact circle overlap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Bounding box of a circle
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self {
            min: center - Vec2::splat(radius),
            max: center + Vec2::splat(radius),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Overlap with positive area (touching edges do not count)
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Whether `other` lies entirely inside this box (edges inclusive)
    pub fn contains(&self, other: &Aabb) -> bool {
        other.min.x >= self.min.x
            && other.min.y >= self.min.y
            && other.max.x <= self.max.x
            && other.max.y <= self.max.y
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Fixed rectangular arena anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(Vec2::ZERO, Vec2::new(self.width, self.height))
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Move a circle's centre so its box stays inside the arena
    pub fn clamp_circle(&self, center: Vec2, radius: f32) -> Vec2 {
        Vec2::new(
            center.x.clamp(radius, (self.width - radius).max(radius)),
            center.y.clamp(radius, (self.height - radius).max(radius)),
        )
    }

    /// Whether a circle's box lies fully inside the arena
    pub fn contains_circle(&self, center: Vec2, radius: f32) -> bool {
        self.bounds().contains(&Aabb::around_circle(center, radius))
    }

    /// Whether a point has left `[0, width] x [0, height]`
    pub fn is_out_of_bounds(&self, p: Vec2) -> bool {
        !self.bounds().contains_point(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_overlap_and_touch() {
        let a = Aabb::around_circle(Vec2::new(100.0, 100.0), 15.0);
        let b = Aabb::around_circle(Vec2::new(110.0, 95.0), 5.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));

        // Edges exactly touching
        let c = Aabb::around_circle(Vec2::new(120.0, 100.0), 5.0);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_clamp_circle_all_edges() {
        let arena = Arena::new(800.0, 600.0);
        assert_eq!(arena.clamp_circle(Vec2::new(-20.0, 10.0), 50.0), Vec2::new(50.0, 50.0));
        assert_eq!(
            arena.clamp_circle(Vec2::new(900.0, 700.0), 50.0),
            Vec2::new(750.0, 550.0)
        );
        let inside = Vec2::new(400.0, 300.0);
        assert_eq!(arena.clamp_circle(inside, 50.0), inside);
        assert!(arena.contains_circle(arena.clamp_circle(Vec2::new(-1e6, 1e6), 5.0), 5.0));
    }

    #[test]
    fn test_out_of_bounds_point() {
        let arena = Arena::new(800.0, 600.0);
        assert!(!arena.is_out_of_bounds(Vec2::new(0.0, 600.0)));
        assert!(arena.is_out_of_bounds(Vec2::new(-0.1, 300.0)));
        assert!(arena.is_out_of_bounds(Vec2::new(400.0, 600.5)));
    }

    #[test]
    fn test_aabb_helpers() {
        let b = Aabb::around_circle(Vec2::new(10.0, 20.0), 5.0);
        assert_eq!(b.size(), Vec2::new(10.0, 10.0));
        assert_eq!(b.center(), Vec2::new(10.0, 20.0));
    }
}
