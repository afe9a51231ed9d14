//! Directed fixed-speed movement
//!
//! Resolves the displacement that carries a mover in a straight line toward a
//! target at constant speed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{from_polar, to_polar};

/// Displacement of magnitude `speed` from `current` toward `target`
///
/// Returns [`Vec2::ZERO`] when the two points coincide, since the direction
/// of a zero-length delta is undefined.
pub fn resolve(current: Vec2, target: Vec2, speed: f32) -> Vec2 {
    let delta = target - current;
    if delta == Vec2::ZERO {
        return Vec2::ZERO;
    }
    let (_, angle) = to_polar(delta);
    from_polar(speed, angle)
}

/// Same as [`resolve`], scaled by the frame delta
#[inline]
pub fn resolve_step(current: Vec2, target: Vec2, speed: f32, dt: f32) -> Vec2 {
    resolve(current, target, speed * dt)
}

/// A projectile's movement descriptor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedMovement {
    /// Point the mover was aimed at
    pub target: Vec2,
    /// Pixels per second
    pub speed: f32,
    /// Unit direction, never zero
    pub direction: Vec2,
}

impl FixedMovement {
    /// Aim from `origin` at `target`; `None` if they coincide
    pub fn aim(origin: Vec2, target: Vec2, speed: f32) -> Option<Self> {
        let direction = resolve(origin, target, 1.0);
        if direction == Vec2::ZERO {
            return None;
        }
        Some(Self {
            target,
            speed,
            direction,
        })
    }

    /// Displacement for one step of `dt` seconds
    #[inline]
    pub fn step(&self, dt: f32) -> Vec2 {
        self.direction * self.speed * dt
    }

    /// Re-aim from `current` toward the stored target
    ///
    /// Returns `false` once the target is reached; the direction is then left
    /// unchanged.
    pub fn reaim(&mut self, current: Vec2) -> bool {
        let direction = resolve(current, self.target, 1.0);
        if direction == Vec2::ZERO {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Distance left to the stored target
    pub fn remaining(&self, current: Vec2) -> f32 {
        current.distance(self.target)
    }
}
