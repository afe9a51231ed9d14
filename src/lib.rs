//! Circle Arena - a small arena shooter
//!
//! Core modules:
//! - `sim`: Simulation step (movement, patrol, firing, collisions)
//! - `renderer`: Backend-agnostic draw list and circle tessellation
//! - `platform`: Window/input/clock/renderer collaborators and the frame loop
//! - `pilot`: Seeded demo autopilot
//! - `settings`: Data-driven game tuning

pub mod pilot;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{MovementPolicy, Tuning};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Nominal frame delta for headless runs (60 Hz)
    pub const DEFAULT_FRAME_DT: f32 = 1.0 / 60.0;
    /// Tolerance for float comparisons on positions and directions
    pub const EPSILON: f32 = 1e-4;
}

/// Convert cartesian (x, y) to (magnitude, angle)
///
/// The angle of the zero vector is undefined; callers must check for it first.
#[inline]
pub fn to_polar(v: Vec2) -> (f32, f32) {
    (v.length(), v.y.atan2(v.x))
}

/// Convert (magnitude, angle) back to cartesian (x, y)
#[inline]
pub fn from_polar(magnitude: f32, angle: f32) -> Vec2 {
    Vec2::new(magnitude * angle.cos(), magnitude * angle.sin())
}
