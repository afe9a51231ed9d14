//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of platform code:
//! - Time arrives as an explicit `dt`, never from a global clock
//! - Input arrives as a `TickInput` snapshot
//! - Projectiles are scanned in spawn order

pub mod collision;
pub mod movement;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Arena};
pub use movement::{FixedMovement, resolve, resolve_step};
pub use state::{Enemy, GameEvent, GameState, Player, Projectile};
pub use tick::{TickInput, tick};
