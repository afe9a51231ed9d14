//! Rendering module
//!
//! Produces a backend-agnostic draw list; the host window draws it.

pub mod hud;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use hud::{FpsCounter, HudText};
pub use scene::{CircleShape, Scene, ShapeKind, build_scene};
pub use vertex::Vertex;
