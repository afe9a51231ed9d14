//! Draw list for one frame
//!
//! The host renderer consumes a [`Scene`]; nothing here talks to a GPU.

use glam::Vec2;

use super::hud::{FpsCounter, HudText};
use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::{Aabb, GameState};

/// What a shape stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Player,
    /// Debug marker at the player's centre
    PlayerCentre,
    Enemy,
    Projectile,
}

/// A filled circle positioned by its centre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleShape {
    pub kind: ShapeKind,
    pub center: Vec2,
    pub radius: f32,
    pub color: [f32; 4],
}

impl CircleShape {
    pub fn bounds(&self) -> Aabb {
        Aabb::around_circle(self.center, self.radius)
    }

    pub fn intersects(&self, other: &CircleShape) -> bool {
        self.bounds().intersects(&other.bounds())
    }

    /// Triangle list for GPU hosts
    pub fn vertices(&self) -> Vec<Vertex> {
        shapes::circle(
            self.center,
            self.radius,
            self.color,
            shapes::segments_for_radius(self.radius),
        )
    }
}

/// Everything drawn in one frame, in draw order
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub clear_color: [f32; 4],
    pub circles: Vec<CircleShape>,
    pub hud: Vec<HudText>,
}

impl Scene {
    /// All circles tessellated into one vertex list
    pub fn vertices(&self) -> Vec<Vertex> {
        self.circles.iter().flat_map(|c| c.vertices()).collect()
    }

    pub fn count(&self, kind: ShapeKind) -> usize {
        self.circles.iter().filter(|c| c.kind == kind).count()
    }
}

/// Build the draw list for the current state
pub fn build_scene(state: &GameState, fps: &FpsCounter) -> Scene {
    let mut circles = Vec::with_capacity(state.projectiles.len() + 3);

    circles.push(CircleShape {
        kind: ShapeKind::Player,
        center: state.player.pos,
        radius: state.player.radius,
        color: colors::PLAYER,
    });
    circles.push(CircleShape {
        kind: ShapeKind::PlayerCentre,
        center: state.player.pos,
        radius: state.player.radius * 0.1,
        color: colors::PLAYER_CENTRE,
    });

    circles.extend(state.projectiles.iter().map(|p| CircleShape {
        kind: ShapeKind::Projectile,
        center: p.pos,
        radius: p.radius,
        color: colors::PROJECTILE,
    }));

    if let Some(enemy) = &state.enemy {
        circles.push(CircleShape {
            kind: ShapeKind::Enemy,
            center: enemy.pos,
            radius: enemy.radius,
            color: colors::ENEMY,
        });
    }

    Scene {
        clear_color: colors::BACKGROUND,
        circles,
        hud: vec![HudText::fps(fps)],
    }
}
