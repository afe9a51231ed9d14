//! Per-frame simulation step
//!
//! Advances the arena by one rendered frame of `dt` seconds. Order matters:
//! enemy patrol, player movement, firing, projectile scan, bounds clamp.

use glam::Vec2;

use super::state::{GameEvent, GameState};
use crate::settings::MovementPolicy;

/// Input snapshot for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire button held
    pub fire: bool,
    /// Pointer position in arena coordinates
    pub pointer: Vec2,
}

impl TickInput {
    /// Unit-per-axis direction from the held keys (not normalized)
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.up {
            dir.y -= 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    state.frame += 1;
    state.time_secs += f64::from(dt);
    state.cool_down(dt);

    // Enemy patrol
    let margin = state.tuning.patrol_margin;
    if let Some(enemy) = state.enemy.as_mut() {
        enemy.patrol(&state.arena, margin, dt);
    }

    // Player movement (diagonals are not normalized)
    let displacement = input.direction() * state.player.speed * dt;
    state.player.move_by(displacement, &state.arena);

    // Fire control
    if input.fire && state.can_fire() {
        state.restart_cooldown();
        match state.spawn_projectile(input.pointer) {
            Some(id) => {
                let direction = state
                    .projectiles
                    .last()
                    .map(|p| p.movement.direction)
                    .unwrap_or_default();
                log::debug!("Projectile {id} fired toward {}", input.pointer);
                state.events.push(GameEvent::ProjectileFired { id, direction });
            }
            None => state.events.push(GameEvent::FireRejected),
        }
    }

    update_projectiles(state, dt);

    // Bounds clamp
    state.player.pos = state.arena.clamp_circle(state.player.pos, state.player.radius);
    if let Some(enemy) = state.enemy.as_mut() {
        enemy.pos = state.arena.clamp_circle(enemy.pos, enemy.radius);
    }
}

/// Collide, advance and prune projectiles
///
/// Each projectile is visited exactly once, in spawn order, regardless of how
/// many are removed.
fn update_projectiles(state: &mut GameState, dt: f32) {
    let damage = state.tuning.damage;
    let threshold = state.tuning.destroy_threshold;
    let homing = state.tuning.movement_policy == MovementPolicy::Homing;
    let arena = state.arena;

    let enemy = &mut state.enemy;
    let events = &mut state.events;
    let hits = &mut state.hits;
    let destroyed = &mut state.enemies_destroyed;

    state.projectiles.retain_mut(|projectile| {
        if let Some(e) = enemy.as_mut() {
            if e.bounds().intersects(&projectile.bounds()) {
                let killed = e.take_hit(damage, threshold);
                *hits += 1;
                events.push(GameEvent::EnemyHit {
                    projectile: projectile.id,
                    hp: e.hp,
                });
                log::debug!("Enemy hp: {}", e.hp);
                if killed {
                    log::info!("Enemy {} destroyed", e.id);
                    events.push(GameEvent::EnemyDestroyed { enemy: e.id });
                    *destroyed += 1;
                    *enemy = None;
                }
                return false;
            }
        }

        if homing {
            let step = projectile.movement.speed * dt;
            if !projectile.movement.reaim(projectile.pos)
                || projectile.movement.remaining(projectile.pos) <= step
            {
                // Arrived at the aim point
                events.push(GameEvent::ProjectileExpired { id: projectile.id });
                return false;
            }
        }

        projectile.pos += projectile.movement.step(dt);

        if !arena.contains_circle(projectile.pos, projectile.radius) {
            events.push(GameEvent::ProjectileExpired { id: projectile.id });
            return false;
        }
        true
    });
}
