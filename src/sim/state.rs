//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, Arena};
use super::movement::FixedMovement;
use crate::consts::EPSILON;
use crate::settings::Tuning;

/// The player's circle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    /// Pixels per second
    pub speed: f32,
}

impl Player {
    pub fn bounds(&self) -> Aabb {
        Aabb::around_circle(self.pos, self.radius)
    }

    /// Apply a displacement, keeping the player inside the arena
    pub fn move_by(&mut self, displacement: Vec2, arena: &Arena) {
        self.pos = arena.clamp_circle(self.pos + displacement, self.radius);
    }
}

/// The patrolling target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub hp: i32,
    /// Pixels per second along the patrol
    pub speed: f32,
    /// Current patrol direction (screen space, +y is down)
    pub pathing_down: bool,
}

impl Enemy {
    pub fn bounds(&self) -> Aabb {
        Aabb::around_circle(self.pos, self.radius)
    }

    /// Turn around near the arena edges, then advance along the patrol
    pub fn patrol(&mut self, arena: &Arena, margin: f32, dt: f32) {
        if self.pos.y + margin > arena.height {
            self.pathing_down = false;
        }
        if self.pos.y - margin < 0.0 {
            self.pathing_down = true;
        }
        let step = self.speed * dt;
        self.pos.y += if self.pathing_down { step } else { -step };
    }

    /// Apply damage; returns true if the enemy is now destroyed
    pub fn take_hit(&mut self, damage: i32, destroy_threshold: i32) -> bool {
        self.hp -= damage;
        self.hp <= destroy_threshold
    }
}

/// A live projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub movement: FixedMovement,
}

impl Projectile {
    pub fn bounds(&self) -> Aabb {
        Aabb::around_circle(self.pos, self.radius)
    }
}

/// Something that happened during the last step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ProjectileFired { id: u32, direction: Vec2 },
    /// Fire held but pointer sits on the spawn point
    FireRejected,
    EnemyHit { projectile: u32, hp: i32 },
    EnemyDestroyed { enemy: u32 },
    ProjectileExpired { id: u32 },
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub arena: Arena,
    pub player: Player,
    /// `None` once destroyed
    pub enemy: Option<Enemy>,
    /// Live projectiles in spawn order
    pub projectiles: Vec<Projectile>,
    /// Simulation clock (seconds since start)
    pub time_secs: f64,
    /// Seconds left before the next shot is allowed
    pub fire_cooldown_left: f32,
    pub frame: u64,
    /// Projectiles that hit the enemy
    pub hits: u32,
    pub enemies_destroyed: u32,
    /// Events from the most recent step
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Fresh state laid out from `tuning`
    pub fn new(tuning: Tuning) -> Self {
        let arena = Arena::new(tuning.arena_width, tuning.arena_height);
        let player = Player {
            pos: arena.clamp_circle(tuning.player_spawn(), tuning.player_radius),
            radius: tuning.player_radius,
            speed: tuning.player_speed,
        };
        let mut state = Self {
            tuning,
            arena,
            player,
            enemy: None,
            projectiles: Vec::new(),
            time_secs: 0.0,
            fire_cooldown_left: 0.0,
            frame: 0,
            hits: 0,
            enemies_destroyed: 0,
            events: Vec::new(),
            next_id: 1,
        };
        state.spawn_enemy();
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Place a full-health enemy at its start position, replacing any current one
    pub fn spawn_enemy(&mut self) {
        let id = self.next_entity_id();
        let t = &self.tuning;
        let (x, y) = t.enemy_start;
        self.enemy = Some(Enemy {
            id,
            pos: self.arena.clamp_circle(Vec2::new(x, y), t.enemy_radius),
            radius: t.enemy_radius,
            hp: t.enemy_hp,
            speed: t.enemy_speed,
            pathing_down: true,
        });
    }

    /// Whether the cooldown allows another shot
    pub fn can_fire(&self) -> bool {
        self.fire_cooldown_left <= EPSILON
    }

    /// Run down the fire cooldown by one frame
    pub fn cool_down(&mut self, dt: f32) {
        self.fire_cooldown_left = (self.fire_cooldown_left - dt).max(0.0);
    }

    /// Start the cooldown after a shot
    pub fn restart_cooldown(&mut self) {
        self.fire_cooldown_left = self.tuning.fire_cooldown;
    }

    /// Spawn a projectile at the player's centre aimed at `target`
    ///
    /// Returns the new projectile's id, or `None` when `target` is the spawn
    /// point itself. The cooldown is not checked here.
    pub fn spawn_projectile(&mut self, target: Vec2) -> Option<u32> {
        let origin = self.player.pos;
        let movement = FixedMovement::aim(origin, target, self.tuning.projectile_speed)?;
        let id = self.next_entity_id();
        self.projectiles.push(Projectile {
            id,
            pos: origin,
            radius: self.tuning.projectile_radius,
            movement,
        });
        Some(id)
    }

    pub fn enemy_alive(&self) -> bool {
        self.enemy.is_some()
    }

    /// Whether every live entity's box lies inside the arena
    pub fn all_in_bounds(&self) -> bool {
        let bounds = self.arena.bounds();
        bounds.contains(&self.player.bounds())
            && self.enemy.as_ref().is_none_or(|e| bounds.contains(&e.bounds()))
            && self.projectiles.iter().all(|p| bounds.contains(&p.bounds()))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_layout() {
        let state = GameState::default();
        assert_eq!(state.player.pos, Vec2::new(50.0, 50.0));
        let enemy = state.enemy.as_ref().unwrap();
        assert_eq!(enemy.pos, Vec2::new(415.0, 415.0));
        assert_eq!(enemy.hp, 100);
        assert!(enemy.pathing_down);
        assert!(state.projectiles.is_empty());
        assert!(state.all_in_bounds());
    }

    #[test]
    fn test_entity_ids_unique() {
        let mut state = GameState::default();
        let a = state.spawn_projectile(Vec2::new(500.0, 50.0)).unwrap();
        let b = state.spawn_projectile(Vec2::new(50.0, 500.0)).unwrap();
        assert_ne!(a, b);
        assert_ne!(a, state.enemy.as_ref().unwrap().id);
    }

    #[test]
    fn test_spawn_projectile_on_player_rejected() {
        let mut state = GameState::default();
        let at_player = state.player.pos;
        assert!(state.spawn_projectile(at_player).is_none());
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_enemy_take_hit_threshold() {
        let mut enemy = GameState::default().enemy.unwrap();
        enemy.hp = 20;
        assert!(!enemy.take_hit(10, 0));
        assert_eq!(enemy.hp, 10);
        assert!(enemy.take_hit(10, 0));
        assert_eq!(enemy.hp, 0);
    }

    #[test]
    fn test_patrol_turns_at_bottom() {
        let arena = Arena::new(800.0, 600.0);
        let mut enemy = GameState::default().enemy.unwrap();
        enemy.pos.y = 501.0;
        enemy.patrol(&arena, 100.0, 0.01);
        assert!(!enemy.pathing_down);
        assert!((enemy.pos.y - 498.0).abs() < 1e-3);
    }

    #[test]
    fn test_can_fire_respects_cooldown() {
        let mut state = GameState::default();
        assert!(state.can_fire());
        state.restart_cooldown();
        state.cool_down(0.05);
        assert!(!state.can_fire());
        state.cool_down(0.05);
        assert!(state.can_fire());
        state.cool_down(0.05);
        assert_eq!(state.fire_cooldown_left, 0.0);
    }

    #[test]
    fn test_cooldown_ten_steps_of_ten_ms() {
        let mut state = GameState::default();
        state.restart_cooldown();
        for _ in 0..9 {
            state.cool_down(0.01);
            assert!(!state.can_fire());
        }
        state.cool_down(0.01);
        assert!(state.can_fire());
    }
}
