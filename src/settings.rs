//! Gameplay tuning
//!
//! Every constant the simulation uses lives in [`Tuning`]. A JSON file can
//! override any subset of fields.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// How a projectile's direction is resolved over its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MovementPolicy {
    /// Direction resolved once at spawn, straight line afterwards
    #[default]
    Fixed,
    /// Direction re-resolved every step toward the stored target
    Homing,
}

impl MovementPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementPolicy::Fixed => "Fixed",
            MovementPolicy::Homing => "Homing",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fixed" => Some(MovementPolicy::Fixed),
            "homing" | "home" => Some(MovementPolicy::Homing),
            _ => None,
        }
    }
}

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Player ===
    pub player_radius: f32,
    /// Pixels per second
    pub player_speed: f32,
    /// Initial centre; `None` puts the player's box at the top-left corner
    pub player_start: Option<(f32, f32)>,

    // === Projectiles ===
    pub projectile_radius: f32,
    /// Pixels per second
    pub projectile_speed: f32,
    /// Minimum seconds between two shots
    pub fire_cooldown: f32,
    pub movement_policy: MovementPolicy,

    // === Enemy ===
    pub enemy_radius: f32,
    /// Pixels per second along the patrol
    pub enemy_speed: f32,
    pub enemy_hp: i32,
    pub enemy_start: (f32, f32),
    /// Distance from the top/bottom edge at which the patrol turns around
    pub patrol_margin: f32,
    /// Hit points removed per projectile
    pub damage: i32,
    /// Enemy is destroyed once hp is at or below this value
    pub destroy_threshold: i32,

    // === HUD ===
    /// Seconds between FPS readout refreshes
    pub fps_refresh_interval: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: 800.0,
            arena_height: 600.0,

            player_radius: 50.0,
            player_speed: 200.0,
            player_start: None,

            projectile_radius: 5.0,
            projectile_speed: 1000.0,
            fire_cooldown: 0.1,
            movement_policy: MovementPolicy::Fixed,

            enemy_radius: 15.0,
            enemy_speed: 300.0,
            enemy_hp: 100,
            enemy_start: (415.0, 415.0),
            patrol_margin: 100.0,
            damage: 10,
            destroy_threshold: 0,

            fps_refresh_interval: 0.5,
        }
    }
}

impl Tuning {
    /// Where the player spawns (centre)
    pub fn player_spawn(&self) -> Vec2 {
        match self.player_start {
            Some((x, y)) => Vec2::new(x, y),
            None => Vec2::splat(self.player_radius),
        }
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.arena_width <= 0.0 || self.arena_height <= 0.0 {
            return Err(anyhow!(
                "arena must have a positive size, got {}x{}",
                self.arena_width,
                self.arena_height
            ));
        }
        for (name, radius) in [
            ("player_radius", self.player_radius),
            ("projectile_radius", self.projectile_radius),
            ("enemy_radius", self.enemy_radius),
        ] {
            if radius <= 0.0 {
                return Err(anyhow!("{name} must be > 0, got {radius}"));
            }
            if radius * 2.0 > self.arena_width.min(self.arena_height) {
                return Err(anyhow!("{name} {radius} does not fit in the arena"));
            }
        }
        for (name, speed) in [
            ("player_speed", self.player_speed),
            ("projectile_speed", self.projectile_speed),
            ("enemy_speed", self.enemy_speed),
        ] {
            if speed < 0.0 {
                return Err(anyhow!("{name} must not be negative, got {speed}"));
            }
        }
        if self.fire_cooldown < 0.0 {
            return Err(anyhow!("fire_cooldown must not be negative"));
        }
        if self.damage <= 0 {
            return Err(anyhow!("damage must be > 0, got {}", self.damage));
        }
        if self.enemy_hp <= self.destroy_threshold {
            return Err(anyhow!(
                "enemy_hp {} must be above destroy_threshold {}",
                self.enemy_hp,
                self.destroy_threshold
            ));
        }
        if self.patrol_margin < 0.0 {
            return Err(anyhow!("patrol_margin must not be negative"));
        }
        if self.fps_refresh_interval.is_nan() || self.fps_refresh_interval <= 0.0 {
            return Err(anyhow!(
                "fps_refresh_interval must be > 0, got {}",
                self.fps_refresh_interval
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json).context("invalid tuning JSON")?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize tuning")
    }

    /// Load tuning from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read tuning file {}", path.display()))?;
        let tuning = Self::from_json(&json)
            .with_context(|| format!("failed to load tuning from {}", path.display()))?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }
}
