//! Demo autopilot
//!
//! Plays the game from the state alone: wanders between random waypoints,
//! aims at the enemy and fires in bursts. Seeded, so a run is reproducible.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{GameState, TickInput};

/// Distance at which a waypoint counts as reached
const WAYPOINT_REACHED: f32 = 20.0;
/// Dead zone per axis so the player does not jitter around the waypoint
const AXIS_DEAD_ZONE: f32 = 4.0;

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    waypoint: Option<Vec2>,
    /// Frames left in the current fire/hold burst
    burst_frames: u32,
    firing: bool,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            waypoint: None,
            burst_frames: 0,
            firing: false,
        }
    }

    /// Decide the input for the next frame
    pub fn next_input(&mut self, state: &GameState) -> TickInput {
        let player = &state.player;

        let reached = self
            .waypoint
            .is_none_or(|w| w.distance(player.pos) < WAYPOINT_REACHED);
        if reached {
            let margin = player.radius;
            let x = self.random_between(margin, state.arena.width - margin);
            let y = self.random_between(margin, state.arena.height - margin);
            self.waypoint = Some(Vec2::new(x, y));
        }
        let to_waypoint = self.waypoint.unwrap_or(player.pos) - player.pos;

        if self.burst_frames == 0 {
            self.firing = !self.firing;
            self.burst_frames = self.rng.random_range(10..60);
        }
        self.burst_frames -= 1;

        let pointer = match &state.enemy {
            Some(enemy) => enemy.pos,
            None => Vec2::new(
                self.random_between(0.0, state.arena.width),
                self.random_between(0.0, state.arena.height),
            ),
        };

        TickInput {
            up: to_waypoint.y < -AXIS_DEAD_ZONE,
            down: to_waypoint.y > AXIS_DEAD_ZONE,
            left: to_waypoint.x < -AXIS_DEAD_ZONE,
            right: to_waypoint.x > AXIS_DEAD_ZONE,
            fire: self.firing,
            pointer,
        }
    }

    fn random_between(&mut self, lo: f32, hi: f32) -> f32 {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick;

    #[test]
    fn test_autopilot_deterministic() {
        let state = GameState::default();
        let mut a = Autopilot::new(7);
        let mut b = Autopilot::new(7);
        for _ in 0..100 {
            assert_eq!(a.next_input(&state), b.next_input(&state));
        }
    }

    #[test]
    fn test_autopilot_aims_at_enemy() {
        let state = GameState::default();
        let mut pilot = Autopilot::new(1);
        let input = pilot.next_input(&state);
        assert_eq!(input.pointer, state.enemy.as_ref().unwrap().pos);
    }

    #[test]
    fn test_autopilot_hits_stationary_enemy() {
        let tuning = crate::Tuning {
            enemy_speed: 0.0,
            ..Default::default()
        };
        let mut state = GameState::new(tuning);
        let mut pilot = Autopilot::new(42);
        for _ in 0..300 {
            let input = pilot.next_input(&state);
            tick(&mut state, &input, 1.0 / 60.0);
        }
        assert!(state.hits > 0);
        assert!(state.all_in_bounds());
    }
}
