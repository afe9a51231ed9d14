//! HUD readouts

use glam::Vec2;

use super::vertex::colors;

/// FPS readout that only changes every `refresh_interval` seconds
#[derive(Debug, Clone)]
pub struct FpsCounter {
    refresh_interval: f32,
    since_refresh: f32,
    fps: u32,
}

impl FpsCounter {
    pub fn new(refresh_interval: f32) -> Self {
        Self {
            refresh_interval,
            since_refresh: 0.0,
            fps: 0,
        }
    }

    /// Feed one frame's delta; returns true when the readout changed
    pub fn update(&mut self, dt: f32) -> bool {
        self.since_refresh += dt;
        if self.since_refresh < self.refresh_interval {
            return false;
        }
        self.since_refresh = 0.0;
        let fps = if dt > 0.0 { (1.0 / dt) as u32 } else { 0 };
        let changed = fps != self.fps;
        self.fps = fps;
        changed
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn label(&self) -> String {
        format!("FPS: {}", self.fps)
    }
}

/// A line of HUD text
#[derive(Debug, Clone, PartialEq)]
pub struct HudText {
    pub text: String,
    /// Top-left corner in arena coordinates
    pub pos: Vec2,
    pub size: u32,
    pub color: [f32; 4],
}

impl HudText {
    pub fn fps(counter: &FpsCounter) -> Self {
        Self {
            text: counter.label(),
            pos: Vec2::new(10.0, 10.0),
            size: 20,
            color: colors::HUD_TEXT,
        }
    }
}
