//! Platform abstraction layer
//!
//! The simulation never touches a window, a keyboard or a wall clock. This
//! module names those collaborators as traits and drives one frame at a time:
//! - `Window`: event queue and open/closed state
//! - `InputDevice`: key, button and pointer queries
//! - `Renderer`: clear, draw, present
//! - `Clock`: elapsed seconds since the last restart

pub mod frame_loop;
pub mod headless;

pub use frame_loop::{FrameLoop, RunSummary};
pub use headless::{FixedClock, HeadlessWindow, RecordingRenderer, ScriptedInput};

use std::time::Instant;

use glam::Vec2;

use crate::renderer::{CircleShape, HudText};
use crate::sim::TickInput;

/// Events delivered by the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    CloseRequested,
}

/// Directional keys the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

pub trait Window {
    /// Next pending event, if any
    fn poll_event(&mut self) -> Option<WindowEvent>;
    fn is_open(&self) -> bool;
    fn close(&mut self);
}

pub trait InputDevice {
    fn is_key_pressed(&self, key: Key) -> bool;
    fn is_fire_pressed(&self) -> bool;
    /// Pointer position in window coordinates
    fn pointer_position(&self) -> Vec2;

    /// Snapshot every query the simulation needs for one frame
    fn snapshot(&self) -> TickInput {
        TickInput {
            up: self.is_key_pressed(Key::Up),
            down: self.is_key_pressed(Key::Down),
            left: self.is_key_pressed(Key::Left),
            right: self.is_key_pressed(Key::Right),
            fire: self.is_fire_pressed(),
            pointer: self.pointer_position(),
        }
    }
}

pub trait Renderer {
    fn clear(&mut self, color: [f32; 4]);
    fn draw_circle(&mut self, circle: &CircleShape);
    fn draw_text(&mut self, text: &HudText);
    fn present(&mut self);
}

pub trait Clock {
    /// Seconds since the previous call (or since creation)
    fn restart(&mut self) -> f32;
}

/// Wall clock for real hosts
#[derive(Debug, Clone)]
pub struct SystemClock {
    last: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn restart(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        elapsed
    }
}
