//! Headless collaborators for tests and the CLI runner

use std::collections::VecDeque;

use glam::Vec2;

use super::{Clock, InputDevice, Key, Renderer, Window, WindowEvent};
use crate::renderer::{CircleShape, HudText};
use crate::sim::TickInput;

/// A window with no surface; events are queued by the caller
#[derive(Debug, Default)]
pub struct HeadlessWindow {
    events: VecDeque<WindowEvent>,
    closed: bool,
}

impl HeadlessWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_event(&mut self, event: WindowEvent) {
        self.events.push_back(event);
    }
}

impl Window for HeadlessWindow {
    fn poll_event(&mut self) -> Option<WindowEvent> {
        self.events.pop_front()
    }

    fn is_open(&self) -> bool {
        !self.closed
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

/// Input device whose state is set directly each frame
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    pub state: TickInput,
}

impl ScriptedInput {
    pub fn set(&mut self, state: TickInput) {
        self.state = state;
    }
}

impl InputDevice for ScriptedInput {
    fn is_key_pressed(&self, key: Key) -> bool {
        match key {
            Key::Up => self.state.up,
            Key::Down => self.state.down,
            Key::Left => self.state.left,
            Key::Right => self.state.right,
        }
    }

    fn is_fire_pressed(&self) -> bool {
        self.state.fire
    }

    fn pointer_position(&self) -> Vec2 {
        self.state.pointer
    }
}

/// Clock that reports the same delta every frame
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub dt: f32,
}

impl FixedClock {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }
}

impl Clock for FixedClock {
    fn restart(&mut self) -> f32 {
        self.dt
    }
}

/// Renderer that keeps the last presented frame
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pending_circles: Vec<CircleShape>,
    pending_text: Vec<HudText>,
    pub clear_color: Option<[f32; 4]>,
    /// Circles of the last presented frame, in draw order
    pub circles: Vec<CircleShape>,
    pub text: Vec<HudText>,
    pub frames_presented: u64,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self, color: [f32; 4]) {
        self.clear_color = Some(color);
        self.pending_circles.clear();
        self.pending_text.clear();
    }

    fn draw_circle(&mut self, circle: &CircleShape) {
        self.pending_circles.push(*circle);
    }

    fn draw_text(&mut self, text: &HudText) {
        self.pending_text.push(text.clone());
    }

    fn present(&mut self) {
        self.circles = std::mem::take(&mut self.pending_circles);
        self.text = std::mem::take(&mut self.pending_text);
        self.frames_presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_snapshot() {
        let mut input = ScriptedInput::default();
        let wanted = TickInput {
            up: true,
            right: true,
            fire: true,
            pointer: Vec2::new(3.0, 4.0),
            ..Default::default()
        };
        input.set(wanted);
        assert_eq!(input.snapshot(), wanted);
    }

    #[test]
    fn test_window_events_fifo() {
        let mut window = HeadlessWindow::new();
        assert!(window.poll_event().is_none());
        window.push_event(WindowEvent::CloseRequested);
        assert_eq!(window.poll_event(), Some(WindowEvent::CloseRequested));
        assert!(window.is_open());
        window.close();
        assert!(!window.is_open());
    }
}
