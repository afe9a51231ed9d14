//! Frame loop driver
//!
//! One iteration per rendered frame: drain window events, measure the frame
//! delta, snapshot input, step the simulation, then draw and present.

use serde::Serialize;

use super::{Clock, InputDevice, Renderer, Window, WindowEvent};
use crate::consts::MAX_FRAME_DT;
use crate::renderer::{FpsCounter, build_scene};
use crate::settings::Tuning;
use crate::sim::{GameEvent, GameState, tick};

/// Outcome of a run, for logs and the CLI report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub frames: u64,
    pub sim_time_secs: f64,
    pub hits: u32,
    pub enemies_destroyed: u32,
    /// `None` once the enemy is gone
    pub enemy_hp: Option<i32>,
    pub live_projectiles: usize,
    pub fps: u32,
}

/// Owns the game state for the lifetime of the window
#[derive(Debug)]
pub struct FrameLoop {
    pub state: GameState,
    pub fps: FpsCounter,
}

impl FrameLoop {
    pub fn new(tuning: Tuning) -> Self {
        let fps = FpsCounter::new(tuning.fps_refresh_interval);
        Self {
            state: GameState::new(tuning),
            fps,
        }
    }

    /// Run a single frame; returns false once the window has closed
    pub fn frame<W, I, R, C>(
        &mut self,
        window: &mut W,
        input: &I,
        renderer: &mut R,
        clock: &mut C,
    ) -> bool
    where
        W: Window,
        I: InputDevice,
        R: Renderer,
        C: Clock,
    {
        while let Some(event) = window.poll_event() {
            match event {
                WindowEvent::CloseRequested => window.close(),
            }
        }
        if !window.is_open() {
            return false;
        }

        let dt = clock.restart().clamp(0.0, MAX_FRAME_DT);
        let snapshot = input.snapshot();
        tick(&mut self.state, &snapshot, dt);
        self.log_events();

        if self.fps.update(dt) {
            log::trace!("{}", self.fps.label());
        }

        let scene = build_scene(&self.state, &self.fps);
        renderer.clear(scene.clear_color);
        for circle in &scene.circles {
            renderer.draw_circle(circle);
        }
        for text in &scene.hud {
            renderer.draw_text(text);
        }
        renderer.present();
        true
    }

    /// Run frames until the window closes or `max_frames` is reached
    ///
    /// `control` runs before each frame and may update the input device from
    /// the current state (autopilot, scripted tests).
    pub fn run<W, I, R, C, F>(
        &mut self,
        window: &mut W,
        input: &mut I,
        renderer: &mut R,
        clock: &mut C,
        max_frames: Option<u64>,
        mut control: F,
    ) -> RunSummary
    where
        W: Window,
        I: InputDevice,
        R: Renderer,
        C: Clock,
        F: FnMut(&GameState, &mut I),
    {
        let mut frames = 0u64;
        while max_frames.is_none_or(|max| frames < max) {
            control(&self.state, input);
            if !self.frame(window, input, renderer, clock) {
                break;
            }
            frames += 1;
        }
        let summary = self.summary();
        log::info!(
            "Run finished after {} frames: {} hits, enemy {}",
            summary.frames,
            summary.hits,
            match summary.enemy_hp {
                Some(hp) => format!("alive with {hp} hp"),
                None => "destroyed".to_string(),
            }
        );
        summary
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            frames: self.state.frame,
            sim_time_secs: self.state.time_secs,
            hits: self.state.hits,
            enemies_destroyed: self.state.enemies_destroyed,
            enemy_hp: self.state.enemy.as_ref().map(|e| e.hp),
            live_projectiles: self.state.projectiles.len(),
            fps: self.fps.fps(),
        }
    }

    fn log_events(&self) {
        for event in &self.state.events {
            match event {
                GameEvent::EnemyDestroyed { enemy } => {
                    log::info!("Enemy {enemy} destroyed at frame {}", self.state.frame)
                }
                GameEvent::FireRejected => log::debug!("Shot rejected: pointer on spawn point"),
                other => log::trace!("{other:?}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{FixedClock, HeadlessWindow, RecordingRenderer, ScriptedInput};
    use crate::renderer::ShapeKind;

    #[test]
    fn test_frame_draws_and_presents() {
        let mut game = FrameLoop::new(Tuning::default());
        let mut window = HeadlessWindow::new();
        let input = ScriptedInput::default();
        let mut renderer = RecordingRenderer::new();
        let mut clock = FixedClock::new(1.0 / 60.0);

        assert!(game.frame(&mut window, &input, &mut renderer, &mut clock));
        assert_eq!(renderer.frames_presented, 1);
        assert_eq!(renderer.circles[0].kind, ShapeKind::Player);
        assert_eq!(renderer.text[0].text, "FPS: 0");
    }

    #[test]
    fn test_close_event_stops_loop() {
        let mut game = FrameLoop::new(Tuning::default());
        let mut window = HeadlessWindow::new();
        let mut input = ScriptedInput::default();
        let mut renderer = RecordingRenderer::new();
        let mut clock = FixedClock::new(1.0 / 60.0);

        let summary = game.run(
            &mut window,
            &mut input,
            &mut renderer,
            &mut clock,
            Some(5),
            |_, _| {},
        );
        assert_eq!(summary.frames, 5);

        window.push_event(WindowEvent::CloseRequested);
        assert!(!game.frame(&mut window, &input, &mut renderer, &mut clock));
        assert_eq!(renderer.frames_presented, 5);
        assert_eq!(game.state.frame, 5);
    }

    #[test]
    fn test_long_stall_clamped() {
        let mut game = FrameLoop::new(Tuning::default());
        let mut window = HeadlessWindow::new();
        let input = ScriptedInput::default();
        let mut renderer = RecordingRenderer::new();
        let mut clock = FixedClock::new(3.0);

        game.frame(&mut window, &input, &mut renderer, &mut clock);
        assert!((game.state.time_secs - f64::from(MAX_FRAME_DT)).abs() < 1e-6);
    }
}
