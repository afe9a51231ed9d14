//! Circle Arena entry point
//!
//! Runs the game headless: the autopilot plays for a fixed number of frames
//! and the run summary is printed as JSON.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use clap::Parser;

use circle_arena::consts::DEFAULT_FRAME_DT;
use circle_arena::pilot::Autopilot;
use circle_arena::platform::{
    Clock, FixedClock, FrameLoop, HeadlessWindow, RecordingRenderer, RunSummary, ScriptedInput,
    SystemClock,
};
use circle_arena::{MovementPolicy, Tuning};

#[derive(Parser, Debug)]
#[command(name = "circle-arena", about = "Run the arena headless with the demo autopilot")]
struct Cli {
    /// Frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// Autopilot seed
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Seconds per frame
    #[arg(long, default_value_t = DEFAULT_FRAME_DT)]
    dt: f32,

    /// Pace frames at `dt` and measure deltas with the wall clock
    #[arg(long)]
    realtime: bool,

    /// JSON tuning file; missing fields keep their defaults
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Projectile movement policy (fixed or homing)
    #[arg(long)]
    policy: Option<String>,

    /// Print the effective tuning and exit
    #[arg(long)]
    dump_tuning: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.frames == 0 {
        return Err(anyhow!("--frames must be > 0"));
    }
    if cli.dt.is_nan() || cli.dt <= 0.0 {
        return Err(anyhow!("--dt must be > 0, got {}", cli.dt));
    }

    let mut tuning = match &cli.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    if let Some(policy) = &cli.policy {
        tuning.movement_policy = MovementPolicy::from_str(policy)
            .ok_or_else(|| anyhow!("unknown movement policy '{policy}'"))?;
    }

    if cli.dump_tuning {
        println!("{}", tuning.to_json()?);
        return Ok(());
    }

    log::info!(
        "Circle Arena (headless) starting: {} frames, seed {}, {} projectiles",
        cli.frames,
        cli.seed,
        tuning.movement_policy.as_str()
    );

    let summary = if cli.realtime {
        let pace = Duration::from_secs_f32(cli.dt);
        play(&cli, tuning, &mut SystemClock::new(), Some(pace))
    } else {
        play(&cli, tuning, &mut FixedClock::new(cli.dt), None)
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Let the autopilot play, optionally sleeping `pace` before each frame
fn play<C: Clock>(
    cli: &Cli,
    tuning: Tuning,
    clock: &mut C,
    pace: Option<Duration>,
) -> RunSummary {
    let mut game = FrameLoop::new(tuning);
    let mut window = HeadlessWindow::new();
    let mut input = ScriptedInput::default();
    let mut renderer = RecordingRenderer::new();
    let mut pilot = Autopilot::new(cli.seed);

    game.run(
        &mut window,
        &mut input,
        &mut renderer,
        clock,
        Some(cli.frames),
        |state, input| {
            if let Some(pace) = pace {
                thread::sleep(pace);
            }
            input.set(pilot.next_input(state));
        },
    )
}
