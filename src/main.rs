//! Planetoids headless runner
//!
//! Plays one wave with a scripted pilot and reports the outcome.
//!
//! Usage: `planetoids [LEVEL.json] [SETTINGS.json] [FRAMES]`
//! Without a level file a level is generated from a fixed seed.

use std::path::{Path, PathBuf};

use clap::Parser;
use planetoids::sim::{TickInput, WaveEvent, WavePhase, WaveState};
use planetoids::{LevelData, Settings, WaveResult};

const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_FRAMES: u64 = 60 * 60;
const GENERATED_SEED: u64 = 0x5eed;
const GENERATED_ASTEROIDS: usize = 4;

#[derive(Parser, Debug)]
#[command(name = "planetoids")]
#[command(about = "Play one Planetoids wave headlessly with a scripted pilot")]
struct Args {
    /// Level JSON file (a level is generated from a fixed seed when omitted)
    level: Option<PathBuf>,
    /// Settings JSON file overriding the physics defaults
    settings: Option<PathBuf>,
    /// Maximum number of frames to simulate at 60 Hz
    #[arg(default_value_t = DEFAULT_FRAMES)]
    frames: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    log::info!("Planetoids (headless) starting...");

    if let Err(err) = run(&args) {
        log::error!("{}", err);
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> WaveResult<()> {
    let settings = match &args.settings {
        Some(path) => Settings::from_json(&read(path)?)?,
        None => Settings::default(),
    };
    let level = match &args.level {
        Some(path) => LevelData::from_json(&read(path)?)?,
        None => LevelData::generate(GENERATED_SEED, GENERATED_ASTEROIDS, &settings),
    };

    let mut state = WaveState::new(&level, settings)?;
    let mut shots = 0usize;
    let mut kills = 0usize;

    for frame in 0..args.frames {
        state.update(&autopilot(frame), FRAME_DT);

        for event in &state.events {
            match event {
                WaveEvent::ProjectileFired { .. } => shots += 1,
                WaveEvent::AsteroidDestroyed { .. } => kills += 1,
                _ => {}
            }
        }

        if !state.is_active() {
            break;
        }
    }

    let outcome = match state.phase() {
        WavePhase::Active => "still active",
        WavePhase::Won => "won",
        WavePhase::Lost => "lost",
    };
    println!(
        "wave {} after {} frames: {} shots, {} asteroids destroyed, {} remaining",
        outcome,
        state.frame,
        shots,
        kills,
        state.asteroids.len()
    );
    if state.banner().visible {
        println!("{}", state.banner().text);
    }

    Ok(())
}

/// Spin slowly, keep firing, nudge the throttle twice a second
fn autopilot(frame: u64) -> TickInput {
    TickInput {
        turn_left: true,
        turn_right: false,
        thrust: frame % 30 == 0,
        fire: true,
    }
}

fn read(path: &Path) -> WaveResult<String> {
    log::info!("Loading {}", path.display());
    Ok(std::fs::read_to_string(path)?)
}
