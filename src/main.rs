//! Asteroid Rush headless driver
//!
//! Runs a scripted session against the simulation core at a fixed 60 Hz
//! frame clock and prints the final frame snapshot as JSON. Rendering hosts
//! drive `sim::tick` the same way from their own frame callbacks.
//!
//! Usage: `asteroid-rush [tuning.json]`

use asteroid_rush::Tuning;
use asteroid_rush::sim::{FrameInput, FrameSnapshot, GameEvent, GamePhase, SimulationState, tick};

/// Host frame interval
const FRAME_DT: f32 = 1.0 / 60.0;
/// Stop after this many frames even if the ship survives
const MAX_FRAMES: u64 = 60 * 120;
/// Frames per sweep direction for the scripted turning
const SWEEP_FRAMES: u64 = 90;

fn main() {
    env_logger::init();
    log::info!("Asteroid Rush (headless) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load_or_default(path),
        None => Tuning::default(),
    };

    let seed = 0x5eed_u64;
    let mut state = SimulationState::with_tuning(seed, tuning);
    let mut input = FrameInput::default();
    let mut time = 0.0_f32;
    let mut frame = 0_u64;

    while frame < MAX_FRAMES && state.game_phase() != GamePhase::Faded {
        frame += 1;
        time += FRAME_DT;

        // Sweep left and right while holding fire
        let sweeping_left = (frame / SWEEP_FRAMES) % 2 == 0;
        input.turn_left = sweeping_left;
        input.turn_right = !sweeping_left;
        input.fire = true;

        tick(&mut state, &input, time, FRAME_DT);
        input.clear_triggers();

        for event in &state.events {
            match event {
                GameEvent::ShipHit { lives_left, .. } => {
                    log::info!("Frame {}: ship hit, {} lives left", frame, lives_left)
                }
                GameEvent::PhaseChanged { from, to } => {
                    log::info!("Frame {}: {:?} -> {:?}", frame, from, to)
                }
                _ => {}
            }
        }

        if frame % 600 == 0 {
            log::info!(
                "t={:.1}s score={} lives={} asteroids={} projectiles={}",
                time,
                state.ship.score,
                state.ship.lives,
                state.asteroids.count(),
                state.projectiles.count()
            );
        }
    }

    log::info!(
        "Session over after {} frames: score {}, phase {:?}",
        frame,
        state.ship.score,
        state.game_phase()
    );

    match serde_json::to_string_pretty(&FrameSnapshot::capture(&state)) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize final snapshot: {}", e),
    }
}
