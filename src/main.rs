//! Tilewalk headless driver
//!
//! Runs the frame loop without a window: an autopilot stands in for the
//! keyboard and each frame's snapshot is logged instead of drawn.
//!
//! Usage: `tilewalk [MAP_FILE]`, with `TILEWALK_CONFIG` pointing at an
//! optional JSON config, `TILEWALK_BOUNDS` (`screen` or `level`) overriding its
//! movement bounds and `TILEWALK_FRAMES` / `TILEWALK_SEED` tuning the run.

use glam::IVec2;

use tilewalk::sim::{Autopilot, FrameEvent, GamePhase, GameState, level, tick};
use tilewalk::{EngineConfig, MovementBounds, Result};

const DEFAULT_FRAMES: u64 = 600;
const DEFAULT_SEED: u64 = 12345;

fn env_u64(name: &str, default: u64) -> u64 {
    match std::env::var(name) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            log::warn!("Ignoring {name}={value:?}, using {default}");
            default
        }),
        Err(_) => default,
    }
}

fn run() -> Result<()> {
    let mut config = match std::env::var("TILEWALK_CONFIG") {
        Ok(path) => EngineConfig::load(path)?,
        Err(_) => EngineConfig::default(),
    };
    if let Ok(value) = std::env::var("TILEWALK_BOUNDS") {
        match MovementBounds::from_str(&value) {
            Some(bounds) => config.bounds = bounds,
            None => log::warn!("Ignoring TILEWALK_BOUNDS={value:?}, expected screen or level"),
        }
    }
    config.validate()?;
    log::info!("Movement bounds: {}", config.bounds.as_str());

    let grid = match std::env::args().nth(1) {
        Some(path) => level::load_map(path, &config)?,
        None => {
            log::info!("No map given, using walled level");
            level::walled(&config)?
        }
    };

    let mut state = GameState::with_fallback_spawn(config, grid, IVec2::ZERO)?;
    let frames = env_u64("TILEWALK_FRAMES", DEFAULT_FRAMES);
    let seed = env_u64("TILEWALK_SEED", DEFAULT_SEED);
    let mut pilot = Autopilot::new(seed);
    log::info!("Running {frames} frames with autopilot seed {seed}");

    while state.phase == GamePhase::Playing {
        let mut events = pilot.next_events();
        if state.frame + 1 >= frames {
            events.extend(pilot.release_all());
            events.push(FrameEvent::Quit);
        }
        tick(&mut state, &events);

        if state.frame % 60 == 0 && state.phase == GamePhase::Playing {
            let view = state.view();
            log::info!(
                "frame {}: dot ({}, {}) camera ({}, {}) visible tiles {}",
                state.frame,
                state.dot.pos.x,
                state.dot.pos.y,
                view.camera.x,
                view.camera.y,
                view.tiles.len()
            );
        }
    }

    let view = state.view();
    log::info!(
        "Stopped after {} frames at ({}, {}), camera ({}, {})",
        state.frame,
        state.dot.pos.x,
        state.dot.pos.y,
        view.camera.x,
        view.camera.y
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Tilewalk (headless) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
