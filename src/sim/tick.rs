//! Frame step
//!
//! One call advances the simulation by exactly one frame: events drain
//! first, then the dot moves once, then the camera follows. Movement speed
//! is tied to how often this is called; there is no delta time.

use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::state::{Direction, GamePhase, GameState};

/// Input reaching the frame loop from the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameEvent {
    /// A direction key changed state. `repeat` marks auto-repeat key-downs.
    Key {
        direction: Direction,
        pressed: bool,
        repeat: bool,
    },
    /// Window closed or quit requested
    Quit,
}

impl FrameEvent {
    pub fn press(direction: Direction) -> Self {
        FrameEvent::Key {
            direction,
            pressed: true,
            repeat: false,
        }
    }

    pub fn release(direction: Direction) -> Self {
        FrameEvent::Key {
            direction,
            pressed: false,
            repeat: false,
        }
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, events: &[FrameEvent]) {
    if state.phase == GamePhase::Quit {
        return;
    }

    for event in events {
        match *event {
            FrameEvent::Quit => {
                log::info!("Quit requested at frame {}", state.frame);
                state.phase = GamePhase::Quit;
            }
            FrameEvent::Key { repeat: true, .. } => {}
            FrameEvent::Key {
                direction,
                pressed,
                repeat: false,
            } => state.dot.handle_input(direction, pressed, &state.config),
        }
    }
    if state.phase == GamePhase::Quit {
        return;
    }

    state.dot.step(&state.grid, &state.config);
    state.camera = Camera::recompute(&state.dot, &state.config);
    state.frame += 1;
}
