//! Seeded input generator
//!
//! Wanders the dot around by holding one direction at a time, switching every
//! few frames. Same seed, same event stream.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::Direction;
use super::tick::FrameEvent;

/// Shortest and longest hold, in frames
const HOLD_FRAMES: std::ops::RangeInclusive<u32> = 4..=24;

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    held: Option<Direction>,
    frames_left: u32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            held: None,
            frames_left: 0,
        }
    }

    /// Direction currently held down
    pub fn held(&self) -> Option<Direction> {
        self.held
    }

    /// Input events for the next frame
    pub fn next_events(&mut self) -> Vec<FrameEvent> {
        if self.frames_left > 0 {
            self.frames_left -= 1;
            return Vec::new();
        }

        let mut events = Vec::with_capacity(2);
        if let Some(direction) = self.held.take() {
            events.push(FrameEvent::release(direction));
        }
        // One in five holds is a pause
        if self.rng.random_ratio(4, 5) {
            let direction = Direction::ALL[self.rng.random_range(0..Direction::ALL.len())];
            events.push(FrameEvent::press(direction));
            self.held = Some(direction);
        }
        self.frames_left = self.rng.random_range(HOLD_FRAMES);
        events
    }

    /// Release whatever is held
    pub fn release_all(&mut self) -> Vec<FrameEvent> {
        self.frames_left = 0;
        self.held.take().map(FrameEvent::release).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_events() {
        let mut a = Autopilot::new(7);
        let mut b = Autopilot::new(7);
        for _ in 0..200 {
            assert_eq!(a.next_events(), b.next_events());
        }
    }

    #[test]
    fn test_every_press_is_released_first() {
        let mut pilot = Autopilot::new(42);
        let mut held: Option<Direction> = None;
        for _ in 0..500 {
            for event in pilot.next_events() {
                match event {
                    FrameEvent::Key {
                        direction,
                        pressed: true,
                        ..
                    } => {
                        assert!(held.is_none());
                        held = Some(direction);
                    }
                    FrameEvent::Key {
                        direction,
                        pressed: false,
                        ..
                    } => {
                        assert_eq!(held.take(), Some(direction));
                    }
                    FrameEvent::Quit => unreachable!(),
                }
            }
            assert_eq!(held, pilot.held());
        }
        let released = pilot.release_all();
        assert_eq!(released.len(), usize::from(held.is_some()));
        assert!(pilot.held().is_none());
    }
}
