//! Platform abstraction layer
//!
//! Handles everything the simulation must not touch directly:
//! - Held-key state and the quit signal
//! - Wall-clock time and frame pacing (the `Clock` seam)
//!
//! The SDL2 backend (window, renderer, font, keyboard, timer) is behind the
//! `sdl` feature.

#[cfg(feature = "sdl")]
pub mod sdl;

use crate::sim::TickInput;

/// Controls sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub up: bool,
    pub down: bool,
    /// Window closed / quit requested
    pub quit: bool,
}

impl Controls {
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            up: self.up,
            down: self.down,
        }
    }
}

/// Source of player input
pub trait Input {
    /// Drain pending window events and sample the keyboard
    fn poll(&mut self) -> Controls;
}

/// Millisecond clock with a blocking sleep
pub trait Clock {
    /// Milliseconds since some fixed start point
    fn now_ms(&mut self) -> u64;

    fn sleep_ms(&mut self, ms: u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_to_tick_input() {
        let controls = Controls {
            up: true,
            down: false,
            quit: true,
        };
        assert_eq!(controls.tick_input(), TickInput { up: true, down: false });
    }
}
