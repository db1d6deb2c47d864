//! Gravity timing.

use crate::types::Speed;

/// Accumulates elapsed time and reports when a gravity step is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GravityClock {
    elapsed_ms: u32,
    speed: Speed,
}

impl GravityClock {
    pub fn new(speed: Speed) -> Self {
        Self {
            elapsed_ms: 0,
            speed,
        }
    }

    pub fn advance(&mut self, delta_ms: u32) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
    }

    /// Strictly greater than the interval; landing exactly on it is not yet due.
    pub fn due_for_tick(&self) -> bool {
        self.elapsed_ms > self.speed.interval_ms()
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }

    /// Change the interval. Elapsed time is kept.
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn interval_ms(&self) -> u32 {
        self.speed.interval_ms()
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }
}
