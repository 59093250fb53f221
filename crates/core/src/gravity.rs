//! Gravity clock - drives automatic ticks from elapsed time
//!
//! The engine itself has no notion of time. The host loop feeds this
//! accumulator with the milliseconds that passed each frame and calls
//! `GameState::tick` once per due interval.

use crate::types::DEFAULT_GRAVITY_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravityClock {
    interval_ms: u32,
    elapsed_ms: u32,
}

impl GravityClock {
    /// # Panics
    ///
    /// Panics if `interval_ms` is zero.
    pub fn new(interval_ms: u32) -> Self {
        assert!(interval_ms > 0, "gravity interval must be positive");
        Self {
            interval_ms,
            elapsed_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Time accumulated toward the next tick
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Milliseconds until the next tick is due
    pub fn remaining_ms(&self) -> u32 {
        self.interval_ms - self.elapsed_ms
    }

    /// Advance by `elapsed_ms` and return how many ticks became due.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let total = self.elapsed_ms as u64 + elapsed_ms as u64;
        let interval = self.interval_ms as u64;
        self.elapsed_ms = (total % interval) as u32;
        (total / interval) as u32
    }

    /// Start a fresh interval, so a full period elapses before the next tick.
    pub fn restart(&mut self) {
        self.elapsed_ms = 0;
    }
}

impl Default for GravityClock {
    fn default() -> Self {
        Self::new(DEFAULT_GRAVITY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_once_per_interval() {
        let mut clock = GravityClock::new(1000);
        assert_eq!(clock.advance(999), 0);
        assert_eq!(clock.advance(1), 1);
        assert_eq!(clock.elapsed_ms(), 0);
    }

    #[test]
    fn test_long_frame_yields_several_ticks() {
        let mut clock = GravityClock::new(100);
        assert_eq!(clock.advance(350), 3);
        assert_eq!(clock.remaining_ms(), 50);
    }

    #[test]
    fn test_restart_discards_partial_interval() {
        let mut clock = GravityClock::new(1000);
        clock.advance(900);
        clock.restart();
        assert_eq!(clock.advance(900), 0);
        assert_eq!(clock.advance(100), 1);
    }

    #[test]
    #[should_panic]
    fn test_zero_interval_panics() {
        let _ = GravityClock::new(0);
    }
}
