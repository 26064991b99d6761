//! Wall-time to gravity-tick conversion.
//!
//! The engine has no clock of its own. An embedder with a real event loop
//! measures elapsed time per frame, feeds it to a [`GravityClock`], and calls
//! `step()` once per due tick. Keeping time out of the engine keeps every
//! test and replay deterministic.

use std::time::Duration;

/// Accumulates elapsed time against a gravity delay and reports due ticks.
#[derive(Debug, Clone)]
pub struct GravityClock {
    delay: Duration,
    accumulated: Duration,
}

impl GravityClock {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay: clamp_delay(delay),
            accumulated: Duration::ZERO,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the tick interval, typically from the scoreboard's
    /// level-adjusted delay. Time already accumulated is kept.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = clamp_delay(delay);
    }

    /// Credit elapsed wall time and return how many gravity ticks fell due.
    /// A long stall yields several ticks at once; the remainder carries over.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;
        let mut due = 0;
        while self.accumulated >= self.delay {
            self.accumulated -= self.delay;
            due += 1;
        }
        due
    }

    /// Drop accumulated time, for game restarts or unpausing.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

// A zero delay would make `advance` loop forever.
fn clamp_delay(delay: Duration) -> Duration {
    delay.max(Duration::from_millis(1))
}
