//! Clock adapters.
//!
//! - [`SystemClock`]: monotonic wall time from `std::time::Instant`,
//!   sleeping with `std::thread::sleep`.  Used on hosts and on targets
//!   with a std runtime.
//! - [`SimClock`]: a virtual clock that jumps straight to each deadline.
//!   The simulator and integration tests run hours of game time in
//!   milliseconds with it.

use std::time::{Duration, Instant};

use crate::app::ports::ClockPort;

pub struct SystemClock {
    start: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl ClockPort for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn sleep_until(&mut self, deadline_ms: u64) {
        let now = self.now_ms();
        if deadline_ms > now {
            std::thread::sleep(Duration::from_millis(deadline_ms - now));
        }
    }
}

/// Virtual time; `sleep_until` advances instantly.
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    now_ms: u64,
}

impl SimClock {
    pub fn starting_at(now_ms: u64) -> Self {
        Self { now_ms }
    }

    pub fn advance(&mut self, ms: u64) {
        self.now_ms = self.now_ms.saturating_add(ms);
    }
}

impl ClockPort for SimClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn sleep_until(&mut self, deadline_ms: u64) {
        self.now_ms = self.now_ms.max(deadline_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_clock_never_goes_back() {
        let mut clock = SimClock::starting_at(100);
        clock.sleep_until(50);
        assert_eq!(clock.now_ms(), 100);
        clock.sleep_until(150);
        clock.advance(10);
        assert_eq!(clock.now_ms(), 160);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let mut clock = SystemClock::new();
        let a = clock.now_ms();
        clock.sleep_until(a + 2);
        assert!(clock.now_ms() >= a + 2);
    }
}
