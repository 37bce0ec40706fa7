//! Board adapter: bridges one button source and one panel to the
//! engine's ports.
//!
//! [`Engine::tick`](crate::app::service::Engine::tick) takes a single
//! `hw` implementing both [`InputPort`] and [`DisplayPort`].  This pairs
//! any two adapters into that shape: GPIO buttons with a real panel on
//! the device, scripted input with a frame log in the simulator.

use crate::app::ports::{DisplayPort, InputPort};
use crate::input::RawLevels;
use crate::render::Frame;

pub struct HardwareAdapter<I, D> {
    input: I,
    display: D,
}

impl<I: InputPort, D: DisplayPort> HardwareAdapter<I, D> {
    pub fn new(input: I, display: D) -> Self {
        Self { input, display }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_parts(self) -> (I, D) {
        (self.input, self.display)
    }
}

// ── InputPort implementation ──────────────────────────────────

impl<I: InputPort, D> InputPort for HardwareAdapter<I, D> {
    fn read_levels(&mut self, now_ms: u64) -> RawLevels {
        self.input.read_levels(now_ms)
    }
}

// ── DisplayPort implementation ────────────────────────────────

impl<I, D: DisplayPort> DisplayPort for HardwareAdapter<I, D> {
    fn present(&mut self, frame: &Frame) {
        self.display.present(frame);
    }
}
