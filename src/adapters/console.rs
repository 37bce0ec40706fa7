//! Host console adapters for the simulator.
//!
//! - [`ConsoleLogger`]: a `log` backend that writes `LEVEL target: msg`
//!   lines to stderr.
//! - [`FrameLogDisplay`]: a [`DisplayPort`] that keeps the last frame and
//!   logs the text of every frame that differs from the previous one.

use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record, debug};

use crate::app::ports::DisplayPort;
use crate::render::Frame;

pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl ConsoleLogger {
    /// Install as the global logger.  A second call only changes the level.
    pub fn init(level: LevelFilter) {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(level);
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                std::io::stderr().lock(),
                "{:<5} {}: {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

// ── Frame log ─────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct FrameLogDisplay {
    last: Frame,
    presented: u64,
    changes: u64,
}

impl FrameLogDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> &Frame {
        &self.last
    }

    /// Frames presented so far.
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// Frames that differed from their predecessor.
    pub fn changes(&self) -> u64 {
        self.changes
    }
}

impl DisplayPort for FrameLogDisplay {
    fn present(&mut self, frame: &Frame) {
        self.presented += 1;
        if *frame == self.last {
            return;
        }
        self.changes += 1;
        let texts: Vec<&str> = frame.texts().collect();
        debug!(
            "FRAME {} | {} primitives | {}",
            self.presented,
            frame.primitives().len(),
            texts.join(" | ")
        );
        self.last = frame.clone();
    }
}
