//! Port traits: the hexagonal boundary between the game core and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Engine (domain)
//! ```
//!
//! Buttons, the display, the clock, save storage and event consumers are
//! all reached through these traits.  The [`Engine`](super::service::Engine)
//! takes them as generics at call sites, so the core never touches
//! hardware and every test can drive it with mocks.

use crate::error::StorageError;
use crate::input::RawLevels;
use crate::render::Frame;

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: buttons → domain)
// ───────────────────────────────────────────────────────────────

/// Raw, undebounced button levels.
pub trait InputPort {
    /// Sample every button once.  `now_ms` is the tick timestamp; real
    /// GPIO ignores it, scripted input uses it to pick the current step.
    fn read_levels(&mut self, now_ms: u64) -> RawLevels;
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → panel)
// ───────────────────────────────────────────────────────────────

pub trait DisplayPort {
    /// Blit one frame.  Called exactly once per tick.
    fn present(&mut self, frame: &Frame);
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic milliseconds since boot.
pub trait ClockPort {
    fn now_ms(&self) -> u64;

    /// Block until `deadline_ms`.  Returns immediately if it has passed.
    fn sleep_until(&mut self, deadline_ms: u64);
}

// ───────────────────────────────────────────────────────────────
// Save port (driven adapter: domain ↔ flash / disk)
// ───────────────────────────────────────────────────────────────

/// Storage for the single save record.
///
/// Writes MUST be atomic: after a power loss the previous record or the
/// new one is readable, never a mix.
pub trait SavePort {
    /// The stored record, or `None` when nothing has been saved yet.
    fn load(&mut self) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the stored record.
    fn store(&mut self, bytes: &[u8]) -> Result<(), StorageError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The engine emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log, test
/// recorder, buzzer).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
