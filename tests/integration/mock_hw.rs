//! Mock board and session harness for integration tests.
//!
//! [`MockHardware`] serves whatever button levels the test sets and keeps
//! the last presented frame.  [`Session`] wraps an [`Engine`] with the
//! mock board, an in-memory save store and a recording sink, and advances
//! a fake clock one 50 ms tick at a time.

use pocketpet::adapters::save_store::MemorySaveStore;
use pocketpet::app::events::AppEvent;
use pocketpet::app::ports::{DisplayPort, EventSink, InputPort};
use pocketpet::app::service::Engine;
use pocketpet::config::GameConfig;
use pocketpet::input::{ButtonId, RawLevels};
use pocketpet::render::Frame;
use pocketpet::scene::SceneId;

// ── MockHardware ──────────────────────────────────────────────

#[derive(Default)]
pub struct MockHardware {
    pub levels: RawLevels,
    pub last_frame: Frame,
    pub frames: u64,
}

impl InputPort for MockHardware {
    fn read_levels(&mut self, _now_ms: u64) -> RawLevels {
        self.levels
    }
}

impl DisplayPort for MockHardware {
    fn present(&mut self, frame: &Frame) {
        self.last_frame = frame.clone();
        self.frames += 1;
    }
}

// ── Recording event sink ──────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn contains(&self, event: &AppEvent) -> bool {
        self.events.contains(event)
    }

    pub fn scene_changes(&self) -> Vec<(SceneId, SceneId)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::SceneChanged { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}

// ── Session ───────────────────────────────────────────────────

pub const TICK_MS: u64 = 50;

pub struct Session {
    pub engine: Engine,
    pub hw: MockHardware,
    pub store: MemorySaveStore,
    pub sink: RecordingSink,
    pub now_ms: u64,
}

#[allow(dead_code)]
impl Session {
    pub fn new() -> Self {
        Self::with(GameConfig::default(), MemorySaveStore::new())
    }

    pub fn with(config: GameConfig, mut store: MemorySaveStore) -> Self {
        let mut sink = RecordingSink::default();
        let engine = Engine::boot(config, &mut store, &mut sink, 0);
        Self {
            engine,
            hw: MockHardware::default(),
            store,
            sink,
            now_ms: 0,
        }
    }

    /// Advance one tick with the current levels.
    pub fn tick(&mut self) {
        self.now_ms += TICK_MS;
        self.engine
            .tick(self.now_ms, &mut self.hw, &mut self.store, &mut self.sink)
            .expect("tick failed");
    }

    pub fn ticks(&mut self, n: u64) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// Run with all buttons released for `ms`.
    pub fn idle(&mut self, ms: u64) {
        self.hw.levels = RawLevels::released();
        self.ticks(ms / TICK_MS);
    }

    /// Hold `button` for `ms`, then release it and let the release settle.
    pub fn hold(&mut self, button: ButtonId, ms: u64) {
        self.hw.levels = RawLevels::pressed(&[button]);
        self.ticks(ms / TICK_MS);
        self.idle(3 * TICK_MS);
    }

    /// A short press (150 ms).
    pub fn tap(&mut self, button: ButtonId) {
        self.hold(button, 3 * TICK_MS);
    }

    pub fn top(&self) -> SceneId {
        self.engine.navigator().top_id()
    }

    pub fn stack(&self) -> Vec<SceneId> {
        self.engine.navigator().scene_ids().collect()
    }
}
