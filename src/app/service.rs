//! Game engine: the hexagonal core.
//!
//! [`Engine`] owns the input classifier, the scene navigator, the pet and
//! the shared profile.  All I/O flows through port traits injected at
//! call sites, so a whole play session can be driven from a test with a
//! fake clock and mock buttons.
//!
//! ```text
//!   InputPort ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!                 │            Engine             │
//!  DisplayPort ◀──│ Classifier · Navigator · Pet  │◀─▶ SavePort
//!                 └──────────────────────────────┘
//! ```
//!
//! One [`Engine::tick`] runs, in order: sample buttons, classify, decay
//! needs, route events through the navigator, update the top scene,
//! carry out queued commands, report a mood change, render and present.

use log::{error, info, warn};

use crate::character::{CharacterState, Mood};
use crate::config::GameConfig;
use crate::error::{Result, SaveError};
use crate::input::{InputClassifier, InputEvent};
use crate::render::{self, Frame, RenderView};
use crate::save;
use crate::scene::navigator::Navigator;
use crate::scene::{Outbox, Profile, SceneContext};

use super::commands::AppCommand;
use super::events::AppEvent;
use super::ports::{DisplayPort, EventSink, InputPort, SavePort};

// ───────────────────────────────────────────────────────────────
// Engine
// ───────────────────────────────────────────────────────────────

pub struct Engine {
    config: GameConfig,
    classifier: InputClassifier,
    navigator: Navigator,
    character: CharacterState,
    profile: Profile,
    outbox: Outbox,
    running: bool,
    last_mood: Mood,
    last_save_ms: u64,
    tick_count: u64,
}

impl Engine {
    /// Build an engine around an existing pet.
    ///
    /// Does **not** start the navigator; call [`start`](Self::start) next,
    /// or use [`boot`](Self::boot) which does both.
    pub fn new(config: GameConfig, character: CharacterState, now_ms: u64) -> Self {
        let last_mood = character.mood(&config.mood);
        Self {
            classifier: InputClassifier::new(&config),
            navigator: Navigator::new(&config),
            character,
            profile: Profile::default(),
            outbox: Outbox::default(),
            running: false,
            last_mood,
            last_save_ms: now_ms,
            tick_count: 0,
            config,
        }
    }

    /// Restore the pet from `store` (or hatch a new one) and start.
    pub fn boot(
        config: GameConfig,
        store: &mut impl SavePort,
        sink: &mut impl EventSink,
        now_ms: u64,
    ) -> Self {
        let stored = match store.load() {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Save store unreadable: {}", e);
                None
            }
        };
        let (character, fallback) = save::load_or_default(stored.as_deref(), &config, now_ms);

        let mut engine = Self::new(config, character, now_ms);
        match fallback {
            None | Some(SaveError::Missing) => {}
            Some(e) => sink.emit(&AppEvent::SaveFallback(e)),
        }
        engine.start(fallback.is_none(), sink, now_ms);
        engine
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Enter the root scene and report `Started`.
    pub fn start(&mut self, restored: bool, sink: &mut impl EventSink, now_ms: u64) {
        let mut ctx = SceneContext {
            character: &mut self.character,
            config: &self.config,
            profile: &mut self.profile,
            outbox: &mut self.outbox,
            now_ms,
        };
        self.navigator.start(&mut ctx);
        self.running = true;

        let mood = self.character.mood(&self.config.mood);
        self.last_mood = mood;
        info!("Engine started ({:?}, restored={})", mood, restored);
        sink.emit(&AppEvent::Started {
            scene: self.navigator.top_id(),
            mood,
            restored,
        });
        self.flush_events(sink);
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one tick at `now_ms`.
    ///
    /// The `hw` parameter satisfies **both** [`InputPort`] and
    /// [`DisplayPort`]; one board owns the buttons and the panel.
    ///
    /// Only a broken scene-stack invariant is returned as an error; the
    /// loop must stop on it.
    pub fn tick(
        &mut self,
        now_ms: u64,
        hw: &mut (impl InputPort + DisplayPort),
        store: &mut impl SavePort,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        if !self.running {
            return Ok(());
        }
        self.tick_count += 1;

        // 1. Sample and classify
        let levels = hw.read_levels(now_ms);
        let events = self.classifier.sample(&levels, now_ms);

        // 2. Decay before any action, so actions land on current needs
        self.character.tick(now_ms, &self.config);

        // 3. Route events, then let the top scene advance
        let routed = self.route(&events, now_ms);
        self.flush_events(sink);
        if let Err(e) = routed {
            error!("Tick {} aborted: {}", self.tick_count, e);
            return Err(e);
        }

        // 4. Commands queued by scenes
        for command in self.outbox.take_commands() {
            self.handle_command(command, store, sink, now_ms);
        }

        // 5. Mood
        let mood = self.character.mood(&self.config.mood);
        if mood != self.last_mood {
            info!("Mood {:?} -> {:?}", self.last_mood, mood);
            sink.emit(&AppEvent::MoodChanged {
                from: self.last_mood,
                to: mood,
            });
            self.last_mood = mood;
        }

        // 6. Autosave
        let interval_ms = u64::from(self.config.autosave_interval_secs) * 1000;
        if self.running && interval_ms > 0 && now_ms.saturating_sub(self.last_save_ms) >= interval_ms {
            info!("Autosave");
            self.save(store, sink, now_ms);
        }

        // 7. Render
        let frame = self.frame(now_ms);
        hw.present(&frame);
        Ok(())
    }

    fn route(&mut self, events: &[InputEvent], now_ms: u64) -> Result<()> {
        let mut ctx = SceneContext {
            character: &mut self.character,
            config: &self.config,
            profile: &mut self.profile,
            outbox: &mut self.outbox,
            now_ms,
        };
        for event in events {
            self.navigator.handle_event(event, &mut ctx)?;
        }
        self.navigator.update(&mut ctx)
    }

    // ── Command handling ──────────────────────────────────────

    /// Carry out a command, whether queued by a scene or sent from outside.
    pub fn handle_command(
        &mut self,
        command: AppCommand,
        store: &mut impl SavePort,
        sink: &mut impl EventSink,
        now_ms: u64,
    ) {
        match command {
            AppCommand::SaveGame => self.save(store, sink, now_ms),
            AppCommand::PowerOff => self.shutdown(store, sink, now_ms),
        }
    }

    /// Save and stop.  Further ticks are no-ops.
    pub fn shutdown(&mut self, store: &mut impl SavePort, sink: &mut impl EventSink, now_ms: u64) {
        if !self.running {
            return;
        }
        info!("Powering off");
        self.save(store, sink, now_ms);
        self.running = false;
        sink.emit(&AppEvent::PowerOff);
    }

    fn save(&mut self, store: &mut impl SavePort, sink: &mut impl EventSink, now_ms: u64) {
        self.character.tick(now_ms, &self.config);
        let bytes = save::serialize(&self.character);
        match store.store(&bytes) {
            Ok(()) => {
                info!("Saved {} bytes", bytes.len());
                sink.emit(&AppEvent::Saved { bytes: bytes.len() });
            }
            Err(e) => {
                warn!("Save failed: {}", e);
                sink.emit(&AppEvent::SaveFailed(e));
            }
        }
        // A failing store is retried at the next interval, not every tick.
        self.last_save_ms = now_ms;
    }

    fn flush_events(&mut self, sink: &mut impl EventSink) {
        for event in self.outbox.take_events() {
            sink.emit(&event);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Render the current top scene without presenting it.
    pub fn frame(&self, now_ms: u64) -> Frame {
        let view = RenderView {
            character: &self.character,
            config: &self.config,
            profile: &self.profile,
            now_ms,
        };
        render::render(&self.navigator, &view)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn character(&self) -> &CharacterState {
        &self.character
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn classifier(&self) -> &InputClassifier {
        &self.classifier
    }

    /// Ticks executed since start.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
