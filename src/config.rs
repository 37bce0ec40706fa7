//! Game configuration parameters
//!
//! Every tunable of the engine in one serde-friendly struct.  The
//! simulator reads overrides from a JSON file; device builds use the
//! compiled-in defaults.

use serde::{Deserialize, Serialize};

use crate::character::actions::ActionTable;
use crate::character::{MoodThresholds, NEED_MAX, PerNeed};
use crate::error::{Error, Result};

/// Largest world edge; leaves room for a full pan step in `i16` screen maths.
pub const MAX_WORLD_PX: u16 = 32_000;

/// Core game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // --- Loop ---
    /// Main loop period (milliseconds)
    pub tick_period_ms: u32,

    // --- Input ---
    /// Consecutive identical samples before a level change is accepted
    pub debounce_ticks: u8,
    /// Hold duration after which a press becomes a long press (milliseconds)
    pub long_press_threshold_ms: u32,

    // --- Character ---
    /// Need decay in points per minute
    pub decay_per_minute: PerNeed<f32>,
    /// Starting value of every need for a new pet (points)
    pub initial_need: u8,
    pub mood: MoodThresholds,
    pub actions: ActionTable,

    // --- Scenes ---
    /// Camera movement per directional press (pixels)
    pub pan_step_px: u8,
    /// Size of the pannable world behind the main view (pixels)
    pub world_width: u16,
    pub world_height: u16,
    /// Delay before the pet answers a tic-tac-toe move (milliseconds)
    pub pet_think_ms: u32,
    /// Chance (percent) that the pet plays a random tic-tac-toe move
    pub pet_blunder_percent: u8,

    // --- Persistence ---
    /// Periodic save interval (seconds); 0 disables autosave
    pub autosave_interval_secs: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Loop
            tick_period_ms: 50, // 20 Hz

            // Input
            debounce_ticks: 2,
            long_press_threshold_ms: 500,

            // Character
            decay_per_minute: PerNeed {
                hunger: 0.5,
                energy: 0.3,
                affection: 0.4,
                fun: 0.6,
                hygiene: 0.2,
            },
            initial_need: 80,
            mood: MoodThresholds::default(),
            actions: ActionTable::default(),

            // Scenes
            pan_step_px: 4,
            world_width: 256,
            world_height: 64,
            pet_think_ms: 500,
            pet_blunder_percent: 5,

            // Persistence
            autosave_interval_secs: 300, // 5 min
        }
    }
}

impl GameConfig {
    /// Range-check every field.
    pub fn validate(&self) -> Result<()> {
        if self.tick_period_ms == 0 || self.tick_period_ms > 1000 {
            return Err(Error::Config("tick_period_ms out of range (1-1000)"));
        }
        if self.debounce_ticks == 0 || self.debounce_ticks > 10 {
            return Err(Error::Config("debounce_ticks out of range (1-10)"));
        }
        if self.long_press_threshold_ms < self.tick_period_ms * u32::from(self.debounce_ticks) {
            return Err(Error::Config("long_press_threshold_ms shorter than debounce window"));
        }
        if self.long_press_threshold_ms > 10_000 {
            return Err(Error::Config("long_press_threshold_ms out of range (<=10000)"));
        }
        for (_, rate) in self.decay_per_minute.iter() {
            if !rate.is_finite() || !(0.0..=100.0).contains(&rate) {
                return Err(Error::Config("decay_per_minute out of range (0-100)"));
            }
        }
        if self.initial_need > NEED_MAX {
            return Err(Error::Config("initial_need out of range (0-100)"));
        }
        let m = &self.mood;
        if !(m.critical < m.sad_below && m.sad_below <= m.happy_above && m.happy_above < NEED_MAX) {
            return Err(Error::Config("mood thresholds must satisfy critical < sad <= happy < 100"));
        }
        if self.pan_step_px == 0 {
            return Err(Error::Config("pan_step_px must be non-zero"));
        }
        if self.world_width < crate::render::DISPLAY_WIDTH as u16
            || self.world_height < crate::render::DISPLAY_HEIGHT as u16
        {
            return Err(Error::Config("world smaller than the display"));
        }
        if self.world_width > MAX_WORLD_PX || self.world_height > MAX_WORLD_PX {
            return Err(Error::Config("world larger than 32000 px"));
        }
        if self.pet_blunder_percent > 100 {
            return Err(Error::Config("pet_blunder_percent out of range (0-100)"));
        }
        Ok(())
    }
}
