//! Outbound application events.
//!
//! The [`Engine`](super::service::Engine) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them: log to serial, record them in a
//! test, drive a buzzer.

use crate::character::Mood;
use crate::character::actions::ActionKind;
use crate::error::{ActionError, SaveError, StorageError};
use crate::scene::SceneId;
use crate::scene::minigame::{GameOutcome, MinigameKind};

/// Structured events emitted by the game core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The engine has started (carries the root scene and initial mood).
    Started { scene: SceneId, mood: Mood, restored: bool },

    /// The top of the scene stack changed.
    SceneChanged { from: SceneId, to: SceneId, depth: usize },

    /// A care action was applied to the pet.
    ActionApplied { action: ActionKind, mood: Mood },

    /// A care action was refused; the pet is unchanged.
    ActionRejected(ActionError),

    /// The derived mood changed since the previous tick.
    MoodChanged { from: Mood, to: Mood },

    /// A minigame round finished.
    GameFinished { game: MinigameKind, outcome: GameOutcome },

    /// The save record was written.
    Saved { bytes: usize },

    /// Writing the save record failed.
    SaveFailed(StorageError),

    /// A stored save could not be used; a fresh pet was created.
    SaveFallback(SaveError),

    /// The loop is about to stop.
    PowerOff,
}
