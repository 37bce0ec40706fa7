//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing each application event as one
//! structured log line (serial console on the device, stderr in the
//! simulator).  A buzzer or telemetry adapter would implement the same
//! trait.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started {
                scene,
                mood,
                restored,
            } => {
                info!(
                    "START | scene={} mood={} restored={}",
                    scene.name(),
                    mood.label(),
                    restored
                );
            }
            AppEvent::SceneChanged { from, to, depth } => {
                info!("SCENE | {} -> {} (depth {})", from.name(), to.name(), depth);
            }
            AppEvent::ActionApplied { action, mood } => {
                info!("ACTION | {:?} ok, mood={}", action, mood.label());
            }
            AppEvent::ActionRejected(e) => {
                info!("ACTION | refused: {}", e);
            }
            AppEvent::MoodChanged { from, to } => {
                info!("MOOD | {} -> {}", from.label(), to.label());
            }
            AppEvent::GameFinished { game, outcome } => {
                info!("GAME | {} {:?}", game.label(), outcome);
            }
            AppEvent::Saved { bytes } => {
                info!("SAVE | {} bytes", bytes);
            }
            AppEvent::SaveFailed(e) => {
                warn!("SAVE | failed: {}", e);
            }
            AppEvent::SaveFallback(e) => {
                warn!("SAVE | unusable ({}), new pet", e);
            }
            AppEvent::PowerOff => {
                info!("POWER | off");
            }
        }
    }
}
