//! Per-button debounce and gesture state machine.
//!
//! ## Debounce
//!
//! A counter tracks how many consecutive samples have disagreed with the
//! accepted level.  Once it reaches `debounce_ticks` the new level is
//! accepted; any sample agreeing with the accepted level resets it.  A
//! bounce shorter than the window therefore never reaches the gesture
//! layer.
//!
//! ## Gestures
//!
//! Only accepted (debounced) transitions drive gestures.  The long-press
//! check runs on every sample while held, so a press held across the
//! threshold fires exactly one `LongPress` no matter how the ticks fall.

use heapless::Vec;

use super::{ButtonId, InputEvent};

/// Maximum events one button can emit in a single sample.
pub const MAX_EVENTS_PER_BUTTON: usize = 2;

/// Debounced logical state of one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    level: bool,
    pressed_at: Option<u64>,
    long_fired: bool,
}

impl ButtonState {
    /// Debounced level, `true` = pressed.
    pub fn level(&self) -> bool {
        self.level
    }

    /// When the current press was accepted; `None` while released.
    pub fn pressed_at(&self) -> Option<u64> {
        self.pressed_at
    }

    /// Whether the current press has already produced its `LongPress`.
    pub fn long_fired(&self) -> bool {
        self.long_fired
    }
}

pub struct ButtonTracker {
    id: ButtonId,
    state: ButtonState,
    /// Consecutive samples disagreeing with `state.level`.
    pending: u8,
    debounce_ticks: u8,
    long_press_ms: u64,
}

impl ButtonTracker {
    pub fn new(id: ButtonId, debounce_ticks: u8, long_press_ms: u32) -> Self {
        Self {
            id,
            state: ButtonState::default(),
            pending: 0,
            debounce_ticks: debounce_ticks.max(1),
            long_press_ms: u64::from(long_press_ms),
        }
    }

    pub fn id(&self) -> ButtonId {
        self.id
    }

    pub fn state(&self) -> &ButtonState {
        &self.state
    }

    /// Feed one raw sample taken at `now_ms`.
    pub fn sample(&mut self, raw: bool, now_ms: u64) -> Vec<InputEvent, MAX_EVENTS_PER_BUTTON> {
        let mut out = Vec::new();

        if raw == self.state.level {
            self.pending = 0;
        } else {
            self.pending = self.pending.saturating_add(1);
            if self.pending >= self.debounce_ticks {
                self.pending = 0;
                self.accept(raw, now_ms, &mut out);
                return out;
            }
        }

        if self.state.level && !self.state.long_fired {
            let since = self.state.pressed_at.unwrap_or(now_ms);
            if now_ms.saturating_sub(since) >= self.long_press_ms {
                self.state.long_fired = true;
                let _ = out.push(InputEvent::LongPress(self.id));
            }
        }
        out
    }

    fn accept(&mut self, pressed: bool, now_ms: u64, out: &mut Vec<InputEvent, MAX_EVENTS_PER_BUTTON>) {
        if pressed {
            self.state = ButtonState {
                level: true,
                pressed_at: Some(now_ms),
                long_fired: false,
            };
            let _ = out.push(InputEvent::Pressed(self.id));
            return;
        }

        let held_ms = self
            .state
            .pressed_at
            .map_or(0, |since| now_ms.saturating_sub(since));
        if !self.state.long_fired {
            let _ = out.push(InputEvent::ShortPress(self.id));
        }
        let _ = out.push(InputEvent::Released {
            button: self.id,
            held_ms,
        });
        self.state = ButtonState::default();
    }
}
