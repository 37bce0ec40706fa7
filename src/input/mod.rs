//! Button input: identities, raw level snapshots and classified events.
//!
//! ## Pipeline
//!
//! ```text
//!  InputPort ──RawLevels──▶ InputClassifier ──InputEvent*──▶ Navigator
//!             (per tick)     7 × ButtonTracker
//! ```
//!
//! Every tick the engine reads one [`RawLevels`] snapshot and feeds it to
//! [`classifier::InputClassifier::sample`].  Each button runs its own
//! debounce and gesture state machine ([`button::ButtonTracker`]); there
//! is no cross-button logic at this layer.
//!
//! | Gesture     | Condition                               | Events                     |
//! |-------------|-----------------------------------------|----------------------------|
//! | Press       | level stable for `debounce_ticks`       | `Pressed`                  |
//! | Long press  | held >= `long_press_threshold_ms`       | `LongPress` (once)         |
//! | Short press | released before the long press fired    | `ShortPress`, `Released`   |
//! | Release     | released after a long press             | `Released`                 |

pub mod button;
pub mod classifier;

pub use button::ButtonState;
pub use classifier::InputClassifier;

use serde::{Deserialize, Serialize};

/// The seven physical buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ButtonId {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
    A = 4,
    B = 5,
    Menu = 6,
}

impl ButtonId {
    pub const COUNT: usize = 7;

    pub const ALL: [ButtonId; Self::COUNT] = [
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::A,
        Self::B,
        Self::Menu,
    ];
}

/// One sample of every button line, `true` = asserted (pressed).
///
/// Adapters translate electrical polarity before building this; the
/// classifier never sees active-low levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawLevels([bool; ButtonId::COUNT]);

impl RawLevels {
    pub const fn released() -> Self {
        Self([false; ButtonId::COUNT])
    }

    pub fn from_array(levels: [bool; ButtonId::COUNT]) -> Self {
        Self(levels)
    }

    /// Snapshot with exactly the given buttons asserted.
    pub fn pressed(buttons: &[ButtonId]) -> Self {
        let mut levels = Self::released();
        for &b in buttons {
            levels.set(b, true);
        }
        levels
    }

    pub fn get(&self, id: ButtonId) -> bool {
        self.0[id as usize]
    }

    pub fn set(&mut self, id: ButtonId, pressed: bool) {
        self.0[id as usize] = pressed;
    }
}

/// A classified button gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Pressed(ButtonId),
    /// Button released after `held_ms`.
    Released { button: ButtonId, held_ms: u64 },
    ShortPress(ButtonId),
    LongPress(ButtonId),
}

impl InputEvent {
    pub fn button(&self) -> ButtonId {
        match *self {
            Self::Pressed(b) | Self::ShortPress(b) | Self::LongPress(b) => b,
            Self::Released { button, .. } => button,
        }
    }
}
