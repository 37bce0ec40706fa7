//! GPIO button adapter.
//!
//! ## Hardware
//!
//! Seven momentary switches, one per [`ButtonId`], wired active-low with
//! pull-ups (see [`crate::pins`] for the per-board GPIO numbers).  Pins
//! are polled once per tick; debouncing and gesture detection happen in
//! the core classifier, not here.

use embedded_hal::digital::InputPin;
use log::warn;

use crate::app::ports::InputPort;
use crate::input::{ButtonId, RawLevels};

/// Polls seven [`InputPin`]s, ordered as [`ButtonId::ALL`].
pub struct GpioButtons<P: InputPin> {
    pins: [P; ButtonId::COUNT],
    active_low: bool,
    read_errors: u32,
}

impl<P: InputPin> GpioButtons<P> {
    /// Buttons that pull the line low when pressed.
    pub fn active_low(pins: [P; ButtonId::COUNT]) -> Self {
        Self {
            pins,
            active_low: true,
            read_errors: 0,
        }
    }

    pub fn active_high(pins: [P; ButtonId::COUNT]) -> Self {
        Self {
            pins,
            active_low: false,
            read_errors: 0,
        }
    }

    /// Pin reads that failed; a failed read counts as released.
    pub fn read_errors(&self) -> u32 {
        self.read_errors
    }
}

impl<P: InputPin> InputPort for GpioButtons<P> {
    fn read_levels(&mut self, _now_ms: u64) -> RawLevels {
        let mut levels = RawLevels::released();
        for (id, pin) in ButtonId::ALL.into_iter().zip(self.pins.iter_mut()) {
            match pin.is_high() {
                Ok(high) => levels.set(id, high != self.active_low),
                Err(e) => {
                    if self.read_errors == 0 {
                        warn!("Button {:?} read failed: {:?}", id, e);
                    }
                    self.read_errors = self.read_errors.saturating_add(1);
                }
            }
        }
        levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    struct Line(bool);

    impl ErrorType for Line {
        type Error = Infallible;
    }

    impl InputPin for Line {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.0)
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.0)
        }
    }

    #[test]
    fn active_low_lines_are_inverted() {
        // Everything idle-high except A, which is held low.
        let lines = ButtonId::ALL.map(|id| Line(id != ButtonId::A));
        let mut buttons = GpioButtons::active_low(lines);
        assert_eq!(buttons.read_levels(0), RawLevels::pressed(&[ButtonId::A]));
        assert_eq!(buttons.read_errors(), 0);
    }

    #[test]
    fn active_high_lines_pass_through() {
        let lines = ButtonId::ALL.map(|id| Line(id == ButtonId::Menu));
        let mut buttons = GpioButtons::active_high(lines);
        assert_eq!(buttons.read_levels(0), RawLevels::pressed(&[ButtonId::Menu]));
    }
}
