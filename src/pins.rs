//! GPIO pin assignments for the supported PocketPet boards.
//!
//! The game core never reads this module; only board bring-up code (and the
//! simulator, for logging) maps a [`BoardId`] to its wiring.  All buttons
//! are active-low with internal pull-ups.

use crate::input::ButtonId;

/// Supported hardware revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardId {
    /// ESP32-C6 dev board (SSD1306 on I²C).
    Esp32C6,
    /// ESP32-C3 SuperMini.
    Esp32C3,
}

/// Wiring of one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinMap {
    pub i2c_sda: u8,
    pub i2c_scl: u8,
    /// Indexed by `ButtonId as usize`.
    pub buttons: [u8; ButtonId::COUNT],
}

impl PinMap {
    pub fn button(&self, id: ButtonId) -> u8 {
        self.buttons[id as usize]
    }
}

// ---------------------------------------------------------------------------
// ESP32-C6
// ---------------------------------------------------------------------------

const ESP32_C6: PinMap = PinMap {
    i2c_sda: 4,
    i2c_scl: 7,
    // Up, Down, Left, Right, A, B, Menu
    buttons: [14, 18, 20, 19, 1, 0, 3],
};

// ---------------------------------------------------------------------------
// ESP32-C3
// ---------------------------------------------------------------------------

const ESP32_C3: PinMap = PinMap {
    i2c_sda: 6,
    i2c_scl: 7,
    buttons: [0, 1, 2, 3, 4, 5, 10],
};

impl BoardId {
    pub fn pins(self) -> &'static PinMap {
        match self {
            Self::Esp32C6 => &ESP32_C6,
            Self::Esp32C3 => &ESP32_C3,
        }
    }
}

// ---------------------------------------------------------------------------
// Display (SSD1306 over I²C)
// ---------------------------------------------------------------------------

pub const DISPLAY_I2C_ADDR: u8 = 0x3C;
pub const I2C_FREQ_HZ: u32 = 400_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pins_are_unique_per_board() {
        for board in [BoardId::Esp32C6, BoardId::Esp32C3] {
            let map = board.pins();
            let mut all: Vec<u8> = map.buttons.to_vec();
            all.push(map.i2c_sda);
            all.push(map.i2c_scl);
            let len = all.len();
            all.sort_unstable();
            all.dedup();
            assert_eq!(all.len(), len, "{board:?} has a pin conflict");
        }
    }

    #[test]
    fn menu_button_lookup() {
        assert_eq!(BoardId::Esp32C6.pins().button(ButtonId::Menu), 3);
        assert_eq!(BoardId::Esp32C3.pins().button(ButtonId::Menu), 10);
    }
}
