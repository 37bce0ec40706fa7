//! Seven-button input classifier.
//!
//! Owns one [`ButtonTracker`] per [`ButtonId`] and samples them in
//! [`ButtonId::ALL`] order, so the emitted event list is deterministic for
//! a given snapshot sequence.

use heapless::Vec;

use super::button::{ButtonState, ButtonTracker, MAX_EVENTS_PER_BUTTON};
use super::{ButtonId, InputEvent, RawLevels};
use crate::config::GameConfig;

/// Upper bound on the events one `sample` call can return.
pub const MAX_EVENTS_PER_SAMPLE: usize = 16;

const _: () = assert!(ButtonId::COUNT * MAX_EVENTS_PER_BUTTON <= MAX_EVENTS_PER_SAMPLE);

pub type EventBatch = Vec<InputEvent, MAX_EVENTS_PER_SAMPLE>;

pub struct InputClassifier {
    buttons: [ButtonTracker; ButtonId::COUNT],
}

impl InputClassifier {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            buttons: ButtonId::ALL.map(|id| {
                ButtonTracker::new(id, config.debounce_ticks, config.long_press_threshold_ms)
            }),
        }
    }

    /// Classify one snapshot of raw levels taken at `now_ms`.
    ///
    /// Never fails: any level sequence yields a well-defined, possibly
    /// empty, event list.
    pub fn sample(&mut self, levels: &RawLevels, now_ms: u64) -> EventBatch {
        let mut out = Vec::new();
        for tracker in &mut self.buttons {
            for event in tracker.sample(levels.get(tracker.id()), now_ms) {
                // Capacity is checked at compile time above.
                let _ = out.push(event);
            }
        }
        out
    }

    /// Debounced state of one button.
    pub fn state(&self, id: ButtonId) -> &ButtonState {
        self.buttons[id as usize].state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_are_independent() {
        let mut c = InputClassifier::new(&GameConfig::default());
        let both = RawLevels::pressed(&[ButtonId::Up, ButtonId::B]);
        assert!(c.sample(&both, 0).is_empty());
        let events = c.sample(&both, 50);
        assert_eq!(
            events.as_slice(),
            &[InputEvent::Pressed(ButtonId::Up), InputEvent::Pressed(ButtonId::B)]
        );
        assert!(c.state(ButtonId::Up).level());
        assert!(!c.state(ButtonId::A).level());
    }

    #[test]
    fn menu_held_600ms_gives_one_long_press() {
        let mut c = InputClassifier::new(&GameConfig::default());
        let menu = RawLevels::pressed(&[ButtonId::Menu]);
        let mut all = std::vec::Vec::new();
        let mut now = 0;
        for _ in 0..13 {
            all.extend(c.sample(&menu, now));
            now += 50;
        }
        for _ in 0..3 {
            all.extend(c.sample(&RawLevels::released(), now));
            now += 50;
        }
        let longs = all
            .iter()
            .filter(|e| matches!(e, InputEvent::LongPress(ButtonId::Menu)))
            .count();
        assert_eq!(longs, 1);
        assert!(!all.iter().any(|e| matches!(e, InputEvent::ShortPress(_))));
    }
}
