//! Fuzz target: `InputClassifier::sample`
//!
//! Each input byte is one tick: bit `n` is the raw level of button `n`.
//! Asserts the classifier never panics and never reports both a short
//! and a long press for the same physical press.
//!
//! cargo fuzz run fuzz_classifier

#![no_main]

use libfuzzer_sys::fuzz_target;
use pocketpet::config::GameConfig;
use pocketpet::input::{ButtonId, InputClassifier, InputEvent, RawLevels};

fuzz_target!(|data: &[u8]| {
    let mut classifier = InputClassifier::new(&GameConfig::default());
    let mut gestures = [0u8; ButtonId::COUNT];

    for (tick, byte) in data.iter().enumerate() {
        let mut levels = RawLevels::released();
        for (bit, id) in ButtonId::ALL.into_iter().enumerate() {
            levels.set(id, byte & (1 << bit) != 0);
        }
        for event in classifier.sample(&levels, (tick as u64 + 1) * 50) {
            let b = event.button() as usize;
            match event {
                InputEvent::Pressed(_) => gestures[b] = 0,
                InputEvent::ShortPress(_) | InputEvent::LongPress(_) => {
                    gestures[b] += 1;
                    assert!(gestures[b] == 1, "two gestures for one press of {:?}", event.button());
                }
                InputEvent::Released { .. } => {}
            }
        }
    }
});
