//! Saving from the menu, restoring at boot, and falling back on bad data.

use crate::mock_hw::{RecordingSink, Session};

use pocketpet::adapters::save_store::MemorySaveStore;
use pocketpet::adapters::time::SimClock;
use pocketpet::app::events::AppEvent;
use pocketpet::app::runner;
use pocketpet::app::service::Engine;
use pocketpet::character::NeedKind;
use pocketpet::config::GameConfig;
use pocketpet::error::SaveError;
use pocketpet::input::ButtonId;
use pocketpet::save;

/// Open the main menu and move the cursor to entry `index`.
fn main_menu_entry(s: &mut Session, index: usize) {
    s.hold(ButtonId::Menu, 600);
    for _ in 0..index {
        s.tap(ButtonId::Down);
    }
}

#[test]
fn save_game_entry_writes_a_restorable_record() {
    let mut s = Session::new();
    s.tap(ButtonId::Menu);
    s.tap(ButtonId::A); // "Give pets"
    let affection = s.engine.character().need_milli(NeedKind::Affection);

    main_menu_entry(&mut s, 6);
    s.tap(ButtonId::A); // "Save game"
    assert_eq!(s.store.writes(), 1);
    assert!(s.engine.is_running());

    let bytes = s.store.record().unwrap().to_vec();
    let saved = save::deserialize(&bytes).unwrap();
    // Written on the tick that accepted A; the tap idles a little after.
    let live_age = s.engine.character().age_ms();
    assert!(saved.age_ms() <= live_age);
    assert!(live_age - saved.age_ms() <= 150);

    // Boot a second engine from the same store.
    let restored = Session::with(GameConfig::default(), MemorySaveStore::with_record(bytes));
    assert!(restored.sink.contains(&AppEvent::Started {
        scene: pocketpet::scene::SceneId::MainView,
        mood: pocketpet::character::Mood::Happy,
        restored: true,
    }));
    assert_eq!(restored.engine.character().last_updated_ms(), 0);
    assert!(restored.engine.character().need_milli(NeedKind::Affection) <= affection);
    assert!(restored.engine.character().need_milli(NeedKind::Affection) > 80_000);
}

#[test]
fn corrupt_save_falls_back_to_a_fresh_pet() {
    let s = Session::with(
        GameConfig::default(),
        MemorySaveStore::with_record(b"PPET\x01\xff".to_vec()),
    );
    assert_eq!(
        s.sink.events.first(),
        Some(&AppEvent::SaveFallback(SaveError::Decode))
    );
    assert_eq!(s.engine.character().need(NeedKind::Fun), 80);
    assert!(s.engine.is_running());
}

#[test]
fn unknown_version_falls_back() {
    let pet = Session::new().engine.character().clone();
    let mut bytes = save::serialize(&pet);
    bytes[4] = 7;
    let s = Session::with(GameConfig::default(), MemorySaveStore::with_record(bytes));
    assert!(s.sink.contains(&AppEvent::SaveFallback(SaveError::UnsupportedVersion(7))));
}

#[test]
fn power_off_entry_saves_and_stops_the_loop() {
    let mut s = Session::new();
    main_menu_entry(&mut s, 7);
    s.tap(ButtonId::A); // "Power off"
    assert!(s.engine.is_running());
    assert!(s.hw.last_frame.contains_text("Power off?"));
    s.tap(ButtonId::A); // "[A]Yes"

    assert!(!s.engine.is_running());
    assert_eq!(s.store.writes(), 1);
    assert_eq!(s.sink.events.last(), Some(&AppEvent::PowerOff));

    let frames = s.hw.frames;
    s.idle(1000);
    assert_eq!(s.hw.frames, frames);
}

#[test]
fn runner_saves_on_teardown() {
    let mut store = MemorySaveStore::new();
    let mut sink = RecordingSink::default();
    let mut hw = crate::mock_hw::MockHardware::default();
    let mut clock = SimClock::default();

    let mut engine = Engine::boot(GameConfig::default(), &mut store, &mut sink, 0);
    runner::run_for(&mut engine, &mut clock, &mut hw, &mut store, &mut sink, 100).unwrap();

    assert_eq!(engine.tick_count(), 100);
    assert_eq!(hw.frames, 100);
    assert!(!engine.is_running());
    assert_eq!(store.writes(), 1);
    // 100 ticks of 50 ms.
    assert_eq!(engine.character().age_ms(), 5000);
}
