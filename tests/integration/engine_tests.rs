//! Engine-level behaviour over long simulated runs.

use crate::mock_hw::Session;

use pocketpet::adapters::save_store::MemorySaveStore;
use pocketpet::app::events::AppEvent;
use pocketpet::character::{Mood, NeedKind, PerNeed};
use pocketpet::config::GameConfig;
use pocketpet::error::StorageError;
use pocketpet::scene::SceneId;

fn quiet_config() -> GameConfig {
    GameConfig {
        autosave_interval_secs: 0,
        ..GameConfig::default()
    }
}

/// Run idle ticks until `target_ms`.
fn run_to(s: &mut Session, target_ms: u64) {
    s.idle(target_ms - s.now_ms);
}

#[test]
fn needs_decay_through_every_mood_boundary() {
    let config = GameConfig {
        initial_need: 50,
        decay_per_minute: PerNeed::splat(1.0),
        ..quiet_config()
    };
    let mut s = Session::with(config, MemorySaveStore::new());
    let mood = |s: &Session| s.engine.character().mood(&s.engine.config().mood);
    assert_eq!(mood(&s), Mood::Neutral);

    // 10 minutes: every need at exactly 40, not below it.
    run_to(&mut s, 600_000);
    assert_eq!(s.engine.character().need_milli(NeedKind::Hunger), 40_000);
    assert_eq!(mood(&s), Mood::Neutral);

    // The first lost milli-point tips the average under 40.
    run_to(&mut s, 600_100);
    assert_eq!(s.engine.character().need_milli(NeedKind::Hunger), 39_999);
    assert_eq!(mood(&s), Mood::Sad);

    run_to(&mut s, 2_399_950);
    assert_eq!(mood(&s), Mood::Sad);
    run_to(&mut s, 2_400_000);
    assert_eq!(s.engine.character().need(NeedKind::Energy), 10);
    assert_eq!(mood(&s), Mood::Critical);

    run_to(&mut s, 3_600_000);
    for kind in NeedKind::ALL {
        assert_eq!(s.engine.character().need_milli(kind), 0);
    }

    let moods: Vec<_> = s
        .sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::MoodChanged { from, to } => Some((*from, *to)),
            _ => None,
        })
        .collect();
    assert_eq!(moods, [(Mood::Neutral, Mood::Sad), (Mood::Sad, Mood::Critical)]);
}

#[test]
fn age_tracks_simulated_time() {
    let mut s = Session::with(quiet_config(), MemorySaveStore::new());
    run_to(&mut s, 90_000);
    assert_eq!(s.engine.character().age_ms(), 90_000);
    assert_eq!(s.engine.character().last_updated_ms(), 90_000);
}

#[test]
fn autosave_runs_on_the_interval() {
    let config = GameConfig {
        autosave_interval_secs: 2,
        ..GameConfig::default()
    };
    let mut s = Session::with(config, MemorySaveStore::new());
    run_to(&mut s, 1950);
    assert_eq!(s.store.writes(), 0);
    run_to(&mut s, 2000);
    assert_eq!(s.store.writes(), 1);
    run_to(&mut s, 6000);
    assert_eq!(s.store.writes(), 3);
    assert!(s.sink.events.iter().any(|e| matches!(e, AppEvent::Saved { .. })));
}

#[test]
fn failing_store_is_reported_not_fatal() {
    let config = GameConfig {
        autosave_interval_secs: 1,
        ..GameConfig::default()
    };
    let mut s = Session::with(config, MemorySaveStore::new());
    s.store.set_failure(Some(StorageError::Full));
    run_to(&mut s, 3000);

    let failures = s
        .sink
        .events
        .iter()
        .filter(|e| **e == AppEvent::SaveFailed(StorageError::Full))
        .count();
    assert_eq!(failures, 3);
    assert!(s.engine.is_running());
    assert_eq!(s.top(), SceneId::MainView);
}

#[test]
fn started_event_comes_first() {
    let s = Session::new();
    assert_eq!(
        s.sink.events.first(),
        Some(&AppEvent::Started {
            scene: SceneId::MainView,
            mood: Mood::Happy,
            restored: false,
        })
    );
}
