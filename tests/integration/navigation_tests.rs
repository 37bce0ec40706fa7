//! Scene navigation driven through real button timing.

use crate::mock_hw::Session;

use pocketpet::app::events::AppEvent;
use pocketpet::character::actions::ActionKind;
use pocketpet::character::{Mood, NeedKind};
use pocketpet::adapters::save_store::MemorySaveStore;
use pocketpet::config::GameConfig;
use pocketpet::error::{ActionError, ActionRefusal};
use pocketpet::input::ButtonId;
use pocketpet::scene::settings::TimeOfDay;
use pocketpet::scene::{Environment, Scene, SceneId};

// ── Boot, context menu, long press, feed ──────────────────────

#[test]
fn boot_menu_back_long_press_and_feed() {
    let mut s = Session::new();
    assert_eq!(s.stack(), [SceneId::MainView]);
    for kind in NeedKind::ALL {
        assert_eq!(s.engine.character().need(kind), 80);
    }

    s.tap(ButtonId::Menu);
    assert_eq!(s.stack(), [SceneId::MainView, SceneId::ContextMenu]);

    s.tap(ButtonId::B);
    assert_eq!(s.stack(), [SceneId::MainView]);

    s.hold(ButtonId::Menu, 600);
    assert_eq!(s.stack(), [SceneId::MainView, SceneId::MainMenu]);

    // "Feed" is the first main-menu entry.
    s.tap(ButtonId::A);
    assert_eq!(s.engine.character().need(NeedKind::Hunger), 100);
    assert!(s.sink.contains(&AppEvent::ActionApplied {
        action: ActionKind::Feed,
        mood: Mood::Happy,
    }));
    assert_eq!(s.top(), SceneId::MainMenu);
}

#[test]
fn long_press_collapses_a_deep_stack() {
    let mut s = Session::new();
    s.tap(ButtonId::Menu);
    s.tap(ButtonId::Down);
    s.tap(ButtonId::Down);
    s.tap(ButtonId::A); // "Snacks >"
    assert_eq!(
        s.stack(),
        [SceneId::MainView, SceneId::ContextMenu, SceneId::ContextMenu]
    );

    s.hold(ButtonId::Menu, 600);
    assert_eq!(s.stack(), [SceneId::MainView, SceneId::MainMenu]);
}

#[test]
fn held_button_yields_no_short_press() {
    let mut s = Session::new();
    // Held past the threshold: long press only, so the pet must not
    // start meowing on release.
    s.hold(ButtonId::A, 800);
    assert_eq!(s.stack(), [SceneId::MainView]);
    let Scene::MainView(view) = s.engine.navigator().root() else {
        panic!("root is not the main view");
    };
    assert!(!view.is_meowing());
}

#[test]
fn b_at_root_is_ignored() {
    let mut s = Session::new();
    s.tap(ButtonId::B);
    s.tap(ButtonId::B);
    assert_eq!(s.stack(), [SceneId::MainView]);
    assert!(s.sink.scene_changes().is_empty());
    assert_eq!(s.engine.navigator().transition_count(), 0);
}

#[test]
fn menu_in_main_menu_switches_to_context_menu() {
    let mut s = Session::new();
    s.hold(ButtonId::Menu, 600);
    s.tap(ButtonId::Menu);
    assert_eq!(s.stack(), [SceneId::MainView, SceneId::ContextMenu]);
    assert_eq!(
        s.sink.scene_changes().last(),
        Some(&(SceneId::MainMenu, SceneId::ContextMenu))
    );
}

#[test]
fn directional_presses_pan_the_camera() {
    let mut s = Session::new();
    s.tap(ButtonId::Right);
    s.tap(ButtonId::Right);
    s.tap(ButtonId::Down);
    let Scene::MainView(view) = s.engine.navigator().root() else {
        panic!("root is not the main view");
    };
    assert_eq!(view.camera(), (72, 0));
}

#[test]
fn stats_page_shows_need_bars() {
    let mut s = Session::new();
    s.hold(ButtonId::Menu, 600);
    s.tap(ButtonId::Down);
    s.tap(ButtonId::A); // "Pet stats"
    assert_eq!(s.top(), SceneId::Stats);
    assert!(s.hw.last_frame.contains_text("Fullness"));
    assert!(s.hw.last_frame.contains_text("Hygiene"));

    s.tap(ButtonId::Right);
    assert!(s.hw.last_frame.contains_text("Mood: Happy"));

    s.tap(ButtonId::B);
    assert_eq!(s.top(), SceneId::MainMenu);
}

#[test]
fn settings_are_committed_when_leaving() {
    let mut s = Session::new();
    s.hold(ButtonId::Menu, 600);
    for _ in 0..3 {
        s.tap(ButtonId::Down);
    }
    s.tap(ButtonId::A); // "Settings"
    assert_eq!(s.top(), SceneId::Settings);

    s.tap(ButtonId::Right); // Noon -> Afternoon
    assert_eq!(s.engine.profile().environment, Environment::default());

    s.tap(ButtonId::B);
    assert_eq!(s.top(), SceneId::MainMenu);
    assert_eq!(
        s.engine.profile().environment.time,
        TimeOfDay::Afternoon
    );
}

#[test]
fn tired_pet_refuses_to_play() {
    let config = GameConfig {
        initial_need: 5,
        ..GameConfig::default()
    };
    let mut s = Session::with(config, MemorySaveStore::new());
    s.tap(ButtonId::Menu);
    for _ in 0..3 {
        s.tap(ButtonId::Down);
    }
    s.tap(ButtonId::A); // "Toys >"
    s.tap(ButtonId::A); // "Feather"

    assert!(s.sink.contains(&AppEvent::ActionRejected(ActionError {
        action: ActionKind::Play,
        reason: ActionRefusal::NeedTooLow {
            need: NeedKind::Energy,
            required: 10,
        },
    })));
    assert!(s.engine.character().need(NeedKind::Fun) <= 5);
    assert_eq!(
        s.stack(),
        [SceneId::MainView, SceneId::ContextMenu, SceneId::ContextMenu]
    );
}

#[test]
fn every_tick_presents_the_top_scene() {
    let mut s = Session::new();
    s.idle(1000);
    assert_eq!(s.hw.frames, s.engine.tick_count());
    assert!(s.hw.last_frame.contains_text("Happy"));

    s.tap(ButtonId::Menu);
    assert!(s.hw.last_frame.contains_text("Give pets"));
    assert!(!s.hw.last_frame.contains_text("Happy"));
}

// ── Locations ─────────────────────────────────────────────────

#[test]
fn going_outside_and_back_in() {
    let mut s = Session::new();
    s.hold(ButtonId::Menu, 600);
    for _ in 0..4 {
        s.tap(ButtonId::Down);
    }
    s.tap(ButtonId::A); // "Go outside"
    assert_eq!(s.stack(), [SceneId::MainView, SceneId::Outside]);
    assert!(s.hw.last_frame.contains_text("Happy"));

    // The yard has its own care menu.
    s.tap(ButtonId::Menu);
    assert!(s.hw.last_frame.contains_text("Point at bird"));
    s.tap(ButtonId::Down);
    s.tap(ButtonId::A);
    assert!(s.sink.contains(&AppEvent::ActionApplied {
        action: ActionKind::Watch,
        mood: Mood::Happy,
    }));
    s.tap(ButtonId::Menu);
    assert_eq!(s.top(), SceneId::Outside);

    // B walks back in.
    s.tap(ButtonId::B);
    assert_eq!(s.stack(), [SceneId::MainView]);

    // So does the menu entry.
    s.hold(ButtonId::Menu, 600);
    for _ in 0..4 {
        s.tap(ButtonId::Down);
    }
    s.tap(ButtonId::A);
    assert_eq!(s.top(), SceneId::Outside);
    s.hold(ButtonId::Menu, 600);
    for _ in 0..5 {
        s.tap(ButtonId::Down);
    }
    s.tap(ButtonId::A); // "Go inside"
    assert_eq!(s.stack(), [SceneId::MainView]);
}
