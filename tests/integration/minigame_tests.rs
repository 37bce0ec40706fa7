//! Minigames reached through the menus and played tick by tick.

use crate::mock_hw::Session;

use pocketpet::app::events::AppEvent;
use pocketpet::character::actions::ActionKind;
use pocketpet::input::ButtonId;
use pocketpet::scene::minigame::tictactoe::Mark;
use pocketpet::scene::minigame::zoomies::RunState;
use pocketpet::scene::minigame::{GameOutcome, Minigame, MinigameKind};
use pocketpet::scene::{Scene, SceneId};

/// Main menu → "Minigames >" → entry `index`.
fn open_game(s: &mut Session, index: usize) {
    s.hold(ButtonId::Menu, 600);
    s.tap(ButtonId::Down);
    s.tap(ButtonId::Down);
    s.tap(ButtonId::A);
    for _ in 0..index {
        s.tap(ButtonId::Down);
    }
    s.tap(ButtonId::A);
    assert_eq!(s.top(), SceneId::Minigame);
}

fn game(s: &Session) -> &Minigame {
    match s.engine.navigator().top() {
        Scene::Minigame(g) => g,
        other => panic!("top is {:?}", other.id()),
    }
}

#[test]
fn tictactoe_pet_answers_after_thinking() {
    let mut s = Session::new();
    open_game(&mut s, 0);
    let Minigame::TicTacToe(ttt) = game(&s) else {
        panic!("wrong game");
    };
    assert!(ttt.board().iter().all(|m| *m == Mark::Empty));

    s.tap(ButtonId::A); // centre
    s.idle(600);
    let Minigame::TicTacToe(ttt) = game(&s) else {
        panic!("wrong game");
    };
    assert_eq!(ttt.board()[4], Mark::Player);
    assert_eq!(ttt.board().iter().filter(|m| **m == Mark::Pet).count(), 1);
    assert!(s.hw.last_frame.contains_text("You"));

    s.tap(ButtonId::B);
    assert_eq!(s.top(), SceneId::MainMenu);
}

#[test]
fn zoomies_run_ends_on_the_first_plant() {
    let mut s = Session::new();
    open_game(&mut s, 1);
    assert!(matches!(game(&s), Minigame::Zoomies(z) if z.state() == RunState::Ready));

    s.tap(ButtonId::A);
    assert!(matches!(game(&s), Minigame::Zoomies(z) if z.state() == RunState::Running));

    let mut waited = 0;
    while waited < 10_000 {
        s.tick();
        waited += 50;
        if let Minigame::Zoomies(z) = game(&s) {
            if z.state() != RunState::Running {
                break;
            }
        }
    }
    let Minigame::Zoomies(z) = game(&s) else {
        panic!("wrong game");
    };
    assert!(matches!(z.state(), RunState::Hit { new_best: true, .. }));
    assert!(z.score() > 0);
    assert_eq!(s.engine.profile().zoomies_best, z.score());
    assert!(s.sink.contains(&AppEvent::GameFinished {
        game: MinigameKind::Zoomies,
        outcome: GameOutcome::Score(z.score()),
    }));
    assert!(
        s.sink
            .events
            .iter()
            .any(|e| matches!(e, AppEvent::ActionApplied { action: ActionKind::Play, .. }))
    );
}
