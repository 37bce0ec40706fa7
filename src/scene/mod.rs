//! Scenes and the table that describes them.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  SCENE_TABLE                                             │
//! │  ┌─────────────┬───────────────┬──────────────┐          │
//! │  │ SceneId     │ on_enter      │ on_exit      │          │
//! │  ├─────────────┼───────────────┼──────────────┤          │
//! │  │ MainView    │ -             │ -            │          │
//! │  │ ContextMenu │ -             │ -            │          │
//! │  │ MainMenu    │ -             │ -            │          │
//! │  │ Stats       │ -             │ -            │          │
//! │  │ Settings    │ load draft    │ commit draft │          │
//! │  │ Minigame    │ seed + reset  │ log result   │          │
//! │  │ Outside     │ -             │ -            │          │
//! │  └─────────────┴───────────────┴──────────────┘          │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! [`Scene`] is a closed enum.  Input, update and render dispatch are an
//! explicit `match` per variant; lifecycle hooks come from the static
//! descriptor table.  Scenes own only their transient UI state; the pet
//! and the shared [`Profile`] are lent to them through [`SceneContext`]
//! for the duration of one call.

pub mod main_view;
pub mod menu;
pub mod minigame;
pub mod navigator;
pub mod outside;
pub mod settings;
pub mod stats;

use heapless::Vec;
use log::warn;

use crate::app::commands::AppCommand;
use crate::app::events::AppEvent;
use crate::character::CharacterState;
use crate::character::actions::ActionKind;
use crate::config::GameConfig;
use crate::error::Error;
use crate::input::InputEvent;
use crate::render::{Frame, RenderView};

pub use main_view::MainView;
pub use menu::{Menu, MenuKind, MenuPage};
pub use minigame::{Minigame, MinigameKind};
pub use outside::{Location, OutsideView};
pub use settings::{Environment, SettingsPanel};
pub use stats::StatsView;

// ---------------------------------------------------------------------------
// Scene identity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SceneId {
    MainView = 0,
    ContextMenu = 1,
    MainMenu = 2,
    Stats = 3,
    Settings = 4,
    Minigame = 5,
    Outside = 6,
}

impl SceneId {
    /// Total number of scene kinds, used to size the table.
    pub const COUNT: usize = 7;

    pub fn name(self) -> &'static str {
        SCENE_TABLE[self as usize].name
    }
}

// ---------------------------------------------------------------------------
// Descriptor table
// ---------------------------------------------------------------------------

/// Signature for `on_enter` and `on_exit` hooks.
pub type SceneHookFn = fn(&mut Scene, &mut SceneContext<'_>);

/// Static descriptor for one scene kind.
pub struct SceneDescriptor {
    pub id: SceneId,
    pub name: &'static str,
    /// Runs when the scene becomes top through a push or replace.
    pub on_enter: Option<SceneHookFn>,
    /// Runs when the scene is popped or replaced.
    pub on_exit: Option<SceneHookFn>,
}

/// Indexed by `SceneId as usize`.
pub static SCENE_TABLE: [SceneDescriptor; SceneId::COUNT] = [
    SceneDescriptor {
        id: SceneId::MainView,
        name: "MainView",
        on_enter: None,
        on_exit: None,
    },
    SceneDescriptor {
        id: SceneId::ContextMenu,
        name: "ContextMenu",
        on_enter: None,
        on_exit: None,
    },
    SceneDescriptor {
        id: SceneId::MainMenu,
        name: "MainMenu",
        on_enter: None,
        on_exit: None,
    },
    SceneDescriptor {
        id: SceneId::Stats,
        name: "Stats",
        on_enter: None,
        on_exit: None,
    },
    SceneDescriptor {
        id: SceneId::Settings,
        name: "Settings",
        on_enter: Some(settings::on_enter),
        on_exit: Some(settings::on_exit),
    },
    SceneDescriptor {
        id: SceneId::Minigame,
        name: "Minigame",
        on_enter: Some(minigame::on_enter),
        on_exit: Some(minigame::on_exit),
    },
    SceneDescriptor {
        id: SceneId::Outside,
        name: "Outside",
        on_enter: None,
        on_exit: None,
    },
];

// ---------------------------------------------------------------------------
// Shared profile (environment, minigame records)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub player: u16,
    pub pet: u16,
    pub draws: u16,
}

/// Non-pet state shared between scenes for the lifetime of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub environment: Environment,
    pub zoomies_best: u32,
    pub tictactoe: Scoreboard,
}

// ---------------------------------------------------------------------------
// Outbox: events and commands produced during one tick
// ---------------------------------------------------------------------------

pub const OUTBOX_EVENTS: usize = 16;
pub const OUTBOX_COMMANDS: usize = 4;

#[derive(Debug, Default)]
pub struct Outbox {
    events: Vec<AppEvent, OUTBOX_EVENTS>,
    commands: Vec<AppCommand, OUTBOX_COMMANDS>,
}

impl Outbox {
    pub fn event(&mut self, event: AppEvent) {
        if self.events.push(event).is_err() {
            warn!("Outbox full, dropping event {:?}", event);
        }
    }

    pub fn command(&mut self, command: AppCommand) {
        if self.commands.contains(&command) {
            return;
        }
        if self.commands.push(command).is_err() {
            warn!("Outbox full, dropping command {:?}", command);
        }
    }

    pub fn take_events(&mut self) -> Vec<AppEvent, OUTBOX_EVENTS> {
        core::mem::take(&mut self.events)
    }

    pub fn take_commands(&mut self) -> Vec<AppCommand, OUTBOX_COMMANDS> {
        core::mem::take(&mut self.commands)
    }
}

// ---------------------------------------------------------------------------
// SceneContext
// ---------------------------------------------------------------------------

/// Everything a scene may touch while handling input or updating.
pub struct SceneContext<'a> {
    pub character: &'a mut CharacterState,
    pub config: &'a GameConfig,
    pub profile: &'a mut Profile,
    pub outbox: &'a mut Outbox,
    pub now_ms: u64,
}

impl SceneContext<'_> {
    /// Apply a care action; refusals are logged and reported, never raised.
    pub fn perform(&mut self, action: ActionKind) -> bool {
        match self.character.apply_action(action, self.config, self.now_ms) {
            Ok(report) => {
                self.outbox.event(AppEvent::ActionApplied {
                    action,
                    mood: report.mood_after,
                });
                true
            }
            Err(Error::InvalidAction(e)) => {
                warn!("Action rejected: {}", e);
                self.outbox.event(AppEvent::ActionRejected(e));
                false
            }
            Err(e) => {
                warn!("Action {:?} failed: {}", action, e);
                false
            }
        }
    }

    pub fn command(&mut self, command: AppCommand) {
        self.outbox.command(command);
    }
}

// ---------------------------------------------------------------------------
// Transition
// ---------------------------------------------------------------------------

/// What the top scene asks the navigator to do after an input or update.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    None,
    Push(Scene),
    Pop,
    Replace(Scene),
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Scene {
    MainView(MainView),
    ContextMenu(Menu),
    MainMenu(Menu),
    Stats(StatsView),
    Settings(SettingsPanel),
    Minigame(Minigame),
    Outside(OutsideView),
}

impl Scene {
    pub fn context_menu() -> Self {
        Menu::new(MenuKind::Context, MenuPage::Care).into_scene()
    }

    pub fn main_menu() -> Self {
        Menu::new(MenuKind::Main, MenuPage::Main).into_scene()
    }

    pub fn id(&self) -> SceneId {
        match self {
            Self::MainView(_) => SceneId::MainView,
            Self::ContextMenu(_) => SceneId::ContextMenu,
            Self::MainMenu(_) => SceneId::MainMenu,
            Self::Stats(_) => SceneId::Stats,
            Self::Settings(_) => SceneId::Settings,
            Self::Minigame(_) => SceneId::Minigame,
            Self::Outside(_) => SceneId::Outside,
        }
    }

    pub fn descriptor(&self) -> &'static SceneDescriptor {
        &SCENE_TABLE[self.id() as usize]
    }

    pub fn handle_input(&mut self, event: &InputEvent, ctx: &mut SceneContext<'_>) -> Transition {
        match self {
            Self::MainView(s) => s.handle_input(event, ctx),
            Self::ContextMenu(m) | Self::MainMenu(m) => m.handle_input(event, ctx),
            Self::Stats(s) => s.handle_input(event),
            Self::Settings(s) => s.handle_input(event),
            Self::Minigame(g) => g.handle_input(event, ctx),
            Self::Outside(s) => s.handle_input(event),
        }
    }

    /// Per-tick update of the top scene.
    pub fn update(&mut self, ctx: &mut SceneContext<'_>) -> Transition {
        match self {
            Self::Minigame(g) => g.update(ctx),
            _ => Transition::None,
        }
    }

    pub fn render(&self, view: &RenderView<'_>, frame: &mut Frame) {
        match self {
            Self::MainView(s) => s.render(view, frame),
            Self::ContextMenu(m) | Self::MainMenu(m) => m.render(frame),
            Self::Stats(s) => s.render(view, frame),
            Self::Settings(s) => s.render(frame),
            Self::Minigame(g) => g.render(view, frame),
            Self::Outside(s) => s.render(view, frame),
        }
    }
}
