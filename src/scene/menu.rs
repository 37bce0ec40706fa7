//! List menus: the pet context menu, the main menu and their submenus.
//!
//! A menu shows four 16 px rows and scrolls to keep the cursor visible.
//! Up/Left step back and Down/Right step forward, wrapping at the ends of
//! the list.  Entries that carry a confirmation prompt ask before acting:
//! A accepts, any other press dismisses the prompt (B closes the menu).

use super::outside::{self, Location};
use super::{MinigameKind, Scene, SceneContext, Transition};
use crate::app::commands::AppCommand;
use crate::character::actions::ActionKind;
use crate::input::{ButtonId, InputEvent};
use crate::render::{DISPLAY_WIDTH, Frame};
use crate::scene::minigame::Minigame;
use crate::scene::settings::SettingsPanel;
use crate::scene::stats::StatsView;

pub const VISIBLE_ROWS: u8 = 4;
pub const ROW_HEIGHT: i16 = 16;

/// Which family a menu belongs to; decides how the Menu button behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    /// Pet interactions, opened from the main view.
    Context,
    /// System menu, opened with a long Menu press.
    Main,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPage {
    Care,
    Snacks,
    Toys,
    Main,
    Minigames,
    Outdoors,
    OutdoorToys,
}

/// What selecting an entry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Care(ActionKind),
    Open(MenuPage),
    Stats,
    Settings,
    Play(MinigameKind),
    Travel(Location),
    Command(AppCommand),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub action: MenuAction,
    /// Question shown before the action runs.
    pub confirm: Option<&'static str>,
}

const fn entry(label: &'static str, action: MenuAction) -> MenuEntry {
    MenuEntry {
        label,
        action,
        confirm: None,
    }
}

const fn confirmed(label: &'static str, action: MenuAction, question: &'static str) -> MenuEntry {
    MenuEntry {
        label,
        action,
        confirm: Some(question),
    }
}

static CARE: [MenuEntry; 6] = [
    entry("Give pets", MenuAction::Care(ActionKind::Pet)),
    entry("Give kiss", MenuAction::Care(ActionKind::Kiss)),
    entry("Snacks >", MenuAction::Open(MenuPage::Snacks)),
    entry("Toys >", MenuAction::Open(MenuPage::Toys)),
    entry("Nap time", MenuAction::Care(ActionKind::Rest)),
    entry("Bath", MenuAction::Care(ActionKind::Clean)),
];

static SNACKS: [MenuEntry; 2] = [
    entry("Treat", MenuAction::Care(ActionKind::Treat)),
    entry("Kibble", MenuAction::Care(ActionKind::Feed)),
];

static TOYS: [MenuEntry; 3] = [
    entry("Feather", MenuAction::Care(ActionKind::Play)),
    entry("Yarn ball", MenuAction::Care(ActionKind::Play)),
    entry("Laser", MenuAction::Care(ActionKind::Play)),
];

static MAIN: [MenuEntry; 8] = [
    entry("Feed", MenuAction::Care(ActionKind::Feed)),
    entry("Pet stats", MenuAction::Stats),
    entry("Minigames >", MenuAction::Open(MenuPage::Minigames)),
    entry("Settings", MenuAction::Settings),
    entry("Go outside", MenuAction::Travel(Location::Outside)),
    entry("Go inside", MenuAction::Travel(Location::Inside)),
    entry("Save game", MenuAction::Command(AppCommand::SaveGame)),
    confirmed("Power off", MenuAction::Command(AppCommand::PowerOff), "Power off?"),
];

static MINIGAMES: [MenuEntry; 2] = [
    entry("Tic-tac-toe", MenuAction::Play(MinigameKind::TicTacToe)),
    entry("Zoomies", MenuAction::Play(MinigameKind::Zoomies)),
];

static OUTDOORS: [MenuEntry; 5] = [
    entry("Give pets", MenuAction::Care(ActionKind::Pet)),
    entry("Point at bird", MenuAction::Care(ActionKind::Watch)),
    entry("Throw stick", MenuAction::Care(ActionKind::Play)),
    entry("Give treat", MenuAction::Care(ActionKind::Treat)),
    entry("Toys >", MenuAction::Open(MenuPage::OutdoorToys)),
];

/// Only some toys work outside.
static OUTDOOR_TOYS: [MenuEntry; 2] = [
    entry("Feather", MenuAction::Care(ActionKind::Play)),
    entry("Laser", MenuAction::Care(ActionKind::Play)),
];

impl MenuPage {
    pub fn entries(self) -> &'static [MenuEntry] {
        match self {
            Self::Care => &CARE,
            Self::Snacks => &SNACKS,
            Self::Toys => &TOYS,
            Self::Main => &MAIN,
            Self::Minigames => &MINIGAMES,
            Self::Outdoors => &OUTDOORS,
            Self::OutdoorToys => &OUTDOOR_TOYS,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Care => "Pet",
            Self::Snacks => "Snacks",
            Self::Toys => "Toys",
            Self::Main => "Menu",
            Self::Minigames => "Games",
            Self::Outdoors => "Yard",
            Self::OutdoorToys => "Toys",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    kind: MenuKind,
    page: MenuPage,
    cursor: u8,
    scroll: u8,
    /// Outcome of the last care action, shown next to its row.
    feedback: Option<bool>,
    /// The selected entry is waiting for a yes.
    confirming: bool,
}

impl Menu {
    pub fn new(kind: MenuKind, page: MenuPage) -> Self {
        Self {
            kind,
            page,
            cursor: 0,
            scroll: 0,
            feedback: None,
            confirming: false,
        }
    }

    pub fn into_scene(self) -> Scene {
        match self.kind {
            MenuKind::Context => Scene::ContextMenu(self),
            MenuKind::Main => Scene::MainMenu(self),
        }
    }

    pub fn page(&self) -> MenuPage {
        self.page
    }

    pub fn cursor(&self) -> u8 {
        self.cursor
    }

    pub fn selected(&self) -> &'static MenuEntry {
        &self.page.entries()[usize::from(self.cursor)]
    }

    pub fn is_confirming(&self) -> bool {
        self.confirming
    }

    pub fn handle_input(&mut self, event: &InputEvent, ctx: &mut SceneContext<'_>) -> Transition {
        let InputEvent::ShortPress(button) = *event else {
            return Transition::None;
        };
        if self.confirming {
            self.confirming = false;
            return match button {
                ButtonId::A => self.run(ctx),
                _ => Transition::None,
            };
        }
        match button {
            ButtonId::Up | ButtonId::Left => self.step(-1),
            ButtonId::Down | ButtonId::Right => self.step(1),
            ButtonId::A => return self.activate(ctx),
            ButtonId::Menu => {
                return match self.kind {
                    MenuKind::Context => Transition::Pop,
                    MenuKind::Main => Transition::Replace(Scene::context_menu()),
                };
            }
            ButtonId::B => {}
        }
        Transition::None
    }

    /// Move the cursor with wraparound and keep it inside the window.
    fn step(&mut self, delta: i8) {
        let len = self.page.entries().len() as i16;
        self.cursor = (i16::from(self.cursor) + i16::from(delta)).rem_euclid(len) as u8;
        self.feedback = None;

        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + VISIBLE_ROWS {
            self.scroll = self.cursor + 1 - VISIBLE_ROWS;
        }
    }

    fn activate(&mut self, ctx: &mut SceneContext<'_>) -> Transition {
        if self.selected().confirm.is_some() {
            self.confirming = true;
            return Transition::None;
        }
        self.run(ctx)
    }

    fn run(&mut self, ctx: &mut SceneContext<'_>) -> Transition {
        match self.selected().action {
            MenuAction::Care(action) => {
                self.feedback = Some(ctx.perform(action));
                Transition::None
            }
            MenuAction::Open(page) => Transition::Push(Menu::new(self.kind, page).into_scene()),
            MenuAction::Stats => Transition::Push(Scene::Stats(StatsView::default())),
            MenuAction::Settings => Transition::Push(Scene::Settings(SettingsPanel::default())),
            MenuAction::Play(kind) => Transition::Push(Scene::Minigame(Minigame::new(kind))),
            MenuAction::Travel(location) => outside::scene_for(location, ctx),
            MenuAction::Command(command) => {
                ctx.command(command);
                Transition::None
            }
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        if let Some(question) = self.selected().confirm.filter(|_| self.confirming) {
            frame.rect(4, 12, 120, 40, false);
            frame.text(8, 22, question);
            frame.text(20, 42, "[A]Yes [B]No");
            return;
        }
        let entries = self.page.entries();
        let first = usize::from(self.scroll);
        let last = (first + usize::from(VISIBLE_ROWS)).min(entries.len());

        for (row, idx) in (first..last).enumerate() {
            let y = row as i16 * ROW_HEIGHT;
            frame.text(6, y + 4, entries[idx].label);
            if idx == usize::from(self.cursor) {
                frame.rect(0, y, DISPLAY_WIDTH as u8, ROW_HEIGHT as u8, false);
                match self.feedback {
                    Some(true) => frame.text(DISPLAY_WIDTH - 12, y + 4, "+"),
                    Some(false) => frame.text(DISPLAY_WIDTH - 12, y + 4, "x"),
                    None => {}
                }
            }
        }
        if entries.len() > usize::from(VISIBLE_ROWS) {
            // Scroll indicator on the right edge.
            let track = (ROW_HEIGHT * i16::from(VISIBLE_ROWS)) as usize;
            let thumb = track * usize::from(VISIBLE_ROWS) / entries.len();
            let top = track * first / entries.len();
            frame.rect(DISPLAY_WIDTH - 2, top as i16, 2, thumb as u8, true);
        }
    }
}
