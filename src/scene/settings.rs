//! Environment settings: time of day, season, moon phase, weather.
//!
//! The panel edits a draft copy.  The draft is loaded from the profile on
//! enter and written back on exit, so B (or a long Menu press) both
//! commit.  Left/Right cycle the selected value with wraparound; Up/Down
//! move between rows and stop at the ends.

use log::info;

use super::{Scene, SceneContext, Transition};
use crate::input::{ButtonId, InputEvent};
use crate::render::{DISPLAY_WIDTH, Frame};

/// Step through `all` from `current`, wrapping at both ends.
fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let len = all.len();
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
    all[next]
}

macro_rules! cyclic_enum {
    ($name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            pub fn next(self) -> Self {
                cycle(Self::ALL, self, true)
            }

            pub fn prev(self) -> Self {
                cycle(Self::ALL, self, false)
            }
        }
    };
}

cyclic_enum!(TimeOfDay {
    Dawn => "Dawn",
    Morning => "Morning",
    Noon => "Noon",
    Afternoon => "Afternoon",
    Dusk => "Dusk",
    Evening => "Evening",
    Night => "Night",
    LateNight => "Late Night",
});

cyclic_enum!(Season {
    Spring => "Spring",
    Summer => "Summer",
    Fall => "Fall",
    Winter => "Winter",
});

cyclic_enum!(MoonPhase {
    New => "New",
    WaxingCrescent => "Wax Cres",
    FirstQuarter => "1st Qtr",
    WaxingGibbous => "Wax Gib",
    Full => "Full",
    WaningGibbous => "Wan Gib",
    LastQuarter => "3rd Qtr",
    WaningCrescent => "Wan Cres",
});

cyclic_enum!(Weather {
    Clear => "Clear",
    Cloudy => "Cloudy",
    Overcast => "Overcast",
    Rain => "Rain",
    Storm => "Storm",
    Snow => "Snow",
    Windy => "Windy",
});

impl TimeOfDay {
    pub fn is_night(self) -> bool {
        matches!(self, Self::Evening | Self::Night | Self::LateNight)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Environment {
    pub time: TimeOfDay,
    pub season: Season,
    pub moon: MoonPhase,
    pub weather: Weather,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            time: TimeOfDay::Noon,
            season: Season::Summer,
            moon: MoonPhase::Full,
            weather: Weather::Clear,
        }
    }
}

const ROWS: [&str; 4] = ["Time", "Season", "Moon", "Weather"];
const ROW_HEIGHT: i16 = 16;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPanel {
    draft: Environment,
    cursor: u8,
}

impl SettingsPanel {
    pub fn draft(&self) -> &Environment {
        &self.draft
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> Transition {
        let InputEvent::ShortPress(button) = *event else {
            return Transition::None;
        };
        match button {
            ButtonId::Up => self.cursor = self.cursor.saturating_sub(1),
            ButtonId::Down => self.cursor = (self.cursor + 1).min(ROWS.len() as u8 - 1),
            ButtonId::Left => self.adjust(false),
            ButtonId::Right => self.adjust(true),
            ButtonId::A | ButtonId::Menu => return Transition::Pop,
            ButtonId::B => {}
        }
        Transition::None
    }

    fn adjust(&mut self, forward: bool) {
        let d = &mut self.draft;
        match (self.cursor, forward) {
            (0, true) => d.time = d.time.next(),
            (0, false) => d.time = d.time.prev(),
            (1, true) => d.season = d.season.next(),
            (1, false) => d.season = d.season.prev(),
            (2, true) => d.moon = d.moon.next(),
            (2, false) => d.moon = d.moon.prev(),
            (_, true) => d.weather = d.weather.next(),
            (_, false) => d.weather = d.weather.prev(),
        }
    }

    fn value_label(&self, row: usize) -> &'static str {
        match row {
            0 => self.draft.time.label(),
            1 => self.draft.season.label(),
            2 => self.draft.moon.label(),
            _ => self.draft.weather.label(),
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        for (row, name) in ROWS.iter().enumerate() {
            let y = row as i16 * ROW_HEIGHT;
            let value = self.value_label(row);
            frame.text(2, y + 4, name);
            let value_x = DISPLAY_WIDTH - 12 - value.len() as i16 * 6;
            frame.text(value_x, y + 4, value);
            if row == usize::from(self.cursor) {
                frame.rect(0, y, DISPLAY_WIDTH as u8, ROW_HEIGHT as u8, false);
            }
        }
    }
}

/// Load the draft from the profile.
pub(super) fn on_enter(scene: &mut Scene, ctx: &mut SceneContext<'_>) {
    if let Scene::Settings(panel) = scene {
        panel.draft = ctx.profile.environment;
        panel.cursor = 0;
    }
}

/// Commit the draft to the profile.
pub(super) fn on_exit(scene: &mut Scene, ctx: &mut SceneContext<'_>) {
    if let Scene::Settings(panel) = scene {
        if ctx.profile.environment != panel.draft {
            info!(
                "Environment: {} / {} / {} / {}",
                panel.draft.time.label(),
                panel.draft.season.label(),
                panel.draft.moon.label(),
                panel.draft.weather.label()
            );
        }
        ctx.profile.environment = panel.draft;
    }
}
