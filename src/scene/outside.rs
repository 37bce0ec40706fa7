//! The yard: a single-screen outdoor location.
//!
//! Reached from the main menu ("Go outside") and left with B or "Go
//! inside".  There is no camera here; directional presses walk the pet
//! around the screen instead.

use super::{Menu, MenuKind, MenuPage, Scene, SceneContext, Transition};
use crate::character::Mood;
use crate::config::GameConfig;
use crate::input::{ButtonId, InputEvent};
use crate::render::{DISPLAY_HEIGHT, DISPLAY_WIDTH, Frame, RenderView, SpriteId};

const SPRITE_SIZE: i16 = 16;
/// Highest the pet may walk, in screen pixels.
const HORIZON_Y: i16 = 28;
const FLOOR_Y: i16 = DISPLAY_HEIGHT - SPRITE_SIZE;
const TUFTS: [i16; 4] = [10, 35, 80, 110];

/// Where the pet is being looked after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Inside,
    Outside,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutsideView {
    pet_x: i16,
    pet_y: i16,
    step: i16,
}

impl OutsideView {
    /// Pet centred on the lawn.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pet_x: (DISPLAY_WIDTH - SPRITE_SIZE) / 2,
            pet_y: FLOOR_Y,
            step: i16::from(config.pan_step_px),
        }
    }

    /// Top-left corner of the pet sprite.
    pub fn pet_position(&self) -> (i16, i16) {
        (self.pet_x, self.pet_y)
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> Transition {
        let InputEvent::ShortPress(button) = *event else {
            return Transition::None;
        };
        match button {
            ButtonId::Menu => {
                return Transition::Push(Menu::new(MenuKind::Context, MenuPage::Outdoors).into_scene());
            }
            ButtonId::Left => self.walk(-self.step, 0),
            ButtonId::Right => self.walk(self.step, 0),
            ButtonId::Up => self.walk(0, -self.step),
            ButtonId::Down => self.walk(0, self.step),
            ButtonId::A | ButtonId::B => {}
        }
        Transition::None
    }

    fn walk(&mut self, dx: i16, dy: i16) {
        self.pet_x = self.pet_x.saturating_add(dx).clamp(0, DISPLAY_WIDTH - SPRITE_SIZE);
        self.pet_y = self.pet_y.saturating_add(dy).clamp(HORIZON_Y, FLOOR_Y);
    }

    pub fn render(&self, view: &RenderView<'_>, frame: &mut Frame) {
        let mood = view.character.mood(&view.config.mood);
        let sky = if view.profile.environment.time.is_night() {
            SpriteId::Moon
        } else {
            SpriteId::Sun
        };
        frame.bitmap(DISPLAY_WIDTH - SPRITE_SIZE - 2, 2, sky);

        for &x in &TUFTS {
            frame.rect(x - 2, DISPLAY_HEIGHT - 4, 5, 4, false);
        }
        frame.bitmap(8, FLOOR_Y, SpriteId::Planter);
        frame.bitmap(8, FLOOR_Y - SPRITE_SIZE, SpriteId::Plant);

        let sprite = match mood {
            Mood::Happy => SpriteId::PetHappy,
            Mood::Neutral => SpriteId::PetNeutral,
            Mood::Sad => SpriteId::PetSad,
            Mood::Critical => SpriteId::PetCritical,
        };
        frame.bitmap(self.pet_x, self.pet_y, sprite);

        frame.text(0, 0, mood.label());
    }
}

/// Scene for a location picked from the main menu.
pub fn scene_for(location: Location, ctx: &SceneContext<'_>) -> Transition {
    match location {
        // The main menu always sits directly on the root.
        Location::Inside => Transition::Pop,
        Location::Outside => Transition::Replace(Scene::Outside(OutsideView::new(ctx.config))),
    }
}
