//! Root scene: the pet in its world, seen through a panning camera.

use super::{Scene, SceneContext, Transition};
use crate::character::Mood;
use crate::config::GameConfig;
use crate::input::{ButtonId, InputEvent};
use crate::render::{DISPLAY_HEIGHT, DISPLAY_WIDTH, Frame, RenderView, SpriteId};
use crate::scene::settings::Weather;

/// Ground line, in screen pixels from the top.
const GROUND_Y: i16 = 56;
const SPRITE_SIZE: i16 = 16;

/// Scenery x positions in world pixels.
const TREES: [i16; 4] = [12, 70, 178, 228];
const BUSHES: [i16; 3] = [40, 132, 204];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainView {
    camera_x: i16,
    camera_y: i16,
    max_x: i16,
    max_y: i16,
    step: i16,
    meowing: bool,
}

impl MainView {
    /// Camera centred horizontally on the pet.
    pub fn new(config: &GameConfig) -> Self {
        let max_x = (world_extent(config.world_width) - DISPLAY_WIDTH).max(0);
        let max_y = (world_extent(config.world_height) - DISPLAY_HEIGHT).max(0);
        Self {
            camera_x: max_x / 2,
            camera_y: max_y,
            max_x,
            max_y,
            step: i16::from(config.pan_step_px),
            meowing: false,
        }
    }

    pub fn camera(&self) -> (i16, i16) {
        (self.camera_x, self.camera_y)
    }

    pub fn is_meowing(&self) -> bool {
        self.meowing
    }

    pub fn handle_input(&mut self, event: &InputEvent, _ctx: &mut SceneContext<'_>) -> Transition {
        let InputEvent::ShortPress(button) = *event else {
            return Transition::None;
        };
        match button {
            ButtonId::Menu => return Transition::Push(Scene::context_menu()),
            ButtonId::A => self.meowing = !self.meowing,
            ButtonId::Left => self.pan(-self.step, 0),
            ButtonId::Right => self.pan(self.step, 0),
            ButtonId::Up => self.pan(0, -self.step),
            ButtonId::Down => self.pan(0, self.step),
            ButtonId::B => {}
        }
        Transition::None
    }

    /// Move the camera, clamping at the world edges.
    fn pan(&mut self, dx: i16, dy: i16) {
        self.camera_x = self.camera_x.saturating_add(dx).clamp(0, self.max_x);
        self.camera_y = self.camera_y.saturating_add(dy).clamp(0, self.max_y);
    }

    pub fn render(&self, view: &RenderView<'_>, frame: &mut Frame) {
        let env = &view.profile.environment;
        let mood = view.character.mood(&view.config.mood);
        let oy = self.max_y - self.camera_y;

        // Sky
        let sky = if env.time.is_night() {
            SpriteId::Moon
        } else {
            SpriteId::Sun
        };
        frame.bitmap(DISPLAY_WIDTH - SPRITE_SIZE - 2, 2 + oy, sky);
        match env.weather {
            Weather::Clear | Weather::Windy => {}
            Weather::Cloudy | Weather::Overcast => frame.bitmap(40, 4 + oy, SpriteId::Cloud),
            Weather::Rain | Weather::Storm => {
                frame.bitmap(40, 4 + oy, SpriteId::Cloud);
                frame.bitmap(44, 20 + oy, SpriteId::Raindrop);
            }
            Weather::Snow => frame.bitmap(44, 20 + oy, SpriteId::Snowflake),
        }

        // Scenery
        for &x in &TREES {
            self.world_bitmap(frame, x, GROUND_Y - 2 * SPRITE_SIZE, SpriteId::Tree);
        }
        for &x in &BUSHES {
            self.world_bitmap(frame, x, GROUND_Y - SPRITE_SIZE, SpriteId::Bush);
        }
        frame.rect(0, GROUND_Y + oy, DISPLAY_WIDTH as u8, 1, true);

        // Pet
        let pet_x = self.max_x / 2 + DISPLAY_WIDTH / 2 - SPRITE_SIZE / 2;
        let sprite = match mood {
            Mood::Happy => SpriteId::PetHappy,
            Mood::Neutral => SpriteId::PetNeutral,
            Mood::Sad => SpriteId::PetSad,
            Mood::Critical => SpriteId::PetCritical,
        };
        self.world_bitmap(frame, pet_x, GROUND_Y - SPRITE_SIZE, sprite);
        if self.meowing {
            frame.text(pet_x - self.camera_x + SPRITE_SIZE, GROUND_Y - SPRITE_SIZE - 10 + oy, "Meow");
        }

        // Status line
        frame.text(0, 0, mood.label());
    }

    /// Draw a world-anchored sprite if any part of it is on screen.
    fn world_bitmap(&self, frame: &mut Frame, x: i16, y: i16, sprite: SpriteId) {
        let sx = x - self.camera_x;
        let sy = y + self.max_y - self.camera_y;
        if sx + SPRITE_SIZE <= 0 || sx >= DISPLAY_WIDTH || sy >= DISPLAY_HEIGHT {
            return;
        }
        frame.bitmap(sx, sy, sprite);
    }
}

fn world_extent(px: u16) -> i16 {
    i16::try_from(px).unwrap_or(i16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterState;
    use crate::scene::{Outbox, Profile, SceneId};

    fn press(view: &mut MainView, button: ButtonId) -> Transition {
        let config = GameConfig::default();
        let mut character = CharacterState::new(&config, 0);
        let mut profile = Profile::default();
        let mut outbox = Outbox::default();
        let mut ctx = SceneContext {
            character: &mut character,
            config: &config,
            profile: &mut profile,
            outbox: &mut outbox,
            now_ms: 0,
        };
        view.handle_input(&InputEvent::ShortPress(button), &mut ctx)
    }

    #[test]
    fn camera_pans_and_clamps() {
        let config = GameConfig::default();
        let mut v = MainView::new(&config);
        assert_eq!(v.camera(), (64, 0));

        for _ in 0..100 {
            press(&mut v, ButtonId::Right);
        }
        assert_eq!(v.camera().0, 128);
        for _ in 0..100 {
            press(&mut v, ButtonId::Left);
        }
        assert_eq!(v.camera().0, 0);

        // World height equals the display: no vertical travel.
        press(&mut v, ButtonId::Up);
        assert_eq!(v.camera().1, 0);
    }

    #[test]
    fn largest_world_pans_without_overflow() {
        let config = GameConfig {
            world_width: crate::config::MAX_WORLD_PX,
            pan_step_px: 255,
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());
        let mut v = MainView::new(&config);
        let max_x = MAX_WORLD_PX_I16 - DISPLAY_WIDTH;
        assert_eq!(v.camera().0, max_x / 2);

        for _ in 0..200 {
            press(&mut v, ButtonId::Right);
        }
        assert_eq!(v.camera().0, max_x);
        for _ in 0..200 {
            press(&mut v, ButtonId::Left);
        }
        assert_eq!(v.camera().0, 0);
    }

    #[test]
    fn oversized_world_saturates_instead_of_wrapping() {
        let config = GameConfig {
            world_width: 40_000,
            pan_step_px: 255,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
        let mut v = MainView::new(&config);
        assert_eq!(v.camera().0, (i16::MAX - DISPLAY_WIDTH) / 2);
        for _ in 0..200 {
            press(&mut v, ButtonId::Right);
        }
        assert_eq!(v.camera().0, i16::MAX - DISPLAY_WIDTH);
    }

    const MAX_WORLD_PX_I16: i16 = crate::config::MAX_WORLD_PX as i16;

    #[test]
    fn menu_opens_context_menu_and_a_meows() {
        let mut v = MainView::new(&GameConfig::default());
        match press(&mut v, ButtonId::Menu) {
            Transition::Push(scene) => assert_eq!(scene.id(), SceneId::ContextMenu),
            other => panic!("unexpected {other:?}"),
        }
        press(&mut v, ButtonId::A);
        assert!(v.is_meowing());
        press(&mut v, ButtonId::A);
        assert!(!v.is_meowing());
    }

    #[test]
    fn render_shows_mood_sprite() {
        let config = GameConfig::default();
        let character = CharacterState::new(&config, 0);
        let profile = Profile::default();
        let view = RenderView {
            character: &character,
            config: &config,
            profile: &profile,
            now_ms: 0,
        };
        let mut frame = Frame::new();
        MainView::new(&config).render(&view, &mut frame);
        assert!(frame.contains_sprite(SpriteId::PetHappy));
        assert!(frame.contains_text("Happy"));
    }
}
