//! Pet stats: need bars on the first page, mood and records on the second.

use super::Transition;
use crate::character::NeedKind;
use crate::input::{ButtonId, InputEvent};
use crate::render::{Frame, RenderView, bar};

const ROW_HEIGHT: i16 = 12;
const BAR_X: i16 = 62;
const BAR_WIDTH: u8 = 62;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsPage {
    #[default]
    Needs,
    Info,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsView {
    page: StatsPage,
}

impl StatsView {
    pub fn page(&self) -> StatsPage {
        self.page
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> Transition {
        if let InputEvent::ShortPress(ButtonId::Left | ButtonId::Right) = event {
            self.page = match self.page {
                StatsPage::Needs => StatsPage::Info,
                StatsPage::Info => StatsPage::Needs,
            };
        }
        Transition::None
    }

    pub fn render(&self, view: &RenderView<'_>, frame: &mut Frame) {
        match self.page {
            StatsPage::Needs => {
                for (row, kind) in NeedKind::ALL.into_iter().enumerate() {
                    let y = 2 + row as i16 * ROW_HEIGHT;
                    frame.text(0, y, kind.label());
                    bar(frame, BAR_X, y + 1, BAR_WIDTH, view.character.need(kind));
                }
            }
            StatsPage::Info => {
                let c = view.character;
                let age_min = c.age_ms() / 60_000;
                let score = &view.profile.tictactoe;
                frame.text_fmt(0, 2, format_args!("Mood: {}", c.mood(&view.config.mood).label()));
                frame.text_fmt(
                    0,
                    14,
                    format_args!("Age: {}d {:02}h {:02}m", age_min / 1440, age_min / 60 % 24, age_min % 60),
                );
                frame.text_fmt(0, 26, format_args!("Zoomies best: {}", view.profile.zoomies_best));
                frame.text_fmt(
                    0,
                    38,
                    format_args!("TTT {}-{}-{}", score.player, score.pet, score.draws),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterState;
    use crate::config::GameConfig;
    use crate::render::DrawPrimitive;
    use crate::scene::Profile;

    #[test]
    fn needs_page_draws_one_bar_per_need() {
        let config = GameConfig::default();
        let character = CharacterState::new(&config, 0).with_need(NeedKind::Fun, 0);
        let profile = Profile::default();
        let view = RenderView {
            character: &character,
            config: &config,
            profile: &profile,
            now_ms: 0,
        };
        let mut frame = Frame::new();
        StatsView::default().render(&view, &mut frame);

        assert_eq!(frame.texts().count(), NeedKind::COUNT);
        let outlines = frame
            .primitives()
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Rect { filled: false, .. }))
            .count();
        let fills = frame
            .primitives()
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Rect { filled: true, .. }))
            .count();
        assert_eq!(outlines, NeedKind::COUNT);
        // Fun is empty, so it has no fill.
        assert_eq!(fills, NeedKind::COUNT - 1);
    }

    #[test]
    fn left_right_flip_pages() {
        let mut s = StatsView::default();
        s.handle_input(&InputEvent::ShortPress(ButtonId::Right));
        assert_eq!(s.page(), StatsPage::Info);
        s.handle_input(&InputEvent::ShortPress(ButtonId::Left));
        assert_eq!(s.page(), StatsPage::Needs);
    }

    #[test]
    fn info_page_formats_age() {
        let mut config = GameConfig::default();
        config.decay_per_minute = crate::character::PerNeed::splat(0.0);
        let mut character = CharacterState::new(&config, 0);
        character.tick((26 * 60 + 5) * 60_000, &config);
        let profile = Profile::default();
        let view = RenderView {
            character: &character,
            config: &config,
            profile: &profile,
            now_ms: 0,
        };
        let mut s = StatsView::default();
        s.handle_input(&InputEvent::ShortPress(ButtonId::Right));
        let mut frame = Frame::new();
        s.render(&view, &mut frame);
        assert!(frame.contains_text("Age: 1d 02h 05m"));
    }
}
