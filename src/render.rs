//! Render dispatcher.
//!
//! A frame is an ordered list of [`DrawPrimitive`]s produced by the top
//! scene only.  The display adapter blits them; the core never touches
//! pixels.  Rendering is a pure function of its inputs, which is what lets
//! the integration tests assert on frames without a panel.

use core::fmt::{self, Write};

use heapless::{String, Vec};
use log::warn;

use crate::character::CharacterState;
use crate::config::GameConfig;
use crate::scene::Profile;
use crate::scene::navigator::Navigator;

pub const DISPLAY_WIDTH: i16 = 128;
pub const DISPLAY_HEIGHT: i16 = 64;

/// Characters per text primitive (128 px / 6 px glyphs, rounded up).
pub const TEXT_CAPACITY: usize = 22;
/// Primitives per frame.
pub const FRAME_CAPACITY: usize = 64;

/// Built-in bitmaps known to the display adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    PetHappy,
    PetNeutral,
    PetSad,
    PetCritical,
    Heart,
    Tree,
    Bush,
    Plant,
    Planter,
    Cloud,
    Sun,
    Moon,
    Raindrop,
    Snowflake,
    Runner,
    Cactus,
    Paw,
    Ring,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawPrimitive {
    Text {
        x: i16,
        y: i16,
        text: String<TEXT_CAPACITY>,
    },
    Rect {
        x: i16,
        y: i16,
        w: u8,
        h: u8,
        filled: bool,
    },
    Bitmap {
        x: i16,
        y: i16,
        sprite: SpriteId,
    },
}

/// One frame's worth of primitives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    primitives: Vec<DrawPrimitive, FRAME_CAPACITY>,
    dropped: u16,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, primitive: DrawPrimitive) {
        if self.primitives.push(primitive).is_err() {
            self.dropped = self.dropped.saturating_add(1);
        }
    }

    /// Text truncated to [`TEXT_CAPACITY`] characters.
    pub fn text(&mut self, x: i16, y: i16, text: &str) {
        let mut line = Line(String::new());
        let _ = line.write_str(text);
        self.push(DrawPrimitive::Text { x, y, text: line.0 });
    }

    /// Formatted text, truncated like [`Frame::text`].
    pub fn text_fmt(&mut self, x: i16, y: i16, args: fmt::Arguments<'_>) {
        let mut line = Line(String::new());
        let _ = line.write_fmt(args);
        self.push(DrawPrimitive::Text { x, y, text: line.0 });
    }

    pub fn rect(&mut self, x: i16, y: i16, w: u8, h: u8, filled: bool) {
        self.push(DrawPrimitive::Rect { x, y, w, h, filled });
    }

    pub fn bitmap(&mut self, x: i16, y: i16, sprite: SpriteId) {
        self.push(DrawPrimitive::Bitmap { x, y, sprite });
    }

    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    /// Primitives discarded because the frame was full.
    pub fn dropped(&self) -> u16 {
        self.dropped
    }

    /// All text strings in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| match p {
            DrawPrimitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }

    pub fn contains_sprite(&self, sprite: SpriteId) -> bool {
        self.primitives
            .iter()
            .any(|p| matches!(p, DrawPrimitive::Bitmap { sprite: s, .. } if *s == sprite))
    }
}

/// Formatting target that drops whatever does not fit.
struct Line(String<TEXT_CAPACITY>);

impl Write for Line {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            if self.0.push(ch).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Read-only snapshot handed to scene renderers.
#[derive(Debug, Clone, Copy)]
pub struct RenderView<'a> {
    pub character: &'a CharacterState,
    pub config: &'a GameConfig,
    pub profile: &'a Profile,
    pub now_ms: u64,
}

/// Render the top scene of `nav`.
pub fn render(nav: &Navigator, view: &RenderView<'_>) -> Frame {
    let mut frame = Frame::new();
    nav.top().render(view, &mut frame);
    if frame.dropped() > 0 {
        warn!(
            "Frame overflow in {}: {} primitives dropped",
            nav.top().id().name(),
            frame.dropped()
        );
    }
    frame
}

/// Outlined progress bar, `value` in `0..=100`.
pub(crate) fn bar(frame: &mut Frame, x: i16, y: i16, width: u8, value: u8) {
    frame.rect(x, y, width, 6, false);
    let inner = (u16::from(width.saturating_sub(2)) * u16::from(value.min(100)) / 100) as u8;
    if inner > 0 {
        frame.rect(x + 1, y + 1, inner, 4, true);
    }
}
