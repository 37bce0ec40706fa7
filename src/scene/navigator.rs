//! Stack-based scene navigator.
//!
//! The root [`MainView`] is held outside the overlay stack, so the
//! navigator can never be empty: `top()` is the last overlay, or the root
//! when there are none.  Only the top scene receives input, updates and
//! renders; scenes below keep their state until they resurface.
//!
//! Global input policy is applied here, before the top scene sees an
//! event:
//!
//! | Event              | Effect                                      |
//! |--------------------|---------------------------------------------|
//! | `LongPress(Menu)`  | pop everything, push the main menu          |
//! | `ShortPress(B)`    | pop, unless the root is on top              |

use heapless::Vec;
use log::{error, info, warn};

use super::{MainView, Scene, SceneContext, SceneId, Transition};
use crate::app::events::AppEvent;
use crate::config::GameConfig;
use crate::error::{Error, Result};
use crate::input::{ButtonId, InputEvent};

/// Maximum stack depth including the root.
pub const MAX_DEPTH: usize = 8;

pub struct Navigator {
    root: Scene,
    overlays: Vec<Scene, { MAX_DEPTH - 1 }>,
    transition_count: u64,
}

impl Navigator {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            root: Scene::MainView(MainView::new(config)),
            overlays: Vec::new(),
            transition_count: 0,
        }
    }

    /// Run the root's `on_enter`.  Call once before the first event.
    pub fn start(&mut self, ctx: &mut SceneContext<'_>) {
        info!("Navigator starting in scene: {}", self.root.descriptor().name);
        if let Some(enter) = self.root.descriptor().on_enter {
            enter(&mut self.root, ctx);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn top(&self) -> &Scene {
        self.overlays.last().unwrap_or(&self.root)
    }

    fn top_mut(&mut self) -> &mut Scene {
        self.overlays.last_mut().unwrap_or(&mut self.root)
    }

    pub fn top_id(&self) -> SceneId {
        self.top().id()
    }

    /// Number of scenes on the stack, root included (always >= 1).
    pub fn depth(&self) -> usize {
        1 + self.overlays.len()
    }

    /// Scene ids from bottom (root) to top.
    pub fn scene_ids(&self) -> impl Iterator<Item = SceneId> + '_ {
        core::iter::once(self.root.id()).chain(self.overlays.iter().map(Scene::id))
    }

    pub fn root(&self) -> &Scene {
        &self.root
    }

    pub fn transition_count(&self) -> u64 {
        self.transition_count
    }

    // ── Input and update ──────────────────────────────────────

    /// Route one classified event.
    pub fn handle_event(&mut self, event: &InputEvent, ctx: &mut SceneContext<'_>) -> Result<()> {
        match *event {
            InputEvent::LongPress(ButtonId::Menu) => {
                self.jump_to_main_menu(ctx);
                return Ok(());
            }
            InputEvent::ShortPress(ButtonId::B) if !self.overlays.is_empty() => {
                return self.apply(Transition::Pop, ctx);
            }
            _ => {}
        }
        let transition = self.top_mut().handle_input(event, ctx);
        self.apply(transition, ctx)
    }

    /// Advance the top scene by one tick.
    pub fn update(&mut self, ctx: &mut SceneContext<'_>) -> Result<()> {
        let transition = self.top_mut().update(ctx);
        self.apply(transition, ctx)
    }

    // ── Stack discipline ──────────────────────────────────────

    pub fn apply(&mut self, transition: Transition, ctx: &mut SceneContext<'_>) -> Result<()> {
        match transition {
            Transition::None => Ok(()),
            Transition::Push(scene) => {
                self.push(scene, ctx);
                Ok(())
            }
            Transition::Pop => self.pop(ctx),
            Transition::Replace(scene) => {
                // The root is permanent: replacing it means stacking on top.
                if self.overlays.is_empty() {
                    self.push(scene, ctx);
                } else {
                    self.replace(scene, ctx);
                }
                Ok(())
            }
        }
    }

    fn push(&mut self, mut scene: Scene, ctx: &mut SceneContext<'_>) {
        if self.overlays.is_full() {
            warn!(
                "Scene stack full, refusing push of {}",
                scene.descriptor().name
            );
            return;
        }
        let from = self.top_id();
        if let Some(enter) = scene.descriptor().on_enter {
            enter(&mut scene, ctx);
        }
        let to = scene.id();
        let _ = self.overlays.push(scene);
        self.record(from, to, ctx);
    }

    fn pop(&mut self, ctx: &mut SceneContext<'_>) -> Result<()> {
        let Some(mut scene) = self.overlays.pop() else {
            error!("Pop on root scene {}", self.root.descriptor().name);
            return Err(Error::StackUnderflow);
        };
        if let Some(exit) = scene.descriptor().on_exit {
            exit(&mut scene, ctx);
        }
        let to = self.top_id();
        self.record(scene.id(), to, ctx);
        Ok(())
    }

    fn replace(&mut self, mut scene: Scene, ctx: &mut SceneContext<'_>) {
        if let Some(mut old) = self.overlays.pop() {
            if let Some(exit) = old.descriptor().on_exit {
                exit(&mut old, ctx);
            }
            if let Some(enter) = scene.descriptor().on_enter {
                enter(&mut scene, ctx);
            }
            let to = scene.id();
            let _ = self.overlays.push(scene);
            self.record(old.id(), to, ctx);
        }
    }

    /// Collapse to the root, then push the main menu.
    fn jump_to_main_menu(&mut self, ctx: &mut SceneContext<'_>) {
        let from = self.top_id();
        while let Some(mut scene) = self.overlays.pop() {
            if let Some(exit) = scene.descriptor().on_exit {
                exit(&mut scene, ctx);
            }
        }
        let menu = Scene::main_menu();
        let to = menu.id();
        let _ = self.overlays.push(menu);
        self.record(from, to, ctx);
    }

    fn record(&mut self, from: SceneId, to: SceneId, ctx: &mut SceneContext<'_>) {
        self.transition_count = self.transition_count.wrapping_add(1);
        info!("Scene transition: {} -> {}", from.name(), to.name());
        ctx.outbox.event(AppEvent::SceneChanged {
            from,
            to,
            depth: self.depth(),
        });
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::character::CharacterState;
    use crate::scene::{Outbox, Profile};
    use proptest::prelude::*;

    fn arb_event() -> impl Strategy<Value = InputEvent> {
        let button = proptest::sample::select(ButtonId::ALL.to_vec());
        (button, 0u8..3).prop_map(|(b, kind)| match kind {
            0 => InputEvent::ShortPress(b),
            1 => InputEvent::LongPress(b),
            _ => InputEvent::Pressed(b),
        })
    }

    proptest! {
        #[test]
        fn legal_input_never_empties_the_stack(
            events in proptest::collection::vec(arb_event(), 1..200),
        ) {
            let config = GameConfig::default();
            let mut character = CharacterState::new(&config, 0);
            let mut profile = Profile::default();
            let mut outbox = Outbox::default();
            let mut nav = Navigator::new(&config);

            for (i, event) in events.iter().enumerate() {
                let mut ctx = SceneContext {
                    character: &mut character,
                    config: &config,
                    profile: &mut profile,
                    outbox: &mut outbox,
                    now_ms: i as u64 * 50,
                };
                prop_assert!(nav.handle_event(event, &mut ctx).is_ok());
                prop_assert!(nav.update(&mut ctx).is_ok());
                prop_assert!(nav.depth() >= 1);
                prop_assert_eq!(nav.scene_ids().next(), Some(SceneId::MainView));
                let _ = outbox.take_commands();
                let _ = outbox.take_events();
            }
        }
    }
}
