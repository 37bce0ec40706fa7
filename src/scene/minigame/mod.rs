//! Minigames played against (or with) the pet.
//!
//! Every game advances incrementally from [`Minigame::update`], once per
//! tick, using the tick timestamp as its clock.  Nothing here blocks or
//! loops over wall-clock time.  A finished round reports a
//! [`GameOutcome`] and counts as a `Play` action for the pet.

pub mod tictactoe;
pub mod zoomies;

pub use tictactoe::TicTacToe;
pub use zoomies::Zoomies;

use log::info;

use super::{Scene, SceneContext, Transition};
use crate::app::events::AppEvent;
use crate::character::actions::ActionKind;
use crate::input::InputEvent;
use crate::render::{Frame, RenderView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinigameKind {
    TicTacToe,
    Zoomies,
}

impl MinigameKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::TicTacToe => "Tic-tac-toe",
            Self::Zoomies => "Zoomies",
        }
    }
}

/// How a round ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    Won,
    Lost,
    Draw,
    /// Endless games end with a score instead of a winner.
    Score(u32),
}

// ---------------------------------------------------------------------------
// Tiny RNG
// ---------------------------------------------------------------------------

/// xorshift64* generator; deterministic for a given seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rng64(u64);

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self(seed | 1)
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        (x.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 32) as u32
    }

    /// Uniform-ish value in `0..n`; `0` when `n == 0`.
    pub fn below(&mut self, n: u32) -> u32 {
        if n == 0 { 0 } else { self.next_u32() % n }
    }

    /// Value in `lo..hi` (or `lo` when the range is empty).
    pub fn range(&mut self, lo: u32, hi: u32) -> u32 {
        lo + self.below(hi.saturating_sub(lo))
    }
}

// ---------------------------------------------------------------------------
// Minigame scene
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Minigame {
    TicTacToe(TicTacToe),
    Zoomies(Zoomies),
}

impl Minigame {
    pub fn new(kind: MinigameKind) -> Self {
        match kind {
            MinigameKind::TicTacToe => Self::TicTacToe(TicTacToe::new()),
            MinigameKind::Zoomies => Self::Zoomies(Zoomies::new()),
        }
    }

    pub fn kind(&self) -> MinigameKind {
        match self {
            Self::TicTacToe(_) => MinigameKind::TicTacToe,
            Self::Zoomies(_) => MinigameKind::Zoomies,
        }
    }

    pub fn handle_input(&mut self, event: &InputEvent, ctx: &mut SceneContext<'_>) -> Transition {
        match self {
            Self::TicTacToe(g) => g.handle_input(event, ctx),
            Self::Zoomies(g) => g.handle_input(event, ctx),
        }
        Transition::None
    }

    pub fn update(&mut self, ctx: &mut SceneContext<'_>) -> Transition {
        match self {
            Self::TicTacToe(g) => g.update(ctx),
            Self::Zoomies(g) => g.update(ctx),
        }
        Transition::None
    }

    pub fn render(&self, view: &RenderView<'_>, frame: &mut Frame) {
        match self {
            Self::TicTacToe(g) => g.render(view, frame),
            Self::Zoomies(g) => g.render(view, frame),
        }
    }
}

/// Report a finished round and let it count as play time for the pet.
fn finish(ctx: &mut SceneContext<'_>, game: MinigameKind, outcome: GameOutcome) {
    info!("{} round over: {:?}", game.label(), outcome);
    ctx.outbox.event(AppEvent::GameFinished { game, outcome });
    ctx.perform(ActionKind::Play);
}

/// Seed the game from the entry time and start a fresh session.
pub(super) fn on_enter(scene: &mut Scene, ctx: &mut SceneContext<'_>) {
    if let Scene::Minigame(game) = scene {
        let seed = ctx.now_ms.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ game.kind() as u64;
        info!("Starting {}", game.kind().label());
        match game {
            Minigame::TicTacToe(g) => g.reset(seed, ctx.now_ms),
            Minigame::Zoomies(g) => g.reset(seed, ctx.now_ms),
        }
    }
}

pub(super) fn on_exit(scene: &mut Scene, ctx: &mut SceneContext<'_>) {
    if let Scene::Minigame(game) = scene {
        let s = &ctx.profile.tictactoe;
        match game.kind() {
            MinigameKind::TicTacToe => info!(
                "Leaving Tic-tac-toe (you {} / pet {} / draws {})",
                s.player, s.pet, s.draws
            ),
            MinigameKind::Zoomies => {
                info!("Leaving Zoomies (best {})", ctx.profile.zoomies_best);
            }
        }
    }
}
