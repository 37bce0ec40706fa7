//! Zoomies: an endless runner.  Jump the pet over plants; the score rises
//! every 100 ms survived and the world speeds up as it does.
//!
//! Physics runs in integer milli-pixels so a replay with the same seed and
//! tick timestamps produces the same run.

use heapless::Vec;

use super::{GameOutcome, MinigameKind, Rng64, finish};
use crate::input::{ButtonId, InputEvent};
use crate::render::{DISPLAY_WIDTH, Frame, RenderView, SpriteId};
use crate::scene::SceneContext;

const MILLI: i64 = 1000;

const GROUND_Y: i64 = 54;
const PLAYER_X: i64 = 4;
const RUNNER_W: i64 = 16;
const RUNNER_H: i64 = 12;
const PLANT_W: i64 = 8;
const PLANT_H: i64 = 12;

/// px/s²
const GRAVITY: i64 = 260;
/// px/s, negative is up
const JUMP_VELOCITY: i64 = -140;
/// px/s
const BASE_SPEED: i64 = 48;
const MAX_SPEED: i64 = 120;
/// Speed goes up by 1 px/s every this many points.
const SPEED_STEP_POINTS: u32 = 5;
const POINT_PERIOD_MS: i64 = 100;
const FIRST_SPAWN_MS: i64 = 1000;
const SPAWN_MIN_MS: u32 = 1300;
const SPAWN_MAX_MS: u32 = 3200;
/// Longest step simulated in one update; larger gaps are clipped.
const MAX_STEP_MS: i64 = 100;
const RESTART_DELAY_MS: u64 = 500;
const MAX_OBSTACLES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Waiting for the first jump press.
    Ready,
    Running,
    Hit { at_ms: u64, new_best: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Plant {
    x_mpx: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zoomies {
    state: RunState,
    /// Top edge of the runner.
    y_mpx: i64,
    /// Vertical velocity in milli-px/s.
    vy: i64,
    jumping: bool,
    plants: Vec<Plant, MAX_OBSTACLES>,
    spawn_in_ms: i64,
    score: u32,
    point_acc_ms: i64,
    speed: i64,
    last_ms: u64,
    rng: Rng64,
}

impl Default for Zoomies {
    fn default() -> Self {
        Self::new()
    }
}

impl Zoomies {
    pub fn new() -> Self {
        Self {
            state: RunState::Ready,
            y_mpx: ground_top(),
            vy: 0,
            jumping: false,
            plants: Vec::new(),
            spawn_in_ms: FIRST_SPAWN_MS,
            score: 0,
            point_acc_ms: 0,
            speed: BASE_SPEED,
            last_ms: 0,
            rng: Rng64::new(1),
        }
    }

    pub fn reset(&mut self, seed: u64, now_ms: u64) {
        *self = Self::new();
        self.rng = Rng64::new(seed);
        self.last_ms = now_ms;
    }

    fn restart(&mut self, now_ms: u64) {
        let rng = self.rng.clone();
        *self = Self::new();
        self.rng = rng;
        self.state = RunState::Running;
        self.last_ms = now_ms;
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    /// Runner top edge in whole pixels.
    pub fn runner_y(&self) -> i64 {
        self.y_mpx / MILLI
    }

    pub fn handle_input(&mut self, event: &InputEvent, ctx: &mut SceneContext<'_>) {
        let InputEvent::Pressed(ButtonId::A | ButtonId::Up) = *event else {
            return;
        };
        match self.state {
            RunState::Ready => {
                self.state = RunState::Running;
                self.last_ms = ctx.now_ms;
            }
            RunState::Hit { at_ms, .. } => {
                if ctx.now_ms.saturating_sub(at_ms) >= RESTART_DELAY_MS {
                    self.restart(ctx.now_ms);
                }
            }
            RunState::Running => {
                if !self.jumping {
                    self.jumping = true;
                    self.vy = JUMP_VELOCITY * MILLI;
                }
            }
        }
    }

    pub fn update(&mut self, ctx: &mut SceneContext<'_>) {
        if self.state != RunState::Running {
            self.last_ms = ctx.now_ms;
            return;
        }
        let dt = (ctx.now_ms.saturating_sub(self.last_ms) as i64).min(MAX_STEP_MS);
        self.last_ms = ctx.now_ms;
        if dt == 0 {
            return;
        }
        self.step(dt);

        if self.collides() {
            let new_best = self.score > ctx.profile.zoomies_best;
            if new_best {
                ctx.profile.zoomies_best = self.score;
            }
            self.state = RunState::Hit {
                at_ms: ctx.now_ms,
                new_best,
            };
            finish(ctx, MinigameKind::Zoomies, GameOutcome::Score(self.score));
        }
    }

    fn step(&mut self, dt: i64) {
        // Score and speed
        self.point_acc_ms += dt;
        while self.point_acc_ms >= POINT_PERIOD_MS {
            self.point_acc_ms -= POINT_PERIOD_MS;
            self.score += 1;
            if self.score % SPEED_STEP_POINTS == 0 {
                self.speed = (self.speed + 1).min(MAX_SPEED);
            }
        }

        // Runner
        if self.jumping {
            self.vy += GRAVITY * dt;
            self.y_mpx += self.vy * dt / 1000;
            if self.y_mpx >= ground_top() {
                self.y_mpx = ground_top();
                self.vy = 0;
                self.jumping = false;
            }
        }

        // Plants
        let shift = self.speed * dt;
        for p in &mut self.plants {
            p.x_mpx -= shift;
        }
        self.plants.retain(|p| p.x_mpx > -20 * MILLI);

        self.spawn_in_ms -= dt;
        if self.spawn_in_ms <= 0 {
            let _ = self.plants.push(Plant {
                x_mpx: (i64::from(DISPLAY_WIDTH) + 5) * MILLI,
            });
            let (lo, hi) = if self.speed < 80 {
                (SPAWN_MIN_MS, SPAWN_MAX_MS)
            } else {
                (SPAWN_MIN_MS * 6 / 10, SPAWN_MAX_MS * 8 / 10)
            };
            self.spawn_in_ms = i64::from(self.rng.range(lo, hi));
        }
    }

    /// Hitboxes are inset a little for fairness.
    fn collides(&self) -> bool {
        let left = PLAYER_X + 4;
        let right = PLAYER_X + RUNNER_W - 4;
        let top = self.y_mpx / MILLI + 2;
        let bottom = self.y_mpx / MILLI + RUNNER_H;

        self.plants.iter().any(|p| {
            let x = p.x_mpx / MILLI;
            let (p_left, p_right) = (x + 2, x + PLANT_W - 2);
            let (p_top, p_bottom) = (GROUND_Y - PLANT_H + 2, GROUND_Y);
            right > p_left && left < p_right && bottom > p_top && top < p_bottom
        })
    }

    pub fn render(&self, view: &RenderView<'_>, frame: &mut Frame) {
        frame.rect(0, GROUND_Y as i16, DISPLAY_WIDTH as u8, 1, true);
        for p in &self.plants {
            let x = (p.x_mpx / MILLI) as i16;
            if x < DISPLAY_WIDTH {
                frame.bitmap(x, (GROUND_Y - PLANT_H) as i16, SpriteId::Cactus);
            }
        }
        frame.bitmap(PLAYER_X as i16, self.runner_y() as i16, SpriteId::Runner);

        frame.text_fmt(0, 2, format_args!("HI {}", view.profile.zoomies_best));
        frame.text_fmt(DISPLAY_WIDTH - 32, 2, format_args!("{:>5}", self.score));

        match self.state {
            RunState::Ready => frame.text(22, 20, "A: start running"),
            RunState::Hit { new_best, .. } => {
                frame.text(40, 16, if new_best { "NEW BEST!" } else { "OUCH!" });
                frame.text(34, 28, "A: again");
            }
            RunState::Running => {}
        }
    }
}

fn ground_top() -> i64 {
    (GROUND_Y - RUNNER_H) * MILLI
}
