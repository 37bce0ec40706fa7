//! Tic-tac-toe against the pet.
//!
//! The player places rings, the pet places paws.  Rounds alternate who
//! moves first.  The pet "thinks" for `pet_think_ms` before answering,
//! which is modelled as a phase checked on every update rather than a
//! sleep.  It plays perfect minimax except for an occasional blunder
//! (`pet_blunder_percent`) and a randomised opening.

use heapless::Vec;

use super::{GameOutcome, MinigameKind, Rng64, finish};
use crate::input::{ButtonId, InputEvent};
use crate::render::{Frame, RenderView, SpriteId};
use crate::scene::SceneContext;

const CELL_SIZE: i16 = 19;
const BOARD_X: i16 = 2;
const BOARD_Y: i16 = 3;
const SCORE_X: i16 = 62;
/// Minimum time a finished board stays up before A starts the next round.
const RESTART_DELAY_MS: u64 = 500;

const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];
const CORNERS: [usize; 4] = [0, 2, 6, 8];
const CENTER: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Empty,
    Player,
    Pet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    PlayerTurn,
    PetThinking { since_ms: u64 },
    Over { outcome: GameOutcome, at_ms: u64 },
}

type Board = [Mark; 9];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToe {
    board: Board,
    cursor: usize,
    phase: Phase,
    round: u32,
    rng: Rng64,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    pub fn new() -> Self {
        Self {
            board: [Mark::Empty; 9],
            cursor: CENTER,
            phase: Phase::PlayerTurn,
            round: 0,
            rng: Rng64::new(1),
        }
    }

    /// Start a new session: player moves first in round 0.
    pub fn reset(&mut self, seed: u64, now_ms: u64) {
        self.rng = Rng64::new(seed);
        self.round = 0;
        self.new_round(now_ms);
    }

    fn new_round(&mut self, now_ms: u64) {
        self.board = [Mark::Empty; 9];
        self.cursor = CENTER;
        self.phase = if self.round % 2 == 0 {
            Phase::PlayerTurn
        } else {
            Phase::PetThinking { since_ms: now_ms }
        };
    }

    pub fn board(&self) -> &[Mark; 9] {
        &self.board
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn handle_input(&mut self, event: &InputEvent, ctx: &mut SceneContext<'_>) {
        let InputEvent::ShortPress(button) = *event else {
            return;
        };
        match self.phase {
            Phase::Over { at_ms, .. } => {
                if button == ButtonId::A && ctx.now_ms.saturating_sub(at_ms) >= RESTART_DELAY_MS {
                    self.round += 1;
                    self.new_round(ctx.now_ms);
                }
            }
            Phase::PlayerTurn => {
                let (row, col) = (self.cursor / 3, self.cursor % 3);
                match button {
                    ButtonId::Up if row > 0 => self.cursor -= 3,
                    ButtonId::Down if row < 2 => self.cursor += 3,
                    ButtonId::Left if col > 0 => self.cursor -= 1,
                    ButtonId::Right if col < 2 => self.cursor += 1,
                    ButtonId::A => self.place_player(ctx),
                    _ => {}
                }
            }
            Phase::PetThinking { .. } => {}
        }
    }

    fn place_player(&mut self, ctx: &mut SceneContext<'_>) {
        if self.board[self.cursor] != Mark::Empty {
            return;
        }
        self.board[self.cursor] = Mark::Player;
        match outcome(&self.board) {
            Some(result) => self.end(result, ctx),
            None => {
                self.phase = Phase::PetThinking {
                    since_ms: ctx.now_ms,
                };
            }
        }
    }

    pub fn update(&mut self, ctx: &mut SceneContext<'_>) {
        let Phase::PetThinking { since_ms } = self.phase else {
            return;
        };
        if ctx.now_ms.saturating_sub(since_ms) < u64::from(ctx.config.pet_think_ms) {
            return;
        }
        if let Some(cell) = self.choose_move(ctx.config.pet_blunder_percent) {
            self.board[cell] = Mark::Pet;
        }
        match outcome(&self.board) {
            Some(result) => self.end(result, ctx),
            None => self.phase = Phase::PlayerTurn,
        }
    }

    fn end(&mut self, result: GameOutcome, ctx: &mut SceneContext<'_>) {
        self.phase = Phase::Over {
            outcome: result,
            at_ms: ctx.now_ms,
        };
        let score = &mut ctx.profile.tictactoe;
        match result {
            GameOutcome::Won => score.player = score.player.saturating_add(1),
            GameOutcome::Lost => score.pet = score.pet.saturating_add(1),
            _ => score.draws = score.draws.saturating_add(1),
        }
        finish(ctx, MinigameKind::TicTacToe, result);
    }

    fn choose_move(&mut self, blunder_percent: u8) -> Option<usize> {
        let empty: Vec<usize, 9> = (0..9).filter(|&i| self.board[i] == Mark::Empty).collect();
        if empty.is_empty() {
            return None;
        }

        if empty.len() > 1 && self.rng.below(100) < u32::from(blunder_percent) {
            return Some(self.pick(&empty));
        }

        // Opening: centre or a corner, no search needed.
        if empty.len() >= 8 {
            let good: Vec<usize, 5> = core::iter::once(CENTER)
                .chain(CORNERS)
                .filter(|&i| self.board[i] == Mark::Empty)
                .collect();
            if !good.is_empty() {
                return Some(self.pick(&good));
            }
        }

        let mut best_score = i32::MIN;
        let mut best: Vec<usize, 9> = Vec::new();
        let mut board = self.board;
        for &cell in &empty {
            board[cell] = Mark::Pet;
            let score = minimax(&mut board, 0, false);
            board[cell] = Mark::Empty;
            if score > best_score {
                best_score = score;
                best.clear();
            }
            if score == best_score {
                let _ = best.push(cell);
            }
        }
        Some(self.pick(&best))
    }

    fn pick(&mut self, cells: &[usize]) -> usize {
        cells[self.rng.below(cells.len() as u32) as usize]
    }

    pub fn render(&self, view: &RenderView<'_>, frame: &mut Frame) {
        let stride = CELL_SIZE + 1;
        let span = 3 * CELL_SIZE + 2;

        // Grid
        for i in 1..3 {
            frame.rect(BOARD_X + i * stride - 1, BOARD_Y, 1, span as u8, true);
            frame.rect(BOARD_X, BOARD_Y + i * stride - 1, span as u8, 1, true);
        }

        // Marks
        for (idx, mark) in self.board.iter().enumerate() {
            let (x, y) = cell_origin(idx);
            match mark {
                Mark::Player => frame.bitmap(x + 1, y + 1, SpriteId::Ring),
                Mark::Pet => frame.bitmap(x + 1, y + 1, SpriteId::Paw),
                Mark::Empty => {}
            }
        }

        if self.phase == Phase::PlayerTurn {
            let (x, y) = cell_origin(self.cursor);
            frame.rect(x + 1, y + 1, 17, 17, false);
        }

        // Score
        let score = &view.profile.tictactoe;
        frame.text(SCORE_X, 4, "You");
        frame.text_fmt(SCORE_X, 12, format_args!("{}", score.player));
        frame.text(SCORE_X + 28, 4, "Pet");
        frame.text_fmt(SCORE_X + 28, 12, format_args!("{}", score.pet));

        match self.phase {
            Phase::Over { outcome, .. } => {
                let msg = match outcome {
                    GameOutcome::Won => "WIN!",
                    GameOutcome::Lost => "LOSE",
                    _ => "DRAW",
                };
                frame.text(70, 22, msg);
            }
            Phase::PetThinking { .. } => frame.text(76, 22, "..."),
            Phase::PlayerTurn => {}
        }
    }
}

fn cell_origin(idx: usize) -> (i16, i16) {
    let (row, col) = ((idx / 3) as i16, (idx % 3) as i16);
    (BOARD_X + col * (CELL_SIZE + 1), BOARD_Y + row * (CELL_SIZE + 1))
}

fn has_won(board: &Board, mark: Mark) -> bool {
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&i| board[i] == mark))
}

/// Result of the board from the player's point of view, if the round is over.
fn outcome(board: &Board) -> Option<GameOutcome> {
    if has_won(board, Mark::Player) {
        Some(GameOutcome::Won)
    } else if has_won(board, Mark::Pet) {
        Some(GameOutcome::Lost)
    } else if board.iter().all(|&m| m != Mark::Empty) {
        Some(GameOutcome::Draw)
    } else {
        None
    }
}

/// Score for the pet: positive is a pet win, sooner is better.
fn minimax(board: &mut Board, depth: i32, pet_to_move: bool) -> i32 {
    if has_won(board, Mark::Pet) {
        return 10 - depth;
    }
    if has_won(board, Mark::Player) {
        return depth - 10;
    }
    if board.iter().all(|&m| m != Mark::Empty) {
        return 0;
    }

    let mark = if pet_to_move { Mark::Pet } else { Mark::Player };
    let mut best = if pet_to_move { i32::MIN } else { i32::MAX };
    for i in 0..9 {
        if board[i] != Mark::Empty {
            continue;
        }
        board[i] = mark;
        let score = minimax(board, depth + 1, !pet_to_move);
        board[i] = Mark::Empty;
        best = if pet_to_move { best.max(score) } else { best.min(score) };
    }
    best
}
