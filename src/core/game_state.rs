//! Game orchestrator: the state machine driving a run.
//!
//! Owns the board, the falling and next pieces, score bookkeeping, the
//! input gate, and the phase machine (Start, Play, Pause, GameOver). The
//! front-end drives it with exactly three calls per frame: `apply_action`
//! for the user's input, `advance` for the tick, and `snapshot` to draw.

use std::time::Instant;

use crate::core::board::Board;
use crate::core::gate::HoldGate;
use crate::core::pieces::{rotate, Piece, KICK_OFFSETS};
use crate::core::rng::SimpleRng;
use crate::core::scoring::{level_for_score, score_for, speed_for_level};
use crate::core::snapshot::GameSnapshot;
use crate::core::store::HighScoreStore;
use crate::types::{
    Color, Phase, Shape, UserAction, BASE_SPEED, BOARD_HEIGHT, BOARD_WIDTH,
    GAME_OVER_GRACE_SECS, SPAWN_X,
};

pub struct GameState {
    board: Board,
    current: Piece,
    next: Piece,
    score: u32,
    high_score: i32,
    level: u32,
    speed: u32,
    lines_cleared: u32,
    phase: Phase,
    game_over_at: Option<Instant>,
    fall_timer: u32,
    gate: HoldGate,
    drop_held: bool,
    muted: bool,
    rng: SimpleRng,
    store: Box<dyn HighScoreStore>,
}

fn random_piece(rng: &mut SimpleRng) -> Piece {
    let shape = Shape::ALL[rng.next_range(7) as usize];
    let color = Color::ALL[rng.next_range(7) as usize];
    Piece::new(shape, color)
}

impl GameState {
    pub fn new(seed: u32, mut store: Box<dyn HighScoreStore>) -> Self {
        let mut rng = SimpleRng::new(seed);
        let current = random_piece(&mut rng);
        let next = random_piece(&mut rng);
        let high_score = store.load();
        Self {
            board: Board::new(),
            current,
            next,
            score: 0,
            high_score,
            level: 1,
            speed: BASE_SPEED,
            lines_cleared: 0,
            phase: Phase::Start,
            game_over_at: None,
            fall_timer: 0,
            gate: HoldGate::default(),
            drop_held: false,
            muted: false,
            rng,
            store,
        }
    }

    /// Would the current piece collide after moving by (dx, dy)?
    ///
    /// Side walls and the floor collide; rows above the board are free so a
    /// freshly spawned piece can overhang the top edge.
    pub fn collides(&self, dx: i32, dy: i32) -> bool {
        for (x, y) in self.current.cells() {
            let nx = x + dx;
            let ny = y + dy;
            if nx < 0 || nx >= BOARD_WIDTH || ny >= BOARD_HEIGHT {
                return true;
            }
            if ny >= 0 && self.board.is_occupied(nx, ny) {
                return true;
            }
        }
        false
    }

    fn try_shift(&mut self, dx: i32, dy: i32) -> bool {
        if self.collides(dx, dy) {
            return false;
        }
        self.current.x += dx;
        self.current.y += dy;
        true
    }

    /// Rotate in place, trying the kick offsets in order when blocked. When
    /// every candidate collides the piece is left exactly as it was.
    fn handle_rotation(&mut self) {
        let backup = self.current.form;
        self.current.form = rotate(&backup, self.current.shape);
        if !self.collides(0, 0) {
            return;
        }
        for dx in KICK_OFFSETS {
            if !self.collides(dx, 0) {
                self.current.x += dx;
                return;
            }
        }
        self.current.form = backup;
    }

    /// Fall one row, landing when the row below is blocked.
    fn drop_step(&mut self) {
        if !self.collides(0, 1) {
            self.current.y += 1;
        } else {
            self.land();
        }
    }

    fn land(&mut self) {
        self.board.merge(&self.current);
        let cleared = self.board.clear_full_lines();
        self.apply_clear(cleared);
        self.spawn_piece();
    }

    fn apply_clear(&mut self, lines: u32) {
        self.lines_cleared += lines;
        self.score += score_for(lines);
        if i64::from(self.score) > i64::from(self.high_score) {
            self.high_score = self.score as i32;
            self.store.save(self.score);
        }
        self.level = level_for_score(self.score);
        self.speed = speed_for_level(self.level);
    }

    /// Promote the preview piece and draw a new one. A spawn that collides
    /// immediately ends the run.
    fn spawn_piece(&mut self) {
        self.current = self.next;
        self.current.x = SPAWN_X;
        self.current.y = 0;
        self.next = random_piece(&mut self.rng);
        self.fall_timer = 0;
        self.gate.reset();
        self.drop_held = false;
        if self.collides(0, 0) {
            self.enter_game_over();
        }
    }

    fn reset_run(&mut self) {
        self.board.clear();
        self.score = 0;
        self.level = 1;
        self.speed = BASE_SPEED;
        self.lines_cleared = 0;
        self.fall_timer = 0;
        self.gate.reset();
        self.drop_held = false;
        self.game_over_at = None;
        self.current = random_piece(&mut self.rng);
        self.next = random_piece(&mut self.rng);
    }

    fn enter_game_over(&mut self) {
        self.phase = Phase::GameOver;
        self.game_over_at = Some(Instant::now());
        if i64::from(self.score) > i64::from(self.high_score) {
            self.high_score = self.score as i32;
            self.store.save(self.score);
        }
    }

    fn gated_move(&mut self, held: bool, dx: i32, dy: i32) {
        if self.phase != Phase::Play {
            return;
        }
        if self.gate.should_repeat(held) {
            if dy > 0 {
                // Soft drop lands the piece when it cannot move further.
                self.drop_step();
            } else {
                self.try_shift(dx, dy);
            }
        }
    }

    /// Feed one user action into the machine. `held` marks a key repeat;
    /// movement and rotation are rate-limited while held, everything else
    /// fires on every call.
    pub fn apply_action(&mut self, action: UserAction, held: bool) {
        match action {
            UserAction::None => {}
            UserAction::Start => {
                if matches!(self.phase, Phase::Start | Phase::GameOver) {
                    if self.phase == Phase::GameOver {
                        self.reset_run();
                    }
                    self.phase = Phase::Play;
                }
            }
            UserAction::Pause => match self.phase {
                Phase::Play => self.phase = Phase::Pause,
                Phase::Pause => self.phase = Phase::Play,
                _ => {}
            },
            UserAction::Terminate => {
                if self.phase != Phase::GameOver {
                    self.enter_game_over();
                }
            }
            UserAction::Mute => self.muted = !self.muted,
            UserAction::Left => self.gated_move(held, -1, 0),
            UserAction::Right => self.gated_move(held, 1, 0),
            UserAction::Down => self.gated_move(held, 0, 1),
            UserAction::Drop => {
                if self.phase == Phase::Play {
                    self.drop_held = held;
                    self.drop_step();
                }
            }
            UserAction::Rotate => {
                if self.phase == Phase::Play && self.gate.should_repeat(held) {
                    self.handle_rotation();
                }
            }
        }
    }

    /// One external tick. Only Play advances the fall timer; a held drop
    /// key bypasses the timer so the piece slams down a row per tick.
    pub fn advance(&mut self) {
        if self.phase != Phase::Play {
            return;
        }
        self.fall_timer += 1;
        let required = if self.drop_held { 0 } else { self.speed };
        if self.fall_timer >= required {
            self.fall_timer = 0;
            self.drop_step();
        }
    }

    /// Should the outer loop shut down? True once the game-over grace
    /// period has elapsed, or immediately on a terminate request after the
    /// run already ended.
    pub fn should_exit(&self, action: UserAction) -> bool {
        match self.game_over_at {
            Some(at) => {
                at.elapsed().as_secs() >= GAME_OVER_GRACE_SECS || action == UserAction::Terminate
            }
            None => false,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.color_grid(),
            current: (&self.current).into(),
            next: (&self.next).into(),
            score: self.score,
            high_score: self.high_score,
            level: self.level,
            lines_cleared: self.lines_cleared,
            phase: self.phase,
            muted: self.muted,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> i32 {
        self.high_score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}
