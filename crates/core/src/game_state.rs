//! Game state module - the engine state machine
//!
//! Ties together the board, the bag, the preview queue and the live piece, and
//! runs every timer: gravity, lock delay, the line clear animation and
//! horizontal auto-repeat (DAS/ARR).
//!
//! Flow per piece: spawn, fall under player control, rest on the stack until
//! the lock delay expires (or hard drop), lock, then either spawn again or run
//! the clear animation and collapse the rows before spawning. A spawn or hold
//! swap into occupied cells ends the game; only `reset` leaves that state.
//!
//! Rejected actions are silent: they return `false` (or nothing) and leave the
//! state untouched. Nothing here does I/O.

use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

use log::{debug, trace};

use crate::bag::Bag;
use crate::board::Board;
use crate::config::GameConfig;
use crate::effects::EffectsSink;
use crate::piece::Piece;
use crate::pieces::try_rotate;
use crate::scoring::{gravity_for_level, hard_drop_points, level_for_lines, line_clear_points};
use crate::snapshot::{ActiveSnapshot, ClearAnimation, GameSnapshot};
use crate::types::{Direction, PieceKind, RotateDirection, SHAKE_BASE, SHAKE_PER_LINE};

/// Complete game state
pub struct GameState {
    config: GameConfig,
    board: Board,
    bag: Bag,
    queue: VecDeque<PieceKind>,
    current: Piece,
    hold: Option<PieceKind>,
    hold_used: bool,
    score: u32,
    lines: u32,
    level: u32,
    /// Time per cell at the current level
    gravity: Duration,
    drop_acc: Duration,
    lock_timer: Duration,
    dead: bool,
    paused: bool,
    soft_drop: bool,
    left_held: bool,
    right_held: bool,
    /// Direction the last auto-shift frame acted on
    last_dir: Option<Direction>,
    das_timer: Duration,
    arr_timer: Duration,
    /// Remaining clear animation time; non-zero while rows are clearing
    clear_timer: Duration,
    /// Rows animating out and waiting to be collapsed
    clearing_rows: Vec<usize>,
    /// Rows of the latest clear, until the frontend drains them
    cleared_rows: Vec<usize>,
    effects: Option<Box<dyn EffectsSink>>,
}

impl GameState {
    /// Create a new game on an empty board and spawn the first piece
    pub fn new(config: GameConfig) -> Self {
        let board = Self::empty_board(&config);
        Self::build(config, board, None)
    }

    /// Create a new game that reports shakes to `effects`
    pub fn with_effects(config: GameConfig, effects: Box<dyn EffectsSink>) -> Self {
        let board = Self::empty_board(&config);
        Self::build(config, board, Some(effects))
    }

    /// Create a new game on a pre-filled board
    ///
    /// The first piece spawns immediately, so a board blocked at the spawn
    /// cells yields a dead game.
    pub fn with_board(config: GameConfig, board: Board) -> Self {
        Self::build(config, board, None)
    }

    /// Attach or replace the effects sink
    pub fn set_effects(&mut self, effects: Box<dyn EffectsSink>) {
        self.effects = Some(effects);
    }

    fn empty_board(config: &GameConfig) -> Board {
        Board::new(config.cols, config.visible_rows, config.hidden_rows)
    }

    fn build(config: GameConfig, board: Board, effects: Option<Box<dyn EffectsSink>>) -> Self {
        let mut bag = Bag::from_seed(config.seed);
        let queue: VecDeque<PieceKind> = (0..config.queue_len.max(1)).map(|_| bag.next()).collect();
        let gravity = gravity_for_level(&config, 1);
        let placeholder = Piece::new(PieceKind::I, config.spawn_x, config.spawn_y);

        let mut state = Self {
            config,
            board,
            bag,
            queue,
            current: placeholder,
            hold: None,
            hold_used: false,
            score: 0,
            lines: 0,
            level: 1,
            gravity,
            drop_acc: Duration::ZERO,
            lock_timer: Duration::ZERO,
            dead: false,
            paused: false,
            soft_drop: false,
            left_held: false,
            right_held: false,
            last_dir: None,
            das_timer: Duration::ZERO,
            arr_timer: Duration::ZERO,
            clear_timer: Duration::ZERO,
            clearing_rows: Vec::new(),
            cleared_rows: Vec::new(),
            effects,
        };
        state.spawn_piece();
        state
    }

    /// Restart with a fresh board, bag and score. Config and effects are kept.
    pub fn reset(&mut self) {
        let effects = self.effects.take();
        let config = self.config.clone();
        let board = Self::empty_board(&config);
        *self = Self::build(config, board, effects);
        debug!("game reset");
    }

    // ---- queries ----

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Piece {
        self.current
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn hold_used(&self) -> bool {
        self.hold_used
    }

    /// Upcoming kinds, next first
    pub fn queue(&self) -> &VecDeque<PieceKind> {
        &self.queue
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn gravity(&self) -> Duration {
        self.gravity
    }

    pub fn lock_timer(&self) -> Duration {
        self.lock_timer
    }

    pub fn dead(&self) -> bool {
        self.dead
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn soft_drop(&self) -> bool {
        self.soft_drop
    }

    /// Whether a line clear animation is running
    pub fn is_clearing(&self) -> bool {
        !self.clear_timer.is_zero()
    }

    /// Rows currently animating out
    pub fn clearing_rows(&self) -> &[usize] {
        &self.clearing_rows
    }

    pub fn clear_animation(&self) -> Option<ClearAnimation> {
        if !self.is_clearing() {
            return None;
        }
        let duration = self.config.clear_anim_time;
        Some(ClearAnimation {
            rows: self.clearing_rows.clone(),
            elapsed: duration.saturating_sub(self.clear_timer),
            duration,
        })
    }

    /// Drain the rows of the latest clear event
    ///
    /// Returns them once; later calls return an empty list until the next clear.
    pub fn take_cleared_rows(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.cleared_rows)
    }

    /// Whether the piece is resting on the stack or the floor
    pub fn is_grounded(&self) -> bool {
        self.board.collides(&self.current.moved(0, 1))
    }

    /// Row the current piece would land on
    pub fn ghost_y(&self) -> i32 {
        self.current.y + self.drop_distance()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cols: self.board.width(),
            hidden_rows: self.board.hidden_rows(),
            board: self.board.to_rows(),
            active: ActiveSnapshot::from(self.current),
            ghost_y: self.ghost_y(),
            hold: self.hold,
            hold_used: self.hold_used,
            queue: self.queue.iter().copied().collect(),
            score: self.score,
            lines: self.lines,
            level: self.level,
            gravity: self.gravity,
            dead: self.dead,
            paused: self.paused,
            clearing: self.clear_animation(),
        }
    }

    // ---- input state ----

    /// Soft drop scales gravity while held
    pub fn set_soft_drop(&mut self, active: bool) {
        self.soft_drop = active;
    }

    /// Horizontal keys currently held; `update` turns them into shifts
    pub fn set_horizontal_held(&mut self, left: bool, right: bool) {
        self.left_held = left;
        self.right_held = right;
    }

    // ---- actions ----

    /// Manual actions are ignored while dead, paused or clearing
    fn actions_blocked(&self) -> bool {
        self.dead || self.paused || self.is_clearing()
    }

    /// Shift the piece one column; resets the lock delay on success
    pub fn move_piece(&mut self, direction: Direction) -> bool {
        if self.actions_blocked() {
            return false;
        }
        let moved = self.current.moved(direction.dx(), 0);
        if self.board.collides(&moved) {
            return false;
        }
        self.current = moved;
        self.lock_timer = Duration::ZERO;
        true
    }

    /// Rotate with wall kicks. O pieces always rotate in place.
    pub fn rotate(&mut self, direction: RotateDirection) -> bool {
        if self.actions_blocked() {
            return false;
        }

        let piece = self.current;
        let target = piece.rotation.rotated(direction);

        if piece.kind == PieceKind::O {
            self.current = piece.placed(target, piece.x, piece.y);
            self.lock_timer = Duration::ZERO;
            return true;
        }

        let board = &self.board;
        let result = try_rotate(piece.kind, piece.rotation, piece.x, piece.y, target, |r, x, y| {
            board.collides_at(piece.kind, r, x, y)
        });

        match result {
            Some((rotation, x, y)) => {
                self.current = piece.placed(rotation, x, y);
                self.lock_timer = Duration::ZERO;
                true
            }
            None => {
                trace!(
                    "rotation {:?} -> {:?} rejected for {}",
                    piece.rotation,
                    target,
                    piece.kind
                );
                false
            }
        }
    }

    /// Drop to the landing row and lock at once, scoring 2 points per cell
    pub fn hard_drop(&mut self) -> bool {
        if self.actions_blocked() {
            return false;
        }
        let distance = self.drop_distance();
        self.current = self.current.moved(0, distance);
        self.score = self
            .score
            .saturating_add(hard_drop_points(distance as u32));
        self.lock_timer = Duration::ZERO;
        self.lock_piece();
        true
    }

    /// Stash the current kind, or swap it with the held one. Once per spawn.
    pub fn hold(&mut self) -> bool {
        if self.actions_blocked() || self.hold_used {
            return false;
        }

        let current_kind = self.current.kind;
        match self.hold.replace(current_kind) {
            None => self.spawn_piece(),
            Some(held) => {
                let swapped = Piece::new(held, self.config.spawn_x, self.config.spawn_y);
                self.current = swapped;
                self.lock_timer = Duration::ZERO;
                if self.board.collides(&swapped) {
                    self.dead = true;
                    debug!("game over: held {} does not fit at spawn", held);
                }
            }
        }
        self.hold_used = true;
        debug!("hold {} -> playing {}", current_kind, self.current.kind);
        true
    }

    /// Spawn the next queued piece
    pub fn spawn(&mut self) {
        if self.actions_blocked() {
            return;
        }
        self.spawn_piece();
    }

    /// Pause or resume; timers restart from zero on either edge
    pub fn toggle_pause(&mut self) {
        if self.dead {
            return;
        }
        self.paused = !self.paused;
        self.drop_acc = Duration::ZERO;
        self.das_timer = Duration::ZERO;
        self.arr_timer = Duration::ZERO;
        debug!("paused: {}", self.paused);
    }

    // ---- time step ----

    /// Advance the simulation by `dt`
    pub fn update(&mut self, dt: Duration) {
        if self.dead || self.paused {
            return;
        }

        if self.is_clearing() {
            self.clear_timer = self.clear_timer.saturating_sub(dt);
            if self.clear_timer.is_zero() {
                self.finish_clear();
            }
            return;
        }

        self.apply_gravity(dt);
        self.apply_lock_delay(dt);
        self.apply_auto_shift(dt);
    }

    fn apply_gravity(&mut self, dt: Duration) {
        let interval = if self.soft_drop {
            let scaled = self.gravity.as_secs_f64() * self.config.soft_drop_multiplier;
            Duration::try_from_secs_f64(scaled).unwrap_or(self.gravity)
        } else {
            self.gravity
        };

        self.drop_acc = self.drop_acc.saturating_add(dt);
        while self.drop_acc >= interval {
            self.drop_acc -= interval;
            if !self.step_down() {
                break;
            }
        }
    }

    fn apply_lock_delay(&mut self, dt: Duration) {
        if !self.is_grounded() {
            self.lock_timer = Duration::ZERO;
            return;
        }
        self.lock_timer = self.lock_timer.saturating_add(dt);
        if self.lock_timer >= self.config.lock_delay {
            self.lock_timer = Duration::ZERO;
            self.lock_piece();
        }
    }

    fn apply_auto_shift(&mut self, dt: Duration) {
        let dir = match (self.left_held, self.right_held) {
            (true, false) => Direction::Left,
            (false, true) => Direction::Right,
            _ => {
                self.das_timer = Duration::ZERO;
                self.arr_timer = Duration::ZERO;
                self.last_dir = None;
                return;
            }
        };

        // Fresh press: one shift now, repeat only after DAS
        if self.last_dir != Some(dir) {
            self.last_dir = Some(dir);
            self.das_timer = Duration::ZERO;
            self.arr_timer = Duration::ZERO;
            self.move_piece(dir);
            return;
        }

        self.das_timer = self.das_timer.saturating_add(dt);
        if self.das_timer < self.config.das {
            return;
        }

        self.arr_timer = self.arr_timer.saturating_add(dt);
        while self.arr_timer >= self.config.arr {
            self.arr_timer -= self.config.arr;
            if !self.move_piece(dir) {
                break;
            }
        }
    }

    fn step_down(&mut self) -> bool {
        if self.actions_blocked() {
            return false;
        }
        let moved = self.current.moved(0, 1);
        if self.board.collides(&moved) {
            return false;
        }
        self.current = moved;
        true
    }

    fn drop_distance(&self) -> i32 {
        let mut dy = 0;
        while !self.board.collides(&self.current.moved(0, dy + 1)) {
            dy += 1;
        }
        dy
    }

    // ---- piece lifecycle ----

    fn spawn_piece(&mut self) {
        let kind = match self.queue.pop_front() {
            Some(kind) => kind,
            None => self.bag.next(),
        };
        self.queue.push_back(self.bag.next());

        self.current = Piece::new(kind, self.config.spawn_x, self.config.spawn_y);
        self.hold_used = false;
        self.lock_timer = Duration::ZERO;

        if self.board.collides(&self.current) {
            self.dead = true;
            debug!("game over: {} blocked at spawn, score {}", kind, self.score);
        } else {
            debug!("spawned {}", kind);
        }
    }

    /// Write the piece into the board, then start a clear or spawn the next piece
    fn lock_piece(&mut self) {
        self.board.lock(&self.current);

        let full = self.board.full_rows();
        if full.is_empty() {
            debug!("locked {} at ({}, {})", self.current.kind, self.current.x, self.current.y);
            self.spawn_piece();
            return;
        }

        let count = full.len();
        let points = line_clear_points(&self.config.line_scores, count, self.level);
        self.score = self.score.saturating_add(points);
        self.lines += count as u32;
        self.level = level_for_lines(self.lines, self.config.lines_per_level);
        self.gravity = gravity_for_level(&self.config, self.level);
        debug!(
            "cleared rows {:?}: +{} points, lines {}, level {}",
            full, points, self.lines, self.level
        );

        if let Some(effects) = self.effects.as_mut() {
            effects.shake(SHAKE_BASE + SHAKE_PER_LINE * count as f32);
        }

        self.cleared_rows = full.clone();

        if self.config.clear_anim_time.is_zero() {
            self.board.collapse(&full);
            self.spawn_piece();
            return;
        }

        self.clearing_rows = full;
        self.clear_timer = self.config.clear_anim_time;
    }

    fn finish_clear(&mut self) {
        if !self.clearing_rows.is_empty() {
            self.board.collapse(&self.clearing_rows);
            self.clearing_rows.clear();
        }
        self.spawn_piece();
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("current", &self.current)
            .field("hold", &self.hold)
            .field("queue", &self.queue)
            .field("score", &self.score)
            .field("lines", &self.lines)
            .field("level", &self.level)
            .field("dead", &self.dead)
            .field("paused", &self.paused)
            .field("clearing_rows", &self.clearing_rows)
            .finish_non_exhaustive()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
