//! Read-only copy of the engine state for renderers and effects
//!
//! Frontends take a snapshot after `update` returns and draw from it; they
//! never hold a reference into the live engine.

use std::time::Duration;

use crate::piece::Piece;
use crate::types::{Cell, PieceKind, Rotation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
    pub cells: [(i32, i32); 4],
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            cells: value.cells(),
        }
    }
}

/// Progress of a running line clear animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearAnimation {
    pub rows: Vec<usize>,
    pub elapsed: Duration,
    pub duration: Duration,
}

impl ClearAnimation {
    /// Fraction of the animation already played, in `0.0..=1.0`
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub cols: usize,
    pub hidden_rows: usize,
    /// Rows top to bottom, hidden buffer first
    pub board: Vec<Vec<Cell>>,
    pub active: ActiveSnapshot,
    pub ghost_y: i32,
    pub hold: Option<PieceKind>,
    pub hold_used: bool,
    pub queue: Vec<PieceKind>,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub gravity: Duration,
    pub dead: bool,
    pub paused: bool,
    pub clearing: Option<ClearAnimation>,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.dead && !self.paused && self.clearing.is_none()
    }

    /// Visible rows only, top to bottom
    pub fn visible_board(&self) -> &[Vec<Cell>] {
        &self.board[self.hidden_rows.min(self.board.len())..]
    }
}
