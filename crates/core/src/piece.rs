//! Live piece - a positioned, rotated instance of a shape
//!
//! Pieces are small `Copy` values. The engine never edits one in place; every
//! move, rotation or hold swap builds a new value and replaces the old one only
//! after the collision check passed.

use crate::pieces::{get_shape, PieceShape};
use crate::types::{PieceKind, Rotation};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Column of the origin (top-left of the 4x4 box)
    pub x: i32,
    /// Row of the origin; may be negative above the grid
    pub y: i32,
}

impl Piece {
    /// A fresh piece in spawn orientation at `(x, y)`
    pub fn new(kind: PieceKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
        }
    }

    /// Cell offsets for the current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute grid cells covered by the piece
    pub fn cells(&self) -> [(i32, i32); 4] {
        self.shape()
            .map(|(dx, dy)| (self.x + dx as i32, self.y + dy as i32))
    }

    /// Same piece shifted by `(dx, dy)`
    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same kind placed with a new rotation and origin
    pub fn placed(&self, rotation: Rotation, x: i32, y: i32) -> Self {
        Self {
            kind: self.kind,
            rotation,
            x,
            y,
        }
    }
}
