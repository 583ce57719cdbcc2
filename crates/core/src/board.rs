//! Board module - the playfield grid
//!
//! A `cols x (hidden + visible)` grid stored as a flat row-major vector.
//! Rows are indexed top to bottom and the hidden buffer sits at the top, so
//! row `hidden_rows()` is the first row the player sees.
//!
//! Collision rules: anything left or right of the grid and anything at or
//! below the floor is occupied. Cells above the grid (`y < 0`) are never
//! occupied, which lets a piece overlap the top edge before it falls.
//!
//! Dimensions are fixed at construction; only cell contents change.

use crate::piece::Piece;
use crate::pieces::get_shape;
use crate::types::{Cell, PieceKind, Rotation};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cols: usize,
    visible_rows: usize,
    hidden_rows: usize,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(cols: usize, visible_rows: usize, hidden_rows: usize) -> Self {
        Self {
            cols,
            visible_rows,
            hidden_rows,
            cells: vec![None; cols * (visible_rows + hidden_rows)],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.cols || y as usize >= self.height() {
            return None;
        }
        Some(y as usize * self.cols + x as usize)
    }

    pub fn width(&self) -> usize {
        self.cols
    }

    /// Total rows, hidden buffer included
    pub fn height(&self) -> usize {
        self.visible_rows + self.hidden_rows
    }

    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    pub fn hidden_rows(&self) -> usize {
        self.hidden_rows
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether a piece cell at (x, y) would be blocked
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        if x < 0 || x as usize >= self.cols || y >= self.height() as i32 {
            return true;
        }
        if y < 0 {
            return false;
        }
        self.get(x, y).flatten().is_some()
    }

    /// Test a hypothetical placement of `kind`
    pub fn collides_at(&self, kind: PieceKind, rotation: Rotation, x: i32, y: i32) -> bool {
        get_shape(kind, rotation)
            .iter()
            .any(|&(dx, dy)| self.is_occupied(x + dx as i32, y + dy as i32))
    }

    /// Test a piece at its own position
    pub fn collides(&self, piece: &Piece) -> bool {
        self.collides_at(piece.kind, piece.rotation, piece.x, piece.y)
    }

    /// Write the piece's cells into the grid
    ///
    /// The caller guarantees the placement is valid. Cells above the grid are
    /// dropped.
    pub fn lock(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            self.set(x, y, Some(piece.kind));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Indices of all full rows, top to bottom
    pub fn full_rows(&self) -> Vec<usize> {
        (0..self.height()).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Remove `rows` (any order, duplicates ignored) and insert as many empty
    /// rows at the top. Remaining rows keep their relative order.
    ///
    /// Two-pointer pass from the bottom up, moving rows with `copy_within`.
    pub fn collapse(&mut self, rows: &[usize]) {
        let width = self.cols;
        let mut write_y = self.height();

        for read_y in (0..self.height()).rev() {
            if rows.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, write_y * width);
            }
        }

        // Clear the freed rows at the top
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }
    }

    /// Cells of row `y`
    /// Returns None if out of bounds
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height() {
            return None;
        }
        let start = y * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Rows as nested vectors, top to bottom
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(self.cols.max(1))
            .map(|row| row.to_vec())
            .collect()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}
