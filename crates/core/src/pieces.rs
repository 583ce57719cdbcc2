//! Pieces module - shape table and wall kick tables
//!
//! Shapes are drawn once as 4x4 bitmaps in spawn orientation and rotated
//! clockwise three times at compile time. The O piece keeps its spawn cells
//! in every state so rotating it never shifts it sideways.
//!
//! Kick offsets use the SRS values with y growing downwards.
//! Reference: https://tetris.wiki/SRS

use crate::types::{PieceKind, Rotation};

/// Offset of a single cell relative to the piece origin
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the piece origin
pub type PieceShape = [CellOffset; 4];

type Bitmap = [[bool; 4]; 4];

/// Spawn orientation bitmaps, in `PieceKind::ALL` order
const SPAWN_BITMAPS: [[&[u8; 4]; 4]; 7] = [
    [b"....", b"####", b"....", b"...."],
    [b".##.", b".##.", b"....", b"...."],
    [b".#..", b"###.", b"....", b"...."],
    [b".##.", b"##..", b"....", b"...."],
    [b"##..", b".##.", b"....", b"...."],
    [b"#...", b"###.", b"....", b"...."],
    [b"..#.", b"###.", b"....", b"...."],
];

const fn parse_bitmap(rows: [&[u8; 4]; 4]) -> Bitmap {
    let mut out = [[false; 4]; 4];
    let mut y = 0;
    while y < 4 {
        let mut x = 0;
        while x < 4 {
            out[y][x] = rows[y][x] == b'#';
            x += 1;
        }
        y += 1;
    }
    out
}

/// Rotate a 4x4 bitmap 90° clockwise
const fn rotate_bitmap(grid: Bitmap) -> Bitmap {
    let mut out = [[false; 4]; 4];
    let mut y = 0;
    while y < 4 {
        let mut x = 0;
        while x < 4 {
            out[y][x] = grid[3 - x][y];
            x += 1;
        }
        y += 1;
    }
    out
}

/// Filled cells in row-major order. Panics (at compile time) unless exactly 4 are set.
const fn bitmap_cells(grid: Bitmap) -> PieceShape {
    let mut out = [(0, 0); 4];
    let mut n = 0;
    let mut y = 0;
    while y < 4 {
        let mut x = 0;
        while x < 4 {
            if grid[y][x] {
                out[n] = (x as i8, y as i8);
                n += 1;
            }
            x += 1;
        }
        y += 1;
    }
    assert!(n == 4, "piece bitmap must have exactly 4 cells");
    out
}

const fn build_shapes() -> [[PieceShape; 4]; 7] {
    let mut table = [[[(0, 0); 4]; 4]; 7];
    let mut kind = 0;
    while kind < 7 {
        let mut grid = parse_bitmap(SPAWN_BITMAPS[kind]);
        let mut rot = 0;
        while rot < 4 {
            table[kind][rot] = bitmap_cells(grid);
            grid = rotate_bitmap(grid);
            rot += 1;
        }
        kind += 1;
    }

    // O never wiggles: every state reuses the spawn cells.
    let o = PieceKind::O.index();
    let spawn = table[o][0];
    table[o] = [spawn; 4];
    table
}

static SHAPES: [[PieceShape; 4]; 7] = build_shapes();

/// Get the shape (cell offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    SHAPES[kind.index()][rotation.index()]
}

/// Kick families. J, L, S, T and Z share one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KickFamily {
    I,
    O,
    Jlstz,
}

impl KickFamily {
    pub fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => KickFamily::I,
            PieceKind::O => KickFamily::O,
            _ => KickFamily::Jlstz,
        }
    }
}

/// Candidates for each of the 8 clockwise/counter-clockwise transitions
pub type KickTable = [[CellOffset; 5]; 8];

/// JLSTZ kick table, indexed by `transition_index`
const JLSTZ_KICKS: KickTable = [
    // 0->1
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 1->0
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 1->2
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 2->1
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 2->3
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 3->2
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 3->0
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 0->3
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
];

/// I piece kick table
const I_KICKS: KickTable = [
    // 0->1
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    // 1->0
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    // 1->2
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    // 2->1
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
    // 2->3
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    // 3->2
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    // 3->0
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
    // 0->3
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
];

/// Plain rotation with no kick
const NO_KICK: [CellOffset; 1] = [(0, 0)];

/// Table row for a (from, to) pair, or `None` for pairs that are not adjacent
fn transition_index(from: Rotation, to: Rotation) -> Option<usize> {
    use Rotation::*;
    match (from, to) {
        (North, East) => Some(0),
        (East, North) => Some(1),
        (East, South) => Some(2),
        (South, East) => Some(3),
        (South, West) => Some(4),
        (West, South) => Some(5),
        (West, North) => Some(6),
        (North, West) => Some(7),
        _ => None,
    }
}

/// Ordered kick candidates for rotating `kind` from `from` to `to`
///
/// The first candidate that does not collide wins. O pieces and untabled
/// pairs get a single `(0, 0)` candidate.
pub fn get_kicks(kind: PieceKind, from: Rotation, to: Rotation) -> &'static [CellOffset] {
    let table = match KickFamily::of(kind) {
        KickFamily::O => return &NO_KICK,
        KickFamily::I => &I_KICKS,
        KickFamily::Jlstz => &JLSTZ_KICKS,
    };
    match transition_index(from, to) {
        Some(idx) => &table[idx],
        None => &NO_KICK,
    }
}

/// Try to rotate a piece with wall kicks
///
/// Returns the new rotation and the kicked origin for the first candidate
/// where `collides` is false, or `None` if every candidate collides.
pub fn try_rotate(
    kind: PieceKind,
    rotation: Rotation,
    x: i32,
    y: i32,
    new_rotation: Rotation,
    collides: impl Fn(Rotation, i32, i32) -> bool,
) -> Option<(Rotation, i32, i32)> {
    get_kicks(kind, rotation, new_rotation)
        .iter()
        .map(|&(dx, dy)| (x + dx as i32, y + dy as i32))
        .find(|&(nx, ny)| !collides(new_rotation, nx, ny))
        .map(|(nx, ny)| (new_rotation, nx, ny))
}
