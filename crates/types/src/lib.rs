//! Shared types - closed enums and default constants
//!
//! Everything here is plain data with no dependencies, so the engine, the
//! persistence layer and any frontend agree on the same vocabulary.
//!
//! # Playfield
//!
//! The default playfield is 10 columns by 20 visible rows, with 2 hidden rows
//! stacked above the visible area. Rows are indexed top to bottom, so rows
//! `0..HIDDEN_ROWS` are the hidden buffer used for spawning and overflow.
//!
//! # Timing defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_START_MS` | 850 | Time per cell at level 1 |
//! | `GRAVITY_MIN_MS` | 60 | Gravity floor |
//! | `GRAVITY_DECAY` | 0.93 | Per-level gravity factor |
//! | `LOCK_DELAY_MS` | 350 | Grace period while resting on the stack |
//! | `DAS_MS` | 130 | Delay before horizontal auto-repeat |
//! | `ARR_MS` | 25 | Interval between auto-repeat shifts |
//! | `SOFT_DROP_MULTIPLIER` | 0.08 | Gravity scale while soft dropping |
//! | `CLEAR_ANIM_MS` | 180 | Line clear animation before collapse |
//!
//! # Examples
//!
//! ```
//! use stackfall_types::{PieceKind, Rotation, RotateDirection};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(Rotation::North.rotated(RotateDirection::Clockwise), Rotation::East);
//! assert_eq!(Rotation::North.rotated(RotateDirection::CounterClockwise), Rotation::West);
//! ```

/// Playfield width in cells
pub const BOARD_COLS: u8 = 10;

/// Rows visible to the player
pub const VISIBLE_ROWS: u8 = 20;

/// Buffer rows above the visible area
pub const HIDDEN_ROWS: u8 = 2;

/// Spawn column of the piece origin (top-left of its 4x4 box)
pub const SPAWN_X: i32 = 3;

/// Spawn row of the piece origin
pub const SPAWN_Y: i32 = 0;

/// Number of upcoming pieces kept in the preview queue
pub const QUEUE_LEN: usize = 5;

pub const GRAVITY_START_MS: u64 = 850;
pub const GRAVITY_MIN_MS: u64 = 60;
pub const GRAVITY_DECAY: f64 = 0.93;
pub const LOCK_DELAY_MS: u64 = 350;
pub const DAS_MS: u64 = 130;
pub const ARR_MS: u64 = 25;

/// Gravity interval is multiplied by this while soft drop is held (smaller = faster)
pub const SOFT_DROP_MULTIPLIER: f64 = 0.08;

pub const CLEAR_ANIM_MS: u64 = 180;

/// Base points for clearing 1, 2, 3 and 4 rows, multiplied by the level
pub const LINE_SCORES: [u32; 4] = [100, 300, 500, 800];

pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cell travelled by a hard drop
pub const HARD_DROP_POINTS_PER_CELL: u32 = 2;

/// Screen shake requested on a clear is `SHAKE_BASE + SHAKE_PER_LINE * rows`
pub const SHAKE_BASE: f32 = 3.0;
pub const SHAKE_PER_LINE: f32 = 2.0;

/// The seven piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in table order (the order a fresh bag is filled in)
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Index into per-kind tables
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color used for cells locked by this kind
    ///
    /// ```
    /// use stackfall_types::{PieceKind, Rgb};
    ///
    /// assert_eq!(PieceKind::I.color(), Rgb::new(0, 220, 235));
    /// ```
    pub const fn color(self) -> Rgb {
        PIECE_COLORS[self.index()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

const PIECE_COLORS: [Rgb; 7] = [
    Rgb::new(0, 220, 235),
    Rgb::new(245, 230, 0),
    Rgb::new(175, 90, 255),
    Rgb::new(0, 220, 80),
    Rgb::new(255, 70, 80),
    Rgb::new(60, 90, 255),
    Rgb::new(255, 160, 0),
];

/// Rotation states
///
/// - **North**: spawn orientation (state 0)
/// - **East**: 90° clockwise (state 1)
/// - **South**: 180° (state 2)
/// - **West**: 270° clockwise (state 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Rotation state as 0..=3
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Rotation state from any integer, taken modulo 4
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use stackfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub const fn rotate_cw(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Rotate counter-clockwise (-90°)
    pub const fn rotate_ccw(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    pub const fn rotated(self, direction: RotateDirection) -> Self {
        match direction {
            RotateDirection::Clockwise => self.rotate_cw(),
            RotateDirection::CounterClockwise => self.rotate_ccw(),
        }
    }
}

/// Rotation direction of a player rotate command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotateDirection {
    Clockwise,
    CounterClockwise,
}

/// Horizontal direction of a shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta for one shift
    pub const fn dx(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// A playfield cell: `None` is empty, `Some(kind)` holds the color of `kind`
pub type Cell = Option<PieceKind>;
