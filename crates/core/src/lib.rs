//! Core game logic - pure, deterministic and testable
//!
//! Everything a falling-block game needs except drawing and input devices:
//! the board, piece shapes and kicks, the 7-bag, scoring and the timer-driven
//! state machine. No I/O happens here, and a seeded config replays the same
//! piece sequence every time.
//!
//! # Module Structure
//!
//! - [`board`]: playfield grid with collision tests and row collapse
//! - [`pieces`]: shape table and wall kick tables
//! - [`piece`]: a positioned, rotated piece
//! - [`bag`]: 7-bag randomizer
//! - [`scoring`]: line points, levels and the gravity curve
//! - [`config`]: per-engine timings, geometry and scoring table
//! - [`effects`]: outbound hook for screen shake
//! - [`snapshot`]: read-only view for renderers
//! - [`game_state`]: the engine itself
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use stackfall_core::{GameConfig, GameState};
//! use stackfall_core::types::Direction;
//!
//! let mut game = GameState::new(GameConfig::default().with_seed(12345));
//!
//! game.move_piece(Direction::Right);
//! game.hard_drop();
//! game.update(Duration::from_millis(16));
//!
//! assert!(game.score() > 0); // Hard drop awards points
//! ```
//!
//! # Timing
//!
//! Call [`GameState::update`] once per frame with the elapsed time. Gravity,
//! lock delay, the clear animation and auto-shift all advance from that value
//! alone, so the caller owns the clock.

pub mod bag;
pub mod board;
pub mod config;
pub mod effects;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod scoring;
pub mod snapshot;

pub use stackfall_types as types;

// Re-export commonly used types for convenience
pub use bag::Bag;
pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use effects::EffectsSink;
pub use game_state::GameState;
pub use piece::Piece;
pub use pieces::{get_kicks, get_shape, try_rotate};
pub use scoring::{gravity_for_level, hard_drop_points, level_for_lines, line_clear_points};
pub use snapshot::{ActiveSnapshot, ClearAnimation, GameSnapshot};
