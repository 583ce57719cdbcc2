//! Game configuration
//!
//! One immutable value per engine instance: board geometry, timings and the
//! scoring table. Two engines with different configs can run side by side.
//!
//! Serialized form uses integer milliseconds for every duration, and every
//! field falls back to its default, so a partial TOML file is valid:
//!
//! ```toml
//! das_ms = 110
//! arr_ms = 0
//! seed = 42
//! ```

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::{
    ARR_MS, BOARD_COLS, CLEAR_ANIM_MS, DAS_MS, GRAVITY_DECAY, GRAVITY_MIN_MS, GRAVITY_START_MS,
    HIDDEN_ROWS, LINES_PER_LEVEL, LINE_SCORES, LOCK_DELAY_MS, QUEUE_LEN, SOFT_DROP_MULTIPLIER,
    SPAWN_X, SPAWN_Y, VISIBLE_ROWS,
};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub cols: usize,
    pub visible_rows: usize,
    pub hidden_rows: usize,
    pub spawn_x: i32,
    pub spawn_y: i32,
    /// Length of the upcoming-piece preview
    pub queue_len: usize,
    /// Gravity interval at level 1
    #[serde(rename = "gravity_start_ms", with = "millis")]
    pub gravity_start: Duration,
    #[serde(rename = "gravity_min_ms", with = "millis")]
    pub gravity_min: Duration,
    /// Per-level factor applied to the gravity interval
    pub gravity_decay: f64,
    #[serde(rename = "lock_delay_ms", with = "millis")]
    pub lock_delay: Duration,
    #[serde(rename = "das_ms", with = "millis")]
    pub das: Duration,
    #[serde(rename = "arr_ms", with = "millis")]
    pub arr: Duration,
    /// Scales the gravity interval while soft drop is held
    pub soft_drop_multiplier: f64,
    #[serde(rename = "clear_anim_ms", with = "millis")]
    pub clear_anim_time: Duration,
    /// Points for 1..=4 rows, multiplied by the level
    pub line_scores: [u32; 4],
    pub lines_per_level: u32,
    /// Bag seed; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: BOARD_COLS as usize,
            visible_rows: VISIBLE_ROWS as usize,
            hidden_rows: HIDDEN_ROWS as usize,
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,
            queue_len: QUEUE_LEN,
            gravity_start: Duration::from_millis(GRAVITY_START_MS),
            gravity_min: Duration::from_millis(GRAVITY_MIN_MS),
            gravity_decay: GRAVITY_DECAY,
            lock_delay: Duration::from_millis(LOCK_DELAY_MS),
            das: Duration::from_millis(DAS_MS),
            arr: Duration::from_millis(ARR_MS),
            soft_drop_multiplier: SOFT_DROP_MULTIPLIER,
            clear_anim_time: Duration::from_millis(CLEAR_ANIM_MS),
            line_scores: LINE_SCORES,
            lines_per_level: LINES_PER_LEVEL,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Same config with a fixed bag seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the config describes a playable game
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cols < 4 {
            return Err(ConfigError::BoardTooNarrow(self.cols));
        }
        if self.visible_rows == 0 {
            return Err(ConfigError::NoVisibleRows);
        }
        if self.spawn_x < 0 || self.spawn_x as usize + 4 > self.cols {
            return Err(ConfigError::SpawnOutOfBounds(self.spawn_x));
        }
        if self.queue_len == 0 {
            return Err(ConfigError::EmptyQueue);
        }
        if self.gravity_min.is_zero() {
            return Err(ConfigError::ZeroGravityFloor);
        }
        if !(self.gravity_decay > 0.0 && self.gravity_decay <= 1.0) {
            return Err(ConfigError::GravityDecay(self.gravity_decay));
        }
        if !(self.soft_drop_multiplier > 0.0) {
            return Err(ConfigError::SoftDropMultiplier(self.soft_drop_multiplier));
        }
        if self.lines_per_level == 0 {
            return Err(ConfigError::ZeroLinesPerLevel);
        }
        Ok(())
    }
}

/// Reasons a config is rejected by [`GameConfig::validate`]
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    BoardTooNarrow(usize),
    NoVisibleRows,
    SpawnOutOfBounds(i32),
    EmptyQueue,
    ZeroGravityFloor,
    GravityDecay(f64),
    SoftDropMultiplier(f64),
    ZeroLinesPerLevel,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BoardTooNarrow(cols) => {
                write!(f, "board must be at least 4 columns wide, got {cols}")
            }
            ConfigError::NoVisibleRows => write!(f, "board needs at least one visible row"),
            ConfigError::SpawnOutOfBounds(x) => {
                write!(f, "spawn column {x} does not fit a 4-wide piece box")
            }
            ConfigError::EmptyQueue => write!(f, "preview queue length must be at least 1"),
            ConfigError::ZeroGravityFloor => write!(f, "gravity_min_ms must be positive"),
            ConfigError::GravityDecay(d) => write!(f, "gravity_decay must be in (0, 1], got {d}"),
            ConfigError::SoftDropMultiplier(m) => {
                write!(f, "soft_drop_multiplier must be positive, got {m}")
            }
            ConfigError::ZeroLinesPerLevel => write!(f, "lines_per_level must be positive"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Serde adapter storing a `Duration` as integer milliseconds
mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
