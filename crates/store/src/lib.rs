//! Persistence for stackfall - config files and the high score
//!
//! The engine never touches the filesystem; frontends load a [`GameConfig`]
//! and a [`HighScoreStore`] from here before building a game.
//!
//! [`GameConfig`]: stackfall_core::GameConfig

pub mod config;
pub mod error;
pub mod high_score;

pub use config::{config_path, load_config, load_config_from, save_config_to, CONFIG_ENV};
pub use error::StoreError;
pub use high_score::HighScoreStore;
