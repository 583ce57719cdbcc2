//! Config file loading
//!
//! Lookup order: an explicit path, then `$STACKFALL_CONFIG`, then
//! `<config_dir>/stackfall/config.toml`. A missing file means defaults; a file
//! that fails to parse or validate is an error.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use stackfall_core::GameConfig;

use crate::error::StoreError;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "STACKFALL_CONFIG";

/// Fallback when the platform has no config directory
const LOCAL_CONFIG_PATH: &str = "stackfall.toml";

/// Where the config file is looked up when no explicit path is given
pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return PathBuf::from(path);
    }

    match dirs::config_dir() {
        Some(dir) => dir.join("stackfall").join("config.toml"),
        None => PathBuf::from(LOCAL_CONFIG_PATH),
    }
}

/// Load the config from `path`, or from [`config_path`] when `None`
pub fn load_config(path: Option<&Path>) -> Result<GameConfig, StoreError> {
    match path {
        Some(path) => load_config_from(path),
        None => load_config_from(&config_path()),
    }
}

/// Load and validate the config at `path`; defaults when the file is missing
pub fn load_config_from(path: &Path) -> Result<GameConfig, StoreError> {
    if !path.exists() {
        debug!("no config at {}, using defaults", path.display());
        return Ok(GameConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: GameConfig = toml::from_str(&contents)?;
    config.validate()?;
    debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Write `config` as TOML, creating parent directories
pub fn save_config_to(config: &GameConfig, path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let text = toml::to_string_pretty(config)?;
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().expect("temp dir");
        let config = load_config_from(&dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("custom.toml");
        fs::write(&path, "lock_delay_ms = 500\n").expect("write config");

        let config = load_config(Some(&path)).expect("load");
        assert_eq!(config.lock_delay, Duration::from_millis(500));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("bad.toml");
        fs::write(&path, "cols = 2\n").expect("write config");

        assert!(matches!(load_config_from(&path), Err(StoreError::Invalid(_))));
    }
}
