use std::fmt;
use std::io;

use stackfall_core::ConfigError;

/// Errors from reading or writing stored files
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Json(serde_json::Error),
    TomlParse(toml::de::Error),
    TomlSerialize(toml::ser::Error),
    /// The file parsed but describes an unplayable game
    Invalid(ConfigError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "i/o error: {err}"),
            StoreError::Json(err) => write!(f, "invalid JSON: {err}"),
            StoreError::TomlParse(err) => write!(f, "invalid TOML: {err}"),
            StoreError::TomlSerialize(err) => write!(f, "cannot serialize TOML: {err}"),
            StoreError::Invalid(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(err) => Some(err),
            StoreError::Json(err) => Some(err),
            StoreError::TomlParse(err) => Some(err),
            StoreError::TomlSerialize(err) => Some(err),
            StoreError::Invalid(err) => Some(err),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Json(err)
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(err: toml::de::Error) -> Self {
        StoreError::TomlParse(err)
    }
}

impl From<toml::ser::Error> for StoreError {
    fn from(err: toml::ser::Error) -> Self {
        StoreError::TomlSerialize(err)
    }
}

impl From<ConfigError> for StoreError {
    fn from(err: ConfigError) -> Self {
        StoreError::Invalid(err)
    }
}
