//! Settings errors.

use std::io;
use thiserror::Error;

/// Failure to read, write or accept a settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Cannot access settings file: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed JSON settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed TOML settings: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Cannot encode settings as TOML: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("Invalid settings: {0}")]
    Invalid(#[from] ConfigError),
}

/// A settings value or location that cannot be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The file extension is neither `json` nor `toml`.
    #[error("settings files must end in .json or .toml, got '{0}'")]
    UnsupportedFormat(String),

    #[error("{key} = {value} is out of range")]
    ValueOutOfRange { key: String, value: String },

    #[error("no user config directory on this platform")]
    NoConfigDirectory,
}

pub type SettingsResult<T> = Result<T, SettingsError>;
