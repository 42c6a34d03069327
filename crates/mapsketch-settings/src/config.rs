//! Configuration and settings management for MapSketch
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats; the default location is
//! `<config_dir>/mapsketch/config.toml`.
//!
//! Configuration is organized into logical sections:
//! - Shape limits (maximum accepted features per kind)
//! - Drawing settings (circle approximation)
//! - Conflict settings (geometry failure policy)
//! - Notification settings (error banner timing)
//! - Export settings (output file)

use crate::error::{ConfigError, SettingsResult};
use mapsketch_core::ShapeKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Maximum number of accepted features per shape kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeLimits {
    pub circle: usize,
    pub rectangle: usize,
    pub polygon: usize,
    pub line_string: usize,
}

impl Default for ShapeLimits {
    fn default() -> Self {
        Self {
            circle: 5,
            rectangle: 5,
            polygon: 10,
            line_string: 10,
        }
    }
}

impl ShapeLimits {
    /// Same cap for every kind.
    pub fn uniform(max: usize) -> Self {
        Self {
            circle: max,
            rectangle: max,
            polygon: max,
            line_string: max,
        }
    }

    /// Cap for the given kind.
    pub fn max_for(&self, kind: ShapeKind) -> usize {
        match kind {
            ShapeKind::Circle => self.circle,
            ShapeKind::Rectangle => self.rectangle,
            ShapeKind::Polygon => self.polygon,
            ShapeKind::LineString => self.line_string,
        }
    }

    /// Builder-style override of a single cap.
    pub fn with(mut self, kind: ShapeKind, max: usize) -> Self {
        match kind {
            ShapeKind::Circle => self.circle = max,
            ShapeKind::Rectangle => self.rectangle = max,
            ShapeKind::Polygon => self.polygon = max,
            ShapeKind::LineString => self.line_string = max,
        }
        self
    }
}

/// Shape construction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSettings {
    /// Number of segments used to approximate a circle
    pub circle_steps: usize,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self { circle_steps: 64 }
    }
}

/// What to do when a geometric predicate or difference fails while
/// resolving conflicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveFailurePolicy {
    /// Reject the drawn shape
    #[default]
    Reject,
    /// Log, treat the offending existing shape as non-conflicting, continue
    Skip,
}

impl std::fmt::Display for PrimitiveFailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::Skip => write!(f, "skip"),
        }
    }
}

/// Conflict resolution settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConflictSettings {
    #[serde(default)]
    pub on_primitive_failure: PrimitiveFailurePolicy,
}

/// Error banner settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// Time before an error banner dismisses itself
    pub error_dismiss_ms: u64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            error_dismiss_ms: 3000,
        }
    }
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// File name used when exporting into a directory
    pub file_name: String,
    /// Pretty-print the JSON document
    pub pretty: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            file_name: "features.json".to_string(),
            pretty: true,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub limits: ShapeLimits,
    #[serde(default)]
    pub drawing: DrawingSettings,
    #[serde(default)]
    pub conflict: ConflictSettings,
    #[serde(default)]
    pub notifications: NotificationSettings,
    #[serde(default)]
    pub export: ExportSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("mapsketch").join("config.toml"))
            .ok_or(ConfigError::NoConfigDirectory)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = if has_extension(path, "json") {
            serde_json::from_str(&content)?
        } else if has_extension(path, "toml") {
            toml::from_str(&content)?
        } else {
            return Err(unsupported_format(path).into());
        };

        config.validate()?;
        Ok(config)
    }

    /// Load config from file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if has_extension(path, "json") {
            serde_json::to_string_pretty(self)?
        } else if has_extension(path, "toml") {
            toml::to_string_pretty(self)?
        } else {
            return Err(unsupported_format(path).into());
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.drawing.circle_steps < 3 {
            return Err(ConfigError::ValueOutOfRange {
                key: "drawing.circle_steps".to_string(),
                value: self.drawing.circle_steps.to_string(),
            });
        }

        if self.notifications.error_dismiss_ms == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "notifications.error_dismiss_ms".to_string(),
                value: "0".to_string(),
            });
        }

        if self.export.file_name.trim().is_empty() {
            return Err(ConfigError::ValueOutOfRange {
                key: "export.file_name".to_string(),
                value: String::new(),
            });
        }

        Ok(())
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e == ext)
}

fn unsupported_format(path: &Path) -> ConfigError {
    ConfigError::UnsupportedFormat(
        path.extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default(),
    )
}
