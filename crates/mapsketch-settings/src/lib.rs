//! MapSketch Settings Crate
//!
//! Handles drawing configuration: per-kind shape caps, circle resolution,
//! the conflict-resolution failure policy, banner timing and export options.

pub mod config;
pub mod error;

pub use config::{
    Config, ConflictSettings, DrawingSettings, ExportSettings, NotificationSettings,
    PrimitiveFailurePolicy, ShapeLimits,
};
pub use error::{ConfigError, SettingsError, SettingsResult};
