//! Store settings.
//!
//! Persisted as TOML. Every section is `#[serde(default)]`, so a partial
//! file only overrides the keys it names:
//! - General: initial mode and the target used when no view is selected
//! - Errors: the strings recorded in the error map and shown in notifications
//! - Logging: filter directive and output format

mod persistence;

pub use persistence::{
    SettingsError, load_settings, load_settings_from, save_settings_to, settings_path,
};

use dm_model::{AppMode, DataTarget};
use serde::{Deserialize, Serialize};

// ============================================================================
// Main Settings Struct
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub errors: ErrorSettings,
    pub logging: LoggingSettings,
}

// ============================================================================
// General Settings
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Mode the store starts in.
    pub mode: AppMode,
    /// Target assumed while no view is selected.
    pub default_target: DataTarget,
}

// ============================================================================
// Error Settings
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorSettings {
    /// Stored in the server error map for every failed call with a response.
    pub server_error_message: String,
    /// Headline of the notification raised for a failed call.
    pub notification_message: String,
}

impl Default for ErrorSettings {
    fn default() -> Self {
        Self {
            server_error_message: "Something went wrong".to_string(),
            notification_message: "Error occurred when loading data".to_string(),
        }
    }
}

// ============================================================================
// Logging Settings
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}
