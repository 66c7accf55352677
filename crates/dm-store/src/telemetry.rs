//! Logging setup.

use tracing_subscriber::EnvFilter;

use crate::error::StoreError;
use crate::settings::LoggingSettings;

/// Builds the filter for `settings`.
pub fn env_filter(settings: &LoggingSettings) -> Result<EnvFilter, StoreError> {
    EnvFilter::try_new(&settings.filter).map_err(|e| {
        StoreError::Telemetry(format!("invalid log filter '{}': {e}", settings.filter))
    })
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_tracing(settings: &LoggingSettings) -> Result<(), StoreError> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(settings)?);
    let installed = if settings.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| StoreError::Telemetry(e.to_string()))
}
