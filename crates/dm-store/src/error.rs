use dm_model::{DataTarget, ModelError};
use thiserror::Error;

/// Configuration and consistency failures of the store layer.
///
/// API failures are not represented here; they travel as
/// [`ApiFailure`](crate::ApiFailure) values inside an [`ApiOutcome`](crate::ApiOutcome).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no data store registered under '{key}'")]
    UnregisteredStore { key: &'static str },
    #[error("unknown data store key: {0}")]
    UnknownStoreKey(String),
    #[error("no data store factory for target '{0}'")]
    MissingFactory(DataTarget),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("failed to initialize logging: {0}")]
    Telemetry(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
