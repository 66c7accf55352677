//! Per-method server error map.
//!
//! The map is a projection of [`ApiOutcome`]s, keyed by API method name:
//! a failure carrying a truthy response body overwrites the entry for its method,
//! a success removes it. A failure without a response body leaves the
//! entry alone. Entries are never expired by time.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::api::ApiOutcome;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerError {
    pub error: String,
    pub response: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ServerErrors {
    entries: BTreeMap<String, ServerError>,
}

impl ServerErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds the outcome of a call to `method` into the map.
    pub fn record(&mut self, method: &str, outcome: &ApiOutcome, message: &str) {
        match outcome {
            Ok(_) => {
                if self.entries.remove(method).is_some() {
                    tracing::debug!(method, "cleared stale server error");
                }
            }
            Err(failure) => {
                if let Some(response) = &failure.response {
                    self.entries.insert(
                        method.to_string(),
                        ServerError {
                            error: message.to_string(),
                            response: response.clone(),
                        },
                    );
                }
            }
        }
    }

    pub fn get(&self, method: &str) -> Option<&ServerError> {
        self.entries.get(method)
    }

    pub fn contains(&self, method: &str) -> bool {
        self.entries.contains_key(method)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ServerError)> {
        self.entries
            .iter()
            .map(|(method, error)| (method.as_str(), error))
    }
}
