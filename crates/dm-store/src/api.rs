//! API seam.
//!
//! The backend API is opaque: a set of named methods that each resolve to a
//! JSON payload. A payload carrying a truthy `error` field is a failure; it
//! may also carry the backend's `response` body, whose `detail` is the
//! message meant for the user.

use dm_model::is_truthy;
use serde_json::Value;
use std::future::Future;
use thiserror::Error;

/// Named-method access to the backend, injected into the store.
pub trait DataManagerApi {
    /// Invokes `method` and resolves to its raw result payload.
    ///
    /// Transport problems are reported in-band as an `error` field rather
    /// than as a Rust error.
    fn invoke(
        &self,
        method: &str,
        params: Option<&Value>,
        body: Option<&Value>,
    ) -> impl Future<Output = Value>;
}

/// A failed API call.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("API call failed: {error}")]
pub struct ApiFailure {
    pub error: String,
    pub response: Option<Value>,
    /// The untouched result payload.
    pub raw: Value,
}

impl ApiFailure {
    /// User-facing description: the backend's `detail` if it sent one,
    /// otherwise the error string itself.
    pub fn description(&self) -> String {
        match self.response.as_ref().and_then(|response| response.get("detail")) {
            Some(Value::String(detail)) => detail.clone(),
            Some(detail) if !detail.is_null() => detail.to_string(),
            _ => self.error.clone(),
        }
    }
}

/// Success payload or structured failure. Callers must inspect it; failures
/// are never raised.
pub type ApiOutcome = Result<Value, ApiFailure>;

/// Splits a raw result payload into success or failure.
pub fn classify(raw: Value) -> ApiOutcome {
    let error = match raw.get("error") {
        Some(error) if !is_truthy(error) => None,
        None => None,
        Some(Value::String(error)) => Some(error.clone()),
        Some(other) => Some(other.to_string()),
    };

    match error {
        None => Ok(raw),
        Some(error) => {
            let response = raw.get("response").filter(|r| is_truthy(r)).cloned();
            Err(ApiFailure {
                error,
                response,
                raw,
            })
        }
    }
}
