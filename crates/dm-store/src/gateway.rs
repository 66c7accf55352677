//! The single path every API call takes.

use serde_json::Value;

use crate::api::{ApiOutcome, DataManagerApi, classify};
use crate::notify::{Notification, Notifier, TracingNotifier};
use crate::server_errors::ServerErrors;
use crate::settings::ErrorSettings;

/// Wraps the injected API with error bookkeeping and notifications.
pub struct ApiGateway<A> {
    api: A,
    notifier: Box<dyn Notifier>,
    server_errors: ServerErrors,
    messages: ErrorSettings,
}

impl<A: DataManagerApi> ApiGateway<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            notifier: Box::new(TracingNotifier),
            server_errors: ServerErrors::new(),
            messages: ErrorSettings::default(),
        }
    }

    pub fn with_messages(mut self, messages: ErrorSettings) -> Self {
        self.messages = messages;
        self
    }

    pub fn set_notifier(&mut self, notifier: impl Notifier + 'static) {
        self.notifier = Box::new(notifier);
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn server_errors(&self) -> &ServerErrors {
        &self.server_errors
    }

    /// Invokes `method` and returns its outcome.
    ///
    /// On failure the error map entry for `method` is overwritten (when the
    /// backend sent a response body) and a notification is raised. On success
    /// any stale entry for `method` is removed. Either way the outcome is
    /// handed back for the caller to inspect.
    pub async fn api_call(
        &mut self,
        method: &str,
        params: Option<&Value>,
        body: Option<&Value>,
    ) -> ApiOutcome {
        tracing::debug!(method, "api call");
        let outcome = classify(self.api.invoke(method, params, body).await);

        self.server_errors
            .record(method, &outcome, &self.messages.server_error_message);

        if let Err(failure) = &outcome {
            tracing::warn!(method, error = %failure.error, "api call failed");
            self.notifier.notify(&Notification::new(
                self.messages.notification_message.as_str(),
                failure.description(),
            ));
        }

        outcome
    }
}
