//! Root application store of the data manager.
//!
//! [`AppStore`] owns the global mode, the view collection, project metadata,
//! the task and annotation data stores and the per-method server error map.
//! Every network call funnels through [`ApiGateway::api_call`], which returns
//! an explicit [`ApiOutcome`] and keeps [`ServerErrors`] and the
//! notification sink in step with it.

pub mod api;
pub mod app_store;
pub mod error;
pub mod gateway;
pub mod notify;
pub mod registry;
pub mod server_errors;
pub mod settings;
pub mod telemetry;
pub mod views;

pub use api::{ApiFailure, ApiOutcome, DataManagerApi};
pub use app_store::AppStore;
pub use error::{Result, StoreError};
pub use gateway::ApiGateway;
pub use notify::{Notification, Notifier, TracingNotifier};
pub use registry::{DataStore, DataStoreFactories, DataStoreFactory, StoreRegistry, UnsetOptions};
pub use server_errors::{ServerError, ServerErrors};
pub use settings::{Settings, SettingsError};
pub use views::ViewCollection;
