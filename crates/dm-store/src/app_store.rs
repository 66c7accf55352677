//! Root application store.

use dm_model::{AppMode, ColumnType, DataTarget, TabColumn, TabFilterType, TabView};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::watch;

use crate::api::{ApiFailure, ApiOutcome, DataManagerApi};
use crate::error::StoreError;
use crate::gateway::ApiGateway;
use crate::notify::Notifier;
use crate::registry::{DataStore, DataStoreFactories, StoreRegistry, UnsetOptions};
use crate::server_errors::ServerErrors;
use crate::settings::Settings;
use crate::views::ViewCollection;

/// Process-wide application state.
///
/// Mutating operations take `&mut self`, so two bootstraps can never run
/// against the same store at once. Embedders that share the store between
/// tasks wrap it in an async mutex.
pub struct AppStore<A, V> {
    mode: AppMode,
    views: V,
    project: Value,
    available_actions: Vec<Value>,
    stores: StoreRegistry,
    gateway: ApiGateway<A>,
    loading: Arc<watch::Sender<bool>>,
    default_target: DataTarget,
}

impl<A: DataManagerApi, V: ViewCollection> AppStore<A, V> {
    pub fn new(api: A, views: V) -> Self {
        Self::with_settings(api, views, &Settings::default())
    }

    pub fn with_settings(api: A, views: V, settings: &Settings) -> Self {
        let (loading, _) = watch::channel(false);
        Self {
            mode: settings.general.mode,
            views,
            project: Value::Object(Map::new()),
            available_actions: Vec::new(),
            stores: StoreRegistry::new(),
            gateway: ApiGateway::new(api).with_messages(settings.errors.clone()),
            loading: Arc::new(loading),
            default_target: settings.general.default_target,
        }
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.gateway.set_notifier(notifier);
        self
    }

    // =========================================================================
    // MODE
    // =========================================================================

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: AppMode) {
        self.mode = mode;
    }

    pub fn is_labelstream_mode(&self) -> bool {
        self.mode == AppMode::Labelstream
    }

    pub fn is_explorer_mode(&self) -> bool {
        self.mode == AppMode::Explorer
    }

    /// True while a record is open in the current data store or the store is
    /// in labelstream mode.
    pub fn is_labeling(&self) -> Result<bool, StoreError> {
        let selected = self.data_store()?.has_selection();
        Ok(selected || self.is_labelstream_mode())
    }

    // =========================================================================
    // STATE ACCESS
    // =========================================================================

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Receiver that observes every change of the loading flag.
    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    pub fn project(&self) -> &Value {
        &self.project
    }

    pub fn available_actions(&self) -> &[Value] {
        &self.available_actions
    }

    pub fn server_errors(&self) -> &ServerErrors {
        self.gateway.server_errors()
    }

    pub fn api(&self) -> &A {
        self.gateway.api()
    }

    pub fn views(&self) -> &V {
        &self.views
    }

    pub fn views_mut(&mut self) -> &mut V {
        &mut self.views
    }

    pub fn current_view(&self) -> Option<&TabView> {
        self.views.selected()
    }

    /// Target of the selected view, or the configured default.
    pub fn target(&self) -> DataTarget {
        self.current_view()
            .map_or(self.default_target, |view| view.target)
    }

    /// Effective display type of `filter` under the current view.
    pub fn filter_current_type(&self, filter: &TabFilterType) -> Result<ColumnType, StoreError> {
        Ok(filter.current_type(self.views.columns(), self.current_view())?)
    }

    // =========================================================================
    // DATA STORES
    // =========================================================================

    pub fn stores(&self) -> &StoreRegistry {
        &self.stores
    }

    pub fn register_store(&mut self, target: DataTarget, store: Box<dyn DataStore>) {
        self.stores.register(target, store);
    }

    pub fn task_store(&self) -> Result<&dyn DataStore, StoreError> {
        self.stores.get(DataTarget::Tasks)
    }

    pub fn annotation_store(&self) -> Result<&dyn DataStore, StoreError> {
        self.stores.get(DataTarget::Annotations)
    }

    /// Data store for the current target.
    pub fn data_store(&self) -> Result<&dyn DataStore, StoreError> {
        self.stores.get(self.target())
    }

    pub fn data_store_mut(&mut self) -> Result<&mut dyn DataStore, StoreError> {
        let target = self.target();
        self.stores.get_mut(target)
    }

    /// Closes the open record in both data stores.
    pub fn unset_task(&mut self) -> Result<(), StoreError> {
        self.unset_both(UnsetOptions::default())
    }

    /// Like [`AppStore::unset_task`], also clearing the highlighted row.
    pub fn unset_selection(&mut self) -> Result<(), StoreError> {
        self.unset_both(UnsetOptions {
            with_highlight: true,
        })
    }

    fn unset_both(&mut self, options: UnsetOptions) -> Result<(), StoreError> {
        self.stores.get_mut(DataTarget::Annotations)?.unset(options);
        self.stores.get_mut(DataTarget::Tasks)?.unset(options);
        Ok(())
    }

    /// Builds one data store per column target and registers it.
    ///
    /// Every target present in the columns needs a factory; the check runs
    /// before any store is created. Returns the targets that received a store.
    pub fn create_data_stores(
        &mut self,
        factories: &DataStoreFactories,
    ) -> Result<Vec<DataTarget>, StoreError> {
        let mut grouped: BTreeMap<DataTarget, Vec<TabColumn>> = BTreeMap::new();
        for column in self.views.columns() {
            grouped
                .entry(column.target)
                .or_default()
                .push(column.clone());
        }

        if let Some(missing) = grouped.keys().find(|target| factories.get(**target).is_none()) {
            return Err(StoreError::MissingFactory(*missing));
        }

        let mut created = Vec::new();
        for (target, columns) in grouped {
            let Some(factory) = factories.get(target) else {
                continue;
            };
            match factory.create(&columns) {
                Some(store) => {
                    self.stores.register(target, store);
                    created.push(target);
                }
                None => tracing::debug!(%target, "factory declined to create a data store"),
            }
        }
        Ok(created)
    }

    // =========================================================================
    // API & BOOTSTRAP
    // =========================================================================

    /// See [`ApiGateway::api_call`].
    pub async fn api_call(
        &mut self,
        method: &str,
        params: Option<&Value>,
        body: Option<&Value>,
    ) -> ApiOutcome {
        self.gateway.api_call(method, params, body).await
    }

    /// Loads project metadata. On failure the previous project is kept.
    pub async fn fetch_project(&mut self) -> Result<(), ApiFailure> {
        self.project = self.gateway.api_call("project", None, None).await?;
        Ok(())
    }

    /// Loads the actions available to the user. On failure the previous list is kept.
    pub async fn fetch_actions(&mut self) -> Result<(), ApiFailure> {
        match self.gateway.api_call("actions", None, None).await? {
            Value::Array(actions) => self.available_actions = actions,
            other => {
                tracing::warn!(payload = %other, "actions payload is not a list, ignoring");
            }
        }
        Ok(())
    }

    /// Runs the bootstrap sequence: project, actions, columns, views.
    ///
    /// Steps run strictly one after another. A failed step does not stop the
    /// sequence and nothing already loaded is rolled back; failures are in
    /// [`AppStore::server_errors`] and were reported to the notifier.
    /// `loading` stays `true` from the first step until the last one returns.
    pub async fn fetch_data(&mut self) {
        let _loading = LoadingGuard::start(&self.loading);

        if let Err(failure) = self.fetch_project().await {
            tracing::debug!(error = %failure.error, "project not loaded");
        }
        if let Err(failure) = self.fetch_actions().await {
            tracing::debug!(error = %failure.error, "actions not loaded");
        }
        self.views.fetch_columns();
        self.views.fetch_views(&mut self.gateway).await;

        tracing::info!(
            columns = self.views.columns().len(),
            server_errors = self.gateway.server_errors().len(),
            "bootstrap finished"
        );
    }
}

/// Holds `loading` at `true`; resets it when dropped, including when the
/// bootstrap future is dropped mid-flight.
struct LoadingGuard(Arc<watch::Sender<bool>>);

impl LoadingGuard {
    fn start(sender: &Arc<watch::Sender<bool>>) -> Self {
        sender.send_replace(true);
        Self(Arc::clone(sender))
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.0.send_replace(false);
    }
}
