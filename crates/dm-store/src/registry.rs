//! Data store registry.
//!
//! The task and annotation stores are built by other subsystems, possibly
//! after the [`AppStore`](crate::AppStore) exists. They are injected here
//! keyed by [`DataTarget`], a closed set of roles. Reading a role that has
//! not been registered is a configuration error, never a silent default.

use dm_model::{DataTarget, TabColumn};
use std::collections::BTreeMap;

use crate::error::StoreError;

/// How far a data store should reset its selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnsetOptions {
    /// Also drop the highlighted row, not just the open record.
    pub with_highlight: bool,
}

/// A per-target record store (tasks or annotations).
pub trait DataStore {
    /// Clears the current selection. Must be idempotent.
    fn unset(&mut self, options: UnsetOptions);

    /// Whether a record is currently selected.
    fn has_selection(&self) -> bool;
}

#[derive(Default)]
pub struct StoreRegistry {
    stores: BTreeMap<DataTarget, Box<dyn DataStore>>,
}

impl StoreRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `store` for `target`, returning the store it replaces.
    pub fn register(
        &mut self,
        target: DataTarget,
        store: Box<dyn DataStore>,
    ) -> Option<Box<dyn DataStore>> {
        tracing::info!(key = target.registry_key(), "registered data store");
        self.stores.insert(target, store)
    }

    /// Registers under a store key such as `"tasksStore"`.
    pub fn register_named(
        &mut self,
        key: &str,
        store: Box<dyn DataStore>,
    ) -> Result<Option<Box<dyn DataStore>>, StoreError> {
        let target = target_for_key(key)?;
        Ok(self.register(target, store))
    }

    pub fn get(&self, target: DataTarget) -> Result<&dyn DataStore, StoreError> {
        self.stores
            .get(&target)
            .map(|store| store.as_ref())
            .ok_or(StoreError::UnregisteredStore {
                key: target.registry_key(),
            })
    }

    pub fn get_mut(&mut self, target: DataTarget) -> Result<&mut dyn DataStore, StoreError> {
        match self.stores.get_mut(&target) {
            Some(store) => Ok(store.as_mut()),
            None => Err(StoreError::UnregisteredStore {
                key: target.registry_key(),
            }),
        }
    }

    pub fn get_named(&self, key: &str) -> Result<&dyn DataStore, StoreError> {
        self.get(target_for_key(key)?)
    }

    pub fn contains(&self, target: DataTarget) -> bool {
        self.stores.contains_key(&target)
    }

    pub fn remove(&mut self, target: DataTarget) -> Option<Box<dyn DataStore>> {
        self.stores.remove(&target)
    }
}

fn target_for_key(key: &str) -> Result<DataTarget, StoreError> {
    DataTarget::from_registry_key(key).ok_or_else(|| StoreError::UnknownStoreKey(key.to_string()))
}

/// Builds the data store for one target from that target's columns.
pub trait DataStoreFactory {
    /// `None` means this target gets no store.
    fn create(&self, columns: &[TabColumn]) -> Option<Box<dyn DataStore>>;
}

impl<F> DataStoreFactory for F
where
    F: Fn(&[TabColumn]) -> Option<Box<dyn DataStore>>,
{
    fn create(&self, columns: &[TabColumn]) -> Option<Box<dyn DataStore>> {
        self(columns)
    }
}

#[derive(Default)]
pub struct DataStoreFactories {
    by_target: BTreeMap<DataTarget, Box<dyn DataStoreFactory>>,
}

impl DataStoreFactories {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, target: DataTarget, factory: impl DataStoreFactory + 'static) -> Self {
        self.insert(target, factory);
        self
    }

    pub fn insert(&mut self, target: DataTarget, factory: impl DataStoreFactory + 'static) {
        self.by_target.insert(target, Box::new(factory));
    }

    pub fn get(&self, target: DataTarget) -> Option<&dyn DataStoreFactory> {
        self.by_target.get(&target).map(|factory| factory.as_ref())
    }
}
