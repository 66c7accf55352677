//! Scripted collaborators for store tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use dm_model::{ColumnId, ColumnType, DataTarget, TabColumn, TabView};
use dm_store::{ApiGateway, DataManagerApi, DataStore, UnsetOptions, ViewCollection};
use serde_json::{Value, json};
use tokio::sync::watch;

/// Ordered record of API methods and view-collection steps.
pub type CallLog = Rc<RefCell<Vec<String>>>;

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// API whose responses are queued per method name.
///
/// Methods without a queued response answer `{}`; methods marked as hanging
/// never resolve.
pub struct ScriptedApi {
    responses: RefCell<HashMap<String, VecDeque<Value>>>,
    hanging: Vec<String>,
    log: CallLog,
    loading: RefCell<Option<watch::Receiver<bool>>>,
    loading_seen: RefCell<Vec<bool>>,
}

impl ScriptedApi {
    pub fn new(log: CallLog) -> Self {
        Self {
            responses: RefCell::new(HashMap::new()),
            hanging: Vec::new(),
            log,
            loading: RefCell::new(None),
            loading_seen: RefCell::new(Vec::new()),
        }
    }

    pub fn respond(self, method: &str, payload: Value) -> Self {
        self.responses
            .borrow_mut()
            .entry(method.to_string())
            .or_default()
            .push_back(payload);
        self
    }

    pub fn hang_on(mut self, method: &str) -> Self {
        self.hanging.push(method.to_string());
        self
    }

    /// Samples `loading` at the start of every call from now on.
    pub fn watch_loading(&self, receiver: watch::Receiver<bool>) {
        *self.loading.borrow_mut() = Some(receiver);
    }

    pub fn loading_seen(&self) -> Vec<bool> {
        self.loading_seen.borrow().clone()
    }
}

impl DataManagerApi for ScriptedApi {
    async fn invoke(&self, method: &str, _params: Option<&Value>, _body: Option<&Value>) -> Value {
        self.log.borrow_mut().push(method.to_string());
        if let Some(receiver) = self.loading.borrow().as_ref() {
            self.loading_seen.borrow_mut().push(*receiver.borrow());
        }

        if self.hanging.iter().any(|m| m == method) {
            std::future::pending::<()>().await;
        }

        let next = self
            .responses
            .borrow_mut()
            .get_mut(method)
            .and_then(VecDeque::pop_front);
        next.unwrap_or_else(|| json!({}))
    }
}

/// View collection that loads `available` columns on `fetch_columns` and
/// parses the `views` API payload on `fetch_views`.
pub struct MockViews {
    available: Vec<TabColumn>,
    columns: Vec<TabColumn>,
    views: Vec<TabView>,
    selected: Option<usize>,
    log: CallLog,
    pub columns_present_at_views: Option<bool>,
}

impl MockViews {
    pub fn new(available: Vec<TabColumn>, log: CallLog) -> Self {
        Self {
            available,
            columns: Vec::new(),
            views: Vec::new(),
            selected: None,
            log,
            columns_present_at_views: None,
        }
    }

    /// Already loaded, with `views` and the first one selected.
    pub fn loaded(columns: Vec<TabColumn>, views: Vec<TabView>) -> Self {
        let selected = (!views.is_empty()).then_some(0);
        Self {
            available: columns.clone(),
            columns,
            views,
            selected,
            log: call_log(),
            columns_present_at_views: None,
        }
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn remove_column(&mut self, id: &ColumnId) {
        self.columns.retain(|column| &column.id != id);
    }
}

impl ViewCollection for MockViews {
    fn columns(&self) -> &[TabColumn] {
        &self.columns
    }

    fn selected(&self) -> Option<&TabView> {
        self.selected.and_then(|index| self.views.get(index))
    }

    fn fetch_columns(&mut self) {
        self.log.borrow_mut().push("fetch_columns".to_string());
        self.columns = self.available.clone();
    }

    async fn fetch_views<A: DataManagerApi>(&mut self, gateway: &mut ApiGateway<A>) {
        self.columns_present_at_views = Some(!self.columns.is_empty());
        if let Ok(Value::Array(views)) = gateway.api_call("views", None, None).await {
            self.views = views
                .into_iter()
                .filter_map(|view| serde_json::from_value(view).ok())
                .collect();
            self.selected = (!self.views.is_empty()).then_some(0);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected: Option<u64>,
    pub highlighted: Option<u64>,
}

/// Data store whose state stays inspectable after it is boxed.
pub struct MockDataStore {
    state: Rc<RefCell<SelectionState>>,
}

impl MockDataStore {
    pub fn new(state: SelectionState) -> (Self, Rc<RefCell<SelectionState>>) {
        let state = Rc::new(RefCell::new(state));
        (
            Self {
                state: Rc::clone(&state),
            },
            state,
        )
    }
}

impl DataStore for MockDataStore {
    fn unset(&mut self, options: UnsetOptions) {
        let mut state = self.state.borrow_mut();
        state.selected = None;
        if options.with_highlight {
            state.highlighted = None;
        }
    }

    fn has_selection(&self) -> bool {
        self.state.borrow().selected.is_some()
    }
}

pub fn column(id: &str, column_type: ColumnType, target: DataTarget) -> TabColumn {
    TabColumn::new(ColumnId::new(id).unwrap(), id, column_type, target)
}

pub fn sample_columns() -> Vec<TabColumn> {
    vec![
        column("tasks:id", ColumnType::Number, DataTarget::Tasks),
        column("tasks:data.image", ColumnType::Image, DataTarget::Tasks),
        column("annotations:id", ColumnType::Number, DataTarget::Annotations),
        column("tasks:completed", ColumnType::Boolean, DataTarget::Tasks),
    ]
}
