use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::enums::{ColumnType, DataTarget};
use crate::filter::TabFilterType;
use crate::ids::ColumnId;

/// A saved tab of the data manager: target, display overrides and filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabView {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub target: DataTarget,
    /// Per-column display type, overriding the column's declared type.
    #[serde(default, rename = "columnsDisplayType")]
    pub columns_display_type: BTreeMap<ColumnId, ColumnType>,
    #[serde(default)]
    pub filters: Vec<TabFilterType>,
}

impl TabView {
    pub fn new(id: impl Into<String>, title: impl Into<String>, target: DataTarget) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            target,
            columns_display_type: BTreeMap::new(),
            filters: Vec::new(),
        }
    }

    pub fn display_type_override(&self, column: &ColumnId) -> Option<ColumnType> {
        self.columns_display_type.get(column).copied()
    }

    /// Renders `column` as `display_type` in this view only.
    pub fn set_display_type(&mut self, column: ColumnId, display_type: ColumnType) {
        self.columns_display_type.insert(column, display_type);
    }

    pub fn clear_display_type(&mut self, column: &ColumnId) -> Option<ColumnType> {
        self.columns_display_type.remove(column)
    }

    pub fn filter(&self, id: &str) -> Option<&TabFilterType> {
        self.filters.iter().find(|filter| filter.id == id)
    }

    pub fn add_filter(&mut self, filter: TabFilterType) {
        self.filters.push(filter);
    }

    pub fn remove_filter(&mut self, id: &str) -> Option<TabFilterType> {
        let index = self.filters.iter().position(|filter| filter.id == id)?;
        Some(self.filters.remove(index))
    }

    /// Drops every filter bound to `column`, returning how many were removed.
    pub fn remove_filters_for(&mut self, column: &ColumnId) -> usize {
        let before = self.filters.len();
        self.filters.retain(|filter| &filter.field != column);
        before - self.filters.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_can_be_set_and_cleared() {
        let column = ColumnId::new("tasks:data.score").unwrap();
        let mut view = TabView::new("1", "Default", DataTarget::Tasks);
        assert_eq!(view.display_type_override(&column), None);

        view.set_display_type(column.clone(), ColumnType::String);
        assert_eq!(view.display_type_override(&column), Some(ColumnType::String));

        assert_eq!(view.clear_display_type(&column), Some(ColumnType::String));
        assert_eq!(view.display_type_override(&column), None);
    }

    #[test]
    fn filters_are_added_and_removed_by_id() {
        let column = ColumnId::new("tasks:completed").unwrap();
        let mut view = TabView::new("1", "Default", DataTarget::Tasks);
        view.add_filter(TabFilterType::new("f1", column.clone(), ColumnType::Boolean));
        view.add_filter(TabFilterType::new("f2", column.clone(), ColumnType::Boolean));

        assert!(view.filter("f1").is_some());
        assert_eq!(view.remove_filter("f1").map(|f| f.id), Some("f1".to_string()));
        assert!(view.remove_filter("f1").is_none());
        assert_eq!(view.remove_filters_for(&column), 1);
        assert!(view.filters.is_empty());
    }
}
