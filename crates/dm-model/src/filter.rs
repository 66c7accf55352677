//! Filter definition node.
//!
//! A [`TabFilterType`] binds a schema to a column by identity. The column
//! itself lives in the view collection; the filter only holds its id and
//! must resolve it on every use. A filter whose column has disappeared is a
//! referential-integrity failure and is reported as
//! [`ModelError::DanglingColumn`] so the owner can drop the filter.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::column::{TabColumn, find_column};
use crate::enums::ColumnType;
use crate::ids::ColumnId;
use crate::schema::{self, FilterSchema};
use crate::view::TabView;
use crate::ModelError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabFilterType {
    pub id: String,
    pub field: ColumnId,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(default, deserialize_with = "schema::deserialize_optional")]
    schema: Option<FilterSchema>,
}

impl TabFilterType {
    pub fn new(id: impl Into<String>, field: ColumnId, column_type: ColumnType) -> Self {
        Self {
            id: id.into(),
            field,
            column_type,
            schema: None,
        }
    }

    /// Builder-style variant of [`TabFilterType::set_schema`].
    pub fn with_schema(mut self, raw: &Value) -> Result<Self, ModelError> {
        self.set_schema(raw)?;
        Ok(self)
    }

    /// Replaces the schema wholesale, re-running shape dispatch on `raw`.
    ///
    /// On error the previous schema is left untouched.
    pub fn set_schema(&mut self, raw: &Value) -> Result<(), ModelError> {
        self.schema = FilterSchema::resolve(raw)?;
        Ok(())
    }

    pub fn clear_schema(&mut self) {
        self.schema = None;
    }

    pub fn schema(&self) -> Option<&FilterSchema> {
        self.schema.as_ref()
    }

    /// Normalized schema value, `None` when the filter has no schema.
    pub fn value(&self) -> Option<Value> {
        self.schema.as_ref().map(FilterSchema::value)
    }

    /// Value a freshly added filter starts with. Depends on the declared type only.
    pub fn default_value(&self) -> Option<Value> {
        match self.column_type {
            ColumnType::Boolean => Some(Value::Bool(false)),
            _ => None,
        }
    }

    /// Resolves the referenced column.
    pub fn column<'a>(&self, columns: &'a [TabColumn]) -> Result<&'a TabColumn, ModelError> {
        find_column(columns, &self.field).ok_or_else(|| ModelError::DanglingColumn {
            filter: self.id.clone(),
            column: self.field.to_string(),
        })
    }

    /// Effective display type: the view's override for this column if any,
    /// otherwise the column's declared type.
    pub fn current_type(
        &self,
        columns: &[TabColumn],
        view: Option<&TabView>,
    ) -> Result<ColumnType, ModelError> {
        let column = self.column(columns)?;
        let overridden = view.and_then(|view| view.display_type_override(&column.id));
        Ok(overridden.unwrap_or(column.column_type))
    }
}
