use serde::{Deserialize, Serialize};

use crate::enums::{ColumnType, DataTarget};
use crate::ids::ColumnId;

/// Column definition as delivered by the view collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabColumn {
    pub id: ColumnId,
    pub title: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    pub target: DataTarget,
}

impl TabColumn {
    pub fn new(
        id: ColumnId,
        title: impl Into<String>,
        column_type: ColumnType,
        target: DataTarget,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            column_type,
            target,
        }
    }
}

/// Looks a column up by identity.
pub fn find_column<'a>(columns: &'a [TabColumn], id: &ColumnId) -> Option<&'a TabColumn> {
    columns.iter().find(|column| &column.id == id)
}
