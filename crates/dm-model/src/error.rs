use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A filter points at a column that is no longer part of the view collection.
    #[error("filter '{filter}' references missing column '{column}'")]
    DanglingColumn { filter: String, column: String },
    #[error("malformed filter item: {0}")]
    MalformedFilterItem(String),
    #[error("malformed filter schema: {0}")]
    MalformedSchema(String),
    #[error("unknown column type: {0}")]
    UnknownColumnType(String),
    #[error("unknown data target: {0}")]
    UnknownTarget(String),
    #[error("unknown app mode: {0}")]
    UnknownMode(String),
    #[error("invalid column id: {0:?}")]
    InvalidColumnId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
