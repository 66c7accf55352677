//! Data model for the data manager's filter and view layer.
//!
//! Raw filter payloads arrive as untyped JSON. This crate performs the
//! structural dispatch once, at the boundary, and hands the rest of the
//! system closed enums to match on:
//!
//! - [`value`]: scalar vs. labeled filter items
//! - [`schema`]: no filter vs. item list vs. min/max range
//! - [`filter`]: the filter definition node bound to a column
//! - [`column`] / [`view`]: the columns and tab views a filter refers to
//! - [`enums`]: column types, data targets and the application mode

pub mod column;
pub mod enums;
pub mod error;
pub mod filter;
pub mod ids;
pub mod schema;
pub mod value;
pub mod view;

pub use column::{TabColumn, find_column};
pub use enums::{AppMode, ColumnType, DataTarget};
pub use error::{ModelError, Result};
pub use filter::TabFilterType;
pub use ids::ColumnId;
pub use schema::{FilterSchema, FilterValueList, FilterValueRange};
pub use value::{FilterItem, LabeledValue, ScalarValue, is_truthy};
pub use view::TabView;
