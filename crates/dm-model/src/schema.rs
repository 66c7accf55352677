//! Filter schema shapes.
//!
//! A filter schema is absent, an enumerated list of items, or a min/max range.
//! The raw blob is dispatched in this order:
//!
//! 1. falsy input (`null`, `false`, `0`, `""`) means no filter
//! 2. an object with a defined `items` field is a [`FilterValueList`]
//! 3. any other object is a [`FilterValueRange`]
//!
//! Step 3 is a fallback, not a shape test: an object with neither `items`
//! nor `min`/`max` still becomes an (empty) range. That case is logged so it
//! can be traced back to whoever produced the payload.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::value::{FilterItem, ScalarValue, is_truthy};
use crate::ModelError;

/// Ordered list of filter items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterValueList {
    pub items: Vec<FilterItem>,
}

impl FilterValueList {
    pub fn new(items: Vec<FilterItem>) -> Self {
        Self { items }
    }

    /// Plain array of the underlying scalars and labeled records.
    pub fn value(&self) -> Value {
        Value::Array(self.items.iter().map(FilterItem::to_json).collect())
    }
}

/// Inclusive bounds, either side optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterValueRange {
    pub min: Option<ScalarValue>,
    pub max: Option<ScalarValue>,
}

impl FilterValueRange {
    pub fn new(min: Option<ScalarValue>, max: Option<ScalarValue>) -> Self {
        Self { min, max }
    }

    /// `{min, max}` with missing bounds as `null`.
    pub fn value(&self) -> Value {
        serde_json::json!({
            "min": self.min.as_ref().map(ScalarValue::to_json),
            "max": self.max.as_ref().map(ScalarValue::to_json),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterSchema {
    List(FilterValueList),
    Range(FilterValueRange),
}

impl FilterSchema {
    /// Resolves a raw schema blob. `Ok(None)` means the filter has no schema.
    pub fn resolve(raw: &Value) -> Result<Option<Self>, ModelError> {
        if !is_truthy(raw) {
            return Ok(None);
        }

        match raw.get("items") {
            Some(items) if !items.is_null() => {
                let Value::Array(items) = items else {
                    return Err(ModelError::MalformedSchema(format!(
                        "items must be an array, got {items}"
                    )));
                };
                let items = items
                    .iter()
                    .map(FilterItem::resolve)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Some(FilterSchema::List(FilterValueList { items })))
            }
            _ => {
                let Value::Object(fields) = raw else {
                    return Err(ModelError::MalformedSchema(format!(
                        "expected an object, got {raw}"
                    )));
                };
                if !fields.contains_key("min") && !fields.contains_key("max") {
                    tracing::warn!(schema = %raw, "schema has neither items nor bounds, treating as open range");
                }
                let min = range_bound(raw, "min")?;
                let max = range_bound(raw, "max")?;
                Ok(Some(FilterSchema::Range(FilterValueRange { min, max })))
            }
        }
    }

    /// Normalized projection handed to the filter editor and the query builder.
    pub fn value(&self) -> Value {
        match self {
            FilterSchema::List(list) => list.value(),
            FilterSchema::Range(range) => range.value(),
        }
    }

    /// Snapshot in the same shape [`FilterSchema::resolve`] accepts.
    pub fn to_json(&self) -> Value {
        match self {
            FilterSchema::List(list) => serde_json::json!({ "items": list.value() }),
            FilterSchema::Range(range) => range.value(),
        }
    }
}

impl Serialize for FilterSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Serde adapter for `Option<FilterSchema>` fields holding raw schema JSON.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<FilterSchema>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    FilterSchema::resolve(&raw).map_err(serde::de::Error::custom)
}

fn range_bound(raw: &Value, key: &str) -> Result<Option<ScalarValue>, ModelError> {
    match raw.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(bound) => ScalarValue::from_json(bound).map(Some).ok_or_else(|| {
            ModelError::MalformedSchema(format!("{key} must be a scalar, got {bound}"))
        }),
    }
}
