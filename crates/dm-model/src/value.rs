//! Filter item values.
//!
//! A filter item is either a bare scalar or a `{value, title, color}` record.
//! The raw payload carries no tag, so [`FilterItem::resolve`] decides by shape:
//! a JSON object with a defined (non-null) `value` field is a labeled value,
//! anything else is treated as a scalar.
//!
//! A labeled record whose `value` is `null` or missing fails the shape test
//! and is routed to the scalar branch, where it is rejected because objects
//! are not scalars. Callers cannot construct such a record by accident through
//! this module, only by handing in malformed JSON.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

use crate::ModelError;

/// A filter value without further structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Boolean(bool),
    Number(Number),
    String(String),
}

impl ScalarValue {
    /// Reads a scalar out of raw JSON. Nulls, arrays and objects are not scalars.
    pub fn from_json(raw: &Value) -> Option<Self> {
        match raw {
            Value::Bool(b) => Some(ScalarValue::Boolean(*b)),
            Value::Number(n) => Some(ScalarValue::Number(n.clone())),
            Value::String(s) => Some(ScalarValue::String(s.clone())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            ScalarValue::Boolean(b) => Value::Bool(*b),
            ScalarValue::Number(n) => Value::Number(n.clone()),
            ScalarValue::String(s) => Value::String(s.clone()),
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Boolean(b) => write!(f, "{b}"),
            ScalarValue::Number(n) => write!(f, "{n}"),
            ScalarValue::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::String(value.to_string())
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Boolean(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Number(value.into())
    }
}

/// A filter item carrying a display label distinct from its raw value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledValue {
    pub value: ScalarValue,
    pub title: ScalarValue,
    pub color: Option<String>,
}

impl LabeledValue {
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "value": self.value.to_json(),
            "title": self.title.to_json(),
            "color": self.color,
        })
    }
}

/// One entry of a filter's item list.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterItem {
    Scalar(ScalarValue),
    Labeled(LabeledValue),
}

impl FilterItem {
    /// Resolves a raw item by shape. Evaluated per value, never cached.
    pub fn resolve(raw: &Value) -> Result<Self, ModelError> {
        match raw.get("value") {
            Some(value) if !value.is_null() => {
                let value = ScalarValue::from_json(value).ok_or_else(|| {
                    ModelError::MalformedFilterItem(format!("non-scalar value in {raw}"))
                })?;
                let title = raw
                    .get("title")
                    .and_then(ScalarValue::from_json)
                    .ok_or_else(|| {
                        ModelError::MalformedFilterItem(format!("missing scalar title in {raw}"))
                    })?;
                let color = match raw.get("color") {
                    None | Some(Value::Null) => None,
                    Some(Value::String(color)) => Some(color.clone()),
                    Some(other) => {
                        return Err(ModelError::MalformedFilterItem(format!(
                            "color must be a string, got {other}"
                        )));
                    }
                };
                Ok(FilterItem::Labeled(LabeledValue {
                    value,
                    title,
                    color,
                }))
            }
            _ => ScalarValue::from_json(raw)
                .map(FilterItem::Scalar)
                .ok_or_else(|| ModelError::MalformedFilterItem(format!("not a scalar: {raw}"))),
        }
    }

    /// The raw value this item filters on.
    pub fn raw_value(&self) -> &ScalarValue {
        match self {
            FilterItem::Scalar(value) => value,
            FilterItem::Labeled(labeled) => &labeled.value,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            FilterItem::Scalar(value) => value.to_json(),
            FilterItem::Labeled(labeled) => labeled.to_json(),
        }
    }
}

impl From<ScalarValue> for FilterItem {
    fn from(value: ScalarValue) -> Self {
        FilterItem::Scalar(value)
    }
}

impl From<LabeledValue> for FilterItem {
    fn from(value: LabeledValue) -> Self {
        FilterItem::Labeled(value)
    }
}

/// JSON truthiness: `null`, `false`, `0` and `""` are false, everything
/// else (including empty arrays and objects) is true.
pub fn is_truthy(raw: &Value) -> bool {
    match raw {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
