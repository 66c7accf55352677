//! Type-safe enumerations for the data manager.
//!
//! The backend and the view definitions carry these as strings; they are
//! parsed once and matched exhaustively afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Declared type of a column, also used as a view's display-type override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    String,
    Boolean,
    Number,
    Datetime,
    List,
    Image,
    Audio,
    AudioPlus,
    Text,
    HyperText,
    TimeSeries,
    Unknown,
}

impl ColumnType {
    /// Returns the canonical name as it appears in column definitions.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::String => "String",
            ColumnType::Boolean => "Boolean",
            ColumnType::Number => "Number",
            ColumnType::Datetime => "Datetime",
            ColumnType::List => "List",
            ColumnType::Image => "Image",
            ColumnType::Audio => "Audio",
            ColumnType::AudioPlus => "AudioPlus",
            ColumnType::Text => "Text",
            ColumnType::HyperText => "HyperText",
            ColumnType::TimeSeries => "TimeSeries",
            ColumnType::Unknown => "Unknown",
        }
    }

    /// All column types in declaration order.
    pub const fn all() -> &'static [ColumnType] {
        &[
            Self::String,
            Self::Boolean,
            Self::Number,
            Self::Datetime,
            Self::List,
            Self::Image,
            Self::Audio,
            Self::AudioPlus,
            Self::Text,
            Self::HyperText,
            Self::TimeSeries,
            Self::Unknown,
        ]
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = ModelError;

    /// Column type names are matched exactly; they are identifiers, not labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|ty| ty.as_str() == s.trim())
            .ok_or_else(|| ModelError::UnknownColumnType(s.to_string()))
    }
}

/// The record kind a column or view is about.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DataTarget {
    #[default]
    Tasks,
    Annotations,
}

impl DataTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataTarget::Tasks => "tasks",
            DataTarget::Annotations => "annotations",
        }
    }

    /// Name under which the data store for this target is registered.
    pub fn registry_key(&self) -> &'static str {
        match self {
            DataTarget::Tasks => "tasksStore",
            DataTarget::Annotations => "annotationsStore",
        }
    }

    pub fn from_registry_key(key: &str) -> Option<Self> {
        match key {
            "tasksStore" => Some(DataTarget::Tasks),
            "annotationsStore" => Some(DataTarget::Annotations),
            _ => None,
        }
    }
}

impl fmt::Display for DataTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DataTarget {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tasks" => Ok(DataTarget::Tasks),
            "annotations" => Ok(DataTarget::Annotations),
            _ => Err(ModelError::UnknownTarget(s.to_string())),
        }
    }
}

/// Global interaction mode of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppMode {
    /// Browsing the task table.
    #[default]
    Explorer,
    /// Working through tasks one after another.
    Labelstream,
}

impl AppMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppMode::Explorer => "explorer",
            AppMode::Labelstream => "labelstream",
        }
    }
}

impl fmt::Display for AppMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AppMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "explorer" => Ok(AppMode::Explorer),
            "labelstream" => Ok(AppMode::Labelstream),
            _ => Err(ModelError::UnknownMode(s.to_string())),
        }
    }
}
