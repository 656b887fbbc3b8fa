//! Identifiers for rows and columns

use std::sync::Arc;

use serde_json::Value;

/// Stable identity of a row, supplied by the host application
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct RowId(pub Arc<str>);

impl RowId {
    /// Create a new RowId from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Read an id out of a JSON scalar (string or number)
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.is_empty() => Some(Self::new(s.as_str())),
            Value::Number(n) => Some(Self::new(n.to_string())),
            _ => None,
        }
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RowId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<u64> for RowId {
    fn from(n: u64) -> Self {
        Self::new(n.to_string())
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier of a column, independent of its field
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct ColumnId(pub Arc<str>);

impl ColumnId {
    /// Create a new ColumnId from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ColumnId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<u32> for ColumnId {
    fn from(n: u32) -> Self {
        Self::new(n.to_string())
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
