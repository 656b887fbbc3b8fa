//! Row - One Record of Host Data

use ahash::AHashSet;
use serde_json::{Map, Value};

use super::ids::RowId;
use crate::error::{Error, Result};

/// A row of host data: a field map plus its stable id
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Stable identity (never invented by the grid)
    pub id: RowId,
    /// Field name -> raw value
    pub data: Map<String, Value>,
}

impl Row {
    /// Create a row from an id and its data
    pub fn new(id: impl Into<RowId>, data: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    /// Build a row from a JSON object carrying an `id` attribute
    pub fn from_json(value: Value, index: usize) -> Result<Self> {
        let Value::Object(data) = value else {
            return Err(Error::MissingRowId { index });
        };
        let id = data
            .get("id")
            .and_then(RowId::from_value)
            .ok_or(Error::MissingRowId { index })?;
        Ok(Self { id, data })
    }

    /// Build rows from a JSON array, rejecting rows without identity
    pub fn from_json_array(value: Value) -> Result<Vec<Self>> {
        let Value::Array(items) = value else {
            return Err(Error::Invalid {
                message: "Expected a JSON array of rows".to_string(),
            });
        };
        let rows = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| Self::from_json(item, index))
            .collect::<Result<Vec<_>>>()?;
        ensure_unique_ids(&rows)?;
        Ok(rows)
    }

    /// Get a raw field value
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    /// Set a raw field value
    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.data.insert(field.into(), value);
    }
}

/// Reject a row set in which two rows share an id
pub fn ensure_unique_ids(rows: &[Row]) -> Result<()> {
    let mut seen = AHashSet::with_capacity(rows.len());
    for row in rows {
        if !seen.insert(&row.id) {
            return Err(Error::DuplicateRowId {
                id: row.id.to_string(),
            });
        }
    }
    Ok(())
}
