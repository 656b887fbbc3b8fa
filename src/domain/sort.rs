//! Sort - Current Sort Specification

use serde::{Deserialize, Serialize};

use super::ids::ColumnId;

/// Column and direction to sort by; `col_id == None` means unsorted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortSpec {
    /// Column to sort by
    #[serde(with = "column_id_serde", skip_serializing_if = "Option::is_none")]
    pub col_id: Option<ColumnId>,
    /// Ascending when true
    pub is_asc: bool,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::none()
    }
}

impl SortSpec {
    /// No sorting
    pub fn none() -> Self {
        Self {
            col_id: None,
            is_asc: true,
        }
    }

    /// Ascending sort by a column
    pub fn asc(col_id: impl Into<ColumnId>) -> Self {
        Self {
            col_id: Some(col_id.into()),
            is_asc: true,
        }
    }

    /// Descending sort by a column
    pub fn desc(col_id: impl Into<ColumnId>) -> Self {
        Self {
            col_id: Some(col_id.into()),
            is_asc: false,
        }
    }

    /// Whether a column is being sorted on
    pub fn is_active(&self) -> bool {
        self.col_id.is_some()
    }

    /// Whether this spec sorts by the given column
    pub fn is_sorted_by(&self, col_id: &ColumnId) -> bool {
        self.col_id.as_ref() == Some(col_id)
    }

    /// Next spec when a header is clicked: asc -> desc -> off, new column starts asc
    pub fn toggled(&self, col_id: &ColumnId) -> Self {
        if !self.is_sorted_by(col_id) {
            Self::asc(col_id.clone())
        } else if self.is_asc {
            Self::desc(col_id.clone())
        } else {
            Self::none()
        }
    }
}

mod column_id_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::domain::ids::ColumnId;

    pub fn serialize<S: Serializer>(value: &Option<ColumnId>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(id) => s.serialize_some(id.as_str()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<ColumnId>, D::Error> {
        Ok(Option::<String>::deserialize(d)?.map(ColumnId::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cycle() {
        let col = ColumnId::from("name");
        let first = SortSpec::none().toggled(&col);
        assert_eq!(first, SortSpec::asc("name"));
        let second = first.toggled(&col);
        assert_eq!(second, SortSpec::desc("name"));
        assert_eq!(second.toggled(&col), SortSpec::none());
    }

    #[test]
    fn test_toggle_other_column_restarts_ascending() {
        let spec = SortSpec::desc("name");
        assert_eq!(spec.toggled(&ColumnId::from("email")), SortSpec::asc("email"));
    }
}
