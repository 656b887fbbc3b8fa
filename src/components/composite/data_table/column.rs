//! Column Definition
//!
//! Defines grid columns with their properties, renderers and the value/sort/search
//! behaviour used by the query layer.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use ahash::AHashMap;
use serde_json::Value;

use crate::components::primitives::node::ViewNode;
use crate::constants::{DEFAULT_COLUMN_WIDTH, SELECTION_COLUMN_ID};
use crate::domain::value::compare_values;
use crate::domain::{ColumnId, Row};
use crate::error::{Error, Result};
use crate::state::table_manager::TableManager;

/// Everything a cell renderer gets to look at
pub struct CellContext<'a> {
    pub table_manager: &'a TableManager,
    /// Normalized value (after `get_value`)
    pub value: &'a Value,
    pub field: Option<&'a str>,
    /// Row data; the edit draft while the row is being edited
    pub data: &'a Row,
    pub column: &'a Column,
    pub row_index: usize,
    pub search_text: &'a str,
    pub is_edit: bool,
}

/// Arguments of a sort comparator
#[derive(Debug, Clone, Copy)]
pub struct SortArgs<'a> {
    pub a: &'a Value,
    pub b: &'a Value,
    pub is_ascending: bool,
}

pub type CellRenderer = Arc<dyn Fn(&CellContext<'_>) -> ViewNode + Send + Sync>;
pub type ValueGetter = Arc<dyn Fn(&Value, &Column) -> Value + Send + Sync>;
pub type SortComparator = Arc<dyn Fn(SortArgs<'_>) -> Ordering + Send + Sync>;
pub type SearchPredicate = Arc<dyn Fn(&str, &str) -> bool + Send + Sync>;

/// Column width specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels (`54px`)
    Fixed(f32),
    /// Percentage of available space (`25%`)
    Percent(f32),
    /// Share of the remaining space (`1fr`)
    Fraction(f32),
    /// Size to content (`max-content`)
    MaxContent,
    /// Let layout decide (`auto`)
    Auto,
}

impl Default for ColumnWidth {
    fn default() -> Self {
        DEFAULT_COLUMN_WIDTH.parse().unwrap_or(ColumnWidth::Auto)
    }
}

impl FromStr for ColumnWidth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let number = |raw: &str| {
            raw.trim().parse::<f32>().map_err(|e| Error::Invalid {
                message: format!("Invalid column width `{s}`: {e}"),
            })
        };
        match s {
            "max-content" => Ok(ColumnWidth::MaxContent),
            "auto" => Ok(ColumnWidth::Auto),
            _ => {
                if let Some(px) = s.strip_suffix("px") {
                    number(px).map(ColumnWidth::Fixed)
                } else if let Some(pct) = s.strip_suffix('%') {
                    number(pct).map(ColumnWidth::Percent)
                } else if let Some(fr) = s.strip_suffix("fr") {
                    number(fr).map(ColumnWidth::Fraction)
                } else {
                    Err(Error::Invalid {
                        message: format!("Invalid column width `{s}`"),
                    })
                }
            }
        }
    }
}

impl fmt::Display for ColumnWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnWidth::Fixed(px) => write!(f, "{px}px"),
            ColumnWidth::Percent(pct) => write!(f, "{pct}%"),
            ColumnWidth::Fraction(fr) => write!(f, "{fr}fr"),
            ColumnWidth::MaxContent => f.write_str("max-content"),
            ColumnWidth::Auto => f.write_str("auto"),
        }
    }
}

fn identity_value() -> ValueGetter {
    Arc::new(|value: &Value, _column: &Column| value.clone())
}

/// Type-aware comparator, reversed for descending order
pub fn default_comparator() -> SortComparator {
    Arc::new(|args: SortArgs<'_>| {
        let order = compare_values(args.a, args.b);
        if args.is_ascending { order } else { order.reverse() }
    })
}

/// Column definition for the grid
#[derive(Clone)]
pub struct Column {
    /// Column identifier
    pub id: ColumnId,
    /// Key into row data; absent for synthetic columns
    pub field: Option<String>,
    /// Column header label
    pub label: Option<String>,
    /// Exempt from horizontal scroll
    pub pinned: bool,
    pub width: ColumnWidth,
    pub sortable: bool,
    pub resizable: bool,
    pub searchable: bool,
    /// Runtime visibility
    pub visible: bool,
    pub cell_renderer: Option<CellRenderer>,
    pub editor_cell_renderer: Option<CellRenderer>,
    pub get_value: ValueGetter,
    pub sort: SortComparator,
    /// Overrides the column set's search predicate
    pub search: Option<SearchPredicate>,
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("field", &self.field)
            .field("label", &self.label)
            .field("pinned", &self.pinned)
            .field("width", &self.width)
            .field("sortable", &self.sortable)
            .field("resizable", &self.resizable)
            .field("searchable", &self.searchable)
            .field("visible", &self.visible)
            .field("cell_renderer", &self.cell_renderer.is_some())
            .field("editor_cell_renderer", &self.editor_cell_renderer.is_some())
            .field("search", &self.search.is_some())
            .finish()
    }
}

impl Column {
    /// Create a new column
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            field: None,
            label: None,
            pinned: false,
            width: ColumnWidth::default(),
            sortable: true,
            resizable: false,
            searchable: true,
            visible: true,
            cell_renderer: None,
            editor_cell_renderer: None,
            get_value: identity_value(),
            sort: default_comparator(),
            search: None,
        }
    }

    /// Create a column bound to a row field
    pub fn with_field(id: impl Into<ColumnId>, field: impl Into<String>) -> Self {
        Self::new(id).field(field)
    }

    /// The row selection column
    pub fn checkbox() -> Self {
        Self::new(SELECTION_COLUMN_ID)
            .pinned()
            .fixed_width(54.0)
            .sortable(false)
            .searchable(false)
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    pub fn width(mut self, width: ColumnWidth) -> Self {
        self.width = width;
        self
    }

    /// Set fixed width
    pub fn fixed_width(self, px: f32) -> Self {
        self.width(ColumnWidth::Fixed(px))
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn cell_renderer(
        mut self,
        render: impl Fn(&CellContext<'_>) -> ViewNode + Send + Sync + 'static,
    ) -> Self {
        self.cell_renderer = Some(Arc::new(render));
        self
    }

    pub fn editor_cell_renderer(
        mut self,
        render: impl Fn(&CellContext<'_>) -> ViewNode + Send + Sync + 'static,
    ) -> Self {
        self.editor_cell_renderer = Some(Arc::new(render));
        self
    }

    pub fn get_value(mut self, get: impl Fn(&Value, &Column) -> Value + Send + Sync + 'static) -> Self {
        self.get_value = Arc::new(get);
        self
    }

    pub fn sort_with(mut self, sort: impl Fn(SortArgs<'_>) -> Ordering + Send + Sync + 'static) -> Self {
        self.sort = Arc::new(sort);
        self
    }

    pub fn search_with(mut self, search: impl Fn(&str, &str) -> bool + Send + Sync + 'static) -> Self {
        self.search = Some(Arc::new(search));
        self
    }

    /// Header text: label, else field, else id
    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .or(self.field.as_deref())
            .unwrap_or(self.id.as_str())
    }

    /// Whether this is the row selection column
    pub fn is_selection(&self) -> bool {
        self.id.as_str() == SELECTION_COLUMN_ID
    }

    /// Normalize a raw value through `get_value`
    pub fn normalize(&self, raw: &Value) -> Value {
        (self.get_value)(raw, self)
    }

    /// Normalized value of this column for a row (null when the field is missing)
    pub fn value_of(&self, row: &Row) -> Value {
        let raw = self
            .field
            .as_deref()
            .and_then(|field| row.get(field))
            .unwrap_or(&Value::Null);
        self.normalize(raw)
    }

    /// Compare two normalized values with this column's comparator
    pub fn compare(&self, a: &Value, b: &Value, is_ascending: bool) -> Ordering {
        (self.sort)(SortArgs { a, b, is_ascending })
    }
}

/// The resolved column set with lookups by id and by field
#[derive(Clone)]
pub struct ColumnSet {
    columns: Vec<Column>,
    by_id: AHashMap<ColumnId, usize>,
    by_field: AHashMap<String, usize>,
    default_search: SearchPredicate,
}

impl fmt::Debug for ColumnSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSet")
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}

impl ColumnSet {
    /// Build a column set. `default_search` is used by searchable columns that do
    /// not define their own predicate.
    pub fn try_new(columns: Vec<Column>, default_search: SearchPredicate) -> Result<Self> {
        let mut by_id = AHashMap::with_capacity(columns.len());
        let mut by_field = AHashMap::with_capacity(columns.len());

        for (index, column) in columns.iter().enumerate() {
            if by_id.insert(column.id.clone(), index).is_some() {
                return Err(Error::DuplicateColumnId {
                    id: column.id.to_string(),
                });
            }
            if let Some(field) = &column.field {
                by_field.insert(field.clone(), index);
            }
        }

        Ok(Self {
            columns,
            by_id,
            by_field,
            default_search,
        })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    /// Columns currently shown
    pub fn visible(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.visible)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, id: &ColumnId) -> Option<&Column> {
        self.by_id.get(id).map(|&i| &self.columns[i])
    }

    /// Look up a column by id, failing on unknown ids
    pub fn require(&self, id: &ColumnId) -> Result<&Column> {
        self.get(id).ok_or_else(|| Error::UnknownColumn { id: id.to_string() })
    }

    pub fn by_field(&self, field: &str) -> Option<&Column> {
        self.by_field.get(field).map(|&i| &self.columns[i])
    }

    /// Whether the set contains the row selection column
    pub fn has_selection_column(&self) -> bool {
        self.columns.iter().any(Column::is_selection)
    }

    /// Show or hide a column
    pub fn set_visible(&mut self, id: &ColumnId, visible: bool) -> Result<()> {
        let index = *self
            .by_id
            .get(id)
            .ok_or_else(|| Error::UnknownColumn { id: id.to_string() })?;
        self.columns[index].visible = visible;
        Ok(())
    }

    /// Flip a column's visibility, returning the new state
    pub fn toggle_visibility(&mut self, id: &ColumnId) -> Result<bool> {
        let visible = !self.require(id)?.visible;
        self.set_visible(id, visible)?;
        Ok(visible)
    }

    /// Whether the display text matches the search text for a column
    pub fn matches(&self, column: &Column, display: &str, search_text: &str) -> bool {
        let predicate = column.search.as_ref().unwrap_or(&self.default_search);
        predicate(display, search_text)
    }
}
