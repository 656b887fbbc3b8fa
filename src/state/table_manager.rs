//! Table Manager
//!
//! Immutable snapshot of the grid handed to every view. The engine builds a new one
//! after each command; mutation goes through `handlers` only.

use std::sync::Arc;

use super::table_state::EditRow;
use crate::components::composite::data_table::column::{Column, ColumnSet};
use crate::components::composite::data_table::virtual_scroll::VirtualWindow;
use crate::domain::{AdditionalProps, Row, RowId, SortSpec, TableIcons, TableTexts};
use crate::eventing::GridHandle;
use crate::services::query::is_search_active;

/// Static display configuration
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub is_paginated: bool,
    pub table_has_selection: bool,
    pub is_virtual_scrolling: bool,
    pub show_rows_information: bool,
    pub texts: TableTexts,
    pub icons: TableIcons,
    pub additional_props: AdditionalProps,
}

/// Transient view parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableParams {
    pub search_text: String,
    pub search_min_chars: usize,
    pub sort: SortSpec,
}

impl TableParams {
    /// Whether the search text currently filters rows
    pub fn is_search_active(&self) -> bool {
        is_search_active(&self.search_text, self.search_min_chars)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RowsData {
    /// Working set: host rows, or pages loaded so far in server-side mode
    pub all_rows: Arc<Vec<Row>>,
    /// After search and sort
    pub filtered_rows: Arc<Vec<Row>>,
    /// Rows of the current page
    pub page_rows: Vec<Row>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowsApi {
    pub total_rows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationApi {
    /// 1-based
    pub page: usize,
    pub page_size: usize,
    pub page_sizes: Vec<usize>,
    pub total_pages: usize,
    page_row_count: usize,
}

impl PaginationApi {
    pub fn new(
        page: usize,
        page_size: usize,
        page_sizes: Vec<usize>,
        total_pages: usize,
        page_row_count: usize,
    ) -> Self {
        Self {
            page,
            page_size,
            page_sizes,
            total_pages,
            page_row_count,
        }
    }

    /// Number of rows on the current page
    pub fn page_row_count(&self) -> usize {
        self.page_row_count
    }

    /// Index of the first row of the current page
    pub fn page_start(&self) -> usize {
        self.page_size * self.page.saturating_sub(1)
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSelectionApi {
    pub selected_rows_ids: Vec<RowId>,
}

impl RowSelectionApi {
    pub fn is_selected(&self, id: &RowId) -> bool {
        self.selected_rows_ids.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected_rows_ids.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowEditApi {
    pub edit_row: Option<EditRow>,
}

impl RowEditApi {
    pub fn edit_row_id(&self) -> Option<&RowId> {
        self.edit_row.as_ref().map(|edit| &edit.id)
    }

    pub fn is_editing(&self, id: &RowId) -> bool {
        self.edit_row_id() == Some(id)
    }
}

#[derive(Debug, Clone)]
pub struct ColumnsData {
    pub columns: Arc<ColumnSet>,
}

impl ColumnsData {
    pub fn visible(&self) -> impl Iterator<Item = &Column> {
        self.columns.visible()
    }
}

/// Read-only grid snapshot
#[derive(Debug, Clone)]
pub struct TableManager {
    pub config: TableConfig,
    pub params: TableParams,
    pub rows_data: RowsData,
    pub rows_api: RowsApi,
    pub pagination_api: PaginationApi,
    pub row_selection_api: RowSelectionApi,
    pub row_edit_api: RowEditApi,
    pub columns_data: ColumnsData,
    /// Rows of `page_rows` to render when virtual scrolling
    pub virtual_window: Option<VirtualWindow>,
    pub is_loading: bool,
    pub last_error: Option<String>,
    pub handlers: GridHandle,
}

impl TableManager {
    /// Rows to render with their index inside `page_rows`
    pub fn rendered_rows(&self) -> impl Iterator<Item = (usize, &Row)> {
        let rows = &self.rows_data.page_rows;
        let (from, to) = match self.virtual_window {
            Some(window) => {
                let range = window.range.clamp(rows.len());
                (range.from, range.to)
            }
            None => (0, rows.len()),
        };
        rows[from..to].iter().enumerate().map(move |(i, row)| (from + i, row))
    }

    /// Whether every row on the page is selected
    pub fn all_page_rows_selected(&self) -> bool {
        !self.rows_data.page_rows.is_empty()
            && self
                .rows_data
                .page_rows
                .iter()
                .all(|row| self.row_selection_api.is_selected(&row.id))
    }
}
