//! Table state
//!
//! Mutable grid state owned by the engine. Views never see this directly; they read
//! the `TableManager` snapshot rebuilt from it after every command.

use crate::components::composite::data_table::pagination::total_pages;
use crate::domain::{GridConfig, Row, RowId, SortSpec};
use crate::error::{Error, Result};

/// The row being edited and its working copy
#[derive(Debug, Clone, PartialEq)]
pub struct EditRow {
    pub id: RowId,
    pub draft: Row,
}

/// Last reported viewport position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub offset: f32,
    pub viewport_height: f32,
}

pub struct TableState {
    /// Host rows (client-side) or rows loaded so far (server-side)
    pub rows: Vec<Row>,
    /// Total reported by the host (server-side)
    pub reported_total: Option<usize>,
    pub search_text: String,
    pub search_min_chars: usize,
    pub sort: SortSpec,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
    pub selected_rows_ids: Vec<RowId>,
    pub edit_row: Option<EditRow>,
    pub is_loading: bool,
    pub last_error: Option<String>,
    pub scroll: ScrollState,
}

impl TableState {
    pub fn new(config: &GridConfig, viewport_height: f32) -> Self {
        Self {
            rows: Vec::new(),
            reported_total: None,
            search_text: String::new(),
            search_min_chars: config.search_min_chars,
            sort: config.initial_sort.clone(),
            page: 1,
            page_size: config.page_size.max(1),
            selected_rows_ids: Vec::new(),
            edit_row: None,
            is_loading: false,
            last_error: None,
            scroll: ScrollState {
                offset: 0.0,
                viewport_height,
            },
        }
    }

    pub fn total_pages(&self, total_rows: usize) -> usize {
        total_pages(total_rows, self.page_size)
    }

    /// Go to a page, clamped to `[1, total_pages]`
    pub fn set_page(&mut self, page: usize, total_rows: usize) {
        self.page = page.clamp(1, self.total_pages(total_rows));
    }

    pub fn set_page_size(&mut self, size: usize) -> Result<()> {
        if size == 0 {
            return Err(Error::Invalid {
                message: "page size must be greater than zero".to_string(),
            });
        }
        self.page_size = size;
        self.page = 1;
        Ok(())
    }

    pub fn find_row(&self, id: &RowId) -> Option<&Row> {
        self.rows.iter().find(|row| &row.id == id)
    }

    /// Look up a row, failing on unknown ids
    pub fn require_row(&self, id: &RowId) -> Result<&Row> {
        self.find_row(id).ok_or_else(|| Error::UnknownRow { id: id.to_string() })
    }

    pub fn is_selected(&self, id: &RowId) -> bool {
        self.selected_rows_ids.contains(id)
    }

    /// Replace the selection, dropping repeated ids
    pub fn set_selection(&mut self, ids: Vec<RowId>) {
        let mut unique = Vec::with_capacity(ids.len());
        for id in ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        self.selected_rows_ids = unique;
    }

    /// Flip one row's selection; returns whether it is now selected
    pub fn toggle_selection(&mut self, id: RowId) -> bool {
        if let Some(index) = self.selected_rows_ids.iter().position(|s| s == &id) {
            self.selected_rows_ids.remove(index);
            false
        } else {
            self.selected_rows_ids.push(id);
            true
        }
    }

    /// Drop everything fetched for the previous query
    pub fn clear_loaded_rows(&mut self) {
        self.rows.clear();
        self.reported_total = None;
        self.scroll.offset = 0.0;
    }

    /// Leave edit mode when the edited row disappeared
    pub fn prune_edit_row(&mut self) {
        let gone = self
            .edit_row
            .as_ref()
            .is_some_and(|edit| !self.rows.iter().any(|row| row.id == edit.id));
        if gone {
            self.edit_row = None;
        }
    }
}
