//! GridCommand - Mutation Requests
//!
//! Every change to grid state is expressed as a command. Views attach commands to
//! interactive nodes and hosts send them through a `GridHandle`; the engine applies
//! them one at a time.

use serde_json::Value;

use crate::domain::{ColumnId, Row, RowId, SortSpec};
use crate::services::request_tracker::RequestToken;

/// Commands understood by the grid engine
#[derive(Debug, Clone, PartialEq)]
pub enum GridCommand {
    /// Change the free-text search
    SetSearchText(String),
    /// Replace the sort spec
    SetSort(SortSpec),
    /// Header click: asc -> desc -> off
    ToggleSort(ColumnId),
    /// Show or hide a column
    ToggleColumnVisibility(ColumnId),
    /// Replace the selection
    SetSelectedRows(Vec<RowId>),
    /// Select or deselect one row
    ToggleRowSelection(RowId),
    /// Select every row on the current page, or clear them if all are selected
    ToggleAllPageRows,
    /// Enter or leave edit mode
    SetEditRow(Option<RowId>),
    /// Change one field of the row being edited
    UpdateEditDraft { field: String, value: Value },
    /// Replace the working row set
    SetRows(Vec<Row>),
    /// Go to a 1-based page
    SetPage(usize),
    /// Change the number of rows per page
    SetPageSize(usize),
    /// Mark the grid as loading (client-side host loads)
    SetLoading(bool),
    /// Response to a rows request (server-side mode)
    RowsLoaded {
        token: RequestToken,
        rows: Vec<Row>,
        total_rows: usize,
    },
    /// Failed rows request (server-side mode)
    RowsFailed { token: RequestToken, message: String },
    /// Drop every loaded row and in-flight request
    ResetRows,
    /// Scroll position of the rows viewport
    Scroll { offset: f32, viewport_height: f32 },
}

impl GridCommand {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            GridCommand::SetSearchText(_) => "set_search_text",
            GridCommand::SetSort(_) => "set_sort",
            GridCommand::ToggleSort(_) => "toggle_sort",
            GridCommand::ToggleColumnVisibility(_) => "toggle_column_visibility",
            GridCommand::SetSelectedRows(_) => "set_selected_rows",
            GridCommand::ToggleRowSelection(_) => "toggle_row_selection",
            GridCommand::ToggleAllPageRows => "toggle_all_page_rows",
            GridCommand::SetEditRow(_) => "set_edit_row",
            GridCommand::UpdateEditDraft { .. } => "update_edit_draft",
            GridCommand::SetRows(_) => "set_rows",
            GridCommand::SetPage(_) => "set_page",
            GridCommand::SetPageSize(_) => "set_page_size",
            GridCommand::SetLoading(_) => "set_loading",
            GridCommand::RowsLoaded { .. } => "rows_loaded",
            GridCommand::RowsFailed { .. } => "rows_failed",
            GridCommand::ResetRows => "reset_rows",
            GridCommand::Scroll { .. } => "scroll",
        }
    }
}
