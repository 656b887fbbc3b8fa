//! GridEvent - Engine -> Host Notifications
//!
//! The host-side handlers (`onRowsChange`, `onRowsRequest`, `onRowsReset`, ...) are
//! expressed as events the engine publishes after applying a command.

use std::sync::Arc;

use crate::components::composite::data_table::column::ColumnSet;
use crate::domain::{ColumnId, Row, RowId, SortSpec};
use crate::services::query::{QueryParams, RowsRange};
use crate::services::request_tracker::RequestToken;

/// A request for rows the host must answer in server-side mode
#[derive(Debug, Clone)]
pub struct RowsRequest {
    /// Token to echo back in `GridCommand::RowsLoaded`
    pub token: RequestToken,
    /// Half-open index range of the filtered/sorted set
    pub range: RowsRange,
    /// Search and sort in effect when the request was issued
    pub params: QueryParams,
    /// Column descriptors to run search/sort with
    pub columns: Arc<ColumnSet>,
}

/// Events emitted by the grid engine
#[derive(Debug, Clone)]
pub enum GridEvent {
    /// Search text changed
    SearchChanged(String),
    /// Sort spec changed
    SortChanged(SortSpec),
    /// Selection changed
    SelectionChanged(Vec<RowId>),
    /// Working row set replaced; shared with the snapshot
    RowsChanged(Arc<Vec<Row>>),
    /// Edit mode entered or left
    RowEditIdChanged(Option<RowId>),
    /// Column shown or hidden
    ColumnVisibilityChanged { column: ColumnId, visible: bool },
    /// Page or page size changed
    PageChanged { page: usize, page_size: usize },
    /// Host must fetch rows (server-side mode)
    RowsRequested(RowsRequest),
    /// Host must drop accumulated rows (server-side mode)
    RowsReset,
}

impl GridEvent {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            GridEvent::SearchChanged(_) => "search_changed",
            GridEvent::SortChanged(_) => "sort_changed",
            GridEvent::SelectionChanged(_) => "selection_changed",
            GridEvent::RowsChanged(_) => "rows_changed",
            GridEvent::RowEditIdChanged(_) => "row_edit_id_changed",
            GridEvent::ColumnVisibilityChanged { .. } => "column_visibility_changed",
            GridEvent::PageChanged { .. } => "page_changed",
            GridEvent::RowsRequested(_) => "rows_requested",
            GridEvent::RowsReset => "rows_reset",
        }
    }
}
