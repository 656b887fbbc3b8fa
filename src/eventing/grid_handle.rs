//! GridHandle - Named Operations Over the Command Queue
//!
//! The explicit command interface handed to hosts and views. Every operation only
//! enqueues a [`GridCommand`]; the engine applies it on its next `pump()`.

use crossbeam_channel::Sender;

use super::GridCommand;
use crate::domain::{ColumnId, Row, RowId, SortSpec};
use crate::error::{Error, Result};
use crate::services::request_tracker::RequestToken;

#[derive(Debug, Clone)]
pub struct GridHandle {
    tx: Sender<GridCommand>,
}

impl GridHandle {
    pub fn new(tx: Sender<GridCommand>) -> Self {
        Self { tx }
    }

    /// Enqueue a single command
    pub fn send(&self, command: GridCommand) -> Result<()> {
        self.tx.send(command).map_err(|e| Error::ChannelSend {
            message: format!("grid engine is gone: {:?}", e.0.name()),
        })
    }

    /// Enqueue commands in order
    pub fn send_all(&self, commands: impl IntoIterator<Item = GridCommand>) -> Result<()> {
        commands.into_iter().try_for_each(|command| self.send(command))
    }

    pub fn handle_search_change(&self, text: impl Into<String>) -> Result<()> {
        self.send(GridCommand::SetSearchText(text.into()))
    }

    pub fn toggle_column_visibility(&self, column: impl Into<ColumnId>) -> Result<()> {
        self.send(GridCommand::ToggleColumnVisibility(column.into()))
    }

    pub fn handle_row_edit_id_change(&self, row: Option<RowId>) -> Result<()> {
        self.send(GridCommand::SetEditRow(row))
    }

    pub fn on_rows_change(&self, rows: Vec<Row>) -> Result<()> {
        self.send(GridCommand::SetRows(rows))
    }

    pub fn on_sort_change(&self, sort: SortSpec) -> Result<()> {
        self.send(GridCommand::SetSort(sort))
    }

    pub fn set_selected_rows_ids(&self, ids: Vec<RowId>) -> Result<()> {
        self.send(GridCommand::SetSelectedRows(ids))
    }

    pub fn set_page(&self, page: usize) -> Result<()> {
        self.send(GridCommand::SetPage(page))
    }

    pub fn set_page_size(&self, page_size: usize) -> Result<()> {
        self.send(GridCommand::SetPageSize(page_size))
    }

    pub fn set_loading(&self, is_loading: bool) -> Result<()> {
        self.send(GridCommand::SetLoading(is_loading))
    }

    /// Answer a rows request (server-side mode)
    pub fn rows_loaded(&self, token: RequestToken, rows: Vec<Row>, total_rows: usize) -> Result<()> {
        self.send(GridCommand::RowsLoaded {
            token,
            rows,
            total_rows,
        })
    }

    /// Report a failed rows request (server-side mode)
    pub fn rows_failed(&self, token: RequestToken, message: impl Into<String>) -> Result<()> {
        self.send(GridCommand::RowsFailed {
            token,
            message: message.into(),
        })
    }

    /// Report the viewport position (virtual scrolling)
    pub fn scroll(&self, offset: f32, viewport_height: f32) -> Result<()> {
        self.send(GridCommand::Scroll {
            offset,
            viewport_height,
        })
    }
}
