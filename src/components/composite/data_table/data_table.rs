//! DataTable Engine
//!
//! Owns the grid state and applies [`GridCommand`]s one at a time. After every
//! command the derived rows are recomputed and a fresh [`TableManager`] snapshot is
//! published, so views never observe a half-applied change.
//!
//! In server-side mode the engine does not search or sort itself. It asks the host
//! for the missing rows through [`GridEvent::RowsRequested`] and only accepts the
//! answer carrying the latest issued token.

use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender, TrySendError, bounded, unbounded};
use tracing::{debug, error, info, warn};

use super::column::ColumnSet;
use super::pagination::page_range;
use super::virtual_scroll::VirtualScroll;
use crate::constants::{DEFAULT_VIEWPORT_HEIGHT, EVENT_QUEUE_CAPACITY};
use crate::domain::row::ensure_unique_ids;
use crate::domain::{ColumnId, GridConfig, Row, RowId, SortSpec};
use crate::error::Result;
use crate::eventing::{GridCommand, GridEvent, GridHandle, RowsRequest};
use crate::services::query::{QueryParams, RowsRange, is_search_active, search_rows, slice_rows, sort_rows};
use crate::services::request_tracker::RequestTracker;
use crate::state::table_manager::{
    ColumnsData, PaginationApi, RowEditApi, RowSelectionApi, RowsApi, RowsData, TableConfig,
    TableManager, TableParams,
};
use crate::state::table_state::{EditRow, TableState};

/// Who runs search, sort and slicing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataMode {
    /// The host supplies every row once; the engine queries them
    ClientSide,
    /// The host answers rows requests page by page
    ServerSide,
}

/// Headless grid engine
pub struct DataTable {
    mode: DataMode,
    config: GridConfig,
    table_config: TableConfig,
    columns: Arc<ColumnSet>,
    state: TableState,
    tracker: RequestTracker,
    command_tx: Sender<GridCommand>,
    command_rx: Receiver<GridCommand>,
    event_tx: Sender<GridEvent>,
    event_rx: Receiver<GridEvent>,
    /// Working set replaced since the last published snapshot
    rows_changed: bool,
    snapshot: Arc<TableManager>,
}

impl DataTable {
    /// Create an engine. Fails on invalid config, unknown hidden columns or an
    /// initial sort on a column that does not exist.
    pub fn new(config: GridConfig, mut columns: ColumnSet, mode: DataMode) -> Result<Self> {
        config.validate()?;

        for hidden in &config.hidden_columns {
            columns.set_visible(&ColumnId::from(hidden.as_str()), false)?;
        }
        if let Some(col_id) = &config.initial_sort.col_id {
            columns.require(col_id)?;
        }

        let table_config = TableConfig {
            is_paginated: config.is_paginated,
            table_has_selection: columns.has_selection_column(),
            is_virtual_scrolling: config.is_virtual_scrolling,
            show_rows_information: config.show_rows_information,
            texts: config.texts(),
            icons: config.icons.clone(),
            additional_props: config.additional_props.clone(),
        };

        let (command_tx, command_rx) = unbounded();
        let (event_tx, event_rx) = bounded(EVENT_QUEUE_CAPACITY);
        let state = TableState::new(&config, DEFAULT_VIEWPORT_HEIGHT);
        let columns = Arc::new(columns);
        let handle = GridHandle::new(command_tx.clone());
        let snapshot = Arc::new(Self::empty_snapshot(&table_config, &state, &config, &columns, handle));

        let mut table = Self {
            mode,
            config,
            table_config,
            columns,
            state,
            tracker: RequestTracker::new(),
            command_tx,
            command_rx,
            event_tx,
            event_rx,
            rows_changed: false,
            snapshot,
        };

        if table.mode == DataMode::ServerSide {
            table.request_missing_rows();
        }
        table.rebuild()?;

        info!(
            mode = ?table.mode,
            columns = table.columns.len(),
            paginated = table.config.is_paginated,
            virtual_scrolling = table.config.is_virtual_scrolling,
            "Data table created"
        );
        Ok(table)
    }

    pub fn mode(&self) -> DataMode {
        self.mode
    }

    /// Receiver of host notifications; meant for a single consumer
    pub fn events(&self) -> Receiver<GridEvent> {
        self.event_rx.clone()
    }

    /// Command interface for hosts and views
    pub fn handle(&self) -> GridHandle {
        GridHandle::new(self.command_tx.clone())
    }

    /// Current snapshot
    pub fn table_manager(&self) -> Arc<TableManager> {
        self.snapshot.clone()
    }

    pub fn has_pending_commands(&self) -> bool {
        !self.command_rx.is_empty()
    }

    /// Apply queued commands in order; stops at the first failing command
    pub fn pump(&mut self) -> Result<usize> {
        let mut applied = 0;
        while let Ok(command) = self.command_rx.try_recv() {
            self.dispatch(command)?;
            applied += 1;
        }
        Ok(applied)
    }

    /// Apply one command and republish the snapshot
    pub fn dispatch(&mut self, command: GridCommand) -> Result<()> {
        debug!(command = command.name(), "Applying grid command");
        let wants_rows = !matches!(
            command,
            GridCommand::RowsFailed { .. } | GridCommand::SetLoading(_)
        );

        let outcome = self.apply(command);
        if let Err(e) = &outcome {
            warn!(error = %e, "Grid command rejected");
        }

        if self.mode == DataMode::ServerSide && wants_rows {
            self.request_missing_rows();
        }
        self.rebuild()?;
        if std::mem::take(&mut self.rows_changed) {
            self.emit(GridEvent::RowsChanged(self.snapshot.rows_data.all_rows.clone()));
        }
        outcome
    }

    fn apply(&mut self, command: GridCommand) -> Result<()> {
        match command {
            GridCommand::SetSearchText(text) => self.set_search_text(text),
            GridCommand::SetSort(sort) => self.set_sort(sort),
            GridCommand::ToggleSort(col_id) => {
                let next = self.state.sort.toggled(&col_id);
                self.set_sort(next)
            }
            GridCommand::ToggleColumnVisibility(col_id) => {
                let visible = Arc::make_mut(&mut self.columns).toggle_visibility(&col_id)?;
                self.emit(GridEvent::ColumnVisibilityChanged {
                    column: col_id,
                    visible,
                });
                Ok(())
            }
            GridCommand::SetSelectedRows(ids) => {
                self.state.set_selection(ids);
                self.emit_selection();
                Ok(())
            }
            GridCommand::ToggleRowSelection(id) => {
                self.state.require_row(&id)?;
                self.state.toggle_selection(id);
                self.emit_selection();
                Ok(())
            }
            GridCommand::ToggleAllPageRows => {
                self.toggle_all_page_rows();
                Ok(())
            }
            GridCommand::SetEditRow(id) => self.set_edit_row(id),
            GridCommand::UpdateEditDraft { field, value } => {
                match self.state.edit_row.as_mut() {
                    Some(edit) => edit.draft.set(field, value),
                    None => warn!(field = %field, "Draft update without a row in edit mode"),
                }
                Ok(())
            }
            GridCommand::SetRows(rows) => self.set_rows(rows),
            GridCommand::SetPage(page) => {
                let before = self.state.page;
                self.state.set_page(page, self.total_rows());
                if self.state.page != before {
                    self.emit_page();
                }
                Ok(())
            }
            GridCommand::SetPageSize(size) => {
                self.state.set_page_size(size)?;
                self.emit_page();
                Ok(())
            }
            GridCommand::SetLoading(is_loading) => {
                self.state.is_loading = is_loading;
                Ok(())
            }
            GridCommand::RowsLoaded {
                token,
                rows,
                total_rows,
            } => {
                let Some(range) = self.tracker.complete(token) else {
                    debug!(token = %token, "Discarding stale rows response");
                    return Ok(());
                };
                self.rows_loaded(range, rows, total_rows)
            }
            GridCommand::RowsFailed { token, message } => {
                if self.tracker.complete(token).is_none() {
                    debug!(token = %token, "Discarding stale rows failure");
                    return Ok(());
                }
                error!(token = %token, error = %message, "Rows request failed");
                self.state.is_loading = false;
                self.state.last_error = Some(message);
                Ok(())
            }
            GridCommand::ResetRows => {
                match self.mode {
                    DataMode::ServerSide => self.reset_loaded_rows(),
                    DataMode::ClientSide => {
                        self.state.rows.clear();
                        self.state.prune_edit_row();
                        self.rows_changed = true;
                    }
                }
                Ok(())
            }
            GridCommand::Scroll {
                offset,
                viewport_height,
            } => {
                self.state.scroll.viewport_height = viewport_height.max(0.0);
                let max_offset = self.virtual_scroll().max_offset(self.scrolled_row_count());
                self.state.scroll.offset = offset.max(0.0).min(max_offset);
                Ok(())
            }
        }
    }

    fn set_search_text(&mut self, text: String) -> Result<()> {
        if text == self.state.search_text {
            return Ok(());
        }
        let before = self.effective_search().to_string();
        self.state.search_text = text;
        self.state.page = 1;
        self.emit(GridEvent::SearchChanged(self.state.search_text.clone()));
        if self.effective_search() != before {
            self.query_changed();
        }
        Ok(())
    }

    fn set_sort(&mut self, sort: SortSpec) -> Result<()> {
        if let Some(col_id) = &sort.col_id {
            let column = self.columns.require(col_id)?;
            if !column.sortable {
                warn!(column = %col_id, "Ignoring sort on a non-sortable column");
                return Ok(());
            }
        }
        if sort == self.state.sort {
            return Ok(());
        }
        self.state.sort = sort;
        self.state.page = 1;
        self.emit(GridEvent::SortChanged(self.state.sort.clone()));
        self.query_changed();
        Ok(())
    }

    fn set_edit_row(&mut self, id: Option<RowId>) -> Result<()> {
        self.state.edit_row = match &id {
            Some(id) => {
                let row = self.state.require_row(id)?;
                Some(EditRow {
                    id: id.clone(),
                    draft: row.clone(),
                })
            }
            None => None,
        };
        self.emit(GridEvent::RowEditIdChanged(id));
        Ok(())
    }

    fn set_rows(&mut self, rows: Vec<Row>) -> Result<()> {
        ensure_unique_ids(&rows)?;
        info!(count = rows.len(), "Rows replaced");
        self.state.rows = rows;
        if self.mode == DataMode::ClientSide {
            self.state.is_loading = false;
        }
        self.state.prune_edit_row();
        self.rows_changed = true;
        Ok(())
    }

    fn rows_loaded(&mut self, range: RowsRange, rows: Vec<Row>, total_rows: usize) -> Result<()> {
        self.state.is_loading = false;
        let keep = range.from.min(self.state.rows.len());
        self.state.rows.truncate(keep);
        self.state.rows.extend(rows);
        if let Err(e) = ensure_unique_ids(&self.state.rows) {
            self.state.rows.truncate(keep);
            self.state.last_error = Some(e.to_string());
            return Err(e);
        }
        self.state.reported_total = Some(total_rows);
        self.state.last_error = None;
        info!(
            from = range.from,
            loaded = self.state.rows.len(),
            total = total_rows,
            "Rows loaded"
        );
        self.rows_changed = true;
        Ok(())
    }

    fn toggle_all_page_rows(&mut self) {
        let page_ids: Vec<RowId> = self
            .snapshot
            .rows_data
            .page_rows
            .iter()
            .map(|row| row.id.clone())
            .collect();
        if page_ids.is_empty() {
            return;
        }
        if self.snapshot.all_page_rows_selected() {
            self.state.selected_rows_ids.retain(|id| !page_ids.contains(id));
        } else {
            for id in page_ids {
                if !self.state.is_selected(&id) {
                    self.state.selected_rows_ids.push(id);
                }
            }
        }
        self.emit_selection();
    }

    /// Search text as it affects the query; empty while below the threshold
    fn effective_search(&self) -> &str {
        if is_search_active(&self.state.search_text, self.state.search_min_chars) {
            &self.state.search_text
        } else {
            ""
        }
    }

    /// Search or sort changed; server-side rows fetched so far no longer apply
    fn query_changed(&mut self) {
        if self.mode == DataMode::ServerSide {
            self.reset_loaded_rows();
        }
    }

    fn reset_loaded_rows(&mut self) {
        debug!("Resetting loaded rows");
        self.tracker.invalidate();
        self.state.clear_loaded_rows();
        self.state.prune_edit_row();
        self.emit(GridEvent::RowsReset);
    }

    fn query_params(&self) -> QueryParams {
        QueryParams {
            search_text: self.state.search_text.clone(),
            search_min_chars: self.state.search_min_chars,
            sort: self.state.sort.clone(),
        }
    }

    fn virtual_scroll(&self) -> VirtualScroll {
        VirtualScroll::new(
            self.config.row_height,
            self.state.scroll.viewport_height,
            self.state.scroll.offset,
            self.config.overscan,
        )
    }

    /// Total of the filtered set as currently known
    fn total_rows(&self) -> usize {
        match self.mode {
            DataMode::ClientSide => self.snapshot.rows_data.filtered_rows.len(),
            DataMode::ServerSide => self.state.reported_total.unwrap_or(self.state.rows.len()),
        }
    }

    /// Rows the scroll viewport runs over: one page, or the whole known set
    fn scrolled_row_count(&self) -> usize {
        let total = self.total_rows();
        if self.config.is_paginated {
            total.min(self.state.page_size)
        } else {
            total
        }
    }

    /// Exclusive end of the rows the current view needs (server-side)
    fn needed_rows_end(&self) -> usize {
        let page_size = self.state.page_size;
        let wanted = if self.config.is_paginated {
            page_range(self.state.page, page_size).to
        } else if self.config.is_virtual_scrolling {
            self.virtual_scroll().wanted_end().max(page_size)
        } else {
            self.state.reported_total.unwrap_or(page_size)
        };
        match self.state.reported_total {
            Some(total) => wanted.min(total),
            None => wanted,
        }
    }

    /// Ask the host for rows `[loaded, needed)` unless a pending request covers them
    fn request_missing_rows(&mut self) {
        let from = self.state.rows.len();
        let to = self.needed_rows_end();
        if to <= from {
            return;
        }
        if let Some(pending) = self.tracker.pending_range() {
            if pending.from == from && pending.to >= to {
                return;
            }
        }

        let range = RowsRange::new(from, to);
        let token = self.tracker.issue(range);
        self.state.is_loading = true;
        self.state.last_error = None;
        debug!(token = %token, from, to, "Requesting rows");
        self.emit(GridEvent::RowsRequested(RowsRequest {
            token,
            range,
            params: self.query_params(),
            columns: self.columns.clone(),
        }));
    }

    /// Recompute derived rows and publish a new snapshot
    fn rebuild(&mut self) -> Result<()> {
        let all_rows = Arc::new(self.state.rows.clone());
        let filtered_rows = match self.mode {
            DataMode::ClientSide => {
                let params = self.query_params();
                let mut rows = search_rows(&self.state.rows, &self.columns, &params);
                sort_rows(&mut rows, &self.columns, &params.sort)?;
                Arc::new(rows)
            }
            DataMode::ServerSide => all_rows.clone(),
        };
        let total_rows = match self.mode {
            DataMode::ClientSide => filtered_rows.len(),
            DataMode::ServerSide => self.state.reported_total.unwrap_or(filtered_rows.len()),
        };

        let total_pages = self.state.total_pages(total_rows);
        if self.state.page > total_pages {
            self.state.page = total_pages;
        }

        let page_rows = if self.config.is_paginated {
            slice_rows(&filtered_rows, page_range(self.state.page, self.state.page_size))
        } else {
            filtered_rows.as_ref().clone()
        };
        let virtual_window = self
            .config
            .is_virtual_scrolling
            .then(|| self.virtual_scroll().window(page_rows.len()));

        let snapshot = TableManager {
            config: self.table_config.clone(),
            params: TableParams {
                search_text: self.state.search_text.clone(),
                search_min_chars: self.state.search_min_chars,
                sort: self.state.sort.clone(),
            },
            pagination_api: PaginationApi::new(
                self.state.page,
                self.state.page_size,
                self.config.page_sizes.clone(),
                total_pages,
                page_rows.len(),
            ),
            rows_data: RowsData {
                all_rows,
                filtered_rows,
                page_rows,
            },
            rows_api: RowsApi { total_rows },
            row_selection_api: RowSelectionApi {
                selected_rows_ids: self.state.selected_rows_ids.clone(),
            },
            row_edit_api: RowEditApi {
                edit_row: self.state.edit_row.clone(),
            },
            columns_data: ColumnsData {
                columns: self.columns.clone(),
            },
            virtual_window,
            is_loading: self.state.is_loading,
            last_error: self.state.last_error.clone(),
            handlers: self.handle(),
        };
        self.snapshot = Arc::new(snapshot);
        Ok(())
    }

    fn empty_snapshot(
        table_config: &TableConfig,
        state: &TableState,
        config: &GridConfig,
        columns: &Arc<ColumnSet>,
        handlers: GridHandle,
    ) -> TableManager {
        TableManager {
            config: table_config.clone(),
            params: TableParams {
                search_text: String::new(),
                search_min_chars: state.search_min_chars,
                sort: state.sort.clone(),
            },
            rows_data: RowsData::default(),
            rows_api: RowsApi::default(),
            pagination_api: PaginationApi::new(1, state.page_size, config.page_sizes.clone(), 1, 0),
            row_selection_api: RowSelectionApi::default(),
            row_edit_api: RowEditApi::default(),
            columns_data: ColumnsData {
                columns: columns.clone(),
            },
            virtual_window: None,
            is_loading: false,
            last_error: None,
            handlers,
        }
    }

    /// Queue an event; when nobody drains the queue the oldest event is dropped
    fn emit(&self, mut event: GridEvent) {
        loop {
            match self.event_tx.try_send(event) {
                Ok(()) => return,
                Err(TrySendError::Full(rejected)) => {
                    if let Ok(dropped) = self.event_rx.try_recv() {
                        debug!(event = dropped.name(), "Event queue full, dropping oldest event");
                    }
                    event = rejected;
                }
                // The engine holds a receiver itself, so this only happens on teardown
                Err(TrySendError::Disconnected(_)) => {
                    warn!("Grid event channel closed");
                    return;
                }
            }
        }
    }

    fn emit_selection(&self) {
        self.emit(GridEvent::SelectionChanged(self.state.selected_rows_ids.clone()));
    }

    fn emit_page(&self) {
        self.emit(GridEvent::PageChanged {
            page: self.state.page,
            page_size: self.state.page_size,
        });
    }
}

impl std::fmt::Debug for DataTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataTable")
            .field("mode", &self.mode)
            .field("rows", &self.state.rows.len())
            .field("page", &self.state.page)
            .field("pending_request", &self.tracker.pending_range())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::data_table::test_support::{base_columns, rows, table};
    use crate::error::Error;
    use crate::i18n::Locale;
    use crate::services::request_tracker::RequestToken;
    use serde_json::json;

    fn drain(table: &DataTable) -> Vec<GridEvent> {
        table.events().try_iter().collect()
    }

    fn server_table(configure: impl FnOnce(&mut GridConfig)) -> DataTable {
        let mut config = GridConfig {
            locale: Some(Locale::EnUS),
            ..GridConfig::default()
        };
        configure(&mut config);
        DataTable::new(config, base_columns(), DataMode::ServerSide).expect("table")
    }

    fn requests(events: &[GridEvent]) -> Vec<RowsRequest> {
        events
            .iter()
            .filter_map(|event| match event {
                GridEvent::RowsRequested(request) => Some(request.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_search_filters_and_resets_page() {
        let mut table = table(rows(45), base_columns(), |_| {});
        table.dispatch(GridCommand::SetPage(3)).expect("page");
        assert_eq!(table.table_manager().pagination_api.page, 3);

        table
            .dispatch(GridCommand::SetSearchText("user1".into()))
            .expect("search");
        let tm = table.table_manager();
        assert_eq!(tm.pagination_api.page, 1);
        assert_eq!(tm.rows_api.total_rows, 10);
        assert_eq!(tm.rows_data.all_rows.len(), 45);
    }

    #[test]
    fn test_search_below_min_chars_keeps_rows() {
        let mut table = table(rows(10), base_columns(), |config| config.search_min_chars = 3);
        table.dispatch(GridCommand::SetSearchText("ab".into())).expect("search");
        assert_eq!(table.table_manager().rows_api.total_rows, 10);
    }

    #[test]
    fn test_toggle_sort_cycles() {
        let mut table = table(rows(3), base_columns(), |_| {});
        let name = ColumnId::from("name");

        table.dispatch(GridCommand::ToggleSort(name.clone())).expect("asc");
        assert_eq!(table.table_manager().params.sort, SortSpec::asc("name"));
        table.dispatch(GridCommand::ToggleSort(name.clone())).expect("desc");
        let tm = table.table_manager();
        assert_eq!(tm.params.sort, SortSpec::desc("name"));
        assert_eq!(tm.rows_data.page_rows[0].id, RowId::from(3u64));
        table.dispatch(GridCommand::ToggleSort(name)).expect("off");
        assert_eq!(table.table_manager().params.sort, SortSpec::none());
    }

    #[test]
    fn test_sort_on_unknown_column_fails_fast() {
        let mut table = table(rows(3), base_columns(), |_| {});
        let err = table
            .dispatch(GridCommand::SetSort(SortSpec::asc("missing")))
            .expect_err("unknown column");
        assert!(matches!(err, Error::UnknownColumn { .. }));

        let config = GridConfig {
            initial_sort: SortSpec::asc("missing"),
            ..GridConfig::default()
        };
        let err = DataTable::new(config, base_columns(), DataMode::ClientSide).expect_err("setup");
        assert!(matches!(err, Error::UnknownColumn { .. }));
    }

    #[test]
    fn test_sort_on_unsortable_column_is_ignored() {
        let mut table = table(rows(3), base_columns(), |_| {});
        table
            .dispatch(GridCommand::SetSort(SortSpec::asc("checkbox")))
            .expect("no-op");
        assert_eq!(table.table_manager().params.sort, SortSpec::none());
    }

    #[test]
    fn test_selection_commands() {
        let mut table = table(rows(45), base_columns(), |_| {});
        table
            .dispatch(GridCommand::ToggleRowSelection(RowId::from(2u64)))
            .expect("toggle");
        table.dispatch(GridCommand::ToggleAllPageRows).expect("all");
        assert_eq!(table.table_manager().row_selection_api.selected_count(), 20);
        table.dispatch(GridCommand::ToggleAllPageRows).expect("none");
        assert_eq!(table.table_manager().row_selection_api.selected_count(), 0);

        let err = table
            .dispatch(GridCommand::ToggleRowSelection(RowId::from("nope")))
            .expect_err("unknown row");
        assert!(matches!(err, Error::UnknownRow { .. }));
    }

    #[test]
    fn test_edit_and_save_flow() {
        let mut table = table(rows(3), base_columns(), |_| {});
        table
            .dispatch(GridCommand::SetEditRow(Some(RowId::from(1u64))))
            .expect("edit");
        table
            .dispatch(GridCommand::UpdateEditDraft {
                field: "name".into(),
                value: json!("renamed"),
            })
            .expect("draft");

        let tm = table.table_manager();
        let draft = tm.row_edit_api.edit_row.clone().expect("edit row").draft;
        assert_eq!(tm.rows_data.all_rows[0].get("name"), Some(&json!("user01")));

        let mut saved = tm.rows_data.all_rows.as_ref().clone();
        saved[0] = draft;
        table.dispatch(GridCommand::SetRows(saved)).expect("save");
        table.dispatch(GridCommand::SetEditRow(None)).expect("leave");

        let tm = table.table_manager();
        assert!(tm.row_edit_api.edit_row.is_none());
        assert_eq!(tm.rows_data.all_rows[0].get("name"), Some(&json!("renamed")));
    }

    #[test]
    fn test_hidden_columns_and_toggle_visibility() {
        let mut table = table(rows(3), base_columns(), |config| {
            config.hidden_columns = vec!["name".into()];
        });
        assert_eq!(table.table_manager().columns_data.visible().count(), 2);
        drain(&table);

        table
            .dispatch(GridCommand::ToggleColumnVisibility(ColumnId::from("name")))
            .expect("toggle");
        assert_eq!(table.table_manager().columns_data.visible().count(), 3);
        assert!(matches!(
            drain(&table).as_slice(),
            [GridEvent::ColumnVisibilityChanged { visible: true, .. }]
        ));
    }

    #[test]
    fn test_page_size_change() {
        let mut table = table(rows(45), base_columns(), |_| {});
        table.dispatch(GridCommand::SetPage(2)).expect("page");
        table.dispatch(GridCommand::SetPageSize(50)).expect("size");
        let tm = table.table_manager();
        assert_eq!(tm.pagination_api.page, 1);
        assert_eq!(tm.pagination_api.total_pages, 1);
        assert_eq!(tm.pagination_api.page_row_count(), 45);
        assert!(table.dispatch(GridCommand::SetPageSize(0)).is_err());
    }

    #[test]
    fn test_pump_applies_commands_in_order() {
        let mut table = table(rows(45), base_columns(), |_| {});
        let handle = table.handle();
        handle.set_page(3).expect("send");
        handle.handle_search_change("user").expect("send");
        assert!(table.has_pending_commands());
        assert_eq!(table.pump().expect("pump"), 2);
        assert_eq!(table.table_manager().pagination_api.page, 1);
    }

    #[test]
    fn test_virtual_window_follows_scroll() {
        let mut table = table(rows(100), base_columns(), |config| {
            config.is_paginated = false;
            config.is_virtual_scrolling = true;
            config.overscan = 0;
        });
        table
            .dispatch(GridCommand::Scroll {
                offset: 500.0,
                viewport_height: 200.0,
            })
            .expect("scroll");
        let window = table.table_manager().virtual_window.expect("window");
        assert_eq!(window.range, RowsRange::new(10, 14));
        assert_eq!(table.table_manager().rendered_rows().count(), 4);
    }

    #[test]
    fn test_scroll_far_past_end_is_clamped() {
        let mut table = table(rows(100), base_columns(), |config| {
            config.is_paginated = false;
            config.is_virtual_scrolling = true;
            config.overscan = 0;
        });
        table
            .dispatch(GridCommand::Scroll {
                offset: 1e30,
                viewport_height: 200.0,
            })
            .expect("scroll");
        let tm = table.table_manager();
        let window = tm.virtual_window.expect("window");
        assert_eq!(window.range, RowsRange::new(96, 100));
        assert_eq!(window.bottom_spacer, 0.0);
        assert_eq!(tm.rendered_rows().last().map(|(i, _)| i), Some(99));
    }

    #[test]
    fn test_server_side_scroll_far_past_end_requests_within_total() {
        let mut table = server_table(|config| {
            config.is_paginated = false;
            config.is_virtual_scrolling = true;
        });
        let first = requests(&drain(&table)).remove(0);
        table
            .dispatch(GridCommand::RowsLoaded {
                token: first.token,
                rows: rows(45)[0..20].to_vec(),
                total_rows: 45,
            })
            .expect("loaded");
        drain(&table);

        table
            .dispatch(GridCommand::Scroll {
                offset: f32::MAX,
                viewport_height: 200.0,
            })
            .expect("scroll");
        let next = requests(&drain(&table));
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].range, RowsRange::new(20, 45));
    }

    #[test]
    fn test_undrained_events_stay_bounded_and_share_rows() {
        let mut table = table(rows(50), base_columns(), |_| {});
        for round in 0..EVENT_QUEUE_CAPACITY {
            table
                .dispatch(GridCommand::SetSearchText(format!("user{}", round % 7)))
                .expect("search");
            table.dispatch(GridCommand::SetRows(rows(50))).expect("rows");
        }

        let events = drain(&table);
        assert_eq!(events.len(), EVENT_QUEUE_CAPACITY);
        let tm = table.table_manager();
        let last_rows = events
            .iter()
            .rev()
            .find_map(|event| match event {
                GridEvent::RowsChanged(rows) => Some(rows.clone()),
                _ => None,
            })
            .expect("rows changed");
        assert!(Arc::ptr_eq(&last_rows, &tm.rows_data.all_rows));
    }

    #[test]
    fn test_server_side_requests_first_page() {
        let table = server_table(|_| {});
        let events = drain(&table);
        let requests = requests(&events);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].range, RowsRange::new(0, 20));
        assert!(table.table_manager().is_loading);
    }

    #[test]
    fn test_server_side_appends_pages() {
        let mut table = server_table(|_| {});
        let first = requests(&drain(&table)).remove(0);
        let page: Vec<Row> = rows(45)[0..20].to_vec();
        table
            .dispatch(GridCommand::RowsLoaded {
                token: first.token,
                rows: page,
                total_rows: 45,
            })
            .expect("loaded");
        assert!(!table.table_manager().is_loading);
        assert_eq!(table.table_manager().rows_api.total_rows, 45);

        drain(&table);
        table.dispatch(GridCommand::SetPage(2)).expect("page");
        let second = requests(&drain(&table));
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].range, RowsRange::new(20, 40));
    }

    #[test]
    fn test_server_side_search_resets_and_rerequests() {
        let mut table = server_table(|_| {});
        let first = requests(&drain(&table)).remove(0);
        table
            .dispatch(GridCommand::RowsLoaded {
                token: first.token,
                rows: rows(20),
                total_rows: 45,
            })
            .expect("loaded");
        drain(&table);

        table
            .dispatch(GridCommand::SetSearchText("user1".into()))
            .expect("search");
        let events = drain(&table);
        assert!(events.iter().any(|e| matches!(e, GridEvent::RowsReset)));
        let request = requests(&events).remove(0);
        assert_eq!(request.range, RowsRange::new(0, 20));
        assert_eq!(request.params.search_text, "user1");
        assert!(table.table_manager().rows_data.all_rows.is_empty());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut table = server_table(|_| {});
        let stale = requests(&drain(&table)).remove(0);
        table
            .dispatch(GridCommand::SetSort(SortSpec::desc("name")))
            .expect("sort");
        let current = requests(&drain(&table)).remove(0);
        assert!(current.token > stale.token);

        table
            .dispatch(GridCommand::RowsLoaded {
                token: stale.token,
                rows: rows(20),
                total_rows: 45,
            })
            .expect("stale");
        assert!(table.table_manager().rows_data.all_rows.is_empty());
        assert!(table.table_manager().is_loading);

        table
            .dispatch(GridCommand::RowsLoaded {
                token: current.token,
                rows: rows(20),
                total_rows: 45,
            })
            .expect("current");
        assert_eq!(table.table_manager().rows_data.all_rows.len(), 20);
    }

    #[test]
    fn test_failed_request_is_not_retried_automatically() {
        let mut table = server_table(|_| {});
        let request = requests(&drain(&table)).remove(0);
        table
            .dispatch(GridCommand::RowsFailed {
                token: request.token,
                message: "boom".into(),
            })
            .expect("failed");
        let tm = table.table_manager();
        assert_eq!(tm.last_error.as_deref(), Some("boom"));
        assert!(!tm.is_loading);
        assert!(requests(&drain(&table)).is_empty());

        table
            .dispatch(GridCommand::RowsFailed {
                token: RequestToken(99),
                message: "late".into(),
            })
            .expect("stale failure");
        assert_eq!(table.table_manager().last_error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_server_side_short_search_does_not_refetch() {
        let mut table = server_table(|_| {});
        drain(&table);
        table.dispatch(GridCommand::SetSearchText("u".into())).expect("search");
        let events = drain(&table);
        assert!(!events.iter().any(|e| matches!(e, GridEvent::RowsReset)));
        assert!(requests(&events).is_empty());
    }
}
