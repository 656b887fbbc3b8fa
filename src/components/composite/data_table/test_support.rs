//! Shared fixtures for the data table tests

use serde_json::json;

use super::column::{Column, ColumnSet};
use super::data_table::{DataMode, DataTable};
use crate::domain::{GridConfig, Row, RowId};
use crate::eventing::GridCommand;
use crate::i18n::Locale;
use crate::services::search::contains_ignore_case;
use crate::state::table_manager::TableManager;

/// Rows `1..=count` with a `name` of `userNN`
pub(crate) fn rows(count: usize) -> Vec<Row> {
    (1..=count)
        .map(|i| Row::from_json(json!({"id": i, "name": format!("user{i:02}")}), i).expect("row"))
        .collect()
}

/// Selection, id and name columns
pub(crate) fn base_columns() -> ColumnSet {
    ColumnSet::try_new(
        vec![
            Column::checkbox(),
            Column::with_field("id", "id"),
            Column::with_field("name", "name"),
        ],
        contains_ignore_case(),
    )
    .expect("columns")
}

/// Client-side table holding `rows`, English texts
pub(crate) fn table(rows: Vec<Row>, columns: ColumnSet, configure: impl FnOnce(&mut GridConfig)) -> DataTable {
    let mut config = GridConfig {
        locale: Some(Locale::EnUS),
        ..GridConfig::default()
    };
    configure(&mut config);
    let mut table = DataTable::new(config, columns, DataMode::ClientSide).expect("table");
    table.dispatch(GridCommand::SetRows(rows)).expect("rows");
    table
}

pub(crate) fn manager(rows: Vec<Row>, configure: impl FnOnce(&mut GridConfig)) -> TableManager {
    table(rows, base_columns(), configure).table_manager().as_ref().clone()
}

pub(crate) fn manager_with_columns(
    rows: Vec<Row>,
    columns: Vec<Column>,
    configure: impl FnOnce(&mut GridConfig),
) -> TableManager {
    let columns = ColumnSet::try_new(columns, contains_ignore_case()).expect("columns");
    table(rows, columns, configure).table_manager().as_ref().clone()
}

impl TableManager {
    /// Same snapshot with a different selection
    pub(crate) fn with_selection(mut self, ids: Vec<RowId>) -> Self {
        self.row_selection_api.selected_rows_ids = ids;
        self
    }
}
