//! Server-Side Story
//!
//! The grid asks for pages as it needs them and a mocked backend answers after a
//! delay, searching and sorting on its side.

use std::time::Duration;

use super::columns::base_columns;
use super::mock_data::mock_rows;
use crate::components::composite::data_table::{DataMode, DataTable, InMemoryRowsProvider};
use crate::constants::DEMO_FETCH_DELAY_MS;
use crate::domain::GridConfig;
use crate::error::Result;
use crate::eventing::{GridCommand, GridEvent};
use crate::services::{RowsService, drive_until_idle};

pub struct ServerSideStory {
    pub table: DataTable,
    service: RowsService<InMemoryRowsProvider>,
}

impl ServerSideStory {
    /// Build the grid against a backend of `row_count` users and load the first page
    pub async fn start(config: GridConfig, row_count: usize) -> Result<Self> {
        let columns = base_columns(config.locale())?;
        let mut table = DataTable::new(config, columns, DataMode::ServerSide)?;
        let provider = InMemoryRowsProvider::new(mock_rows(row_count)?)?
            .with_latency(Duration::from_millis(DEMO_FETCH_DELAY_MS));
        let mut service = RowsService::new(provider, table.handle());

        drive_until_idle(&mut table, &mut service).await?;
        Ok(Self { table, service })
    }

    /// Send commands through the handle and wait until every triggered fetch settled
    pub async fn run(
        &mut self,
        commands: impl IntoIterator<Item = GridCommand>,
    ) -> Result<Vec<GridEvent>> {
        self.table.handle().send_all(commands)?;
        drive_until_idle(&mut self.table, &mut self.service).await
    }
}
