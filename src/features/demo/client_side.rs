//! Client-Side Story
//!
//! The host loads every user once, after a simulated delay, and the grid does the
//! searching, sorting and paging itself.

use std::time::Duration;

use tracing::info;

use super::columns::base_columns;
use super::mock_data::mock_rows;
use crate::components::composite::data_table::{DataMode, DataTable, InMemoryRowsProvider};
use crate::constants::DEMO_FETCH_DELAY_MS;
use crate::domain::GridConfig;
use crate::error::Result;
use crate::eventing::GridCommand;

pub struct ClientSideStory {
    pub table: DataTable,
}

impl ClientSideStory {
    /// Build the grid, show the loading state, then hand over `row_count` users
    pub async fn start(config: GridConfig, row_count: usize) -> Result<Self> {
        let columns = base_columns(config.locale())?;
        let mut table = DataTable::new(config, columns, DataMode::ClientSide)?;
        let handle = table.handle();

        handle.set_loading(true)?;
        table.pump()?;

        let provider = InMemoryRowsProvider::new(mock_rows(row_count)?)?
            .with_latency(Duration::from_millis(DEMO_FETCH_DELAY_MS));
        let rows = provider.load_all().await;
        info!(count = rows.len(), "Client-side rows loaded");

        handle.on_rows_change(rows)?;
        table.pump()?;
        Ok(Self { table })
    }

    /// Apply commands in order, as a user clicking through the views would
    pub fn run(&mut self, commands: impl IntoIterator<Item = GridCommand>) -> Result<()> {
        for command in commands {
            self.table.dispatch(command)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SortSpec;
    use crate::i18n::Locale;

    fn config() -> GridConfig {
        GridConfig {
            locale: Some(Locale::EnUS),
            ..GridConfig::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_rows_arrive_after_delay() {
        let story = ClientSideStory::start(config(), 45).await.expect("story");
        let tm = story.table.table_manager();
        assert!(!tm.is_loading);
        assert_eq!(tm.rows_api.total_rows, 45);
        assert_eq!(tm.pagination_api.total_pages, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sort_by_last_visited() {
        let mut story = ClientSideStory::start(config(), 45).await.expect("story");
        story
            .run([GridCommand::SetSort(SortSpec::asc(8u32))])
            .expect("sort");

        let tm = story.table.table_manager();
        let keys: Vec<String> = tm
            .rows_data
            .filtered_rows
            .iter()
            .filter_map(|row| row.get("last_visited").and_then(|v| v.as_str()))
            .map(|date| date.split('/').rev().collect::<Vec<_>>().join("/"))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}
