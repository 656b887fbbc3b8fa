//! Rows Service
//!
//! Host-side driver for server-side mode. Answers `RowsRequested` events by running
//! the provider on tokio and feeding the result back through the grid handle, and
//! aborts in-flight fetches when the grid resets its rows.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::components::composite::data_table::{DataTable, RowsProvider};
use crate::constants::{DRIVER_MAX_TICKS, DRIVER_TICK_MS};
use crate::error::{Error, Result};
use crate::eventing::{GridCommand, GridEvent, GridHandle, RowsRequest};
use crate::services::request_tracker::RequestToken;
use crate::services::runtime::spawn_named_in_tokio;

pub struct RowsService<P: RowsProvider> {
    provider: Arc<P>,
    handle: GridHandle,
    in_flight: Vec<(RequestToken, JoinHandle<()>)>,
}

impl<P: RowsProvider> RowsService<P> {
    pub fn new(provider: P, handle: GridHandle) -> Self {
        Self {
            provider: Arc::new(provider),
            handle,
            in_flight: Vec::new(),
        }
    }

    /// React to one grid event; other events are ignored
    pub fn handle_event(&mut self, event: &GridEvent) -> Result<()> {
        match event {
            GridEvent::RowsRequested(request) => self.fetch(request.clone())?,
            GridEvent::RowsReset => self.abort_all(),
            _ => {}
        }
        self.in_flight.retain(|(_, task)| !task.is_finished());
        Ok(())
    }

    fn fetch(&mut self, request: RowsRequest) -> Result<()> {
        let token = request.token;
        let provider = self.provider.clone();
        let handle = self.handle.clone();

        let task = spawn_named_in_tokio("rows_fetch", async move {
            let command = match provider.fetch_rows(request).await {
                Ok(page) => GridCommand::RowsLoaded {
                    token,
                    rows: page.rows,
                    total_rows: page.total_rows,
                },
                Err(e) => GridCommand::RowsFailed {
                    token,
                    message: e.to_string(),
                },
            };
            if let Err(e) = handle.send(command) {
                warn!(token = %token, error = %e, "Dropping rows response");
            }
        })?;
        self.in_flight.push((token, task));
        Ok(())
    }

    /// Abort every fetch that has not finished yet
    pub fn abort_all(&mut self) {
        for (token, task) in self.in_flight.drain(..) {
            if !task.is_finished() {
                debug!(token = %token, "Aborting rows fetch");
                task.abort();
            }
        }
    }

    /// Whether no fetch is running
    pub fn is_idle(&mut self) -> bool {
        self.in_flight.retain(|(_, task)| !task.is_finished());
        self.in_flight.is_empty()
    }
}

impl<P: RowsProvider> Drop for RowsService<P> {
    fn drop(&mut self) {
        self.abort_all();
    }
}

/// Pump the table and serve its events until nothing is left to do.
///
/// Returns every event seen along the way, in order.
pub async fn drive_until_idle<P: RowsProvider>(
    table: &mut DataTable,
    service: &mut RowsService<P>,
) -> Result<Vec<GridEvent>> {
    let events = table.events();
    let mut seen = Vec::new();

    for _ in 0..DRIVER_MAX_TICKS {
        table.pump()?;
        for event in events.try_iter() {
            service.handle_event(&event)?;
            seen.push(event);
        }
        if service.is_idle() && !table.has_pending_commands() && events.is_empty() {
            return Ok(seen);
        }
        tokio::time::sleep(Duration::from_millis(DRIVER_TICK_MS)).await;
    }

    Err(Error::Fetch {
        message: format!("rows service still busy after {DRIVER_MAX_TICKS} ticks"),
    })
}
