//! RowsProvider Trait
//!
//! Abstraction for the host's data source in server-side mode, plus an in-memory
//! implementation that answers requests with the same search/sort/slice rules the
//! engine applies client-side.

use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::debug;

use crate::domain::Row;
use crate::domain::row::ensure_unique_ids;
use crate::error::Result;
use crate::eventing::RowsRequest;
use crate::services::query::run_query;

/// One answered rows request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowsPage {
    /// Rows of the requested range
    pub rows: Vec<Row>,
    /// Size of the whole filtered set
    pub total_rows: usize,
}

/// Trait for fetching rows on demand
pub trait RowsProvider: Send + Sync + 'static {
    /// Answer a rows request
    fn fetch_rows(&self, request: RowsRequest) -> BoxFuture<'static, Result<RowsPage>>;
}

/// In-memory rows provider with optional simulated latency
#[derive(Debug, Clone)]
pub struct InMemoryRowsProvider {
    rows: Arc<Vec<Row>>,
    latency: Option<Duration>,
}

impl InMemoryRowsProvider {
    /// Create a provider over a row set; ids must be unique
    pub fn new(rows: Vec<Row>) -> Result<Self> {
        ensure_unique_ids(&rows)?;
        Ok(Self {
            rows: Arc::new(rows),
            latency: None,
        })
    }

    /// Delay every answer by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// The whole row set after the simulated latency, for client-side hosts
    pub async fn load_all(&self) -> Vec<Row> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        self.rows.as_ref().clone()
    }
}

impl RowsProvider for InMemoryRowsProvider {
    fn fetch_rows(&self, request: RowsRequest) -> BoxFuture<'static, Result<RowsPage>> {
        let rows = self.rows.clone();
        let latency = self.latency;
        async move {
            if let Some(latency) = latency {
                tokio::time::sleep(latency).await;
            }
            let result = run_query(&rows, &request.columns, &request.params, request.range)?;
            debug!(
                token = %request.token,
                from = request.range.from,
                to = request.range.to,
                returned = result.rows.len(),
                total = result.total_rows,
                "Answered rows request"
            );
            Ok(RowsPage {
                rows: result.rows,
                total_rows: result.total_rows,
            })
        }
        .boxed()
    }
}
